//! CLI entry point.
//!
//! Logging and environment are set up here; everything else is wired by
//! `bootstrap` and dispatched to handlers.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use helmet_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

const VERBOSE_FILTER: &str = "helmet_cli=debug,helmet_core=debug,helmet_storage=debug";

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { VERBOSE_FILTER } else { "warn" })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let Some(command) = cli.command else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = CliConfig::resolve(cli.storage, cli.data_dir)
        .map_err(|e| CliError::Config(format!("{e:#}")))?;

    match command {
        Commands::Paths => {
            handlers::paths::execute(&config);
        }
        Commands::Settings { command } => {
            let ctx = bootstrap(config)
                .await
                .map_err(|e| CliError::Storage(format!("{e:#}")))?;
            handlers::settings::execute(&ctx, command).await?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables before parsing so env-backed flags see them
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(1))
        }
    }
}
