use std::process::ExitCode;

use clap::Parser;
use pagehook::cli::{Cli, execute_command, init_logger_from_settings, load_and_merge_config};
use pagehook::services::failure_message;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let settings = load_and_merge_config(&cli)?;
    init_logger_from_settings(&settings)?;

    tracing::debug!(
        application = %settings.application.banner(),
        store = %settings.store.path,
        "Starting"
    );

    match execute_command(&cli, settings).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("{}", failure_message(&e));
            Ok(ExitCode::FAILURE)
        }
    }
}
