//! Command executor for dispatching CLI commands

use super::handlers::{
    ConfigureCommandHandler, PreviewCommandHandler, SendCommandHandler, ShowCommandHandler,
};
use super::parser::{Cli, Commands};
use crate::config::Settings;
use crate::error::AppResult;
use crate::external::client::build_http_client;
use crate::models::PageContext;
use crate::services::{OptionsForm, OptionsService, ShareService};
use crate::storage::SettingsStore;

/// Execute a CLI command with the given settings
///
/// # Errors
/// Returns the handler's error; the caller reports it and exits non-zero
pub async fn execute_command(cli: &Cli, settings: Settings) -> AppResult<()> {
    let store = SettingsStore::new(settings.store.path_buf());

    match &cli.command {
        Commands::Send { title, url } => {
            let client = build_http_client(&settings.http)?;
            SendCommandHandler::new(ShareService::new(store, client))
                .execute(PageContext::new(title.clone(), url.clone()))
                .await
        }
        Commands::Configure {
            webhook_type,
            url,
            format,
            description,
        } => {
            let form = OptionsForm {
                webhook_type: webhook_type.clone(),
                webhook_url: url.clone(),
                short_description: description.clone(),
                logging_format_type: format.clone(),
            };
            ConfigureCommandHandler::new(OptionsService::new(store))
                .execute(form)
                .await
        }
        Commands::Show { reveal } => ShowCommandHandler::new(store).execute(*reveal).await,
        Commands::Preview {
            title,
            url,
            webhook_type,
            format,
        } => {
            let client = build_http_client(&settings.http)?;
            PreviewCommandHandler::new(ShareService::new(store, client))
                .execute(
                    PageContext::new(title.clone(), url.clone()),
                    webhook_type.as_deref(),
                    format.as_deref(),
                )
                .await
        }
    }
}
