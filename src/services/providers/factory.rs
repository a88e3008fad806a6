//! Provider construction from a type tag.

use super::discord_provider::DiscordProvider;
use super::provider::WebhookProvider;
use super::slack_provider::SlackProvider;
use crate::error::AppResult;
use crate::external::client::HTTP_CLIENT;
use crate::models::{ProviderType, WebhookConfig};

/// Creates the provider for a stored type tag, bound to `webhook_url`
///
/// The tag must match exactly; anything else fails with
/// [`AppError::UnsupportedProvider`](crate::error::AppError::UnsupportedProvider)
/// rather than falling back to a default provider.
pub fn create_webhook_provider(
    provider_type: &str,
    webhook_url: &str,
) -> AppResult<Box<dyn WebhookProvider>> {
    let provider_type: ProviderType = provider_type.parse()?;
    Ok(provider_for(provider_type, webhook_url, HTTP_CLIENT.clone()))
}

/// Creates the provider for an already-validated type
pub fn provider_for(
    provider_type: ProviderType,
    webhook_url: impl Into<String>,
    client: reqwest::Client,
) -> Box<dyn WebhookProvider> {
    match provider_type {
        ProviderType::Slack => Box::new(SlackProvider::with_client(webhook_url, client)),
        ProviderType::Discord => Box::new(DiscordProvider::with_client(webhook_url, client)),
    }
}

/// Creates the provider described by a resolved configuration
pub fn provider_from_config(
    config: &WebhookConfig,
    client: reqwest::Client,
) -> Box<dyn WebhookProvider> {
    provider_for(config.provider_type(), config.webhook_url(), client)
}
