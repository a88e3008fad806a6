//! Resolution of stored settings into an effective webhook configuration.
//!
//! Installs from before provider types existed stored only `slackWebhookUrl`.
//! Each field falls back independently:
//!
//! | field          | first choice        | fallback           |
//! |----------------|---------------------|--------------------|
//! | webhook url    | `webhookUrl`        | `slackWebhookUrl`  |
//! | provider type  | `webhookType`       | `"slack"`          |
//! | format style   | `loggingFormatType` | `"markdown"`       |
//!
//! Empty strings count as absent. Saving writes the legacy key as well
//! whenever the provider is Slack, so older readers keep working.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::models::{FormatStyle, ProviderType, StoredSettings, WebhookConfig};

pub const DEFAULT_PROVIDER_TYPE: &str = "slack";
pub const DEFAULT_FORMAT_STYLE: &str = "markdown";

/// Effective settings before validation
///
/// Tags are kept as raw strings so that an unknown provider type can be
/// reported with its stored value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedSettings {
    pub webhook_url: Option<String>,
    pub provider_type: String,
    pub format_style: String,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Derives the effective settings from a raw store record
///
/// Pure; resolving an already-migrated record returns the same values.
pub fn resolve_config(stored: &StoredSettings) -> ResolvedSettings {
    let webhook_url = non_empty(&stored.webhook_url)
        .or_else(|| non_empty(&stored.slack_webhook_url))
        .map(str::to_string);

    ResolvedSettings {
        webhook_url,
        provider_type: non_empty(&stored.webhook_type)
            .unwrap_or(DEFAULT_PROVIDER_TYPE)
            .to_string(),
        format_style: non_empty(&stored.logging_format_type)
            .unwrap_or(DEFAULT_FORMAT_STYLE)
            .to_string(),
    }
}

impl ResolvedSettings {
    /// Validates into a [`WebhookConfig`]
    ///
    /// # Errors
    /// - [`AppError::Unconfigured`] when no URL was resolved
    /// - [`AppError::UnsupportedProvider`] for an unknown type tag
    /// - [`AppError::InvalidUrl`] when the URL does not parse
    ///
    /// An unknown format style is accepted and formats to an empty message.
    pub fn into_webhook_config(self) -> AppResult<WebhookConfig> {
        let webhook_url = self.webhook_url.ok_or(AppError::Unconfigured)?;
        let provider_type: ProviderType = self.provider_type.parse()?;
        let format_style = FormatStyle::from_stored(&self.format_style);

        WebhookConfig::new(provider_type, webhook_url, format_style)
    }

    /// Store record carrying these values, legacy key included for Slack
    pub fn to_stored(&self) -> StoredSettings {
        let slack_webhook_url = if self.provider_type == ProviderType::Slack.as_str() {
            self.webhook_url.clone()
        } else {
            None
        };

        StoredSettings {
            webhook_type: Some(self.provider_type.clone()),
            webhook_url: self.webhook_url.clone(),
            logging_format_type: Some(self.format_style.clone()),
            short_description: None,
            slack_webhook_url,
        }
    }
}

/// Store record written when saving a configuration
pub fn persisted_settings(
    config: &WebhookConfig,
    short_description: Option<String>,
) -> StoredSettings {
    let resolved = ResolvedSettings {
        webhook_url: Some(config.webhook_url().to_string()),
        provider_type: config.provider_type().as_str().to_string(),
        format_style: config.format_style().as_str().to_string(),
    };

    StoredSettings {
        short_description,
        ..resolved.to_stored()
    }
}
