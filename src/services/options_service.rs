//! Options service: reading and saving webhook settings.
//!
//! Loading shows what the user configured, migrating a Slack-only legacy
//! record for display. Saving validates the URL before anything is written.

use serde::Serialize;

use super::legacy::persisted_settings;
use crate::error::AppResult;
use crate::models::{FormatStyle, ProviderType, WebhookConfig, parse_webhook_url};
use crate::storage::SettingsStore;

/// Settings as presented for editing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionsView {
    pub webhook_type: Option<String>,
    pub webhook_url: Option<String>,
    pub short_description: Option<String>,
    pub logging_format_type: Option<String>,
    /// True when the URL came from the legacy `slackWebhookUrl` key
    pub migrated_from_legacy: bool,
}

/// Raw values submitted for saving
#[derive(Debug, Clone, Default)]
pub struct OptionsForm {
    pub webhook_type: String,
    pub webhook_url: String,
    pub short_description: Option<String>,
    pub logging_format_type: Option<String>,
}

#[derive(Debug, Clone)]
pub struct OptionsService {
    store: SettingsStore,
}

impl OptionsService {
    pub fn new(store: SettingsStore) -> Self {
        Self { store }
    }

    /// Loads the settings for display
    ///
    /// A legacy record (`slackWebhookUrl` set, `webhookUrl` absent) is shown
    /// as a Slack webhook with the legacy URL.
    pub async fn load(&self) -> AppResult<OptionsView> {
        let stored = self.store.load_settings().await?;

        let legacy_only = stored.slack_webhook_url.as_deref().is_some_and(|u| !u.is_empty())
            && stored.webhook_url.as_deref().is_none_or(str::is_empty);

        let (webhook_type, webhook_url) = if legacy_only {
            (
                Some(ProviderType::Slack.as_str().to_string()),
                stored.slack_webhook_url,
            )
        } else {
            (stored.webhook_type, stored.webhook_url)
        };

        Ok(OptionsView {
            webhook_type,
            webhook_url,
            short_description: stored.short_description,
            logging_format_type: stored.logging_format_type,
            migrated_from_legacy: legacy_only,
        })
    }

    /// Validates and saves the submitted settings
    ///
    /// Inputs are trimmed. The URL is checked first; on any error the store is
    /// left untouched. A missing format defaults to markdown.
    ///
    /// # Errors
    /// - [`AppError::InvalidUrl`](crate::error::AppError::InvalidUrl)
    /// - [`AppError::UnsupportedProvider`](crate::error::AppError::UnsupportedProvider)
    /// - [`AppError::InvalidFormatStyle`](crate::error::AppError::InvalidFormatStyle)
    pub async fn save(&self, form: OptionsForm) -> AppResult<WebhookConfig> {
        let webhook_url = form.webhook_url.trim();
        parse_webhook_url(webhook_url)?;

        let provider_type: ProviderType = form.webhook_type.trim().parse()?;
        let format_style = match form.logging_format_type.as_deref().map(str::trim) {
            Some(style) if !style.is_empty() => style.parse()?,
            _ => FormatStyle::default(),
        };
        let short_description = form
            .short_description
            .map(|d| d.trim().to_string());

        let config = WebhookConfig::new(provider_type, webhook_url, format_style)?;
        self.store
            .save_settings(&persisted_settings(&config, short_description))
            .await?;

        tracing::info!(
            provider = %config.provider_type(),
            host = %config.webhook_host(),
            format = %config.format_style(),
            "Webhook settings saved"
        );

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::StoredSettings;
    use crate::services::legacy::resolve_config;
    use tempfile::TempDir;

    fn service(dir: &TempDir) -> OptionsService {
        OptionsService::new(SettingsStore::new(dir.path().join("settings.json")))
    }

    fn form(webhook_type: &str, webhook_url: &str) -> OptionsForm {
        OptionsForm {
            webhook_type: webhook_type.to_string(),
            webhook_url: webhook_url.to_string(),
            short_description: Some("  reading list ".to_string()),
            logging_format_type: Some("simple".to_string()),
        }
    }

    #[tokio::test]
    async fn test_load_migrates_legacy_record() {
        let dir = TempDir::new().unwrap();
        let store = SettingsStore::new(dir.path().join("settings.json"));
        store
            .save_settings(&StoredSettings {
                slack_webhook_url: Some("https://hooks.slack.com/old".to_string()),
                logging_format_type: Some("url-only".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        let view = OptionsService::new(store).load().await.unwrap();
        assert!(view.migrated_from_legacy);
        assert_eq!(view.webhook_type.as_deref(), Some("slack"));
        assert_eq!(view.webhook_url.as_deref(), Some("https://hooks.slack.com/old"));
        assert_eq!(view.logging_format_type.as_deref(), Some("url-only"));
    }

    #[tokio::test]
    async fn test_save_slack_writes_legacy_key() {
        let dir = TempDir::new().unwrap();
        let service = service(&dir);

        let config = service
            .save(form(" slack ", " https://hooks.slack.com/services/T/B/X "))
            .await
            .unwrap();
        assert_eq!(config.webhook_url(), "https://hooks.slack.com/services/T/B/X");

        let stored = service.store.load_settings().await.unwrap();
        assert_eq!(stored.webhook_type.as_deref(), Some("slack"));
        assert_eq!(stored.logging_format_type.as_deref(), Some("simple"));
        assert_eq!(stored.short_description.as_deref(), Some("reading list"));
        assert_eq!(
            stored.slack_webhook_url.as_deref(),
            Some("https://hooks.slack.com/services/T/B/X")
        );

        let view = service.load().await.unwrap();
        assert!(!view.migrated_from_legacy);
    }

    #[tokio::test]
    async fn test_save_discord_round_trips_through_resolution() {
        let dir = TempDir::new().unwrap();
        let service = service(&dir);

        service
            .save(form("discord", "https://discord.com/api/webhooks/1/abc"))
            .await
            .unwrap();

        let stored = service.store.load_settings().await.unwrap();
        assert!(stored.slack_webhook_url.is_none());

        let config = resolve_config(&stored).into_webhook_config().unwrap();
        assert_eq!(config.provider_type(), ProviderType::Discord);
        assert_eq!(config.format_style(), &FormatStyle::Simple);
    }

    #[tokio::test]
    async fn test_invalid_url_leaves_store_untouched() {
        let dir = TempDir::new().unwrap();
        let service = service(&dir);

        let err = service.save(form("slack", "not a url")).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidUrl { .. }));
        assert_eq!(
            service.store.load_settings().await.unwrap(),
            StoredSettings::default()
        );
    }

    #[tokio::test]
    async fn test_save_rejects_unknown_type_and_style() {
        let dir = TempDir::new().unwrap();
        let service = service(&dir);

        let err = service.save(form("teams", "https://x/y")).await.unwrap_err();
        assert!(matches!(err, AppError::UnsupportedProvider { value } if value == "teams"));

        let mut bad_style = form("slack", "https://x/y");
        bad_style.logging_format_type = Some("fancy".to_string());
        let err = service.save(bad_style).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidFormatStyle { .. }));
    }

    #[tokio::test]
    async fn test_save_defaults_format_to_markdown() {
        let dir = TempDir::new().unwrap();
        let service = service(&dir);

        let mut no_style = form("slack", "https://x/y");
        no_style.logging_format_type = None;
        let config = service.save(no_style).await.unwrap();
        assert_eq!(config.format_style(), &FormatStyle::Markdown);
    }
}
