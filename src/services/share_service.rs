//! Share service: posts the current page to the configured webhook.
//!
//! Every call reads the store, builds its own provider and payload, and awaits
//! its own request, so overlapping calls never share mutable state.

use tracing::Instrument;

use super::legacy::resolve_config;
use super::providers::{Payload, SendResult, provider_for, provider_from_config};
use crate::error::{AppError, AppResult};
use crate::models::{FormatStyle, PageContext, ProviderType, WebhookConfig};
use crate::storage::SettingsStore;

/// Notification text shown after a successful share
pub const SAVED_MESSAGE: &str = "Saved the current page";

/// Share service handling config resolution and delivery
#[derive(Debug, Clone)]
pub struct ShareService {
    store: SettingsStore,
    client: reqwest::Client,
}

impl ShareService {
    /// Creates a new ShareService
    ///
    /// # Arguments
    /// * `store` - Settings store holding the webhook configuration
    /// * `client` - HTTP client used for delivery
    pub fn new(store: SettingsStore, client: reqwest::Client) -> Self {
        Self { store, client }
    }

    /// Loads and validates the effective configuration
    pub async fn resolve(&self) -> AppResult<WebhookConfig> {
        let stored = self.store.load_settings().await?;
        resolve_config(&stored).into_webhook_config()
    }

    /// Formats the page and posts it to the configured webhook
    ///
    /// # Returns
    /// The send outcome when the endpoint accepted the message
    ///
    /// # Errors
    /// - [`AppError::Unconfigured`] / [`AppError::UnsupportedProvider`] /
    ///   [`AppError::InvalidUrl`] from configuration resolution
    /// - [`AppError::Delivery`] when no response was received
    /// - [`AppError::Rejected`] when the endpoint answered with an error status
    pub async fn share(&self, page: &PageContext) -> AppResult<SendResult> {
        let result = async {
            let config = self.resolve().await?;
            self.share_with(&config, page).await
        }
        .await;

        if let Err(ref e) = result {
            tracing::warn!(error_kind = e.kind(), error = %e, "Share failed");
        }

        result
    }

    /// Formats and posts the page using an explicit configuration
    pub async fn share_with(
        &self,
        config: &WebhookConfig,
        page: &PageContext,
    ) -> AppResult<SendResult> {
        let span = tracing::info_span!(
            "share",
            provider = %config.provider_type(),
            host = %config.webhook_host(),
            format = %config.format_style(),
        );

        async {
            if !config.format_style().is_recognized() {
                tracing::warn!(
                    style = %config.format_style(),
                    "Unrecognized format style, sending an empty message"
                );
            }

            let provider = provider_from_config(config, self.client.clone());
            let payload = provider.format_payload(&page.title, &page.url, config.format_style());
            provider.send_message(&payload).await?.error_for_status()
        }
        .instrument(span)
        .await
    }

    /// Builds the payload that would be sent, without any network I/O
    ///
    /// `provider_type` and `format_style` override the stored values and are
    /// parsed strictly. No webhook URL is required.
    pub async fn preview(
        &self,
        page: &PageContext,
        provider_type: Option<&str>,
        format_style: Option<&str>,
    ) -> AppResult<Payload> {
        let resolved = resolve_config(&self.store.load_settings().await?);

        let provider_type: ProviderType = provider_type
            .unwrap_or(resolved.provider_type.as_str())
            .parse()?;
        let format_style = match format_style {
            Some(style) => style.parse()?,
            None => FormatStyle::from_stored(&resolved.format_style),
        };

        let provider = provider_for(
            provider_type,
            resolved.webhook_url.unwrap_or_default(),
            self.client.clone(),
        );
        Ok(provider.format_payload(&page.title, &page.url, &format_style))
    }
}

/// User-facing notification text for a share outcome
pub fn notification_message(result: &AppResult<SendResult>) -> String {
    match result {
        Ok(_) => SAVED_MESSAGE.to_string(),
        Err(e) => failure_message(e),
    }
}

/// User-facing text for a failed command
pub fn failure_message(error: &AppError) -> String {
    match error {
        AppError::Unconfigured => "No webhook url set".to_string(),
        AppError::InvalidUrl { .. } => "Invalid webhook url".to_string(),
        AppError::Rejected { status, .. } => format!("Webhook request failed (HTTP {status})"),
        AppError::Delivery { reason, .. } => format!("Could not reach webhook: {reason}"),
        e => format!("Error: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StoredSettings;
    use crate::test_support::{WarnCounter, refused_url, spawn_endpoint, test_client};
    use axum::http::StatusCode;
    use serde_json::json;
    use tempfile::TempDir;
    use tracing::instrument::WithSubscriber;

    async fn service_with(dir: &TempDir, stored: StoredSettings) -> ShareService {
        let store = SettingsStore::new(dir.path().join("settings.json"));
        store.save_settings(&stored).await.unwrap();
        ShareService::new(store, test_client())
    }

    fn page() -> PageContext {
        PageContext::new(Some("Example".to_string()), Some("https://example.com".to_string()))
    }

    #[tokio::test]
    async fn test_share_with_legacy_slack_record() {
        let endpoint = spawn_endpoint(StatusCode::OK).await;
        let dir = TempDir::new().unwrap();
        let service = service_with(
            &dir,
            StoredSettings {
                slack_webhook_url: Some(endpoint.url.clone()),
                ..Default::default()
            },
        )
        .await;

        let result = service.share(&page()).await;
        assert_eq!(notification_message(&result), "Saved the current page");
        assert_eq!(
            endpoint.requests()[0].body,
            json!({ "text": "<https://example.com|Example>", "unfurl_links": true })
        );
    }

    #[tokio::test]
    async fn test_share_discord_url_only() {
        let endpoint = spawn_endpoint(StatusCode::NO_CONTENT).await;
        let dir = TempDir::new().unwrap();
        let service = service_with(
            &dir,
            StoredSettings {
                webhook_type: Some("discord".to_string()),
                webhook_url: Some(endpoint.url.clone()),
                logging_format_type: Some("url-only".to_string()),
                ..Default::default()
            },
        )
        .await;

        let result = service.share(&page()).await.unwrap();
        assert_eq!(result.status_code, 204);
        assert_eq!(
            endpoint.requests()[0].body,
            json!({ "content": "https://example.com" })
        );
    }

    #[tokio::test]
    async fn test_share_unconfigured() {
        let dir = TempDir::new().unwrap();
        let service = service_with(&dir, StoredSettings::default()).await;

        let result = service.share(&page()).await;
        assert!(matches!(result, Err(AppError::Unconfigured)));
        assert_eq!(notification_message(&result), "No webhook url set");
    }

    #[tokio::test]
    async fn test_share_server_error_is_rejected() {
        let endpoint = spawn_endpoint(StatusCode::INTERNAL_SERVER_ERROR).await;
        let dir = TempDir::new().unwrap();
        let service = service_with(
            &dir,
            StoredSettings {
                webhook_url: Some(endpoint.url.clone()),
                ..Default::default()
            },
        )
        .await;

        let result = service.share(&page()).await;
        assert!(matches!(result, Err(AppError::Rejected { status: 500, .. })));
        assert_eq!(
            notification_message(&result),
            "Webhook request failed (HTTP 500)"
        );
    }

    #[tokio::test]
    async fn test_share_refused_is_delivery_error() {
        let dir = TempDir::new().unwrap();
        let service = service_with(
            &dir,
            StoredSettings {
                webhook_url: Some(refused_url().await),
                ..Default::default()
            },
        )
        .await;

        let result = service.share(&page()).await;
        assert!(matches!(result, Err(AppError::Delivery { .. })));
        assert!(notification_message(&result).starts_with("Could not reach webhook"));
    }

    #[tokio::test]
    async fn test_share_unknown_provider() {
        let dir = TempDir::new().unwrap();
        let service = service_with(
            &dir,
            StoredSettings {
                webhook_url: Some("https://x/y".to_string()),
                webhook_type: Some("carrier-pigeon".to_string()),
                ..Default::default()
            },
        )
        .await;

        let result = service.share(&page()).await;
        assert_eq!(
            notification_message(&result),
            "Error: Unknown provider type: carrier-pigeon"
        );
    }

    #[tokio::test]
    async fn test_overlapping_shares_are_independent() {
        let endpoint = spawn_endpoint(StatusCode::OK).await;
        let dir = TempDir::new().unwrap();
        let service = service_with(
            &dir,
            StoredSettings {
                webhook_url: Some(endpoint.url.clone()),
                ..Default::default()
            },
        )
        .await;

        let first_page = page();
        let second_page = PageContext::new(
            Some("Other".to_string()),
            Some("https://other.example".to_string()),
        );
        let (first, second) = tokio::join!(service.share(&first_page), service.share(&second_page));
        assert!(first.is_ok());
        assert!(second.is_ok());

        let mut texts: Vec<String> = endpoint
            .requests()
            .into_iter()
            .map(|r| r.body["text"].as_str().unwrap_or_default().to_string())
            .collect();
        texts.sort();
        assert_eq!(
            texts,
            vec![
                "<https://example.com|Example>".to_string(),
                "<https://other.example|Other>".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_unrecognized_style_warns_on_send_only() {
        let endpoint = spawn_endpoint(StatusCode::OK).await;
        let dir = TempDir::new().unwrap();
        let service = service_with(
            &dir,
            StoredSettings {
                webhook_url: Some(endpoint.url.clone()),
                logging_format_type: Some("fancy".to_string()),
                ..Default::default()
            },
        )
        .await;

        let preview_warnings = WarnCounter::default();
        let payload = service
            .preview(&page(), None, None)
            .with_subscriber(preview_warnings.dispatch())
            .await
            .unwrap();
        assert_eq!(serde_json::to_value(payload).unwrap()["text"], "");
        assert_eq!(preview_warnings.count(), 0);

        let send_warnings = WarnCounter::default();
        service
            .share(&page())
            .with_subscriber(send_warnings.dispatch())
            .await
            .unwrap();
        assert_eq!(send_warnings.count(), 1);
        assert_eq!(endpoint.requests()[0].body["text"], "");
    }

    #[tokio::test]
    async fn test_preview_without_webhook_url() {
        let dir = TempDir::new().unwrap();
        let service = service_with(&dir, StoredSettings::default()).await;

        let payload = service.preview(&page(), Some("discord"), Some("simple")).await.unwrap();
        assert_eq!(
            serde_json::to_value(payload).unwrap(),
            json!({ "content": "Example\nhttps://example.com" })
        );

        let err = service.preview(&page(), None, Some("fancy")).await.unwrap_err();
        assert_eq!(err.kind(), "invalid_format_style");
    }
}
