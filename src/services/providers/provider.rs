//! Core webhook provider trait and types.
//!
//! A provider turns a page (title, url) into a service-specific JSON payload
//! and delivers it with a single HTTP POST to its bound webhook URL.

use std::time::Instant;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::discord_provider::DiscordPayload;
use super::slack_provider::SlackPayload;
use crate::error::{AppError, AppResult};
use crate::models::{FormatStyle, redact_url};

/// Provider-specific message body, serialized without a tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Payload {
    Slack(SlackPayload),
    Discord(DiscordPayload),
}

/// Result of a webhook send that received an HTTP response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendResult {
    /// Whether the status was in the 2xx range
    pub success: bool,
    /// HTTP status code
    pub status_code: u16,
    /// Status line for diagnostics, e.g. "500 Internal Server Error"
    pub status_info: String,
    /// Response body, if readable
    pub response: Option<String>,
    /// Time taken for the request in milliseconds
    pub duration_ms: u64,
}

impl SendResult {
    /// Turns a non-success status into [`AppError::Rejected`]
    pub fn error_for_status(self) -> AppResult<Self> {
        if self.success {
            Ok(self)
        } else {
            Err(AppError::Rejected {
                status: self.status_code,
                body: self.response,
            })
        }
    }
}

/// Trait for webhook destinations (Slack, Discord, ...)
///
/// Uses `async_trait` to support async methods with dynamic dispatch, since the
/// factory hands out `Box<dyn WebhookProvider>`.
///
/// # Example Implementation
/// ```ignore
/// #[async_trait]
/// impl WebhookProvider for MattermostProvider {
///     fn format_payload(&self, title: &str, url: &str, style: &FormatStyle) -> Payload {
///         // Build the service-specific body
///     }
///
///     async fn send_message(&self, payload: &Payload) -> AppResult<SendResult> {
///         self.endpoint.post_json(self.name(), payload).await
///     }
///
///     fn name(&self) -> &'static str {
///         "mattermost"
///     }
///
///     fn webhook_url(&self) -> &str {
///         self.endpoint.url()
///     }
/// }
/// ```
#[async_trait]
pub trait WebhookProvider: Send + Sync {
    /// Builds the payload for a page
    ///
    /// Pure and deterministic. An unrecognized style yields a payload whose
    /// message field is empty.
    fn format_payload(&self, title: &str, url: &str, style: &FormatStyle) -> Payload;

    /// Posts the payload as JSON to the bound webhook URL
    ///
    /// # Returns
    /// `Ok` with the outcome whenever the endpoint answered, whatever the
    /// status; [`AppError::Delivery`] when no response was received.
    async fn send_message(&self, payload: &Payload) -> AppResult<SendResult>;

    /// Provider tag for logging
    fn name(&self) -> &'static str;

    /// Webhook URL this provider is bound to
    fn webhook_url(&self) -> &str;
}

/// A webhook URL plus the client used to reach it
#[derive(Debug, Clone)]
pub struct WebhookEndpoint {
    url: String,
    client: reqwest::Client,
}

impl WebhookEndpoint {
    pub fn new(url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            url: url.into(),
            client,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Sends one `POST` with `Content-Type: application/json`
    ///
    /// Awaited to completion; a host timeout is reported as a delivery failure.
    pub async fn post_json<T>(&self, provider: &'static str, body: &T) -> AppResult<SendResult>
    where
        T: Serialize + Sync + ?Sized,
    {
        let start = Instant::now();
        let host = redact_url(&self.url);

        let response = self
            .client
            .post(&self.url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .json(body)
            .send()
            .await;

        let duration_ms = start.elapsed().as_millis() as u64;

        match response {
            Ok(resp) => {
                let status = resp.status();
                let response_text = resp.text().await.ok();

                let result = SendResult {
                    success: status.is_success(),
                    status_code: status.as_u16(),
                    status_info: status.to_string(),
                    response: response_text,
                    duration_ms,
                };

                if result.success {
                    tracing::info!(
                        provider,
                        host = %host,
                        status = result.status_code,
                        duration_ms,
                        "Webhook delivered"
                    );
                } else {
                    tracing::warn!(
                        provider,
                        host = %host,
                        status = result.status_code,
                        duration_ms,
                        "Webhook rejected"
                    );
                }

                Ok(result)
            }
            Err(e) => {
                let reason = delivery_reason(&e);
                tracing::error!(
                    provider,
                    host = %host,
                    duration_ms,
                    reason,
                    error = %e,
                    "Webhook delivery failed"
                );

                Err(AppError::Delivery {
                    url: host,
                    reason: reason.to_string(),
                    source: e,
                })
            }
        }
    }
}

fn delivery_reason(error: &reqwest::Error) -> &'static str {
    if error.is_timeout() {
        "request timed out"
    } else if error.is_connect() {
        "connection failed"
    } else if error.is_builder() {
        "request could not be built"
    } else {
        "no response received"
    }
}
