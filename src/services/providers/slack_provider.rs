//! Slack incoming-webhook provider.
//!
//! Slack renders `<url|title>` as a link; `unfurl_links` asks it to expand a
//! preview of the page.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::provider::{Payload, SendResult, WebhookEndpoint, WebhookProvider};
use crate::error::AppResult;
use crate::external::client::HTTP_CLIENT;
use crate::models::FormatStyle;

/// Slack message body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlackPayload {
    pub text: String,
    pub unfurl_links: bool,
}

/// Slack webhook provider
///
/// # Example
/// ```ignore
/// let provider = SlackProvider::new("https://hooks.slack.com/services/T000/B000/XXXX");
/// let payload = provider.format_payload("Example", "https://example.com", &FormatStyle::Markdown);
/// let result = provider.send_message(&payload).await?;
/// ```
#[derive(Debug, Clone)]
pub struct SlackProvider {
    endpoint: WebhookEndpoint,
}

impl SlackProvider {
    /// Creates a provider using the shared `HTTP_CLIENT`
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self::with_client(webhook_url, HTTP_CLIENT.clone())
    }

    pub fn with_client(webhook_url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            endpoint: WebhookEndpoint::new(webhook_url, client),
        }
    }

    pub fn build_payload(title: &str, url: &str, style: &FormatStyle) -> SlackPayload {
        let text = match style {
            FormatStyle::Markdown => format!("<{url}|{title}>"),
            FormatStyle::Simple => format!("{title}\n{url}"),
            FormatStyle::UrlOnly => url.to_string(),
            FormatStyle::Unrecognized(_) => String::new(),
        };

        SlackPayload {
            text,
            unfurl_links: true,
        }
    }
}

#[async_trait]
impl WebhookProvider for SlackProvider {
    fn format_payload(&self, title: &str, url: &str, style: &FormatStyle) -> Payload {
        Payload::Slack(Self::build_payload(title, url, style))
    }

    async fn send_message(&self, payload: &Payload) -> AppResult<SendResult> {
        self.endpoint.post_json(self.name(), payload).await
    }

    fn name(&self) -> &'static str {
        "slack"
    }

    fn webhook_url(&self) -> &str {
        self.endpoint.url()
    }
}
