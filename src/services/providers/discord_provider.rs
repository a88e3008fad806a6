//! Discord webhook provider.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::provider::{Payload, SendResult, WebhookEndpoint, WebhookProvider};
use crate::error::AppResult;
use crate::external::client::HTTP_CLIENT;
use crate::models::FormatStyle;

/// Discord message body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscordPayload {
    pub content: String,
}

/// Discord webhook provider
///
/// Discord accepts standard Markdown links in `content`.
#[derive(Debug, Clone)]
pub struct DiscordProvider {
    endpoint: WebhookEndpoint,
}

impl DiscordProvider {
    /// Creates a provider using the shared `HTTP_CLIENT`
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self::with_client(webhook_url, HTTP_CLIENT.clone())
    }

    pub fn with_client(webhook_url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            endpoint: WebhookEndpoint::new(webhook_url, client),
        }
    }

    pub fn build_payload(title: &str, url: &str, style: &FormatStyle) -> DiscordPayload {
        let content = match style {
            FormatStyle::Markdown => format!("[{title}]({url})"),
            FormatStyle::Simple => format!("{title}\n{url}"),
            FormatStyle::UrlOnly => url.to_string(),
            FormatStyle::Unrecognized(_) => String::new(),
        };

        DiscordPayload { content }
    }
}

#[async_trait]
impl WebhookProvider for DiscordProvider {
    fn format_payload(&self, title: &str, url: &str, style: &FormatStyle) -> Payload {
        Payload::Discord(Self::build_payload(title, url, style))
    }

    async fn send_message(&self, payload: &Payload) -> AppResult<SendResult> {
        self.endpoint.post_json(self.name(), payload).await
    }

    fn name(&self) -> &'static str {
        "discord"
    }

    fn webhook_url(&self) -> &str {
        self.endpoint.url()
    }
}
