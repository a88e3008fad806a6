//! Webhook domain models.
//!
//! Provider and format tags, the validated per-send configuration, and the
//! page context supplied by the caller.

use std::fmt;
use std::str::FromStr;

use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

// ============================================================================
// Enums
// ============================================================================

/// Destination service for a webhook
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    Slack,
    Discord,
}

impl ProviderType {
    pub const ALL: [ProviderType; 2] = [ProviderType::Slack, ProviderType::Discord];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderType::Slack => "slack",
            ProviderType::Discord => "discord",
        }
    }

    /// Example URL shape shown as an input hint
    pub fn url_placeholder(&self) -> &'static str {
        match self {
            ProviderType::Slack => "https://hooks.slack.com/services/...",
            ProviderType::Discord => "https://discord.com/api/webhooks/...",
        }
    }
}

impl FromStr for ProviderType {
    type Err = AppError;

    /// Exact, case-sensitive match on the stored tag
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "slack" => Ok(ProviderType::Slack),
            "discord" => Ok(ProviderType::Discord),
            _ => Err(AppError::UnsupportedProvider {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ProviderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Message layout for the shared page
///
/// Values read back from the settings store are parsed leniently: anything
/// outside the three known tags becomes [`FormatStyle::Unrecognized`] and
/// formats to an empty message body. [`FromStr`] is the strict parser used
/// when accepting new settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FormatStyle {
    #[default]
    Markdown,
    Simple,
    UrlOnly,
    Unrecognized(String),
}

impl FormatStyle {
    pub const KNOWN: [FormatStyle; 3] = [
        FormatStyle::Markdown,
        FormatStyle::Simple,
        FormatStyle::UrlOnly,
    ];

    pub fn from_stored(s: &str) -> Self {
        s.parse()
            .unwrap_or_else(|_| FormatStyle::Unrecognized(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        match self {
            FormatStyle::Markdown => "markdown",
            FormatStyle::Simple => "simple",
            FormatStyle::UrlOnly => "url-only",
            FormatStyle::Unrecognized(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, FormatStyle::Unrecognized(_))
    }
}

impl FromStr for FormatStyle {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "markdown" => Ok(FormatStyle::Markdown),
            "simple" => Ok(FormatStyle::Simple),
            "url-only" => Ok(FormatStyle::UrlOnly),
            _ => Err(AppError::InvalidFormatStyle {
                value: s.to_string(),
            }),
        }
    }
}

impl From<String> for FormatStyle {
    fn from(s: String) -> Self {
        FormatStyle::from_stored(&s)
    }
}

impl From<FormatStyle> for String {
    fn from(style: FormatStyle) -> Self {
        match style {
            FormatStyle::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for FormatStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// URL validation and per-send configuration
// ============================================================================

/// Parses a webhook URL, mapping failures to [`AppError::InvalidUrl`]
pub fn parse_webhook_url(value: &str) -> AppResult<Url> {
    Url::parse(value).map_err(|e| AppError::InvalidUrl {
        value: value.to_string(),
        reason: e.to_string(),
    })
}

/// Effective configuration for one send operation
///
/// Built from resolved settings; the URL is guaranteed to parse as an
/// absolute URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookConfig {
    provider_type: ProviderType,
    webhook_url: String,
    format_style: FormatStyle,
}

impl WebhookConfig {
    pub fn new(
        provider_type: ProviderType,
        webhook_url: impl Into<String>,
        format_style: FormatStyle,
    ) -> AppResult<Self> {
        let webhook_url = webhook_url.into();
        parse_webhook_url(&webhook_url)?;

        Ok(Self {
            provider_type,
            webhook_url,
            format_style,
        })
    }

    pub fn provider_type(&self) -> ProviderType {
        self.provider_type
    }

    pub fn webhook_url(&self) -> &str {
        &self.webhook_url
    }

    pub fn format_style(&self) -> &FormatStyle {
        &self.format_style
    }

    /// Host part of the webhook URL, safe to log or display
    pub fn webhook_host(&self) -> String {
        redact_url(&self.webhook_url)
    }
}

/// Reduces a webhook URL to its host; the path carries the secret token
pub fn redact_url(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_else(|| "<invalid url>".to_string())
}

/// The page being shared
///
/// Missing fields are treated as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContext {
    pub title: String,
    pub url: String,
}

impl PageContext {
    pub fn new(title: Option<String>, url: Option<String>) -> Self {
        Self {
            title: title.unwrap_or_default(),
            url: url.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_type_exact_match() {
        assert_eq!("slack".parse::<ProviderType>().unwrap(), ProviderType::Slack);
        assert_eq!(
            "discord".parse::<ProviderType>().unwrap(),
            ProviderType::Discord
        );
        assert!(matches!(
            "Slack".parse::<ProviderType>(),
            Err(AppError::UnsupportedProvider { value }) if value == "Slack"
        ));
    }

    #[test]
    fn test_url_placeholder() {
        assert!(ProviderType::Slack.url_placeholder().contains("hooks.slack.com"));
        assert!(ProviderType::Discord.url_placeholder().contains("discord.com"));
    }

    #[test]
    fn test_format_style_strict_and_lenient() {
        assert_eq!("url-only".parse::<FormatStyle>().unwrap(), FormatStyle::UrlOnly);
        assert!(matches!(
            "fancy".parse::<FormatStyle>(),
            Err(AppError::InvalidFormatStyle { .. })
        ));
        assert_eq!(
            FormatStyle::from_stored("fancy"),
            FormatStyle::Unrecognized("fancy".to_string())
        );
        assert_eq!(FormatStyle::from_stored("simple"), FormatStyle::Simple);
    }

    #[test]
    fn test_format_style_defaults_to_markdown() {
        assert_eq!(FormatStyle::default(), FormatStyle::Markdown);
        assert_eq!(FormatStyle::default().as_str(), "markdown");
    }

    #[test]
    fn test_format_style_serde_keeps_raw_value() {
        let json = serde_json::to_string(&FormatStyle::UrlOnly).unwrap();
        assert_eq!(json, "\"url-only\"");

        let style: FormatStyle = serde_json::from_str("\"fancy\"").unwrap();
        assert_eq!(style, FormatStyle::Unrecognized("fancy".to_string()));
        assert_eq!(serde_json::to_string(&style).unwrap(), "\"fancy\"");
    }

    #[test]
    fn test_webhook_config_rejects_relative_url() {
        let result = WebhookConfig::new(ProviderType::Slack, "hooks/abc", FormatStyle::Markdown);
        assert!(matches!(result, Err(AppError::InvalidUrl { value, .. }) if value == "hooks/abc"));
    }

    #[test]
    fn test_webhook_host_hides_path() {
        let config = WebhookConfig::new(
            ProviderType::Slack,
            "https://hooks.slack.com/services/T000/B000/secret",
            FormatStyle::Markdown,
        )
        .unwrap();
        assert_eq!(config.webhook_host(), "hooks.slack.com");
    }

    #[test]
    fn test_page_context_defaults_to_empty() {
        let page = PageContext::new(None, Some("https://example.com".to_string()));
        assert_eq!(page.title, "");
        assert_eq!(page.url, "https://example.com");
    }
}
