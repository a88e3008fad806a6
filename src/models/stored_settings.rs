//! Raw settings-store record.
//!
//! Field names match the keys written by every released version, including
//! the Slack-only `slackWebhookUrl` key from before provider types existed.

use serde::{Deserialize, Serialize};

/// Every key the store may hold, all optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logging_format_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,

    /// Legacy key, written only for Slack
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slack_webhook_url: Option<String>,
}

impl StoredSettings {
    /// Store keys read by the send path and the options view
    pub const KEYS: [&'static str; 5] = [
        "webhookType",
        "webhookUrl",
        "loggingFormatType",
        "shortDescription",
        "slackWebhookUrl",
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_legacy_record() {
        let stored: StoredSettings =
            serde_json::from_str(r#"{"slackWebhookUrl":"https://x/y"}"#).unwrap();
        assert_eq!(stored.slack_webhook_url.as_deref(), Some("https://x/y"));
        assert!(stored.webhook_url.is_none());
        assert!(stored.webhook_type.is_none());
    }

    #[test]
    fn test_serialize_omits_absent_keys() {
        let stored = StoredSettings {
            webhook_type: Some("discord".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&stored).unwrap(),
            r#"{"webhookType":"discord"}"#
        );
    }
}
