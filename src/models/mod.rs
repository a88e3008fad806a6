mod stored_settings;
mod webhook;

pub use stored_settings::StoredSettings;
pub use webhook::{
    FormatStyle, PageContext, ProviderType, WebhookConfig, parse_webhook_url, redact_url,
};
