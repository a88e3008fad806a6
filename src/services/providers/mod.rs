//! Webhook providers with pluggable destination services.
//!
//! The core trait `WebhookProvider` pairs payload formatting with delivery;
//! `create_webhook_provider` picks the implementation from a stored type tag.

mod discord_provider;
mod factory;
mod provider;
mod slack_provider;

pub use discord_provider::{DiscordPayload, DiscordProvider};
pub use factory::{create_webhook_provider, provider_for, provider_from_config};
pub use provider::{Payload, SendResult, WebhookEndpoint, WebhookProvider};
pub use slack_provider::{SlackPayload, SlackProvider};
