//! Webhook sharing services.
//!
//! - `providers`: payload formatting and delivery per destination service
//! - `legacy`: stored-settings resolution, including Slack-only legacy records
//! - `share_service`: the share action
//! - `options_service`: loading and saving settings

pub mod legacy;
pub mod options_service;
pub mod providers;
pub mod share_service;

pub use legacy::{ResolvedSettings, persisted_settings, resolve_config};
pub use options_service::{OptionsForm, OptionsService, OptionsView};
pub use share_service::{ShareService, failure_message, notification_message};
