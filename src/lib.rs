//! Pagehook library
//!
//! Shares a page title and URL to a Slack or Discord incoming webhook.

use shadow_rs::shadow;
shadow!(build);

pub mod cli;
pub mod config;
pub mod error;
pub mod external;
pub mod logger;
pub mod models;
pub mod services;
pub mod storage;

#[cfg(test)]
mod test_support;

pub use error::{AppError, AppResult};
pub use services::providers::{WebhookProvider, create_webhook_provider};

pub fn pkg_version() -> &'static str {
    build::PKG_VERSION
}

pub fn clap_long_version() -> &'static str {
    build::CLAP_LONG_VERSION
}
