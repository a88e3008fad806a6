use std::sync::LazyLock;
use std::time::Duration;

use crate::config::settings::HttpConfig;
use crate::error::{AppError, AppResult};

/// Global HTTP client with default [`HttpConfig`] settings
///
/// Used by providers created without an explicit client. Falls back to
/// reqwest's stock client if the tuned builder cannot be constructed.
///
/// # Example
/// ```ignore
/// use pagehook::external::client::HTTP_CLIENT;
///
/// let response = HTTP_CLIENT
///     .post("https://hooks.slack.com/services/...")
///     .json(&payload)
///     .send()
///     .await?;
/// ```
pub static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    build_http_client(&HttpConfig::default()).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Falling back to default HTTP client");
        reqwest::Client::new()
    })
});

/// Builds an HTTP client from configuration
///
/// - **Timeouts**: whole-request and connect timeouts; an expired timeout
///   surfaces as a delivery failure
/// - **Connection pooling**: idle connections are kept briefly for rapid
///   repeated sends
/// - **User-Agent**: configured string, `pagehook/<version>` by default
pub fn build_http_client(config: &HttpConfig) -> AppResult<reqwest::Client> {
    reqwest::Client::builder()
        // Timeouts
        .timeout(Duration::from_secs(config.timeout_seconds))
        .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
        // Connection pooling
        .pool_max_idle_per_host(2)
        .pool_idle_timeout(Duration::from_secs(90))
        .user_agent(config.user_agent.as_str())
        .build()
        .map_err(|e| AppError::Configuration {
            key: "http".to_string(),
            source: e.into(),
        })
}
