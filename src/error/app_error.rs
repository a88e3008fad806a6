use std::path::PathBuf;

use thiserror::Error;

/// Application-wide error type covering configuration, provider and delivery failures.
///
/// Delivery outcomes are split in two: [`AppError::Delivery`] means the request
/// never produced a response (DNS, refused connection, timeout), while
/// [`AppError::Rejected`] means the endpoint answered with a non-success status.
#[derive(Error, Debug)]
pub enum AppError {
    /// No usable webhook URL could be resolved from the settings store
    #[error("No webhook url set")]
    Unconfigured,

    /// Provider type tag has no matching implementation
    #[error("Unknown provider type: {value}")]
    UnsupportedProvider { value: String },

    /// Format style tag is not one of markdown, simple, url-only
    #[error("Unknown format style: {value}")]
    InvalidFormatStyle { value: String },

    /// Webhook URL failed to parse as an absolute URL
    #[error("Invalid webhook url '{value}': {reason}")]
    InvalidUrl { value: String, reason: String },

    /// Request never reached the endpoint or no response arrived
    #[error("Webhook delivery to {url} failed: {reason}")]
    Delivery {
        url: String,
        reason: String,
        #[source]
        source: reqwest::Error,
    },

    /// Endpoint answered with a non-success HTTP status
    #[error("Webhook request rejected with HTTP {status}")]
    Rejected { status: u16, body: Option<String> },

    /// Settings store could not be read or written
    #[error("Settings store error at {}", path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    /// Configuration error with key information
    #[error("Configuration error: {key}")]
    Configuration {
        key: String,
        #[source]
        source: anyhow::Error,
    },

    /// Internal error for unexpected failures
    #[error("Internal error")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

impl AppError {
    /// Stable tag used as the `error_kind` log field
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Unconfigured => "unconfigured",
            AppError::UnsupportedProvider { .. } => "unsupported_provider",
            AppError::InvalidFormatStyle { .. } => "invalid_format_style",
            AppError::InvalidUrl { .. } => "invalid_url",
            AppError::Delivery { .. } => "delivery",
            AppError::Rejected { .. } => "rejected",
            AppError::Storage { .. } => "storage",
            AppError::Configuration { .. } => "configuration",
            AppError::Internal { .. } => "internal",
        }
    }

    /// Webhook sends are never retried; every failure is reported once.
    pub fn is_retryable(&self) -> bool {
        false
    }

    pub(crate) fn storage(path: impl Into<PathBuf>, source: impl Into<anyhow::Error>) -> Self {
        AppError::Storage {
            path: path.into(),
            source: source.into(),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Internal { source: error }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_provider_names_value() {
        let err = AppError::UnsupportedProvider {
            value: "carrier-pigeon".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown provider type: carrier-pigeon");
        assert_eq!(err.kind(), "unsupported_provider");
    }

    #[test]
    fn test_rejected_reports_status() {
        let err = AppError::Rejected {
            status: 500,
            body: None,
        };
        assert_eq!(err.to_string(), "Webhook request rejected with HTTP 500");
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_kinds_are_distinct() {
        let errors = [
            AppError::Unconfigured,
            AppError::UnsupportedProvider {
                value: "x".to_string(),
            },
            AppError::InvalidFormatStyle {
                value: "x".to_string(),
            },
            AppError::InvalidUrl {
                value: "x".to_string(),
                reason: "relative URL without a base".to_string(),
            },
            AppError::Rejected {
                status: 404,
                body: None,
            },
            AppError::storage("settings.json", anyhow::anyhow!("disk full")),
            AppError::Configuration {
                key: "store.path".to_string(),
                source: anyhow::anyhow!("empty"),
            },
            anyhow::anyhow!("boom").into(),
        ];
        let kinds: std::collections::HashSet<_> = errors.iter().map(AppError::kind).collect();
        assert_eq!(kinds.len(), errors.len());
        assert!(!kinds.contains("validation"));
    }

    #[test]
    fn test_anyhow_converts_to_internal() {
        let err: AppError = anyhow::anyhow!("boom").into();
        assert_eq!(err.kind(), "internal");
    }
}
