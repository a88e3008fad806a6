//! Send command handler

use crate::error::AppResult;
use crate::models::PageContext;
use crate::services::{ShareService, notification_message};

/// Handler for the send command
pub struct SendCommandHandler {
    service: ShareService,
}

impl SendCommandHandler {
    pub fn new(service: ShareService) -> Self {
        Self { service }
    }

    /// Shares the page and prints the notification on success
    ///
    /// Failures are returned so the caller can report them and exit non-zero.
    pub async fn execute(&self, page: PageContext) -> AppResult<()> {
        let result = self.service.share(&page).await;
        if result.is_ok() {
            println!("{}", notification_message(&result));
        }
        result.map(|outcome| {
            tracing::debug!(
                status = outcome.status_code,
                duration_ms = outcome.duration_ms,
                "Share completed"
            );
        })
    }
}
