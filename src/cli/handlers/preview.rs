//! Preview command handler

use crate::error::{AppError, AppResult};
use crate::models::PageContext;
use crate::services::ShareService;

/// Handler for the preview command
pub struct PreviewCommandHandler {
    service: ShareService,
}

impl PreviewCommandHandler {
    pub fn new(service: ShareService) -> Self {
        Self { service }
    }

    /// Prints the payload as pretty JSON; no request is made
    pub async fn execute(
        &self,
        page: PageContext,
        webhook_type: Option<&str>,
        format: Option<&str>,
    ) -> AppResult<()> {
        let payload = self.service.preview(&page, webhook_type, format).await?;
        let json = serde_json::to_string_pretty(&payload).map_err(|e| AppError::Internal {
            source: anyhow::Error::new(e).context("Failed to serialize payload"),
        })?;
        println!("{json}");
        Ok(())
    }
}
