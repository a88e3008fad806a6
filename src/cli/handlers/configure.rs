//! Configure command handler

use crate::error::AppResult;
use crate::services::{OptionsForm, OptionsService};

/// Printed once settings are stored
pub const SAVED_CONFIRMATION: &str = "Saved!";

/// Handler for the configure command
pub struct ConfigureCommandHandler {
    service: OptionsService,
}

impl ConfigureCommandHandler {
    pub fn new(service: OptionsService) -> Self {
        Self { service }
    }

    pub async fn execute(&self, form: OptionsForm) -> AppResult<()> {
        self.service.save(form).await?;
        println!("{SAVED_CONFIRMATION}");
        Ok(())
    }
}
