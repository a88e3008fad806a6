//! Show command handler

use std::fmt;

use crate::error::AppResult;
use crate::models::{FormatStyle, ProviderType, redact_url};
use crate::services::{OptionsService, OptionsView, ResolvedSettings, resolve_config};
use crate::storage::SettingsStore;

/// Handler for the show command
pub struct ShowCommandHandler {
    store: SettingsStore,
}

impl ShowCommandHandler {
    pub fn new(store: SettingsStore) -> Self {
        Self { store }
    }

    pub async fn execute(&self, reveal: bool) -> AppResult<()> {
        let view = OptionsService::new(self.store.clone()).load().await?;
        let resolved = resolve_config(&self.store.load_settings().await?);

        println!("Settings store: {}", self.store.path().display());
        print!("{}", render(&view, &resolved, reveal));
        Ok(())
    }
}

/// Renders the stored and effective settings; URLs are reduced to their host
/// unless `reveal` is set
pub fn render(view: &OptionsView, resolved: &ResolvedSettings, reveal: bool) -> String {
    SettingsReport {
        view,
        resolved,
        reveal,
    }
    .to_string()
}

struct SettingsReport<'a> {
    view: &'a OptionsView,
    resolved: &'a ResolvedSettings,
    reveal: bool,
}

impl SettingsReport<'_> {
    fn shown_url(&self, url: &str) -> String {
        if self.reveal {
            url.to_string()
        } else {
            redact_url(url)
        }
    }
}

impl fmt::Display for SettingsReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.view;
        let resolved = self.resolved;
        let provider = resolved.provider_type.parse::<ProviderType>().ok();

        writeln!(
            f,
            "Webhook type:   {}",
            view.webhook_type.as_deref().unwrap_or("(not set)")
        )?;
        match view.webhook_url.as_deref().filter(|u| !u.is_empty()) {
            Some(url) => writeln!(f, "Webhook url:    {}", self.shown_url(url))?,
            None => writeln!(
                f,
                "Webhook url:    (not set, e.g. {})",
                provider.unwrap_or(ProviderType::Slack).url_placeholder()
            )?,
        }
        writeln!(
            f,
            "Format:         {}",
            view.logging_format_type.as_deref().unwrap_or("(not set)")
        )?;
        writeln!(
            f,
            "Description:    {}",
            view.short_description.as_deref().unwrap_or("(none)")
        )?;
        if view.migrated_from_legacy {
            writeln!(
                f,
                "                (migrated from the legacy Slack webhook setting)"
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Effective configuration:")?;
        match provider {
            Some(provider) => writeln!(f, "  provider:     {provider}")?,
            None => writeln!(f, "  provider:     {} (unsupported)", resolved.provider_type)?,
        }
        match resolved.webhook_url.as_deref() {
            Some(url) => writeln!(f, "  url:          {}", self.shown_url(url))?,
            None => writeln!(f, "  url:          (not set)")?,
        }
        let style = FormatStyle::from_stored(&resolved.format_style);
        if style.is_recognized() {
            writeln!(f, "  format:       {style}")
        } else {
            writeln!(f, "  format:       {style} (unrecognized, messages will be empty)")
        }
    }
}
