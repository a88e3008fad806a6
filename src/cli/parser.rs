//! CLI argument parsing with clap
//!
//! This module defines the command-line interface structure using clap,
//! including all commands, arguments, and their documentation.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Share a page title and URL to a Slack or Discord webhook
#[derive(Parser, Debug)]
#[command(name = "pagehook")]
#[command(about = "Share a page title and URL to a Slack or Discord webhook")]
#[command(long_about = "
Pagehook posts the title and URL of a page to a configured chat webhook.
Slack and Discord incoming webhooks are supported, with three message styles:
markdown (a linked title), simple (title and URL on two lines) and url-only.

EXAMPLES:
    # Point pagehook at a Discord webhook
    pagehook configure --type discord --url https://discord.com/api/webhooks/...

    # Share a page
    pagehook send --title 'Rust 2024' --url https://blog.rust-lang.org/

    # See what would be posted, without sending anything
    pagehook preview --title 'Rust 2024' --url https://blog.rust-lang.org/ --format simple

    # Show the effective configuration
    pagehook show --reveal

    # Keep settings somewhere else
    pagehook --store ~/.config/pagehook/settings.json show
")]
#[command(version = crate::clap_long_version())]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    ///
    /// Use a single TOML file instead of the layered `config/` directory.
    /// The file must exist and be readable.
    #[arg(
        short,
        long,
        value_name = "FILE",
        global = true,
        value_parser = super::validation::validate_config_file_path
    )]
    pub config: Option<PathBuf>,

    /// Override environment detection
    ///
    /// Selects which `{environment}.toml` layer is loaded.
    #[arg(short, long, value_enum, global = true)]
    pub env: Option<Environment>,

    /// Settings store path
    ///
    /// Overrides `store.path` from the configuration.
    #[arg(long, value_name = "FILE", global = true)]
    pub store: Option<PathBuf>,

    /// Enable verbose logging
    ///
    /// Cannot be used with --quiet.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    ///
    /// Cannot be used with --verbose.
    #[arg(short, long, conflicts_with = "verbose", global = true)]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Share a page to the configured webhook
    ///
    /// Prints the outcome and exits non-zero if the message was not accepted.
    Send {
        /// Page title (empty when omitted)
        #[arg(long)]
        title: Option<String>,

        /// Page URL (empty when omitted)
        #[arg(long)]
        url: Option<String>,
    },
    /// Save webhook settings
    ///
    /// The URL is validated before anything is written.
    Configure {
        /// Destination service: slack or discord
        #[arg(long = "type", value_name = "PROVIDER")]
        webhook_type: String,

        /// Incoming webhook URL
        #[arg(long, value_name = "URL")]
        url: String,

        /// Message style: markdown, simple or url-only (default: markdown)
        #[arg(long, value_name = "STYLE")]
        format: Option<String>,

        /// Free-form note stored alongside the webhook
        #[arg(long, value_name = "TEXT")]
        description: Option<String>,
    },
    /// Show the stored and effective webhook settings
    Show {
        /// Print the full webhook URL instead of its host
        #[arg(long)]
        reveal: bool,
    },
    /// Print the JSON payload that would be sent, without sending it
    Preview {
        /// Page title
        #[arg(long)]
        title: Option<String>,

        /// Page URL
        #[arg(long)]
        url: Option<String>,

        /// Destination service (default: stored setting)
        #[arg(long = "type", value_name = "PROVIDER")]
        webhook_type: Option<String>,

        /// Message style (default: stored setting)
        #[arg(long, value_name = "STYLE")]
        format: Option<String>,
    },
}

/// Environment options
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Environment {
    #[value(name = "development", alias = "dev")]
    Development,
    #[value(name = "test")]
    Test,
    #[value(name = "staging", alias = "stage")]
    Staging,
    #[value(name = "production", alias = "prod")]
    Production,
}

impl Cli {
    /// Log level implied by `--verbose` / `--quiet`, if any
    pub fn log_level_override(&self) -> Option<&'static str> {
        if self.verbose {
            Some("debug")
        } else if self.quiet {
            Some("error")
        } else {
            None
        }
    }
}

impl From<Environment> for crate::config::Environment {
    fn from(env: Environment) -> Self {
        match env {
            Environment::Development => crate::config::Environment::Development,
            Environment::Test => crate::config::Environment::Test,
            Environment::Staging => crate::config::Environment::Staging,
            Environment::Production => crate::config::Environment::Production,
        }
    }
}
