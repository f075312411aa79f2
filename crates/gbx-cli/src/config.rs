//! Configuration management for GBX CLI
//!
//! Settings come from the environment (optionally seeded from a `.env` file):
//!
//! - `GBX_EXTENSIONS`: comma-separated flat file extensions (default `gbff`)
//! - `GBX_TERMINAL_ENTRY`: `opened-only` or `always`
//! - `GBX_STRICT`: fail the run on the first unreadable or malformed file
//!
//! Command-line flags take precedence over these values.

use crate::error::{CliError, Result};
use gbx_core::config::{ParserConfig, TerminalEntry, DEFAULT_EXTENSION};
use serde::{Deserialize, Serialize};

// ============================================================================
// Environment Variables
// ============================================================================

pub const ENV_EXTENSIONS: &str = "GBX_EXTENSIONS";
pub const ENV_TERMINAL_ENTRY: &str = "GBX_TERMINAL_ENTRY";
pub const ENV_STRICT: &str = "GBX_STRICT";

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Extensions (without the dot) of the files to parse
    pub extensions: Vec<String>,

    /// What to emit at end of input
    #[serde(default)]
    pub terminal_entry: TerminalEntry,

    /// Abort on the first failing file
    #[serde(default)]
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extensions: vec![DEFAULT_EXTENSION.to_string()],
            terminal_entry: TerminalEntry::default(),
            strict: false,
        }
    }
}

impl Config {
    /// Load config from the process environment, after reading `.env` if present
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load config through `lookup`, which returns the value of a variable if set
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(extensions) = lookup(ENV_EXTENSIONS) {
            config.extensions = extensions
                .split(',')
                .map(|ext| ext.trim().trim_start_matches('.').to_string())
                .filter(|ext| !ext.is_empty())
                .collect();
        }

        if let Some(terminal) = lookup(ENV_TERMINAL_ENTRY) {
            config.terminal_entry = terminal.parse().map_err(|_| {
                CliError::config(format!(
                    "{ENV_TERMINAL_ENTRY} must be opened-only or always, got '{terminal}'"
                ))
            })?;
        }

        if let Some(strict) = lookup(ENV_STRICT) {
            config.strict = parse_bool(&strict)
                .ok_or_else(|| CliError::config(format!("{ENV_STRICT} must be true or false, got '{strict}'")))?;
        }

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.parser_config()
            .validate()
            .map_err(|_| CliError::config(format!("{ENV_EXTENSIONS} must name at least one extension")))
    }

    /// Parser settings derived from this config
    pub fn parser_config(&self) -> ParserConfig {
        ParserConfig::new()
            .with_terminal_entry(self.terminal_entry)
            .with_extensions(self.extensions.clone())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
