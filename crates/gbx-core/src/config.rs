// Parser and batch configuration

use gbx_common::{GbxError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Default flat file extension picked up from an input directory.
pub const DEFAULT_EXTENSION: &str = "gbff";

/// What to do with the entry cursor once the input runs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TerminalEntry {
    /// Append the last entry only if a LOCUS line opened one.
    /// Input without any LOCUS line yields no entries.
    #[default]
    OpenedOnly,
    /// Always append a terminal entry. Input without any LOCUS line
    /// yields a single placeholder entry with every field at its default.
    Always,
}

impl FromStr for TerminalEntry {
    type Err = GbxError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "opened-only" | "opened" => Ok(TerminalEntry::OpenedOnly),
            "always" => Ok(TerminalEntry::Always),
            _ => Err(GbxError::Config(format!("Invalid terminal entry policy: {}", s))),
        }
    }
}

/// Parser configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserConfig {
    /// End-of-input policy for the entry cursor
    pub terminal_entry: TerminalEntry,

    /// File extensions treated as flat files during discovery (without the dot)
    pub extensions: Vec<String>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            terminal_entry: TerminalEntry::OpenedOnly,
            extensions: vec![DEFAULT_EXTENSION.to_string()],
        }
    }
}

impl ParserConfig {
    /// Create new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the end-of-input policy
    pub fn with_terminal_entry(mut self, terminal_entry: TerminalEntry) -> Self {
        self.terminal_entry = terminal_entry;
        self
    }

    /// Replace the accepted extensions; leading dots are dropped
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|ext| ext.as_ref().trim().trim_start_matches('.').to_string())
            .filter(|ext| !ext.is_empty())
            .collect();
        self
    }

    /// Check the configuration is usable for discovery
    pub fn validate(&self) -> Result<()> {
        if self.extensions.is_empty() {
            return Err(GbxError::Config(
                "At least one flat file extension is required".to_string(),
            ));
        }
        Ok(())
    }
}
