use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub window_search: WindowSearchConfig,
}

impl Config {
    /// Load config from file.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains invalid JSON.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        super::validation::warn_unknown_fields(&content, "config.json");
        let config: Self = serde_json::from_str(&content)?;
        config.window_search.validate()?;
        Ok(config)
    }

    /// Save config to file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Window search provider switches
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowSearchConfig {
    /// Register the provider at all
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Parse trailing `/x!`, `/xa!`, `/m<N>`, `/ma<N>` commands
    #[serde(default = "default_true")]
    pub commands_enabled: bool,

    /// Fuzzy subsequence matching; strict multi-term matching when off
    #[serde(default = "default_true")]
    pub fuzzy_enabled: bool,

    /// Shift (and Ctrl+Shift) activation moves windows to the active workspace
    #[serde(default = "default_true")]
    pub shift_moves_enabled: bool,

    /// Word that restricts the overview search to windows, e.g. `wq firefox`
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

fn default_true() -> bool {
    true
}

fn default_prefix() -> String {
    "wq".to_string()
}

impl Default for WindowSearchConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            commands_enabled: default_true(),
            fuzzy_enabled: default_true(),
            shift_moves_enabled: default_true(),
            prefix: default_prefix(),
        }
    }
}

impl WindowSearchConfig {
    /// Reject settings the provider cannot work with.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` when the prefix is empty or contains whitespace,
    /// since the host splits queries on whitespace and such a prefix could
    /// never match a single token.
    pub fn validate(&self) -> Result<()> {
        let bare = self.prefix.trim_end_matches(':');
        if bare.is_empty() {
            return Err(crate::Error::Config(
                "windowSearch.prefix must not be empty".to_string(),
            ));
        }
        if bare.chars().any(char::is_whitespace) {
            return Err(crate::Error::Config(format!(
                "windowSearch.prefix must be a single word, got '{}'",
                self.prefix
            )));
        }
        Ok(())
    }
}
