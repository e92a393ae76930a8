//! Configuration loading from an explicitly named deadrole.toml.

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

/// Main configuration structure for deadrole.toml.
#[derive(Debug, Deserialize, Default)]
pub struct DeadroleConfig {
    /// Role names or patterns never reported as unused.
    pub ignore: Option<Vec<String>>,
    /// Output configuration.
    pub output: Option<OutputConfig>,
}

/// Output format configuration.
#[derive(Debug, Deserialize, Default)]
pub struct OutputConfig {
    /// Output format: "plain" or "json".
    pub format: Option<String>,
}

impl DeadroleConfig {
    /// True if the config asks for JSON output.
    pub fn wants_json(&self) -> bool {
        self.output
            .as_ref()
            .and_then(|o| o.format.as_deref())
            .is_some_and(|f| f.eq_ignore_ascii_case("json"))
    }
}

/// Loads configuration from `path`.
///
/// The file was named explicitly, so a missing file is an error. Error
/// messages are always a single line.
pub fn load_config(path: &Path) -> Result<DeadroleConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    // toml's Display renders a multi-line source excerpt; keep only the message
    toml::from_str(&content).map_err(|e| {
        anyhow!(
            "Invalid config file {}: {}",
            path.display(),
            e.message().trim().replace('\n', " ")
        )
    })
}
