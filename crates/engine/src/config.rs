//! Configuration via `randint.toml`
//!
//! Every field has a default, so an empty file (or no file) is a valid
//! configuration. `write_default_if_missing` drops a commented template.

use randint_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "randint.toml";

/// Configuration loaded from `randint.toml`.
///
/// # Example
///
/// ```toml
/// # Reject imported results that fall outside [min, max]
/// strict_import = false
///
/// # Default tracing filter (overridden by RUST_LOG)
/// log = "warn"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RandintConfig {
    /// Reject imported records whose result lies outside `[min, max]`.
    #[serde(default)]
    pub strict_import: bool,
    /// Default tracing filter directive.
    #[serde(default = "default_log")]
    pub log: String,
}

fn default_log() -> String {
    "warn".to_string()
}

impl Default for RandintConfig {
    fn default() -> Self {
        Self {
            strict_import: false,
            log: default_log(),
        }
    }
}

impl RandintConfig {
    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# randint configuration
#
# Import trusts the result field of an identifier as given.
# Set to true to reject results outside [min, max].
strict_import = false

# Default tracing filter when RUST_LOG is not set.
# Examples: "warn", "info", "randint::lifecycle=debug"
log = "warn"
"#
    }

    /// Parse config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the text is not valid configuration.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        toml::from_str(&content).map_err(|e| {
            Error::Config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Read config from `path` if it exists, otherwise use defaults.
    pub fn from_file_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| {
                Error::Config(format!(
                    "Failed to write default config file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }
}
