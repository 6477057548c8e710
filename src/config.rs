//! Site configuration module.
//!
//! The whole build wiring is one immutable [`SiteConfig`] value, resolved
//! once at startup and handed to the caller — no mutable registration state.
//! Stock defaults describe the blog layout this tool was built for; an
//! optional `config.toml` at the input root overrides just the keys it names.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! # Layout applied to every document without an explicit override
//! default_layout = "base.njk"
//!
//! # Files and directories copied verbatim into the output tree
//! passthrough_copy = ["styles.css", "blog/attachments", "blog/embeds"]
//!
//! [dirs]
//! input = "."               # Content root
//! includes = "_includes"    # Layouts and partials
//! output = "_site"          # Rendered site
//! ```
//!
//! Config files are sparse — override just the values you want. Unknown keys
//! are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Component, Path};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Build wiring configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Layout applied to every content document lacking an explicit override.
    pub default_layout: String,
    /// Source paths copied verbatim into the output tree.
    pub passthrough_copy: Vec<String>,
    /// Build directory layout.
    pub dirs: DirConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            default_layout: "base.njk".to_string(),
            passthrough_copy: vec![
                "styles.css".to_string(),
                "blog/attachments".to_string(),
                "blog/embeds".to_string(),
            ],
            dirs: DirConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_layout.is_empty() {
            return Err(ConfigError::Validation(
                "default_layout must not be empty".into(),
            ));
        }
        self.dirs.validate()?;
        for target in &self.passthrough_copy {
            if target.is_empty() {
                return Err(ConfigError::Validation(
                    "passthrough_copy entries must not be empty".into(),
                ));
            }
            let path = Path::new(target);
            if path.is_absolute()
                || path
                    .components()
                    .any(|c| matches!(c, Component::ParentDir))
            {
                return Err(ConfigError::Validation(format!(
                    "passthrough_copy entry must be relative and stay inside the input root: {target}"
                )));
            }
        }
        Ok(())
    }
}

/// Build directory layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DirConfig {
    /// Content root, relative to the directory the build runs in.
    pub input: String,
    /// Layouts/partials directory, relative to the input root.
    pub includes: String,
    /// Output directory, relative to the input root.
    pub output: String,
}

impl Default for DirConfig {
    fn default() -> Self {
        Self {
            input: ".".to_string(),
            includes: "_includes".to_string(),
            output: "_site".to_string(),
        }
    }
}

impl DirConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("dirs.input", &self.input),
            ("dirs.includes", &self.includes),
            ("dirs.output", &self.output),
        ] {
            if value.is_empty() {
                return Err(ConfigError::Validation(format!("{name} must not be empty")));
            }
        }
        if self.output == self.input {
            return Err(ConfigError::Validation(
                "dirs.output must differ from dirs.input".into(),
            ));
        }
        Ok(())
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let merged = match load_raw_config(root)? {
        Some(overlay) => merge_toml(base, overlay),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Sitewire Configuration
# ======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file at the input root. Only the keys you want to override
# need to be present. Unknown keys will cause an error.

# Layout applied to every content document without an explicit override.
default_layout = "base.njk"

# Files and directories copied verbatim into the output tree, keeping their
# path relative to the input root.
passthrough_copy = ["styles.css", "blog/attachments", "blog/embeds"]

# ---------------------------------------------------------------------------
# Build directories
# ---------------------------------------------------------------------------
[dirs]
# Content root, relative to the directory the build runs in.
input = "."

# Layouts and partials directory, relative to the input root.
includes = "_includes"

# Output directory, relative to the input root.
output = "_site"
"##
}
