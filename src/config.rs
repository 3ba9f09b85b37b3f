// SPDX-License-Identifier: MPL-2.0
//! Per-instance viewer configuration.
//!
//! A [`Config`] tells a viewer instance which elements act as triggers and
//! which attributes carry the group name and the source override. Multiple
//! viewer instances with distinct configurations can coexist on one page.
//!
//! Configurations can be persisted to and loaded from a TOML file so that an
//! embedding application can ship its attribute scheme as data:
//!
//! ```
//! use ozbox::config::Config;
//!
//! let config = Config::default();
//! assert_eq!(config.selector, "[lightbox]");
//! assert_eq!(config.group_attribute, "lightbox");
//! assert_eq!(config.source_attribute, "lightbox-src");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default attribute scheme, matching the markup the widget has always used.
pub mod defaults {
    /// Selector matching trigger elements.
    pub const SELECTOR: &str = "[lightbox]";
    /// Attribute whose value names the trigger's group.
    pub const GROUP_ATTRIBUTE: &str = "lightbox";
    /// Attribute that overrides the element's native link target as the
    /// media source.
    pub const SOURCE_ATTRIBUTE: &str = "lightbox-src";
}

/// Attribute configuration for one viewer instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Selector used to discover trigger elements.
    #[serde(default = "default_selector")]
    pub selector: String,
    /// Attribute carrying the group name. An empty value marks a trigger
    /// without putting it in any group.
    #[serde(default = "default_group_attribute")]
    pub group_attribute: String,
    /// Attribute carrying the source override.
    #[serde(default = "default_source_attribute")]
    pub source_attribute: String,
}

fn default_selector() -> String {
    defaults::SELECTOR.to_string()
}

fn default_group_attribute() -> String {
    defaults::GROUP_ATTRIBUTE.to_string()
}

fn default_source_attribute() -> String {
    defaults::SOURCE_ATTRIBUTE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            selector: default_selector(),
            group_attribute: default_group_attribute(),
            source_attribute: default_source_attribute(),
        }
    }
}

/// Loads a configuration from a TOML file.
///
/// Missing fields fall back to their defaults.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)?;
    let config = toml::from_str(&contents)?;
    Ok(config)
}

/// Saves a configuration to a TOML file.
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    let contents = toml::to_string_pretty(config)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config_uses_lightbox_attributes() {
        let config = Config::default();
        assert_eq!(config.selector, "[lightbox]");
        assert_eq!(config.group_attribute, "lightbox");
        assert_eq!(config.source_attribute, "lightbox-src");
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("ozbox.toml");

        let config = Config {
            selector: "[data-gallery]".to_string(),
            group_attribute: "data-gallery".to_string(),
            source_attribute: "data-gallery-src".to_string(),
        };
        save_to_path(&config, &path).expect("save failed");

        let loaded = load_from_path(&path).expect("load failed");
        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("partial.toml");
        std::fs::write(&path, "selector = \"[gallery]\"\n").expect("write failed");

        let loaded = load_from_path(&path).expect("load failed");
        assert_eq!(loaded.selector, "[gallery]");
        assert_eq!(loaded.group_attribute, defaults::GROUP_ATTRIBUTE);
        assert_eq!(loaded.source_attribute, defaults::SOURCE_ATTRIBUTE);
    }

    #[test]
    fn load_from_missing_file_is_an_error() {
        let dir = tempdir().expect("failed to create temp dir");
        let result = load_from_path(&dir.path().join("absent.toml"));
        assert!(result.is_err());
    }
}
