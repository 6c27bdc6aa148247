//! Configuration system for gloss.
//!
//! gloss uses TOML configuration files named `.gloss.toml`. Configuration is resolved by
//! walking up the directory tree from the current working directory, collecting any
//! `.gloss.toml` files found, then loading `~/.gloss.toml` as the global config with lowest
//! precedence.

#![warn(missing_docs)]

mod discovery;
mod display;
mod error;
mod merge;
mod parse;
mod resolve;
mod templates;
#[cfg(test)]
mod test_support;
mod validate;

use std::path::{Path, PathBuf};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config};
pub use display::format_path_for_display;
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{RawConfig, RawData, RawSettings, parse_config_file, parse_config_str};
pub use resolve::resolve_seed_path;
use serde::{Deserialize, Serialize};
pub use templates::{global_template, local_template};
pub use validate::ConfigWarning;
use validate::validate_config;

/// Default number of entries shown by `gloss popular`.
pub const DEFAULT_POPULAR_LIMIT: usize = 5;

/// Default number of completions shown by `gloss suggest`.
pub const DEFAULT_SUGGEST_LIMIT: usize = 5;

/// Default ordering for `gloss search` results.
pub const DEFAULT_SORT: &str = "relevance";

/// Top-level merged configuration for gloss.
///
/// This represents the fully resolved configuration after merging all discovered
/// `.gloss.toml` files according to precedence rules.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// General settings.
    pub settings: Settings,
    /// Data source settings.
    pub data: DataSettings,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.gloss.toml` files.
    ///
    /// This is the main entry point for loading configuration. It:
    /// 1. Discovers all `.gloss.toml` files from `cwd` up to the filesystem root
    /// 2. Appends `~/.gloss.toml` if it exists
    /// 3. Parses each file
    /// 4. Merges them according to precedence rules (closest to `cwd` wins)
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    /// This is primarily useful for testing.
    ///
    /// Returns `Ok(Config::default())` if the list is empty.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        if files.is_empty() {
            return Ok(Self::default());
        }

        let parsed: Vec<ParsedConfig> = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        merge_configs(&parsed)
    }

    /// Validates the configuration and returns any warnings.
    ///
    /// This checks for:
    /// - A `default_sort` value the query engine doesn't know
    /// - A seed file that doesn't exist on disk
    /// - Result limits set to zero
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Serializes the effective settings to TOML format.
    ///
    /// This outputs the merged settings in the same format as a `.gloss.toml` file,
    /// making it easy to see the effective configuration. The `[data]` section is not
    /// included since seed paths are resolved to absolute paths at load time.
    pub fn settings_to_toml(&self) -> String {
        let serializable = SerializableSettings {
            settings: self.settings.clone(),
        };
        toml::to_string_pretty(&serializable).expect("settings serialization should not fail")
    }
}

/// General settings for gloss.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Entries shown by `gloss popular`.
    pub popular_limit: usize,
    /// Completions shown by `gloss suggest`.
    pub suggest_limit: usize,
    /// Ordering for `gloss search` results.
    pub default_sort: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            popular_limit: DEFAULT_POPULAR_LIMIT,
            suggest_limit: DEFAULT_SUGGEST_LIMIT,
            default_sort: String::from(DEFAULT_SORT),
        }
    }
}

/// Data source settings.
#[derive(Debug, Clone, Default)]
pub struct DataSettings {
    /// Resolved absolute path to a JSON seed file, when one is configured.
    pub seed: Option<PathBuf>,
}

/// Internal struct for TOML serialization of settings.
#[derive(Serialize)]
struct SerializableSettings {
    /// General settings.
    settings: Settings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.popular_limit, 5);
        assert_eq!(settings.suggest_limit, 5);
        assert_eq!(settings.default_sort, "relevance");
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.data.seed.is_none());
        assert!(config.config_root.is_none());
    }

    #[test]
    fn test_settings_to_toml() {
        let config = Config::default();
        let toml = config.settings_to_toml();

        // Should produce valid TOML with the settings section
        assert!(toml.contains("[settings]"));
        assert!(toml.contains("popular_limit = 5"));
        assert!(toml.contains("suggest_limit = 5"));
        assert!(toml.contains("default_sort = \"relevance\""));

        // Should be parseable as valid TOML
        let parsed: toml::Value =
            toml::from_str(&toml).expect("settings_to_toml should produce valid TOML");
        assert!(parsed.get("settings").is_some());
    }

    #[test]
    fn test_settings_deserialize_partial() {
        let settings: Settings = toml::from_str("popular_limit = 8").unwrap();
        assert_eq!(settings.popular_limit, 8);
        assert_eq!(settings.suggest_limit, DEFAULT_SUGGEST_LIMIT);
        assert_eq!(settings.default_sort, DEFAULT_SORT);
    }
}
