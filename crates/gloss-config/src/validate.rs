//! Configuration validation.
//!
//! Validates a loaded configuration and reports warnings for potential issues.

use std::fmt;

use crate::Config;

/// Sort modes the query engine understands.
const KNOWN_SORT_MODES: &[&str] = &["relevance", "alphabetical", "popularity"];

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// `default_sort` does not name a known sort mode.
    UnknownSortMode {
        /// The configured value.
        value: String,
    },
    /// The configured seed file does not exist.
    SeedFileMissing {
        /// The resolved seed path.
        path: String,
    },
    /// A result limit is set to zero.
    ZeroLimit {
        /// Name of the setting.
        setting: &'static str,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownSortMode { value } => {
                write!(
                    f,
                    "unknown default_sort '{value}' (expected relevance, alphabetical or popularity)"
                )
            }
            Self::SeedFileMissing { path } => {
                write!(f, "seed file does not exist: {path}")
            }
            Self::ZeroLimit { setting } => {
                write!(f, "{setting} is 0, so the command will never show results")
            }
        }
    }
}

/// Validates the configuration and returns any warnings.
///
/// This checks for:
/// - A `default_sort` value the query engine doesn't know
/// - A seed file that doesn't exist on disk
/// - Result limits set to zero
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    let sort = config.settings.default_sort.trim().to_lowercase();
    if !KNOWN_SORT_MODES.contains(&sort.as_str()) {
        warnings.push(ConfigWarning::UnknownSortMode {
            value: config.settings.default_sort.clone(),
        });
    }

    if config.settings.popular_limit == 0 {
        warnings.push(ConfigWarning::ZeroLimit {
            setting: "popular_limit",
        });
    }
    if config.settings.suggest_limit == 0 {
        warnings.push(ConfigWarning::ZeroLimit {
            setting: "suggest_limit",
        });
    }

    if let Some(path) = &config.data.seed
        && !path.is_file()
    {
        warnings.push(ConfigWarning::SeedFileMissing {
            path: path.display().to_string(),
        });
    }

    warnings
}
