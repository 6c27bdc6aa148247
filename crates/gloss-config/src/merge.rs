//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`,
//! applying precedence rules and resolving paths.

use std::path::PathBuf;

use crate::{
    Config, ConfigError, DataSettings, Settings,
    parse::{RawConfig, RawSettings},
    resolve::resolve_seed_path,
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (closest to CWD),
/// lowest precedence last (global config).
///
/// Merge rules:
/// - Scalar settings: first defined value wins (highest precedence)
/// - Seed path: first definition wins, resolved against the defining config's directory
pub fn merge_configs(configs: &[ParsedConfig]) -> Result<Config, ConfigError> {
    if configs.is_empty() {
        return Ok(Config::default());
    }

    let settings = merge_settings(configs);
    let data = merge_data(configs)?;
    let config_root = configs
        .first()
        .map(|c| c.path.parent().unwrap().to_path_buf());

    Ok(Config {
        settings,
        data,
        config_root,
    })
}

/// Merges general settings, taking first defined value for each field.
fn merge_settings(configs: &[ParsedConfig]) -> Settings {
    let mut result = Settings::default();

    // Iterate in reverse (lowest precedence first) so higher precedence overwrites
    for parsed in configs.iter().rev() {
        if let Some(ref settings) = parsed.config.settings {
            apply_raw_settings(&mut result, settings);
        }
    }

    result
}

/// Applies raw settings to result, overwriting any present values.
fn apply_raw_settings(result: &mut Settings, raw: &RawSettings) {
    if let Some(v) = raw.popular_limit {
        result.popular_limit = v;
    }
    if let Some(v) = raw.suggest_limit {
        result.suggest_limit = v;
    }
    if let Some(ref v) = raw.default_sort {
        result.default_sort = v.clone();
    }
}

/// Merges seed data settings.
///
/// The first config that defines a seed wins completely, and the path is
/// resolved against that config file's directory so project configs can ship
/// their collection alongside.
fn merge_data(configs: &[ParsedConfig]) -> Result<DataSettings, ConfigError> {
    // Iterate in precedence order (highest first) - first definition wins
    for parsed in configs {
        let Some(ref data) = parsed.config.data else {
            continue;
        };
        let Some(ref seed) = data.seed else {
            continue;
        };

        let config_dir = parsed.path.parent().unwrap();
        let resolved = resolve_seed_path(seed, config_dir)?;
        return Ok(DataSettings {
            seed: Some(resolved),
        });
    }

    Ok(DataSettings::default())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::{parse::parse_config_str, test_support::TestDir};

    #[test]
    fn test_merge_empty_configs() {
        let result = merge_configs(&[]).unwrap();
        assert_eq!(result.settings.popular_limit, 5); // default
        assert!(result.data.seed.is_none());
        assert!(result.config_root.is_none());
    }

    #[test]
    fn test_merge_single_config() {
        let test_dir = TestDir::new();

        let parsed = ParsedConfig {
            path: test_dir.path().join(".gloss.toml"),
            config: parse_config_str(
                r#"
[settings]
popular_limit = 10
"#,
                Path::new("test"),
            )
            .unwrap(),
        };

        let result = merge_configs(&[parsed]).unwrap();
        assert_eq!(result.settings.popular_limit, 10);
        // Unset fields fall back to defaults
        assert_eq!(result.settings.suggest_limit, 5);
        assert_eq!(result.settings.default_sort, "relevance");
        assert_eq!(result.config_root, Some(test_dir.path().to_path_buf()));
    }

    #[test]
    fn test_merge_scalar_override() {
        let test_dir = TestDir::new();

        // Higher precedence config (closer to CWD)
        let high_prec = ParsedConfig {
            path: test_dir.path().join("project/.gloss.toml"),
            config: parse_config_str(
                r#"
[settings]
popular_limit = 20
"#,
                Path::new("test"),
            )
            .unwrap(),
        };

        // Lower precedence config
        let low_prec = ParsedConfig {
            path: test_dir.path().join(".gloss.toml"),
            config: parse_config_str(
                r#"
[settings]
popular_limit = 5
suggest_limit = 3
"#,
                Path::new("test"),
            )
            .unwrap(),
        };

        let result = merge_configs(&[high_prec, low_prec]).unwrap();

        // High precedence wins for popular_limit
        assert_eq!(result.settings.popular_limit, 20);
        // Low precedence provides suggest_limit (not overridden)
        assert_eq!(result.settings.suggest_limit, 3);
    }

    #[test]
    fn test_merge_seed_first_wins() {
        let test_dir = TestDir::new();
        test_dir.create_dir("project");

        let high_prec = ParsedConfig {
            path: test_dir.path().join("project/.gloss.toml"),
            config: parse_config_str(
                r#"
[data]
seed = "terms.json"
"#,
                Path::new("test"),
            )
            .unwrap(),
        };

        let low_prec = ParsedConfig {
            path: test_dir.path().join(".gloss.toml"),
            config: parse_config_str(
                r#"
[data]
seed = "other.json"
"#,
                Path::new("test"),
            )
            .unwrap(),
        };

        let result = merge_configs(&[high_prec, low_prec]).unwrap();

        // Resolved against the defining config's directory
        assert_eq!(
            result.data.seed,
            Some(test_dir.path().join("project/terms.json"))
        );
    }

    #[test]
    fn test_merge_seed_from_lower_precedence() {
        let test_dir = TestDir::new();

        let high_prec = ParsedConfig {
            path: test_dir.path().join("project/.gloss.toml"),
            config: parse_config_str(
                r#"
[settings]
popular_limit = 3
"#,
                Path::new("test"),
            )
            .unwrap(),
        };

        let low_prec = ParsedConfig {
            path: test_dir.path().join(".gloss.toml"),
            config: parse_config_str(
                r#"
[data]
seed = "shared.json"
"#,
                Path::new("test"),
            )
            .unwrap(),
        };

        let result = merge_configs(&[high_prec, low_prec]).unwrap();

        assert_eq!(result.settings.popular_limit, 3);
        assert_eq!(result.data.seed, Some(test_dir.path().join("shared.json")));
    }

    #[test]
    fn test_merge_three_way() {
        let test_dir = TestDir::new();

        // Highest precedence (deepest)
        let leaf = ParsedConfig {
            path: test_dir.path().join("project/sub/.gloss.toml"),
            config: parse_config_str(
                r#"
[settings]
popular_limit = 3
"#,
                Path::new("test"),
            )
            .unwrap(),
        };

        // Middle precedence
        let mid = ParsedConfig {
            path: test_dir.path().join("project/.gloss.toml"),
            config: parse_config_str(
                r#"
[settings]
popular_limit = 5
suggest_limit = 8
"#,
                Path::new("test"),
            )
            .unwrap(),
        };

        // Lowest precedence
        let root = ParsedConfig {
            path: test_dir.path().join(".gloss.toml"),
            config: parse_config_str(
                r#"
[settings]
popular_limit = 10
suggest_limit = 2
default_sort = "popularity"
"#,
                Path::new("test"),
            )
            .unwrap(),
        };

        let result = merge_configs(&[leaf, mid, root]).unwrap();

        // Settings: leaf wins popular_limit, mid wins suggest_limit,
        // root wins default_sort
        assert_eq!(result.settings.popular_limit, 3);
        assert_eq!(result.settings.suggest_limit, 8);
        assert_eq!(result.settings.default_sort, "popularity");

        // Config root should be the highest precedence config's directory
        assert_eq!(
            result.config_root,
            Some(test_dir.path().join("project/sub"))
        );
    }
}
