//! Path resolution for seed data references.
//!
//! Resolves relative and tilde-prefixed paths in `[data]` sections to absolute paths.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::ConfigError;

/// Resolves a seed file reference to an absolute path.
///
/// Handles three cases:
/// - Tilde paths (`~/terms.json`) - expanded to home directory
/// - Relative paths (`./terms.json`, `../shared/terms.json`) - resolved relative to `config_dir`
/// - Absolute paths - returned as-is
///
/// The file is not required to exist here; validation reports missing seed
/// files as warnings so commands that never touch the data still run.
pub fn resolve_seed_path(path: &str, config_dir: &Path) -> Result<PathBuf, ConfigError> {
    let expanded = expand_tilde(path)?;

    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        Ok(config_dir.join(expanded))
    }
}

/// Expands a tilde prefix to the home directory.
///
/// - `~` alone becomes the home directory
/// - `~/foo` becomes home directory joined with `foo`
/// - Paths not starting with `~` are returned unchanged
fn expand_tilde(path: &str) -> Result<PathBuf, ConfigError> {
    if path == "~" {
        return home_dir();
    }

    if let Some(rest) = path.strip_prefix("~/") {
        let home = home_dir()?;
        return Ok(home.join(rest));
    }

    Ok(PathBuf::from(path))
}

/// Returns the home directory.
fn home_dir() -> Result<PathBuf, ConfigError> {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or(ConfigError::NoHomeDirectory)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative_path() {
        let resolved = resolve_seed_path("./terms.json", Path::new("/project")).unwrap();
        assert_eq!(resolved, PathBuf::from("/project/./terms.json"));
    }

    #[test]
    fn test_resolve_relative_path_without_dot() {
        let resolved = resolve_seed_path("data/terms.json", Path::new("/project")).unwrap();
        assert_eq!(resolved, PathBuf::from("/project/data/terms.json"));
    }

    #[test]
    fn test_resolve_absolute_path() {
        // config_dir shouldn't matter for absolute paths
        let resolved = resolve_seed_path("/shared/terms.json", Path::new("/other")).unwrap();
        assert_eq!(resolved, PathBuf::from("/shared/terms.json"));
    }

    #[test]
    fn test_resolve_tilde_path() {
        let resolved = resolve_seed_path("~/terms.json", Path::new("/project")).unwrap();
        let home = BaseDirs::new().unwrap().home_dir().to_path_buf();
        assert_eq!(resolved, home.join("terms.json"));
    }

    #[test]
    fn test_expand_tilde_alone() {
        let result = expand_tilde("~").unwrap();
        let home = BaseDirs::new().unwrap().home_dir().to_path_buf();
        assert_eq!(result, home);
    }

    #[test]
    fn test_expand_no_tilde() {
        let result = expand_tilde("./terms.json").unwrap();
        assert_eq!(result, PathBuf::from("./terms.json"));

        let result = expand_tilde("/absolute/terms.json").unwrap();
        assert_eq!(result, PathBuf::from("/absolute/terms.json"));
    }

    #[test]
    fn test_expand_tilde_not_at_start() {
        // Tilde in the middle should not be expanded
        let result = expand_tilde("foo/~/bar.json").unwrap();
        assert_eq!(result, PathBuf::from("foo/~/bar.json"));
    }
}
