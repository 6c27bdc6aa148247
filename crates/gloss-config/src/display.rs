//! Path formatting for terminal output.

use std::path::Path;

use directories::BaseDirs;

/// Formats a path for display, preferring the shortest readable form.
///
/// If `base` is given and the path sits at or below it, the path is shown
/// relative to `base`. Paths under the home directory are shown with a `~/`
/// prefix. Everything else falls back to the absolute path.
pub fn format_path_for_display(path: &Path, base: Option<&Path>) -> String {
    if let Some(base) = base
        && let Some(relative) = pathdiff::diff_paths(path, base)
    {
        let display = relative.display().to_string();
        if display.is_empty() {
            return ".".to_string();
        }
        if !relative.starts_with("..") {
            return display;
        }
    }

    if let Some(dirs) = BaseDirs::new()
        && let Ok(stripped) = path.strip_prefix(dirs.home_dir())
    {
        return format!("~/{}", stripped.display());
    }

    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_path_under_base_is_relative() {
        let base = PathBuf::from("/project");
        let path = PathBuf::from("/project/sub/.gloss.toml");
        assert_eq!(
            format_path_for_display(&path, Some(&base)),
            "sub/.gloss.toml"
        );
    }

    #[test]
    fn test_path_equal_to_base_is_dot() {
        let base = PathBuf::from("/project");
        assert_eq!(format_path_for_display(&base, Some(&base)), ".");
    }

    #[test]
    fn test_path_outside_base_is_not_relative() {
        let base = PathBuf::from("/project/deep/nested");
        let path = PathBuf::from("/elsewhere/terms.json");
        let display = format_path_for_display(&path, Some(&base));
        assert!(
            !display.starts_with(".."),
            "display should not climb out of base: {display}"
        );
    }

    #[test]
    fn test_home_path_collapses_to_tilde() {
        let Some(dirs) = BaseDirs::new() else {
            return;
        };
        let path = dirs.home_dir().join("glossary/terms.json");
        assert_eq!(
            format_path_for_display(&path, None),
            "~/glossary/terms.json"
        );
    }

    #[test]
    fn test_unrelated_path_stays_absolute() {
        let path = PathBuf::from("/var/lib/terms.json");
        assert_eq!(format_path_for_display(&path, None), "/var/lib/terms.json");
    }
}
