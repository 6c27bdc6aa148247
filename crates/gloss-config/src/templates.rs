//! Configuration templates for `gloss init`.
//!
//! The templates ship as valid TOML so tests can parse them. `init` writes
//! them fully commented out, which documents every setting while leaving the
//! defaults in force until the user uncomments a line.

/// Template for a project-local `.gloss.toml` (valid TOML).
const LOCAL_TEMPLATE: &str = include_str!("../templates/config.toml");

/// Template for the global `~/.gloss.toml` (valid TOML).
const GLOBAL_TEMPLATE: &str = include_str!("../templates/config-global.toml");

/// Returns the local configuration template, commented out.
pub fn local_template() -> String {
    comment_template(LOCAL_TEMPLATE)
}

/// Returns the global configuration template, commented out.
pub fn global_template() -> String {
    comment_template(GLOBAL_TEMPLATE)
}

/// Prefixes every settings line of a template with `# `.
///
/// Lines that are already comments and blank lines pass through untouched so
/// the template's own commentary keeps its formatting.
fn comment_template(template: &str) -> String {
    let mut commented: String = template
        .lines()
        .map(|line| {
            if line.is_empty() || line.starts_with('#') {
                line.to_string()
            } else {
                format!("# {line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n");
    commented.push('\n');
    commented
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_config;

    #[test]
    fn test_templates_parse_as_valid_toml() {
        assert!(parse_config(LOCAL_TEMPLATE).is_ok());
        assert!(parse_config(GLOBAL_TEMPLATE).is_ok());
    }

    #[test]
    fn test_local_template_names_every_setting() {
        let config = parse_config(LOCAL_TEMPLATE).unwrap();
        let settings = config.settings.expect("template should set [settings]");
        assert!(settings.popular_limit.is_some());
        assert!(settings.suggest_limit.is_some());
        assert!(settings.default_sort.is_some());
        assert!(
            config
                .data
                .expect("template should set [data]")
                .seed
                .is_some()
        );
    }

    #[test]
    fn test_commenting_prefixes_settings_lines() {
        let out = comment_template("[section]\nkey = \"value\"\n");
        assert_eq!(out, "# [section]\n# key = \"value\"\n");
    }

    #[test]
    fn test_commenting_leaves_comments_and_blanks_alone() {
        let out = comment_template("# heading\n\nkey = 1\n");
        assert_eq!(out, "# heading\n\n# key = 1\n");
    }
}
