//! Configuration file discovery.
//!
//! A `gloss` invocation can be affected by several `.gloss.toml` files: one in
//! the working directory or any of its ancestors, plus the global file in the
//! home directory. Discovery collects them in precedence order and leaves
//! merging to [`crate::merge`].

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::parse::is_root_config;

/// The configuration filename, shared by local and global files.
pub const CONFIG_FILENAME: &str = ".gloss.toml";

/// Collects every configuration file that applies to `cwd`.
///
/// Walks from `cwd` up to the filesystem root and returns the `.gloss.toml`
/// files found, nearest first, with `~/.gloss.toml` appended last. Earlier
/// paths take precedence when merging. A file that sets `root = true` ends the
/// walk and suppresses the global file.
pub fn discover_config_files(cwd: &Path) -> Vec<PathBuf> {
    let mut found = Vec::new();

    for dir in cwd.ancestors() {
        let candidate = dir.join(CONFIG_FILENAME);
        if !candidate.is_file() {
            continue;
        }
        let stop = is_root_config(&candidate);
        found.push(candidate);
        if stop {
            return found;
        }
    }

    if let Some(global) = global_config_path()
        && global.is_file()
        && !found.contains(&global)
    {
        found.push(global);
    }

    found
}

/// Returns the path of the global configuration file (`~/.gloss.toml`), or
/// `None` when the home directory cannot be determined.
pub fn global_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(CONFIG_FILENAME))
}

/// Reports whether `path` is the global configuration file.
pub fn is_global_config(path: &Path) -> bool {
    global_config_path().is_some_and(|global| path == global)
}
