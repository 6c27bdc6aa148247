//! Shared context for running CLI commands.

use std::{
    env, fs,
    path::{Path, PathBuf},
    process::ExitCode,
};

use gloss_config::Config;
use gloss_model::Seed;
use gloss_store::SharedStore;

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (may be default if no config files found).
    pub config: Config,
    /// Cached store seeded for this invocation.
    store: Option<SharedStore>,
}

impl CommandContext {
    /// Loads the current directory and configuration.
    pub fn load() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let config = load_config_or_failure(&cwd)?;
        Ok(Self {
            cwd,
            config,
            store: None,
        })
    }

    /// Loads only the current directory, skipping configuration parsing.
    ///
    /// Used for `init`, which should work even when an existing config file is
    /// invalid.
    pub fn load_cwd_only() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        Ok(Self {
            cwd,
            config: Config::default(),
            store: None,
        })
    }

    /// Returns the term store, loading seed data on first use.
    pub fn store(&mut self) -> Result<&SharedStore, ExitCode> {
        if self.store.is_some() {
            return Ok(self.store.as_ref().expect("store checked"));
        }

        let seed = load_seed(&self.config)?;
        self.store = Some(SharedStore::from_seed(seed));
        Ok(self.store.as_ref().expect("store just set"))
    }
}

/// Returns the current working directory or exits with a consistent error.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}

/// Loads configuration from the provided directory or exits with an error.
fn load_config_or_failure(cwd: &Path) -> Result<Config, ExitCode> {
    Config::load(cwd).map_err(|e| {
        eprintln!("error: failed to load configuration: {e}");
        ExitCode::FAILURE
    })
}

/// Loads seed data from the configured file, or the built-in collection.
fn load_seed(config: &Config) -> Result<Seed, ExitCode> {
    let Some(path) = &config.data.seed else {
        return Ok(Seed::builtin());
    };

    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            eprintln!("error: failed to read seed file {}: {e}", path.display());
            return Err(ExitCode::FAILURE);
        }
    };

    match Seed::from_json(&contents) {
        Ok(seed) => {
            log::debug!("loaded {} terms from {}", seed.terms.len(), path.display());
            Ok(seed)
        }
        Err(e) => {
            eprintln!("error: invalid seed file {}: {e}", path.display());
            Err(ExitCode::FAILURE)
        }
    }
}
