use crate::error::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";
pub const DEFAULT_USER_AGENT: &str = "gethubrepo-cli(github.com/syahidfrd/gethubrepo-cli)";

/// File names looked up in the home directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILES: [&str; 2] = [".gethubrepo-cli.yaml", ".gethubrepo-cli.yml"];

pub const ENV_API_BASE_URL: &str = "GETHUBREPO_API_BASE_URL";
pub const ENV_USER_AGENT: &str = "GETHUBREPO_USER_AGENT";

/// Settings shared by every request of one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_base_url: String,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// A resolved configuration and the file it came from, if any.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: Option<PathBuf>,
}

impl Config {
    /// Parse and validate a YAML config file. Keys missing from the file keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        // An empty file is a valid "no overrides" config.
        if contents.trim().is_empty() {
            return Ok(Config::default());
        }

        let config: Config = serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the configuration for this run.
    ///
    /// Without an explicit path, the first default file found under `home` is
    /// used. A file that cannot be read, parsed or validated is logged and
    /// skipped, leaving defaults. Environment overrides are applied last,
    /// through `env` so callers control the lookup.
    pub fn load<F>(explicit: Option<&Path>, home: Option<&Path>, env: F) -> LoadedConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        let candidate = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => home.and_then(find_default_file),
        };

        let (mut config, source) = match candidate {
            Some(path) => match Config::from_file(&path) {
                Ok(config) => {
                    info!(path = %path.display(), "Loaded config file");
                    (config, Some(path))
                }
                Err(e) => {
                    warn!(error = %e, "Ignoring config file");
                    (Config::default(), None)
                }
            },
            None => {
                debug!("No config file found, using defaults");
                (Config::default(), None)
            }
        };

        config.apply_env_overrides(env);

        LoadedConfig { config, source }
    }

    /// Blank values are ignored.
    pub fn apply_env_overrides<F>(&mut self, env: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = non_blank(&env, ENV_API_BASE_URL) {
            debug!(key = ENV_API_BASE_URL, "Overriding API base URL from environment");
            self.api_base_url = url;
        }
        if let Some(agent) = non_blank(&env, ENV_USER_AGENT) {
            debug!(key = ENV_USER_AGENT, "Overriding user agent from environment");
            self.user_agent = agent;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_base_url.trim().is_empty() {
            return Err(ConfigError::Invalid("api_base_url must not be empty".to_string()));
        }
        if self.user_agent.trim().is_empty() {
            return Err(ConfigError::Invalid("user_agent must not be empty".to_string()));
        }
        Ok(())
    }
}

fn non_blank<F>(env: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    match env(key) {
        Some(value) if value.trim().is_empty() => {
            warn!(key, "Ignoring empty environment override");
            None
        }
        other => other,
    }
}

fn find_default_file(home: &Path) -> Option<PathBuf> {
    DEFAULT_CONFIG_FILES
        .iter()
        .map(|name| home.join(name))
        .find(|path| path.is_file())
}
