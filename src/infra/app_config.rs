use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to write config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode config: {0}")]
    Encode(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_base_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
    /// Bearer token from the last successful login.
    pub session_token: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: concat!("soundscore/", env!("CARGO_PKG_VERSION")).to_string(),
            session_token: None,
        }
    }
}

/// File config with `SOUNDSCORE_API_URL` applied on top. The result is for
/// this run only; persist the session with [`save_session_token`].
pub fn load_config() -> AppConfig {
    with_env_overrides(load_config_from(&config_path()))
}

fn with_env_overrides(mut config: AppConfig) -> AppConfig {
    if let Ok(url) = std::env::var("SOUNDSCORE_API_URL")
        && !url.trim().is_empty()
    {
        config.api_base_url = url;
    }
    config
}

pub fn load_config_from(path: &Path) -> AppConfig {
    let Ok(contents) = std::fs::read_to_string(path) else {
        return AppConfig::default();
    };
    match toml::from_str(&contents) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("Ignoring invalid config {}: {}", path.display(), err);
            AppConfig::default()
        }
    }
}

pub fn save_config_to(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    let io_err = |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents).map_err(io_err)
}

pub fn save_session_token(token: Option<String>) -> Result<(), ConfigError> {
    save_session_token_to(token, &config_path())
}

/// Rewrites only `session_token`; everything else comes from the file as it
/// is on disk, so runtime overrides never leak into it.
pub fn save_session_token_to(token: Option<String>, path: &Path) -> Result<(), ConfigError> {
    let mut config = load_config_from(path);
    config.session_token = token;
    save_config_to(&config, path)
}

pub fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var("SOUNDSCORE_CONFIG_PATH") {
        return PathBuf::from(path);
    }

    app_data_dir().join("config.toml")
}

fn app_data_dir() -> PathBuf {
    if let Ok(path) = std::env::var("SOUNDSCORE_DATA_HOME") {
        return PathBuf::from(path);
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = home::home_dir() {
            return home
                .join("Library")
                .join("Application Support")
                .join("soundscore");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("soundscore");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Some(xdg) = std::env::var_os("XDG_DATA_HOME") {
            return PathBuf::from(xdg).join("soundscore");
        }
        if let Some(home) = home::home_dir() {
            return home.join(".local").join("share").join("soundscore");
        }
    }

    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".soundscore")
}
