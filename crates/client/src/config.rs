use std::path::PathBuf;
use std::time::Duration;

/// Default admin API base URL for local development.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:3000/v1";

/// Default request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {var}: '{value}'")]
    Invalid { var: &'static str, value: String },
}

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL every resource path is appended to.
    pub api_base_url: String,
    /// File holding the bearer token between invocations.
    pub token_file: PathBuf,
    /// Per-request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ClientConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                      |
    /// |------------------------|------------------------------|
    /// | `API_BASE_URL`         | `http://127.0.0.1:3000/v1`   |
    /// | `TELCONF_TOKEN_FILE`   | `$HOME/.telconf/token`       |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                         |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an explicit variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = lookup("API_BASE_URL")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.into())
            .trim_end_matches('/')
            .to_string();

        let token_file = match lookup("TELCONF_TOKEN_FILE").filter(|v| !v.is_empty()) {
            Some(path) => PathBuf::from(path),
            None => match lookup("HOME") {
                Some(home) => PathBuf::from(home).join(".telconf").join("token"),
                None => PathBuf::from(".telconf-token"),
            },
        };

        let request_timeout_secs = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
                var: "REQUEST_TIMEOUT_SECS",
                value,
            })?,
            None => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        Ok(Self {
            api_base_url,
            token_file,
            request_timeout_secs,
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
