use anyhow::{Context, Result, anyhow};
use std::{path::PathBuf, str::FromStr, time::Duration};

const DEFAULT_API_URL: &str = "http://localhost:8000";
const DEFAULT_SESSION_FILE: &str = ".session.json";
const DEFAULT_FAKE_AUTH_DELAY_MS: u64 = 1000;

/// Which login backend the console talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// `POST /auth/login` against the real API; sessions carry no role.
    Remote,
    /// Local credential table with two roles, for demos.
    Fake,
}

impl FromStr for AuthMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "remote" => Ok(AuthMode::Remote),
            "fake" => Ok(AuthMode::Fake),
            other => Err(anyhow!(
                "AUTH_MODE must be 'remote' or 'fake', got '{}'",
                other
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub auth_mode: AuthMode,
    pub session_file: PathBuf,
    pub fake_auth_delay: Duration,
    pub dev_mode: bool,
    pub enable_file_log: bool,
}

impl Config {
    pub fn init() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup("API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_url = api_url.trim_end_matches('/').to_string();
        if api_url.is_empty() {
            return Err(anyhow!("API_URL must not be empty"));
        }

        let auth_mode = match lookup("AUTH_MODE") {
            Some(mode) => mode.parse::<AuthMode>().context("Invalid AUTH_MODE")?,
            None => AuthMode::Remote,
        };

        let session_file = lookup("SESSION_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SESSION_FILE));

        let fake_auth_delay = match lookup("FAKE_AUTH_DELAY_MS") {
            Some(ms) => ms
                .parse::<u64>()
                .context("FAKE_AUTH_DELAY_MS must be a valid u64 integer")?,
            None => DEFAULT_FAKE_AUTH_DELAY_MS,
        };

        let dev_mode = lookup("DEV_MODE")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

        let enable_file_log = lookup("ENABLE_FILE_LOG")
            .map(|v| v == "true")
            .unwrap_or(false);

        Ok(Self {
            api_url,
            auth_mode,
            session_file,
            fake_auth_delay: Duration::from_millis(fake_auth_delay),
            dev_mode,
            enable_file_log,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.api_url, "http://localhost:8000");
        assert_eq!(config.auth_mode, AuthMode::Remote);
        assert_eq!(config.session_file, PathBuf::from(".session.json"));
        assert_eq!(config.fake_auth_delay, Duration::from_millis(1000));
        assert!(!config.dev_mode);
        assert!(!config.enable_file_log);
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = config_from(&[("API_URL", "http://api.local/v1/"), ("AUTH_MODE", "fake")])
            .unwrap();

        assert_eq!(config.api_url, "http://api.local/v1");
        assert_eq!(config.auth_mode, AuthMode::Fake);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(config_from(&[("AUTH_MODE", "oauth")]).is_err());
        assert!(config_from(&[("FAKE_AUTH_DELAY_MS", "soon")]).is_err());
        assert!(config_from(&[("API_URL", "/")]).is_err());
    }
}
