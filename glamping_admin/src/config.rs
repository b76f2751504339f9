//! Backend connection settings read from the environment.

use std::time::Duration;

use glamping_api::Client;

use crate::error::AdminError;

pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";
pub const DEFAULT_LOCALE: &str = "en";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdminConfig {
    pub api_url: String,
    pub locale: String,
    pub token: Option<String>,
    pub timeout: Duration,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
            token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl AdminConfig {
    /// Reads `GLAMPING_API_URL`, `GLAMPING_LOCALE`, `GLAMPING_TOKEN` and
    /// `GLAMPING_TIMEOUT_SECS`. Unset or empty variables keep their defaults.
    pub fn from_env() -> Result<Self, AdminError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AdminError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();
        if let Some(url) = get("GLAMPING_API_URL") {
            config.api_url = url.trim().to_string();
        }
        if let Some(locale) = get("GLAMPING_LOCALE") {
            config.locale = locale.trim().to_string();
        }
        config.token = get("GLAMPING_TOKEN").map(|t| t.trim().to_string());
        if let Some(raw) = get("GLAMPING_TIMEOUT_SECS") {
            let secs = raw.trim().parse::<u64>().map_err(|_| {
                AdminError::Config(format!(
                    "GLAMPING_TIMEOUT_SECS must be a whole number of seconds, got '{}'",
                    raw
                ))
            })?;
            config.timeout = Duration::from_secs(secs.max(1));
        }
        Ok(config)
    }

    pub fn with_api_url(mut self, url: &str) -> Self {
        self.api_url = url.to_string();
        self
    }

    pub fn with_locale(mut self, locale: &str) -> Self {
        self.locale = locale.to_string();
        self
    }

    /// Builds an API client with these settings.
    pub fn client(&self) -> Result<Client, AdminError> {
        let mut client = Client::with_timeout(&self.api_url, self.timeout)?.with_locale(&self.locale);
        client.set_token(self.token.clone());
        Ok(client)
    }
}
