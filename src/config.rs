use crate::error::{AppError, Result};
use std::time::Duration;
use url::Url;

#[derive(Debug, Clone)]
pub struct Config {
    pub cluster_url: Url,
    pub cluster_username: Option<String>,
    pub cluster_password: Option<String>,

    /// Upper bound for every single upstream query
    pub query_timeout_seconds: u64,

    pub client_origin: String,
    pub port: u16,
}

impl Config {
    pub fn init() -> Result<Config> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup, so tests don't touch the process env
    pub fn from_lookup<F>(lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let cluster_url = lookup("CLUSTER_URL")
            .unwrap_or_else(|| "http://localhost:9200".to_owned());
        let cluster_url = Url::parse(&cluster_url)
            .map_err(|e| AppError::ConfigError(format!("CLUSTER_URL is not a valid URL: {}", e)))?;

        let cluster_username = lookup("CLUSTER_USERNAME").filter(|v| !v.is_empty());
        let cluster_password = lookup("CLUSTER_PASSWORD").filter(|v| !v.is_empty());

        let query_timeout_seconds = lookup("QUERY_TIMEOUT_SECONDS")
            .unwrap_or_else(|| "10".to_owned())
            .parse::<u64>()
            .map_err(|_| AppError::ConfigError("QUERY_TIMEOUT_SECONDS must be a number".to_string()))?;
        if query_timeout_seconds == 0 {
            return Err(AppError::ConfigError(
                "QUERY_TIMEOUT_SECONDS must be greater than zero".to_string(),
            ));
        }

        let client_origin = lookup("CLIENT_ORIGIN")
            .unwrap_or_else(|| "http://localhost:3000".to_owned());
        let port = lookup("PORT")
            .unwrap_or_else(|| "8000".to_owned())
            .parse::<u16>()
            .map_err(|_| AppError::ConfigError("PORT must be a number".to_string()))?;

        Ok(Config {
            cluster_url,
            cluster_username,
            cluster_password,
            query_timeout_seconds,
            client_origin,
            port,
        })
    }

    pub fn query_timeout(&self) -> Duration {
        Duration::from_secs(self.query_timeout_seconds)
    }
}
