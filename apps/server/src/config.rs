//! Server configuration from environment variables

use asma_core::RecitationConfig;

/// Runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub log_filter: String,
    pub recitation: RecitationConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            database_url: "sqlite://asma.db?mode=rwc".to_string(),
            log_filter: "info".to_string(),
            recitation: RecitationConfig::default(),
        }
    }
}

impl Config {
    /// Load from the process environment (after `.env`, if present)
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let mut recitation = defaults.recitation.clone();

        if let Some(ms) = parse_var(&lookup, "RECITATION_SUCCESS_DELAY_MS")? {
            recitation.success_delay_ms = ms;
        }
        if let Some(ms) = parse_var(&lookup, "RECITATION_RETRY_DELAY_MS")? {
            recitation.retry_delay_ms = ms;
        }
        if let Some(ms) = parse_var(&lookup, "RECITATION_ERROR_DELAY_MS")? {
            recitation.error_delay_ms = ms;
        }
        if let Some(ms) = parse_var(&lookup, "RECITATION_RESTART_DELAY_MS")? {
            recitation.restart_delay_ms = ms;
        }

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_var(&lookup, "PORT")?.unwrap_or(defaults.port),
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            log_filter: lookup("RUST_LOG").unwrap_or(defaults.log_filter),
            recitation,
        })
    }

    /// Socket address to bind
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> anyhow::Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| anyhow::anyhow!("invalid {key}={raw}: {e}")),
        None => Ok(None),
    }
}
