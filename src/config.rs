// config.rs
use crate::scraper::{ExtractOptions, DEFAULT_USER_AGENT};
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} has an invalid value '{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    pub navigation_timeout: Duration,
    pub landmark_timeout: Duration,
    pub user_agent: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let extract = ExtractOptions::default();
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
            navigation_timeout: extract.navigation_timeout,
            landmark_timeout: extract.landmark_timeout,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl AppConfig {
    /// Read settings from the environment (and `.env`, if present), defaulting anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            bind_addr: parse_or(&lookup, "LISTINGS_BIND_ADDR", defaults.bind_addr)?,
            max_workers: parse_or(&lookup, "LISTINGS_MAX_WORKERS", defaults.max_workers)?,
            navigation_timeout: Duration::from_secs(parse_or(
                &lookup,
                "LISTINGS_NAVIGATION_TIMEOUT_SECS",
                defaults.navigation_timeout.as_secs(),
            )?),
            landmark_timeout: Duration::from_secs(parse_or(
                &lookup,
                "LISTINGS_LANDMARK_TIMEOUT_SECS",
                defaults.landmark_timeout.as_secs(),
            )?),
            user_agent: lookup("LISTINGS_USER_AGENT")
                .filter(|ua| !ua.trim().is_empty())
                .unwrap_or(defaults.user_agent),
        })
    }

    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            navigation_timeout: self.navigation_timeout,
            landmark_timeout: self.landmark_timeout,
        }
    }
}

fn parse_or<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        None => Ok(default),
        Some(raw) if raw.trim().is_empty() => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            var,
            value: raw.clone(),
            reason: e.to_string(),
        }),
    }
}
