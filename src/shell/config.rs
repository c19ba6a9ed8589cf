// Runtime configuration.
//
// Purpose
// - Read the process environment (optionally seeded from a .env file) into typed settings.
//
// Responsibilities
// - Default to the bundled mock backend on 0.0.0.0:8080.
// - Reject an http backend without a base URL, and malformed extra week keys.

use crate::shared::core::iso_week::{IsoWeek, IsoWeekError};
use std::net::SocketAddr;
use thiserror::Error;

pub const BIND_ADDR: &str = "SCHEDULE_BIND_ADDR";
pub const BACKEND: &str = "SCHEDULE_BACKEND";
pub const API_BASE_URL: &str = "SCHEDULE_API_BASE_URL";
pub const EXTRA_WEEKS: &str = "SCHEDULE_EXTRA_WEEKS";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("SCHEDULE_BIND_ADDR: invalid socket address {0:?}")]
    BindAddr(String),

    #[error("SCHEDULE_BACKEND: expected \"mock\" or \"http\", got {0:?}")]
    Backend(String),

    #[error("SCHEDULE_API_BASE_URL is required when SCHEDULE_BACKEND=http")]
    MissingBaseUrl,

    #[error("SCHEDULE_EXTRA_WEEKS: {0}")]
    ExtraWeek(#[from] IsoWeekError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiBackend {
    Mock,
    Http { base_url: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub backend: ApiBackend,
    pub extra_weeks: Vec<IsoWeek>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from any variable source; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let raw_addr = get(BIND_ADDR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .parse()
            .map_err(|_| ConfigError::BindAddr(raw_addr.clone()))?;

        let backend = match get(BACKEND).as_deref().map(str::to_ascii_lowercase).as_deref() {
            None | Some("mock") => ApiBackend::Mock,
            Some("http") => ApiBackend::Http {
                base_url: get(API_BASE_URL).ok_or(ConfigError::MissingBaseUrl)?,
            },
            Some(other) => return Err(ConfigError::Backend(other.to_string())),
        };

        let extra_weeks = get(EXTRA_WEEKS)
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|key| !key.is_empty())
                    .map(str::parse::<IsoWeek>)
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            bind_addr,
            backend,
            extra_weeks,
        })
    }
}
