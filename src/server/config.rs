use std::str::FromStr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";

/// Optional limits applied to every booking. `None` leaves the dimension unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BookingPolicy {
    pub max_stay_nights: Option<i64>,
    pub max_party_size: Option<i32>,
}

pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    /// Populate demo data when the database has no rooms.
    pub seed_demo_data: bool,
    pub booking_policy: BookingPolicy,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            seed_demo_data: parse_optional("SEED_DEMO_DATA", false)?,
            booking_policy: BookingPolicy {
                max_stay_nights: parse_limit("MAX_STAY_NIGHTS")?,
                max_party_size: parse_limit("MAX_PARTY_SIZE")?,
            },
        })
    }
}

/// Reads an optional environment variable, falling back to `default` when unset.
fn parse_optional<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value,
            }),
        Err(_) => Ok(default),
    }
}

/// Reads an optional positive limit; unset means no limit.
fn parse_limit<T>(name: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr + PartialOrd + Default,
{
    match std::env::var(name) {
        Ok(value) => positive(name, &value).map(Some),
        Err(_) => Ok(None),
    }
}

/// Parses `value` and rejects anything that is not strictly positive.
fn positive<T>(name: &str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr + PartialOrd + Default,
{
    match value.trim().parse::<T>() {
        Ok(parsed) if parsed > T::default() => Ok(parsed),
        _ => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}
