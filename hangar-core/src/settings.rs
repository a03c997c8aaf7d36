use std::{env, path::PathBuf, str::FromStr, time::Duration};

use anyhow::Context as _;
use hangar_utils::pagination::{DEFAULT_SESSION_CAPACITY, DEFAULT_SESSION_TTL_SECS};
use hangar_vehicles::client::DEFAULT_BASE_URL;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_VEHICLE_API_TIMEOUT_SECS: u64 = 10;

/// Runtime settings for the interactions server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Hex Ed25519 public key of the Discord application.
    pub public_key: String,
    pub port: u16,
    pub vehicle_api_url: String,
    pub vehicle_api_timeout: Duration,
    pub session_ttl: Duration,
    pub session_capacity: u64,
    pub log_dir: PathBuf,
    pub error_log_dir: PathBuf,
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read settings through `lookup`, applying defaults for optional keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let public_key = lookup("PUBLIC_KEY")
            .filter(|value| !value.trim().is_empty())
            .context("PUBLIC_KEY must be set")?;

        Ok(Self {
            public_key,
            port: parsed(&lookup, "PORT", DEFAULT_PORT)?,
            vehicle_api_url: lookup("VEHICLE_API_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
            vehicle_api_timeout: Duration::from_secs(parsed(
                &lookup,
                "VEHICLE_API_TIMEOUT_SECS",
                DEFAULT_VEHICLE_API_TIMEOUT_SECS,
            )?),
            session_ttl: Duration::from_secs(parsed(
                &lookup,
                "SESSION_TTL_SECS",
                DEFAULT_SESSION_TTL_SECS,
            )?),
            session_capacity: parsed(&lookup, "SESSION_CAPACITY", DEFAULT_SESSION_CAPACITY)?,
            log_dir: lookup("LOG_DIR").map_or_else(|| PathBuf::from("logs"), PathBuf::from),
            error_log_dir: lookup("ERROR_LOG_DIR")
                .map_or_else(|| PathBuf::from("errors"), PathBuf::from),
        })
    }
}

fn parsed<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} has an invalid value `{raw}`")),
        None => Ok(default),
    }
}
