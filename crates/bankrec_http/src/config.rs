//! Server configuration read from the environment.
//!
//! # Responsibility
//! - Resolve bind address, logging and seeding options with defaults.
//!
//! # Invariants
//! - Blank variables behave as if unset.
//! - Invalid values are reported, never silently replaced by defaults.

use bankrec_core::default_log_level;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const ENV_ADDR: &str = "BANKREC_ADDR";
pub const ENV_LOG_LEVEL: &str = "BANKREC_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "BANKREC_LOG_DIR";
pub const ENV_SEED_SAMPLE: &str = "BANKREC_SEED_SAMPLE";

const DEFAULT_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_LOG_DIR_NAME: &str = "bankrec-logs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub log_level: String,
    /// Absolute directory for rolling log files.
    pub log_dir: PathBuf,
    /// Load the sample accounts into the store at startup.
    pub seed_sample: bool,
}

impl ServerConfig {
    /// Reads configuration from process environment variables.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let read = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let addr_text = read(ENV_ADDR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr_text
            .parse::<SocketAddr>()
            .map_err(|err| format!("invalid {ENV_ADDR} `{addr_text}`: {err}"))?;

        let log_level = read(ENV_LOG_LEVEL).unwrap_or_else(|| default_log_level().to_string());
        let log_dir = read(ENV_LOG_DIR)
            .map(PathBuf::from)
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_LOG_DIR_NAME));

        let seed_sample = match read(ENV_SEED_SAMPLE) {
            Some(value) => parse_bool(&value).ok_or_else(|| {
                format!("invalid {ENV_SEED_SAMPLE} `{value}`; expected true|false")
            })?,
            None => true,
        };

        Ok(Self {
            addr,
            log_level,
            log_dir,
            seed_sample,
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
