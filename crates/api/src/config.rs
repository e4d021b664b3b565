//! Server configuration loaded from the environment.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use phonestore_observability::LogFormat;
use thiserror::Error;

use crate::app::body::BodyLimits;

pub const HOST_VAR: &str = "PHONESTORE_HOST";
pub const PORT_VAR: &str = "PORT";
pub const MAX_BODY_VAR: &str = "PHONESTORE_MAX_BODY_BYTES";
pub const BODY_TIMEOUT_VAR: &str = "PHONESTORE_BODY_TIMEOUT_MS";
pub const LOG_FORMAT_VAR: &str = "PHONESTORE_LOG_FORMAT";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: &'static str, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Largest request body accepted, in bytes.
    pub max_body_bytes: usize,
    /// How long a client may take to deliver a complete body.
    pub body_read_timeout: Duration,
    pub log_format: LogFormat,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
            max_body_bytes: 64 * 1024,
            body_read_timeout: Duration::from_secs(10),
            log_format: LogFormat::Json,
        }
    }
}

impl ServerConfig {
    /// Read the process environment. Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] over an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = parse_var(&lookup, HOST_VAR, defaults.host, |v| {
            v.parse::<IpAddr>().map_err(|e| e.to_string())
        })?;
        let port = parse_var(&lookup, PORT_VAR, defaults.port, |v| {
            v.parse::<u16>().map_err(|e| e.to_string())
        })?;
        let max_body_bytes = parse_var(&lookup, MAX_BODY_VAR, defaults.max_body_bytes, |v| {
            match v.parse::<usize>() {
                Ok(0) => Err("must be greater than zero".to_string()),
                Ok(n) => Ok(n),
                Err(e) => Err(e.to_string()),
            }
        })?;
        let body_read_timeout = parse_var(&lookup, BODY_TIMEOUT_VAR, defaults.body_read_timeout, |v| {
            match v.parse::<u64>() {
                Ok(0) => Err("must be greater than zero".to_string()),
                Ok(ms) => Ok(Duration::from_millis(ms)),
                Err(e) => Err(e.to_string()),
            }
        })?;
        let log_format = parse_var(&lookup, LOG_FORMAT_VAR, defaults.log_format, |v| v.parse::<LogFormat>())?;

        Ok(Self {
            host,
            port,
            max_body_bytes,
            body_read_timeout,
            log_format,
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn body_limits(&self) -> BodyLimits {
        BodyLimits {
            max_bytes: self.max_body_bytes,
            read_timeout: self.body_read_timeout,
        }
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
    parse: impl FnOnce(&str) -> Result<T, String>,
) -> Result<T, ConfigError> {
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => {
            parse(raw.trim()).map_err(|message| ConfigError::InvalidValue { key, message })
        }
        _ => Ok(default),
    }
}
