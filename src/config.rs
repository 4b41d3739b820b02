//! Host configuration parsed from environment variables.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only the listener address is configured here. Leptos site options
//! (`LEPTOS_*`) are read separately by `get_configuration`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Errors produced while reading host configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `PORT` is set but is not a valid TCP port.
    #[error("invalid PORT {value:?}: expected an integer in 1..=65535")]
    InvalidPort { value: String },

    /// `BIND_ADDR` is set but is not an IP address.
    #[error("invalid BIND_ADDR {value:?}: expected an IPv4 or IPv6 address")]
    InvalidBindAddr { value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    /// Build host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BIND_ADDR`: default `0.0.0.0`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            std::env::var("BIND_ADDR").ok().as_deref(),
            std::env::var("PORT").ok().as_deref(),
        )
    }

    /// Build host config from raw (possibly absent) values.
    pub fn from_values(bind_addr: Option<&str>, port: Option<&str>) -> Result<Self, ConfigError> {
        Ok(Self {
            bind_addr: parse_bind_addr(bind_addr)?,
            port: parse_port(port)?,
        })
    }

    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(DEFAULT_PORT);
    };
    match raw.parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(ConfigError::InvalidPort { value: raw.to_owned() }),
    }
}

fn parse_bind_addr(raw: Option<&str>) -> Result<IpAddr, ConfigError> {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(DEFAULT_BIND_ADDR);
    };
    raw.parse::<IpAddr>()
        .map_err(|_| ConfigError::InvalidBindAddr { value: raw.to_owned() })
}
