//! Host runtime configuration.
//!
//! Values come from the process environment after `.env` has been loaded.
//! Leptos' own options (site root, output name) are read separately from
//! `[package.metadata.leptos]` / `LEPTOS_*` variables by `leptos_config`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::error::HostError;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    /// `HOST`, default `0.0.0.0`.
    pub bind_addr: IpAddr,
    /// `PORT`, default 3000.
    pub port: u16,
}

impl HostConfig {
    /// Read from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Config`] when `PORT` or `HOST` is set but does not
    /// parse.
    pub fn from_env() -> Result<Self, HostError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, HostError> {
        Ok(Self {
            bind_addr: parse_var(&lookup, "HOST", DEFAULT_BIND_ADDR)?,
            port: parse_var(&lookup, "PORT", DEFAULT_PORT)?,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, HostError> {
    match lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty()) {
        None => Ok(default),
        Some(raw) => raw.parse().map_err(|_| HostError::Config { key, value: raw }),
    }
}
