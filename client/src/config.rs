//! API client configuration resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment at runtime, so the backend base
//! URL and request timeout are baked in from `WORKFORCE_API_URL` and
//! `WORKFORCE_REQUEST_TIMEOUT_SECS` when the crate is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

/// Default client-side request timeout.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// `localStorage` key holding the bearer credential.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Typed configuration shared by the API client and session resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Backend origin without a trailing slash; empty means same origin.
    pub base_url: String,
    /// Upper bound for a single request, after which it fails locally.
    pub timeout: Duration,
    /// Storage key for the credential.
    pub token_key: &'static str,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            token_key: TOKEN_STORAGE_KEY,
        }
    }
}

impl ApiConfig {
    /// Build the config from values captured at compile time.
    ///
    /// Optional:
    /// - `WORKFORCE_API_URL`: backend origin, same origin when absent
    /// - `WORKFORCE_REQUEST_TIMEOUT_SECS`: default 10
    pub fn from_build_env() -> Self {
        Self::from_raw(option_env!("WORKFORCE_API_URL"), option_env!("WORKFORCE_REQUEST_TIMEOUT_SECS"))
    }

    fn from_raw(base_url: Option<&str>, timeout_secs: Option<&str>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.unwrap_or_default()),
            timeout: Duration::from_secs(parse_timeout_secs(timeout_secs)),
            token_key: TOKEN_STORAGE_KEY,
        }
    }

    /// Join an API path (starting with `/`) onto the configured base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}

fn parse_timeout_secs(raw: Option<&str>) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
}
