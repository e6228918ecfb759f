// src/config.rs

use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://associaval-backend.onrender.com";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Backend root, without trailing slash.
    pub api_base: String,
    pub bind: SocketAddr,
    pub workers: usize,
    /// Upper bound on every backend request.
    pub fetch_timeout: Duration,
    pub search: SearchConfig,
}

/// Tuning for the live search box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub quiet_period: Duration,
    /// Trimmed queries shorter than this (in chars) clear the search.
    pub min_query_len: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            quiet_period: Duration::from_millis(300),
            min_query_len: 2,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            bind: SocketAddr::from(([127, 0, 0, 1], 3000)),
            workers: 8,
            fetch_timeout: Duration::from_secs(10),
            search: SearchConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Unparseable values keep the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(base) = lookup("ASSOCIAVAL_API_BASE").filter(|s| !s.trim().is_empty()) {
            cfg.api_base = base.trim().trim_end_matches('/').to_string();
        }
        if let Some(bind) = parse_var(&lookup, "ASSOCIAVAL_BIND") {
            cfg.bind = bind;
        }
        if let Some(workers) = parse_var::<usize, _>(&lookup, "ASSOCIAVAL_WORKERS") {
            cfg.workers = workers.max(1);
        }
        if let Some(secs) = parse_var::<u64, _>(&lookup, "ASSOCIAVAL_FETCH_TIMEOUT_SECS") {
            cfg.fetch_timeout = Duration::from_secs(secs.max(1));
        }

        cfg
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring unparseable setting");
            None
        }
    }
}
