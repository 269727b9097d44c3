use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub log_level: String,
    /// Artificial latency applied to todo lookups, for exercising client
    /// loading states. Zero disables it.
    pub todo_delay: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let listen_addr = std::env::var("BEACON_LISTEN_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
            .parse()
            .context("BEACON_LISTEN_ADDR must be a socket address (host:port)")?;

        let log_level = std::env::var("BEACON_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let todo_delay_ms: u64 = std::env::var("BEACON_TODO_DELAY_MS")
            .ok()
            .map(|v| v.parse())
            .transpose()
            .context("BEACON_TODO_DELAY_MS must be an integer (milliseconds).")?
            .unwrap_or(0);
        let todo_delay = (todo_delay_ms > 0).then(|| Duration::from_millis(todo_delay_ms));

        Ok(Self {
            listen_addr,
            log_level,
            todo_delay,
        })
    }
}
