use std::net::SocketAddr;

use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub rate_limit_per_second: u32,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let bind_addr = env_string("DOGS_BIND_ADDR", "127.0.0.1:18080")
            .parse::<SocketAddr>()
            .context("DOGS_BIND_ADDR must be a valid host:port")?;

        let rate_limit_per_second = env_string("DOGS_RATE_LIMIT_PER_SECOND", "10")
            .parse::<u32>()
            .context("DOGS_RATE_LIMIT_PER_SECOND must be a non-negative integer")?;

        Ok(Self {
            bind_addr,
            rate_limit_per_second,
        })
    }
}

fn env_string(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
