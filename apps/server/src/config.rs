use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use networth_core::constants::DEFAULT_EXCHANGE_RATE;
use networth_market_data::provider::exchange_rate_api::DEFAULT_BASE_URL;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub rate_api_url: String,
    pub rate_timeout: Duration,
    /// Rate offered when the caller has none and the provider is unreachable.
    pub default_exchange_rate: f64,
    pub log_format: LogFormat,
}

impl Config {
    /// Reads `NW_*` variables, after loading `.env` if one exists.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let listen_addr: SocketAddr = var_or("NW_LISTEN_ADDR", "0.0.0.0:8080")
            .parse()
            .context("Invalid NW_LISTEN_ADDR")?;
        let db_path = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| var_or("NW_DB_PATH", "./db/networth.db"));
        let cors_allow = var_or("NW_CORS_ALLOW_ORIGINS", "*")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = var_or("NW_REQUEST_TIMEOUT_MS", "30000")
            .parse()
            .context("Invalid NW_REQUEST_TIMEOUT_MS")?;
        let rate_timeout_ms: u64 = var_or("NW_RATE_TIMEOUT_MS", "5000")
            .parse()
            .context("Invalid NW_RATE_TIMEOUT_MS")?;

        let default_exchange_rate = match std::env::var("NW_DEFAULT_EXCHANGE_RATE") {
            Ok(raw) => raw
                .trim()
                .parse::<f64>()
                .context("Invalid NW_DEFAULT_EXCHANGE_RATE")?,
            Err(_) => DEFAULT_EXCHANGE_RATE,
        };
        if !default_exchange_rate.is_finite() || default_exchange_rate < 0.0 {
            anyhow::bail!(
                "NW_DEFAULT_EXCHANGE_RATE must be a non-negative number, got {}",
                default_exchange_rate
            );
        }

        let log_format = if var_or("NW_LOG_FORMAT", "text").eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Text
        };

        Ok(Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            rate_api_url: var_or("NW_RATE_API_URL", DEFAULT_BASE_URL),
            rate_timeout: Duration::from_millis(rate_timeout_ms),
            default_exchange_rate,
            log_format,
        })
    }
}

fn var_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
