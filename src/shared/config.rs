// Process configuration read once at startup.
//
// Sources, first match wins
// - Process environment.
// - A `.env` file in the working directory, when present.
// - Built-in defaults.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use thiserror::Error;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {name}: `{value}`")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub log_filter: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host: IpAddr = match lookup("QUIZZES_HOST") {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                name: "QUIZZES_HOST",
                value,
            })?,
            None => DEFAULT_HOST,
        };
        let port: u16 = match lookup("QUIZZES_PORT") {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                name: "QUIZZES_PORT",
                value,
            })?,
            None => DEFAULT_PORT,
        };
        let log_filter = lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            host,
            port,
            log_filter,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
