use std::net::SocketAddr;

use minidata_types::{duplicate_titles, MetricRecord};
use serde::Deserialize;
use thiserror::Error;

#[derive(Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// Overrides the cargo-leptos site address when present.
    #[serde(default)]
    pub server: Option<ServerConfig>,
    /// Card deck served on the overview page, in display order.
    #[serde(default)]
    pub cards: Vec<MetricRecord>,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0".into(),
            port: 3000,
        }
    }
}

impl Config {
    /// Address to serve on: the configured one, else `fallback`.
    pub fn site_addr(&self, fallback: SocketAddr) -> SocketAddr {
        let Some(server) = &self.server else {
            return fallback;
        };
        match server.socket_addr() {
            Ok(addr) => addr,
            Err(e) => {
                tracing::warn!("{e}, keeping {fallback}");
                fallback
            }
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let raw = format!("{}:{}", self.bind, self.port);
        raw.parse()
            .map_err(|source| ConfigError::Address { addr: raw, source })
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
    #[error("invalid bind address {addr}: {source}")]
    Address {
        addr: String,
        source: std::net::AddrParseError,
    },
}

pub fn parse(contents: &str, path: &str) -> Result<Config, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::Parse {
        path: path.to_string(),
        source,
    })
}

pub fn try_load(path: &str) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_string(),
        source,
    })?;
    parse(&contents, path)
}

/// Loads the config at `path`, falling back to defaults on any error.
pub fn load(path: &str) -> Config {
    let config = match try_load(path) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("{e}, using defaults");
            Config::default()
        }
    };

    for title in duplicate_titles(&config.cards) {
        tracing::warn!("card title {title:?} appears more than once in {path}");
    }

    config
}
