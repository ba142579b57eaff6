//! Configuration management for the Fingerspell server

use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_ASSET_ROOT: &str = "public/images/asl_alphabet";
const DEFAULT_MAX_TEXT_LENGTH: usize = 1000;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub assets: AssetConfig,
    pub transcribe: TranscribeConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssetConfig {
    /// Directory holding `{letter}_test.jpg` and `space_test.jpg`
    pub root: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscribeConfig {
    /// Longest accepted input, in characters
    pub max_text_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig {
                host: DEFAULT_HOST.to_string(),
                port: DEFAULT_PORT,
            },
            assets: AssetConfig {
                root: PathBuf::from(DEFAULT_ASSET_ROOT),
            },
            transcribe: TranscribeConfig {
                max_text_length: DEFAULT_MAX_TEXT_LENGTH,
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build from a variable source; unset variables fall back to defaults
    pub fn from_vars<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        Ok(Config {
            server: ServerConfig {
                host: var("SERVER_HOST").unwrap_or(defaults.server.host),
                port: parse_var(&var, "SERVER_PORT")?.unwrap_or(defaults.server.port),
            },
            assets: AssetConfig {
                root: var("ASSET_ROOT")
                    .map(PathBuf::from)
                    .unwrap_or(defaults.assets.root),
            },
            transcribe: TranscribeConfig {
                max_text_length: parse_var(&var, "MAX_TEXT_LENGTH")?
                    .unwrap_or(defaults.transcribe.max_text_length),
            },
        })
    }

    /// Address to bind the listener to
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self.server.host.parse().map_err(|_| ConfigError::InvalidValue {
            key: "SERVER_HOST",
            value: self.server.host.clone(),
        })?;
        Ok(SocketAddr::new(ip, self.server.port))
    }
}

fn parse_var<F, T>(var: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match var(key) {
        None => Ok(None),
        Some(value) => {
            let parsed = value.trim().parse::<T>();
            parsed
                .map(Some)
                .map_err(|_| ConfigError::InvalidValue { key, value })
        }
    }
}
