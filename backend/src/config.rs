//! Process configuration read from the environment.
//!
//! Repository selection has its own configuration path, see
//! [`crate::db::RepositoryFactory`].

use std::env;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::Context;

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "pretty" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown log format: {}", s)),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogConfig {
    pub format: LogFormat,
    /// Append log lines to this file instead of stdout.
    pub file: Option<PathBuf>,
}

/// Server settings.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Directory holding `page/`, `styles/`, `images/` and `javascript/`.
    pub asset_root: PathBuf,
    pub rate_limit_burst: u32,
    pub rate_limit_per_sec: f64,
    pub log: LogConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            asset_root: PathBuf::from("."),
            rate_limit_burst: 3,
            rate_limit_per_sec: 1.0,
            log: LogConfig::default(),
        }
    }
}

fn parse_var<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Invalid {key}={raw:?}: {e}")),
        Err(_) => Ok(default),
    }
}

impl AppConfig {
    /// Read `HOST`, `PORT`, `ASSET_ROOT`, `RATE_LIMIT_BURST`,
    /// `RATE_LIMIT_PER_SEC`, `LOG_FORMAT` and `LOG_FILE`.
    ///
    /// Unset variables take their defaults; set but malformed ones are an
    /// error.
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: parse_var("PORT", defaults.port)?,
            asset_root: env::var("ASSET_ROOT")
                .map(PathBuf::from)
                .unwrap_or(defaults.asset_root),
            rate_limit_burst: parse_var("RATE_LIMIT_BURST", defaults.rate_limit_burst)?,
            rate_limit_per_sec: parse_var("RATE_LIMIT_PER_SEC", defaults.rate_limit_per_sec)?,
            log: LogConfig {
                format: parse_var("LOG_FORMAT", LogFormat::Text)?,
                file: env::var("LOG_FILE")
                    .ok()
                    .filter(|p| !p.is_empty())
                    .map(PathBuf::from),
            },
        })
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid bind address {}:{}", self.host, self.port))
    }

    pub fn page_dir(&self) -> PathBuf {
        self.asset_root.join("page")
    }

    pub fn asset_root(&self) -> &Path {
        &self.asset_root
    }
}
