use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::str::FromStr;

pub type Environment = BTreeMap<String, String>;

const ENV_PLAYER_ID: &str = "SORTIE_PLAYER_ID";
const ENV_LOG_FILE: &str = "SORTIE_LOG_FILE";
const ENV_LOG_CONSOLE: &str = "SORTIE_LOG_CONSOLE";
const ENV_WARN_ONLY: &str = "SORTIE_WARN_ONLY";
const ENV_LOG_DIR: &str = "SORTIE_LOG_DIR";
const ENV_WORKERS: &str = "SORTIE_WORKERS";

/// Which log sinks a debug API writes to.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct LogConfig {
    /// Write every record (trace and up) to `<log_dir>/api-<player_id>-log.txt`.
    pub to_file: bool,
    /// Print info and up to stdout.
    pub to_console: bool,
    /// Raise the console threshold to warnings. The file sink is unaffected.
    pub warn_only: bool,
    pub log_dir: PathBuf,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            to_file: true,
            to_console: true,
            warn_only: false,
            log_dir: PathBuf::from("logs"),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct ApiConfig {
    pub player_id: i64,
    pub log: LogConfig,
    /// Threads running asynchronous actions. Zero picks one per CPU.
    pub worker_threads: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            player_id: 0,
            log: LogConfig::default(),
            worker_threads: 4,
        }
    }
}

impl ApiConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::Config(e.to_string()))
    }

    /// Reads the `SORTIE_*` process environment variables over the defaults.
    pub fn from_env() -> Result<Self> {
        let env: Environment = std::env::vars()
            .filter(|(k, _)| k.starts_with("SORTIE_"))
            .collect();
        Self::default().with_environment(&env)
    }

    /// Overlays the recognised keys of `env` on this config.
    pub fn with_environment(mut self, env: &Environment) -> Result<Self> {
        if let Some(v) = env.get(ENV_PLAYER_ID) {
            self.player_id = parse_value(ENV_PLAYER_ID, v)?;
        }
        if let Some(v) = env.get(ENV_LOG_FILE) {
            self.log.to_file = parse_flag(ENV_LOG_FILE, v)?;
        }
        if let Some(v) = env.get(ENV_LOG_CONSOLE) {
            self.log.to_console = parse_flag(ENV_LOG_CONSOLE, v)?;
        }
        if let Some(v) = env.get(ENV_WARN_ONLY) {
            self.log.warn_only = parse_flag(ENV_WARN_ONLY, v)?;
        }
        if let Some(v) = env.get(ENV_LOG_DIR) {
            self.log.log_dir = PathBuf::from(v);
        }
        if let Some(v) = env.get(ENV_WORKERS) {
            self.worker_threads = parse_value(ENV_WORKERS, v)?;
        }
        Ok(self)
    }
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| Error::Config(format!("{key}={value:?}: {e}")))
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(Error::Config(format!("{key}={value:?}: expected a boolean"))),
    }
}
