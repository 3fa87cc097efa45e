use anyhow::{Context, Result};
use directories::ProjectDirs;
use duke_core::{LogLevel, LoggingError, DEFAULT_ASSISTANT_NAME};
use serde::{Deserialize, Deserializer};
use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "duke";
const CONFIG_PATH_ENV: &str = "DUKE_CONFIG_PATH";
const DATA_FILE_NAME: &str = "duke.txt";
const FALLBACK_DATA_FILE: &str = "./data/duke.txt";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub assistant: AssistantConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StorageConfig {
    pub data_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    #[serde(default, deserialize_with = "deserialize_level")]
    pub level: Option<LogLevel>,
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AssistantConfig {
    #[serde(default = "default_assistant_name")]
    pub name: String,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            name: default_assistant_name(),
        }
    }
}

fn deserialize_level<'de, D>(deserializer: D) -> Result<Option<LogLevel>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|value| parse_log_level(&value))
        .transpose()
        .map_err(serde::de::Error::custom)
}

/// Parses a level name as written in the config file or on the command line.
pub fn parse_log_level(value: &str) -> Result<LogLevel, String> {
    value
        .parse::<LogLevel>()
        .map_err(|err: LoggingError| err.to_string())
}

fn default_assistant_name() -> String {
    DEFAULT_ASSISTANT_NAME.to_string()
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", APP_NAME)
}

/// `--config` flag, then `DUKE_CONFIG_PATH`, then the platform config dir.
pub fn config_file(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        return Some(PathBuf::from(path));
    }
    project_dirs().map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Reads the config file; a missing file means defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    if !path.exists() {
        return Ok(Config::default());
    }

    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    parse_config(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

pub fn parse_config(contents: &str) -> Result<Config> {
    Ok(toml::from_str(contents)?)
}

pub fn data_file(config: &Config) -> PathBuf {
    if let Some(path) = &config.storage.data_file {
        return path.clone();
    }
    project_dirs()
        .map(|dirs| dirs.data_dir().join(DATA_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(FALLBACK_DATA_FILE))
}

pub fn log_dir(config: &Config) -> Option<PathBuf> {
    if let Some(dir) = &config.logging.dir {
        return Some(dir.clone());
    }
    project_dirs().map(|dirs| dirs.data_dir().join("logs"))
}

pub fn log_level(config: &Config) -> LogLevel {
    config
        .logging
        .level
        .unwrap_or_else(duke_core::default_log_level)
}
