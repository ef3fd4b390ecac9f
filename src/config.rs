//! Configuration for BrightSpeak.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::audio::SpeechOptions;
use crate::domain::{DomainError, DomainResult};

const CONFIG_FILE: &str = "brightspeak.toml";

/// BrightSpeak configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the database and, unless overridden, the logs.
    pub data_dir: PathBuf,
    /// Database file name inside `data_dir`.
    pub db_file: String,
    /// Text-to-speech settings.
    pub speech: SpeechOptions,
    /// Log file settings.
    pub logging: LoggingSettings,
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("brightspeak");

        Self {
            data_dir,
            db_file: "brightspeak.db".to_string(),
            speech: SpeechOptions::default(),
            logging: LoggingSettings::default(),
        }
    }
}

/// Where a configuration came from and what went wrong on the way
///
/// Loading runs before logging is set up, so the caller replays these.
#[derive(Debug, Default, Clone)]
pub struct LoadReport {
    /// File the configuration was read from, `None` for defaults.
    pub source: Option<PathBuf>,
    /// Candidate files that existed but could not be loaded.
    pub warnings: Vec<String>,
}

impl Config {
    /// Load configuration with fallback chain.
    pub fn load(config_path: Option<&PathBuf>) -> DomainResult<Self> {
        Self::load_with_report(config_path).map(|(config, _)| config)
    }

    /// Load configuration with fallback chain, reporting the source and
    /// any skipped candidates.
    pub fn load_with_report(config_path: Option<&PathBuf>) -> DomainResult<(Self, LoadReport)> {
        // An explicit path must load
        if let Some(path) = config_path {
            let config = Self::load_from_file(path)?;
            let report = LoadReport {
                source: Some(path.clone()),
                warnings: Vec::new(),
            };
            return Ok((config, report));
        }

        let mut candidates = Vec::new();
        // Primary location: ~/.config/brightspeak/brightspeak.toml
        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(config_dir.join("brightspeak").join(CONFIG_FILE));
        }
        // Fallback location: ./brightspeak.toml
        candidates.push(PathBuf::from(CONFIG_FILE));

        Ok(Self::load_first(&candidates))
    }

    fn load_first(candidates: &[PathBuf]) -> (Self, LoadReport) {
        let mut report = LoadReport::default();
        for path in candidates.iter().filter(|p| p.exists()) {
            match Self::load_from_file(path) {
                Ok(config) => {
                    report.source = Some(path.clone());
                    return (config, report);
                }
                Err(e) => {
                    let warning = format!("Failed to load config from {}: {}", path.display(), e);
                    log::warn!("{}", warning);
                    report.warnings.push(warning);
                }
            }
        }

        log::info!("No config file found, using defaults");
        (Self::default(), report)
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> DomainResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| DomainError::Config(format!("Failed to read {}: {}", path.display(), e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| DomainError::Config(format!("Failed to parse {}: {}", path.display(), e)))?;

        log::info!("Loaded config from: {}", path.display());
        Ok(config)
    }

    /// Path of the SQLite database.
    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(&self.db_file)
    }

    /// Directory for rolling log files.
    pub fn log_dir(&self) -> PathBuf {
        self.logging
            .dir
            .clone()
            .unwrap_or_else(|| self.data_dir.join("logs"))
    }

    /// Settings for the rolling logger.
    pub fn logger_config(&self) -> rolling_logger::LoggerConfig {
        rolling_logger::LoggerConfig {
            max_bytes: self.logging.max_bytes,
            max_files: self.logging.max_files,
            buffer_lines: self.logging.buffer_lines,
            ..Default::default()
        }
    }
}

/// Log file settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log directory (defaults to `<data_dir>/logs`).
    pub dir: Option<PathBuf>,
    /// Rotate once the active file reaches this size.
    pub max_bytes: u64,
    /// Rotated files to keep.
    pub max_files: usize,
    /// Recent lines kept in memory.
    pub buffer_lines: usize,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            dir: None,
            max_bytes: 1024 * 1024,
            max_files: 3,
            buffer_lines: 200,
        }
    }
}
