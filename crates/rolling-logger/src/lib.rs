//! Rolling Logger
//!
//! File logger for app shells:
//! - size-based rotation (`<app>.log`, `<app>.log.1` … `<app>.log.N`)
//! - in-memory circular buffer of the most recent lines, for in-app diagnostics
//! - `log` records are bridged into the `tracing` subscriber
//! - on Android, records are also forwarded to logcat

use std::collections::VecDeque;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

use log::LevelFilter;

/// Rotation and buffering limits
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Rotate once the active file would grow past this many bytes
    pub max_bytes: u64,
    /// Number of rotated files kept next to the active one
    pub max_files: usize,
    /// Lines kept in the in-memory circular buffer
    pub buffer_lines: usize,
    pub level: LevelFilter,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            max_bytes: 1024 * 1024,
            max_files: 3,
            buffer_lines: 200,
            level: LevelFilter::Info,
        }
    }
}

struct Inner {
    path: PathBuf,
    file: File,
    written: u64,
    max_bytes: u64,
    max_files: usize,
    buffer_lines: usize,
    recent: VecDeque<String>,
    partial: String,
}

impl Inner {
    fn write_bytes(&mut self, buf: &[u8]) -> io::Result<()> {
        if self.written > 0 && self.written + buf.len() as u64 > self.max_bytes {
            self.rotate()?;
        }
        self.file.write_all(buf)?;
        self.written += buf.len() as u64;
        self.remember(buf);
        Ok(())
    }

    fn remember(&mut self, buf: &[u8]) {
        if self.buffer_lines == 0 {
            return;
        }
        self.partial.push_str(&String::from_utf8_lossy(buf));
        while let Some(pos) = self.partial.find('\n') {
            let line: String = self.partial.drain(..=pos).collect();
            let line = line.trim_end_matches(|c| c == '\n' || c == '\r').to_string();
            if self.recent.len() == self.buffer_lines {
                self.recent.pop_front();
            }
            self.recent.push_back(line);
        }
    }

    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;

        if self.max_files == 0 {
            self.file = File::create(&self.path)?;
            self.written = 0;
            return Ok(());
        }

        let oldest = rotated_path(&self.path, self.max_files);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for index in (1..self.max_files).rev() {
            let from = rotated_path(&self.path, index);
            if from.exists() {
                fs::rename(&from, rotated_path(&self.path, index + 1))?;
            }
        }
        fs::rename(&self.path, rotated_path(&self.path, 1))?;

        self.file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        self.written = 0;
        Ok(())
    }
}

fn rotated_path(path: &Path, index: usize) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(format!(".{}", index));
    PathBuf::from(name)
}

/// Shared handle to the active log file
///
/// Cloning is cheap; every clone writes to the same file and buffer.
#[derive(Clone)]
pub struct RollingFile {
    inner: Arc<Mutex<Inner>>,
}

impl RollingFile {
    /// Open (or create) `<dir>/<app_name>.log` in append mode
    pub fn open(dir: impl AsRef<Path>, app_name: &str, config: &LoggerConfig) -> io::Result<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        let path = dir.join(format!("{}.log", app_name));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let written = file.metadata()?.len();

        Ok(Self {
            inner: Arc::new(Mutex::new(Inner {
                path,
                file,
                written,
                max_bytes: config.max_bytes,
                max_files: config.max_files,
                buffer_lines: config.buffer_lines,
                recent: VecDeque::with_capacity(config.buffer_lines),
                partial: String::new(),
            })),
        })
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Path of the active (non-rotated) file
    pub fn path(&self) -> PathBuf {
        self.lock().path.clone()
    }

    /// Most recent complete lines, oldest first
    pub fn recent_lines(&self) -> Vec<String> {
        self.lock().recent.iter().cloned().collect()
    }

    /// Append one line (a trailing newline is added)
    pub fn append_line(&self, line: &str) -> io::Result<()> {
        let mut inner = self.lock();
        inner.write_bytes(format!("{}\n", line).as_bytes())
    }
}

impl Write for RollingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.lock().write_bytes(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.lock().file.flush()
    }
}

static LOGGER: OnceLock<RollingFile> = OnceLock::new();

fn to_tracing_level(level: LevelFilter) -> tracing::Level {
    match level {
        LevelFilter::Off | LevelFilter::Error => tracing::Level::ERROR,
        LevelFilter::Warn => tracing::Level::WARN,
        LevelFilter::Info => tracing::Level::INFO,
        LevelFilter::Debug => tracing::Level::DEBUG,
        LevelFilter::Trace => tracing::Level::TRACE,
    }
}

/// Initialize the global logger with default limits
pub fn init_logger(dir: impl AsRef<Path>, app_name: &str) -> io::Result<()> {
    init_logger_with(dir, app_name, LoggerConfig::default())
}

/// Initialize the global logger
///
/// Fails with `AlreadyExists` when called twice in one process.
pub fn init_logger_with(dir: impl AsRef<Path>, app_name: &str, config: LoggerConfig) -> io::Result<()> {
    let file = RollingFile::open(dir, app_name, &config)?;
    if LOGGER.set(file.clone()).is_err() {
        return Err(io::Error::new(io::ErrorKind::AlreadyExists, "logger already initialized"));
    }

    let builder = tracing_subscriber::fmt()
        .with_writer(move || file.clone())
        .with_ansi(false)
        .with_max_level(to_tracing_level(config.level));

    #[cfg(target_os = "android")]
    {
        android_logger::init_once(
            android_logger::Config::default()
                .with_max_level(config.level)
                .with_tag(app_name),
        );
        tracing::subscriber::set_global_default(builder.finish())
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
    }

    #[cfg(not(target_os = "android"))]
    builder
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

    Ok(())
}

fn write_line(level: &str, message: &str) -> io::Result<()> {
    let file = LOGGER
        .get()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "logger not initialized"))?;
    let line = format!(
        "[{}] {} {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
        level,
        message
    );
    file.append_line(&line)
}

pub fn info(message: &str) -> io::Result<()> {
    write_line("INFO", message)
}

pub fn warn(message: &str) -> io::Result<()> {
    write_line("WARN", message)
}

pub fn error(message: &str) -> io::Result<()> {
    write_line("ERROR", message)
}

/// Recent lines of the global logger (empty before init)
pub fn recent_lines() -> Vec<String> {
    LOGGER.get().map(|f| f.recent_lines()).unwrap_or_default()
}

/// Active log file of the global logger
pub fn log_path() -> Option<PathBuf> {
    LOGGER.get().map(|f| f.path())
}
