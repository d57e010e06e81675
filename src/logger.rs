//! Logging backend
//!
//! Entries are kept in memory for display and, when enabled, mirrored to a
//! log file. Only the newest [`MAX_LOG_ENTRIES`] entries stay in memory; a
//! failed file write is recorded as an entry of its own.
//! [`Logger::install`] routes the `log` facade into the logger
//! through a `fern` dispatch.

use crate::constants::{CONFIG_DIR_NAME, LOG_FILE_NAME, MAX_LOG_ENTRIES};
use anyhow::{Context, Result};
use chrono::Local;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Shared logger that can be used across the application
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
    enabled: bool,
    file_writer: Option<Arc<Mutex<BufWriter<File>>>>,
}

impl Logger {
    /// In-memory logger with file output disabled
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            enabled: false,
            file_writer: None,
        }
    }

    /// Create a logger, opening the default log file when `enabled`
    pub fn from_config(enabled: bool) -> Result<Self> {
        if enabled {
            Self::with_file(Self::get_log_file_path()?)
        } else {
            Ok(Self::new())
        }
    }

    /// Create a logger that appends to `path`, creating parent directories
    pub fn with_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file: {}", path.display()))?;

        Ok(Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            enabled: true,
            file_writer: Some(Arc::new(Mutex::new(BufWriter::new(file)))),
        })
    }

    /// Default log file location under the user's local data directory
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::data_local_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join(CONFIG_DIR_NAME).join(LOG_FILE_NAME))
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn has_file_writer(&self) -> bool {
        self.file_writer.is_some()
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        let timestamp = Local::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        let write_error = self.file_writer.as_ref().and_then(|writer| {
            let mut writer = writer.lock().ok()?;
            writeln!(writer, "{formatted_message}").err()
        });

        if let Ok(mut logs) = self.logs.lock() {
            logs.push(formatted_message);
            if let Some(error) = write_error {
                logs.push(format!("[{}] Failed to write log file: {}", timestamp, error));
            }
            if logs.len() > MAX_LOG_ENTRIES {
                let excess = logs.len() - MAX_LOG_ENTRIES;
                logs.drain(..excess);
            }
        }
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            let mut sorted_logs = logs.clone();
            // Reverse to show newest logs first (descending order by timestamp)
            sorted_logs.reverse();
            sorted_logs
        } else {
            Vec::new()
        }
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }

    /// Flush the file writer, if any
    pub fn flush(&self) -> Result<()> {
        if let Some(writer) = &self.file_writer {
            if let Ok(mut writer) = writer.lock() {
                writer.flush().context("Failed to flush log file")?;
            }
        }
        Ok(())
    }

    /// Install this logger as the global `log` backend.
    ///
    /// Can only succeed once per process.
    pub fn install(&self, level: log::LevelFilter) -> Result<()> {
        let sink = self.clone();

        fern::Dispatch::new()
            .format(|out, message, record| out.finish(format_args!("{} {}: {}", record.level(), record.target(), message)))
            .level(level)
            .chain(fern::Output::call(move |record| sink.log(record.args().to_string())))
            .apply()
            .context("Failed to install logger")
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
