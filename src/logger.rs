use anyhow::{Context, Result};
use chrono::Local;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::constants::{APP_NAME, MAX_LOG_ENTRIES};

/// Shared logger that can be used across the application.
///
/// Entries are always kept in memory for the logs dialog. When file logging is
/// enabled, every entry is also forwarded to the `log` facade, which a `fern`
/// dispatch writes to [`Logger::get_log_file_path`].
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
    enabled: bool,
}

impl Logger {
    /// In-memory only logger.
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            enabled: false,
        }
    }

    /// Create a logger according to the `[logging]` configuration.
    pub fn from_config(enabled: bool) -> Result<Self> {
        if enabled {
            Self::init_file_logging()?;
        }

        Ok(Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            enabled,
        })
    }

    fn init_file_logging() -> Result<()> {
        let path = Self::get_log_file_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }

        let log_file =
            fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

        let dispatch = fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{}] {:<5} {}",
                    Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                    record.level(),
                    message
                ))
            })
            .level(log::LevelFilter::Info)
            .chain(log_file);

        // Only one global logger per process; a second init keeps the first.
        let _ = dispatch.apply();
        Ok(())
    }

    /// Location of the log file when file logging is enabled.
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::data_dir()
            .or_else(dirs::home_dir)
            .map(|dir| dir.join(APP_NAME).join(format!("{}.log", APP_NAME)))
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
    }

    /// Whether entries are also written to the log file
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        if self.enabled {
            log::info!("{}", message);
        }

        let timestamp = Local::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Ok(mut logs) = self.logs.lock() {
            if logs.len() >= MAX_LOG_ENTRIES {
                logs.remove(0);
            }
            logs.push(formatted_message);
        }
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            logs.iter().rev().cloned().collect()
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
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
