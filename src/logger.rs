use anyhow::{Context, Result};
use chrono::Utc;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Shared logger that can be used across the application.
///
/// Entries are always kept in memory for the log panel; when logging is
/// enabled in the config, `fern` also appends them to a file in the data
/// directory.
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
    enabled: bool,
    log_file: Option<PathBuf>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            enabled: false,
            log_file: None,
        }
    }

    /// Build a logger from the `[logging] enabled` flag
    pub fn from_config(enabled: bool) -> Result<Self> {
        let mut logger = Self::new();
        logger.enabled = enabled;

        if enabled {
            let path = Self::get_log_file_path()?;
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
            }
            logger.log_file = Some(path);
        }

        Ok(logger)
    }

    /// Send records to `path` as well, at debug level
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.enabled = true;
        self.log_file = Some(path.into());
        self
    }

    /// Location of the log file, under the platform data directory
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::data_local_dir()
            .or_else(dirs::data_dir)
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join("gallerist").join("gallerist.log"))
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        let timestamp = Utc::now().format("%H:%M:%S%.3f").to_string();
        if let Ok(mut logs) = self.logs.lock() {
            logs.push(format!("[{}] {}", timestamp, message));
        }
    }

    /// Dispatch feeding the log panel, plus the log file when one is set
    pub fn dispatch(&self) -> Result<fern::Dispatch> {
        let level = if self.enabled {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        };
        let sink = self.clone();

        let panel = fern::Dispatch::new()
            .format(|out, message, record| out.finish(format_args!("{:<5} {}", record.level(), message)))
            .chain(fern::Output::call(move |record| sink.log(record.args().to_string())));

        let mut dispatch = fern::Dispatch::new().level(level).chain(panel);

        if let Some(path) = &self.log_file {
            let file = fern::log_file(path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;
            dispatch = dispatch.chain(
                fern::Dispatch::new()
                    .format(|out, message, record| {
                        out.finish(format_args!(
                            "[{}] {:<5} {}: {}",
                            Utc::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                            record.level(),
                            record.target(),
                            message
                        ))
                    })
                    .chain(file),
            );
        }

        Ok(dispatch)
    }

    /// Route `log` records from the library into this logger.
    ///
    /// Can only succeed once per process.
    pub fn install(&self) -> Result<()> {
        self.dispatch()?.apply().context("Failed to install log dispatcher")
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
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
