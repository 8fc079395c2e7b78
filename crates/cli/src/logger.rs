//! File-based logging for the landscape CLI. Log messages go to
//! ~/.landscape/logs/{run_metadata}/log.

use anyhow::{Context, Result};
use chrono::Local;
use dirs::home_dir;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::fs::{create_dir_all, File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use uuid::Uuid;

pub struct LandscapeLogger {
    level: LevelFilter,
    file: Mutex<File>,
    /// Records at or above this severity are echoed to stderr.
    echo: Level,
    run_id: String,
    log_path: PathBuf,
}

impl LandscapeLogger {
    /// Create a logger writing to ~/.landscape/logs/{timestamp}_{uuid}/log,
    /// where {uuid} is the first block of a fresh v4 uuid.
    pub fn new(level: LevelFilter) -> Result<Self> {
        let timestamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
        let uuid_string = Uuid::new_v4().to_string();
        let uuid = uuid_string.split('-').next().unwrap_or("unknown");
        let run_id = format!("{timestamp}_{uuid}");

        let log_dir = Self::get_log_dir(&run_id)?;
        create_dir_all(&log_dir)
            .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

        let log_path = log_dir.join("log");
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
            .with_context(|| format!("Failed to open log file: {}", log_path.display()))?;

        Ok(Self {
            level,
            file: Mutex::new(file),
            echo: Level::Warn,
            run_id,
            log_path,
        })
    }

    /// Returns the path to the log directory for this run
    pub fn get_log_dir(run_id: &str) -> Result<PathBuf> {
        let home = home_dir().ok_or_else(|| anyhow::anyhow!("Could not find home directory"))?;
        Ok(home.join(".landscape").join("logs").join(run_id))
    }

    /// Install the logger as the global `log` backend.
    pub fn init(level: LevelFilter) -> Result<()> {
        let logger = Self::new(level)?;
        let run_id = logger.run_id.clone();
        let log_path = logger.log_path.clone();

        log::set_boxed_logger(Box::new(logger))
            .map(|()| log::set_max_level(level))
            .map_err(|e| anyhow::anyhow!("Failed to set logger: {}", e))?;

        log::info!("Landscape logger initialized. Run ID: {}", run_id);
        log::info!("Log file: {}", log_path.display());
        Ok(())
    }
}

impl Log for LandscapeLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string();
            let level = record.level();
            let target = record.target();
            let message = format!("{} {} [{}] {}", timestamp, level, target, record.args());

            if let Ok(mut file) = self.file.lock() {
                // A failed log write must never take the session down.
                let _ = writeln!(file, "{}", message);
                let _ = file.flush();
            }

            if level <= self.echo {
                eprintln!("{}", message);
            }
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

/// Creates a log entry that separates sections in the log file.
pub fn log_section(name: &str) {
    let separator = "=".repeat(50);
    log::info!("{}", separator);
    log::info!("SECTION: {}", name);
    log::info!("{}", separator);
}

/// Parse a `--log-level` value such as `info` or `debug`.
pub fn parse_level(value: &str) -> Result<LevelFilter> {
    value
        .parse::<LevelFilter>()
        .map_err(|_| anyhow::anyhow!("Unknown log level {value:?} (try error, warn, info, debug, trace or off)"))
}
