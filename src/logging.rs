use std::{
    env,
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
    sync::Mutex,
};

use chrono::{NaiveDate, SecondsFormat, Utc};

use crate::{AppLogInfo, LOG_DIR_NAME, LOG_FILE_PREFIX};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LogLevel {
    Info,
    Error,
}

impl LogLevel {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Error => "ERROR",
        }
    }
}

pub(crate) fn current_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub(crate) fn current_log_date() -> NaiveDate {
    Utc::now().date_naive()
}

/// Resolves the per-user directory holding the daily log files.
///
/// A non-empty override wins. Without a home directory the logs land in the
/// system temp directory so the sink stays usable.
pub(crate) fn resolve_log_dir_from(
    override_dir: Option<&str>,
    home_dir: Option<&Path>,
) -> PathBuf {
    if let Some(trimmed) = override_dir.map(str::trim).filter(|raw| !raw.is_empty()) {
        return PathBuf::from(trimmed);
    }

    match home_dir {
        Some(home_dir) => default_log_dir_under(home_dir),
        None => env::temp_dir().join(LOG_DIR_NAME).join("logs"),
    }
}

fn default_log_dir_under(home_dir: &Path) -> PathBuf {
    if cfg!(target_os = "macos") {
        home_dir.join("Library").join("Logs").join(LOG_DIR_NAME)
    } else if cfg!(target_os = "windows") {
        home_dir
            .join("AppData")
            .join("Local")
            .join(LOG_DIR_NAME)
            .join("logs")
    } else {
        home_dir
            .join(".local")
            .join("state")
            .join(LOG_DIR_NAME.to_ascii_lowercase())
            .join("logs")
    }
}

pub(crate) fn log_file_name(date: NaiveDate) -> String {
    format!("{LOG_FILE_PREFIX}{}.log", date.format("%Y-%m-%d"))
}

pub(crate) fn resolve_log_file_path(log_dir: &Path, date: NaiveDate) -> PathBuf {
    log_dir.join(log_file_name(date))
}

pub(crate) fn format_log_line(timestamp: &str, level: LogLevel, message: &str) -> String {
    format!("[{timestamp}] [{}] {message}\n", level.as_str())
}

fn append_log_line(log_path: &Path, line: &str) -> Result<(), String> {
    if let Some(parent_dir) = log_path.parent() {
        fs::create_dir_all(parent_dir).map_err(|error| {
            format!(
                "Failed to create log directory {}: {}",
                parent_dir.display(),
                error
            )
        })?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .map_err(|error| format!("Failed to open log file {}: {}", log_path.display(), error))?;
    file.write_all(line.as_bytes())
        .map_err(|error| format!("Failed to write log file {}: {}", log_path.display(), error))
}

/// Appends one entry to today's log file. Never fails: write errors are
/// reported on stderr and dropped.
pub(crate) fn append_desktop_log(
    level: LogLevel,
    message: &str,
    log_dir: &Path,
    date: NaiveDate,
    write_lock: &Mutex<()>,
) {
    let log_path = resolve_log_file_path(log_dir, date);
    let line = format_log_line(&current_timestamp(), level, message);

    let _guard = match write_lock.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    if let Err(error) = append_log_line(&log_path, &line) {
        eprintln!("failed to write desktop log: {error}");
    }
}

pub(crate) fn log_info(log_dir: &Path, date: NaiveDate) -> AppLogInfo {
    let log_file = resolve_log_file_path(log_dir, date);
    AppLogInfo {
        log_dir: log_dir.display().to_string(),
        log_exists: log_file.is_file(),
        log_file: log_file.display().to_string(),
    }
}
