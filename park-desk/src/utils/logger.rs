//! Logging Infrastructure
//!
//! Structured logging setup with support for both development and production environments
//! Features:
//! - Console output (pretty in development, JSON in production)
//! - Optional daily rotating log file (deleted after 14 days)

use chrono::{Local, NaiveDate};
use std::fs;
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, prelude::*};

/// Log file name prefix, files look like `park-desk.2024-06-01.log`
pub const LOG_FILE_PREFIX: &str = "park-desk";
const LOG_FILE_SUFFIX: &str = "log";

/// Days a rotated log file is kept
pub const LOG_RETENTION_DAYS: i64 = 14;

/// Date stamped into a rotated log file name
fn log_file_date(name: &str) -> Option<NaiveDate> {
    let date_part = name
        .strip_prefix(LOG_FILE_PREFIX)?
        .strip_prefix('.')?
        .strip_suffix(LOG_FILE_SUFFIX)?
        .strip_suffix('.')?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Clean up log files older than `keep_days`
///
/// Returns the number of deleted files. Files not matching the rotation
/// naming scheme are left alone.
pub fn cleanup_old_logs(log_dir: &Path, keep_days: i64) -> anyhow::Result<usize> {
    let cutoff = Local::now().date_naive() - chrono::Duration::days(keep_days);
    let mut deleted = 0;

    for entry in fs::read_dir(log_dir)? {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if let Some(date) = log_file_date(name)
            && date < cutoff
        {
            fs::remove_file(&path)?;
            tracing::info!(file = %name, "Deleted old log file");
            deleted += 1;
        }
    }

    Ok(deleted)
}

/// Initialize the logging system
///
/// # Arguments
/// * `level` - Log level used when `RUST_LOG` is unset (e.g., "info", "debug")
/// * `json_format` - Whether to use JSON format (true for production, false for development)
/// * `log_dir` - Optional directory for a daily rotating log file
///
/// # Examples
/// ```no_run
/// use park_desk::utils::logger::init_logger_with_file;
///
/// // Development setup (console only)
/// init_logger_with_file("debug", false, None)?;
///
/// // Production setup (console + file)
/// init_logger_with_file("info", true, Some("./logs"))?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init_logger_with_file(
    level: &str,
    json_format: bool,
    log_dir: Option<&str>,
) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let subscriber = tracing_subscriber::registry().with(env_filter);

    let console_layer = if json_format {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    } else {
        fmt::layer()
            .with_target(false)
            .with_file(false)
            .with_line_number(false)
            .boxed()
    };

    let Some(dir) = log_dir else {
        subscriber.with(console_layer).init();
        return Ok(());
    };

    let log_dir = Path::new(dir);
    fs::create_dir_all(log_dir)?;
    let deleted = cleanup_old_logs(log_dir, LOG_RETENTION_DAYS)?;

    let app_log = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix(LOG_FILE_SUFFIX)
        .build(log_dir)?;

    let file_layer = fmt::layer()
        .json()
        .with_target(true)
        .with_current_span(true)
        .with_writer(std::sync::Mutex::new(app_log));

    subscriber.with(console_layer).with(file_layer).init();
    tracing::debug!(dir = %log_dir.display(), deleted, "File logging enabled");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_log_file_date() {
        assert_eq!(
            log_file_date("park-desk.2024-06-01.log"),
            NaiveDate::from_ymd_opt(2024, 6, 1)
        );
        assert_eq!(log_file_date("park-desk.log"), None);
        assert_eq!(log_file_date("other.2024-06-01.log"), None);
        assert_eq!(log_file_date("park-desk.2024-06-01.txt"), None);
    }

    #[test]
    fn test_cleanup_old_logs() {
        let dir = TempDir::new().unwrap();
        let today = Local::now().date_naive();
        let old = today - chrono::Duration::days(LOG_RETENTION_DAYS + 3);

        let fresh_name = format!("park-desk.{}.log", today.format("%Y-%m-%d"));
        let old_name = format!("park-desk.{}.log", old.format("%Y-%m-%d"));
        for name in [&fresh_name, &old_name, &"notes.txt".to_string()] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }

        let deleted = cleanup_old_logs(dir.path(), LOG_RETENTION_DAYS).unwrap();
        assert_eq!(deleted, 1);
        assert!(dir.path().join(&fresh_name).exists());
        assert!(!dir.path().join(&old_name).exists());
        assert!(dir.path().join("notes.txt").exists());
    }

    #[test]
    fn test_cleanup_missing_dir_fails() {
        let dir = TempDir::new().unwrap();
        assert!(cleanup_old_logs(&dir.path().join("missing"), 1).is_err());
    }
}
