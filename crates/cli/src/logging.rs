use anyhow::{anyhow, Result};
use blog_config::LogConfig;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Log files larger than this are truncated on startup.
const MAX_LOG_FILE_SIZE: u64 = 8 * 1024 * 1024;

/// Installs the global subscriber.
///
/// The returned guard flushes the log file when dropped and must be kept alive
/// until the command finishes.
pub(crate) fn init(log: Option<&Path>, config: &LogConfig) -> Result<Option<WorkerGuard>> {
    let maybe_log = log
        .map(Path::to_path_buf)
        .or_else(|| std::env::var("BLOGPIPE_LOG_PATH").ok().map(PathBuf::from))
        .or_else(|| config.log_file.as_ref().map(PathBuf::from));

    let max_level = config.max_level.parse().unwrap_or(Level::INFO);
    let filter = env_filter(max_level, &config.log_target);

    if let Some(log_path) = maybe_log {
        if let Ok(metadata) = std::fs::metadata(&log_path) {
            if log_path.is_file() && metadata.len() > MAX_LOG_FILE_SIZE {
                std::fs::remove_file(&log_path)?;
            }
        }

        let file_name = log_path
            .file_name()
            .ok_or_else(|| anyhow!("no file name in {log_path:?}"))?;

        let directory = log_path
            .parent()
            .ok_or_else(|| anyhow!("{log_path:?} has no parent"))?;

        let file_appender = tracing_appender::rolling::never(directory, file_name);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_line_number(true)
            .with_writer(non_blocking)
            .with_ansi(false)
            .finish();

        tracing::subscriber::set_global_default(subscriber)?;

        Ok(Some(guard))
    } else {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_ansi(std::io::stderr().is_terminal())
            .finish();

        tracing::subscriber::set_global_default(subscriber)?;

        Ok(None)
    }
}

fn env_filter(max_level: Level, log_target: &str) -> EnvFilter {
    // `RUST_LOG` takes precedence over the config.
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    EnvFilter::try_new(filter_directives(max_level, log_target))
        .unwrap_or_else(|_| EnvFilter::new(max_level.as_str().to_ascii_lowercase()))
}

fn filter_directives(max_level: Level, log_target: &str) -> String {
    let max_level = max_level.as_str().to_ascii_lowercase();
    let log_target = log_target.trim();
    if log_target.is_empty() {
        max_level
    } else {
        format!("{max_level},{log_target}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directives() {
        assert_eq!(filter_directives(Level::INFO, ""), "info");
        assert_eq!(
            filter_directives(Level::WARN, "content_pipeline=trace"),
            "warn,content_pipeline=trace"
        );
    }
}
