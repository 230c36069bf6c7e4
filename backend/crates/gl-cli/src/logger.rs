use crate::{CliError, CliResult};

use gl_config::LogLevel;

use std::path::PathBuf;
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, Output};
use log::{Level, info};

/// Initialize logger with fern
///
/// Log lines go to stderr (or `log_file`) so stdout carries only command
/// results. Every sink uses `[date - LEVEL] message [file:line]`.
///
/// # Arguments
/// * `log_level` - Log level filter
/// * `log_file` - Optional path to log file. None = stderr, Some = file output
/// * `colored` - Color the level on stderr (ignored when logging to file)
#[track_caller]
pub fn initialize(log_level: LogLevel, log_file: Option<PathBuf>, colored: bool) -> CliResult<()> {
    let level_filter = log_level.0;

    let (output, colors): (Output, Option<ColoredLevelConfig>) = match log_file {
        Some(ref log_path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_path)
                .map_err(|e| {
                    CliError::logger(format!(
                        "Failed to open log file {}: {}",
                        log_path.display(),
                        e
                    ))
                })?;
            (file.into(), None)
        }
        None => (std::io::stderr().into(), colored.then(level_colors)),
    };

    Dispatch::new()
        .level(level_filter)
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message} [{file}:{line}]",
                date = humantime::format_rfc3339(SystemTime::now()),
                level = level_label(colors.as_ref(), record.level()),
                message = message,
                file = record.file().unwrap_or("unknown"),
                line = record.line().unwrap_or(0),
            ))
        })
        .chain(output)
        .apply()
        .map_err(|e| CliError::logger(format!("Failed to initialize logger: {e}")))?;

    match log_file {
        Some(ref path) => info!(
            "Logger initialized: level={:?}, file={}",
            level_filter,
            path.display()
        ),
        None => info!("Logger initialized: level={:?}, stderr", level_filter),
    }

    Ok(())
}

fn level_colors() -> ColoredLevelConfig {
    ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red)
}

/// Level text, wrapped in ANSI color codes when `colors` is set.
pub(crate) fn level_label(colors: Option<&ColoredLevelConfig>, level: Level) -> String {
    match colors {
        Some(colors) => colors.color(level).to_string(),
        None => level.to_string(),
    }
}
