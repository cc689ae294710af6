use std::fs::File;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;

use crate::constants::LOG_DATE_FORMAT;

/// Verbosity level for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Error messages only
    Error,
    /// Warning and error messages
    Warning,
    /// Info, warning, and error messages (default)
    Info,
    /// Debug, info, warning, and error messages
    Debug,
    /// Trace, debug, info, warning, and error messages
    Trace,
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warning),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            _ => Err(format!("Unknown verbosity level: {s}")),
        }
    }
}

impl LogLevel {
    /// Convert verbosity level to log::LevelFilter
    pub fn to_level_filter(&self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warning => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }

    /// Get the verbosity level from the number of occurrences of a flag
    pub fn from_occurrences(occurrences: u8) -> Self {
        match occurrences {
            0 => LogLevel::Info,  // Default
            1 => LogLevel::Debug, // -v
            _ => LogLevel::Trace, // -vv or more
        }
    }

    /// Get the verbosity level from the `-v` count and the `-q` flag
    ///
    /// `-q` wins over any number of `-v`.
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        if quiet {
            LogLevel::Warning
        } else {
            LogLevel::from_occurrences(verbose)
        }
    }
}

/// Initialise the logger
///
/// Everything at or above `verbosity` is written to `log_file`, which is
/// truncated first. With `use_stdout` the same records are also printed to
/// stdout, coloured by level when stdout is a terminal.
pub fn init_logger(verbosity: LogLevel, log_file: &Path, use_stdout: bool) -> Result<()> {
    let file = File::create(log_file)
        .with_context(|| format!("Unable to open log file {}", log_file.display()))?;

    let file_logger = Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} : {:<8} : {}",
                chrono::Local::now().format(LOG_DATE_FORMAT),
                record.level(),
                message
            ))
        })
        .chain(file);

    let mut base_logger = Dispatch::new()
        .level(verbosity.to_level_filter())
        .chain(file_logger);

    if use_stdout {
        base_logger = base_logger.chain(stdout_logger(atty::is(atty::Stream::Stdout)));
    }

    base_logger.apply()?;

    log::debug!("Logger initialized with verbosity level: {verbosity:?}");

    Ok(())
}

fn stdout_logger(use_colors: bool) -> Dispatch {
    let colors_line = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::White)
        .debug(Color::White)
        .trace(Color::BrightBlack);

    Dispatch::new()
        .format(move |out, message, record| {
            if use_colors {
                out.finish(format_args!(
                    "\x1B[{}m{} : {}\x1B[0m",
                    colors_line.get_color(&record.level()).to_fg_str(),
                    record.level(),
                    message
                ))
            } else {
                out.finish(format_args!("{} : {}", record.level(), message))
            }
        })
        .chain(std::io::stdout())
}

/// Format a message with colour support
pub fn format_message(message: &str, colored_message: &str) -> String {
    if atty::is(atty::Stream::Stdout) {
        colored_message.to_string()
    } else {
        message.to_string()
    }
}
