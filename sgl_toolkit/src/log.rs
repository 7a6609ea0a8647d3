//! Logging system for the SGL toolkit
//!
//! - Pluggable sink via the [`Logger`] trait
//! - Severity levels (Trace, Debug, Info, Warn, Error)
//! - Coloured console output by default, with an optional severity floor
//! - File and line information on ERROR entries
//!
//! The global sink is managed by [`Toolkit`](crate::sglt::Toolkit).

use std::fmt;
use std::time::SystemTime;
use chrono::{DateTime, Local};
use colored::*;

/// Logger trait for custom sinks
///
/// # Example
///
/// ```no_run
/// use sgl_toolkit::sglt::log::{Logger, LogEntry};
///
/// struct StderrLogger;
///
/// impl Logger for StderrLogger {
///     fn log(&self, entry: &LogEntry) {
///         eprintln!("[{}] {}", entry.source, entry.message);
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    /// Process one entry
    fn log(&self, entry: &LogEntry);
}

/// One log record
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Severity level
    pub severity: LogSeverity,

    /// When the entry was created
    pub timestamp: SystemTime,

    /// Emitting component (e.g. "sglt::ShaderProcessor", "sglt::gl")
    pub source: String,

    /// Message text
    pub message: String,

    /// Source file (ERROR entries only)
    pub file: Option<&'static str>,

    /// Source line (ERROR entries only)
    pub line: Option<u32>,
}

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    /// Very verbose tracing
    Trace,

    /// Development information
    Debug,

    /// Notable events
    Info,

    /// Potential problems
    Warn,

    /// Failures (carries file:line)
    Error,
}

impl LogSeverity {
    /// Fixed-width label used by the default logger
    pub fn label(&self) -> &'static str {
        match self {
            LogSeverity::Trace => "TRACE",
            LogSeverity::Debug => "DEBUG",
            LogSeverity::Info => "INFO ",
            LogSeverity::Warn => "WARN ",
            LogSeverity::Error => "ERROR",
        }
    }
}

/// Timestamp layout shared by every default logger line
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Default console logger
///
/// Format:
/// - Normal: `[timestamp] [SEVERITY] [source] message`
/// - Error: `[timestamp] [ERROR] [source] message (file:line)`
///
/// Entries below the minimum severity are dropped. The default minimum is
/// Trace, so everything is printed.
#[derive(Debug, Clone, Copy)]
pub struct DefaultLogger {
    min_severity: LogSeverity,
}

impl Default for DefaultLogger {
    fn default() -> Self {
        Self { min_severity: LogSeverity::Trace }
    }
}

impl DefaultLogger {
    /// Console logger that ignores entries below `min_severity`
    ///
    /// ```no_run
    /// use sgl_toolkit::sglt::Toolkit;
    /// use sgl_toolkit::sglt::log::{DefaultLogger, LogSeverity};
    ///
    /// Toolkit::set_logger(DefaultLogger::with_min_severity(LogSeverity::Warn));
    /// ```
    pub fn with_min_severity(min_severity: LogSeverity) -> Self {
        Self { min_severity }
    }

    pub fn min_severity(&self) -> LogSeverity {
        self.min_severity
    }

    /// Whether an entry of this severity would be printed
    pub fn accepts(&self, severity: LogSeverity) -> bool {
        severity >= self.min_severity
    }

    /// Render an entry without colours (timestamp in local time)
    pub fn format_plain(entry: &LogEntry) -> String {
        Self::render(entry, entry.severity.label(), &entry.source)
    }

    fn render(entry: &LogEntry, severity: impl fmt::Display, source: impl fmt::Display) -> String {
        let datetime: DateTime<Local> = entry.timestamp.into();
        let mut text = format!(
            "[{}] [{}] [{}] {}",
            datetime.format(TIMESTAMP_FORMAT),
            severity,
            source,
            entry.message
        );
        if let (Some(file), Some(line)) = (entry.file, entry.line) {
            text.push_str(&format!(" ({}:{})", file, line));
        }
        text
    }
}

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        if !self.accepts(entry.severity) {
            return;
        }

        let label = entry.severity.label();
        let severity = match entry.severity {
            LogSeverity::Trace => label.bright_black(),
            LogSeverity::Debug => label.cyan(),
            LogSeverity::Info => label.green(),
            LogSeverity::Warn => label.yellow(),
            LogSeverity::Error => label.red().bold(),
        };

        println!("{}", Self::render(entry, severity, entry.source.bright_blue()));
    }
}

// ===== LOGGING MACROS =====

/// Log at a severity chosen at runtime
///
/// ```no_run
/// use sgl_toolkit::sglt::log::LogSeverity;
///
/// let severity = if cfg!(debug_assertions) { LogSeverity::Debug } else { LogSeverity::Info };
/// sgl_toolkit::toolkit_log!(severity, "sglt::gl", "context ready");
/// ```
#[macro_export]
macro_rules! toolkit_log {
    ($severity:expr, $source:expr, $($arg:tt)*) => {
        $crate::sglt::Toolkit::log($severity, $source, format!($($arg)*))
    };
}

/// Log a TRACE message
///
/// ```no_run
/// sgl_toolkit::toolkit_trace!("sglt::ShadowBox", "corners recomputed");
/// ```
#[macro_export]
macro_rules! toolkit_trace {
    ($source:expr, $($arg:tt)*) => {
        $crate::toolkit_log!($crate::sglt::log::LogSeverity::Trace, $source, $($arg)*)
    };
}

/// Log a DEBUG message
#[macro_export]
macro_rules! toolkit_debug {
    ($source:expr, $($arg:tt)*) => {
        $crate::toolkit_log!($crate::sglt::log::LogSeverity::Debug, $source, $($arg)*)
    };
}

/// Log an INFO message
#[macro_export]
macro_rules! toolkit_info {
    ($source:expr, $($arg:tt)*) => {
        $crate::toolkit_log!($crate::sglt::log::LogSeverity::Info, $source, $($arg)*)
    };
}

/// Log a WARN message
///
/// ```no_run
/// sgl_toolkit::toolkit_warn!("sglt::ShaderProcessor", "{} stage failed to compile", "vertex");
/// ```
#[macro_export]
macro_rules! toolkit_warn {
    ($source:expr, $($arg:tt)*) => {
        $crate::toolkit_log!($crate::sglt::log::LogSeverity::Warn, $source, $($arg)*)
    };
}

/// Log an ERROR message with file:line information
///
/// ```no_run
/// sgl_toolkit::toolkit_error!("sglt::ShaderProcessor", "link failed: {}", "undefined symbol");
/// ```
#[macro_export]
macro_rules! toolkit_error {
    ($source:expr, $($arg:tt)*) => {
        $crate::sglt::Toolkit::log_detailed(
            $crate::sglt::log::LogSeverity::Error,
            $source,
            format!($($arg)*),
            file!(),
            line!()
        )
    };
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
