/// GL debug output sink - filters driver messages and forwards them to the
/// toolkit logger.
///
/// The backend registers [`DebugOutput::handle`] as the driver callback (see
/// `sgl_toolkit_gl::install_debug_output`). Drivers may call it from their
/// own thread, so statistics are atomic and repeat tracking sits behind a
/// mutex.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;
use colored::*;
use crate::log::LogSeverity;
use crate::toolkit::Toolkit;
use super::debug_message::{DebugMessage, DebugSeverity, DebugType};

/// Log source used for every forwarded driver message
pub const LOG_SOURCE: &str = "sglt::gl";

// ===== CONFIGURATION =====

/// Minimum driver severity to forward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DebugSeverityFilter {
    /// HIGH only
    HighOnly,
    /// HIGH and MEDIUM
    HighAndMedium,
    /// Everything, notifications and unknown severities included
    #[default]
    All,
}

impl DebugSeverityFilter {
    pub fn accepts(self, severity: DebugSeverity) -> bool {
        match self {
            DebugSeverityFilter::HighOnly => severity == DebugSeverity::High,
            DebugSeverityFilter::HighAndMedium => {
                matches!(severity, DebugSeverity::High | DebugSeverity::Medium)
            }
            DebugSeverityFilter::All => true,
        }
    }
}

/// Per-category switches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebugMessageFilter {
    /// Errors, deprecated/undefined behavior, portability
    pub show_conformance: bool,
    /// Performance warnings
    pub show_performance: bool,
    /// Markers, OTHER and unclassified types
    pub show_general: bool,
}

impl Default for DebugMessageFilter {
    fn default() -> Self {
        Self {
            show_conformance: true,
            show_performance: true,
            show_general: true,
        }
    }
}

impl DebugMessageFilter {
    pub fn accepts(&self, kind: DebugType) -> bool {
        if kind.is_conformance() {
            self.show_conformance
        } else if kind == DebugType::Performance {
            self.show_performance
        } else {
            self.show_general
        }
    }
}

/// Debug output configuration
#[derive(Debug, Clone)]
pub struct DebugOutputConfig {
    pub severity: DebugSeverityFilter,
    pub message_filter: DebugMessageFilter,
    /// Count forwarded messages and mark repeats
    pub enable_stats: bool,
    /// Ask the driver to call back on the thread that issued the GL call
    pub synchronous: bool,
    /// Distinct message texts kept for repeat marking; later texts are
    /// still logged and counted, just never marked `[×N]`
    pub max_tracked_messages: usize,
}

/// Default bound on distinct texts kept for repeat marking
pub const DEFAULT_MAX_TRACKED_MESSAGES: usize = 1024;

impl Default for DebugOutputConfig {
    fn default() -> Self {
        Self {
            severity: DebugSeverityFilter::All,
            message_filter: DebugMessageFilter::default(),
            enable_stats: true,
            synchronous: true,
            max_tracked_messages: DEFAULT_MAX_TRACKED_MESSAGES,
        }
    }
}

// ===== STATISTICS =====

/// Snapshot of forwarded message counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DebugStats {
    pub high: u32,
    pub medium: u32,
    pub low: u32,
    pub notification: u32,
    pub unknown: u32,
}

impl DebugStats {
    pub fn total(&self) -> u32 {
        self.high + self.medium + self.low + self.notification + self.unknown
    }
}

#[derive(Debug, Default)]
struct DebugStatsTracker {
    high: AtomicU32,
    medium: AtomicU32,
    low: AtomicU32,
    notification: AtomicU32,
    unknown: AtomicU32,
}

impl DebugStatsTracker {
    fn counter(&self, severity: DebugSeverity) -> &AtomicU32 {
        match severity {
            DebugSeverity::High => &self.high,
            DebugSeverity::Medium => &self.medium,
            DebugSeverity::Low => &self.low,
            DebugSeverity::Notification => &self.notification,
            DebugSeverity::Unknown(_) => &self.unknown,
        }
    }

    fn increment(&self, severity: DebugSeverity) {
        self.counter(severity).fetch_add(1, Ordering::Relaxed);
    }

    fn snapshot(&self) -> DebugStats {
        DebugStats {
            high: self.high.load(Ordering::Relaxed),
            medium: self.medium.load(Ordering::Relaxed),
            low: self.low.load(Ordering::Relaxed),
            notification: self.notification.load(Ordering::Relaxed),
            unknown: self.unknown.load(Ordering::Relaxed),
        }
    }

    fn reset(&self) {
        for counter in [&self.high, &self.medium, &self.low, &self.notification, &self.unknown] {
            counter.store(0, Ordering::Relaxed);
        }
    }
}

// ===== SINK =====

/// Toolkit severity for a driver severity
pub fn log_severity(severity: DebugSeverity) -> LogSeverity {
    match severity {
        DebugSeverity::High => LogSeverity::Error,
        DebugSeverity::Medium => LogSeverity::Warn,
        DebugSeverity::Low => LogSeverity::Info,
        DebugSeverity::Notification => LogSeverity::Debug,
        DebugSeverity::Unknown(_) => LogSeverity::Info,
    }
}

/// Filtering, counting sink for driver debug messages
#[derive(Debug)]
pub struct DebugOutput {
    config: DebugOutputConfig,
    stats: DebugStatsTracker,
    repeats: Mutex<HashMap<String, u32>>,
}

impl DebugOutput {
    pub fn new(config: DebugOutputConfig) -> Self {
        Self {
            config,
            stats: DebugStatsTracker::default(),
            repeats: Mutex::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &DebugOutputConfig {
        &self.config
    }

    /// Driver callback entry point (raw GL enums).
    ///
    /// Returns whether the message passed the filters and was logged.
    pub fn handle(&self, source: u32, kind: u32, id: u32, severity: u32, message: &str) -> bool {
        self.handle_message(&DebugMessage::from_gl(source, kind, id, severity, message))
    }

    /// Filter, count and log an already classified message
    pub fn handle_message(&self, message: &DebugMessage) -> bool {
        if !self.config.severity.accepts(message.severity)
            || !self.config.message_filter.accepts(message.kind)
        {
            return false;
        }

        let occurrences = if self.config.enable_stats {
            self.stats.increment(message.severity);
            self.track(&message.message)
        } else {
            1
        };

        let text = if occurrences > 1 {
            format!("{} [×{}]", message, occurrences)
        } else {
            message.to_string()
        };

        Toolkit::log(log_severity(message.severity), LOG_SOURCE, text);
        true
    }

    /// Count identical message texts, up to `max_tracked_messages` of them
    fn track(&self, text: &str) -> u32 {
        let mut repeats = match self.repeats.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some(count) = repeats.get_mut(text) {
            *count += 1;
            return *count;
        }
        if repeats.len() < self.config.max_tracked_messages {
            repeats.insert(text.to_string(), 1);
        }
        1
    }

    /// Number of distinct message texts currently tracked
    pub fn tracked_messages(&self) -> usize {
        match self.repeats.lock() {
            Ok(guard) => guard.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    /// Current counts (all zero when stats are disabled)
    pub fn stats(&self) -> DebugStats {
        self.stats.snapshot()
    }

    /// Zero the counters and forget repeats
    pub fn reset_stats(&self) {
        self.stats.reset();
        match self.repeats.lock() {
            Ok(mut guard) => guard.clear(),
            Err(poisoned) => poisoned.into_inner().clear(),
        }
    }

    /// Number of distinct message texts seen more than once
    pub fn repeated_messages(&self) -> usize {
        let repeats = match self.repeats.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        repeats.values().filter(|&&count| count > 1).count()
    }

    /// Print a coloured summary to stdout
    pub fn print_stats_report(&self) {
        let stats = self.stats();

        if stats.total() == 0 {
            println!("\n{}", "✓ No GL debug messages".green().bold());
            return;
        }

        println!("\n{}", "=== GL Debug Output Report ===".bright_blue().bold());

        if stats.high > 0 {
            println!("  {} {}", "High:".red().bold(), stats.high);
        }
        if stats.medium > 0 {
            println!("  {} {}", "Medium:".yellow().bold(), stats.medium);
        }
        if stats.low > 0 {
            println!("  {} {}", "Low:".cyan(), stats.low);
        }
        if stats.notification > 0 {
            println!("  {} {}", "Notification:".bright_black(), stats.notification);
        }
        if stats.unknown > 0 {
            println!("  {} {}", "Unknown:".bright_black(), stats.unknown);
        }
        println!("  {} {}", "Total:".white().bold(), stats.total());

        let repeated = self.repeated_messages();
        if repeated > 0 {
            println!("\n  {} {} message(s) appeared multiple times", "ℹ".cyan(), repeated);
        }

        println!("{}\n", "===============================".bright_blue().bold());
    }
}

impl Default for DebugOutput {
    fn default() -> Self {
        Self::new(DebugOutputConfig::default())
    }
}

#[cfg(test)]
#[path = "debug_output_tests.rs"]
mod tests;
