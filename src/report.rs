//! # Reporting
//!
//! The pipeline never logs through a global on its own behalf; it is handed a
//! [`Reporter`] and sends operator-facing progress and failures there.
//! [`TracingReporter`] forwards to `tracing`, [`MemoryReporter`] keeps the
//! messages for inspection.

use std::cell::RefCell;
use std::fmt;

/// Severity of a reported message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ReportLevel {
    Info,
    Warn,
    Error,
}

impl fmt::Display for ReportLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ReportLevel::Info => "INFO",
            ReportLevel::Warn => "WARN",
            ReportLevel::Error => "ERROR",
        })
    }
}

/// Sink for per-file progress and failures.
pub trait Reporter {
    fn report(&self, level: ReportLevel, message: &str);

    fn info(&self, message: &str) {
        self.report(ReportLevel::Info, message);
    }

    fn warn(&self, message: &str) {
        self.report(ReportLevel::Warn, message);
    }

    fn error(&self, message: &str) {
        self.report(ReportLevel::Error, message);
    }
}

/// Forwards every message to the matching `tracing` macro.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, level: ReportLevel, message: &str) {
        match level {
            ReportLevel::Info => tracing::info!(target: "imgcrypt", "{message}"),
            ReportLevel::Warn => tracing::warn!(target: "imgcrypt", "{message}"),
            ReportLevel::Error => tracing::error!(target: "imgcrypt", "{message}"),
        }
    }
}

/// Records messages in memory.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    entries: RefCell<Vec<(ReportLevel, String)>>,
}

impl MemoryReporter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything reported so far, oldest first.
    #[must_use]
    pub fn entries(&self) -> Vec<(ReportLevel, String)> {
        self.entries.borrow().clone()
    }

    /// Messages reported at exactly `level`.
    #[must_use]
    pub fn messages(&self, level: ReportLevel) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }
}

impl Reporter for MemoryReporter {
    fn report(&self, level: ReportLevel, message: &str) {
        self.entries.borrow_mut().push((level, message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_reporter_keeps_order_and_levels() {
        let r = MemoryReporter::new();
        r.info("one");
        r.warn("two");
        r.error("three");

        assert_eq!(
            r.entries(),
            vec![
                (ReportLevel::Info, "one".to_string()),
                (ReportLevel::Warn, "two".to_string()),
                (ReportLevel::Error, "three".to_string()),
            ]
        );
        assert_eq!(r.messages(ReportLevel::Error), vec!["three".to_string()]);
    }

    #[test]
    fn levels_order_by_severity() {
        assert!(ReportLevel::Info < ReportLevel::Warn);
        assert!(ReportLevel::Warn < ReportLevel::Error);
        assert_eq!(ReportLevel::Warn.to_string(), "WARN");
    }
}
