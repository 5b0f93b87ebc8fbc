//! Sink for failures that must reach an external observability collector.
//!
//! The orchestrator reports fetch failures here instead of returning them, so
//! the sink is the only place those errors surface besides the fetch status.

use log::error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Fatal,
    Error,
    Warning,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Fatal => write!(f, "fatal"),
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub error: String,
    pub msg_prefix: Option<String>,
    pub level: Severity,
}

impl ErrorReport {
    pub fn new(error: impl Into<String>, level: Severity) -> Self {
        Self {
            error: error.into(),
            msg_prefix: None,
            level,
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.msg_prefix = Some(prefix.into());
        self
    }

    /// Message as shown to the collector: `"<prefix>: <error>"`.
    pub fn message(&self) -> String {
        match &self.msg_prefix {
            Some(prefix) => format!("{}: {}", prefix, self.error),
            None => self.error.clone(),
        }
    }
}

/// Collector of `{error, context: {level}}` reports.
pub trait ErrorReporter: Send + Sync {
    fn capture(&self, report: ErrorReport);
}

/// Forwards reports to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl ErrorReporter for LogReporter {
    fn capture(&self, report: ErrorReport) {
        error!("[{}] {}", report.level, report.message());
    }
}

/// Keeps every report in memory for later inspection.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    reports: Mutex<Vec<ErrorReport>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> Vec<ErrorReport> {
        self.reports
            .lock()
            .map(|reports| reports.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    pub fn len(&self) -> usize {
        self.reports().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ErrorReporter for MemoryReporter {
    fn capture(&self, report: ErrorReport) {
        match self.reports.lock() {
            Ok(mut reports) => reports.push(report),
            Err(poisoned) => poisoned.into_inner().push(report),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_message() {
        let report = ErrorReport::new("network down", Severity::Fatal).with_prefix("SORFetchPools");
        assert_eq!(report.message(), "SORFetchPools: network down");

        let report = ErrorReport::new("SOR Fetch pools failed", Severity::Fatal);
        assert_eq!(report.message(), "SOR Fetch pools failed");
    }

    #[test]
    fn test_memory_reporter_collects() {
        let reporter = MemoryReporter::new();
        assert!(reporter.is_empty());

        reporter.capture(ErrorReport::new("first", Severity::Fatal));
        reporter.capture(ErrorReport::new("second", Severity::Warning));

        let reports = reporter.reports();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].level, Severity::Fatal);
        assert_eq!(reports[1].error, "second");
    }

    #[test]
    fn test_severity_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Severity::Fatal).unwrap(), "\"fatal\"");
    }
}
