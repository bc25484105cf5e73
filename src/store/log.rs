//! Internal operation log: one entry per successful mutation.

use chrono::Local;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LogEntry {
    pub id: usize,
    /// Local timestamp, ISO 8601.
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct OpLog {
    entries: Vec<LogEntry>,
}

impl OpLog {
    pub fn record(&mut self, operation: &str, target: &str, message: &str) {
        let id = self.entries.len() + 1;
        self.entries.push(LogEntry {
            id,
            date: Local::now().to_rfc3339(),
            operation: operation.to_string(),
            target: target.to_string(),
            message: message.to_string(),
        });
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }
}
