use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Severity of a log record, following the RFC 5424 levels.
///
/// Ordered from most to least severe, so `Severity::Error < Severity::Info`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Emergency,
    Alert,
    Critical,
    Error,
    Warning,
    Notice,
    Info,
    Debug,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Emergency => "emergency",
            Self::Alert => "alert",
            Self::Critical => "critical",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Notice => "notice",
            Self::Info => "info",
            Self::Debug => "debug",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "emergency" => Some(Self::Emergency),
            "alert" => Some(Self::Alert),
            "critical" => Some(Self::Critical),
            "error" => Some(Self::Error),
            "warning" => Some(Self::Warning),
            "notice" => Some(Self::Notice),
            "info" => Some(Self::Info),
            "debug" => Some(Self::Debug),
            _ => None,
        }
    }
}

/// A message recorded under a named channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogRecord {
    /// Increasing sequence number, starting at 1.
    pub id: u64,
    /// Category the record was logged under (e.g. `assignment`).
    pub channel: String,
    pub severity: Severity,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}
