use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use chrono::Utc;

use crate::models::{LogRecord, Severity};

/// Records messages under a named channel.
pub trait Logger: Send + Sync {
    fn log(&self, channel: &str, severity: Severity, message: &str);

    fn info(&self, channel: &str, message: &str) {
        self.log(channel, Severity::Info, message);
    }
}

/// Forwards records to the global `tracing` subscriber.
///
/// The channel travels as a structured `channel` field since tracing targets
/// must be known at compile time.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, channel: &str, severity: Severity, message: &str) {
        match severity {
            Severity::Emergency | Severity::Alert | Severity::Critical | Severity::Error => {
                tracing::error!(channel, severity = severity.as_str(), "{}", message)
            }
            Severity::Warning => tracing::warn!(channel, "{}", message),
            Severity::Notice | Severity::Info => {
                tracing::info!(channel, severity = severity.as_str(), "{}", message)
            }
            Severity::Debug => tracing::debug!(channel, "{}", message),
        }
    }
}

/// Bounded in-memory log of the most recent records.
///
/// Cloning shares the same buffer. Every record is also forwarded to
/// [`TracingLogger`].
#[derive(Debug, Clone)]
pub struct RecentLog {
    capacity: usize,
    inner: Arc<Mutex<RecentLogInner>>,
}

#[derive(Debug, Default)]
struct RecentLogInner {
    next_id: u64,
    records: VecDeque<LogRecord>,
}

impl RecentLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            inner: Arc::new(Mutex::new(RecentLogInner {
                next_id: 1,
                records: VecDeque::with_capacity(capacity),
            })),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Records newest first, at most `limit` of them when given.
    pub fn recent(&self, limit: Option<usize>) -> Vec<LogRecord> {
        let inner = self.inner.lock().expect("recent log lock poisoned");
        let limit = limit.unwrap_or(inner.records.len());
        inner.records.iter().rev().take(limit).cloned().collect()
    }

    /// Records logged under `channel`, newest first.
    pub fn by_channel(&self, channel: &str) -> Vec<LogRecord> {
        let inner = self.inner.lock().expect("recent log lock poisoned");
        inner
            .records
            .iter()
            .rev()
            .filter(|r| r.channel == channel)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.inner
            .lock()
            .expect("recent log lock poisoned")
            .records
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Logger for RecentLog {
    fn log(&self, channel: &str, severity: Severity, message: &str) {
        TracingLogger.log(channel, severity, message);

        let mut inner = self.inner.lock().expect("recent log lock poisoned");
        let id = inner.next_id;
        inner.next_id += 1;

        if self.capacity == 0 {
            return;
        }
        while inner.records.len() >= self.capacity {
            inner.records.pop_front();
        }
        inner.records.push_back(LogRecord {
            id,
            channel: channel.to_string(),
            severity,
            message: message.to_string(),
            timestamp: Utc::now(),
        });
    }
}
