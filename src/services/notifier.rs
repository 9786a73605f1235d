use std::sync::Mutex;

use serde::{Deserialize, Serialize};

/// The kind of a user-facing message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    Status,
    Warning,
    Error,
}

impl MessageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// A message queued for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    pub kind: MessageKind,
    pub text: String,
}

/// Surfaces transient messages to the end user.
pub trait Notifier {
    fn add_message(&self, kind: MessageKind, text: &str);

    fn add_status(&self, text: &str) {
        self.add_message(MessageKind::Status, text);
    }

    fn add_error(&self, text: &str) {
        self.add_message(MessageKind::Error, text);
    }
}

/// Request-scoped message queue.
///
/// Repeating a message of the same kind within one request keeps a single copy.
#[derive(Debug, Default)]
pub struct StatusMessages {
    queue: Mutex<Vec<Message>>,
}

impl StatusMessages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every queued message in insertion order, leaving the queue empty.
    pub fn drain(&self) -> Vec<Message> {
        let mut queue = self.queue.lock().expect("message queue lock poisoned");
        std::mem::take(&mut *queue)
    }

    pub fn is_empty(&self) -> bool {
        self.queue
            .lock()
            .expect("message queue lock poisoned")
            .is_empty()
    }
}

impl Notifier for StatusMessages {
    fn add_message(&self, kind: MessageKind, text: &str) {
        let mut queue = self.queue.lock().expect("message queue lock poisoned");
        if queue.iter().any(|m| m.kind == kind && m.text == text) {
            return;
        }
        queue.push(Message {
            kind,
            text: text.to_string(),
        });
    }
}
