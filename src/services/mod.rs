//! Capabilities the form handler is constructed with.
//!
//! - [`Notifier`]: shows a transient message to whoever submitted the form.
//! - [`Logger`]: records a message under a named channel.

mod logger;
mod notifier;

pub use logger::*;
pub use notifier::*;
