//! Domain models for the name form.
//!
//! # Core Concepts
//!
//! - [`Submission`]: The single value a user posts. Transient, never stored.
//! - [`ValidationError`]: Why a submission was rejected.
//! - [`LogRecord`]: One entry of the in-memory recent log.

mod log;
mod submission;

pub use log::*;
pub use submission::*;
