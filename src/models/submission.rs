use serde::{Deserialize, Serialize};

/// A name posted through the form.
///
/// Submissions live for one request only. A missing `name` key
/// deserializes to the empty string so that it is rejected by validation
/// rather than by the extractor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    #[serde(default)]
    pub name: String,
}

impl Submission {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Reasons a submission can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter a proper name.")]
    InvalidName,
}

impl ValidationError {
    /// Machine name of the form field the error belongs to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidName => "name",
        }
    }
}
