//! Status and confirmation message types for operation feedback.

use std::fmt;

/// Outcome category of an [`OperationStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Notice,
    Failure,
}

/// One-line feedback for operations without a resource to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationStatus {
    pub kind: StatusKind,
    pub message: String,
}

impl OperationStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            message: message.into(),
        }
    }

    /// Something noteworthy that is not an error, such as a no-op.
    pub fn notice(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Notice,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Failure,
            message: message.into(),
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.kind {
            StatusKind::Success => "Success:",
            StatusKind::Notice => "Note:",
            StatusKind::Failure => "Error:",
        };
        writeln!(f, "{label} {}", self.message)
    }
}
