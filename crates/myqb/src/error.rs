//! Error types for myqb

use crate::client::DriverError;
use thiserror::Error;

/// Result type alias for builder operations
pub type QbResult<T> = Result<T, QbError>;

/// Error types for query building and execution
#[derive(Debug, Error)]
pub enum QbError {
    /// A slot id that was never allocated, or never executed
    #[error("unknown or never-executed query slot {0}")]
    InvalidSlot(usize),

    /// A clause that cannot be rendered into valid SQL
    #[error("malformed {clause} clause: {detail}")]
    MalformedClause {
        clause: &'static str,
        detail: String,
    },

    /// `run` was invoked before any verb chose an operation
    #[error("no operation set for the active query")]
    OperationNotSet,

    /// The driver refused to prepare the rendered statement
    #[error("prepare failed: {0}")]
    Prepare(DriverError),

    /// The driver reported a failure while executing
    #[error("{0}")]
    Execution(DriverError),
}

impl QbError {
    /// Create a malformed-clause error
    pub fn malformed(clause: &'static str, detail: impl Into<String>) -> Self {
        Self::MalformedClause {
            clause,
            detail: detail.into(),
        }
    }

    /// Check if this is an invalid-slot error
    pub fn is_invalid_slot(&self) -> bool {
        matches!(self, Self::InvalidSlot(_))
    }

    /// Check if this is a malformed-clause error
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedClause { .. })
    }

    /// Check if this error came back from the driver
    pub fn is_driver(&self) -> bool {
        matches!(self, Self::Prepare(_) | Self::Execution(_))
    }

    /// Driver error detail (code, message), if this error wraps one
    pub fn driver_detail(&self) -> Option<(i32, &str)> {
        match self {
            Self::Prepare(e) | Self::Execution(e) => Some((e.code, e.message.as_str())),
            _ => None,
        }
    }
}
