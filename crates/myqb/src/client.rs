//! Driver traits consumed by the builder.
//!
//! The builder owns query construction and rendering only; preparing and
//! executing statements is delegated to whatever client the caller brings.
//! Implementing [`Connection`] and [`Statement`] for a driver is the entire
//! integration surface: connection establishment, credentials, and result
//! row access all stay on the driver's side.

use crate::value::Value;
use thiserror::Error;

/// Failure detail reported by the underlying driver.
///
/// Carries at least the driver-specific error code and message, matching
/// what a PDO-style `errorInfo` accessor exposes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("database error {code} - {message}")]
pub struct DriverError {
    /// Driver-specific error code.
    pub code: i32,
    /// Human-readable message.
    pub message: String,
}

impl DriverError {
    /// Create a new driver error.
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// A client connection that can prepare statements.
///
/// Preparing never runs the statement; the returned handle accepts named
/// bind values and is executed separately.
pub trait Connection {
    /// Prepared-statement handle produced by this connection.
    type Stmt: Statement;

    /// Prepare `sql` for execution.
    fn prepare(&mut self, sql: &str) -> Result<Self::Stmt, DriverError>;
}

/// A prepared statement accepting named bind values.
pub trait Statement {
    /// Attach `value` to the placeholder `name`.
    ///
    /// `name` is the placeholder identifier **without** the leading `:`.
    /// For a rendered `... = :where_id`, the builder calls
    /// `bind("where_id", ...)`. The builder only emits names present in the
    /// SQL it rendered, so every bind call has a matching placeholder.
    fn bind(&mut self, name: &str, value: Value);

    /// Execute the statement and return the number of affected rows.
    fn execute(&mut self) -> Result<u64, DriverError>;
}
