//! # myqb
//!
//! A slot-multiplexed fluent SQL query builder over a generic driver
//! connection.
//!
//! ## Features
//!
//! - **Chained assembly**: SELECT / INSERT / UPDATE / DELETE built through
//!   method calls, rendered with named `:placeholder` parameters so caller
//!   data never lands in the SQL string
//! - **Query slots**: several independently-built statements multiplexed on
//!   one builder, switched with `start_query` / `set_active`
//! - **One flavor**: backtick identifier quoting with a configurable table
//!   prefix applied at render time
//! - **Driver-agnostic**: implement [`Connection`] and [`Statement`] for
//!   any client that can prepare, bind, and execute
//!
//! ## Usage
//!
//! ```ignore
//! use myqb::{Direction, QueryBuilder, Value};
//!
//! let mut qb = QueryBuilder::new("app_");
//!
//! // SELECT
//! qb.select("id, name", "users")
//!     .filter("status", "active")
//!     .order_by(("created_at", Direction::Desc))
//!     .limit(20)
//!     .run(&mut conn)?;
//!
//! // INSERT
//! qb.insert("users", vec![("username", "alice"), ("email", "a@x.io")])
//!     .run(&mut conn)?;
//! let created = qb.total_rows(qb.active_slot())?;
//!
//! // UPDATE
//! qb.update("users", vec![("status", Value::from("inactive"))])
//!     .filter("id", 7i64)
//!     .run(&mut conn)?;
//!
//! // DELETE
//! qb.delete("users").filter("id", 7i64).run(&mut conn)?;
//! ```

mod bind;
pub mod builder;
pub mod client;
pub mod error;
pub mod ident;
mod render;
pub mod value;

pub use builder::{Direction, Fields, JoinKind, Logic, OrderSpec, QueryBuilder};
pub use client::{Connection, DriverError, Statement};
pub use error::{QbError, QbResult};
pub use value::Value;

/// Commonly used items.
pub mod prelude {
    pub use crate::builder::{Direction, JoinKind, QueryBuilder};
    pub use crate::client::{Connection, DriverError, Statement};
    pub use crate::error::{QbError, QbResult};
    pub use crate::value::Value;
}
