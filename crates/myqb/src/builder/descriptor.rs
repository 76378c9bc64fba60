//! The pre-render representation of one statement under construction.

use crate::builder::input::{Direction, JoinKind, Logic};
use crate::value::Value;

/// Statement verb chosen by the builder's verb methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operation {
    Select,
    Insert,
    Update,
    Delete,
}

/// Field list: the wildcard or explicit columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) enum FieldList {
    #[default]
    Wildcard,
    Columns(Vec<String>),
}

impl FieldList {
    pub(crate) fn columns(&self) -> &[String] {
        match self {
            FieldList::Wildcard => &[],
            FieldList::Columns(cols) => cols,
        }
    }
}

/// One JOIN entry; the condition stays a raw `left=right` string until
/// render time.
#[derive(Debug, Clone)]
pub(crate) struct Join {
    pub table: String,
    pub condition: String,
    pub kind: JoinKind,
}

/// One WHERE/HAVING entry.
#[derive(Debug, Clone)]
pub(crate) struct Condition {
    pub field: String,
    pub value: Value,
    pub logic: Logic,
}

/// LIMIT clause.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Limit {
    pub count: u64,
    pub offset: Option<u64>,
}

/// The mutable, partially-built representation of a single statement.
///
/// One descriptor lives in each query slot. The builder methods mutate the
/// active one in place; `run` renders and executes it, then resets it (the
/// slot itself persists). `sort_fields` and `sort_dirs` are parallel and
/// kept equal-length by the [`OrderSpec`](crate::builder::OrderSpec)
/// normalization.
#[derive(Debug, Clone, Default)]
pub(crate) struct QueryDescriptor {
    pub operation: Option<Operation>,
    pub table: String,
    pub fields: FieldList,
    pub data: Vec<Value>,
    pub joins: Vec<Join>,
    pub where_clause: Vec<Condition>,
    pub having_clause: Vec<Condition>,
    pub sort_fields: Vec<String>,
    pub sort_dirs: Vec<Direction>,
    pub group: Vec<String>,
    pub limit: Option<Limit>,
}

impl QueryDescriptor {
    /// Reset to the empty state while keeping the slot allocated.
    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }
}
