//! Typed inputs for the chained builder methods.
//!
//! The builder accepts field lists in several shapes (a `,`-delimited
//! string, an explicit list, or per-field direction pairs for ORDER BY).
//! Each shape is a tagged variant normalized to a canonical `Vec<String>`
//! form at the API boundary, so the descriptor and renderer only ever see
//! one representation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Join flavor keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum JoinKind {
    #[default]
    Inner,
    Left,
    Right,
    Full,
}

impl JoinKind {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            JoinKind::Inner => "INNER",
            JoinKind::Left => "LEFT",
            JoinKind::Right => "RIGHT",
            JoinKind::Full => "FULL",
        }
    }
}

impl fmt::Display for JoinKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Connective between successive WHERE/HAVING entries.
///
/// The first entry's connective is ignored when the clause renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Logic {
    #[default]
    And,
    Or,
}

impl Logic {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Logic::And => "AND",
            Logic::Or => "OR",
        }
    }
}

impl fmt::Display for Logic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field list input: the wildcard, a delimited string, or an explicit list.
#[derive(Debug, Clone)]
pub enum Fields {
    All,
    Delimited(String),
    List(Vec<String>),
}

impl Fields {
    /// Normalize to an ordered field list; `None` is the wildcard.
    ///
    /// Delimited strings are split on `,`; every field is trimmed and empty
    /// entries are dropped. An empty result collapses to the wildcard.
    pub(crate) fn normalize(self) -> Option<Vec<String>> {
        let list: Vec<String> = match self {
            Fields::All => return None,
            Fields::Delimited(s) => s
                .split(',')
                .map(|f| f.trim().to_string())
                .filter(|f| !f.is_empty())
                .collect(),
            Fields::List(fields) => fields
                .into_iter()
                .map(|f| f.trim().to_string())
                .filter(|f| !f.is_empty())
                .collect(),
        };
        if list.is_empty() { None } else { Some(list) }
    }
}

impl From<&str> for Fields {
    fn from(s: &str) -> Self {
        if s.trim() == "*" || s.trim().is_empty() {
            Fields::All
        } else {
            Fields::Delimited(s.to_string())
        }
    }
}

impl From<String> for Fields {
    fn from(s: String) -> Self {
        s.as_str().into()
    }
}

impl From<Vec<String>> for Fields {
    fn from(fields: Vec<String>) -> Self {
        Fields::List(fields)
    }
}

impl From<Vec<&str>> for Fields {
    fn from(fields: Vec<&str>) -> Self {
        Fields::List(fields.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Fields {
    fn from(fields: &[&str]) -> Self {
        Fields::List(fields.iter().map(|f| f.to_string()).collect())
    }
}

/// ORDER BY input: plain fields sharing one direction, or per-field pairs.
#[derive(Debug, Clone)]
pub enum OrderSpec {
    Plain(Fields),
    Keyed(Vec<(String, Direction)>),
}

impl OrderSpec {
    /// Normalize to the parallel field/direction vectors the descriptor
    /// stores. Plain fields all take `default`; keyed pairs carry their
    /// own direction, so the two vectors are equal-length by construction.
    pub(crate) fn normalize(self, default: Direction) -> (Vec<String>, Vec<Direction>) {
        match self {
            OrderSpec::Plain(fields) => {
                let fields = fields.normalize().unwrap_or_default();
                let dirs = vec![default; fields.len()];
                (fields, dirs)
            }
            OrderSpec::Keyed(pairs) => pairs
                .into_iter()
                .map(|(f, d)| (f.trim().to_string(), d))
                .filter(|(f, _)| !f.is_empty())
                .unzip(),
        }
    }
}

impl From<&str> for OrderSpec {
    fn from(s: &str) -> Self {
        OrderSpec::Plain(s.into())
    }
}

impl From<String> for OrderSpec {
    fn from(s: String) -> Self {
        OrderSpec::Plain(s.into())
    }
}

impl From<Vec<String>> for OrderSpec {
    fn from(fields: Vec<String>) -> Self {
        OrderSpec::Plain(fields.into())
    }
}

impl From<Vec<&str>> for OrderSpec {
    fn from(fields: Vec<&str>) -> Self {
        OrderSpec::Plain(fields.into())
    }
}

impl From<(&str, Direction)> for OrderSpec {
    fn from((field, dir): (&str, Direction)) -> Self {
        OrderSpec::Keyed(vec![(field.to_string(), dir)])
    }
}

impl From<Vec<(String, Direction)>> for OrderSpec {
    fn from(pairs: Vec<(String, Direction)>) -> Self {
        OrderSpec::Keyed(pairs)
    }
}

impl From<Vec<(&str, Direction)>> for OrderSpec {
    fn from(pairs: Vec<(&str, Direction)>) -> Self {
        OrderSpec::Keyed(
            pairs
                .into_iter()
                .map(|(f, d)| (f.to_string(), d))
                .collect(),
        )
    }
}
