//! The stateful query builder: slot store, chained clause methods, and
//! execution.
//!
//! A [`QueryBuilder`] holds any number of independently-built query slots
//! and a pointer to the active one. Every chained method mutates the active
//! slot in place and returns `&mut Self`; the builder is a handle to shared
//! mutable state, not a value type, and concurrent use from multiple
//! threads is ruled out by the `&mut` receivers.
//!
//! ```ignore
//! let mut qb = QueryBuilder::new("app_");
//! qb.select("id, name", "users")
//!     .filter("status", "active")
//!     .order_by(("created_at", Direction::Desc))
//!     .limit(20);
//! let stmt = qb.run(&mut conn)?;
//! ```

pub(crate) mod descriptor;
mod input;


pub use input::{Direction, Fields, JoinKind, Logic, OrderSpec};

use crate::bind;
use crate::builder::descriptor::{Condition, FieldList, Join, Limit, Operation, QueryDescriptor};
use crate::client::{Connection, Statement};
use crate::error::{QbError, QbResult};
use crate::render;
use crate::value::Value;

/// Chained-call SQL builder multiplexing independent query slots.
///
/// Slot 0 exists from construction; [`start_query`](Self::start_query)
/// allocates further slots with monotonically increasing ids. All verb and
/// clause methods target whichever slot is active.
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    prefix: String,
    slots: Vec<QueryDescriptor>,
    active: usize,
    row_counts: Vec<Option<u64>>,
}

impl Default for QueryBuilder {
    fn default() -> Self {
        Self::new("")
    }
}

impl QueryBuilder {
    /// Create a builder whose rendered identifiers carry `prefix`.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            slots: vec![QueryDescriptor::default()],
            active: 0,
            row_counts: vec![None],
        }
    }

    /// The table prefix applied to rendered identifiers.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    // ==================== Query slots ====================

    /// Allocate a fresh slot and make it the target of subsequent calls.
    pub fn start_query(&mut self) -> &mut Self {
        self.slots.push(QueryDescriptor::default());
        self.row_counts.push(None);
        self.active = self.slots.len() - 1;
        self
    }

    /// Switch the active slot.
    ///
    /// An id that was never allocated leaves the active slot unchanged.
    pub fn set_active(&mut self, id: usize) -> &mut Self {
        if id < self.slots.len() {
            self.active = id;
        }
        self
    }

    /// Id of the slot the chained methods currently target.
    pub fn active_slot(&self) -> usize {
        self.active
    }

    /// Rows affected by slot `id`'s most recent execution.
    ///
    /// Returns [`QbError::InvalidSlot`] if the slot never executed (or was
    /// never allocated).
    pub fn total_rows(&self, id: usize) -> QbResult<u64> {
        self.row_counts
            .get(id)
            .copied()
            .flatten()
            .ok_or(QbError::InvalidSlot(id))
    }

    fn query(&mut self) -> &mut QueryDescriptor {
        &mut self.slots[self.active]
    }

    // ==================== Verbs ====================

    /// Begin a SELECT of `fields` from `table`.
    ///
    /// `"*"` (or an empty list) selects everything; delimited strings are
    /// split on `,` and trimmed. Fields without a `.` qualifier get
    /// `table.` prepended. Re-calling a verb replaces the previous
    /// operation, fields, and table.
    pub fn select(&mut self, fields: impl Into<Fields>, table: &str) -> &mut Self {
        let fields = match fields.into().normalize() {
            Some(list) => {
                FieldList::Columns(list.iter().map(|f| qualify(f, table)).collect())
            }
            None => FieldList::Wildcard,
        };
        let q = self.query();
        q.operation = Some(Operation::Select);
        q.fields = fields;
        q.table = table.to_string();
        self
    }

    /// Begin a `SELECT *` from `table`.
    pub fn select_all(&mut self, table: &str) -> &mut Self {
        self.select(Fields::All, table)
    }

    /// Begin an INSERT of `data` (ordered column/value pairs) into
    /// `table`.
    ///
    /// Pair order decides both the column list and the bind order; keys are
    /// expected to be unique.
    pub fn insert<K, V, I>(&mut self, table: &str, data: I) -> &mut Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        let (fields, values): (Vec<String>, Vec<Value>) = data
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .unzip();
        let q = self.query();
        q.operation = Some(Operation::Insert);
        q.fields = FieldList::Columns(fields);
        q.data = values;
        q.table = table.to_string();
        self
    }

    /// Begin an UPDATE of `table` with `data` column/value pairs.
    ///
    /// Unqualified columns gain a `table.` qualifier, so their placeholders
    /// come out as `:table_column`.
    pub fn update<K, V, I>(&mut self, table: &str, data: I) -> &mut Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        let (fields, values): (Vec<String>, Vec<Value>) = data
            .into_iter()
            .map(|(k, v)| (qualify(&k.into(), table), v.into()))
            .unzip();
        let q = self.query();
        q.operation = Some(Operation::Update);
        q.fields = FieldList::Columns(fields);
        q.data = values;
        q.table = table.to_string();
        self
    }

    /// Begin a DELETE from `table`.
    pub fn delete(&mut self, table: &str) -> &mut Self {
        let q = self.query();
        q.operation = Some(Operation::Delete);
        q.table = table.to_string();
        self
    }

    // ==================== JOIN ====================

    /// Append an INNER JOIN.
    ///
    /// `condition` is a raw `left=right` equality; it is validated when the
    /// statement renders.
    pub fn join(&mut self, table: &str, condition: &str) -> &mut Self {
        self.join_with(table, condition, JoinKind::Inner)
    }

    /// Append a JOIN of the given kind.
    pub fn join_with(&mut self, table: &str, condition: &str, kind: JoinKind) -> &mut Self {
        self.query().joins.push(Join {
            table: table.to_string(),
            condition: condition.to_string(),
            kind,
        });
        self
    }

    /// Append a LEFT JOIN.
    pub fn left_join(&mut self, table: &str, condition: &str) -> &mut Self {
        self.join_with(table, condition, JoinKind::Left)
    }

    /// Append a RIGHT JOIN.
    pub fn right_join(&mut self, table: &str, condition: &str) -> &mut Self {
        self.join_with(table, condition, JoinKind::Right)
    }

    // ==================== WHERE / HAVING ====================

    /// Append an AND-connected WHERE condition.
    ///
    /// A [`Value::Null`] value renders `IS NULL` and binds nothing; the
    /// connective of the first condition is ignored at render time.
    pub fn filter(&mut self, field: &str, value: impl Into<Value>) -> &mut Self {
        self.push_condition(Clause::Where, field, value.into(), Logic::And)
    }

    /// Append an OR-connected WHERE condition.
    pub fn or_filter(&mut self, field: &str, value: impl Into<Value>) -> &mut Self {
        self.push_condition(Clause::Where, field, value.into(), Logic::Or)
    }

    /// Append several WHERE conditions at once, each AND-connected.
    pub fn filter_all<K, V, I>(&mut self, pairs: I) -> &mut Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        for (field, value) in pairs {
            self.push_condition(Clause::Where, &field.into(), value.into(), Logic::And);
        }
        self
    }

    /// Append an AND-connected HAVING condition.
    pub fn having(&mut self, field: &str, value: impl Into<Value>) -> &mut Self {
        self.push_condition(Clause::Having, field, value.into(), Logic::And)
    }

    /// Append an OR-connected HAVING condition.
    pub fn or_having(&mut self, field: &str, value: impl Into<Value>) -> &mut Self {
        self.push_condition(Clause::Having, field, value.into(), Logic::Or)
    }

    /// Append several HAVING conditions at once, each AND-connected.
    pub fn having_all<K, V, I>(&mut self, pairs: I) -> &mut Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        for (field, value) in pairs {
            self.push_condition(Clause::Having, &field.into(), value.into(), Logic::And);
        }
        self
    }

    fn push_condition(
        &mut self,
        clause: Clause,
        field: &str,
        value: Value,
        logic: Logic,
    ) -> &mut Self {
        let cond = Condition {
            field: field.trim().to_string(),
            value,
            logic,
        };
        let q = self.query();
        match clause {
            Clause::Where => q.where_clause.push(cond),
            Clause::Having => q.having_clause.push(cond),
        }
        self
    }

    // ==================== Ordering / grouping / limits ====================

    /// Replace the ORDER BY clause.
    ///
    /// Accepts plain fields (all ASC) or per-field `(field, Direction)`
    /// pairs.
    pub fn order_by(&mut self, spec: impl Into<OrderSpec>) -> &mut Self {
        self.set_order(spec.into(), Direction::Asc)
    }

    /// Replace the ORDER BY clause, applying one direction to every field.
    pub fn order_by_direction(
        &mut self,
        fields: impl Into<Fields>,
        direction: Direction,
    ) -> &mut Self {
        self.set_order(OrderSpec::Plain(fields.into()), direction)
    }

    fn set_order(&mut self, spec: OrderSpec, default: Direction) -> &mut Self {
        let (fields, dirs) = spec.normalize(default);
        let q = self.query();
        q.sort_fields = fields;
        q.sort_dirs = dirs;
        self
    }

    /// Replace the GROUP BY clause.
    pub fn group_by(&mut self, fields: impl Into<Fields>) -> &mut Self {
        self.query().group = fields.into().normalize().unwrap_or_default();
        self
    }

    /// Cap the number of affected/returned rows: `LIMIT count`.
    pub fn limit(&mut self, count: u64) -> &mut Self {
        self.query().limit = Some(Limit {
            count,
            offset: None,
        });
        self
    }

    /// Cap with an offset: renders `LIMIT offset, count`.
    pub fn limit_offset(&mut self, count: u64, offset: u64) -> &mut Self {
        self.query().limit = Some(Limit {
            count,
            offset: Some(offset),
        });
        self
    }

    // ==================== Rendering & execution ====================

    /// Render the active slot without executing it.
    pub fn to_sql(&self) -> QbResult<String> {
        render::render(&self.slots[self.active], &self.prefix)
    }

    /// Execute the active slot and clear its descriptor on success.
    ///
    /// Renders the SQL, prepares it on `conn`, binds every placeholder
    /// value, and executes. The affected-row count is recorded for the
    /// active slot and the executed statement handle is returned. A failed
    /// prepare or execute leaves the descriptor untouched so the caller can
    /// inspect or retry it.
    pub fn run<C: Connection>(&mut self, conn: &mut C) -> QbResult<C::Stmt> {
        self.run_inner(conn, false)
    }

    /// Execute the active slot, retaining the descriptor for re-execution.
    pub fn run_keep<C: Connection>(&mut self, conn: &mut C) -> QbResult<C::Stmt> {
        self.run_inner(conn, true)
    }

    fn run_inner<C: Connection>(&mut self, conn: &mut C, keep: bool) -> QbResult<C::Stmt> {
        let sql = self.to_sql()?;
        tracing::debug!(slot = self.active, sql = %sql, "executing query");
        let mut stmt = conn.prepare(&sql).map_err(QbError::Prepare)?;
        bind::bind_values(&self.slots[self.active], &mut stmt);
        let rows = stmt.execute().map_err(QbError::Execution)?;
        tracing::trace!(slot = self.active, rows, "query finished");
        self.row_counts[self.active] = Some(rows);
        if !keep {
            self.slots[self.active].clear();
        }
        Ok(stmt)
    }
}

enum Clause {
    Where,
    Having,
}

/// Prepend `table.` to a field that carries no qualifier of its own.
fn qualify(field: &str, table: &str) -> String {
    let field = field.trim();
    if field.contains('.') {
        field.to_string()
    } else {
        format!("{table}.{field}")
    }
}
