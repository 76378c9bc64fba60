//! Binder: walks a descriptor and attaches values to a prepared statement.
//!
//! Binding is purely name-keyed and walks the descriptor in the same order
//! the renderer emitted placeholders: insert/update data first, then WHERE
//! values, then HAVING values. Only clauses the renderer emits for the
//! operation are bound, so every bind call has a matching placeholder.
//! Null condition values rendered `IS NULL` produce no bind call.

use crate::builder::descriptor::{Condition, Operation, QueryDescriptor};
use crate::client::Statement;
use crate::render::placeholder_name;

pub(crate) fn bind_values(desc: &QueryDescriptor, stmt: &mut impl Statement) {
    let Some(op) = desc.operation else {
        return;
    };
    if matches!(op, Operation::Insert | Operation::Update) {
        for (col, value) in desc.fields.columns().iter().zip(&desc.data) {
            stmt.bind(&placeholder_name(col), value.clone());
        }
    }
    if matches!(
        op,
        Operation::Select | Operation::Update | Operation::Delete
    ) {
        bind_conditions(stmt, "where", &desc.where_clause);
    }
    if matches!(op, Operation::Select) {
        bind_conditions(stmt, "having", &desc.having_clause);
    }
}

fn bind_conditions(stmt: &mut impl Statement, keyword: &str, conds: &[Condition]) {
    for cond in conds {
        if !cond.value.is_null() {
            let name = format!("{keyword}_{}", placeholder_name(&cond.field));
            stmt.bind(&name, cond.value.clone());
        }
    }
}
