//! UPDATE statement assembly.

use crate::builder::descriptor::QueryDescriptor;
use crate::error::{QbError, QbResult};
use crate::ident;
use crate::render::{placeholder_name, write_conditions, write_limit, write_order};

/// `UPDATE table SET f = :f_with_dots_replaced, … where order limit`
pub(crate) fn render(desc: &QueryDescriptor, prefix: Option<&str>) -> QbResult<String> {
    let cols = desc.fields.columns();
    if cols.is_empty() {
        return Err(QbError::malformed(
            "set",
            "update requires at least one column",
        ));
    }
    let mut sql = String::with_capacity(96);
    sql.push_str("UPDATE ");
    ident::write_ident(&mut sql, &desc.table, prefix);
    sql.push_str(" SET ");
    for (i, col) in cols.iter().enumerate() {
        if i > 0 {
            sql.push_str(", ");
        }
        ident::write_ident(&mut sql, col, prefix);
        sql.push_str(" = :");
        sql.push_str(&placeholder_name(col));
    }
    write_conditions(&mut sql, "WHERE", &desc.where_clause, prefix);
    write_order(&mut sql, &desc.sort_fields, &desc.sort_dirs, prefix);
    write_limit(&mut sql, desc.limit);
    Ok(sql)
}
