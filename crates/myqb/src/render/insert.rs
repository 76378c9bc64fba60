//! INSERT statement assembly.

use crate::builder::descriptor::QueryDescriptor;
use crate::error::QbResult;
use crate::ident;
use crate::render::placeholder_name;

/// `INSERT INTO table (cols) VALUES (:c1, :c2, …)`
///
/// The column list is quoted but never table-prefixed; placeholder names
/// are the column names themselves.
pub(crate) fn render(desc: &QueryDescriptor, prefix: Option<&str>) -> QbResult<String> {
    let cols = desc.fields.columns();
    let mut sql = String::with_capacity(64);
    sql.push_str("INSERT INTO ");
    ident::write_ident(&mut sql, &desc.table, prefix);
    sql.push_str(" (");
    ident::write_ident_list(&mut sql, cols, None);
    sql.push_str(") VALUES (");
    for (i, col) in cols.iter().enumerate() {
        if i > 0 {
            sql.push_str(", ");
        }
        sql.push(':');
        sql.push_str(&placeholder_name(col));
    }
    sql.push(')');
    Ok(sql)
}
