//! DELETE statement assembly.

use crate::builder::descriptor::QueryDescriptor;
use crate::error::QbResult;
use crate::ident;
use crate::render::{write_conditions, write_limit, write_order};

/// `DELETE FROM table where order limit`
pub(crate) fn render(desc: &QueryDescriptor, prefix: Option<&str>) -> QbResult<String> {
    let mut sql = String::with_capacity(64);
    sql.push_str("DELETE FROM ");
    ident::write_ident(&mut sql, &desc.table, prefix);
    write_conditions(&mut sql, "WHERE", &desc.where_clause, prefix);
    write_order(&mut sql, &desc.sort_fields, &desc.sort_dirs, prefix);
    write_limit(&mut sql, desc.limit);
    Ok(sql)
}
