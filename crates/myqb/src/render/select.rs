//! SELECT statement assembly.

use crate::builder::descriptor::{FieldList, QueryDescriptor};
use crate::error::QbResult;
use crate::ident;
use crate::render::{write_conditions, write_group, write_joins, write_limit, write_order};

/// `SELECT fields|* FROM table joins where group having order limit`
pub(crate) fn render(desc: &QueryDescriptor, prefix: Option<&str>) -> QbResult<String> {
    let mut sql = String::with_capacity(96);
    sql.push_str("SELECT ");
    match &desc.fields {
        FieldList::Wildcard => sql.push('*'),
        FieldList::Columns(cols) => ident::write_ident_list(&mut sql, cols, prefix),
    }
    sql.push_str(" FROM ");
    ident::write_ident(&mut sql, &desc.table, prefix);
    write_joins(&mut sql, &desc.joins, prefix)?;
    write_conditions(&mut sql, "WHERE", &desc.where_clause, prefix);
    write_group(&mut sql, &desc.group, prefix);
    write_conditions(&mut sql, "HAVING", &desc.having_clause, prefix);
    write_order(&mut sql, &desc.sort_fields, &desc.sort_dirs, prefix);
    write_limit(&mut sql, desc.limit);
    Ok(sql)
}
