//! SQL rendering: pure functions from a descriptor to a statement string.
//!
//! Rendering never touches the descriptor, so the same descriptor and
//! prefix always produce byte-identical SQL. Placeholder names emitted here
//! are the single source of truth for the binder: both derive them from the
//! same descriptor walk via [`placeholder_name`].

mod delete;
mod insert;
mod select;
mod update;

use crate::builder::Direction;
use crate::builder::descriptor::{Condition, Join, Limit, Operation, QueryDescriptor};
use crate::error::{QbError, QbResult};
use crate::ident;

/// Render the SQL for `desc`, applying `prefix` to prefixable identifiers.
pub(crate) fn render(desc: &QueryDescriptor, prefix: &str) -> QbResult<String> {
    let op = desc.operation.ok_or(QbError::OperationNotSet)?;
    let prefix = if prefix.is_empty() {
        None
    } else {
        Some(prefix)
    };
    match op {
        Operation::Select => select::render(desc, prefix),
        Operation::Insert => insert::render(desc, prefix),
        Operation::Update => update::render(desc, prefix),
        Operation::Delete => delete::render(desc, prefix),
    }
}

/// Replace dots so a qualified field can serve as a placeholder name.
pub(crate) fn placeholder_name(field: &str) -> String {
    field.replace('.', "_")
}

/// Append ` KIND JOIN table ON left = right` for each join.
///
/// The condition must split on `=` into exactly two non-empty sides.
pub(crate) fn write_joins(out: &mut String, joins: &[Join], prefix: Option<&str>) -> QbResult<()> {
    for join in joins {
        let parts: Vec<&str> = join.condition.split('=').map(str::trim).collect();
        let (left, right) = match parts.as_slice() {
            [left, right] if !left.is_empty() && !right.is_empty() => (*left, *right),
            _ => {
                return Err(QbError::malformed(
                    "join",
                    format!(
                        "condition {:?} must be of the form left=right",
                        join.condition
                    ),
                ));
            }
        };
        out.push(' ');
        out.push_str(join.kind.as_str());
        out.push_str(" JOIN ");
        ident::write_ident(out, &join.table, prefix);
        out.push_str(" ON ");
        ident::write_ident(out, left, prefix);
        out.push_str(" = ");
        ident::write_ident(out, right, prefix);
    }
    Ok(())
}

/// Append a WHERE or HAVING clause.
///
/// Every entry after the first leads with its connective; the first entry's
/// connective is suppressed regardless of what was supplied. Null values
/// render ` IS NULL`, everything else ` = :<kw>_<field>` with dots in the
/// field replaced by underscores.
pub(crate) fn write_conditions(
    out: &mut String,
    keyword: &str,
    conds: &[Condition],
    prefix: Option<&str>,
) {
    if conds.is_empty() {
        return;
    }
    out.push(' ');
    out.push_str(keyword);
    let placeholder_prefix = keyword.to_ascii_lowercase();
    for (i, cond) in conds.iter().enumerate() {
        if i > 0 {
            out.push(' ');
            out.push_str(cond.logic.as_str());
        }
        out.push(' ');
        ident::write_ident(out, &cond.field, prefix);
        if cond.value.is_null() {
            out.push_str(" IS NULL");
        } else {
            out.push_str(" = :");
            out.push_str(&placeholder_prefix);
            out.push('_');
            out.push_str(&placeholder_name(&cond.field));
        }
    }
}

/// Append ` ORDER BY f1 DIR1, f2 DIR2, …` zipped from the parallel vecs.
pub(crate) fn write_order(
    out: &mut String,
    fields: &[String],
    dirs: &[Direction],
    prefix: Option<&str>,
) {
    if fields.is_empty() {
        return;
    }
    debug_assert_eq!(fields.len(), dirs.len());
    out.push_str(" ORDER BY ");
    for (i, (field, dir)) in fields.iter().zip(dirs).enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        ident::write_ident(out, field, prefix);
        out.push(' ');
        out.push_str(dir.as_str());
    }
}

/// Append ` GROUP BY f1, f2, …`.
pub(crate) fn write_group(out: &mut String, group: &[String], prefix: Option<&str>) {
    if group.is_empty() {
        return;
    }
    out.push_str(" GROUP BY ");
    ident::write_ident_list(out, group, prefix);
}

/// Append ` LIMIT count` or ` LIMIT offset, count`.
pub(crate) fn write_limit(out: &mut String, limit: Option<Limit>) {
    if let Some(limit) = limit {
        match limit.offset {
            Some(offset) => out.push_str(&format!(" LIMIT {}, {}", offset, limit.count)),
            None => out.push_str(&format!(" LIMIT {}", limit.count)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::JoinKind;

    #[test]
    fn placeholder_name_replaces_dots() {
        assert_eq!(placeholder_name("users.name"), "users_name");
        assert_eq!(placeholder_name("plain"), "plain");
    }

    #[test]
    fn join_without_equals_is_malformed() {
        let joins = vec![Join {
            table: "orders".to_string(),
            condition: "no condition".to_string(),
            kind: JoinKind::Inner,
        }];
        let mut out = String::new();
        let err = write_joins(&mut out, &joins, None).unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn join_with_two_equals_is_malformed() {
        let joins = vec![Join {
            table: "orders".to_string(),
            condition: "a=b=c".to_string(),
            kind: JoinKind::Inner,
        }];
        let mut out = String::new();
        assert!(write_joins(&mut out, &joins, None).is_err());
    }

    #[test]
    fn join_renders_both_sides_quoted() {
        let joins = vec![Join {
            table: "orders".to_string(),
            condition: "users.id = orders.user_id".to_string(),
            kind: JoinKind::Left,
        }];
        let mut out = String::new();
        write_joins(&mut out, &joins, None).unwrap();
        assert_eq!(
            out,
            " LEFT JOIN `orders` ON `users`.`id` = `orders`.`user_id`"
        );
    }
}
