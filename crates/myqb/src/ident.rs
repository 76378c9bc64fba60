//! Backtick identifier quoting with table-prefix support.
//!
//! Identifiers use dotted notation (`table.column`). Rendering splits on
//! `.`, trims each segment, backtick-quotes it (embedded backticks are
//! escaped by doubling), and rejoins with `.`. When a prefix is requested it
//! is attached to the first segment, inside its quotes:
//!
//! `users.name` with prefix `app_` renders `` `app_users`.`name` ``.

/// Quote a single dotted identifier, optionally applying a table prefix.
pub fn quote_ident(raw: &str, prefix: Option<&str>) -> String {
    let mut out = String::with_capacity(raw.len() + 8);
    write_ident(&mut out, raw, prefix);
    out
}

pub(crate) fn write_ident(out: &mut String, raw: &str, prefix: Option<&str>) {
    for (i, segment) in raw.trim().split('.').enumerate() {
        if i > 0 {
            out.push('.');
        }
        out.push('`');
        if i == 0 {
            if let Some(p) = prefix {
                push_escaped(out, p);
            }
        }
        push_escaped(out, segment.trim());
        out.push('`');
    }
}

/// Render a comma-separated identifier list.
pub(crate) fn write_ident_list(out: &mut String, fields: &[String], prefix: Option<&str>) {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        write_ident(out, field, prefix);
    }
}

fn push_escaped(out: &mut String, s: &str) {
    for ch in s.chars() {
        if ch == '`' {
            out.push_str("``");
        } else {
            out.push(ch);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ident_simple() {
        assert_eq!(quote_ident("users", None), "`users`");
    }

    #[test]
    fn ident_dotted() {
        assert_eq!(quote_ident("users.name", None), "`users`.`name`");
    }

    #[test]
    fn ident_trims_whitespace() {
        assert_eq!(quote_ident(" users . name ", None), "`users`.`name`");
    }

    #[test]
    fn ident_prefix_on_first_segment_only() {
        assert_eq!(
            quote_ident("users.name", Some("app_")),
            "`app_users`.`name`"
        );
    }

    #[test]
    fn ident_prefix_on_bare_name() {
        assert_eq!(quote_ident("users", Some("app_")), "`app_users`");
    }

    #[test]
    fn ident_escapes_backticks() {
        assert_eq!(quote_ident("we`ird", None), "`we``ird`");
    }

    #[test]
    fn ident_list_comma_joined() {
        let mut out = String::new();
        write_ident_list(
            &mut out,
            &["t.a".to_string(), "t.b".to_string()],
            Some("x_"),
        );
        assert_eq!(out, "`x_t`.`a`, `x_t`.`b`");
    }
}
