use super::{Formatter, ToCql};

/// A CQL identifier.
///
/// Unquoted identifiers are case-folded to lowercase by the database, so a
/// bare lowercase name serializes as-is and anything else is double-quoted.
pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> ToCql for Ident<S> {
    fn to_cql(self, f: &mut Formatter<'_>) {
        let name = self.0.as_ref();
        if is_bare(name) {
            f.dst.push_str(name);
        } else {
            f.dst.push('"');
            for c in name.chars() {
                if c == '"' {
                    f.dst.push('"');
                }
                f.dst.push(c);
            }
            f.dst.push('"');
        }
    }
}

fn is_bare(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::is_bare;

    #[test]
    fn bare_identifiers() {
        assert!(is_bare("users"));
        assert!(is_bare("user_events2"));
        assert!(!is_bare("Users"));
        assert!(!is_bare("user-events"));
        assert!(!is_bare("2users"));
        assert!(!is_bare(""));
    }
}
