//! The read-only capability set shared by every error value, and the text
//! helpers used to render errors for people.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

use crate::info::ErrorInfo;

/// Separates the fields of a rendered error
pub(crate) const FIELD_SEPARATOR: &str = ": ";

/// Read access to the fields of a management error.
///
/// Downstream formatters (CLI, session layers) only rely on this trait, never
/// on concrete error types. `message` may be computed by a concrete type, for
/// example from its `error-info` content.
pub trait Formattable {
    fn message(&self) -> Cow<'_, str>;
    fn path(&self) -> &str;
    fn severity(&self) -> &str;
    fn tag(&self) -> &str;
    fn app_tag(&self) -> &str;
    fn error_type(&self) -> &str;
    fn info(&self) -> &ErrorInfo;
}

/// Severity with its first letter upper-cased ("error" -> "Error")
pub(crate) fn title(s: &str) -> Cow<'_, str> {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_lowercase() => {
            Cow::Owned(c.to_uppercase().chain(chars).collect())
        }
        _ => Cow::Borrowed(s),
    }
}

/// `Severity: [path: ]message`
pub(crate) fn write_default(
    f: &mut fmt::Formatter<'_>,
    severity: &str,
    path: &str,
    message: &str,
) -> fmt::Result {
    f.write_str(&title(severity))?;
    f.write_str(FIELD_SEPARATOR)?;
    if !path.is_empty() {
        f.write_str(path)?;
        f.write_str(FIELD_SEPARATOR)?;
    }
    f.write_str(message)
}

/// Compare strings so that embedded numbers sort by value ("eth2" < "eth10")
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut a = a;
    let mut b = b;
    loop {
        match (a.is_empty(), b.is_empty()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }
        let (a_chunk, a_rest) = split_chunk(a);
        let (b_chunk, b_rest) = split_chunk(b);
        let a_digits = a_chunk.starts_with(|c: char| c.is_ascii_digit());
        let b_digits = b_chunk.starts_with(|c: char| c.is_ascii_digit());
        let ord = if a_digits && b_digits {
            let a_num = a_chunk.trim_start_matches('0');
            let b_num = b_chunk.trim_start_matches('0');
            a_num
                .len()
                .cmp(&b_num.len())
                .then_with(|| a_num.cmp(b_num))
                .then_with(|| a_chunk.len().cmp(&b_chunk.len()))
        } else {
            a_chunk.cmp(b_chunk)
        };
        if ord != Ordering::Equal {
            return ord;
        }
        a = a_rest;
        b = b_rest;
    }
}

// Leading run of either digits or non-digits
fn split_chunk(s: &str) -> (&str, &str) {
    let digits = s.starts_with(|c: char| c.is_ascii_digit());
    let end = s
        .find(|c: char| c.is_ascii_digit() != digits)
        .unwrap_or(s.len());
    s.split_at(end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title() {
        assert_eq!(title("error"), "Error");
        assert_eq!(title("warning"), "Warning");
        assert_eq!(title(""), "");
        assert_eq!(title("Error"), "Error");
    }

    #[test]
    fn test_natural_cmp() {
        let mut names = vec!["eth10", "eth2", "dp0s1", "eth1", "system", "security"];
        names.sort_by(|a, b| natural_cmp(a, b));
        assert_eq!(
            names,
            vec!["dp0s1", "eth1", "eth2", "eth10", "security", "system"]
        );
    }

    #[test]
    fn test_natural_cmp_leading_zeros() {
        assert_eq!(natural_cmp("a01", "a1"), Ordering::Greater);
        assert_eq!(natural_cmp("a1", "a1"), Ordering::Equal);
        assert_eq!(natural_cmp("a", "a1"), Ordering::Less);
    }
}
