//! Conversions between absolute data paths ("/interfaces/dataplane/dp0s1")
//! and their element lists.
//!
//! Elements are percent-escaped when joined so that a list key containing
//! '/' survives a round trip.

/// Split an absolute path into its unescaped elements
pub fn make_path(path: &str) -> Vec<String> {
    path.split('/')
        .filter(|elem| !elem.is_empty())
        .map(unescape)
        .collect()
}

/// Join elements into an absolute path; no elements gives an empty path
pub fn path_str<S: AsRef<str>>(elements: &[S]) -> String {
    let mut path = String::new();
    for elem in elements {
        path.push('/');
        escape_into(&mut path, elem.as_ref());
    }
    path
}

/// Render path elements the way the CLI shows them: the parent elements
/// separated by spaces and the last one bracketed, `interfaces dataplane
/// [dp0s1]`. Fewer than two elements are all bracketed.
pub fn err_path<S: AsRef<str>>(elements: &[S]) -> String {
    match elements.split_last() {
        Some((last, parents)) if !parents.is_empty() => {
            let parents: Vec<&str> = parents.iter().map(AsRef::as_ref).collect();
            format!("{} [{}]", parents.join(" "), last.as_ref())
        }
        Some((last, _)) => format!("[{}]", last.as_ref()),
        None => "[]".to_string(),
    }
}

fn escape_into(out: &mut String, elem: &str) {
    for c in elem.chars() {
        match c {
            '%' => out.push_str("%25"),
            '/' => out.push_str("%2F"),
            c => out.push(c),
        }
    }
}

fn unescape(elem: &str) -> String {
    if !elem.contains('%') {
        return elem.to_string();
    }
    let bytes = elem.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%'
            && i + 2 < bytes.len()
            && let (Some(hi), Some(lo)) = (hex_value(bytes[i + 1]), hex_value(bytes[i + 2]))
        {
            out.push(hi << 4 | lo);
            i += 3;
            continue;
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8(out).unwrap_or_else(|_| elem.to_string())
}

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_path() {
        assert_eq!(make_path("/foo/bar/biz"), vec!["foo", "bar", "biz"]);
        assert_eq!(make_path(""), Vec::<String>::new());
        assert_eq!(make_path("/"), Vec::<String>::new());
        assert_eq!(make_path("/a%2Fb/c"), vec!["a/b", "c"]);
    }

    #[test]
    fn test_path_str() {
        assert_eq!(path_str(&["usr", "bin", "app"]), "/usr/bin/app");
        assert_eq!(path_str::<&str>(&[]), "");
        assert_eq!(path_str(&["10.0.0.1/24"]), "/10.0.0.1%2F24");
    }

    #[test]
    fn test_round_trip_escaped_elements() {
        let elems = vec!["address".to_string(), "10.0.0.1/24".to_string(), "50%".to_string()];
        assert_eq!(make_path(&path_str(&elems)), elems);
    }

    #[test]
    fn test_err_path() {
        assert_eq!(err_path(&["foo", "bar", "biz"]), "foo bar [biz]");
        assert_eq!(err_path(&["s"]), "[s]");
        assert_eq!(err_path::<&str>(&[]), "[]");
    }
}
