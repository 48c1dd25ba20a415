//! Vendor error wrappers

use std::borrow::Cow;
use std::fmt;

use super::catalog_record;
use crate::catalog::vendor::{VENDOR, VendorAppTag, VendorTag};
use crate::format::{FIELD_SEPARATOR, natural_cmp, title};
use crate::info::{ErrorInfo, InfoTag};
use crate::path::{err_path, make_path, path_str};
use crate::record::MgmtError;
use crate::types::VENDOR_NAMESPACE;

fn vendor_record(app_tag: VendorAppTag, path: String, info: ErrorInfo) -> MgmtError {
    catalog_record(VENDOR.build(VendorTag::OperationFailed, app_tag, &path, info))
}

// Candidates as (name, description), one per name, in natural order
fn completions(info: &ErrorInfo) -> Vec<(&str, &str)> {
    let mut candidates: Vec<(&str, &str)> = Vec::with_capacity(info.len());
    for tag in info {
        match candidates.iter_mut().find(|(name, _)| *name == tag.name) {
            Some(existing) => existing.1 = tag.value.as_str(),
            None => candidates.push((tag.name.as_str(), tag.value.as_str())),
        }
    }
    candidates.sort_by(|a, b| natural_cmp(a.0, b.0));
    candidates
}

fn ambiguous_message(e: &MgmtError) -> Cow<'_, str> {
    let mut msg = if e.path.is_empty() {
        "Ambiguous command".to_string()
    } else {
        format!("{} is ambiguous", err_path(&make_path(&e.path)))
    };
    msg.push_str("\nPossible completions:");
    for (name, description) in completions(&e.info) {
        msg.push_str("\n  ");
        msg.push_str(name);
        msg.push('\t');
        msg.push_str(description);
    }
    Cow::Owned(msg)
}

fn ambiguous_display(e: &MgmtError, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&title(&e.severity))?;
    f.write_str(FIELD_SEPARATOR)?;
    if e.path.is_empty() {
        f.write_str("Ambiguous command")?;
    } else {
        write!(f, "{}{}Ambiguous path", e.path, FIELD_SEPARATOR)?;
    }
    f.write_str(", could be one of: ")?;

    let names: Vec<&str> = completions(&e.info).into_iter().map(|(n, _)| n).collect();
    f.write_str(&names.join(", "))
}

typed_error! {
    /// A subtask (script or external command) failed. The message is the
    /// subtask's output.
    Exec => ExecError;

    /// An abbreviated path matched several nodes. Each candidate is an
    /// `error-info` leaf in the vendor namespace, named after the candidate
    /// and holding its description.
    PathAmbiguous => PathAmbiguousError,
        message = ambiguous_message, display = ambiguous_display;
}

impl ExecError {
    /// `path` is the path of the subtask that ran, `output` what it printed
    pub fn new<S: AsRef<str>>(path: &[S], output: impl Into<String>) -> Self {
        let record = vendor_record(VendorAppTag::ExecFailed, path_str(path), ErrorInfo::new());
        Self(record.with_message(output))
    }
}

impl PathAmbiguousError {
    /// `matches` maps each possible completion of `path` to its description
    pub fn new<S, I, K, V>(path: &[S], matches: I) -> Self
    where
        S: AsRef<str>,
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut info: Vec<InfoTag> = matches
            .into_iter()
            .map(|(name, description)| InfoTag::new(VENDOR_NAMESPACE, name, description))
            .collect();
        info.sort_by(|a, b| natural_cmp(&a.name, &b.name));
        Self(vendor_record(
            VendorAppTag::PathAmbiguous,
            path_str(path),
            info.into(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::Formattable;

    #[test]
    fn test_exec_error() {
        let err = ExecError::new(&["usr", "bin", "app"], "core dumped");
        assert_eq!(err.to_string(), "Error: /usr/bin/app: core dumped");
        assert_eq!(err.app_tag(), "exec-failed");
        assert_eq!(err.tag(), "operation-failed");
    }

    #[test]
    fn test_path_ambiguous_display() {
        let err = PathAmbiguousError::new(
            &["s"],
            [
                ("system", "System parameters"),
                ("service", "Services"),
                ("security", "Security"),
            ],
        );
        assert_eq!(
            err.to_string(),
            "Error: /s: Ambiguous path, could be one of: security, service, system"
        );
    }

    #[test]
    fn test_path_ambiguous_command() {
        let err = PathAmbiguousError::new::<&str, _, _, _>(
            &[],
            [
                ("show", "Show the configuration (default values may be suppressed)"),
                ("set", "Set the value of a parameter or create a new element"),
                ("save", "Save configuration to a file"),
            ],
        );
        assert_eq!(
            err.to_string(),
            "Error: Ambiguous command, could be one of: save, set, show"
        );
        assert!(err.message().starts_with("Ambiguous command\nPossible completions:\n  save\t"));
    }

    #[test]
    fn test_path_ambiguous_message() {
        let err = PathAmbiguousError::new(
            &["interfaces", "e"],
            [("ethernet10", "Ten"), ("ethernet2", "Two")],
        );
        assert_eq!(
            err.message(),
            "interfaces [e] is ambiguous\nPossible completions:\n  ethernet2\tTwo\n  ethernet10\tTen"
        );
        assert!(err.info().iter().all(|t| t.namespace == VENDOR_NAMESPACE));
    }
}
