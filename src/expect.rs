//! Expectations for tests of code that reports management errors
//!
//! Path, message fragments and info are always compared; type, tag, app-tag
//! and severity only when set.

use std::fmt::Write;

use crate::format::Formattable;
use crate::info::InfoTag;
use crate::list::ErrorList;
use crate::typed::TypedError;

/// An error a test expects to see
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpectedError {
    name: String,
    messages: Vec<String>,
    path: String,
    info: Vec<InfoTag>,
    error_type: Option<String>,
    tag: Option<String>,
    app_tag: Option<String>,
    severity: Option<String>,
}

impl ExpectedError {
    /// `messages` must all appear in the actual message, `path` must match
    /// exactly and `info` must hold the same leaves
    pub fn new<M, S>(messages: M, path: impl Into<String>, info: Vec<InfoTag>) -> Self
    where
        M: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: "Unspecified Error".to_string(),
            messages: messages.into_iter().map(Into::into).collect(),
            path: path.into(),
            info,
            ..Default::default()
        }
    }

    /// Expectation matching the fields of `err`, message included verbatim
    pub fn like(err: &TypedError) -> Self {
        Self::new([err.message()], err.path(), err.info().as_slice().to_vec())
            .with_name(err.kind())
            .with_type(err.error_type())
            .with_tag(err.tag())
            .with_app_tag(err.app_tag())
            .with_severity(err.severity())
    }

    /// Label used in mismatch reports
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_type(mut self, error_type: impl Into<String>) -> Self {
        self.error_type = Some(error_type.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn with_app_tag(mut self, app_tag: impl Into<String>) -> Self {
        self.app_tag = Some(app_tag.into());
        self
    }

    pub fn with_severity(mut self, severity: impl Into<String>) -> Self {
        self.severity = Some(severity.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn matches<F: Formattable + ?Sized>(&self, actual: &F) -> bool {
        if actual.path() != self.path {
            return false;
        }

        let info = actual.info();
        if info.len() != self.info.len() || !self.info.iter().all(|t| info.iter().any(|a| a == t)) {
            return false;
        }

        let message = actual.message();
        if !self.messages.iter().all(|m| message.contains(m.as_str())) {
            return false;
        }

        optional_matches(&self.error_type, actual.error_type())
            && optional_matches(&self.tag, actual.tag())
            && optional_matches(&self.app_tag, actual.app_tag())
            && optional_matches(&self.severity, actual.severity())
    }

    fn describe(&self) -> String {
        let mut out = format!(
            "{}\n\tPath:\t{}\n\tMsgs:\t{:?}\n",
            self.name, self.path, self.messages
        );
        for (label, value) in [
            ("Type", &self.error_type),
            ("Tag", &self.tag),
            ("AppTag", &self.app_tag),
            ("Sev", &self.severity),
        ] {
            if let Some(value) = value {
                let _ = writeln!(out, "\t{label}:\t{value}");
            }
        }
        for tag in &self.info {
            let _ = writeln!(out, "\tInfo:\t{}:{} = {}", tag.namespace, tag.name, tag.value);
        }
        out
    }
}

// Unset expectations, and empty ones, match anything
fn optional_matches(expected: &Option<String>, actual: &str) -> bool {
    match expected {
        Some(expected) if !expected.is_empty() => expected == actual,
        _ => true,
    }
}

fn describe_actual<F: Formattable + ?Sized>(actual: &F) -> String {
    let mut out = format!(
        "\tPath:\t{}\n\tMsg:\t{}\n\tTag:\t{}\n\tType:\t{}\n\tSev:\t{}\n\tAppTag:\t{}\n",
        actual.path(),
        actual.message(),
        actual.tag(),
        actual.error_type(),
        actual.severity(),
        actual.app_tag()
    );
    for tag in actual.info() {
        let _ = writeln!(out, "\tInfo:\t{}:{} = {}", tag.namespace, tag.name, tag.value);
    }
    out
}

/// Check that every actual error was expected and every expected error was
/// seen. The error describes the first mismatch found.
pub fn check_errors(expected: &[ExpectedError], actual: &ErrorList) -> Result<(), String> {
    for err in actual {
        if !expected.iter().any(|exp| exp.matches(err)) {
            let mut report = format!("Found unexpected error:\n{}", describe_actual(err));
            if let Some(first) = expected.first() {
                let _ = write!(report, "Expecting:\n{}", first.describe());
            }
            return Err(report);
        }
    }

    for exp in expected {
        if !actual.iter().any(|err| exp.matches(err)) {
            return Err(format!("Error not found:\n{}", exp.describe()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typed::{ExecError, InstanceRequiredError, LockDeniedError, MustViolationError};

    #[test]
    fn test_matches_fragments_and_path() {
        let err = ExecError::new(&["opt", "run"], "script exited with status 3");
        let exp = ExpectedError::new(["exited", "status 3"], "/opt/run", vec![])
            .with_type("application")
            .with_app_tag("exec-failed");
        assert!(exp.matches(&err));

        let wrong_path = ExpectedError::new(["exited"], "/opt", vec![]);
        assert!(!wrong_path.matches(&err));

        let wrong_tag = ExpectedError::new(["exited"], "/opt/run", vec![]).with_tag("in-use");
        assert!(!wrong_tag.matches(&err));
    }

    #[test]
    fn test_info_must_match() {
        let err = LockDeniedError::new("42");
        let exp = ExpectedError::new::<[&str; 0], &str>([], "", vec![InfoTag::local("session-id", "42")]);
        assert!(exp.matches(&err));

        let exp = ExpectedError::new::<[&str; 0], &str>([], "", vec![]);
        assert!(!exp.matches(&err));
    }

    #[test]
    fn test_check_errors() {
        let mut list = ErrorList::new();
        list.push(MustViolationError::new().with_path("/a"));
        list.push(InstanceRequiredError::new("/b"));

        let expected: Vec<ExpectedError> = list.iter().map(ExpectedError::like).collect();
        assert_eq!(check_errors(&expected, &list), Ok(()));

        let report = check_errors(&expected[..1], &list).unwrap_err();
        assert!(report.starts_with("Found unexpected error:"));
        assert!(report.contains("/b"));

        let mut short = ErrorList::new();
        short.push(MustViolationError::new().with_path("/a"));
        let report = check_errors(&expected, &short).unwrap_err();
        assert!(report.starts_with("Error not found:\nInstanceRequiredError"));
    }
}
