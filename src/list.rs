//! Error-List Aggregator
//!
//! Collects errors of any origin into one reportable value. Every member is a
//! [`TypedError`], so everything in a list can be encoded: errors that are
//! not management errors are wrapped in an `operation-failed` application
//! error on the way in.
//!
//! On the wire a list is `{"error-list": [...]}` in JSON but a bare sequence
//! of sibling `rpc-error` elements in XML.

use std::fmt;
use std::io::Write;

use quick_xml::Writer;
use serde::{Deserialize, Serialize};

use crate::classify::Classifier;
use crate::error::Result;
use crate::format::Formattable;
use crate::record::{MgmtError, null_as_empty};
use crate::typed::{OperationFailedApplicationError, TypedError};
use crate::xml::{self, FromXml, ToXml};

/// Renders one member of a list
pub type Formatter<'a> = &'a dyn Fn(&TypedError) -> String;

/// Ordered list of management errors
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorList {
    #[serde(rename = "error-list", default, deserialize_with = "null_as_empty")]
    errors: Vec<TypedError>,
}

#[derive(Deserialize)]
struct RawList {
    #[serde(rename = "error-list", default, deserialize_with = "null_as_empty")]
    errors: Vec<MgmtError>,
}

impl ErrorList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a management error as is
    pub fn push(&mut self, err: impl Into<TypedError>) {
        self.errors.push(err.into());
    }

    /// Append a foreign error that exposes management error fields. Only its
    /// message and path are kept.
    pub fn push_formattable<F: Formattable + ?Sized>(&mut self, err: &F) {
        let wrapped = OperationFailedApplicationError::new()
            .with_message(err.message())
            .with_path(err.path());
        self.errors.push(wrapped.into());
    }

    /// Append any other error, using its text as the message
    pub fn push_error<E: std::error::Error + ?Sized>(&mut self, err: &E) {
        let wrapped = OperationFailedApplicationError::new().with_message(err.to_string());
        self.errors.push(wrapped.into());
    }

    pub fn errors(&self) -> &[TypedError] {
        &self.errors
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TypedError> {
        self.errors.iter()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// One line per member, rendered by `formatter` or by `Display` when
    /// there is none
    pub fn format_with(&self, formatter: Option<Formatter<'_>>) -> String {
        let lines: Vec<String> = match formatter {
            Some(format) => self.errors.iter().map(format).collect(),
            None => self.errors.iter().map(ToString::to_string).collect(),
        };
        lines.join("\n")
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode and classify each member with the built-in catalogs
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_json_with(json, &Classifier::standard())
    }

    pub fn from_json_with(json: &str, classifier: &Classifier<'_>) -> Result<Self> {
        let raw: RawList = serde_json::from_str(json)?;
        Ok(raw
            .errors
            .into_iter()
            .map(|record| classifier.classify(record))
            .collect())
    }

    /// Decode every `rpc-error` in `xml`, at any depth, classifying each with
    /// `classifier`
    pub fn from_xml_with(xml: &str, classifier: &Classifier<'_>) -> Result<Self> {
        Ok(Self {
            errors: xml::read_all(xml, classifier)?,
        })
    }
}

impl fmt::Display for ErrorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            fmt::Display::fmt(err, f)?;
        }
        Ok(())
    }
}

impl std::error::Error for ErrorList {}

impl ToXml for ErrorList {
    fn write_xml<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        for err in &self.errors {
            err.write_xml(writer)?;
        }
        Ok(())
    }
}

impl FromXml for ErrorList {
    fn from_xml(xml: &str) -> Result<Self> {
        Self::from_xml_with(xml, &Classifier::standard())
    }
}

impl From<Vec<TypedError>> for ErrorList {
    fn from(errors: Vec<TypedError>) -> Self {
        Self { errors }
    }
}

impl<E: Into<TypedError>> Extend<E> for ErrorList {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.errors.extend(iter.into_iter().map(Into::into));
    }
}

impl<E: Into<TypedError>> FromIterator<E> for ErrorList {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl IntoIterator for ErrorList {
    type Item = TypedError;
    type IntoIter = std::vec::IntoIter<TypedError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ErrorList {
    type Item = &'a TypedError;
    type IntoIter = std::slice::Iter<'a, TypedError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::netconf::MSG_DATA_EXISTS;
    use crate::typed::{DataExistsError, ExecError, MustViolationError};

    #[test]
    fn test_display_joins_lines() {
        let mut list = ErrorList::new();
        list.push(DataExistsError::new().with_path("/a"));
        list.push(ExecError::new(&["bin", "ls"], "no such file"));
        assert_eq!(
            list.to_string(),
            format!("Error: /a: {MSG_DATA_EXISTS}\nError: /bin/ls: no such file")
        );
        assert_eq!(ErrorList::new().to_string(), "");
    }

    #[test]
    fn test_format_with() {
        let list: ErrorList = vec![
            TypedError::from(MustViolationError::new()),
            TypedError::from(DataExistsError::new()),
        ]
        .into();
        let tags = |err: &TypedError| err.tag().to_string();
        assert_eq!(list.format_with(Some(&tags)), "operation-failed\ndata-exists");
        assert_eq!(list.format_with(None), list.to_string());
    }

    #[test]
    fn test_push_error_wraps_as_operation_failed() {
        let io = std::io::Error::other("disk on fire");
        let mut list = ErrorList::new();
        list.push_error(&io);

        let err = &list.errors()[0];
        assert!(matches!(err, TypedError::OperationFailedApplication(_)));
        assert_eq!(err.message(), "disk on fire");
        assert_eq!(err.path(), "");
    }

    #[test]
    fn test_empty_list_json() {
        assert_eq!(ErrorList::new().to_json().unwrap(), r#"{"error-list":[]}"#);
        assert!(ErrorList::from_json("{}").unwrap().is_empty());
    }

    #[test]
    fn test_null_list_json() {
        let json = r#"{"error-list":null}"#;
        assert!(ErrorList::from_json(json).unwrap().is_empty());
        assert!(serde_json::from_str::<ErrorList>(json).unwrap().is_empty());
    }
}
