//! YANG error wrappers (RFC6020 section 13)

use std::fmt;

use super::catalog_record;
use crate::catalog::Vocabulary;
use crate::catalog::yang::{YANG, YangAppTag, YangInfo, YangTag};
use crate::format::{FIELD_SEPARATOR, title, write_default};
use crate::info::{ErrorInfo, InfoTag};
use crate::record::MgmtError;
use crate::types::YANG_NAMESPACE;

fn yang_record(tag: YangTag, app_tag: YangAppTag, path: String, info: ErrorInfo) -> MgmtError {
    catalog_record(YANG.build(tag, app_tag, &path, info))
}

// `Error: <path>: Non-unique paths a/b, c/d` with each path relative to the
// list. Needs at least two paths to say anything useful.
fn non_unique_display(e: &MgmtError, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if e.info.len() < 2 {
        return write_default(f, &e.severity, &e.path, &e.message);
    }

    f.write_str(&title(&e.severity))?;
    f.write_str(FIELD_SEPARATOR)?;
    if !e.path.is_empty() {
        f.write_str(&e.path)?;
        f.write_str(FIELD_SEPARATOR)?;
    }
    f.write_str("Non-unique paths ")?;

    let prefix = format!("{}/", e.path);
    for (i, tag) in e.info.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        f.write_str(tag.value.strip_prefix(&prefix).unwrap_or(&tag.value))?;
    }
    Ok(())
}

typed_error! {
    /// Data violates a `unique` statement (13.1)
    NonUnique => NonUniqueError, display = non_unique_display;

    /// A list or leaf-list has too many entries (13.2)
    TooManyElements => TooManyElementsError;

    /// A list or leaf-list has too few entries (13.3)
    TooFewElements => TooFewElementsError;

    /// Data violates a `must` statement (13.4)
    MustViolation => MustViolationError;

    /// An instance-identifier with `require-instance true` points nowhere
    /// (13.5)
    InstanceRequired => InstanceRequiredError;

    /// A leafref points to a non-existing instance (13.6). Shares the
    /// instance-required catalog entry, so it decodes as
    /// [`InstanceRequiredError`].
    LeafrefMismatch => LeafrefMismatchError;

    /// No node exists in a mandatory choice (13.7)
    MissingChoice => MissingChoiceError;

    /// The "key" or "value" of an insert refers to a non-existing instance
    /// (13.8)
    InsertFailed => InsertFailedError;
}

impl NonUniqueError {
    /// One `non-unique` entry per leaf that breaks the constraint. Set the
    /// path of the list afterwards so the paths render relative to it.
    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let info = paths
            .into_iter()
            .map(|p| InfoTag::new(YANG_NAMESPACE, YangInfo::NonUnique.as_str(), p))
            .collect();
        Self(yang_record(
            YangTag::OperationFailed,
            YangAppTag::DataNotUnique,
            String::new(),
            info,
        ))
    }
}

impl TooManyElementsError {
    /// `path` identifies the list node
    pub fn new(path: impl Into<String>) -> Self {
        Self(yang_record(
            YangTag::OperationFailed,
            YangAppTag::TooManyElements,
            path.into(),
            ErrorInfo::new(),
        ))
    }
}

impl TooFewElementsError {
    /// `path` identifies the list node
    pub fn new(path: impl Into<String>) -> Self {
        Self(yang_record(
            YangTag::OperationFailed,
            YangAppTag::TooFewElements,
            path.into(),
            ErrorInfo::new(),
        ))
    }
}

impl MustViolationError {
    pub fn new() -> Self {
        Self(yang_record(
            YangTag::OperationFailed,
            YangAppTag::MustViolation,
            String::new(),
            ErrorInfo::new(),
        ))
    }
}

impl Default for MustViolationError {
    fn default() -> Self {
        Self::new()
    }
}

impl InstanceRequiredError {
    /// `path` identifies the instance-identifier leaf
    pub fn new(path: impl Into<String>) -> Self {
        Self(yang_record(
            YangTag::DataMissing,
            YangAppTag::InstanceRequired,
            path.into(),
            ErrorInfo::new(),
        ))
    }
}

impl LeafrefMismatchError {
    /// `path` identifies the leafref leaf. The rpc-error has no field for the
    /// referenced path, so `_referenced_path` is not kept.
    pub fn new(path: impl Into<String>, _referenced_path: impl Into<String>) -> Self {
        Self(yang_record(
            YangTag::DataMissing,
            YangAppTag::InstanceRequired,
            path.into(),
            ErrorInfo::new(),
        ))
    }
}

impl MissingChoiceError {
    /// `path` identifies the parent of the choice, `name` the choice
    pub fn new(path: impl Into<String>, name: impl Into<String>) -> Self {
        let info = vec![InfoTag::new(
            YANG_NAMESPACE,
            YangInfo::MissingChoice.as_str(),
            name,
        )]
        .into();
        Self(yang_record(
            YangTag::DataMissing,
            YangAppTag::MissingChoice,
            path.into(),
            info,
        ))
    }
}

impl InsertFailedError {
    pub fn new() -> Self {
        Self(yang_record(
            YangTag::BadAttribute,
            YangAppTag::MissingInstance,
            String::new(),
            ErrorInfo::new(),
        ))
    }
}

impl Default for InsertFailedError {
    fn default() -> Self {
        Self::new()
    }
}
