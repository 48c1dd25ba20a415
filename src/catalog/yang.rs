//! YANG errors (RFC6020 section 13)
//!
//! All of these reuse base protocol tags and are told apart by their app-tag.

use super::{AppTagCatalog, AppTagEntry};
use crate::typed::{
    InsertFailedError, InstanceRequiredError, MissingChoiceError, MustViolationError,
    NonUniqueError, TooFewElementsError, TooManyElementsError,
};
use crate::types::Severity;

vocabulary! {
    pub enum YangTag {
        OperationFailed => "operation-failed",
        DataMissing => "data-missing",
        BadAttribute => "bad-attribute",
    }
}

vocabulary! {
    pub enum YangAppTag {
        DataNotUnique => "data-not-unique",
        TooManyElements => "too-many-elements",
        TooFewElements => "too-few-elements",
        MustViolation => "must-violation",
        InstanceRequired => "instance-required",
        MissingChoice => "missing-choice",
        MissingInstance => "missing-instance",
    }
}

vocabulary! {
    /// `error-info` leaves in the YANG namespace
    pub enum YangInfo {
        NonUnique => "non-unique",
        MissingChoice => "missing-choice",
    }
}

pub const MSG_OPERATION_FAILED: &str = "The requested operation failed.";
pub const MSG_DATA_MISSING: &str = "Expected data is missing.";
pub const MSG_BAD_ATTRIBUTE: &str =
    "An attribute value is not correct; e.g., wrong type, out of range, pattern mismatch.";

pub type YangCatalog = AppTagCatalog<YangTag, YangAppTag>;

pub static YANG: YangCatalog = AppTagCatalog::new(&[
    AppTagEntry {
        tag: YangTag::OperationFailed,
        severity: Severity::Error,
        message: MSG_OPERATION_FAILED,
        app_tags: &[
            (YangAppTag::DataNotUnique, NonUniqueError::wrap),
            (YangAppTag::TooManyElements, TooManyElementsError::wrap),
            (YangAppTag::TooFewElements, TooFewElementsError::wrap),
            (YangAppTag::MustViolation, MustViolationError::wrap),
        ],
    },
    AppTagEntry {
        tag: YangTag::DataMissing,
        severity: Severity::Error,
        message: MSG_DATA_MISSING,
        app_tags: &[
            (YangAppTag::InstanceRequired, InstanceRequiredError::wrap),
            (YangAppTag::MissingChoice, MissingChoiceError::wrap),
        ],
    },
    AppTagEntry {
        tag: YangTag::BadAttribute,
        severity: Severity::Error,
        message: MSG_BAD_ATTRIBUTE,
        app_tags: &[(YangAppTag::MissingInstance, InsertFailedError::wrap)],
    },
]);
