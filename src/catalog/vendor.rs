//! Vendor error dialect, layered on `operation-failed` like the YANG errors

use super::{AppTagCatalog, AppTagEntry};
use crate::typed::{ExecError, PathAmbiguousError};
use crate::types::Severity;

vocabulary! {
    pub enum VendorTag {
        OperationFailed => "operation-failed",
    }
}

vocabulary! {
    pub enum VendorAppTag {
        /// A subtask (script, external command) failed
        ExecFailed => "exec-failed",
        /// A path abbreviation matched more than one node
        PathAmbiguous => "path-ambiguous",
    }
}

pub type VendorCatalog = AppTagCatalog<VendorTag, VendorAppTag>;

pub static VENDOR: VendorCatalog = AppTagCatalog::new(&[AppTagEntry {
    tag: VendorTag::OperationFailed,
    severity: Severity::Error,
    message: super::yang::MSG_OPERATION_FAILED,
    app_tags: &[
        (VendorAppTag::ExecFailed, ExecError::wrap),
        (VendorAppTag::PathAmbiguous, PathAmbiguousError::wrap),
    ],
}]);
