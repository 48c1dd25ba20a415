//! Base protocol errors (RFC6241 Appendix A)

use super::{Constructor, Vocabulary};
use crate::error::CatalogError;
use crate::info::ErrorInfo;
use crate::record::MgmtError;
use crate::typed::*;
use crate::types::{ErrorType, Severity};

vocabulary! {
    /// RFC6241 Appendix A error tags. `partial-operation` is obsolete and
    /// never produced.
    pub enum NetconfTag {
        InUse => "in-use",
        InvalidValue => "invalid-value",
        TooBig => "too-big",
        MissingAttribute => "missing-attribute",
        BadAttribute => "bad-attribute",
        UnknownAttribute => "unknown-attribute",
        MissingElement => "missing-element",
        BadElement => "bad-element",
        UnknownElement => "unknown-element",
        UnknownNamespace => "unknown-namespace",
        AccessDenied => "access-denied",
        LockDenied => "lock-denied",
        ResourceDenied => "resource-denied",
        RollbackFailed => "rollback-failed",
        DataExists => "data-exists",
        DataMissing => "data-missing",
        OperationNotSupported => "operation-not-supported",
        OperationFailed => "operation-failed",
        /// New in :base:1.1, must not be sent to older clients
        MalformedMessage => "malformed-message",
    }
}

vocabulary! {
    /// Names of the `error-info` leaves defined by RFC6241 Appendix A
    pub enum NetconfInfo {
        BadAttribute => "bad-attribute",
        BadElement => "bad-element",
        BadNamespace => "bad-namespace",
        SessionId => "session-id",
    }
}

pub const MSG_IN_USE: &str = "The request requires a resource that already is in use.";
pub const MSG_INVALID_VALUE: &str =
    "The request specifies an unacceptable value for one or more parameters.";
pub const MSG_TOO_BIG: &str = "The request or response (that would be generated) is too large for the implementation to handle.";
pub const MSG_MISSING_ATTRIBUTE: &str = "An expected attribute is missing.";
pub const MSG_BAD_ATTRIBUTE: &str =
    "An attribute value is not correct; e.g., wrong type, out of range, pattern mismatch.";
pub const MSG_UNKNOWN_ATTRIBUTE: &str = "An unexpected attribute is present.";
pub const MSG_MISSING_ELEMENT: &str = "An expected element is missing.";
pub const MSG_BAD_ELEMENT: &str =
    "An element value is not correct; e.g., wrong type, out of range, pattern mismatch.";
pub const MSG_UNKNOWN_ELEMENT: &str = "An unexpected element is present.";
pub const MSG_UNKNOWN_NAMESPACE: &str = "An unexpected namespace is present.";
pub const MSG_ACCESS_DENIED: &str = "Access to the requested protocol operation or data model is denied because authorization failed.";
pub const MSG_LOCK_DENIED: &str = "Access to the requested lock is denied because the lock is currently held by another entity.";
pub const MSG_RESOURCE_DENIED: &str =
    "Request could not be completed because of insufficient resources.";
pub const MSG_ROLLBACK_FAILED: &str = "Request to roll back some configuration change (via rollback-on-error or <discard-changes> operations) was not completed for some reason.";
pub const MSG_DATA_EXISTS: &str = "Request could not be completed because the relevant data model content already exists.  For example, a \"create\" operation was attempted on data that already exists.";
pub const MSG_DATA_MISSING: &str = "Request could not be completed because the relevant data model content does not exist.  For example, a \"delete\" operation was attempted on data that does not exist.";
pub const MSG_OPERATION_NOT_SUPPORTED: &str = "Request could not be completed because the requested operation is not supported by this implementation.";
pub const MSG_OPERATION_FAILED: &str = "Request could not be completed because the requested operation failed for some reason not covered by any other error condition.";
pub const MSG_MALFORMED_MESSAGE: &str = "A message could not be handled because it failed to be parsed correctly.  For example, the message is not well-formed XML or it uses an invalid character set.";

/// Catalog entry for a base protocol tag
#[derive(Debug)]
pub struct NetconfEntry {
    pub tag: NetconfTag,
    pub severity: Severity,
    pub message: &'static str,
    /// Layers the tag may be reported at
    pub types: &'static [(ErrorType, Constructor)],
}

impl NetconfEntry {
    pub fn constructor(&self, typ: ErrorType) -> Option<Constructor> {
        self.types
            .iter()
            .find(|(t, _)| *t == typ)
            .map(|(_, ctor)| *ctor)
    }
}

/// Base protocol catalog, keyed by tag then error type
#[derive(Debug)]
pub struct NetconfCatalog {
    entries: &'static [NetconfEntry],
}

impl NetconfCatalog {
    pub const fn new(entries: &'static [NetconfEntry]) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &'static [NetconfEntry] {
        self.entries
    }

    pub fn entry(&self, tag: NetconfTag) -> Option<&'static NetconfEntry> {
        self.entries.iter().find(|e| e.tag == tag)
    }

    /// Constructor for a wire (tag, type) pair, if the tag is known and may
    /// be reported at that layer
    pub fn lookup(&self, tag: &str, typ: &str) -> Option<Constructor> {
        let entry = self.entry(NetconfTag::from_wire(tag)?)?;
        entry.constructor(ErrorType::from_wire(typ)?)
    }

    /// Build a record from the entry for `tag`, checking `typ` is legal for it
    pub fn build(
        &self,
        tag: NetconfTag,
        typ: ErrorType,
        info: ErrorInfo,
    ) -> Result<MgmtError, CatalogError> {
        let entry = self
            .entry(tag)
            .ok_or_else(|| CatalogError::InvalidTag(tag.as_str().to_string()))?;
        if entry.constructor(typ).is_none() {
            return Err(CatalogError::InvalidTagForType {
                tag: tag.as_str().to_string(),
                error_type: typ.as_str().to_string(),
            });
        }

        Ok(MgmtError {
            error_type: typ.as_str().to_string(),
            tag: tag.as_str().to_string(),
            severity: entry.severity.as_str().to_string(),
            message: entry.message.to_string(),
            info,
            ..Default::default()
        })
    }

    /// String keyed variant of [`NetconfCatalog::build`]
    pub fn try_build(
        &self,
        tag: &str,
        typ: &str,
        info: ErrorInfo,
    ) -> Result<MgmtError, CatalogError> {
        let tag_id =
            NetconfTag::from_wire(tag).ok_or_else(|| CatalogError::InvalidTag(tag.to_string()))?;
        let typ_id: ErrorType = typ.parse()?;
        self.build(tag_id, typ_id, info)
    }
}

const ERROR: Severity = Severity::Error;

use ErrorType::{Application, Protocol, Rpc, Transport};

pub static NETCONF: NetconfCatalog = NetconfCatalog::new(&[
    NetconfEntry {
        tag: NetconfTag::InUse,
        severity: ERROR,
        message: MSG_IN_USE,
        types: &[
            (Protocol, InUseProtocolError::wrap),
            (Application, InUseApplicationError::wrap),
        ],
    },
    NetconfEntry {
        tag: NetconfTag::InvalidValue,
        severity: ERROR,
        message: MSG_INVALID_VALUE,
        types: &[
            (Protocol, InvalidValueProtocolError::wrap),
            (Application, InvalidValueApplicationError::wrap),
        ],
    },
    NetconfEntry {
        tag: NetconfTag::TooBig,
        severity: ERROR,
        message: MSG_TOO_BIG,
        types: &[
            (Transport, TooBigTransportError::wrap),
            (Rpc, TooBigRpcError::wrap),
            (Protocol, TooBigProtocolError::wrap),
            (Application, TooBigApplicationError::wrap),
        ],
    },
    NetconfEntry {
        tag: NetconfTag::MissingAttribute,
        severity: ERROR,
        message: MSG_MISSING_ATTRIBUTE,
        types: &[
            (Rpc, MissingAttrRpcError::wrap),
            (Protocol, MissingAttrProtocolError::wrap),
            (Application, MissingAttrApplicationError::wrap),
        ],
    },
    NetconfEntry {
        tag: NetconfTag::BadAttribute,
        severity: ERROR,
        message: MSG_BAD_ATTRIBUTE,
        types: &[
            (Rpc, BadAttrRpcError::wrap),
            (Protocol, BadAttrProtocolError::wrap),
            (Application, BadAttrApplicationError::wrap),
        ],
    },
    NetconfEntry {
        tag: NetconfTag::UnknownAttribute,
        severity: ERROR,
        message: MSG_UNKNOWN_ATTRIBUTE,
        types: &[
            (Rpc, UnknownAttrRpcError::wrap),
            (Protocol, UnknownAttrProtocolError::wrap),
            (Application, UnknownAttrApplicationError::wrap),
        ],
    },
    NetconfEntry {
        tag: NetconfTag::MissingElement,
        severity: ERROR,
        message: MSG_MISSING_ELEMENT,
        types: &[
            (Protocol, MissingElementProtocolError::wrap),
            (Application, MissingElementApplicationError::wrap),
        ],
    },
    NetconfEntry {
        tag: NetconfTag::BadElement,
        severity: ERROR,
        message: MSG_BAD_ELEMENT,
        types: &[
            (Protocol, BadElementProtocolError::wrap),
            (Application, BadElementApplicationError::wrap),
        ],
    },
    NetconfEntry {
        tag: NetconfTag::UnknownElement,
        severity: ERROR,
        message: MSG_UNKNOWN_ELEMENT,
        types: &[
            (Protocol, UnknownElementProtocolError::wrap),
            (Application, UnknownElementApplicationError::wrap),
        ],
    },
    NetconfEntry {
        tag: NetconfTag::UnknownNamespace,
        severity: ERROR,
        message: MSG_UNKNOWN_NAMESPACE,
        types: &[
            (Protocol, UnknownNamespaceProtocolError::wrap),
            (Application, UnknownNamespaceApplicationError::wrap),
        ],
    },
    NetconfEntry {
        tag: NetconfTag::AccessDenied,
        severity: ERROR,
        message: MSG_ACCESS_DENIED,
        types: &[
            (Protocol, AccessDeniedProtocolError::wrap),
            (Application, AccessDeniedApplicationError::wrap),
        ],
    },
    NetconfEntry {
        tag: NetconfTag::LockDenied,
        severity: ERROR,
        message: MSG_LOCK_DENIED,
        types: &[(Protocol, LockDeniedError::wrap)],
    },
    NetconfEntry {
        tag: NetconfTag::ResourceDenied,
        severity: ERROR,
        message: MSG_RESOURCE_DENIED,
        types: &[
            (Transport, ResourceDeniedTransportError::wrap),
            (Rpc, ResourceDeniedRpcError::wrap),
            (Protocol, ResourceDeniedProtocolError::wrap),
            (Application, ResourceDeniedApplicationError::wrap),
        ],
    },
    NetconfEntry {
        tag: NetconfTag::RollbackFailed,
        severity: ERROR,
        message: MSG_ROLLBACK_FAILED,
        types: &[
            (Protocol, RollbackFailedProtocolError::wrap),
            (Application, RollbackFailedApplicationError::wrap),
        ],
    },
    NetconfEntry {
        tag: NetconfTag::DataExists,
        severity: ERROR,
        message: MSG_DATA_EXISTS,
        types: &[(Application, DataExistsError::wrap)],
    },
    NetconfEntry {
        tag: NetconfTag::DataMissing,
        severity: ERROR,
        message: MSG_DATA_MISSING,
        types: &[(Application, DataMissingError::wrap)],
    },
    NetconfEntry {
        tag: NetconfTag::OperationNotSupported,
        severity: ERROR,
        message: MSG_OPERATION_NOT_SUPPORTED,
        types: &[
            (Protocol, OperationNotSupportedProtocolError::wrap),
            (Application, OperationNotSupportedApplicationError::wrap),
        ],
    },
    NetconfEntry {
        tag: NetconfTag::OperationFailed,
        severity: ERROR,
        message: MSG_OPERATION_FAILED,
        types: &[
            (Rpc, OperationFailedRpcError::wrap),
            (Protocol, OperationFailedProtocolError::wrap),
            (Application, OperationFailedApplicationError::wrap),
        ],
    },
    NetconfEntry {
        tag: NetconfTag::MalformedMessage,
        severity: ERROR,
        message: MSG_MALFORMED_MESSAGE,
        types: &[(Rpc, MalformedMessageError::wrap)],
    },
]);
