//! Base protocol error wrappers (RFC6241 Appendix A)

use std::borrow::Cow;
use std::fmt;

use super::catalog_record;
use crate::catalog::Vocabulary;
use crate::catalog::netconf::{NETCONF, NetconfInfo, NetconfTag};
use crate::format::{FIELD_SEPARATOR, title, write_default};
use crate::info::{ErrorInfo, InfoTag};
use crate::path::{err_path, make_path};
use crate::record::MgmtError;
use crate::types::ErrorType;

fn netconf_record(tag: NetconfTag, typ: ErrorType, info: ErrorInfo) -> MgmtError {
    catalog_record(NETCONF.build(tag, typ, info))
}

fn info_leaf(name: NetconfInfo, value: String) -> InfoTag {
    InfoTag::local(name.as_str(), value)
}

fn attr_info(bad_attr: String, bad_elem: String) -> ErrorInfo {
    vec![
        info_leaf(NetconfInfo::BadAttribute, bad_attr),
        info_leaf(NetconfInfo::BadElement, bad_elem),
    ]
    .into()
}

fn elem_info(bad_elem: String) -> ErrorInfo {
    vec![info_leaf(NetconfInfo::BadElement, bad_elem)].into()
}

// `Error: <path>/<element>[: message]`
fn element_display(e: &MgmtError, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let Some(elem) = e.info.first() else {
        return write_default(f, &e.severity, &e.path, &e.message);
    };
    write!(f, "{}{}{}/{}", title(&e.severity), FIELD_SEPARATOR, e.path, elem.value)?;
    if !e.message.is_empty() {
        write!(f, "{}{}", FIELD_SEPARATOR, e.message)?;
    }
    Ok(())
}

fn unknown_element_message(e: &MgmtError) -> Cow<'_, str> {
    match e.info.first() {
        Some(elem) => {
            let path = make_path(&format!("{}/{}", e.path, elem.value));
            Cow::Owned(format!("{} is not valid", err_path(&path)))
        }
        None => Cow::Borrowed(&e.message),
    }
}

typed_error! {
    /// The request requires a resource that already is in use
    InUseProtocol => InUseProtocolError;
    InUseApplication => InUseApplicationError;

    /// The request specifies an unacceptable value for one or more parameters
    InvalidValueProtocol => InvalidValueProtocolError;
    InvalidValueApplication => InvalidValueApplicationError;

    /// The request or response is too large for the implementation to handle
    TooBigTransport => TooBigTransportError;
    TooBigRpc => TooBigRpcError;
    TooBigProtocol => TooBigProtocolError;
    TooBigApplication => TooBigApplicationError;

    /// An expected attribute is missing
    MissingAttrRpc => MissingAttrRpcError;
    MissingAttrProtocol => MissingAttrProtocolError;
    MissingAttrApplication => MissingAttrApplicationError;

    /// An attribute value is not correct
    BadAttrRpc => BadAttrRpcError;
    BadAttrProtocol => BadAttrProtocolError;
    BadAttrApplication => BadAttrApplicationError;

    /// An unexpected attribute is present
    UnknownAttrRpc => UnknownAttrRpcError;
    UnknownAttrProtocol => UnknownAttrProtocolError;
    UnknownAttrApplication => UnknownAttrApplicationError;

    /// An expected element is missing
    MissingElementProtocol => MissingElementProtocolError, display = element_display;
    MissingElementApplication => MissingElementApplicationError, display = element_display;

    /// An element value is not correct
    BadElementProtocol => BadElementProtocolError;
    BadElementApplication => BadElementApplicationError;

    /// An unexpected element is present. The message names the element the
    /// way the CLI shows paths, `interfaces [foo] is not valid`.
    UnknownElementProtocol => UnknownElementProtocolError,
        message = unknown_element_message, display = element_display;
    UnknownElementApplication => UnknownElementApplicationError,
        message = unknown_element_message, display = element_display;

    /// An unexpected namespace is present
    UnknownNamespaceProtocol => UnknownNamespaceProtocolError;
    UnknownNamespaceApplication => UnknownNamespaceApplicationError;

    /// Authorization failed
    AccessDeniedProtocol => AccessDeniedProtocolError;
    AccessDeniedApplication => AccessDeniedApplicationError;

    /// The lock is held by another entity
    LockDenied => LockDeniedError;

    /// Insufficient resources
    ResourceDeniedTransport => ResourceDeniedTransportError;
    ResourceDeniedRpc => ResourceDeniedRpcError;
    ResourceDeniedProtocol => ResourceDeniedProtocolError;
    ResourceDeniedApplication => ResourceDeniedApplicationError;

    /// A rollback was not completed
    RollbackFailedProtocol => RollbackFailedProtocolError;
    RollbackFailedApplication => RollbackFailedApplicationError;

    /// The data model content already exists
    DataExists => DataExistsError;

    /// The data model content does not exist
    DataMissing => DataMissingError;

    /// The requested operation is not supported by this implementation
    OperationNotSupportedProtocol => OperationNotSupportedProtocolError;
    OperationNotSupportedApplication => OperationNotSupportedApplicationError;

    /// Catch-all for failures not covered by any other tag
    OperationFailedRpc => OperationFailedRpcError;
    OperationFailedProtocol => OperationFailedProtocolError;
    OperationFailedApplication => OperationFailedApplicationError;

    /// The message could not be parsed. Only for :base:1.1 peers.
    MalformedMessage => MalformedMessageError;
}

/// Constructors for errors without `error-info`
macro_rules! plain_constructors {
    ($($name:ident: $tag:ident, $typ:ident;)+) => {$(
        impl $name {
            pub fn new() -> Self {
                Self(netconf_record(NetconfTag::$tag, ErrorType::$typ, ErrorInfo::new()))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }
    )+};
}

/// Constructors taking the offending attribute and its element
macro_rules! attr_constructors {
    ($($name:ident: $tag:ident, $typ:ident;)+) => {$(
        impl $name {
            pub fn new(bad_attr: impl Into<String>, bad_elem: impl Into<String>) -> Self {
                let info = attr_info(bad_attr.into(), bad_elem.into());
                Self(netconf_record(NetconfTag::$tag, ErrorType::$typ, info))
            }
        }
    )+};
}

/// Constructors taking the offending element
macro_rules! elem_constructors {
    ($($name:ident: $tag:ident, $typ:ident;)+) => {$(
        impl $name {
            pub fn new(bad_elem: impl Into<String>) -> Self {
                Self(netconf_record(NetconfTag::$tag, ErrorType::$typ, elem_info(bad_elem.into())))
            }
        }
    )+};
}

plain_constructors! {
    InUseProtocolError: InUse, Protocol;
    InUseApplicationError: InUse, Application;
    InvalidValueProtocolError: InvalidValue, Protocol;
    InvalidValueApplicationError: InvalidValue, Application;
    TooBigTransportError: TooBig, Transport;
    TooBigRpcError: TooBig, Rpc;
    TooBigProtocolError: TooBig, Protocol;
    TooBigApplicationError: TooBig, Application;
    AccessDeniedProtocolError: AccessDenied, Protocol;
    AccessDeniedApplicationError: AccessDenied, Application;
    ResourceDeniedTransportError: ResourceDenied, Transport;
    ResourceDeniedRpcError: ResourceDenied, Rpc;
    ResourceDeniedProtocolError: ResourceDenied, Protocol;
    ResourceDeniedApplicationError: ResourceDenied, Application;
    RollbackFailedProtocolError: RollbackFailed, Protocol;
    RollbackFailedApplicationError: RollbackFailed, Application;
    DataExistsError: DataExists, Application;
    DataMissingError: DataMissing, Application;
    OperationNotSupportedProtocolError: OperationNotSupported, Protocol;
    OperationNotSupportedApplicationError: OperationNotSupported, Application;
    OperationFailedRpcError: OperationFailed, Rpc;
    OperationFailedProtocolError: OperationFailed, Protocol;
    OperationFailedApplicationError: OperationFailed, Application;
    MalformedMessageError: MalformedMessage, Rpc;
}

attr_constructors! {
    MissingAttrRpcError: MissingAttribute, Rpc;
    MissingAttrProtocolError: MissingAttribute, Protocol;
    MissingAttrApplicationError: MissingAttribute, Application;
    BadAttrRpcError: BadAttribute, Rpc;
    BadAttrProtocolError: BadAttribute, Protocol;
    BadAttrApplicationError: BadAttribute, Application;
    UnknownAttrRpcError: UnknownAttribute, Rpc;
    UnknownAttrProtocolError: UnknownAttribute, Protocol;
    UnknownAttrApplicationError: UnknownAttribute, Application;
}

elem_constructors! {
    MissingElementProtocolError: MissingElement, Protocol;
    MissingElementApplicationError: MissingElement, Application;
    BadElementProtocolError: BadElement, Protocol;
    BadElementApplicationError: BadElement, Application;
    UnknownElementProtocolError: UnknownElement, Protocol;
    UnknownElementApplicationError: UnknownElement, Application;
}

impl UnknownNamespaceProtocolError {
    pub fn new(bad_elem: impl Into<String>, bad_ns: impl Into<String>) -> Self {
        Self(netconf_record(
            NetconfTag::UnknownNamespace,
            ErrorType::Protocol,
            namespace_info(bad_elem.into(), bad_ns.into()),
        ))
    }
}

impl UnknownNamespaceApplicationError {
    pub fn new(bad_elem: impl Into<String>, bad_ns: impl Into<String>) -> Self {
        Self(netconf_record(
            NetconfTag::UnknownNamespace,
            ErrorType::Application,
            namespace_info(bad_elem.into(), bad_ns.into()),
        ))
    }
}

fn namespace_info(bad_elem: String, bad_ns: String) -> ErrorInfo {
    vec![
        info_leaf(NetconfInfo::BadElement, bad_elem),
        info_leaf(NetconfInfo::BadNamespace, bad_ns),
    ]
    .into()
}

impl LockDeniedError {
    /// `session` is the id of the session holding the lock, or "0" when a
    /// non-NETCONF entity holds it
    pub fn new(session: impl Into<String>) -> Self {
        let info = vec![info_leaf(NetconfInfo::SessionId, session.into())].into();
        Self(netconf_record(NetconfTag::LockDenied, ErrorType::Protocol, info))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::netconf::{MSG_LOCK_DENIED, MSG_MISSING_ELEMENT, MSG_UNKNOWN_ELEMENT};
    use crate::format::Formattable;

    #[test]
    fn test_lock_denied() {
        let err = LockDeniedError::new("1234");
        assert_eq!(err.error_type(), "protocol");
        assert_eq!(err.tag(), "lock-denied");
        assert_eq!(err.message(), MSG_LOCK_DENIED);
        assert_eq!(err.info().as_slice(), &[InfoTag::local("session-id", "1234")]);
    }

    #[test]
    fn test_attr_info_order() {
        let err = BadAttrApplicationError::new("attr", "elem");
        assert_eq!(
            err.info().as_slice(),
            &[
                InfoTag::local("bad-attribute", "attr"),
                InfoTag::local("bad-element", "elem"),
            ]
        );
    }

    #[test]
    fn test_missing_element_display() {
        let err = MissingElementApplicationError::new("name").with_path("/interfaces");
        assert_eq!(
            err.to_string(),
            format!("Error: /interfaces/name: {MSG_MISSING_ELEMENT}")
        );

        let err = MissingElementProtocolError::new("name").with_message("");
        assert_eq!(err.to_string(), "Error: /name");
    }

    #[test]
    fn test_unknown_element() {
        let err = UnknownElementApplicationError::new("biz").with_path("/foo/bar");
        assert_eq!(
            err.to_string(),
            format!("Error: /foo/bar/biz: {MSG_UNKNOWN_ELEMENT}")
        );
        assert_eq!(err.message(), "foo bar [biz] is not valid");
        assert_eq!(err.record().message, MSG_UNKNOWN_ELEMENT);
    }

    #[test]
    fn test_element_overrides_without_info() {
        let mut record = UnknownElementProtocolError::new("x").into_record();
        record.info = ErrorInfo::new();
        let err = UnknownElementProtocolError::from_record(record.with_path("/a"));
        assert_eq!(err.message(), MSG_UNKNOWN_ELEMENT);
        assert_eq!(err.to_string(), format!("Error: /a: {MSG_UNKNOWN_ELEMENT}"));
    }

    #[test]
    fn test_unknown_namespace_info() {
        let err = UnknownNamespaceProtocolError::new("elem", "urn:bad");
        assert_eq!(err.info().find("", "bad-namespace"), Some("urn:bad"));
        assert_eq!(err.info().find("", "bad-element"), Some("elem"));
    }
}
