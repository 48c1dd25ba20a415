//! Typed errors
//!
//! Each catalog entry has a wrapper type owning one [`MgmtError`]. Wrappers
//! carry no state of their own; they exist so callers can match on the kind of
//! error, and so a few kinds can render themselves differently. [`TypedError`]
//! is the sum of all of them, plus [`TypedError::Generic`] for records no
//! catalog knows.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CatalogError;
use crate::format::Formattable;
use crate::info::ErrorInfo;
use crate::record::MgmtError;

/// Defines wrapper types around [`MgmtError`].
///
/// `message = f` replaces [`Formattable::message`] with
/// `f(&MgmtError) -> Cow<str>`, `display = f` replaces `Display` with
/// `f(&MgmtError, &mut Formatter) -> fmt::Result`.
macro_rules! typed_error {
    (@message $self:ident) => {
        ::std::borrow::Cow::Borrowed($self.0.message.as_str())
    };
    (@message $self:ident $message:path) => {
        $message(&$self.0)
    };
    (@display $self:ident $f:ident) => {
        ::std::fmt::Display::fmt(&$self.0, $f)
    };
    (@display $self:ident $f:ident $display:path) => {
        $display(&$self.0, $f)
    };
    ($(
        $(#[$meta:meta])*
        $variant:ident => $name:ident
        $(, message = $message:path)?
        $(, display = $display:path)?
        ;
    )+) => {$(
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name($crate::record::MgmtError);

        impl $name {
            // Catalog constructor; unused by wrappers sharing another's entry
            #[allow(dead_code)]
            pub(crate) fn wrap(record: $crate::record::MgmtError) -> $crate::typed::TypedError {
                $crate::typed::TypedError::$variant(Self(record))
            }

            /// Wrap a record as is, without consulting the catalogs
            pub fn from_record(record: $crate::record::MgmtError) -> Self {
                Self(record)
            }

            pub fn record(&self) -> &$crate::record::MgmtError {
                &self.0
            }

            pub fn into_record(self) -> $crate::record::MgmtError {
                self.0
            }

            pub(crate) fn record_mut(&mut self) -> &mut $crate::record::MgmtError {
                &mut self.0
            }

            pub fn set_path(&mut self, path: impl Into<String>) {
                self.0.set_path(path);
            }

            pub fn set_message(&mut self, message: impl Into<String>) {
                self.0.set_message(message);
            }

            pub fn with_path(mut self, path: impl Into<String>) -> Self {
                self.set_path(path);
                self
            }

            pub fn with_message(mut self, message: impl Into<String>) -> Self {
                self.set_message(message);
                self
            }

            pub fn bus_error(&self) -> $crate::bus::BusError<'_> {
                self.0.bus_error()
            }
        }

        impl $crate::format::Formattable for $name {
            fn message(&self) -> ::std::borrow::Cow<'_, str> {
                typed_error!(@message self $($message)?)
            }

            fn path(&self) -> &str {
                &self.0.path
            }

            fn severity(&self) -> &str {
                &self.0.severity
            }

            fn tag(&self) -> &str {
                &self.0.tag
            }

            fn app_tag(&self) -> &str {
                &self.0.app_tag
            }

            fn error_type(&self) -> &str {
                &self.0.error_type
            }

            fn info(&self) -> &$crate::info::ErrorInfo {
                &self.0.info
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                typed_error!(@display self f $($display)?)
            }
        }

        impl ::std::error::Error for $name {}

        impl From<$name> for $crate::record::MgmtError {
            fn from(err: $name) -> Self {
                err.0
            }
        }

        impl From<$name> for $crate::typed::TypedError {
            fn from(err: $name) -> Self {
                $crate::typed::TypedError::$variant(err)
            }
        }

        impl $crate::xml::ToXml for $name {
            fn write_xml<W: ::std::io::Write>(
                &self,
                writer: &mut ::quick_xml::Writer<W>,
            ) -> $crate::error::Result<()> {
                $crate::xml::ToXml::write_xml(&self.0, writer)
            }
        }

        impl $crate::xml::FromXml for $name {
            fn from_xml(xml: &str) -> $crate::error::Result<Self> {
                <$crate::record::MgmtError as $crate::xml::FromXml>::from_xml(xml).map(Self)
            }
        }
    )+};
}

mod netconf;
mod vendor;
mod yang;

pub use netconf::*;
pub use vendor::*;
pub use yang::*;

/// Unwrap a record built from the static catalogs.
///
/// # Panics
///
/// Panics if the catalogs do not hold the entry a constructor asks for. That
/// is a defect in the catalog tables, never a property of runtime input.
pub(crate) fn catalog_record(result: Result<MgmtError, CatalogError>) -> MgmtError {
    match result {
        Ok(record) => record,
        Err(err) => panic!("error catalog defect: {err}"),
    }
}

macro_rules! typed_errors {
    ($($variant:ident($name:ident),)+) => {
        /// Any management error, typed when a catalog recognises it
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum TypedError {
            $($variant($name),)+
            /// Record that no catalog entry matches
            Generic(MgmtError),
        }

        impl TypedError {
            pub fn record(&self) -> &MgmtError {
                match self {
                    $(TypedError::$variant(err) => err.record(),)+
                    TypedError::Generic(record) => record,
                }
            }

            pub fn into_record(self) -> MgmtError {
                match self {
                    $(TypedError::$variant(err) => err.into_record(),)+
                    TypedError::Generic(record) => record,
                }
            }

            fn record_mut(&mut self) -> &mut MgmtError {
                match self {
                    $(TypedError::$variant(err) => err.record_mut(),)+
                    TypedError::Generic(record) => record,
                }
            }

            /// Name of the wrapper type, `MgmtError` for generic records
            pub fn kind(&self) -> &'static str {
                match self {
                    $(TypedError::$variant(_) => stringify!($name),)+
                    TypedError::Generic(_) => "MgmtError",
                }
            }

            fn as_formattable(&self) -> &dyn Formattable {
                match self {
                    $(TypedError::$variant(err) => err,)+
                    TypedError::Generic(record) => record,
                }
            }
        }

        impl fmt::Display for TypedError {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $(TypedError::$variant(err) => fmt::Display::fmt(err, f),)+
                    TypedError::Generic(record) => fmt::Display::fmt(record, f),
                }
            }
        }
    };
}

typed_errors! {
    InUseProtocol(InUseProtocolError),
    InUseApplication(InUseApplicationError),
    InvalidValueProtocol(InvalidValueProtocolError),
    InvalidValueApplication(InvalidValueApplicationError),
    TooBigTransport(TooBigTransportError),
    TooBigRpc(TooBigRpcError),
    TooBigProtocol(TooBigProtocolError),
    TooBigApplication(TooBigApplicationError),
    MissingAttrRpc(MissingAttrRpcError),
    MissingAttrProtocol(MissingAttrProtocolError),
    MissingAttrApplication(MissingAttrApplicationError),
    BadAttrRpc(BadAttrRpcError),
    BadAttrProtocol(BadAttrProtocolError),
    BadAttrApplication(BadAttrApplicationError),
    UnknownAttrRpc(UnknownAttrRpcError),
    UnknownAttrProtocol(UnknownAttrProtocolError),
    UnknownAttrApplication(UnknownAttrApplicationError),
    MissingElementProtocol(MissingElementProtocolError),
    MissingElementApplication(MissingElementApplicationError),
    BadElementProtocol(BadElementProtocolError),
    BadElementApplication(BadElementApplicationError),
    UnknownElementProtocol(UnknownElementProtocolError),
    UnknownElementApplication(UnknownElementApplicationError),
    UnknownNamespaceProtocol(UnknownNamespaceProtocolError),
    UnknownNamespaceApplication(UnknownNamespaceApplicationError),
    AccessDeniedProtocol(AccessDeniedProtocolError),
    AccessDeniedApplication(AccessDeniedApplicationError),
    LockDenied(LockDeniedError),
    ResourceDeniedTransport(ResourceDeniedTransportError),
    ResourceDeniedRpc(ResourceDeniedRpcError),
    ResourceDeniedProtocol(ResourceDeniedProtocolError),
    ResourceDeniedApplication(ResourceDeniedApplicationError),
    RollbackFailedProtocol(RollbackFailedProtocolError),
    RollbackFailedApplication(RollbackFailedApplicationError),
    DataExists(DataExistsError),
    DataMissing(DataMissingError),
    OperationNotSupportedProtocol(OperationNotSupportedProtocolError),
    OperationNotSupportedApplication(OperationNotSupportedApplicationError),
    OperationFailedRpc(OperationFailedRpcError),
    OperationFailedProtocol(OperationFailedProtocolError),
    OperationFailedApplication(OperationFailedApplicationError),
    MalformedMessage(MalformedMessageError),
    NonUnique(NonUniqueError),
    TooManyElements(TooManyElementsError),
    TooFewElements(TooFewElementsError),
    MustViolation(MustViolationError),
    InstanceRequired(InstanceRequiredError),
    LeafrefMismatch(LeafrefMismatchError),
    MissingChoice(MissingChoiceError),
    InsertFailed(InsertFailedError),
    Exec(ExecError),
    PathAmbiguous(PathAmbiguousError),
}

impl TypedError {
    pub fn is_generic(&self) -> bool {
        matches!(self, TypedError::Generic(_))
    }

    pub fn set_path(&mut self, path: impl Into<String>) {
        self.record_mut().set_path(path);
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.record_mut().set_message(message);
    }
}

/// Records convert as they are; see [`MgmtError::classify`] to recover the
/// typed error instead.
impl From<MgmtError> for TypedError {
    fn from(record: MgmtError) -> Self {
        TypedError::Generic(record)
    }
}

impl From<TypedError> for MgmtError {
    fn from(err: TypedError) -> Self {
        err.into_record()
    }
}

impl Formattable for TypedError {
    fn message(&self) -> Cow<'_, str> {
        self.as_formattable().message()
    }

    fn path(&self) -> &str {
        &self.record().path
    }

    fn severity(&self) -> &str {
        &self.record().severity
    }

    fn tag(&self) -> &str {
        &self.record().tag
    }

    fn app_tag(&self) -> &str {
        &self.record().app_tag
    }

    fn error_type(&self) -> &str {
        &self.record().error_type
    }

    fn info(&self) -> &ErrorInfo {
        &self.record().info
    }
}

impl std::error::Error for TypedError {}

impl Serialize for TypedError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.record().serialize(serializer)
    }
}

/// Decoding reclassifies the record with the built-in catalogs
impl<'de> Deserialize<'de> for TypedError {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        MgmtError::deserialize(deserializer).map(MgmtError::classify)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind() {
        assert_eq!(TypedError::from(DataExistsError::new()).kind(), "DataExistsError");
        assert_eq!(TypedError::from(MgmtError::default()).kind(), "MgmtError");
    }

    #[test]
    fn test_set_path_on_typed_error() {
        let mut err = TypedError::from(AccessDeniedApplicationError::new());
        err.set_path("/system/login");
        assert_eq!(err.path(), "/system/login");
        assert_eq!(
            err.to_string(),
            format!("Error: /system/login: {}", crate::catalog::netconf::MSG_ACCESS_DENIED)
        );
    }

    #[test]
    fn test_json_decode_reclassifies() {
        let json = serde_json::to_string(&TooManyElementsError::new("/a/b")).unwrap();
        let err: TypedError = serde_json::from_str(&json).unwrap();
        assert!(matches!(err, TypedError::TooManyElements(_)));
        assert_eq!(err.path(), "/a/b");
    }

    #[test]
    fn test_from_record_is_generic() {
        let record = DataMissingError::new().into_record();
        assert!(TypedError::from(record.clone()).is_generic());
        assert!(matches!(record.classify(), TypedError::DataMissing(_)));
    }

    #[test]
    #[should_panic(expected = "error catalog defect")]
    fn test_catalog_record_panics_on_defect() {
        catalog_record(Err(CatalogError::InvalidTag("bogus".into())));
    }
}
