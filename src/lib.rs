//! rust-mgmterror - NETCONF and YANG management errors
//!
//! This library models the `rpc-error` of RFC6241 and the YANG errors of
//! RFC6020 section 13, plus a small vendor dialect layered on top of them.
//! Errors are built from fixed catalogs, encoded to XML or JSON (RFC7951), and
//! recovered as typed values from a generic record received off the wire.
//!
//! # Example
//!
//! ```
//! use rust_mgmterror::{Formattable, MgmtError, NonUniqueError, ToXml, TypedError};
//! use rust_mgmterror::FromXml;
//!
//! let err = NonUniqueError::new(["/c/l/a/b/c", "/c/l/a/d/c"]).with_path("/c/l");
//! assert_eq!(err.to_string(), "Error: /c/l: Non-unique paths a/b/c, a/d/c");
//!
//! // On the wire it is a plain rpc-error
//! let xml = err.to_xml().unwrap();
//! let record = MgmtError::from_xml(&xml).unwrap();
//! assert_eq!(record.app_tag, "data-not-unique");
//!
//! // Classification recovers the typed error
//! assert!(matches!(record.classify(), TypedError::NonUnique(_)));
//! ```

mod bus;
pub mod catalog;
mod classify;
mod error;
pub mod expect;
mod format;
mod info;
mod list;
pub mod path;
mod record;
pub mod typed;
mod types;
mod xml;

pub use bus::{BusArg, BusError, ERROR_LIST_NAME, RPC_ERROR_PREFIX};
pub use classify::Classifier;
pub use error::{CatalogError, CodecError, Result};
pub use format::{Formattable, natural_cmp};
pub use info::{ErrorInfo, InfoTag};
pub use list::{ErrorList, Formatter};
pub use record::MgmtError;
pub use typed::*;
pub use types::{
    ErrorType, NETCONF_MODULE, NETCONF_NAMESPACE, Severity, VENDOR_MODULE, VENDOR_NAMESPACE,
    YANG_MODULE, YANG_NAMESPACE, module_for_namespace, namespace_for_module,
};
pub use xml::{FromXml, ToXml, XmlIndent};
