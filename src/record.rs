//! The Error Record
//!
//! [`MgmtError`] is the wire level `rpc-error`: every typed error owns exactly
//! one, and decoders produce one before it is reclassified.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::catalog::netconf::NETCONF;
use crate::catalog::vendor::VENDOR;
use crate::catalog::yang::YANG;
use crate::classify::Classifier;
use crate::error::CatalogError;
use crate::format::{Formattable, write_default};
use crate::info::ErrorInfo;
use crate::typed::TypedError;

/// An `rpc-error`
///
/// Fields hold wire strings as received. Nothing here is validated against the
/// catalogs; use [`Classifier`] to find out which catalog entry a record
/// belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MgmtError {
    #[serde(rename = "error-type")]
    pub error_type: String,

    #[serde(rename = "error-tag")]
    pub tag: String,

    #[serde(rename = "error-severity")]
    pub severity: String,

    #[serde(rename = "error-app-tag", skip_serializing_if = "String::is_empty")]
    pub app_tag: String,

    /// Absolute path of the node the error is about, empty when there is none
    #[serde(rename = "error-path", skip_serializing_if = "String::is_empty")]
    pub path: String,

    #[serde(rename = "error-message", skip_serializing_if = "String::is_empty")]
    pub message: String,

    #[serde(
        rename = "error-info",
        skip_serializing_if = "ErrorInfo::is_empty",
        deserialize_with = "null_as_empty"
    )]
    pub info: ErrorInfo,
}

/// Decode `null` as the empty value
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl MgmtError {
    /// Base protocol error from wire strings
    pub fn try_netconf(tag: &str, error_type: &str, info: ErrorInfo) -> Result<Self, CatalogError> {
        NETCONF.try_build(tag, error_type, info)
    }

    /// YANG error from wire strings
    pub fn try_yang(
        tag: &str,
        app_tag: &str,
        path: &str,
        info: ErrorInfo,
    ) -> Result<Self, CatalogError> {
        YANG.try_build(tag, app_tag, path, info)
    }

    /// Vendor error from wire strings
    pub fn try_vendor(
        tag: &str,
        app_tag: &str,
        path: &str,
        info: ErrorInfo,
    ) -> Result<Self, CatalogError> {
        VENDOR.try_build(tag, app_tag, path, info)
    }

    pub fn set_path(&mut self, path: impl Into<String>) {
        self.path = path.into();
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.set_path(path);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.set_message(message);
        self
    }

    /// Recover the typed error using the built-in catalogs
    pub fn classify(self) -> TypedError {
        Classifier::standard().classify(self)
    }
}

impl Formattable for MgmtError {
    fn message(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.message)
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn severity(&self) -> &str {
        &self.severity
    }

    fn tag(&self) -> &str {
        &self.tag
    }

    fn app_tag(&self) -> &str {
        &self.app_tag
    }

    fn error_type(&self) -> &str {
        &self.error_type
    }

    fn info(&self) -> &ErrorInfo {
        &self.info
    }
}

impl fmt::Display for MgmtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_default(f, &self.severity, &self.path, &self.message)
    }
}

impl std::error::Error for MgmtError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::info::InfoTag;

    fn sample() -> MgmtError {
        MgmtError {
            error_type: "application".into(),
            tag: "operation-failed".into(),
            severity: "error".into(),
            message: "boom".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(sample().to_string(), "Error: boom");
        assert_eq!(sample().with_path("/a/b").to_string(), "Error: /a/b: boom");

        let mut warning = sample();
        warning.severity = "warning".into();
        warning.set_message("");
        assert_eq!(warning.to_string(), "Warning: ");
    }

    #[test]
    fn test_json_omits_empty_optional_fields() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(
            json,
            r#"{"error-type":"application","error-tag":"operation-failed","error-severity":"error","error-message":"boom"}"#
        );
    }

    #[test]
    fn test_json_field_order_and_info() {
        let mut record = sample().with_path("/x");
        record.app_tag = "must-violation".into();
        record.info.push(InfoTag::local("bad-element", "y"));

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"error-type":"application","error-tag":"operation-failed","error-severity":"error","error-app-tag":"must-violation","error-path":"/x","error-message":"boom","error-info":[{"bad-element":"y"}]}"#
        );
        assert_eq!(serde_json::from_str::<MgmtError>(&json).unwrap(), record);
    }

    #[test]
    fn test_decode_accepts_missing_fields() {
        let record: MgmtError = serde_json::from_str(r#"{"error-tag":"in-use"}"#).unwrap();
        assert_eq!(record.tag, "in-use");
        assert!(record.error_type.is_empty());
        assert!(record.info.is_empty());
    }

    #[test]
    fn test_decode_null_info() {
        let record: MgmtError =
            serde_json::from_str(r#"{"error-tag":"in-use","error-info":null}"#).unwrap();
        assert_eq!(record.tag, "in-use");
        assert!(record.info.is_empty());
    }

    #[test]
    fn test_try_constructors() {
        let record = MgmtError::try_netconf("lock-denied", "protocol", ErrorInfo::new()).unwrap();
        assert_eq!(record.severity, "error");

        let record =
            MgmtError::try_vendor("operation-failed", "exec-failed", "/p", ErrorInfo::new())
                .unwrap();
        assert_eq!(record.app_tag, "exec-failed");

        assert_eq!(
            MgmtError::try_yang("operation-failed", "exec-failed", "", ErrorInfo::new()),
            Err(CatalogError::InvalidAppTag {
                tag: "operation-failed".into(),
                app_tag: "exec-failed".into(),
            })
        );
    }
}
