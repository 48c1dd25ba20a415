//! Error types for rust-mgmterror
//!
//! These describe failures of the library itself (building a record from an
//! unknown tag, decoding a malformed payload), not the management errors it
//! models.

use thiserror::Error;

/// Failure to build a management error from the catalogs
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The tag is not part of the catalog being consulted
    #[error("invalid error tag: {0}")]
    InvalidTag(String),

    /// The type is not one of transport, rpc, protocol or application
    #[error("invalid error type: {0}")]
    InvalidType(String),

    /// The tag exists but may not be reported at this layer
    #[error("invalid error type {error_type} for tag {tag}")]
    InvalidTagForType { tag: String, error_type: String },

    /// The app-tag is not defined for the tag
    #[error("invalid error app tag {app_tag} for tag {tag}")]
    InvalidAppTag { tag: String, app_tag: String },
}

/// Failure to encode or decode a management error
#[derive(Debug, Error)]
pub enum CodecError {
    /// JSON parsing/serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// XML reader or writer error
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Attribute parsing error
    #[error("XML attribute error: {0}")]
    XmlAttr(#[from] quick_xml::events::attributes::AttrError),

    /// Invalid character or entity reference in XML text
    #[error("XML escape error: {0}")]
    XmlEscape(#[from] quick_xml::escape::EscapeError),

    /// IO error raised by an XML sink
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoded output is not valid UTF-8
    #[error("invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Element name or attribute is not valid UTF-8
    #[error("invalid UTF-8 name: {0}")]
    Utf8Name(#[from] std::str::Utf8Error),

    /// An error-info entry does not have the expected shape
    #[error("malformed error-info tag: {0}")]
    MalformedInfoTag(String),

    /// The document root is not the expected element
    #[error("unexpected element <{found}>, expected <{expected}>")]
    UnexpectedElement {
        expected: &'static str,
        found: String,
    },

    /// The document ended before the expected element was found
    #[error("missing <{0}> element")]
    MissingElement(&'static str),

    /// The document ended inside an element
    #[error("unexpected end of document inside <{0}>")]
    UnexpectedEof(&'static str),
}

/// Result type alias for codec operations
pub type Result<T, E = CodecError> = std::result::Result<T, E>;
