//! Error layer and severity vocabulary, plus the namespaces errors live in

use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;

/// RFC6241 section 3.1 base namespace, the namespace of every `rpc-error`
pub const NETCONF_NAMESPACE: &str = "urn:ietf:params:xml:ns:netconf:base:1.0";
/// Module name used for [`NETCONF_NAMESPACE`] in JSON
pub const NETCONF_MODULE: &str = "ietf-netconf";

/// RFC6020 section 5.3.1 YANG namespace
pub const YANG_NAMESPACE: &str = "urn:ietf:params:xml:ns:yang:1";
/// There is no YANG module for [`YANG_NAMESPACE`]; this name stands in for it
pub const YANG_MODULE: &str = "ietf-yang";

/// Namespace of the vendor error dialect
pub const VENDOR_NAMESPACE: &str = "urn:vyatta.com:mgmt:error:1";
/// Module name used for [`VENDOR_NAMESPACE`] in JSON
pub const VENDOR_MODULE: &str = "vyatta-yang";

/// RFC7951 section 4 identifies JSON members by module name rather than
/// namespace. Only the namespaces errors are defined in are known here.
const MODULE_NAMESPACES: [(&str, &str); 3] = [
    (NETCONF_MODULE, NETCONF_NAMESPACE),
    (YANG_MODULE, YANG_NAMESPACE),
    (VENDOR_MODULE, VENDOR_NAMESPACE),
];

/// Module name for a namespace, or the namespace itself when unknown
pub fn module_for_namespace(namespace: &str) -> &str {
    MODULE_NAMESPACES
        .iter()
        .find(|(_, ns)| *ns == namespace)
        .map(|(module, _)| *module)
        .unwrap_or(namespace)
}

/// Namespace for a module name, or the module name itself when unknown
pub fn namespace_for_module(module: &str) -> &str {
    MODULE_NAMESPACES
        .iter()
        .find(|(m, _)| *m == module)
        .map(|(_, ns)| *ns)
        .unwrap_or(module)
}

/// Protocol layer at which an error occurred (RFC6241 section 4.3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ErrorType {
    /// Secure Transport
    Transport,
    /// Messages
    Rpc,
    /// Operations
    Protocol,
    /// Content
    Application,
}

impl ErrorType {
    pub const ALL: [ErrorType; 4] = [
        ErrorType::Transport,
        ErrorType::Rpc,
        ErrorType::Protocol,
        ErrorType::Application,
    ];

    /// Wire name of the layer
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorType::Transport => "transport",
            ErrorType::Rpc => "rpc",
            ErrorType::Protocol => "protocol",
            ErrorType::Application => "application",
        }
    }

    /// Parse a wire name, `None` when it names no layer
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "transport" => Some(ErrorType::Transport),
            "rpc" => Some(ErrorType::Rpc),
            "protocol" => Some(ErrorType::Protocol),
            "application" => Some(ErrorType::Application),
            _ => None,
        }
    }
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorType {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_wire(s).ok_or_else(|| CatalogError::InvalidType(s.to_string()))
    }
}

/// Error severity (RFC6241 section 4.3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_type_from_str() {
        assert_eq!("rpc".parse::<ErrorType>(), Ok(ErrorType::Rpc));
        assert_eq!(
            "application".parse::<ErrorType>(),
            Ok(ErrorType::Application)
        );
        assert_eq!(
            "session".parse::<ErrorType>(),
            Err(CatalogError::InvalidType("session".into()))
        );
    }

    #[test]
    fn test_error_type_names() {
        for typ in ErrorType::ALL {
            assert_eq!(ErrorType::from_wire(typ.as_str()), Some(typ));
        }
    }

    #[test]
    fn test_module_namespace_mapping() {
        assert_eq!(module_for_namespace(YANG_NAMESPACE), "ietf-yang");
        assert_eq!(namespace_for_module("vyatta-yang"), VENDOR_NAMESPACE);
        assert_eq!(module_for_namespace("urn:example"), "urn:example");
        assert_eq!(namespace_for_module("example-mod"), "example-mod");
    }
}
