//! Reverse Classifier
//!
//! Recovers the typed error a generic record represents. Catalogs are tried
//! most specific first: vendor, then YANG, then base protocol. The vendor and
//! YANG catalogs reuse base protocol tags and only differ by app-tag, so the
//! base protocol catalog has to come last or it would claim their records.

use tracing::{debug, trace};

use crate::catalog::Constructor;
use crate::catalog::netconf::{NETCONF, NetconfCatalog};
use crate::catalog::vendor::{VENDOR, VendorCatalog};
use crate::catalog::yang::{YANG, YangCatalog};
use crate::record::MgmtError;
use crate::typed::TypedError;

/// Lookup over one set of catalogs
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'a> {
    netconf: &'a NetconfCatalog,
    yang: &'a YangCatalog,
    vendor: &'a VendorCatalog,
}

impl Classifier<'static> {
    /// Classifier over the built-in catalogs
    pub fn standard() -> Self {
        Self::new(&NETCONF, &YANG, &VENDOR)
    }
}

impl Default for Classifier<'static> {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'a> Classifier<'a> {
    pub fn new(
        netconf: &'a NetconfCatalog,
        yang: &'a YangCatalog,
        vendor: &'a VendorCatalog,
    ) -> Self {
        Self {
            netconf,
            yang,
            vendor,
        }
    }

    /// Constructor for the most specific entry matching the wire strings.
    ///
    /// The YANG and vendor catalogs match on (tag, app-tag) and ignore the
    /// type. The base protocol catalog matches on (tag, type) and ignores the
    /// app-tag.
    pub fn lookup(&self, tag: &str, app_tag: &str, error_type: &str) -> Option<Constructor> {
        if let Some(ctor) = self.vendor.lookup(tag, app_tag) {
            return Some(ctor);
        }
        trace!(%tag, %app_tag, "not a vendor error");

        if let Some(ctor) = self.yang.lookup(tag, app_tag) {
            return Some(ctor);
        }
        trace!(%tag, %app_tag, "not a YANG error");

        self.netconf.lookup(tag, error_type)
    }

    /// Typed error for a copy of `record`, `None` when no catalog knows it
    pub fn recover(&self, record: &MgmtError) -> Option<TypedError> {
        self.lookup(&record.tag, &record.app_tag, &record.error_type)
            .map(|ctor| ctor(record.clone()))
    }

    /// Typed error for `record`, or [`TypedError::Generic`] when no catalog
    /// knows it
    pub fn classify(&self, record: MgmtError) -> TypedError {
        match self.lookup(&record.tag, &record.app_tag, &record.error_type) {
            Some(ctor) => ctor(record),
            None => {
                debug!(
                    tag = %record.tag,
                    app_tag = %record.app_tag,
                    error_type = %record.error_type,
                    "unclassified error"
                );
                TypedError::Generic(record)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typed::{
        ExecError, MustViolationError, OperationFailedApplicationError, TooBigTransportError,
    };

    fn record(tag: &str, app_tag: &str, error_type: &str) -> MgmtError {
        MgmtError {
            error_type: error_type.into(),
            tag: tag.into(),
            severity: "error".into(),
            app_tag: app_tag.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_vendor_wins_over_base_protocol() {
        let classifier = Classifier::standard();
        let typed = classifier.classify(record("operation-failed", "exec-failed", "application"));
        assert!(matches!(typed, TypedError::Exec(_)));
    }

    #[test]
    fn test_yang_ignores_type() {
        let classifier = Classifier::standard();
        let typed = classifier.classify(record("operation-failed", "must-violation", "rpc"));
        assert!(matches!(typed, TypedError::MustViolation(_)));
    }

    #[test]
    fn test_base_protocol_ignores_app_tag() {
        let classifier = Classifier::standard();
        let typed = classifier.classify(record("operation-failed", "no-such-app-tag", "application"));
        assert!(matches!(typed, TypedError::OperationFailedApplication(_)));
    }

    #[test]
    fn test_base_protocol_checks_pairing() {
        let classifier = Classifier::standard();
        assert!(classifier.recover(&record("data-exists", "", "rpc")).is_none());
        assert!(classifier.recover(&record("bogus", "", "application")).is_none());
        assert!(classifier.recover(&record("too-big", "", "session")).is_none());

        let typed = classifier.classify(record("data-exists", "", "rpc"));
        assert!(matches!(typed, TypedError::Generic(_)));
    }

    #[test]
    fn test_classify_keeps_record() {
        let classifier = Classifier::standard();
        let original = ExecError::new(&["bin", "true"], "oops").into_record();
        let typed = classifier.classify(original.clone());
        assert_eq!(typed.record(), &original);

        assert_eq!(
            classifier.recover(TooBigTransportError::new().record()),
            Some(TypedError::TooBigTransport(TooBigTransportError::new()))
        );
        assert_eq!(
            classifier.recover(MustViolationError::new().record()),
            Some(MustViolationError::new().into())
        );
        assert_eq!(
            classifier.recover(OperationFailedApplicationError::new().record()),
            Some(OperationFailedApplicationError::new().into())
        );
    }
}
