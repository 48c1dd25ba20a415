//! Classification over the whole catalog: every constructor's output must be
//! recovered as the same kind of error after going over the wire.

use rust_mgmterror::*;

fn every_error() -> Vec<TypedError> {
    vec![
        InUseProtocolError::new().into(),
        InUseApplicationError::new().into(),
        InvalidValueProtocolError::new().into(),
        InvalidValueApplicationError::new().into(),
        TooBigTransportError::new().into(),
        TooBigRpcError::new().into(),
        TooBigProtocolError::new().into(),
        TooBigApplicationError::new().into(),
        MissingAttrRpcError::new("a", "e").into(),
        MissingAttrProtocolError::new("a", "e").into(),
        MissingAttrApplicationError::new("a", "e").into(),
        BadAttrRpcError::new("a", "e").into(),
        BadAttrProtocolError::new("a", "e").into(),
        BadAttrApplicationError::new("a", "e").into(),
        UnknownAttrRpcError::new("a", "e").into(),
        UnknownAttrProtocolError::new("a", "e").into(),
        UnknownAttrApplicationError::new("a", "e").into(),
        MissingElementProtocolError::new("e").into(),
        MissingElementApplicationError::new("e").into(),
        BadElementProtocolError::new("e").into(),
        BadElementApplicationError::new("e").into(),
        UnknownElementProtocolError::new("e").into(),
        UnknownElementApplicationError::new("e").into(),
        UnknownNamespaceProtocolError::new("e", "urn:x").into(),
        UnknownNamespaceApplicationError::new("e", "urn:x").into(),
        AccessDeniedProtocolError::new().into(),
        AccessDeniedApplicationError::new().into(),
        LockDeniedError::new("0").into(),
        ResourceDeniedTransportError::new().into(),
        ResourceDeniedRpcError::new().into(),
        ResourceDeniedProtocolError::new().into(),
        ResourceDeniedApplicationError::new().into(),
        RollbackFailedProtocolError::new().into(),
        RollbackFailedApplicationError::new().into(),
        DataExistsError::new().into(),
        DataMissingError::new().into(),
        OperationNotSupportedProtocolError::new().into(),
        OperationNotSupportedApplicationError::new().into(),
        OperationFailedRpcError::new().into(),
        OperationFailedProtocolError::new().into(),
        OperationFailedApplicationError::new().into(),
        MalformedMessageError::new().into(),
        NonUniqueError::new(["/l/a", "/l/b"]).with_path("/l").into(),
        TooManyElementsError::new("/l").into(),
        TooFewElementsError::new("/l").into(),
        MustViolationError::new().into(),
        InstanceRequiredError::new("/i").into(),
        MissingChoiceError::new("/p", "c").into(),
        InsertFailedError::new().into(),
        ExecError::new(&["bin", "x"], "out").into(),
        PathAmbiguousError::new(&["s"], [("set", "Set"), ("show", "Show")]).into(),
    ]
}

#[test]
fn test_reclassification_from_json() {
    let classifier = Classifier::standard();
    for err in every_error() {
        let json = serde_json::to_string(&err).expect("Failed to encode");
        let record: MgmtError = serde_json::from_str(&json).expect("Failed to decode");
        let recovered = classifier.classify(record);
        assert_eq!(recovered, err, "{} did not survive JSON", err.kind());
    }
}

#[test]
fn test_reclassification_from_xml() {
    for err in every_error() {
        let xml = err.to_xml_pretty().expect("Failed to encode");
        let recovered = TypedError::from_xml(&xml).expect("Failed to decode");
        assert_eq!(recovered, err, "{} did not survive XML", err.kind());
    }
}

#[test]
fn test_no_constructor_falls_back_to_generic() {
    for err in every_error() {
        assert!(!err.is_generic(), "{} is generic", err.kind());
        assert!(
            Classifier::standard().recover(err.record()).is_some(),
            "{} is not in any catalog",
            err.kind()
        );
    }
}

#[test]
fn test_leafref_mismatch_is_instance_required_on_the_wire() {
    let err = LeafrefMismatchError::new("/a/ref", "/b/target");
    let recovered = Classifier::standard().classify(err.clone().into_record());
    assert_eq!(recovered, TypedError::from(InstanceRequiredError::new("/a/ref")));
}

#[test]
fn test_vendor_takes_precedence() {
    let record = MgmtError::try_netconf("operation-failed", "application", ErrorInfo::new())
        .expect("operation-failed is an application error");
    let record = MgmtError {
        app_tag: "exec-failed".into(),
        ..record
    };
    assert!(matches!(record.classify(), TypedError::Exec(_)));

    let classifier = Classifier::standard();
    assert!(
        classifier
            .lookup("operation-failed", "path-ambiguous", "application")
            .is_some()
    );
}

#[test]
fn test_catalog_failures_are_distinguishable() {
    assert_eq!(
        MgmtError::try_netconf("no-such-tag", "rpc", ErrorInfo::new()),
        Err(CatalogError::InvalidTag("no-such-tag".into()))
    );
    assert_eq!(
        MgmtError::try_netconf("in-use", "no-such-type", ErrorInfo::new()),
        Err(CatalogError::InvalidType("no-such-type".into()))
    );
    assert_eq!(
        MgmtError::try_netconf("malformed-message", "application", ErrorInfo::new()),
        Err(CatalogError::InvalidTagForType {
            tag: "malformed-message".into(),
            error_type: "application".into(),
        })
    );
}

#[test]
fn test_custom_catalogs() {
    use rust_mgmterror::catalog::netconf::NETCONF;
    use rust_mgmterror::catalog::vendor::VendorCatalog;
    use rust_mgmterror::catalog::yang::YANG;

    // Without vendor entries exec-failed records fall through to the base
    // protocol catalog
    static NO_VENDOR: VendorCatalog = VendorCatalog::new(&[]);
    let classifier = Classifier::new(&NETCONF, &YANG, &NO_VENDOR);

    let err = ExecError::new(&["bin", "x"], "out");
    let recovered = classifier.classify(err.into_record());
    assert!(matches!(
        recovered,
        TypedError::OperationFailedApplication(_)
    ));
}
