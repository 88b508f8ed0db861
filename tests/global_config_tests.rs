//! The process-wide configuration. Kept in its own test binary because it
//! can only be installed once per process.

use directory_rbac::{config, ConstraintCodec, Error, ModelConfigBuilder, RoleConstraint};

#[test]
fn test_install_once_and_share_delimiter() {
    let installed = ModelConfigBuilder::new().delimiter('|').build().unwrap();
    config::install(installed).unwrap();

    assert_eq!(config::global().codec.delimiter(), '|');

    let writer = ConstraintCodec::default();
    let reader = ConstraintCodec::default();
    let raw = writer
        .encode("Teller", &RoleConstraint::filter("branch", "cost=$5"))
        .unwrap();
    assert_eq!(raw, "Teller|type|filter|branch|cost=$5");
    assert!(reader.decode(&raw).is_ok());

    let again = ModelConfigBuilder::new().build().unwrap();
    assert!(matches!(config::install(again), Err(Error::ConfigAlreadyInstalled)));
}
