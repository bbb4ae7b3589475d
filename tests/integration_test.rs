use std::io::Write;
use std::sync::{Arc, Mutex};

use principal_auth::config::Initializer;
use principal_auth::core::AuditError;
use principal_auth::{
    classify, decode, encode, AcceptAll, Admin, Audit, Authenticator, DecodeError,
    ExternalSystem, Principal, UnknownCategory,
};

#[derive(Default, Clone)]
struct SharedAudit(Arc<Mutex<Vec<String>>>);

impl Audit for SharedAudit {
    fn record(&self, message: &str) -> Result<(), AuditError> {
        self.0.lock().unwrap().push(message.to_owned());
        Ok(())
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

#[test]
fn external_system_end_to_end() {
    init_tracing();

    let system = ExternalSystem::new("ext", "12345678", Admin::new("admin", "abcdef"));
    let audit = SharedAudit::default();
    let authenticator = Authenticator::new(AcceptAll, audit.clone());

    let principal = Principal::from(system.clone());
    assert_eq!(authenticator.authenticate(&principal), Ok(true));
    assert_eq!(authenticator.is_authenticated_admin(&principal), Ok(false));
    assert_eq!(
        *audit.0.lock().unwrap(),
        vec!["Checking credentials for system ext".to_owned()]
    );

    let text = encode(&system).unwrap();
    let decoded = decode(&text).unwrap();
    assert_eq!(decoded, system);

    // Decoded value feeds straight back into the authenticator.
    assert_eq!(authenticator.authenticate(&decoded.into()), Ok(true));
}

#[test]
fn configured_table_verifier() {
    init_tracing();

    let mut f = tempfile::NamedTempFile::new().unwrap();
    write!(
        f,
        r#"
authenticator:
  verifier: table
  credentials:
    - identifier: ext
      secret: "12345678"
"#
    )
    .unwrap();

    let authenticator = Initializer::load_config_file(f.path())
        .unwrap()
        .authenticator();

    let document = r#"{
        "name": "ext",
        "systemKey": "12345678",
        "owner": { "name": "admin", "adminCredentials": "not-in-table" }
    }"#;
    let system: Principal = decode(document).unwrap().into();

    // Only the system key is checked, the owner is not in the table.
    assert_eq!(authenticator.authenticate(&system), Ok(true));

    let owner: Principal = Admin::new("admin", "not-in-table").into();
    assert_eq!(authenticator.authenticate(&owner), Ok(false));
    assert_eq!(authenticator.is_authenticated_admin(&owner), Ok(false));
}

#[test]
fn decode_errors_are_not_authentication_results() {
    let err = decode(r#"{"name":"ext","systemKey":"k","owner":{"name":"admin"}}"#).unwrap_err();
    assert_eq!(
        err,
        DecodeError::MissingField {
            path: "owner.adminCredentials".into()
        }
    );

    let err = principal_auth::Error::from(err);
    assert!(err.is_input_error());
    assert!(err.to_string().contains("owner.adminCredentials"));
}

#[test]
fn closed_set_dispatch() {
    assert_eq!(classify::day_type("MON"), Ok("Work day"));
    assert_eq!(classify::day_type("SAT"), Ok("Weekend day"));
    assert_eq!(
        classify::day_type("XYZ"),
        Err(UnknownCategory {
            label: "XYZ".into()
        })
    );

    assert!(classify::describe(&classify::Kind::from(1i64)).contains("Integer"));
    assert!(classify::describe(&classify::Kind::from(true)).contains("Boolean"));
    assert_eq!(
        classify::describe(&classify::Kind::from(0.5f64)),
        "Unknown type"
    );
}
