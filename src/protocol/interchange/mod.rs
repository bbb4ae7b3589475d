//! Json interchange format of [`ExternalSystem`].
//!
//! ```text
//! {
//!   "name": <text>,
//!   "systemKey": <text>,
//!   "owner": {
//!     "name": <text>,
//!     "adminCredentials": <text>
//!   }
//! }
//! ```
//!
//! Decoding is strict. Every field is required, leaf fields must be strings and unknown
//! fields are rejected. Field order within the document does not matter. Encoding always
//! emits fields in the order shown above.

mod parse;
use self::parse::Parse;

use crate::common::{trace, Result};
use crate::core::{Admin, ExternalSystem};
use crate::error::DecodeError;

/// Decode an [`ExternalSystem`] together with its owning [`Admin`].
pub fn decode(text: &str) -> Result<ExternalSystem, DecodeError> {
    let document =
        serde_json::from_str::<serde_json::Value>(text).map_err(|err| DecodeError::Syntax {
            line: err.line(),
            column: err.column(),
            description: err.to_string(),
        })?;

    let mut parse = Parse::root(document)?;

    let name = parse.next_string("name")?;
    let system_key = parse.next_string("systemKey")?;
    let owner = {
        let mut owner = parse.next_object("owner")?;
        let name = owner.next_string("name")?;
        let admin_credentials = owner.next_string("adminCredentials")?;
        owner.finish()?;
        Admin::new(name, admin_credentials)
    };
    parse.finish()?;

    trace!(system = %name, owner = %owner.name(), "Decoded external system");

    Ok(ExternalSystem::new(name, system_key, owner))
}

/// Encode as a compact document.
pub fn encode(system: &ExternalSystem) -> Result<String> {
    Ok(serde_json::to_string(system)?)
}

/// Encode as an indented document.
pub fn encode_pretty(system: &ExternalSystem) -> Result<String> {
    Ok(serde_json::to_string_pretty(system)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &str = r#"
        {
          "name": "ext",
          "systemKey": "12345678",
          "owner": {
            "name": "admin",
            "adminCredentials": "abcdef"
          }
        }
    "#;

    fn external_system() -> ExternalSystem {
        ExternalSystem::new("ext", "12345678", Admin::new("admin", "abcdef"))
    }

    #[test]
    fn decode_document() {
        let system = decode(DOCUMENT).unwrap();

        assert_eq!(system.name(), "ext");
        assert_eq!(system.system_key(), "12345678");
        assert_eq!(system.owner(), &Admin::new("admin", "abcdef"));
    }

    #[test]
    fn decode_ignores_field_order() {
        let reordered = r#"{
            "owner": {"adminCredentials": "abcdef", "name": "admin"},
            "systemKey": "12345678",
            "name": "ext"
        }"#;

        assert_eq!(decode(reordered).unwrap(), external_system());
    }

    #[test]
    fn encode_snapshot() {
        assert_eq!(
            encode(&external_system()).unwrap(),
            r#"{"name":"ext","systemKey":"12345678","owner":{"name":"admin","adminCredentials":"abcdef"}}"#
        );
        assert_eq!(
            encode_pretty(&external_system()).unwrap(),
            r#"{
  "name": "ext",
  "systemKey": "12345678",
  "owner": {
    "name": "admin",
    "adminCredentials": "abcdef"
  }
}"#
        );
    }

    #[test]
    fn round_trip() {
        let systems = vec![
            external_system(),
            ExternalSystem::new("", "", Admin::new("", "")),
            ExternalSystem::new(
                "sys \"quoted\"",
                "key\nwith\tescapes",
                Admin::new("ünïcode", "✓"),
            ),
        ];

        for system in systems {
            assert_eq!(decode(&encode(&system).unwrap()).unwrap(), system);
            assert_eq!(decode(&encode_pretty(&system).unwrap()).unwrap(), system);
        }
    }

    #[test]
    fn missing_owner_admin_credentials() {
        let text = r#"{"name":"ext","systemKey":"12345678","owner":{"name":"admin"}}"#;

        let err = decode(text).unwrap_err();
        assert_eq!(
            err,
            DecodeError::MissingField {
                path: "owner.adminCredentials".into()
            }
        );
        assert_eq!(err.path(), Some("owner.adminCredentials"));
    }

    #[test]
    fn missing_fields() {
        let cases = [
            (r#"{"systemKey":"k","owner":{"name":"a","adminCredentials":"c"}}"#, "name"),
            (r#"{"name":"n","owner":{"name":"a","adminCredentials":"c"}}"#, "systemKey"),
            (r#"{"name":"n","systemKey":"k"}"#, "owner"),
            (r#"{"name":"n","systemKey":"k","owner":{"adminCredentials":"c"}}"#, "owner.name"),
        ];

        for (text, path) in cases {
            assert_eq!(
                decode(text),
                Err(DecodeError::MissingField { path: path.into() }),
                "{}",
                text
            );
        }
    }

    #[test]
    fn syntax_error() {
        for text in ["", "{", r#"{"name": "ext",}"#, "not json"] {
            assert!(
                matches!(decode(text), Err(DecodeError::Syntax { .. })),
                "{}",
                text
            );
        }

        match decode("{\n  \"name\": ext\n}") {
            Err(DecodeError::Syntax { line, .. }) => assert_eq!(line, 2),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn schema_error() {
        let text = r#"{"name":"ext","systemKey":12345678,"owner":{"name":"admin","adminCredentials":"abcdef"}}"#;
        assert_eq!(
            decode(text),
            Err(DecodeError::Schema {
                path: "systemKey".into(),
                expected: "string",
                found: "number".into(),
            })
        );

        let text = r#"{"name":"ext","systemKey":"k","owner":"admin"}"#;
        assert_eq!(
            decode(text),
            Err(DecodeError::Schema {
                path: "owner".into(),
                expected: "object",
                found: "string".into(),
            })
        );

        let text = r#"{"name":"ext","systemKey":"k","owner":{"name":null,"adminCredentials":"c"}}"#;
        assert_eq!(
            decode(text),
            Err(DecodeError::Schema {
                path: "owner.name".into(),
                expected: "string",
                found: "null".into(),
            })
        );

        assert_eq!(
            decode("[]"),
            Err(DecodeError::Schema {
                path: "$".into(),
                expected: "object",
                found: "array".into(),
            })
        );
    }

    #[test]
    fn unknown_field() {
        let text = r#"{"name":"ext","systemKey":"k","owner":{"name":"a","adminCredentials":"c","role":"root"}}"#;
        assert_eq!(
            decode(text),
            Err(DecodeError::Schema {
                path: "owner.role".into(),
                expected: "no such field",
                found: "string".into(),
            })
        );

        let text = r#"{"name":"ext","systemKey":"k","owner":{"name":"a","adminCredentials":"c"},"extra":1}"#;
        assert_eq!(decode(text).unwrap_err().path(), Some("extra"));
    }
}
