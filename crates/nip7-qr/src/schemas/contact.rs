use nip7_crypto::Password;
use nip7_sdk::PublicAccount;
use serde_json::{json, Value};

use crate::codes::ContactQr;
use crate::envelope::Envelope;
use crate::error::QrError;
use crate::types::QrCodeType;

use super::DataSchema;

/// `data`: `{ "name", "publicKey" }`
pub struct AddContactSchema;

impl DataSchema for AddContactSchema {
    type Code = ContactQr;
    const CODE_TYPE: QrCodeType = QrCodeType::AddContact;

    fn data(code: &ContactQr) -> Result<Value, QrError> {
        Ok(json!({
            "name": code.name,
            "publicKey": code.account.public_key_hex(),
        }))
    }

    fn from_envelope(envelope: Envelope, _password: Option<&Password>) -> Result<ContactQr, QrError> {
        let name = envelope.data_str("name")?.to_string();
        let account = PublicAccount::create_from_public_key(
            envelope.data_str("publicKey")?,
            envelope.network_type,
        )?;
        Ok(ContactQr::new(
            name,
            account,
            envelope.network_type,
            envelope.chain_id,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nip7_sdk::NetworkType;

    const PUBLIC_KEY: &str = "C5C55181284607954E56CD46DE85F4F3EF4CC713CC2B95000FA741998558D268";

    #[test]
    fn projects_name_and_public_key() {
        let account = PublicAccount::create_from_public_key(PUBLIC_KEY, NetworkType::MijinTest).unwrap();
        let code = ContactQr::new("nemtech", account, NetworkType::MijinTest, "");
        let data = AddContactSchema::data(&code).unwrap();
        assert_eq!(data, json!({ "name": "nemtech", "publicKey": PUBLIC_KEY }));
    }

    #[test]
    fn parses_contact_json() {
        let json = json!({
            "v": 3,
            "type": 1,
            "network_id": 152,
            "chain_id": "ABC",
            "data": { "name": "alice", "publicKey": PUBLIC_KEY }
        })
        .to_string();
        let code = AddContactSchema::parse(&json, None).unwrap();
        assert_eq!(code.name, "alice");
        assert_eq!(code.account.public_key_hex(), PUBLIC_KEY);
        assert_eq!(code.account.network_type(), NetworkType::TestNet);
        assert_eq!(code.chain_id, "ABC");
    }

    #[test]
    fn rejects_other_type() {
        let json = json!({
            "type": 6,
            "network_id": 144,
            "chain_id": "",
            "data": { "name": "alice", "publicKey": PUBLIC_KEY }
        })
        .to_string();
        assert!(matches!(
            AddContactSchema::parse(&json, None),
            Err(QrError::TypeMismatch {
                expected: QrCodeType::AddContact,
                got: QrCodeType::ExportObject
            })
        ));
    }

    #[test]
    fn rejects_missing_public_key() {
        let json = json!({
            "type": 1,
            "network_id": 144,
            "chain_id": "",
            "data": { "name": "alice" }
        })
        .to_string();
        assert!(matches!(
            AddContactSchema::parse(&json, None),
            Err(QrError::MissingField("publicKey"))
        ));
    }

    #[test]
    fn rejects_malformed_public_key() {
        let json = json!({
            "type": 1,
            "network_id": 144,
            "chain_id": "",
            "data": { "name": "alice", "publicKey": "C5C5" }
        })
        .to_string();
        assert!(matches!(
            AddContactSchema::parse(&json, None),
            Err(QrError::Sdk(_))
        ));
    }
}
