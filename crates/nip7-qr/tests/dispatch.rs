//! End-to-end tests for the `from_json` dispatcher and the code factories.

use nip7_crypto::CryptoError;
use nip7_qr::{
    create_add_contact, create_export_account, create_export_mnemonic, create_export_object,
    from_base64, from_json, from_visual_code, CodeRenderer, Mnemonic, NetworkType, Password,
    PayloadEncoding, QrCode, QrCodeType, QrConfig, QrError, QrPayload, DEFAULT_CHAIN_ID,
};
use nip7_sdk::{Account, PublicAccount};
use serde_json::{json, Value};

// ============================================================================
// Test helpers
// ============================================================================

const PUBLIC_KEY: &str = "C5C55181284607954E56CD46DE85F4F3EF4CC713CC2B95000FA741998558D268";
const PRIVATE_KEY: &str = "26B64CB10F005E5988A36744CA19E20D835CCC7C105AAA5F3B212DA593180930";
const ABANDON_PHRASE: &str = "abandon abandon abandon abandon abandon abandon \
                              abandon abandon abandon abandon abandon about";

fn password() -> Password {
    Password::new("password").unwrap()
}

fn config() -> QrConfig {
    QrConfig::default()
}

/// Stands in for a QR matrix library: the "image" is the payload text.
struct TextRenderer;

impl CodeRenderer for TextRenderer {
    type Image = String;
    type Error = String;

    fn encode(&self, payload: &str) -> Result<String, String> {
        if payload.is_empty() {
            return Err("nothing to encode".into());
        }
        Ok(payload.to_string())
    }

    fn decode(&self, image: &String) -> Result<String, String> {
        Ok(image.clone())
    }
}

struct BrokenRenderer;

impl CodeRenderer for BrokenRenderer {
    type Image = ();
    type Error = &'static str;

    fn encode(&self, _payload: &str) -> Result<(), &'static str> {
        Err("camera unplugged")
    }

    fn decode(&self, _image: &()) -> Result<String, &'static str> {
        Err("camera unplugged")
    }
}

// ============================================================================
// Envelope shape
// ============================================================================

#[test]
fn envelope_has_exactly_five_fields_in_order() {
    let account = PublicAccount::create_from_public_key(PUBLIC_KEY, NetworkType::MijinTest).unwrap();
    let json = create_add_contact("nemtech", account, &config())
        .to_json()
        .unwrap();

    let value: Value = serde_json::from_str(&json).unwrap();
    let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, ["v", "type", "network_id", "chain_id", "data"]);
    assert_eq!(value["v"], 3);
    assert_eq!(value["type"], 1);
    assert_eq!(value["network_id"], 144);
    assert_eq!(value["chain_id"], DEFAULT_CHAIN_ID);
}

// ============================================================================
// Round trips
// ============================================================================

#[test]
fn contact_round_trip() {
    let account = PublicAccount::create_from_public_key(PUBLIC_KEY, NetworkType::MijinTest).unwrap();
    let code = create_add_contact("nemtech", account, &config());

    let Ok(QrCode::Contact(parsed)) = from_json(&code.to_json().unwrap(), None) else {
        panic!("expected contact");
    };
    assert_eq!(parsed, code);
    assert_eq!(parsed.account.address(), account.address());
}

#[test]
fn contact_from_private_account_advertises_its_public_key() {
    let account = Account::create_from_private_key(PRIVATE_KEY, NetworkType::TestNet).unwrap();
    let config = QrConfig::new(NetworkType::TestNet, "chain");
    let code = create_add_contact("owner", &account, &config);

    let value: Value = serde_json::from_str(&code.to_json().unwrap()).unwrap();
    assert_eq!(
        value["data"]["publicKey"],
        "C2F93346E27CE6AD1A9F8F5E3066F8326593A406BDF357ACB041E2F9AB402EFE"
    );

    let Ok(QrCode::Contact(parsed)) = from_json(&code.to_json().unwrap(), None) else {
        panic!("expected contact");
    };
    assert_eq!(parsed.account.address(), account.address());
}

#[test]
fn object_round_trip() {
    let object = json!({ "id": 1, "name": "test name", "tags": ["a", "b"] });
    let code = create_export_object(&object, &config()).unwrap();

    let Ok(QrCode::Object(parsed)) = from_json(&code.to_json().unwrap(), None) else {
        panic!("expected object");
    };
    assert_eq!(parsed, code);
    assert_eq!(parsed.deserialize_into::<Value>().unwrap(), object);
}

#[test]
fn account_round_trip() {
    let account = Account::create_from_private_key(PRIVATE_KEY, NetworkType::MijinTest).unwrap();
    let code = create_export_account(account.clone(), password(), &config());
    let json = code.to_json().unwrap();
    assert!(!json.contains(PRIVATE_KEY));

    let Ok(QrCode::Account(parsed)) = from_json(&json, Some(&password())) else {
        panic!("expected account");
    };
    assert_eq!(parsed.account, account);
    assert_eq!(
        parsed.account.private_key_hex().as_str(),
        account.private_key_hex().as_str()
    );
    assert_eq!(parsed.chain_id, DEFAULT_CHAIN_ID);
}

#[test]
fn generated_account_round_trip() {
    let account = Account::generate(NetworkType::TestNet).unwrap();
    let config = QrConfig::new(NetworkType::TestNet, "chain");
    let code = create_export_account(account.clone(), password(), &config);

    let Ok(QrCode::Account(parsed)) = from_json(&code.to_json().unwrap(), Some(&password())) else {
        panic!("expected account");
    };
    assert_eq!(parsed.account, account);
    assert_eq!(parsed.network_type, NetworkType::TestNet);
}

#[test]
fn mnemonic_round_trip() {
    let mnemonic = Mnemonic::from_entropy(&[0u8; 16]).unwrap();
    assert_eq!(mnemonic.to_string(), ABANDON_PHRASE);
    let code = create_export_mnemonic(mnemonic.clone(), password(), &config());
    let json = code.to_json().unwrap();
    assert!(!json.contains("abandon"));

    let Ok(QrCode::Mnemonic(parsed)) = from_json(&json, Some(&password())) else {
        panic!("expected mnemonic");
    };
    assert_eq!(parsed.mnemonic, mnemonic);
    assert_eq!(parsed.mnemonic.to_string(), ABANDON_PHRASE);
}

#[test]
fn base64_round_trip() {
    let code = create_export_object(&json!({ "k": "v" }), &config()).unwrap();
    let encoded = code.to_base64().unwrap();
    assert!(!encoded.contains('\n'));

    let parsed = from_base64(&encoded, None).unwrap();
    assert_eq!(parsed.to_json().unwrap(), code.to_json().unwrap());
}

#[test]
fn visual_code_round_trip_in_both_encodings() {
    let account = PublicAccount::create_from_public_key(PUBLIC_KEY, NetworkType::MijinTest).unwrap();
    let code = QrCode::from(create_add_contact("nemtech", account, &config()));

    for encoding in [PayloadEncoding::Json, PayloadEncoding::Base64] {
        let image = code.to_visual_code(&TextRenderer, encoding).unwrap();
        let parsed = from_visual_code(&TextRenderer, &image, None).unwrap();
        assert_eq!(parsed.to_json().unwrap(), code.to_json().unwrap());
    }
}

#[test]
fn renderer_errors_surface_as_render_errors() {
    let code = create_export_object(&json!({}), &config()).unwrap();
    assert!(matches!(
        code.to_visual_code(&BrokenRenderer, PayloadEncoding::Json),
        Err(QrError::Render(msg)) if msg == "camera unplugged"
    ));
    assert!(matches!(
        from_visual_code(&BrokenRenderer, &(), None),
        Err(QrError::Render(_))
    ));
}

// ============================================================================
// Password gating
// ============================================================================

#[test]
fn encrypted_codes_require_password() {
    let account = Account::create_from_private_key(PRIVATE_KEY, NetworkType::MijinTest).unwrap();
    let json = create_export_account(account, password(), &config())
        .to_json()
        .unwrap();

    let err = from_json(&json, None).unwrap_err();
    assert!(matches!(err, QrError::MissingPassword(QrCodeType::ExportAccount)));
    assert!(err.to_string().contains("password"));
}

#[test]
fn wrong_password_fails_to_decrypt() {
    let mnemonic = Mnemonic::parse_normalized(ABANDON_PHRASE).unwrap();
    let json = create_export_mnemonic(mnemonic, password(), &config())
        .to_json()
        .unwrap();

    let wrong = Password::new("wrong password").unwrap();
    assert!(matches!(
        from_json(&json, Some(&wrong)),
        Err(QrError::Crypto(CryptoError::DecryptionFailed))
    ));
}

#[test]
fn plain_codes_ignore_password() {
    let code = create_export_object(&json!({ "a": true }), &config()).unwrap();
    let parsed = from_json(&code.to_json().unwrap(), Some(&password())).unwrap();
    assert_eq!(parsed.code_type(), QrCodeType::ExportObject);
}

// ============================================================================
// Rejections
// ============================================================================

#[test]
fn rejects_empty_input() {
    let err = from_json("", None).unwrap_err();
    assert!(matches!(err, QrError::EmptyInput));
    assert_eq!(err.to_string(), "JSON argument cannot be empty");
}

#[test]
fn unrecognized_type_names_the_raw_value() {
    let json = json!({
        "v": 3,
        "type": "not-a-real-type",
        "network_id": 144,
        "chain_id": "",
        "data": {}
    })
    .to_string();
    let err = from_json(&json, None).unwrap_err();
    assert!(matches!(err, QrError::UnrecognizedType(_)));
    assert!(err.to_string().contains("not-a-real-type"));
}

#[test]
fn unrecognized_numeric_type() {
    let json = json!({ "type": 42, "network_id": 144, "chain_id": "", "data": {} }).to_string();
    let err = from_json(&json, None).unwrap_err();
    assert!(err.to_string().contains("42"));
}

#[test]
fn rejects_missing_type() {
    let json = json!({ "network_id": 144, "chain_id": "", "data": {} }).to_string();
    assert!(matches!(from_json(&json, None), Err(QrError::MissingType)));
}

#[test]
fn rejects_non_json() {
    assert!(matches!(
        from_json("definitely not json", None),
        Err(QrError::InvalidJson(_))
    ));
    assert!(matches!(from_json("[1, 2]", None), Err(QrError::NotAnObject)));
}

#[test]
fn rejects_unknown_network() {
    let json = json!({ "type": 6, "network_id": 7, "chain_id": "", "data": {} }).to_string();
    assert!(from_json(&json, None).is_err());
}

#[test]
fn object_export_requires_a_json_object() {
    assert!(matches!(
        create_export_object(&json!(["a", "b"]), &config()),
        Err(QrError::InvalidField { field: "data", .. })
    ));

    let json = json!({ "type": 6, "network_id": 144, "chain_id": "", "data": ["a", "b"] })
        .to_string();
    assert!(matches!(
        from_json(&json, None),
        Err(QrError::InvalidField { field: "data", .. })
    ));
}

#[test]
fn variant_parse_enforces_its_type() {
    let code = create_export_object(&json!({}), &config()).unwrap();
    assert!(matches!(
        nip7_qr::ContactQr::from_json(&code.to_json().unwrap(), None),
        Err(QrError::TypeMismatch {
            expected: QrCodeType::AddContact,
            got: QrCodeType::ExportObject,
        })
    ));
}
