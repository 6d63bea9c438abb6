//! Factories for every code type and the dispatcher that turns a scanned
//! payload back into a [`QrCode`].

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use bip39::Mnemonic;
use nip7_crypto::Password;
use nip7_sdk::{Account, AggregateTransaction, PublicAccount, Transaction};
use serde::Serialize;
use tracing::{debug, warn};

use crate::codes::{
    AccountQr, ContactQr, CosignatureQr, MnemonicQr, ObjectQr, QrCode, TransactionQr,
};
use crate::config::QrConfig;
use crate::envelope::Envelope;
use crate::error::QrError;
use crate::render::CodeRenderer;
use crate::schemas::{
    AddContactSchema, DataSchema, ExportAccountSchema, ExportMnemonicSchema, ExportObjectSchema,
    RequestCosignatureSchema, RequestTransactionSchema,
};
use crate::types::QrCodeType;

pub fn create_add_contact(
    name: impl Into<String>,
    account: impl Into<PublicAccount>,
    config: &QrConfig,
) -> ContactQr {
    ContactQr::new(name, account.into(), config.network_type, &config.chain_id)
}

pub fn create_export_account(
    account: Account,
    password: Password,
    config: &QrConfig,
) -> AccountQr {
    AccountQr::new(account, password, config.network_type, &config.chain_id)
}

/// Fails with [`QrError::InvalidField`] if `object` does not serialize to a
/// JSON object. Arrays are rejected too: wrap them in an object field.
pub fn create_export_object<T: Serialize + ?Sized>(
    object: &T,
    config: &QrConfig,
) -> Result<ObjectQr, QrError> {
    ObjectQr::from_serializable(object, config.network_type, &config.chain_id)
}

pub fn create_transaction_request(
    transaction: impl Into<Transaction>,
    config: &QrConfig,
) -> TransactionQr {
    TransactionQr::new(transaction.into(), config.network_type, &config.chain_id)
}

/// Fails unless `transaction` is aggregate bonded.
pub fn create_cosignature_request(
    transaction: AggregateTransaction,
    config: &QrConfig,
) -> Result<CosignatureQr, QrError> {
    CosignatureQr::new(transaction, config.network_type, &config.chain_id)
}

pub fn create_export_mnemonic(
    mnemonic: Mnemonic,
    password: Password,
    config: &QrConfig,
) -> MnemonicQr {
    MnemonicQr::new(mnemonic, password, config.network_type, &config.chain_id)
}

/// Parse any NIP-7 JSON payload.
///
/// `password` is only consulted for encrypted types; those fail with
/// [`QrError::MissingPassword`] before any decryption is attempted when it
/// is `None`.
pub fn from_json(json: &str, password: Option<&Password>) -> Result<QrCode, QrError> {
    let envelope = Envelope::from_json(json).inspect_err(|e| {
        warn!(error = %e, "rejected QR payload");
    })?;
    debug!(
        code_type = %envelope.code_type,
        network_type = %envelope.network_type,
        "parsing QR payload"
    );

    if envelope.code_type.is_encrypted() && password.is_none() {
        warn!(code_type = %envelope.code_type, "encrypted QR payload without password");
        return Err(QrError::MissingPassword(envelope.code_type));
    }

    let code: QrCode = match envelope.code_type {
        QrCodeType::AddContact => AddContactSchema::from_envelope(envelope, password)?.into(),
        QrCodeType::ExportAccount => ExportAccountSchema::from_envelope(envelope, password)?.into(),
        QrCodeType::RequestTransaction => {
            RequestTransactionSchema::from_envelope(envelope, password)?.into()
        }
        QrCodeType::RequestCosignature => {
            RequestCosignatureSchema::from_envelope(envelope, password)?.into()
        }
        QrCodeType::ExportMnemonic => {
            ExportMnemonicSchema::from_envelope(envelope, password)?.into()
        }
        QrCodeType::ExportObject => ExportObjectSchema::from_envelope(envelope, password)?.into(),
    };
    Ok(code)
}

/// Parse the Base64 form produced by `to_base64`.
pub fn from_base64(encoded: &str, password: Option<&Password>) -> Result<QrCode, QrError> {
    let bytes = STANDARD.decode(encoded.trim())?;
    let json = String::from_utf8(bytes).map_err(|_| QrError::Base64NotUtf8)?;
    from_json(&json, password)
}

/// Decode an image and parse the text it carries, JSON or Base64.
pub fn from_visual_code<R: CodeRenderer>(
    renderer: &R,
    image: &R::Image,
    password: Option<&Password>,
) -> Result<QrCode, QrError> {
    let text = renderer
        .decode(image)
        .map_err(|e| QrError::Render(e.to_string()))?;
    let text = text.trim();
    if text.starts_with('{') {
        from_json(text, password)
    } else {
        from_base64(text, password)
    }
}
