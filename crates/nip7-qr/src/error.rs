use nip7_crypto::CryptoError;
use nip7_sdk::{SdkError, TransactionType};
use thiserror::Error;

use crate::types::QrCodeType;

#[derive(Debug, Error)]
pub enum QrError {
    #[error("JSON argument cannot be empty")]
    EmptyInput,

    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Invalid QR code payload: expected JSON object")]
    NotAnObject,

    #[error("Missing mandatory field with name \"type\"")]
    MissingType,

    #[error("Unrecognized QR Code 'type': '{0}'")]
    UnrecognizedType(String),

    #[error("Invalid type field value: expected {expected}, got {got}")]
    TypeMismatch {
        expected: QrCodeType,
        got: QrCodeType,
    },

    #[error("Missing password to decrypt {0} QR code")]
    MissingPassword(QrCodeType),

    #[error("Missing mandatory field with name \"{0}\"")]
    MissingField(&'static str),

    #[error("Invalid field \"{field}\": {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("Cosignature request must wrap an aggregate bonded transaction, got {0:?}")]
    NotAggregateBonded(TransactionType),

    #[error("Invalid base64: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("Base64 payload does not decode to UTF-8 text")]
    Base64NotUtf8,

    #[error("Invalid mnemonic: {0}")]
    InvalidMnemonic(String),

    #[error("Renderer failed: {0}")]
    Render(String),

    #[error("SDK error: {0}")]
    Sdk(#[from] SdkError),

    #[error("Crypto error: {0}")]
    Crypto(#[from] CryptoError),
}
