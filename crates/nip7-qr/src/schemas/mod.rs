//! Per-type projections between a code and its envelope's `data` field.

mod account;
mod contact;
mod cosignature;
mod mnemonic;
mod object;
mod transaction;

pub use account::ExportAccountSchema;
pub use contact::AddContactSchema;
pub use cosignature::RequestCosignatureSchema;
pub use mnemonic::ExportMnemonicSchema;
pub use object::ExportObjectSchema;
pub use transaction::RequestTransactionSchema;

use nip7_crypto::{EncryptedPayload, Password};
use serde_json::Value;

use crate::envelope::{invalid, Envelope};
use crate::error::QrError;
use crate::types::QrCodeType;

/// Projects a code into `data` and rebuilds it from a parsed envelope.
///
/// `from_envelope(Envelope::new(.., data(x)?), ..)` yields `x` again.
pub trait DataSchema {
    type Code;

    /// Tag this schema reads and writes.
    const CODE_TYPE: QrCodeType;

    /// The `data` object for `code`.
    fn data(code: &Self::Code) -> Result<Value, QrError>;

    /// Rebuild a code from an envelope already known to carry
    /// [`Self::CODE_TYPE`]. Encrypted schemas require `password`.
    fn from_envelope(envelope: Envelope, password: Option<&Password>)
        -> Result<Self::Code, QrError>;

    /// Parse JSON that must carry [`Self::CODE_TYPE`].
    fn parse(json: &str, password: Option<&Password>) -> Result<Self::Code, QrError> {
        let envelope = Envelope::from_json(json)?.expect_type(Self::CODE_TYPE)?;
        Self::from_envelope(envelope, password)
    }
}

pub(crate) fn require_password(
    code_type: QrCodeType,
    password: Option<&Password>,
) -> Result<&Password, QrError> {
    password.ok_or(QrError::MissingPassword(code_type))
}

/// Associated data binding a ciphertext to the code type it was made for.
pub(crate) fn secret_context(code_type: QrCodeType) -> [u8; 1] {
    [u8::from(code_type)]
}

pub(crate) fn encrypted_data(envelope: &Envelope) -> Result<EncryptedPayload, QrError> {
    serde_json::from_value(envelope.data.clone()).map_err(|e| invalid("data", e.to_string()))
}
