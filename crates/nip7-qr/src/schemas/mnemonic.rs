use bip39::Mnemonic;
use nip7_crypto::{decrypt, encrypt, Password};
use serde_json::Value;
use zeroize::Zeroizing;

use crate::codes::MnemonicQr;
use crate::envelope::{invalid, Envelope};
use crate::error::QrError;
use crate::types::QrCodeType;

use super::{encrypted_data, require_password, secret_context, DataSchema};

/// `data`: `{ "ciphertext", "iv", "salt" }` over the space-separated phrase.
pub struct ExportMnemonicSchema;

impl DataSchema for ExportMnemonicSchema {
    type Code = MnemonicQr;
    const CODE_TYPE: QrCodeType = QrCodeType::ExportMnemonic;

    fn data(code: &MnemonicQr) -> Result<Value, QrError> {
        let phrase = Zeroizing::new(code.mnemonic.to_string());
        let encrypted = encrypt(
            phrase.as_bytes(),
            &code.password,
            &secret_context(Self::CODE_TYPE),
        )?;
        Ok(serde_json::to_value(encrypted)?)
    }

    fn from_envelope(
        envelope: Envelope,
        password: Option<&Password>,
    ) -> Result<MnemonicQr, QrError> {
        let password = require_password(Self::CODE_TYPE, password)?;
        let encrypted = encrypted_data(&envelope)?;
        let plaintext = decrypt(&encrypted, password, &secret_context(Self::CODE_TYPE))?;
        let phrase = std::str::from_utf8(&plaintext)
            .map_err(|_| invalid("data", "decrypted mnemonic is not UTF-8"))?;
        let mnemonic =
            Mnemonic::parse_normalized(phrase).map_err(|e| QrError::InvalidMnemonic(e.to_string()))?;
        Ok(MnemonicQr::new(
            mnemonic,
            password.clone(),
            envelope.network_type,
            envelope.chain_id,
        ))
    }
}
