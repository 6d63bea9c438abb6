use nip7_crypto::{decrypt, encrypt, Password};
use nip7_sdk::Account;
use serde_json::Value;

use crate::codes::AccountQr;
use crate::envelope::{invalid, Envelope};
use crate::error::QrError;
use crate::types::QrCodeType;

use super::{encrypted_data, require_password, secret_context, DataSchema};

/// `data`: `{ "ciphertext", "iv", "salt" }` over the private key hex.
pub struct ExportAccountSchema;

impl DataSchema for ExportAccountSchema {
    type Code = AccountQr;
    const CODE_TYPE: QrCodeType = QrCodeType::ExportAccount;

    fn data(code: &AccountQr) -> Result<Value, QrError> {
        let private_key = code.account.private_key_hex();
        let encrypted = encrypt(
            private_key.as_bytes(),
            &code.password,
            &secret_context(Self::CODE_TYPE),
        )?;
        Ok(serde_json::to_value(encrypted)?)
    }

    fn from_envelope(envelope: Envelope, password: Option<&Password>) -> Result<AccountQr, QrError> {
        let password = require_password(Self::CODE_TYPE, password)?;
        let encrypted = encrypted_data(&envelope)?;
        let plaintext = decrypt(&encrypted, password, &secret_context(Self::CODE_TYPE))?;
        let private_key = std::str::from_utf8(&plaintext)
            .map_err(|_| invalid("data", "decrypted private key is not UTF-8"))?;
        let account = Account::create_from_private_key(private_key, envelope.network_type)?;
        Ok(AccountQr::new(
            account,
            password.clone(),
            envelope.network_type,
            envelope.chain_id,
        ))
    }
}
