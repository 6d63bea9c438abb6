use bip39::Mnemonic;
use nip7_crypto::Password;
use nip7_sdk::NetworkType;

use crate::schemas::ExportMnemonicSchema;

use super::QrPayload;

/// A password-protected BIP-39 phrase export.
#[derive(Debug, Clone)]
pub struct MnemonicQr {
    pub mnemonic: Mnemonic,
    pub password: Password,
    pub network_type: NetworkType,
    pub chain_id: String,
}

impl MnemonicQr {
    pub fn new(
        mnemonic: Mnemonic,
        password: Password,
        network_type: NetworkType,
        chain_id: impl Into<String>,
    ) -> Self {
        Self {
            mnemonic,
            password,
            network_type,
            chain_id: chain_id.into(),
        }
    }
}

impl QrPayload for MnemonicQr {
    type Schema = ExportMnemonicSchema;

    fn network_type(&self) -> NetworkType {
        self.network_type
    }

    fn chain_id(&self) -> &str {
        &self.chain_id
    }
}
