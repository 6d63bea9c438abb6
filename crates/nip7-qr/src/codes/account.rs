use nip7_crypto::Password;
use nip7_sdk::{Account, NetworkType};

use crate::schemas::ExportAccountSchema;

use super::QrPayload;

/// A password-protected private key export.
#[derive(Debug, Clone)]
pub struct AccountQr {
    pub account: Account,
    pub password: Password,
    pub network_type: NetworkType,
    pub chain_id: String,
}

impl AccountQr {
    pub fn new(
        account: Account,
        password: Password,
        network_type: NetworkType,
        chain_id: impl Into<String>,
    ) -> Self {
        Self {
            account,
            password,
            network_type,
            chain_id: chain_id.into(),
        }
    }
}

impl QrPayload for AccountQr {
    type Schema = ExportAccountSchema;

    fn network_type(&self) -> NetworkType {
        self.network_type
    }

    fn chain_id(&self) -> &str {
        &self.chain_id
    }
}
