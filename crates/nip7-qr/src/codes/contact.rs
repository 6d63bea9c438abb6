use nip7_sdk::{NetworkType, PublicAccount};

use crate::schemas::AddContactSchema;

use super::QrPayload;

/// Invites the scanner to add `account` to their contacts under `name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactQr {
    pub name: String,
    pub account: PublicAccount,
    pub network_type: NetworkType,
    pub chain_id: String,
}

impl ContactQr {
    pub fn new(
        name: impl Into<String>,
        account: PublicAccount,
        network_type: NetworkType,
        chain_id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            account,
            network_type,
            chain_id: chain_id.into(),
        }
    }
}

impl QrPayload for ContactQr {
    type Schema = AddContactSchema;

    fn network_type(&self) -> NetworkType {
        self.network_type
    }

    fn chain_id(&self) -> &str {
        &self.chain_id
    }
}
