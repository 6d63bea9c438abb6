use nip7_sdk::{NetworkType, Transaction};

use crate::schemas::RequestTransactionSchema;

use super::QrPayload;

/// Asks the scanner to sign and announce `transaction`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionQr {
    pub transaction: Transaction,
    pub network_type: NetworkType,
    pub chain_id: String,
}

impl TransactionQr {
    pub fn new(
        transaction: Transaction,
        network_type: NetworkType,
        chain_id: impl Into<String>,
    ) -> Self {
        Self {
            transaction,
            network_type,
            chain_id: chain_id.into(),
        }
    }
}

impl QrPayload for TransactionQr {
    type Schema = RequestTransactionSchema;

    fn network_type(&self) -> NetworkType {
        self.network_type
    }

    fn chain_id(&self) -> &str {
        &self.chain_id
    }
}
