use nip7_sdk::{AggregateTransaction, NetworkType, Transaction};

use crate::error::QrError;
use crate::schemas::RequestCosignatureSchema;

use super::QrPayload;

/// Asks the scanner to cosign a pending aggregate bonded transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CosignatureQr {
    pub transaction: AggregateTransaction,
    pub network_type: NetworkType,
    pub chain_id: String,
}

impl CosignatureQr {
    /// Fails with [`QrError::NotAggregateBonded`] for aggregate complete
    /// transactions, which have nothing left to cosign.
    pub fn new(
        transaction: AggregateTransaction,
        network_type: NetworkType,
        chain_id: impl Into<String>,
    ) -> Result<Self, QrError> {
        if !transaction.bonded {
            return Err(QrError::NotAggregateBonded(transaction.transaction_type()));
        }
        Ok(Self {
            transaction,
            network_type,
            chain_id: chain_id.into(),
        })
    }

    /// Upper-case hex of the wrapped transaction.
    pub fn serialize_transaction(&self) -> String {
        Transaction::Aggregate(self.transaction.clone()).serialize()
    }
}

impl QrPayload for CosignatureQr {
    type Schema = RequestCosignatureSchema;

    fn network_type(&self) -> NetworkType {
        self.network_type
    }

    fn chain_id(&self) -> &str {
        &self.chain_id
    }
}
