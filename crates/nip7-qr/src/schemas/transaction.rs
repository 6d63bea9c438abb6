use nip7_crypto::Password;
use nip7_sdk::Transaction;
use serde_json::{json, Value};

use crate::codes::TransactionQr;
use crate::envelope::Envelope;
use crate::error::QrError;
use crate::types::QrCodeType;

use super::DataSchema;

/// `data`: `{ "payload" }`, the transaction's canonical hex.
pub struct RequestTransactionSchema;

impl DataSchema for RequestTransactionSchema {
    type Code = TransactionQr;
    const CODE_TYPE: QrCodeType = QrCodeType::RequestTransaction;

    fn data(code: &TransactionQr) -> Result<Value, QrError> {
        Ok(json!({ "payload": code.transaction.serialize() }))
    }

    fn from_envelope(
        envelope: Envelope,
        _password: Option<&Password>,
    ) -> Result<TransactionQr, QrError> {
        let transaction = Transaction::deserialize(envelope.data_str("payload")?)?;
        Ok(TransactionQr::new(
            transaction,
            envelope.network_type,
            envelope.chain_id,
        ))
    }
}
