use nip7_crypto::Password;
use nip7_sdk::Transaction;
use serde_json::{json, Value};

use crate::codes::CosignatureQr;
use crate::envelope::Envelope;
use crate::error::QrError;
use crate::types::QrCodeType;

use super::DataSchema;

/// `data`: `{ "payload" }`, an aggregate bonded transaction's hex.
pub struct RequestCosignatureSchema;

impl DataSchema for RequestCosignatureSchema {
    type Code = CosignatureQr;
    const CODE_TYPE: QrCodeType = QrCodeType::RequestCosignature;

    fn data(code: &CosignatureQr) -> Result<Value, QrError> {
        Ok(json!({ "payload": code.serialize_transaction() }))
    }

    fn from_envelope(
        envelope: Envelope,
        _password: Option<&Password>,
    ) -> Result<CosignatureQr, QrError> {
        let transaction = match Transaction::deserialize(envelope.data_str("payload")?)? {
            Transaction::Aggregate(aggregate) => aggregate,
            other => return Err(QrError::NotAggregateBonded(other.transaction_type())),
        };
        CosignatureQr::new(transaction, envelope.network_type, envelope.chain_id)
    }
}
