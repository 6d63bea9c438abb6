use nip7_crypto::Password;
use serde_json::{Map, Value};

use crate::codes::ObjectQr;
use crate::envelope::{invalid, Envelope};
use crate::error::QrError;
use crate::types::QrCodeType;

use super::DataSchema;

/// `data`: the exported object, verbatim.
pub struct ExportObjectSchema;

impl DataSchema for ExportObjectSchema {
    type Code = ObjectQr;
    const CODE_TYPE: QrCodeType = QrCodeType::ExportObject;

    fn data(code: &ObjectQr) -> Result<Value, QrError> {
        Ok(Value::Object(code.object.clone()))
    }

    fn from_envelope(envelope: Envelope, _password: Option<&Password>) -> Result<ObjectQr, QrError> {
        let object: Map<String, Value> = match envelope.data {
            Value::Object(object) => object,
            _ => return Err(invalid("data", "expected object")),
        };
        Ok(ObjectQr::new(object, envelope.network_type, envelope.chain_id))
    }
}
