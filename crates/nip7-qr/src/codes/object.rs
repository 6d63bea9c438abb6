use nip7_sdk::NetworkType;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::envelope::invalid;
use crate::error::QrError;
use crate::schemas::ExportObjectSchema;

use super::QrPayload;

/// An arbitrary JSON object carried verbatim.
///
/// The envelope's `data` must be an object, so top-level arrays and scalars
/// cannot be exported; wrap them in an object field instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectQr {
    pub object: Map<String, Value>,
    pub network_type: NetworkType,
    pub chain_id: String,
}

impl ObjectQr {
    pub fn new(
        object: Map<String, Value>,
        network_type: NetworkType,
        chain_id: impl Into<String>,
    ) -> Self {
        Self {
            object,
            network_type,
            chain_id: chain_id.into(),
        }
    }

    /// Export any value that serializes to a JSON object.
    pub fn from_serializable<T: Serialize + ?Sized>(
        value: &T,
        network_type: NetworkType,
        chain_id: impl Into<String>,
    ) -> Result<Self, QrError> {
        match serde_json::to_value(value)? {
            Value::Object(object) => Ok(Self::new(object, network_type, chain_id)),
            _ => Err(invalid("data", "exported value must serialize to an object")),
        }
    }

    pub fn deserialize_into<T: DeserializeOwned>(&self) -> Result<T, QrError> {
        Ok(serde_json::from_value(Value::Object(self.object.clone()))?)
    }
}

impl QrPayload for ObjectQr {
    type Schema = ExportObjectSchema;

    fn network_type(&self) -> NetworkType {
        self.network_type
    }

    fn chain_id(&self) -> &str {
        &self.chain_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Invoice {
        id: u32,
        memo: String,
    }

    #[test]
    fn typed_object_round_trip() {
        let invoice = Invoice {
            id: 7,
            memo: "coffee".into(),
        };
        let code = ObjectQr::from_serializable(&invoice, NetworkType::MainNet, "").unwrap();
        assert_eq!(code.deserialize_into::<Invoice>().unwrap(), invoice);
    }

    #[test]
    fn rejects_non_object_values() {
        assert!(matches!(
            ObjectQr::from_serializable(&[1, 2, 3], NetworkType::MainNet, ""),
            Err(QrError::InvalidField { field: "data", .. })
        ));
    }
}
