//! The JSON envelope shared by every NIP-7 code.
//!
//! Wire format:
//! `{"v":3,"type":<tag>,"network_id":<u8>,"chain_id":"<hex>","data":{...}}`

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use nip7_sdk::NetworkType;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::QrError;
use crate::render::{CodeRenderer, PayloadEncoding};
use crate::types::{QrCodeType, NIP7_VERSION};

/// A fully populated envelope. `data` is opaque here; its shape belongs to
/// the schema selected by `code_type`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope {
    #[serde(rename = "v")]
    pub version: u8,
    #[serde(rename = "type")]
    pub code_type: QrCodeType,
    #[serde(rename = "network_id")]
    pub network_type: NetworkType,
    pub chain_id: String,
    pub data: Value,
}

impl Envelope {
    pub fn new(
        code_type: QrCodeType,
        network_type: NetworkType,
        chain_id: impl Into<String>,
        data: Value,
    ) -> Self {
        Self {
            version: NIP7_VERSION,
            code_type,
            network_type,
            chain_id: chain_id.into(),
            data,
        }
    }

    pub fn to_json(&self) -> Result<String, QrError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Standard (padded) Base64 of the JSON form.
    pub fn to_base64(&self) -> Result<String, QrError> {
        Ok(STANDARD.encode(self.to_json()?))
    }

    pub fn to_visual_code<R: CodeRenderer>(
        &self,
        renderer: &R,
        encoding: PayloadEncoding,
    ) -> Result<R::Image, QrError> {
        let payload = match encoding {
            PayloadEncoding::Json => self.to_json()?,
            PayloadEncoding::Base64 => self.to_base64()?,
        };
        renderer
            .encode(&payload)
            .map_err(|e| QrError::Render(e.to_string()))
    }

    /// Parse and validate an envelope.
    ///
    /// Checks, in order: non-empty input, valid JSON object, recognized
    /// `type`, then `network_id`, `chain_id` and `data`. A missing `v` is read
    /// as the current revision.
    pub fn from_json(json: &str) -> Result<Self, QrError> {
        if json.is_empty() {
            return Err(QrError::EmptyInput);
        }
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, QrError> {
        let Value::Object(mut obj) = value else {
            return Err(QrError::NotAnObject);
        };

        let code_type = match obj.get("type") {
            Some(raw) => QrCodeType::from_value(raw)?,
            None => return Err(QrError::MissingType),
        };

        let version = match obj.get("v") {
            None | Some(Value::Null) => NIP7_VERSION,
            Some(raw) => raw
                .as_u64()
                .and_then(|v| u8::try_from(v).ok())
                .ok_or_else(|| invalid("v", format!("expected small integer, got {}", raw)))?,
        };

        let network_type = read_network(&obj)?;

        let chain_id = obj
            .get("chain_id")
            .ok_or(QrError::MissingField("chain_id"))?
            .as_str()
            .ok_or_else(|| invalid("chain_id", "expected string"))?
            .to_string();

        let data = match obj.remove("data") {
            Some(data @ Value::Object(_)) => data,
            Some(_) => return Err(invalid("data", "expected object")),
            None => return Err(QrError::MissingField("data")),
        };

        Ok(Self {
            version,
            code_type,
            network_type,
            chain_id,
            data,
        })
    }

    /// Fail unless this envelope carries `expected`.
    pub fn expect_type(self, expected: QrCodeType) -> Result<Self, QrError> {
        if self.code_type != expected {
            return Err(QrError::TypeMismatch {
                expected,
                got: self.code_type,
            });
        }
        Ok(self)
    }

    /// A required string field of `data`.
    pub fn data_str(&self, field: &'static str) -> Result<&str, QrError> {
        self.data
            .get(field)
            .ok_or(QrError::MissingField(field))?
            .as_str()
            .ok_or_else(|| invalid(field, "expected string"))
    }
}

fn read_network(obj: &Map<String, Value>) -> Result<NetworkType, QrError> {
    let raw = obj
        .get("network_id")
        .ok_or(QrError::MissingField("network_id"))?;
    let id = raw
        .as_u64()
        .and_then(|v| u8::try_from(v).ok())
        .ok_or_else(|| invalid("network_id", format!("expected integer, got {}", raw)))?;
    NetworkType::try_from(id).map_err(|e| invalid("network_id", e.to_string()))
}

pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> QrError {
    QrError::InvalidField {
        field,
        reason: reason.into(),
    }
}
