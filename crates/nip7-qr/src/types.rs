use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::QrError;

/// Envelope format revision written into `v`.
pub const NIP7_VERSION: u8 = 3;

/// The `type` discriminator of a NIP-7 envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum QrCodeType {
    AddContact = 1,
    ExportAccount = 2,
    RequestTransaction = 3,
    RequestCosignature = 4,
    ExportMnemonic = 5,
    ExportObject = 6,
}

impl QrCodeType {
    pub const ALL: [QrCodeType; 6] = [
        Self::AddContact,
        Self::ExportAccount,
        Self::RequestTransaction,
        Self::RequestCosignature,
        Self::ExportMnemonic,
        Self::ExportObject,
    ];

    /// Whether the `data` field is encrypted under a password.
    pub fn is_encrypted(self) -> bool {
        matches!(self, Self::ExportAccount | Self::ExportMnemonic)
    }

    /// Read the discriminator out of a raw `type` value.
    ///
    /// Anything other than a known integer tag is unrecognized; the error
    /// carries the raw value so scanners can report what they saw.
    pub fn from_value(value: &Value) -> Result<Self, QrError> {
        match value {
            Value::Null => Err(QrError::MissingType),
            Value::Number(n) => match n.as_u64().and_then(|n| u8::try_from(n).ok()) {
                Some(tag) => Self::try_from(tag),
                None => Err(QrError::UnrecognizedType(n.to_string())),
            },
            Value::String(s) => Err(QrError::UnrecognizedType(s.clone())),
            other => Err(QrError::UnrecognizedType(other.to_string())),
        }
    }
}

impl TryFrom<u8> for QrCodeType {
    type Error = QrError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            1 => Ok(Self::AddContact),
            2 => Ok(Self::ExportAccount),
            3 => Ok(Self::RequestTransaction),
            4 => Ok(Self::RequestCosignature),
            5 => Ok(Self::ExportMnemonic),
            6 => Ok(Self::ExportObject),
            other => Err(QrError::UnrecognizedType(other.to_string())),
        }
    }
}

impl From<QrCodeType> for u8 {
    fn from(code_type: QrCodeType) -> Self {
        code_type as u8
    }
}

impl fmt::Display for QrCodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::AddContact => "AddContact",
            Self::ExportAccount => "ExportAccount",
            Self::RequestTransaction => "RequestTransaction",
            Self::RequestCosignature => "RequestCosignature",
            Self::ExportMnemonic => "ExportMnemonic",
            Self::ExportObject => "ExportObject",
        };
        f.write_str(name)
    }
}
