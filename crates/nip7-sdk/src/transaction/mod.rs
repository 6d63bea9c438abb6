//! Catapult transaction binary layout.
//!
//! Top-level layout (little endian):
//! [size:4][signature:64][signer:32][version:2][type:2][max_fee:8][deadline:8][body]
//!
//! Transfers and aggregates are decoded field by field. Every other type is
//! kept as an opaque body, so any well-framed payload re-serializes to the
//! same bytes.

mod aggregate;
mod header;
mod reader;
mod transfer;

pub use aggregate::{
    AggregateTransaction, Cosignature, InnerBody, InnerTransaction, AGGREGATE_VERSION,
    COSIGNATURE_SIZE,
};
pub use header::{TransactionHeader, SIGNATURE_LENGTH};
pub use transfer::{TransferBody, TransferTransaction, TRANSFER_VERSION};

use crate::error::SdkError;
use crate::network::NetworkType;

use header::HEADER_SIZE;
use reader::Reader;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionType {
    Transfer,
    AggregateComplete,
    AggregateBonded,
    Other(u16),
}

impl From<u16> for TransactionType {
    fn from(value: u16) -> Self {
        match value {
            0x4154 => Self::Transfer,
            0x4141 => Self::AggregateComplete,
            0x4241 => Self::AggregateBonded,
            other => Self::Other(other),
        }
    }
}

impl From<TransactionType> for u16 {
    fn from(value: TransactionType) -> Self {
        match value {
            TransactionType::Transfer => 0x4154,
            TransactionType::AggregateComplete => 0x4141,
            TransactionType::AggregateBonded => 0x4241,
            TransactionType::Other(other) => other,
        }
    }
}

/// A top-level transaction of a type this crate does not model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpaqueTransaction {
    pub header: TransactionHeader,
    pub transaction_type: TransactionType,
    pub body: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transaction {
    Transfer(TransferTransaction),
    Aggregate(AggregateTransaction),
    Opaque(OpaqueTransaction),
}

impl Transaction {
    pub fn header(&self) -> &TransactionHeader {
        match self {
            Self::Transfer(tx) => &tx.header,
            Self::Aggregate(tx) => &tx.header,
            Self::Opaque(tx) => &tx.header,
        }
    }

    pub fn transaction_type(&self) -> TransactionType {
        match self {
            Self::Transfer(_) => TransactionType::Transfer,
            Self::Aggregate(tx) => tx.transaction_type(),
            Self::Opaque(tx) => tx.transaction_type,
        }
    }

    pub fn network_type(&self) -> NetworkType {
        self.header().network_type
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        match self {
            Self::Transfer(tx) => tx.write(&mut out),
            Self::Aggregate(tx) => tx.write(&mut out),
            Self::Opaque(tx) => {
                tx.header
                    .write(&mut out, HEADER_SIZE + tx.body.len(), tx.transaction_type);
                out.extend_from_slice(&tx.body);
            }
        }
        out
    }

    /// Canonical serialization as upper-case hex.
    pub fn serialize(&self) -> String {
        hex::encode_upper(self.to_bytes())
    }

    /// Parse a hex payload produced by [`Transaction::serialize`] or any
    /// catapult SDK.
    pub fn deserialize(payload: &str) -> Result<Self, SdkError> {
        Self::from_bytes(&hex::decode(payload)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SdkError> {
        let mut reader = Reader::new(bytes);
        let declared = reader.u32()? as usize;
        if declared != bytes.len() {
            return Err(SdkError::SizeMismatch {
                declared,
                actual: bytes.len(),
            });
        }
        let (header, transaction_type) = TransactionHeader::read(&mut reader)?;
        let body = reader.rest();

        let transaction = match transaction_type {
            TransactionType::Transfer => Self::Transfer(TransferTransaction {
                header,
                body: TransferBody::read(body)?,
            }),
            TransactionType::AggregateComplete => {
                Self::Aggregate(AggregateTransaction::read(header, false, body)?)
            }
            TransactionType::AggregateBonded => {
                Self::Aggregate(AggregateTransaction::read(header, true, body)?)
            }
            TransactionType::Other(_) => Self::Opaque(OpaqueTransaction {
                header,
                transaction_type,
                body: body.to_vec(),
            }),
        };
        Ok(transaction)
    }
}

impl From<TransferTransaction> for Transaction {
    fn from(tx: TransferTransaction) -> Self {
        Self::Transfer(tx)
    }
}

impl From<AggregateTransaction> for Transaction {
    fn from(tx: AggregateTransaction) -> Self {
        Self::Aggregate(tx)
    }
}
