use crate::account::KEY_LENGTH;
use crate::deadline::Deadline;
use crate::error::SdkError;
use crate::network::NetworkType;

use super::header::{split_version, version_field, TransactionHeader, HEADER_SIZE, SIGNATURE_LENGTH};
use super::reader::Reader;
use super::transfer::TransferBody;
use super::TransactionType;

pub const AGGREGATE_VERSION: u8 = 1;

/// signer + signature
pub const COSIGNATURE_SIZE: usize = KEY_LENGTH + SIGNATURE_LENGTH;

/// size + signer + version + type
const EMBEDDED_HEADER_SIZE: usize = 4 + KEY_LENGTH + 2 + 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cosignature {
    pub signer: [u8; KEY_LENGTH],
    pub signature: [u8; SIGNATURE_LENGTH],
}

/// Body of an embedded transaction. Types other than transfer are kept as
/// raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InnerBody {
    Transfer(TransferBody),
    Opaque {
        transaction_type: TransactionType,
        bytes: Vec<u8>,
    },
}

impl InnerBody {
    pub fn transaction_type(&self) -> TransactionType {
        match self {
            Self::Transfer(_) => TransactionType::Transfer,
            Self::Opaque {
                transaction_type, ..
            } => *transaction_type,
        }
    }

    fn encoded_len(&self) -> usize {
        match self {
            Self::Transfer(body) => body.encoded_len(),
            Self::Opaque { bytes, .. } => bytes.len(),
        }
    }
}

/// A transaction embedded in an aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InnerTransaction {
    pub signer: [u8; KEY_LENGTH],
    pub version: u8,
    pub network_type: NetworkType,
    pub body: InnerBody,
}

impl InnerTransaction {
    fn encoded_len(&self) -> usize {
        EMBEDDED_HEADER_SIZE + self.body.encoded_len()
    }

    fn write(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&(self.encoded_len() as u32).to_le_bytes());
        out.extend_from_slice(&self.signer);
        out.extend_from_slice(&version_field(self.version, self.network_type).to_le_bytes());
        out.extend_from_slice(&u16::from(self.body.transaction_type()).to_le_bytes());
        match &self.body {
            InnerBody::Transfer(body) => body.write(out),
            InnerBody::Opaque { bytes, .. } => out.extend_from_slice(bytes),
        }
    }

    fn read(reader: &mut Reader<'_>) -> Result<Self, SdkError> {
        let size = reader.u32()? as usize;
        let body_len = size
            .checked_sub(EMBEDDED_HEADER_SIZE)
            .ok_or(SdkError::SizeMismatch {
                declared: size,
                actual: EMBEDDED_HEADER_SIZE,
            })?;
        let signer = reader.array::<KEY_LENGTH>()?;
        let (version, network_type) = split_version(reader.u16()?)?;
        let transaction_type = TransactionType::from(reader.u16()?);
        let bytes = reader.take(body_len)?;

        let body = match transaction_type {
            TransactionType::Transfer => InnerBody::Transfer(TransferBody::read(bytes)?),
            other => InnerBody::Opaque {
                transaction_type: other,
                bytes: bytes.to_vec(),
            },
        };
        Ok(Self {
            signer,
            version,
            network_type,
            body,
        })
    }
}

/// Aggregate complete or bonded transaction.
///
/// Layout after the header: [payload_size:4][embedded*][cosignatures*]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateTransaction {
    pub header: TransactionHeader,
    pub bonded: bool,
    pub inner_transactions: Vec<InnerTransaction>,
    pub cosignatures: Vec<Cosignature>,
}

impl AggregateTransaction {
    /// Aggregate that needs cosignatures collected on chain.
    pub fn create_bonded(
        deadline: Deadline,
        inner_transactions: Vec<InnerTransaction>,
        network_type: NetworkType,
    ) -> Self {
        Self::create(true, deadline, inner_transactions, network_type)
    }

    /// Aggregate signed by every party up front.
    pub fn create_complete(
        deadline: Deadline,
        inner_transactions: Vec<InnerTransaction>,
        network_type: NetworkType,
    ) -> Self {
        Self::create(false, deadline, inner_transactions, network_type)
    }

    fn create(
        bonded: bool,
        deadline: Deadline,
        inner_transactions: Vec<InnerTransaction>,
        network_type: NetworkType,
    ) -> Self {
        Self {
            header: TransactionHeader::unsigned(AGGREGATE_VERSION, network_type, deadline),
            bonded,
            inner_transactions,
            cosignatures: Vec::new(),
        }
    }

    pub fn transaction_type(&self) -> TransactionType {
        if self.bonded {
            TransactionType::AggregateBonded
        } else {
            TransactionType::AggregateComplete
        }
    }

    fn payload_len(&self) -> usize {
        self.inner_transactions
            .iter()
            .map(InnerTransaction::encoded_len)
            .sum()
    }

    pub(crate) fn write(&self, out: &mut Vec<u8>) {
        let payload_len = self.payload_len();
        let size = HEADER_SIZE + 4 + payload_len + COSIGNATURE_SIZE * self.cosignatures.len();
        self.header.write(out, size, self.transaction_type());
        out.extend_from_slice(&(payload_len as u32).to_le_bytes());
        for inner in &self.inner_transactions {
            inner.write(out);
        }
        for cosignature in &self.cosignatures {
            out.extend_from_slice(&cosignature.signer);
            out.extend_from_slice(&cosignature.signature);
        }
    }

    pub(crate) fn read(
        header: TransactionHeader,
        bonded: bool,
        body: &[u8],
    ) -> Result<Self, SdkError> {
        let mut reader = Reader::new(body);
        let payload_len = reader.u32()? as usize;
        let mut payload = Reader::new(reader.take(payload_len)?);

        let mut inner_transactions = Vec::new();
        while !payload.is_empty() {
            inner_transactions.push(InnerTransaction::read(&mut payload)?);
        }

        let rest = reader.rest();
        if rest.len() % COSIGNATURE_SIZE != 0 {
            return Err(SdkError::InvalidCosignatures(rest.len()));
        }
        let cosignatures = rest
            .chunks_exact(COSIGNATURE_SIZE)
            .map(|chunk| {
                let mut cosignature = Cosignature {
                    signer: [0u8; KEY_LENGTH],
                    signature: [0u8; SIGNATURE_LENGTH],
                };
                cosignature.signer.copy_from_slice(&chunk[..KEY_LENGTH]);
                cosignature.signature.copy_from_slice(&chunk[KEY_LENGTH..]);
                cosignature
            })
            .collect();

        Ok(Self {
            header,
            bonded,
            inner_transactions,
            cosignatures,
        })
    }
}
