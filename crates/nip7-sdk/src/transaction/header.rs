use crate::account::KEY_LENGTH;
use crate::deadline::Deadline;
use crate::error::SdkError;
use crate::network::NetworkType;

use super::reader::Reader;
use super::TransactionType;

pub const SIGNATURE_LENGTH: usize = 64;

/// size + signature + signer + version + type + max_fee + deadline
pub(crate) const HEADER_SIZE: usize = 4 + SIGNATURE_LENGTH + KEY_LENGTH + 2 + 2 + 8 + 8;

/// Fields shared by every top-level transaction.
///
/// Unsigned transactions carry an all-zero signature and signer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionHeader {
    pub signature: [u8; SIGNATURE_LENGTH],
    pub signer: [u8; KEY_LENGTH],
    pub version: u8,
    pub network_type: NetworkType,
    pub max_fee: u64,
    pub deadline: Deadline,
}

impl TransactionHeader {
    pub fn unsigned(version: u8, network_type: NetworkType, deadline: Deadline) -> Self {
        Self {
            signature: [0u8; SIGNATURE_LENGTH],
            signer: [0u8; KEY_LENGTH],
            version,
            network_type,
            max_fee: 0,
            deadline,
        }
    }

    pub fn is_signed(&self) -> bool {
        self.signature.iter().any(|b| *b != 0)
    }

    pub(crate) fn write(&self, out: &mut Vec<u8>, size: usize, transaction_type: TransactionType) {
        out.extend_from_slice(&(size as u32).to_le_bytes());
        out.extend_from_slice(&self.signature);
        out.extend_from_slice(&self.signer);
        out.extend_from_slice(&version_field(self.version, self.network_type).to_le_bytes());
        out.extend_from_slice(&u16::from(transaction_type).to_le_bytes());
        out.extend_from_slice(&self.max_fee.to_le_bytes());
        out.extend_from_slice(&self.deadline.raw().to_le_bytes());
    }

    /// Read the header after the size prefix.
    pub(crate) fn read(reader: &mut Reader<'_>) -> Result<(Self, TransactionType), SdkError> {
        let signature = reader.array::<SIGNATURE_LENGTH>()?;
        let signer = reader.array::<KEY_LENGTH>()?;
        let (version, network_type) = split_version(reader.u16()?)?;
        let transaction_type = TransactionType::from(reader.u16()?);
        let max_fee = reader.u64()?;
        let deadline = Deadline::from_raw(reader.u64()?);
        Ok((
            Self {
                signature,
                signer,
                version,
                network_type,
                max_fee,
                deadline,
            },
            transaction_type,
        ))
    }
}

/// Pack network (high byte) and version (low byte).
pub(crate) fn version_field(version: u8, network_type: NetworkType) -> u16 {
    (u16::from(network_type.as_u8()) << 8) | u16::from(version)
}

pub(crate) fn split_version(field: u16) -> Result<(u8, NetworkType), SdkError> {
    let network_type = NetworkType::try_from((field >> 8) as u8)?;
    Ok(((field & 0xFF) as u8, network_type))
}
