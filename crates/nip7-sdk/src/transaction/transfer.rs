use crate::account::PublicAccount;
use crate::address::{Address, ADDRESS_LENGTH};
use crate::deadline::Deadline;
use crate::error::SdkError;
use crate::message::Message;
use crate::mosaic::{Mosaic, UnresolvedMosaicId};
use crate::network::NetworkType;

use super::aggregate::{InnerBody, InnerTransaction};
use super::header::{TransactionHeader, HEADER_SIZE};
use super::reader::Reader;
use super::TransactionType;

pub const TRANSFER_VERSION: u8 = 1;

/// Transfer fields, shared by top-level and embedded transfers.
///
/// Layout: [recipient:25][message_size:2][mosaics_count:1][message][mosaics]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferBody {
    recipient: Address,
    mosaics: Vec<Mosaic>,
    message: Option<Message>,
}

impl TransferBody {
    pub fn new(
        recipient: Address,
        mosaics: Vec<Mosaic>,
        message: Option<Message>,
    ) -> Result<Self, SdkError> {
        if mosaics.len() > u8::MAX as usize {
            return Err(SdkError::TooManyMosaics(mosaics.len()));
        }
        if let Some(message) = &message {
            if message.size() > u16::MAX as usize {
                return Err(SdkError::MessageTooLong(message.payload.len()));
            }
        }
        Ok(Self {
            recipient,
            mosaics,
            message,
        })
    }

    pub fn recipient(&self) -> &Address {
        &self.recipient
    }

    pub fn mosaics(&self) -> &[Mosaic] {
        &self.mosaics
    }

    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    pub(crate) fn encoded_len(&self) -> usize {
        let message_size = self.message.as_ref().map_or(0, Message::size);
        ADDRESS_LENGTH + 2 + 1 + message_size + 16 * self.mosaics.len()
    }

    pub(crate) fn write(&self, out: &mut Vec<u8>) {
        let message_size = self.message.as_ref().map_or(0, Message::size);
        out.extend_from_slice(self.recipient.as_bytes());
        out.extend_from_slice(&(message_size as u16).to_le_bytes());
        out.push(self.mosaics.len() as u8);
        if let Some(message) = &self.message {
            out.push(message.message_type);
            out.extend_from_slice(&message.payload);
        }
        for mosaic in &self.mosaics {
            out.extend_from_slice(&mosaic.id.0.to_le_bytes());
            out.extend_from_slice(&mosaic.amount.to_le_bytes());
        }
    }

    /// Decode a body that must span all of `bytes`.
    pub(crate) fn read(bytes: &[u8]) -> Result<Self, SdkError> {
        let mut reader = Reader::new(bytes);
        let recipient = Address::from_bytes(reader.take(ADDRESS_LENGTH)?)?;
        let message_size = reader.u16()? as usize;
        let mosaics_count = reader.u8()? as usize;

        let message = if message_size == 0 {
            None
        } else {
            let message_type = reader.u8()?;
            let payload = reader.take(message_size - 1)?.to_vec();
            Some(Message {
                message_type,
                payload,
            })
        };

        let mut mosaics = Vec::with_capacity(mosaics_count);
        for _ in 0..mosaics_count {
            let id = UnresolvedMosaicId(reader.u64()?);
            let amount = reader.u64()?;
            mosaics.push(Mosaic { id, amount });
        }

        if !reader.is_empty() {
            return Err(SdkError::TrailingBytes("transfer"));
        }
        Ok(Self {
            recipient,
            mosaics,
            message,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferTransaction {
    pub header: TransactionHeader,
    pub body: TransferBody,
}

impl TransferTransaction {
    /// Build an unsigned transfer.
    pub fn create(
        deadline: Deadline,
        recipient: Address,
        mosaics: Vec<Mosaic>,
        message: Message,
        network_type: NetworkType,
    ) -> Result<Self, SdkError> {
        Ok(Self {
            header: TransactionHeader::unsigned(TRANSFER_VERSION, network_type, deadline),
            body: TransferBody::new(recipient, mosaics, Some(message))?,
        })
    }

    /// Embed this transfer in an aggregate, signed by `signer`.
    pub fn to_aggregate(&self, signer: &PublicAccount) -> InnerTransaction {
        InnerTransaction {
            signer: *signer.public_key(),
            version: self.header.version,
            network_type: self.header.network_type,
            body: InnerBody::Transfer(self.body.clone()),
        }
    }

    pub(crate) fn write(&self, out: &mut Vec<u8>) {
        let size = HEADER_SIZE + self.body.encoded_len();
        self.header.write(out, size, TransactionType::Transfer);
        self.body.write(out);
    }
}
