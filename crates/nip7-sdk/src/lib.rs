//! Chain model consumed by NIP-7 QR codes.
//!
//! Covers the slice of the catapult SDK a QR payload touches: network
//! identifiers, accounts and addresses, namespace ids, and the binary layout
//! of transfer and aggregate transactions. Signing and announcing are left
//! to the wallet.

pub mod account;
pub mod address;
pub mod deadline;
pub mod error;
pub mod message;
pub mod mosaic;
pub mod network;
pub mod transaction;

pub use account::{Account, PublicAccount, KEY_LENGTH};
pub use address::{Address, ADDRESS_LENGTH};
pub use deadline::{Deadline, NEMESIS_EPOCH_MS};
pub use error::SdkError;
pub use message::Message;
pub use mosaic::{Mosaic, NamespaceId, UnresolvedMosaicId};
pub use network::NetworkType;
pub use transaction::{
    AggregateTransaction, Cosignature, InnerBody, InnerTransaction, OpaqueTransaction,
    Transaction, TransactionHeader, TransactionType, TransferBody, TransferTransaction,
};
