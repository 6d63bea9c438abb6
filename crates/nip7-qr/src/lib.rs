//! NIP-7 QR codes.
//!
//! Every code is a JSON envelope `{"v","type","network_id","chain_id","data"}`
//! whose `data` shape is fixed by `type`. This crate builds envelopes from
//! accounts, transactions, mnemonics and plain objects, and parses scanned
//! payloads back into them:
//!
//! - [`envelope`]: the shared envelope and its JSON / Base64 / visual forms
//! - [`schemas`]: one [`DataSchema`] per code type
//! - [`codes`]: the six code types and the [`QrCode`] sum over them
//! - [`generator`]: factories and the `from_json` dispatcher
//!
//! Rendering the envelope into an image is delegated to a [`CodeRenderer`].

pub mod codes;
pub mod config;
pub mod envelope;
pub mod error;
pub mod generator;
pub mod render;
pub mod schemas;
pub mod types;

pub use codes::{
    AccountQr, ContactQr, CosignatureQr, MnemonicQr, ObjectQr, QrCode, QrPayload, TransactionQr,
};
pub use config::{QrConfig, DEFAULT_CHAIN_ID, DEFAULT_NETWORK_TYPE};
pub use envelope::Envelope;
pub use error::QrError;
pub use generator::{
    create_add_contact, create_cosignature_request, create_export_account, create_export_mnemonic,
    create_export_object, create_transaction_request, from_base64, from_json, from_visual_code,
};
pub use render::{CodeRenderer, PayloadEncoding};
pub use schemas::DataSchema;
pub use types::{QrCodeType, NIP7_VERSION};

pub use bip39::Mnemonic;
pub use nip7_crypto::Password;
pub use nip7_sdk::NetworkType;
