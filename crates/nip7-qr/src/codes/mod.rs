//! The six NIP-7 code types.
//!
//! Each variant owns its network type, chain id and one domain object. The
//! [`QrPayload`] trait ties a variant to its [`DataSchema`] so the envelope
//! plumbing is written once; [`QrCode`] is the closed sum returned by the
//! dispatcher.

mod account;
mod contact;
mod cosignature;
mod mnemonic;
mod object;
mod transaction;

pub use account::AccountQr;
pub use contact::ContactQr;
pub use cosignature::CosignatureQr;
pub use mnemonic::MnemonicQr;
pub use object::ObjectQr;
pub use transaction::TransactionQr;

use nip7_crypto::Password;
use nip7_sdk::NetworkType;

use crate::envelope::Envelope;
use crate::error::QrError;
use crate::render::{CodeRenderer, PayloadEncoding};
use crate::schemas::DataSchema;
use crate::types::QrCodeType;

pub trait QrPayload: Sized {
    type Schema: DataSchema<Code = Self>;

    fn network_type(&self) -> NetworkType;

    fn chain_id(&self) -> &str;

    fn code_type(&self) -> QrCodeType {
        Self::Schema::CODE_TYPE
    }

    fn envelope(&self) -> Result<Envelope, QrError> {
        Ok(Envelope::new(
            Self::Schema::CODE_TYPE,
            self.network_type(),
            self.chain_id(),
            Self::Schema::data(self)?,
        ))
    }

    fn to_json(&self) -> Result<String, QrError> {
        self.envelope()?.to_json()
    }

    fn to_base64(&self) -> Result<String, QrError> {
        self.envelope()?.to_base64()
    }

    fn to_visual_code<R: CodeRenderer>(
        &self,
        renderer: &R,
        encoding: PayloadEncoding,
    ) -> Result<R::Image, QrError> {
        self.envelope()?.to_visual_code(renderer, encoding)
    }

    /// Parse JSON that must carry this variant's type.
    fn from_json(json: &str, password: Option<&Password>) -> Result<Self, QrError> {
        Self::Schema::parse(json, password)
    }
}

/// Any NIP-7 code.
#[derive(Debug, Clone)]
pub enum QrCode {
    Contact(ContactQr),
    Account(AccountQr),
    Object(ObjectQr),
    Transaction(TransactionQr),
    Cosignature(CosignatureQr),
    Mnemonic(MnemonicQr),
}

impl QrCode {
    pub fn code_type(&self) -> QrCodeType {
        match self {
            Self::Contact(_) => QrCodeType::AddContact,
            Self::Account(_) => QrCodeType::ExportAccount,
            Self::Object(_) => QrCodeType::ExportObject,
            Self::Transaction(_) => QrCodeType::RequestTransaction,
            Self::Cosignature(_) => QrCodeType::RequestCosignature,
            Self::Mnemonic(_) => QrCodeType::ExportMnemonic,
        }
    }

    pub fn network_type(&self) -> NetworkType {
        match self {
            Self::Contact(code) => code.network_type,
            Self::Account(code) => code.network_type,
            Self::Object(code) => code.network_type,
            Self::Transaction(code) => code.network_type,
            Self::Cosignature(code) => code.network_type,
            Self::Mnemonic(code) => code.network_type,
        }
    }

    pub fn chain_id(&self) -> &str {
        match self {
            Self::Contact(code) => &code.chain_id,
            Self::Account(code) => &code.chain_id,
            Self::Object(code) => &code.chain_id,
            Self::Transaction(code) => &code.chain_id,
            Self::Cosignature(code) => &code.chain_id,
            Self::Mnemonic(code) => &code.chain_id,
        }
    }

    pub fn envelope(&self) -> Result<Envelope, QrError> {
        match self {
            Self::Contact(code) => code.envelope(),
            Self::Account(code) => code.envelope(),
            Self::Object(code) => code.envelope(),
            Self::Transaction(code) => code.envelope(),
            Self::Cosignature(code) => code.envelope(),
            Self::Mnemonic(code) => code.envelope(),
        }
    }

    pub fn to_json(&self) -> Result<String, QrError> {
        self.envelope()?.to_json()
    }

    pub fn to_base64(&self) -> Result<String, QrError> {
        self.envelope()?.to_base64()
    }

    pub fn to_visual_code<R: CodeRenderer>(
        &self,
        renderer: &R,
        encoding: PayloadEncoding,
    ) -> Result<R::Image, QrError> {
        self.envelope()?.to_visual_code(renderer, encoding)
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident($code:ty)),* $(,)?) => {
        $(
            impl From<$code> for QrCode {
                fn from(code: $code) -> Self {
                    Self::$variant(code)
                }
            }
        )*
    };
}

impl_from_variant!(
    Contact(ContactQr),
    Account(AccountQr),
    Object(ObjectQr),
    Transaction(TransactionQr),
    Cosignature(CosignatureQr),
    Mnemonic(MnemonicQr),
);
