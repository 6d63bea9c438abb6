//! Password encryption for NIP-7 secret exports.
//!
//! Account and mnemonic export codes carry their secret encrypted under a
//! user password: Argon2id stretches the password into an AES-256-GCM key.

pub mod cipher;
pub mod error;
pub mod kdf;
pub mod password;
pub mod types;

pub use cipher::{decrypt, encrypt, EncryptedPayload};
pub use error::CryptoError;
pub use kdf::derive_key;
pub use password::Password;
pub use types::{
    AES_GCM_IV_LENGTH, AES_GCM_TAG_LENGTH, AES_KEY_LENGTH, MIN_PASSWORD_LENGTH, SALT_LENGTH,
};
