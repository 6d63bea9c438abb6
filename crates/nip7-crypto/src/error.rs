use thiserror::Error;

#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("Password must be at least {min} characters, got {got}")]
    PasswordTooShort { min: usize, got: usize },

    #[error("Invalid IV length: expected {expected} bytes, got {got}")]
    InvalidIvLength { expected: usize, got: usize },

    #[error("Invalid salt length: expected {expected} bytes, got {got}")]
    InvalidSaltLength { expected: usize, got: usize },

    #[error("Encrypted data too short")]
    DataTooShort,

    #[error("Key derivation failed: {0}")]
    KeyDerivationFailed(String),

    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Decryption failed: wrong password or corrupted data")]
    DecryptionFailed,

    #[error("Random number generation failed: {0}")]
    RngFailed(String),
}
