use thiserror::Error;

#[derive(Debug, Error)]
pub enum SdkError {
    #[error("Invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("Invalid key length: expected {expected} bytes, got {got}")]
    InvalidKeyLength { expected: usize, got: usize },

    #[error("Invalid address length: expected {expected} bytes, got {got}")]
    InvalidAddressLength { expected: usize, got: usize },

    #[error("Unknown network type: {0}")]
    UnknownNetworkType(u8),

    #[error("Transaction payload too short: needed {needed} bytes at offset {offset}")]
    Truncated { offset: usize, needed: usize },

    #[error("Transaction size field says {declared} bytes, payload has {actual}")]
    SizeMismatch { declared: usize, actual: usize },

    #[error("Trailing bytes in {0} body")]
    TrailingBytes(&'static str),

    #[error("Invalid cosignatures block: {0} bytes is not a multiple of 96")]
    InvalidCosignatures(usize),

    #[error("Message too long: {0} bytes")]
    MessageTooLong(usize),

    #[error("Too many mosaics: {0}")]
    TooManyMosaics(usize),

    #[error("Invalid namespace name: \"{0}\"")]
    InvalidNamespaceName(String),

    #[error("Random number generation failed: {0}")]
    RngFailed(String),
}
