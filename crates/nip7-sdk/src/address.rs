//! Raw 25-byte addresses.
//!
//! Layout: [network:1][RIPEMD-160(SHA3-256(public key)):20][checksum:4]
//! where the checksum is the first four bytes of SHA3-256 over the first 21.

use std::fmt;

use ripemd::Ripemd160;
use sha3::{Digest, Sha3_256};

use crate::error::SdkError;
use crate::network::NetworkType;

/// Decoded address length in bytes.
pub const ADDRESS_LENGTH: usize = 25;

const CHECKSUM_LENGTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address {
    bytes: [u8; ADDRESS_LENGTH],
}

impl Address {
    /// Derive the address owned by `public_key` on `network_type`.
    pub fn create_from_public_key(public_key: &[u8; 32], network_type: NetworkType) -> Self {
        let key_hash = Sha3_256::digest(public_key);
        let ripemd = Ripemd160::digest(key_hash);

        let mut bytes = [0u8; ADDRESS_LENGTH];
        bytes[0] = network_type.as_u8();
        bytes[1..21].copy_from_slice(&ripemd);
        let checksum = Sha3_256::digest(&bytes[..21]);
        bytes[21..].copy_from_slice(&checksum[..CHECKSUM_LENGTH]);
        Self { bytes }
    }

    /// Wrap raw address bytes without validating the checksum.
    ///
    /// Transaction recipients may be namespace aliases, which carry no
    /// checksum, so decoding must accept them.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SdkError> {
        let bytes: [u8; ADDRESS_LENGTH] =
            bytes.try_into().map_err(|_| SdkError::InvalidAddressLength {
                expected: ADDRESS_LENGTH,
                got: bytes.len(),
            })?;
        Ok(Self { bytes })
    }

    pub fn from_hex(hex_str: &str) -> Result<Self, SdkError> {
        Self::from_bytes(&hex::decode(hex_str)?)
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_LENGTH] {
        &self.bytes
    }

    pub fn network_type(&self) -> Result<NetworkType, SdkError> {
        NetworkType::try_from(self.bytes[0])
    }

    /// Whether the trailing checksum matches the body.
    pub fn has_valid_checksum(&self) -> bool {
        let checksum = Sha3_256::digest(&self.bytes[..21]);
        checksum[..CHECKSUM_LENGTH] == self.bytes[21..]
    }

    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.bytes)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
