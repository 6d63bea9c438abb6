//! Public and private accounts.

use std::fmt;

use ed25519_dalek::hazmat::ExpandedSecretKey;
use ed25519_dalek::VerifyingKey;
use sha3::{Digest, Sha3_512};
use zeroize::{Zeroize, Zeroizing};

use crate::address::Address;
use crate::error::SdkError;
use crate::network::NetworkType;

/// Ed25519 key length in bytes (public and private).
pub const KEY_LENGTH: usize = 32;

/// An account known only by its public key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicAccount {
    public_key: [u8; KEY_LENGTH],
    network_type: NetworkType,
}

impl PublicAccount {
    /// Build a public account from a hex-encoded public key.
    pub fn create_from_public_key(
        public_key: &str,
        network_type: NetworkType,
    ) -> Result<Self, SdkError> {
        let bytes = hex::decode(public_key)?;
        let public_key: [u8; KEY_LENGTH] =
            bytes.as_slice().try_into().map_err(|_| SdkError::InvalidKeyLength {
                expected: KEY_LENGTH,
                got: bytes.len(),
            })?;
        Ok(Self::from_bytes(public_key, network_type))
    }

    pub fn from_bytes(public_key: [u8; KEY_LENGTH], network_type: NetworkType) -> Self {
        Self {
            public_key,
            network_type,
        }
    }

    pub fn public_key(&self) -> &[u8; KEY_LENGTH] {
        &self.public_key
    }

    /// Upper-case hex public key.
    pub fn public_key_hex(&self) -> String {
        hex::encode_upper(self.public_key)
    }

    pub fn network_type(&self) -> NetworkType {
        self.network_type
    }

    pub fn address(&self) -> Address {
        Address::create_from_public_key(&self.public_key, self.network_type)
    }
}

/// An account holding its private key.
///
/// Catapult keys are ed25519 with the seed expanded by SHA3-512 rather than
/// SHA-512, so the public key is derived through the expanded secret key.
#[derive(Clone)]
pub struct Account {
    seed: Zeroizing<[u8; KEY_LENGTH]>,
    public_key: [u8; KEY_LENGTH],
    network_type: NetworkType,
}

impl Account {
    /// Build an account from a hex-encoded 32-byte private key.
    pub fn create_from_private_key(
        private_key: &str,
        network_type: NetworkType,
    ) -> Result<Self, SdkError> {
        let mut bytes = hex::decode(private_key)?;
        let result = <[u8; KEY_LENGTH]>::try_from(bytes.as_slice()).map_err(|_| {
            SdkError::InvalidKeyLength {
                expected: KEY_LENGTH,
                got: bytes.len(),
            }
        });
        bytes.zeroize();
        let seed = Zeroizing::new(result?);
        Ok(Self::from_seed(seed, network_type))
    }

    /// Generate a fresh random account.
    pub fn generate(network_type: NetworkType) -> Result<Self, SdkError> {
        let mut seed = Zeroizing::new([0u8; KEY_LENGTH]);
        getrandom::getrandom(seed.as_mut_slice())
            .map_err(|e| SdkError::RngFailed(e.to_string()))?;
        Ok(Self::from_seed(seed, network_type))
    }

    fn from_seed(seed: Zeroizing<[u8; KEY_LENGTH]>, network_type: NetworkType) -> Self {
        let public_key = derive_public_key(&seed);
        Self {
            seed,
            public_key,
            network_type,
        }
    }

    /// Upper-case hex private key, wiped when dropped.
    pub fn private_key_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(hex::encode_upper(*self.seed))
    }

    pub fn public_account(&self) -> PublicAccount {
        PublicAccount::from_bytes(self.public_key, self.network_type)
    }

    pub fn public_key_hex(&self) -> String {
        self.public_account().public_key_hex()
    }

    pub fn address(&self) -> Address {
        self.public_account().address()
    }

    pub fn network_type(&self) -> NetworkType {
        self.network_type
    }
}

fn derive_public_key(seed: &[u8; KEY_LENGTH]) -> [u8; KEY_LENGTH] {
    let mut digest = Sha3_512::digest(seed);
    let mut expanded = Zeroizing::new([0u8; 64]);
    expanded.copy_from_slice(&digest);
    digest.as_mut_slice().zeroize();
    let secret = ExpandedSecretKey::from_bytes(&expanded);
    VerifyingKey::from(&secret).to_bytes()
}

impl PartialEq for Account {
    fn eq(&self, other: &Self) -> bool {
        self.network_type == other.network_type && *self.seed == *other.seed
    }
}

impl Eq for Account {}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("public_key", &self.public_key_hex())
            .field("network_type", &self.network_type)
            .finish_non_exhaustive()
    }
}

impl From<&Account> for PublicAccount {
    fn from(account: &Account) -> Self {
        account.public_account()
    }
}
