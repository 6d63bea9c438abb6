//! Argon2id password key derivation.

use argon2::{Algorithm, Argon2, Params, Version};
use zeroize::Zeroizing;

use crate::error::CryptoError;
use crate::password::Password;
use crate::types::{AES_KEY_LENGTH, ARGON2_M_COST, ARGON2_P_COST, ARGON2_T_COST, SALT_LENGTH};

/// Derive a 256-bit key from a password and salt with Argon2id.
///
/// # Arguments
/// * `password` - User password
/// * `salt` - 16-byte random salt stored next to the ciphertext
pub fn derive_key(
    password: &Password,
    salt: &[u8],
) -> Result<Zeroizing<[u8; AES_KEY_LENGTH]>, CryptoError> {
    if salt.len() != SALT_LENGTH {
        return Err(CryptoError::InvalidSaltLength {
            expected: SALT_LENGTH,
            got: salt.len(),
        });
    }
    let params = Params::new(
        ARGON2_M_COST,
        ARGON2_T_COST,
        ARGON2_P_COST,
        Some(AES_KEY_LENGTH),
    )
    .map_err(|e| CryptoError::KeyDerivationFailed(e.to_string()))?;
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    let mut key = Zeroizing::new([0u8; AES_KEY_LENGTH]);
    argon2
        .hash_password_into(password.as_bytes(), salt, &mut key[..])
        .map_err(|e| CryptoError::KeyDerivationFailed(e.to_string()))?;
    Ok(key)
}
