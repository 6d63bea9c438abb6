//! AES-256-GCM under a password-derived key.
//!
//! An [`EncryptedPayload`] carries everything needed to decrypt besides the
//! password: `ciphertext` (with tag), `iv` and `salt`, each upper-case hex
//! when serialized.

use aes_gcm::aead::{Aead, KeyInit, Payload};
use aes_gcm::{Aes256Gcm, Nonce};
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::error::CryptoError;
use crate::kdf::derive_key;
use crate::password::Password;
use crate::types::{AES_GCM_IV_LENGTH, AES_GCM_TAG_LENGTH, SALT_LENGTH};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptedPayload {
    #[serde(with = "hex_upper")]
    pub ciphertext: Vec<u8>,
    #[serde(with = "hex_upper")]
    pub iv: Vec<u8>,
    #[serde(with = "hex_upper")]
    pub salt: Vec<u8>,
}

fn random_bytes<const N: usize>() -> Result<[u8; N], CryptoError> {
    let mut out = [0u8; N];
    getrandom::getrandom(&mut out).map_err(|e| CryptoError::RngFailed(e.to_string()))?;
    Ok(out)
}

/// Encrypt `plaintext` under `password`.
///
/// `aad` is authenticated but not encrypted; decryption must supply the
/// same bytes.
pub fn encrypt(
    plaintext: &[u8],
    password: &Password,
    aad: &[u8],
) -> Result<EncryptedPayload, CryptoError> {
    let salt = random_bytes::<SALT_LENGTH>()?;
    let iv = random_bytes::<AES_GCM_IV_LENGTH>()?;
    let key = derive_key(password, &salt)?;

    let cipher = Aes256Gcm::new_from_slice(key.as_slice())
        .map_err(|e| CryptoError::EncryptionFailed(e.to_string()))?;
    let ciphertext = cipher
        .encrypt(
            Nonce::from_slice(&iv),
            Payload {
                msg: plaintext,
                aad,
            },
        )
        .map_err(|e| CryptoError::EncryptionFailed(e.to_string()))?;

    Ok(EncryptedPayload {
        ciphertext,
        iv: iv.to_vec(),
        salt: salt.to_vec(),
    })
}

/// Decrypt a payload produced by [`encrypt`].
///
/// A wrong password, wrong `aad` or any tampering fails with
/// [`CryptoError::DecryptionFailed`].
pub fn decrypt(
    payload: &EncryptedPayload,
    password: &Password,
    aad: &[u8],
) -> Result<Zeroizing<Vec<u8>>, CryptoError> {
    if payload.iv.len() != AES_GCM_IV_LENGTH {
        return Err(CryptoError::InvalidIvLength {
            expected: AES_GCM_IV_LENGTH,
            got: payload.iv.len(),
        });
    }
    if payload.ciphertext.len() < AES_GCM_TAG_LENGTH {
        return Err(CryptoError::DataTooShort);
    }
    let key = derive_key(password, &payload.salt)?;

    let cipher =
        Aes256Gcm::new_from_slice(key.as_slice()).map_err(|_| CryptoError::DecryptionFailed)?;
    let plaintext = cipher
        .decrypt(
            Nonce::from_slice(&payload.iv),
            Payload {
                msg: &payload.ciphertext,
                aad,
            },
        )
        .map_err(|_| CryptoError::DecryptionFailed)?;
    Ok(Zeroizing::new(plaintext))
}

mod hex_upper {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<T, S>(bytes: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: AsRef<[u8]>,
        S: Serializer,
    {
        serializer.serialize_str(&hex::encode_upper(bytes.as_ref()))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(deserializer)?;
        hex::decode(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn password(s: &str) -> Password {
        Password::new(s).unwrap()
    }

    #[test]
    fn encrypt_decrypt_round_trip() {
        let pw = password("password");
        let payload = encrypt(b"Hello, World!", &pw, b"ctx").unwrap();
        let decrypted = decrypt(&payload, &pw, b"ctx").unwrap();
        assert_eq!(decrypted.as_slice(), b"Hello, World!");
    }

    #[test]
    fn payload_shape() {
        let payload = encrypt(b"secret", &password("password"), b"").unwrap();
        assert_eq!(payload.iv.len(), AES_GCM_IV_LENGTH);
        assert_eq!(payload.salt.len(), SALT_LENGTH);
        assert_eq!(payload.ciphertext.len(), 6 + AES_GCM_TAG_LENGTH);
    }

    #[test]
    fn different_ciphertext_each_time() {
        let pw = password("password");
        let a = encrypt(b"test", &pw, b"").unwrap();
        let b = encrypt(b"test", &pw, b"").unwrap();
        assert_ne!(a.ciphertext, b.ciphertext);
        assert_ne!(a.salt, b.salt);
    }

    #[test]
    fn wrong_password_fails() {
        let payload = encrypt(b"secret", &password("password"), b"").unwrap();
        let err = decrypt(&payload, &password("not-the-password"), b"").unwrap_err();
        assert!(matches!(err, CryptoError::DecryptionFailed));
    }

    #[test]
    fn wrong_aad_fails() {
        let pw = password("password");
        let payload = encrypt(b"secret", &pw, b"account").unwrap();
        assert!(decrypt(&payload, &pw, b"mnemonic").is_err());
    }

    #[test]
    fn tampered_ciphertext_fails() {
        let pw = password("password");
        let mut payload = encrypt(b"secret", &pw, b"").unwrap();
        let last = payload.ciphertext.len() - 1;
        payload.ciphertext[last] ^= 0xff;
        assert!(matches!(
            decrypt(&payload, &pw, b""),
            Err(CryptoError::DecryptionFailed)
        ));
    }

    #[test]
    fn rejects_bad_iv_length() {
        let pw = password("password");
        let mut payload = encrypt(b"secret", &pw, b"").unwrap();
        payload.iv.pop();
        let err = decrypt(&payload, &pw, b"").unwrap_err();
        assert!(err.to_string().contains("Invalid IV length"));
    }

    #[test]
    fn rejects_truncated_ciphertext() {
        let pw = password("password");
        let mut payload = encrypt(b"secret", &pw, b"").unwrap();
        payload.ciphertext.truncate(4);
        assert!(matches!(
            decrypt(&payload, &pw, b""),
            Err(CryptoError::DataTooShort)
        ));
    }

    #[test]
    fn empty_plaintext() {
        let pw = password("password");
        let payload = encrypt(b"", &pw, b"").unwrap();
        assert!(decrypt(&payload, &pw, b"").unwrap().is_empty());
    }
}
