/// AES-GCM IV length in bytes (96 bits per NIST recommendation).
pub const AES_GCM_IV_LENGTH: usize = 12;

/// AES-GCM tag length in bytes (128 bits).
pub const AES_GCM_TAG_LENGTH: usize = 16;

/// AES key length in bytes (256 bits).
pub const AES_KEY_LENGTH: usize = 32;

/// Argon2 salt length in bytes.
pub const SALT_LENGTH: usize = 16;

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Argon2id memory cost in KiB.
pub const ARGON2_M_COST: u32 = 19_456;

/// Argon2id iterations.
pub const ARGON2_T_COST: u32 = 2;

/// Argon2id lanes.
pub const ARGON2_P_COST: u32 = 1;
