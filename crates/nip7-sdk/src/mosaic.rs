//! Namespace ids and mosaic amounts.

use sha3::{Digest, Sha3_256};

use crate::error::SdkError;

const NAMESPACE_FLAG: u64 = 1 << 63;
const MAX_NAMESPACE_DEPTH: usize = 3;

/// 64-bit namespace identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NamespaceId(u64);

impl NamespaceId {
    /// Derive the id of a dotted namespace path such as `cat.currency`.
    ///
    /// Each level hashes the parent id (little endian) followed by the part
    /// name with SHA3-256; the id is the first eight digest bytes with the
    /// top bit set.
    pub fn from_name(name: &str) -> Result<Self, SdkError> {
        let parts: Vec<&str> = name.split('.').collect();
        if parts.len() > MAX_NAMESPACE_DEPTH || parts.iter().any(|p| !is_valid_part(p)) {
            return Err(SdkError::InvalidNamespaceName(name.to_string()));
        }

        let mut id = 0u64;
        for part in parts {
            let mut hasher = Sha3_256::new();
            hasher.update(id.to_le_bytes());
            hasher.update(part.as_bytes());
            let digest = hasher.finalize();
            let mut head = [0u8; 8];
            head.copy_from_slice(&digest[..8]);
            id = u64::from_le_bytes(head) | NAMESPACE_FLAG;
        }
        Ok(Self(id))
    }

    pub fn from_id(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

fn is_valid_part(part: &str) -> bool {
    !part.is_empty()
        && part.len() <= 64
        && part
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-' || b == b'_')
}

/// Mosaic id or namespace alias, as carried in a transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnresolvedMosaicId(pub u64);

impl From<NamespaceId> for UnresolvedMosaicId {
    fn from(namespace: NamespaceId) -> Self {
        Self(namespace.id())
    }
}

/// An amount of a mosaic, in absolute units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mosaic {
    pub id: UnresolvedMosaicId,
    pub amount: u64,
}

impl Mosaic {
    pub fn new(id: impl Into<UnresolvedMosaicId>, amount: u64) -> Self {
        Self {
            id: id.into(),
            amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cat_currency_id() {
        let id = NamespaceId::from_name("cat.currency").unwrap();
        assert_eq!(id.id(), 0x85BB_EA6C_C462_B244);
    }

    #[test]
    fn child_differs_from_parent() {
        let parent = NamespaceId::from_name("cat").unwrap();
        let child = NamespaceId::from_name("cat.currency").unwrap();
        assert_ne!(parent, child);
        assert_ne!(parent.id() & NAMESPACE_FLAG, 0);
    }

    #[test]
    fn rejects_invalid_names() {
        assert!(NamespaceId::from_name("").is_err());
        assert!(NamespaceId::from_name("cat..currency").is_err());
        assert!(NamespaceId::from_name("Cat").is_err());
        assert!(NamespaceId::from_name("a.b.c.d").is_err());
    }

    #[test]
    fn mosaic_from_namespace() {
        let mosaic = Mosaic::new(NamespaceId::from_name("cat.currency").unwrap(), 10_000_000);
        assert_eq!(mosaic.id, UnresolvedMosaicId(0x85BB_EA6C_C462_B244));
        assert_eq!(mosaic.amount, 10_000_000);
    }
}
