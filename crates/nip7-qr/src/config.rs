use nip7_sdk::NetworkType;
use serde::{Deserialize, Serialize};

/// Chain id stamped on codes when the caller does not pick one.
pub const DEFAULT_CHAIN_ID: &str =
    "E2A9F95E129283EF47B92A62FD748DBA4D32AA718AE6F8AC99C105CFA9F27A31";

/// Network stamped on codes when the caller does not pick one.
pub const DEFAULT_NETWORK_TYPE: NetworkType = NetworkType::MijinTest;

/// Network and chain a generated code targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QrConfig {
    pub network_type: NetworkType,
    pub chain_id: String,
}

impl QrConfig {
    pub fn new(network_type: NetworkType, chain_id: impl Into<String>) -> Self {
        Self {
            network_type,
            chain_id: chain_id.into(),
        }
    }
}

impl Default for QrConfig {
    fn default() -> Self {
        Self::new(DEFAULT_NETWORK_TYPE, DEFAULT_CHAIN_ID)
    }
}
