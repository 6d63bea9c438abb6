use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SdkError;

/// Network identifier carried in addresses, transaction versions and the
/// QR envelope's `network_id` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum NetworkType {
    MainNet = 104,
    TestNet = 152,
    Mijin = 96,
    MijinTest = 144,
}

impl NetworkType {
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for NetworkType {
    type Error = SdkError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            104 => Ok(Self::MainNet),
            152 => Ok(Self::TestNet),
            96 => Ok(Self::Mijin),
            144 => Ok(Self::MijinTest),
            other => Err(SdkError::UnknownNetworkType(other)),
        }
    }
}

impl From<NetworkType> for u8 {
    fn from(network: NetworkType) -> Self {
        network.as_u8()
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::MainNet => "MAIN_NET",
            Self::TestNet => "TEST_NET",
            Self::Mijin => "MIJIN",
            Self::MijinTest => "MIJIN_TEST",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_identifiers() {
        assert_eq!(NetworkType::try_from(144).unwrap(), NetworkType::MijinTest);
        assert_eq!(NetworkType::try_from(104).unwrap(), NetworkType::MainNet);
        assert_eq!(u8::from(NetworkType::TestNet), 152);
    }

    #[test]
    fn rejects_unknown_identifier() {
        let err = NetworkType::try_from(7).unwrap_err();
        assert!(err.to_string().contains("Unknown network type: 7"));
    }

    #[test]
    fn display_uses_sdk_names() {
        assert_eq!(NetworkType::MijinTest.to_string(), "MIJIN_TEST");
        assert_eq!(NetworkType::MainNet.to_string(), "MAIN_NET");
    }
}
