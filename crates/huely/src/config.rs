// Persistable bridge connection settings.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Bridge address and application key, in the shape most Hue tooling
/// stores them (`bridge` / `key`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Bridge IP address or host name.
    pub bridge: String,
    /// Application key obtained through pairing.
    pub key: String,
}

impl BridgeConfig {
    pub fn new(bridge: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bridge: bridge.into(),
            key: key.into(),
        }
    }

    /// Parse from YAML, the on-disk format shared with other Hue clients.
    pub fn from_yaml(contents: &str) -> Result<Self, Error> {
        serde_yaml::from_str(contents).map_err(|e| Error::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_yaml() {
        let config = BridgeConfig::from_yaml("bridge: 192.168.1.23\nkey: abc123\n")
            .expect("valid config");

        assert_eq!(config, BridgeConfig::new("192.168.1.23", "abc123"));
    }

    #[test]
    fn rejects_missing_key() {
        let err = BridgeConfig::from_yaml("bridge: 192.168.1.23\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
