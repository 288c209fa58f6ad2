use serde::Deserialize;

/// Configuration for the master-service module.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MasterServiceConfig {
    /// Maximum number of items the in-memory dataset accepts.
    #[serde(default = "default_capacity")]
    pub capacity: usize,
    /// Values loaded into the dataset when the module is built.
    #[serde(default)]
    pub seed: Vec<i64>,
}

impl Default for MasterServiceConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            seed: Vec::new(),
        }
    }
}

fn default_capacity() -> usize {
    10
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = MasterServiceConfig::default();
        assert_eq!(cfg.capacity, 10);
        assert!(cfg.seed.is_empty());
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let cfg: MasterServiceConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, MasterServiceConfig::default());
    }

    #[test]
    fn test_deserialize_explicit_values() {
        let cfg: MasterServiceConfig =
            serde_json::from_str(r#"{ "capacity": 3, "seed": [4, 2] }"#).unwrap();
        assert_eq!(cfg.capacity, 3);
        assert_eq!(cfg.seed, vec![4, 2]);
    }

    #[test]
    fn test_deserialize_rejects_unknown_fields() {
        let result = serde_json::from_str::<MasterServiceConfig>(r#"{ "capacty": 3 }"#);
        assert!(result.is_err());
    }
}
