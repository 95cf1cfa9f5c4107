//! Process configuration for the echo handler.
//!
//! # Environment Variables
//!
//! - `AWS_REGION`: region reported in the payload. Set by the Lambda host;
//!   when unset or empty the region is derived from the invocation ARN.

/// Environment variable holding the execution region.
pub const REGION_VAR: &str = "AWS_REGION";

/// Configuration read from the execution environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EchoConfig {
    /// Explicit region, preferred over the one embedded in the invocation ARN.
    pub region: Option<String>,
}

impl EchoConfig {
    /// Create configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            region: lookup(REGION_VAR).filter(|value| !value.is_empty()),
        }
    }

    /// Configuration with an explicit region.
    pub fn with_region(region: impl Into<String>) -> Self {
        Self {
            region: Some(region.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn reads_region_from_lookup() {
        let config = EchoConfig::from_lookup(lookup_from(&[("AWS_REGION", "eu-west-1")]));
        assert_eq!(config.region.as_deref(), Some("eu-west-1"));
    }

    #[test]
    fn missing_region_is_none() {
        let config = EchoConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, EchoConfig::default());
    }

    #[test]
    fn empty_region_is_treated_as_unset() {
        let config = EchoConfig::from_lookup(lookup_from(&[("AWS_REGION", "")]));
        assert!(config.region.is_none());
    }

    #[test]
    fn with_region_sets_value() {
        assert_eq!(
            EchoConfig::with_region("ap-northeast-1").region.as_deref(),
            Some("ap-northeast-1")
        );
    }
}
