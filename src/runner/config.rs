//! Round-trip runner configuration

use super::constants::{DEFAULT_ITERATIONS, ITERATIONS_ENV};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Settings for a [`RoundTrip`](super::RoundTrip) run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundTripConfig {
    /// Round trips performed per run
    pub iterations: usize,
}

impl Default for RoundTripConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

impl RoundTripConfig {
    /// Configuration with a fixed iteration count
    pub fn with_iterations(iterations: usize) -> Self {
        Self { iterations }
    }

    /// Defaults, overridden by `ROUNDTRIP_ITERATIONS` when set
    pub fn from_env() -> Result<Self> {
        match std::env::var(ITERATIONS_ENV) {
            Ok(raw) => Self::from_override(&raw),
            Err(std::env::VarError::NotPresent) => Ok(Self::default()),
            Err(err) => Err(Error::Configuration {
                message: format!("{}: {}", ITERATIONS_ENV, err),
            }),
        }
    }

    fn from_override(raw: &str) -> Result<Self> {
        let iterations = raw.trim().parse::<usize>().map_err(|err| Error::Configuration {
            message: format!("{}='{}': {}", ITERATIONS_ENV, raw, err),
        })?;

        if iterations == 0 {
            return Err(Error::Configuration {
                message: format!("{} must be greater than zero", ITERATIONS_ENV),
            });
        }

        tracing::debug!(iterations, "iteration count overridden from environment");
        Ok(Self { iterations })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_iterations() {
        assert_eq!(RoundTripConfig::default().iterations, 10_000);
    }

    #[test]
    fn test_override_parsing() {
        assert_eq!(RoundTripConfig::from_override(" 250 ").unwrap().iterations, 250);
        assert!(matches!(
            RoundTripConfig::from_override("many"),
            Err(Error::Configuration { .. })
        ));
        assert!(matches!(
            RoundTripConfig::from_override("0"),
            Err(Error::Configuration { .. })
        ));
    }

    #[test]
    fn test_config_serde_defaults() {
        let config: RoundTripConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, RoundTripConfig::default());

        let config: RoundTripConfig = serde_json::from_str(r#"{"iterations": 5}"#).unwrap();
        assert_eq!(config.iterations, 5);
    }
}
