//! Session configuration
//!
//! Every field has a default, so an empty YAML document is a valid config:
//!
//! ```yaml
//! seed: 42
//! expansion:
//!   max_batch: 2
//! dossier:
//!   earliest_date: 2025-01-01
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Bounds for synthesized expansion batches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpansionConfig {
    /// Fewest nodes per expansion
    pub min_batch: u32,
    /// Most nodes per expansion
    pub max_batch: u32,
    pub min_threat: u32,
    pub max_threat: u32,
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        Self {
            min_batch: 1,
            max_batch: 3,
            min_threat: 20,
            max_threat: 79,
        }
    }
}

/// Bounds for randomized dossiers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DossierConfig {
    pub min_documents: u32,
    pub max_documents: u32,
    /// Oldest date a generated document may carry
    pub earliest_date: NaiveDate,
}

impl Default for DossierConfig {
    fn default() -> Self {
        Self {
            min_documents: 6,
            max_documents: 10,
            earliest_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or(NaiveDate::MIN),
        }
    }
}

/// Session configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// RNG seed; `None` draws from OS entropy
    pub seed: Option<u64>,
    pub expansion: ExpansionConfig,
    pub dossier: DossierConfig,
}

impl SessionConfig {
    /// Parse and validate a YAML document
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        let config: SessionConfig = if yaml.trim().is_empty() {
            SessionConfig::default()
        } else {
            serde_yaml::from_str(yaml)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a YAML file
    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> ConfigResult<()> {
        let e = &self.expansion;
        if e.min_batch == 0 {
            return Err(ConfigError::Invalid("expansion.min_batch must be at least 1".into()));
        }
        if e.min_batch > e.max_batch {
            return Err(ConfigError::Invalid(format!(
                "expansion batch range {}..={} is empty",
                e.min_batch, e.max_batch
            )));
        }
        if e.min_threat > e.max_threat || e.max_threat > 100 {
            return Err(ConfigError::Invalid(format!(
                "expansion threat range {}..={} must lie within 0..=100",
                e.min_threat, e.max_threat
            )));
        }
        let d = &self.dossier;
        if d.min_documents > d.max_documents {
            return Err(ConfigError::Invalid(format!(
                "dossier document range {}..={} is empty",
                d.min_documents, d.max_documents
            )));
        }
        let today = chrono::Utc::now().date_naive();
        if d.earliest_date > today {
            return Err(ConfigError::Invalid(format!(
                "dossier.earliest_date {} is after today ({})",
                d.earliest_date, today
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!((config.expansion.min_batch, config.expansion.max_batch), (1, 3));
        assert_eq!((config.expansion.min_threat, config.expansion.max_threat), (20, 79));
        assert_eq!((config.dossier.min_documents, config.dossier.max_documents), (6, 10));
        assert_eq!(config.dossier.earliest_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml() {
        let config = SessionConfig::from_yaml_str("seed: 9\nexpansion:\n  max_batch: 2\n").unwrap();
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.expansion.max_batch, 2);
        assert_eq!(config.expansion.min_batch, 1);
        assert_eq!(config.dossier, DossierConfig::default());
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(SessionConfig::from_yaml_str("  \n").unwrap(), SessionConfig::default());
    }

    #[test]
    fn test_invalid_ranges() {
        let err = SessionConfig::from_yaml_str("expansion:\n  min_batch: 4\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = SessionConfig::from_yaml_str("expansion:\n  min_batch: 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = SessionConfig::from_yaml_str("expansion:\n  max_threat: 120\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = SessionConfig::from_yaml_str("dossier:\n  max_documents: 2\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_future_earliest_date_is_rejected() {
        let err = SessionConfig::from_yaml_str("dossier:\n  earliest_date: 2999-01-01\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let mut config = SessionConfig::default();
        config.dossier.earliest_date = chrono::Utc::now().date_naive();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_malformed_yaml() {
        let err = SessionConfig::from_yaml_str("seed: [not, a, number]").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "dossier:\n  earliest_date: 2025-06-01").unwrap();
        let config = SessionConfig::from_path(file.path()).unwrap();
        assert_eq!(config.dossier.earliest_date, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());

        let missing = SessionConfig::from_path("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(missing, ConfigError::Io(_)));
    }
}
