use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::services::eoq::DEFAULT_SAMPLE_COUNT;

#[derive(Error, Debug)]
pub enum PlannerConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("sample_count must be greater than zero")]
    InvalidSampleCount,
}

/// Settings shared by every command. All keys are optional.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub sample_count: usize,
    pub currency: String,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            sample_count: DEFAULT_SAMPLE_COUNT,
            currency: "BRL".to_string(),
        }
    }
}

impl PlannerConfig {
    pub fn from_yaml_str(input: &str, origin: &Path) -> Result<Self, PlannerConfigError> {
        let config: PlannerConfig =
            serde_yaml::from_str(input).map_err(|source| PlannerConfigError::Parse {
                path: origin.to_path_buf(),
                source,
            })?;
        if config.sample_count == 0 {
            return Err(PlannerConfigError::InvalidSampleCount);
        }
        Ok(config)
    }

    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, PlannerConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| PlannerConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&contents, path)
    }

    /// Falls back to the defaults when no config path was given.
    pub fn load(path: Option<&str>) -> Result<Self, PlannerConfigError> {
        match path {
            Some(path) => Self::from_yaml_file(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_use_defaults() {
        let config = PlannerConfig::from_yaml_str("currency: USD\n", Path::new("cfg.yaml")).unwrap();
        assert_eq!(config.sample_count, 50);
        assert_eq!(config.currency, "USD");
    }

    #[test]
    fn zero_sample_count_is_rejected() {
        let error =
            PlannerConfig::from_yaml_str("sample_count: 0\n", Path::new("cfg.yaml")).unwrap_err();
        assert!(matches!(error, PlannerConfigError::InvalidSampleCount));
    }

    #[test]
    fn load_without_path_returns_defaults() {
        assert_eq!(PlannerConfig::load(None).unwrap(), PlannerConfig::default());
    }

    #[test]
    fn load_reports_missing_file() {
        let error = PlannerConfig::load(Some("no-such-config.yaml")).unwrap_err();
        assert!(matches!(error, PlannerConfigError::Read { .. }));
    }
}
