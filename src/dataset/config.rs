//! Survey configuration: sample size, seed and categorical distributions.
//!
//! Loaded from TOML. Every field has a default, so a config file only needs
//! to name what it changes:
//!
//! ```toml
//! sample_size = 250
//! seed = 7
//!
//! [platform]
//! labels = ["Instagram", "TikTok"]
//! weights = [0.5, 0.5]
//! ```

use super::record::Field;
use crate::utils::config::{DEFAULT_SAMPLE_SIZE, DEFAULT_SEED, WEIGHT_TOLERANCE};
use crate::utils::error::ConfigError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Labels with their sampling weights
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CategoricalDistribution {
    pub labels: Vec<String>,
    pub weights: Vec<f64>,
}

impl CategoricalDistribution {
    pub fn new(pairs: &[(&str, f64)]) -> Self {
        Self {
            labels: pairs.iter().map(|(label, _)| label.to_string()).collect(),
            weights: pairs.iter().map(|(_, weight)| *weight).collect(),
        }
    }

    /// Check labels and weights describe a proper probability distribution
    ///
    /// `field` is only used to name the distribution in errors.
    pub fn validate(&self, field: &str) -> Result<(), ConfigError> {
        if self.labels.is_empty() {
            return Err(ConfigError::NoLabels(field.to_string()));
        }

        if self.labels.len() != self.weights.len() {
            return Err(ConfigError::LengthMismatch {
                field: field.to_string(),
                labels: self.labels.len(),
                weights: self.weights.len(),
            });
        }

        let mut seen = HashSet::new();
        for (label, &weight) in self.labels.iter().zip(&self.weights) {
            if !seen.insert(label.as_str()) {
                return Err(ConfigError::DuplicateLabel {
                    field: field.to_string(),
                    label: label.clone(),
                });
            }
            if !weight.is_finite() || weight < 0.0 {
                return Err(ConfigError::InvalidWeight {
                    field: field.to_string(),
                    label: label.clone(),
                    weight,
                });
            }
        }

        let sum: f64 = self.weights.iter().sum();
        if (sum - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(ConfigError::WeightsNotNormalized {
                field: field.to_string(),
                sum,
            });
        }

        Ok(())
    }

    /// Position of a label in the configured order
    pub fn rank(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }
}

/// Complete survey configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SurveyConfig {
    /// Number of students to generate
    pub sample_size: usize,

    /// RNG seed (omit for a non-reproducible run)
    pub seed: Option<u64>,

    pub age: CategoricalDistribution,
    pub gender: CategoricalDistribution,
    pub platform: CategoricalDistribution,
    pub hours: CategoricalDistribution,
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
            seed: Some(DEFAULT_SEED),
            age: CategoricalDistribution::new(&[("18-20", 0.6), ("21-23", 0.3), ("24+", 0.1)]),
            gender: CategoricalDistribution::new(&[("Male", 0.5), ("Female", 0.5)]),
            platform: CategoricalDistribution::new(&[
                ("Instagram", 0.35),
                ("TikTok", 0.30),
                ("Facebook", 0.15),
                ("Twitter", 0.08),
                ("Snapchat", 0.07),
                ("YouTube", 0.05),
            ]),
            hours: CategoricalDistribution::new(&[
                ("<1 hour", 0.2),
                ("1-2 hours", 0.4),
                ("3-4 hours", 0.25),
                (">4 hours", 0.15),
            ]),
        }
    }
}

impl SurveyConfig {
    /// Distribution configured for a field
    pub fn distribution(&self, field: Field) -> &CategoricalDistribution {
        match field {
            Field::Age => &self.age,
            Field::Gender => &self.gender,
            Field::Platform => &self.platform,
            Field::Hours => &self.hours,
        }
    }

    /// Validate sample size and all four distributions
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_size == 0 {
            return Err(ConfigError::EmptySample);
        }

        for field in Field::ALL {
            self.distribution(field).validate(field.column_name())?;
        }

        Ok(())
    }

    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Load a survey configuration from a TOML file
///
/// The result is validated before it is returned.
///
/// # Errors
/// * `ConfigError::ReadFailed` - If file cannot be read
/// * `ConfigError::ParseFailed` - If TOML is invalid
/// * Any validation error from `SurveyConfig::validate`
pub fn load_config(path: impl AsRef<Path>) -> Result<SurveyConfig, ConfigError> {
    let path = path.as_ref();
    debug!("Loading survey config from: {}", path.display());

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;
    let config: SurveyConfig = toml::from_str(&contents)?;
    config.validate()?;

    Ok(config)
}
