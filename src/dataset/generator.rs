//! Synthetic survey generation.
//!
//! Each field is sampled independently from its configured distribution,
//! one whole column at a time: all ages first, then genders, platforms and
//! hours. Records are assembled from the columns afterwards.

use super::config::{CategoricalDistribution, SurveyConfig};
use super::record::{Field, Record};
use crate::utils::error::ConfigError;
use log::{debug, info};
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generate the synthetic dataset described by `config`
///
/// # Errors
/// Any validation error from `SurveyConfig::validate`; nothing is sampled
/// from an invalid configuration.
pub fn generate_records(config: &SurveyConfig) -> Result<Vec<Record>, ConfigError> {
    config.validate()?;

    let mut rng = match config.seed {
        Some(seed) => {
            debug!("Seeding generator with {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let n = config.sample_size;
    let ages = sample_column(&mut rng, &config.age, n, Field::Age)?;
    let genders = sample_column(&mut rng, &config.gender, n, Field::Gender)?;
    let platforms = sample_column(&mut rng, &config.platform, n, Field::Platform)?;
    let hours = sample_column(&mut rng, &config.hours, n, Field::Hours)?;

    let records: Vec<Record> = ages
        .into_iter()
        .zip(genders)
        .zip(platforms)
        .zip(hours)
        .enumerate()
        .map(|(i, (((age, gender), platform), hours))| {
            Record::new(i as u64 + 1, age, gender, platform, hours)
        })
        .collect();

    info!("Generated {} survey records", records.len());
    Ok(records)
}

/// Draw `n` labels from one distribution
fn sample_column<R: Rng>(
    rng: &mut R,
    dist: &CategoricalDistribution,
    n: usize,
    field: Field,
) -> Result<Vec<String>, ConfigError> {
    // validate() already rejects these; WeightedIndex also refuses all-zero weights
    let index = WeightedIndex::new(&dist.weights).map_err(|_| ConfigError::WeightsNotNormalized {
        field: field.column_name().to_string(),
        sum: dist.weights.iter().sum(),
    })?;

    Ok((0..n)
        .map(|_| dist.labels[index.sample(rng)].clone())
        .collect())
}
