//! Random sampling primitive shared by the CLT and coverage simulators
//!
//! The random source is an explicit `&mut StdRng` parameter rather than the
//! thread-local generator: every simulation run is reproducible when seeded
//! from the CLI boundary, and nothing in the core consumes ambient entropy.

use rand::rngs::StdRng;
use rand::Rng;

use super::error::AnalysisError;

/// Draw a fixed-size random sample from a population of non-null values.
///
/// With replacement the requested size is unconstrained by the population
/// size. Without replacement, requesting more values than are available fails
/// with `InsufficientData` before any draw happens. The population must be
/// non-empty; callers obtain it from [`super::non_null_values`], which already
/// rejects all-null columns with a named `EmptyColumn` error.
pub fn sample(
    population: &[f64],
    size: usize,
    with_replacement: bool,
    rng: &mut StdRng,
) -> Result<Vec<f64>, AnalysisError> {
    if population.is_empty() {
        return Err(AnalysisError::InsufficientData {
            requested: size,
            available: 0,
        });
    }

    if with_replacement {
        let drawn = (0..size)
            .map(|_| population[rng.gen_range(0..population.len())])
            .collect();
        return Ok(drawn);
    }

    if size > population.len() {
        return Err(AnalysisError::InsufficientData {
            requested: size,
            available: population.len(),
        });
    }

    let indices = rand::seq::index::sample(rng, population.len(), size);
    Ok(indices.iter().map(|i| population[i]).collect())
}
