//! Local exploration around a fixed configuration: the one-exchange
//! neighbourhood, single random neighbors, and inactive-value imputation.
//!
//! All entry points are synchronous, side-effect-free on their inputs,
//! and seed a fresh RNG per call, so identical `(configuration, seed)`
//! pairs reproduce identical results bit for bit.

use std::collections::HashMap;
use std::sync::Arc;

use crate::activation::propagate_activation;
use crate::configuration::Configuration;
use crate::error::{Error, Result};
use crate::parameter::NeighborCount;
use crate::value::Value;

/// Attempt budget shared by the bounded retry loops. Crossing it turns a
/// pathological rejection loop (e.g. a dense forbidden-clause region)
/// into [`Error::SearchExhausted`] instead of a hang.
const MAX_SEARCH_ATTEMPTS: usize = 10_000;

/// How many accepted neighbors an unbounded (continuous or integer)
/// parameter contributes to a one-exchange call.
const CONTINUOUS_NEIGHBOR_SAMPLES: usize = 4;

/// How missing values are filled by [`impute_inactive_values`].
///
/// Parses from a string: the `"default"` keyword or a finite numeric
/// literal.
///
/// ```
/// use configspace::ImputationStrategy;
///
/// assert_eq!(
///     "default".parse::<ImputationStrategy>().unwrap(),
///     ImputationStrategy::Default
/// );
/// assert_eq!(
///     "-1".parse::<ImputationStrategy>().unwrap(),
///     ImputationStrategy::Value(-1.0)
/// );
/// assert!("mean".parse::<ImputationStrategy>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ImputationStrategy {
    /// Replace each missing parameter by its encoded default value.
    Default,
    /// Write a literal sentinel into each missing slot of the encoded
    /// vector. Pick one outside the normal encoded range (e.g. `-1.0`) so
    /// downstream splitting logic can tell imputed slots apart.
    Value(f64),
}

impl core::str::FromStr for ImputationStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s == "default" {
            return Ok(ImputationStrategy::Default);
        }
        match s.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(ImputationStrategy::Value(v)),
            _ => Err(Error::InvalidStrategy(s.to_owned())),
        }
    }
}

/// Returns all accepted configurations in the one-exchange neighbourhood
/// of `configuration`, in discovery order.
///
/// Every active parameter is perturbed in turn: finite-neighbor
/// parameters (categorical, ordinal) contribute their full neighbor set
/// exactly once, unbounded ones (continuous, integer) up to four accepted
/// draws. Each candidate has its activation state repaired along the
/// condition graph and is then strictly validated; candidates failing
/// validation are silently discarded.
///
/// The result is fully determined by `(configuration, seed)`.
///
/// # Errors
///
/// Returns [`Error::SearchExhausted`] when more than 10 000 candidates
/// were attempted across the call, and propagates any collaborator
/// failure (unknown parameters, undecodable slots).
pub fn get_one_exchange_neighbourhood(
    configuration: &Configuration,
    seed: u64,
) -> Result<Vec<Configuration>> {
    let mut rng = fastrand::Rng::with_seed(seed);
    let space = configuration.space();
    let mut neighbourhood = Vec::new();
    let mut attempts = 0_usize;
    for index in 0..space.len() {
        let current = configuration.vector()[index];
        if !current.is_finite() {
            continue;
        }
        let parameter = space.parameter_at(index);
        match parameter.num_neighbors(current) {
            NeighborCount::Zero => {}
            NeighborCount::Finite(count) => {
                // The full neighbor set, drawn exactly once per call.
                for neighbor in parameter.neighbors(current, &mut rng, count) {
                    attempts += 1;
                    if attempts > MAX_SEARCH_ATTEMPTS {
                        return Err(Error::SearchExhausted { attempts });
                    }
                    if let Some(accepted) = try_neighbor(configuration, index, neighbor)? {
                        neighbourhood.push(accepted);
                    }
                }
            }
            NeighborCount::Infinite => {
                let mut sampled = 0_usize;
                while sampled < CONTINUOUS_NEIGHBOR_SAMPLES {
                    let wanted = CONTINUOUS_NEIGHBOR_SAMPLES - sampled;
                    let batch = parameter.neighbors(current, &mut rng, wanted);
                    // An integer parameter signals an exhausted range by a
                    // short batch.
                    let exhausted = batch.len() < wanted;
                    for neighbor in batch {
                        attempts += 1;
                        if attempts > MAX_SEARCH_ATTEMPTS {
                            return Err(Error::SearchExhausted { attempts });
                        }
                        if let Some(accepted) = try_neighbor(configuration, index, neighbor)? {
                            neighbourhood.push(accepted);
                            sampled += 1;
                        }
                    }
                    if exhausted {
                        break;
                    }
                }
            }
        }
    }
    trace_debug!(
        size = neighbourhood.len(),
        attempts,
        "one-exchange neighbourhood generated"
    );
    Ok(neighbourhood)
}

/// Writes `neighbor` into slot `index` of a vector copy, repairs the
/// activation state of all dependents, and strictly validates the result.
/// A candidate failing validation is reported as `None`.
fn try_neighbor(
    configuration: &Configuration,
    index: usize,
    neighbor: f64,
) -> Result<Option<Configuration>> {
    let space = configuration.space();
    let mut vector = configuration.vector().to_vec();
    vector[index] = neighbor;
    propagate_activation(space, &mut vector, space.name_at(index))?;
    match Configuration::from_vector(Arc::clone(space), vector) {
        Ok(accepted) => Ok(Some(accepted)),
        Err(rejection) if rejection.is_candidate_rejection() => Ok(None),
        Err(fatal) => Err(fatal),
    }
}

/// Returns exactly one random neighbor of `configuration`: one active,
/// perturbable parameter is mutated to one of its neighbors in the raw
/// domain, and the configuration is rebuilt from the changed raw-value
/// mapping.
///
/// Reconstruction re-derives and validates the full activation state, so
/// it is the sole validator on this path: a mutation that would activate
/// or deactivate other parameters is rejected and the search retries with
/// a fresh draw.
///
/// # Errors
///
/// Returns [`Error::SearchExhausted`] when no acceptable neighbor was
/// found within 10 000 attempts (no active parameter has neighbors, or
/// every candidate is rejected), and propagates any collaborator failure.
pub fn get_random_neighbor(configuration: &Configuration, seed: u64) -> Result<Configuration> {
    let mut rng = fastrand::Rng::with_seed(seed);
    let space = configuration.space();
    if space.is_empty() {
        return Err(Error::SearchExhausted { attempts: 0 });
    }
    let mut values = configuration.values()?;
    let mut attempts = 0_usize;
    loop {
        // Select an active slot with at least one neighbor, uniformly over
        // all parameter slots. The attempt budget spans the whole call, so
        // a space that rejects every candidate terminates with
        // SearchExhausted instead of looping forever.
        let index = loop {
            attempts += 1;
            if attempts > MAX_SEARCH_ATTEMPTS {
                return Err(Error::SearchExhausted { attempts });
            }
            let candidate = rng.usize(0..space.len());
            let encoded = configuration.vector()[candidate];
            if encoded.is_finite() && space.parameter_at(candidate).has_neighbors(encoded) {
                break candidate;
            }
        };
        let parameter = space.parameter_at(index);
        let name = space.name_at(index);
        let encoded = configuration.vector()[index];
        let Some(neighbor) = parameter.neighbors(encoded, &mut rng, 1).first().copied() else {
            return Err(Error::Internal("neighbor draw returned no candidate"));
        };
        let raw = parameter.transform(neighbor)?;
        let previous = values.insert(name.to_owned(), raw);
        match Configuration::from_values(Arc::clone(space), &values) {
            Ok(accepted) => {
                trace_info!(parameter = name, attempts, "random neighbor accepted");
                return Ok(accepted);
            }
            Err(rejection) if rejection.is_candidate_rejection() => {
                trace_debug!(parameter = name, attempts, "random neighbor rejected");
                restore(&mut values, name, previous);
            }
            Err(fatal) => return Err(fatal),
        }
    }
}

fn restore(values: &mut HashMap<String, Value>, name: &str, previous: Option<Value>) {
    match previous {
        Some(value) => {
            values.insert(name.to_owned(), value);
        }
        None => {
            values.remove(name);
        }
    }
}

/// Returns a configuration in which every parameter holds a concrete
/// value, for consumers (e.g. tree-based models) that cannot represent
/// "missing".
///
/// Present values are kept; each missing slot is filled per `strategy`.
/// No activation propagation occurs; this is a pure value-filling
/// transform, and the result is built in relaxed mode since it
/// intentionally violates the active-iff-value invariant. Imputing a
/// fully specified configuration returns an equal one.
///
/// # Errors
///
/// Returns [`Error::InvalidStrategy`] for a non-finite sentinel value.
pub fn impute_inactive_values(
    configuration: &Configuration,
    strategy: ImputationStrategy,
) -> Result<Configuration> {
    if let ImputationStrategy::Value(sentinel) = strategy {
        if !sentinel.is_finite() {
            return Err(Error::InvalidStrategy(sentinel.to_string()));
        }
    }
    let space = configuration.space();
    let mut vector = configuration.vector().to_vec();
    for (index, slot) in vector.iter_mut().enumerate() {
        if slot.is_finite() {
            continue;
        }
        *slot = match strategy {
            ImputationStrategy::Default => space.parameter_at(index).default_vector()?,
            ImputationStrategy::Value(sentinel) => sentinel,
        };
    }
    Configuration::from_vector_unchecked(Arc::clone(space), vector)
}
