#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::style)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]
#![deny(clippy::pedantic)]
#![deny(clippy::std_instead_of_core)]

//! Neighbourhood generation and activation propagation for hierarchical,
//! conditional configuration spaces: mixed continuous/categorical/ordinal
//! parameter spaces with parent-child activation conditions, as used by
//! local-search and model-based hyperparameter optimizers.
//!
//! Given one configuration, the engine produces nearby valid
//! configurations for local search, repairing the active/inactive state
//! of dependent parameters whenever a value change ripples through the
//! condition graph.
//!
//! # Getting Started
//!
//! ```
//! use std::sync::Arc;
//!
//! use configspace::prelude::*;
//!
//! let mut space = ConfigurationSpace::new();
//! space.add_parameter(CategoricalParam::new("optimizer", ["sgd", "adam"]))?;
//! space.add_parameter(FloatParam::new("momentum", 0.0, 1.0))?;
//! space.add_condition(Condition::equals("momentum", "optimizer", "sgd"))?;
//! let space = Arc::new(space);
//!
//! // Defaults: optimizer = "sgd", so momentum is active at 0.5.
//! let config = space.default_configuration()?;
//!
//! // Every configuration one exchange away, activation repaired.
//! let neighbours = get_one_exchange_neighbourhood(&config, 42)?;
//! assert!(!neighbours.is_empty());
//!
//! // Exactly one random neighbor.
//! let neighbor = get_random_neighbor(&config, 42)?;
//! assert_ne!(neighbor, config);
//!
//! // Fill missing values for consumers that cannot handle them.
//! let full = impute_inactive_values(&neighbours[0], ImputationStrategy::Default)?;
//! assert!(full.vector().iter().all(|v| v.is_finite()));
//! # Ok::<(), configspace::Error>(())
//! ```
//!
//! # Core Concepts
//!
//! | Type | Role |
//! |------|------|
//! | [`ConfigurationSpace`] | The parameter registry with its condition DAG and forbidden clauses. |
//! | [`Configuration`] | An immutable point in the space: an encoded vector with a missing sentinel per inactive parameter. |
//! | [`Parameter`] | One dimension of the space: [`FloatParam`], [`IntParam`], [`CategoricalParam`], [`OrdinalParam`], [`ConstantParam`]. |
//! | [`Condition`] | A predicate over parent values gating a child parameter's activation. |
//! | [`ForbiddenClause`] | A validity constraint beyond activation, enforced at strict construction. |
//!
//! # Operations
//!
//! | Function | Role |
//! |----------|------|
//! | [`get_one_exchange_neighbourhood`] | All accepted single-parameter perturbations, for local-search optimizers. |
//! | [`get_random_neighbor`] | Exactly one random perturbation, for stochastic search. |
//! | [`impute_inactive_values`] | Fill missing values by default or sentinel, for numeric consumers. |
//!
//! Every operation seeds its own RNG from the caller-supplied seed, so
//! results are reproducible and safe to compute concurrently over a
//! shared space.
//!
//! # Feature Flags
//!
//! | Flag | What it enables | Default |
//! |------|----------------|---------|
//! | `tracing` | Structured log events via [`tracing`](https://docs.rs/tracing) at key search points | off |

/// Emit a `tracing::info!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_info {
    ($($arg:tt)*) => { tracing::info!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_info {
    ($($arg:tt)*) => {};
}

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

mod activation;
mod condition;
mod configuration;
mod error;
mod forbidden;
mod neighborhood;
mod parameter;
mod rng_util;
mod space;
mod value;

pub use condition::Condition;
pub use configuration::Configuration;
pub use error::{Error, Result};
pub use forbidden::ForbiddenClause;
pub use neighborhood::{
    ImputationStrategy, get_one_exchange_neighbourhood, get_random_neighbor,
    impute_inactive_values,
};
pub use parameter::{
    CategoricalParam, ConstantParam, FloatParam, IntParam, NeighborCount, OrdinalParam, Parameter,
};
pub use space::ConfigurationSpace;
pub use value::Value;

/// Convenient wildcard import for the most common types.
///
/// ```
/// use configspace::prelude::*;
/// ```
pub mod prelude {
    pub use crate::condition::Condition;
    pub use crate::configuration::Configuration;
    pub use crate::error::{Error, Result};
    pub use crate::forbidden::ForbiddenClause;
    pub use crate::neighborhood::{
        ImputationStrategy, get_one_exchange_neighbourhood, get_random_neighbor,
        impute_inactive_values,
    };
    pub use crate::parameter::{
        CategoricalParam, ConstantParam, FloatParam, IntParam, NeighborCount, OrdinalParam,
        Parameter,
    };
    pub use crate::space::ConfigurationSpace;
    pub use crate::value::Value;
}
