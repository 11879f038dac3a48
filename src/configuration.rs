//! Immutable configurations over a space.
//!
//! A configuration is an encoded vector indexed by parameter position,
//! where a missing (inactive) parameter is the `f64::NAN` sentinel. Strict
//! construction enforces the activation invariant (a parameter holds a
//! value iff all of its gating conditions evaluate true over its
//! ancestors' values) and the space's forbidden clauses. Relaxed
//! construction skips both and exists for imputation, whose output
//! intentionally assigns values to inactive parameters.
//!
//! Configurations are never mutated: every engine operation produces new
//! ones.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::space::ConfigurationSpace;
use crate::value::Value;

/// One point in a configuration space.
#[derive(Clone, Debug)]
pub struct Configuration {
    space: Arc<ConfigurationSpace>,
    vector: Vec<f64>,
}

impl Configuration {
    /// Builds a configuration from an encoded vector, validating the
    /// activation invariant and the space's forbidden clauses.
    ///
    /// # Errors
    ///
    /// Returns an error if the vector length does not match the space, an
    /// entry cannot be decoded, an active parameter is missing a value, an
    /// inactive parameter holds one, or a forbidden clause is violated.
    pub fn from_vector(space: Arc<ConfigurationSpace>, vector: Vec<f64>) -> Result<Self> {
        check_length(&space, &vector)?;
        validate_strict(&space, &vector)?;
        Ok(Self { space, vector })
    }

    /// Builds a configuration from an encoded vector without validating
    /// the activation invariant or forbidden clauses. Only the vector
    /// length is checked.
    ///
    /// Exists for imputation; everything else should use
    /// [`Configuration::from_vector`].
    ///
    /// # Errors
    ///
    /// Returns an error if the vector length does not match the space.
    pub fn from_vector_unchecked(space: Arc<ConfigurationSpace>, vector: Vec<f64>) -> Result<Self> {
        check_length(&space, &vector)?;
        Ok(Self { space, vector })
    }

    /// Builds a configuration from a raw-value mapping, deriving the full
    /// activation state along the condition graph and validating it.
    ///
    /// # Errors
    ///
    /// Returns an error if the mapping names an unknown parameter, holds
    /// an illegal value, misses an active parameter, assigns an inactive
    /// one, or violates a forbidden clause.
    pub fn from_values(
        space: Arc<ConfigurationSpace>,
        values: &HashMap<String, Value>,
    ) -> Result<Self> {
        for name in values.keys() {
            if space.index_of(name).is_none() {
                return Err(Error::UnknownParameter { name: name.clone() });
            }
        }
        let mut vector = vec![f64::NAN; space.len()];
        {
            let mut assigned: HashMap<&str, Value> = HashMap::new();
            for idx in space.topological_order() {
                let name = space.name_at(idx);
                if space.is_active_given(name, &assigned) {
                    let Some(value) = values.get(name) else {
                        return Err(Error::MissingActiveValue {
                            name: name.to_owned(),
                        });
                    };
                    vector[idx] = space.parameter_at(idx).inverse_transform(value)?;
                    assigned.insert(name, value.clone());
                } else if values.contains_key(name) {
                    return Err(Error::InactiveWithValue {
                        name: name.to_owned(),
                    });
                }
            }
            check_forbidden(&space, &assigned)?;
        }
        Ok(Self { space, vector })
    }

    /// The space this configuration belongs to.
    #[must_use]
    pub fn space(&self) -> &Arc<ConfigurationSpace> {
        &self.space
    }

    /// The encoded vector, with `f64::NAN` marking missing parameters.
    #[must_use]
    pub fn vector(&self) -> &[f64] {
        &self.vector
    }

    /// Whether the parameter at `index` is missing.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[must_use]
    pub fn is_missing(&self, index: usize) -> bool {
        self.vector[index].is_nan()
    }

    /// The decoded value of a named parameter, or `None` when missing.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown name, or when the slot cannot be
    /// decoded (possible only for sentinel-imputed configurations).
    pub fn get(&self, name: &str) -> Result<Option<Value>> {
        let idx = self
            .space
            .index_of(name)
            .ok_or_else(|| Error::UnknownParameter {
                name: name.to_owned(),
            })?;
        let encoded = self.vector[idx];
        if encoded.is_nan() {
            return Ok(None);
        }
        self.space.parameter_at(idx).transform(encoded).map(Some)
    }

    /// The raw-value mapping of every non-missing parameter.
    ///
    /// # Errors
    ///
    /// Returns an error when a slot cannot be decoded (possible only for
    /// sentinel-imputed configurations).
    pub fn values(&self) -> Result<HashMap<String, Value>> {
        let mut out = HashMap::new();
        for (idx, encoded) in self.vector.iter().enumerate() {
            if encoded.is_nan() {
                continue;
            }
            let name = self.space.name_at(idx);
            out.insert(name.to_owned(), self.space.parameter_at(idx).transform(*encoded)?);
        }
        Ok(out)
    }
}

/// Vector equality with NaN sentinels comparing equal, over the same
/// (shared) space.
impl PartialEq for Configuration {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.space, &other.space)
            && self.vector.len() == other.vector.len()
            && self
                .vector
                .iter()
                .zip(&other.vector)
                .all(|(a, b)| a == b || (a.is_nan() && b.is_nan()))
    }
}

fn check_length(space: &ConfigurationSpace, vector: &[f64]) -> Result<()> {
    if vector.len() != space.len() {
        return Err(Error::VectorLengthMismatch {
            expected: space.len(),
            got: vector.len(),
        });
    }
    Ok(())
}

/// Recomputes the activation state of every parameter in topological
/// order and checks it against value presence, then checks forbidden
/// clauses.
fn validate_strict(space: &ConfigurationSpace, vector: &[f64]) -> Result<()> {
    let mut assigned: HashMap<&str, Value> = HashMap::new();
    for idx in space.topological_order() {
        let name = space.name_at(idx);
        let present = vector[idx].is_finite();
        let active = space.is_active_given(name, &assigned);
        if active && !present {
            return Err(Error::MissingActiveValue {
                name: name.to_owned(),
            });
        }
        if !active && present {
            return Err(Error::InactiveWithValue {
                name: name.to_owned(),
            });
        }
        if present {
            assigned.insert(name, space.parameter_at(idx).transform(vector[idx])?);
        }
    }
    check_forbidden(space, &assigned)
}

fn check_forbidden(space: &ConfigurationSpace, assigned: &HashMap<&str, Value>) -> Result<()> {
    for clause in space.forbidden_clauses() {
        if clause.is_violated(assigned) {
            return Err(Error::ForbiddenClauseViolated {
                clause: clause.to_string(),
            });
        }
    }
    Ok(())
}
