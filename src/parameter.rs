//! Parameter types, vector encoding, and neighbor generation.
//!
//! Each parameter lives in two domains: the raw domain of [`Value`]s the
//! caller sees, and the encoded domain of `f64` vector entries that
//! configurations store. Continuous and integer parameters encode to the
//! unit interval, categorical and ordinal parameters to their choice index.
//!
//! Neighbor generation dispatches on cardinality rather than on type
//! identity: a parameter reports [`NeighborCount::Zero`],
//! [`NeighborCount::Finite`], or [`NeighborCount::Infinite`] for its
//! current value, and search code treats those classes uniformly.
//!
//! # Example
//!
//! ```
//! use configspace::{CategoricalParam, FloatParam, NeighborCount, Parameter};
//!
//! let lr: Parameter = FloatParam::new("lr", 1e-5, 1e-1).log_scale().into();
//! assert_eq!(lr.num_neighbors(0.5), NeighborCount::Infinite);
//!
//! let opt: Parameter = CategoricalParam::new("opt", ["sgd", "adam", "rmsprop"]).into();
//! assert_eq!(opt.num_neighbors(0.0), NeighborCount::Finite(2));
//! ```

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::rng_util;
use crate::value::Value;

/// Standard deviation, in the encoded unit interval, of the normal
/// perturbation used to draw neighbors of continuous and integer values.
const NEIGHBOR_STD_DEV: f64 = 0.2;

/// How many neighbors a parameter has for a given current value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NeighborCount {
    /// No perturbation is possible (constants, single-choice parameters).
    Zero,
    /// A small enumerable neighbor set (categorical and ordinal parameters).
    Finite(usize),
    /// Unboundedly many neighbors (continuous and integer parameters).
    Infinite,
}

/// A continuous parameter over `[low, high]`, optionally log-scaled.
///
/// # Example
///
/// ```
/// use configspace::FloatParam;
///
/// let momentum = FloatParam::new("momentum", 0.0, 1.0).default_value(0.9);
/// let lr = FloatParam::new("lr", 1e-5, 1e-1).log_scale();
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct FloatParam {
    name: String,
    low: f64,
    high: f64,
    log_scale: bool,
    default: Option<f64>,
}

impl FloatParam {
    /// Creates a new float parameter with the given bounds.
    #[must_use]
    pub fn new(name: impl Into<String>, low: f64, high: f64) -> Self {
        Self {
            name: name.into(),
            low,
            high,
            log_scale: false,
            default: None,
        }
    }

    /// Enables log-scale encoding.
    #[must_use]
    pub fn log_scale(mut self) -> Self {
        self.log_scale = true;
        self
    }

    /// Overrides the default value (otherwise the midpoint of the range,
    /// or the geometric mean under log scale).
    #[must_use]
    pub fn default_value(mut self, default: f64) -> Self {
        self.default = Some(default);
        self
    }

    fn resolved_default(&self) -> f64 {
        self.default.unwrap_or_else(|| {
            if self.log_scale {
                ((self.low.ln() + self.high.ln()) / 2.0).exp()
            } else {
                (self.low + self.high) / 2.0
            }
        })
    }

    fn encode(&self, value: f64) -> f64 {
        if self.log_scale {
            (value.ln() - self.low.ln()) / (self.high.ln() - self.low.ln())
        } else {
            (value - self.low) / (self.high - self.low)
        }
    }

    fn decode(&self, encoded: f64) -> f64 {
        if self.log_scale {
            (self.low.ln() + encoded * (self.high.ln() - self.low.ln())).exp()
        } else {
            self.low + encoded * (self.high - self.low)
        }
    }

    fn validate(&self) -> Result<()> {
        if self.low >= self.high {
            return Err(Error::InvalidBounds {
                low: self.low,
                high: self.high,
            });
        }
        if self.log_scale && self.low <= 0.0 {
            return Err(Error::InvalidLogBounds);
        }
        let default = self.resolved_default();
        if !(self.low..=self.high).contains(&default) {
            return Err(Error::IllegalValue {
                name: self.name.clone(),
                value: default.to_string(),
            });
        }
        Ok(())
    }

    fn neighbors(&self, encoded: f64, rng: &mut fastrand::Rng, count: usize) -> Vec<f64> {
        let mut out = Vec::with_capacity(count);
        while out.len() < count {
            let candidate = rng_util::normal(rng, encoded, NEIGHBOR_STD_DEV);
            if (0.0..=1.0).contains(&candidate) && (candidate - encoded).abs() > f64::EPSILON {
                out.push(candidate);
            }
        }
        out
    }
}

/// An integer parameter over `[low, high]`, optionally log-scaled.
///
/// Encoded like a float parameter, with rounding to the integer grid on
/// decode.
#[derive(Clone, Debug, PartialEq)]
pub struct IntParam {
    name: String,
    low: i64,
    high: i64,
    log_scale: bool,
    default: Option<i64>,
}

impl IntParam {
    /// Creates a new integer parameter with the given bounds.
    #[must_use]
    pub fn new(name: impl Into<String>, low: i64, high: i64) -> Self {
        Self {
            name: name.into(),
            low,
            high,
            log_scale: false,
            default: None,
        }
    }

    /// Enables log-scale encoding.
    #[must_use]
    pub fn log_scale(mut self) -> Self {
        self.log_scale = true;
        self
    }

    /// Overrides the default value (otherwise the rounded midpoint).
    #[must_use]
    pub fn default_value(mut self, default: i64) -> Self {
        self.default = Some(default);
        self
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    fn resolved_default(&self) -> i64 {
        self.default.unwrap_or_else(|| {
            if self.log_scale {
                let mid = ((self.low as f64).ln() + (self.high as f64).ln()) / 2.0;
                (mid.exp().round() as i64).clamp(self.low, self.high)
            } else {
                self.low + (self.high - self.low) / 2
            }
        })
    }

    #[allow(clippy::cast_precision_loss)]
    fn encode(&self, value: i64) -> f64 {
        if self.log_scale {
            ((value as f64).ln() - (self.low as f64).ln())
                / ((self.high as f64).ln() - (self.low as f64).ln())
        } else {
            (value - self.low) as f64 / (self.high - self.low) as f64
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    fn decode(&self, encoded: f64) -> i64 {
        let raw = if self.log_scale {
            ((self.low as f64).ln()
                + encoded * ((self.high as f64).ln() - (self.low as f64).ln()))
            .exp()
        } else {
            self.low as f64 + encoded * (self.high - self.low) as f64
        };
        (raw.round() as i64).clamp(self.low, self.high)
    }

    #[allow(clippy::cast_precision_loss)]
    fn validate(&self) -> Result<()> {
        if self.low >= self.high {
            return Err(Error::InvalidBounds {
                low: self.low as f64,
                high: self.high as f64,
            });
        }
        if self.log_scale && self.low < 1 {
            return Err(Error::InvalidLogBounds);
        }
        let default = self.resolved_default();
        if !(self.low..=self.high).contains(&default) {
            return Err(Error::IllegalValue {
                name: self.name.clone(),
                value: default.to_string(),
            });
        }
        Ok(())
    }

    /// Draws up to `count` distinct integer neighbors of the current value,
    /// normally perturbed in encoded space. When the whole range holds no
    /// more than `count` other values they are enumerated instead, so the
    /// caller can detect an exhausted domain by a short batch.
    #[allow(clippy::cast_sign_loss)]
    fn neighbors(&self, encoded: f64, rng: &mut fastrand::Rng, count: usize) -> Vec<f64> {
        let current = self.decode(encoded);
        let others = (self.high - self.low) as usize;
        if others <= count {
            return (self.low..=self.high)
                .filter(|v| *v != current)
                .map(|v| self.encode(v))
                .collect();
        }
        let mut seen = HashSet::new();
        let mut out = Vec::with_capacity(count);
        while out.len() < count {
            let candidate = rng_util::normal(rng, encoded, NEIGHBOR_STD_DEV);
            if !(0.0..=1.0).contains(&candidate) {
                continue;
            }
            let value = self.decode(candidate);
            if value != current && seen.insert(value) {
                out.push(self.encode(value));
            }
        }
        out
    }
}

/// A categorical parameter choosing among an unordered set of raw values.
///
/// # Example
///
/// ```
/// use configspace::CategoricalParam;
///
/// let opt = CategoricalParam::new("optimizer", ["sgd", "adam"]).default_value("adam");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct CategoricalParam {
    name: String,
    choices: Vec<Value>,
    default: Option<Value>,
}

impl CategoricalParam {
    /// Creates a new categorical parameter with the given choices.
    #[must_use]
    pub fn new<I, T>(name: impl Into<String>, choices: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Self {
            name: name.into(),
            choices: choices.into_iter().map(Into::into).collect(),
            default: None,
        }
    }

    /// Overrides the default choice (otherwise the first one).
    #[must_use]
    pub fn default_value(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }
}

/// An ordinal parameter choosing among an ordered sequence of raw values.
///
/// Unlike a categorical parameter, only the adjacent sequence elements are
/// neighbors of the current value.
#[derive(Clone, Debug, PartialEq)]
pub struct OrdinalParam {
    name: String,
    sequence: Vec<Value>,
    default: Option<Value>,
}

impl OrdinalParam {
    /// Creates a new ordinal parameter over the given ordered sequence.
    #[must_use]
    pub fn new<I, T>(name: impl Into<String>, sequence: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Self {
            name: name.into(),
            sequence: sequence.into_iter().map(Into::into).collect(),
            default: None,
        }
    }

    /// Overrides the default element (otherwise the first one).
    #[must_use]
    pub fn default_value(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }
}

/// A parameter fixed to a single value. It is always active when
/// unconditioned but never perturbable.
#[derive(Clone, Debug, PartialEq)]
pub struct ConstantParam {
    name: String,
    value: Value,
}

impl ConstantParam {
    /// Creates a new constant parameter.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Enum wrapping all parameter types.
#[derive(Clone, Debug, PartialEq)]
pub enum Parameter {
    /// A continuous parameter.
    Float(FloatParam),
    /// An integer parameter.
    Int(IntParam),
    /// A categorical parameter.
    Categorical(CategoricalParam),
    /// An ordinal parameter.
    Ordinal(OrdinalParam),
    /// A constant parameter.
    Constant(ConstantParam),
}

impl From<FloatParam> for Parameter {
    fn from(p: FloatParam) -> Self {
        Parameter::Float(p)
    }
}

impl From<IntParam> for Parameter {
    fn from(p: IntParam) -> Self {
        Parameter::Int(p)
    }
}

impl From<CategoricalParam> for Parameter {
    fn from(p: CategoricalParam) -> Self {
        Parameter::Categorical(p)
    }
}

impl From<OrdinalParam> for Parameter {
    fn from(p: OrdinalParam) -> Self {
        Parameter::Ordinal(p)
    }
}

impl From<ConstantParam> for Parameter {
    fn from(p: ConstantParam) -> Self {
        Parameter::Constant(p)
    }
}

impl Parameter {
    /// Returns the parameter's name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Parameter::Float(p) => &p.name,
            Parameter::Int(p) => &p.name,
            Parameter::Categorical(p) => &p.name,
            Parameter::Ordinal(p) => &p.name,
            Parameter::Constant(p) => &p.name,
        }
    }

    /// Validates the parameter's declaration.
    ///
    /// # Errors
    ///
    /// Returns an error for inverted bounds, a non-positive log-scale lower
    /// bound, empty or duplicated choices, or an out-of-domain default.
    pub fn validate(&self) -> Result<()> {
        match self {
            Parameter::Float(p) => p.validate(),
            Parameter::Int(p) => p.validate(),
            Parameter::Categorical(p) => validate_choices(&p.name, &p.choices, p.default.as_ref()),
            Parameter::Ordinal(p) => validate_choices(&p.name, &p.sequence, p.default.as_ref()),
            Parameter::Constant(_) => Ok(()),
        }
    }

    /// Returns the default value in the raw domain.
    #[must_use]
    pub fn default_value(&self) -> Value {
        match self {
            Parameter::Float(p) => Value::Float(p.resolved_default()),
            Parameter::Int(p) => Value::Int(p.resolved_default()),
            Parameter::Categorical(p) => p
                .default
                .clone()
                .or_else(|| p.choices.first().cloned())
                .unwrap_or(Value::Float(f64::NAN)),
            Parameter::Ordinal(p) => p
                .default
                .clone()
                .or_else(|| p.sequence.first().cloned())
                .unwrap_or(Value::Float(f64::NAN)),
            Parameter::Constant(p) => p.value.clone(),
        }
    }

    /// Returns the encoded form of the default value.
    ///
    /// # Errors
    ///
    /// Returns an error if the default is not legal for the parameter; a
    /// parameter accepted by [`Parameter::validate`] never fails here.
    pub fn default_vector(&self) -> Result<f64> {
        self.inverse_transform(&self.default_value())
    }

    /// Decodes an encoded vector entry into the raw domain.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IllegalVectorValue`] for a non-finite entry, an
    /// out-of-interval continuous entry, or an out-of-range choice index.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn transform(&self, encoded: f64) -> Result<Value> {
        if !encoded.is_finite() {
            return Err(Error::IllegalVectorValue {
                name: self.name().to_owned(),
                value: encoded,
            });
        }
        match self {
            Parameter::Float(p) => {
                if !(0.0..=1.0).contains(&encoded) {
                    return Err(Error::IllegalVectorValue {
                        name: p.name.clone(),
                        value: encoded,
                    });
                }
                Ok(Value::Float(p.decode(encoded)))
            }
            Parameter::Int(p) => {
                if !(0.0..=1.0).contains(&encoded) {
                    return Err(Error::IllegalVectorValue {
                        name: p.name.clone(),
                        value: encoded,
                    });
                }
                Ok(Value::Int(p.decode(encoded)))
            }
            Parameter::Categorical(p) => {
                choice_at(&p.name, &p.choices, encoded)
            }
            Parameter::Ordinal(p) => {
                choice_at(&p.name, &p.sequence, encoded)
            }
            Parameter::Constant(p) => Ok(p.value.clone()),
        }
    }

    /// Encodes a raw value into its vector form.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IllegalValue`] for a value of the wrong type, out of
    /// bounds, or not among the declared choices.
    #[allow(clippy::cast_precision_loss)]
    pub fn inverse_transform(&self, value: &Value) -> Result<f64> {
        let illegal = || Error::IllegalValue {
            name: self.name().to_owned(),
            value: value.to_string(),
        };
        match self {
            Parameter::Float(p) => {
                let v = value.as_f64().ok_or_else(illegal)?;
                if !(p.low..=p.high).contains(&v) {
                    return Err(illegal());
                }
                Ok(p.encode(v))
            }
            Parameter::Int(p) => {
                let Value::Int(v) = value else {
                    return Err(illegal());
                };
                if !(p.low..=p.high).contains(v) {
                    return Err(illegal());
                }
                Ok(p.encode(*v))
            }
            Parameter::Categorical(p) => p
                .choices
                .iter()
                .position(|c| c == value)
                .map(|i| i as f64)
                .ok_or_else(illegal),
            Parameter::Ordinal(p) => p
                .sequence
                .iter()
                .position(|c| c == value)
                .map(|i| i as f64)
                .ok_or_else(illegal),
            Parameter::Constant(p) => {
                if *value == p.value {
                    Ok(0.0)
                } else {
                    Err(illegal())
                }
            }
        }
    }

    /// Whether the raw value is legal for this parameter.
    #[must_use]
    pub fn is_legal(&self, value: &Value) -> bool {
        self.inverse_transform(value).is_ok()
    }

    /// Classifies the neighbor cardinality of the current encoded value.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    #[must_use]
    pub fn num_neighbors(&self, encoded: f64) -> NeighborCount {
        match self {
            Parameter::Float(_) | Parameter::Int(_) => NeighborCount::Infinite,
            Parameter::Categorical(p) => {
                if p.choices.len() <= 1 {
                    NeighborCount::Zero
                } else {
                    NeighborCount::Finite(p.choices.len() - 1)
                }
            }
            Parameter::Ordinal(p) => {
                let len = p.sequence.len();
                if len <= 1 {
                    return NeighborCount::Zero;
                }
                let index = encoded.round().max(0.0) as usize;
                if index == 0 || index >= len - 1 {
                    NeighborCount::Finite(1)
                } else {
                    NeighborCount::Finite(2)
                }
            }
            Parameter::Constant(_) => NeighborCount::Zero,
        }
    }

    /// Whether the current encoded value has at least one neighbor.
    #[must_use]
    pub fn has_neighbors(&self, encoded: f64) -> bool {
        self.num_neighbors(encoded) != NeighborCount::Zero
    }

    /// Draws neighbors of the current encoded value, in the encoded domain.
    ///
    /// Finite parameters return their full neighbor set (ascending) when
    /// `count` covers it, and a uniform sample of `count` distinct members
    /// otherwise. Infinite parameters draw `count` values by normal
    /// perturbation; an integer parameter may return fewer when its range
    /// holds fewer distinct neighbors.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::cast_sign_loss)]
    #[must_use]
    pub fn neighbors(&self, encoded: f64, rng: &mut fastrand::Rng, count: usize) -> Vec<f64> {
        match self {
            Parameter::Float(p) => p.neighbors(encoded, rng, count),
            Parameter::Int(p) => p.neighbors(encoded, rng, count),
            Parameter::Categorical(p) => {
                let current = encoded.round().max(0.0) as usize;
                let others: Vec<f64> = (0..p.choices.len())
                    .filter(|j| *j != current)
                    .map(|j| j as f64)
                    .collect();
                sample_finite(others, rng, count)
            }
            Parameter::Ordinal(p) => {
                let current = encoded.round().max(0.0) as usize;
                let mut adjacent = Vec::with_capacity(2);
                if current > 0 {
                    adjacent.push((current - 1) as f64);
                }
                if current + 1 < p.sequence.len() {
                    adjacent.push((current + 1) as f64);
                }
                sample_finite(adjacent, rng, count)
            }
            Parameter::Constant(_) => Vec::new(),
        }
    }
}

/// Returns the full set when `count` covers it, otherwise `count` distinct
/// members drawn uniformly.
fn sample_finite(mut full: Vec<f64>, rng: &mut fastrand::Rng, count: usize) -> Vec<f64> {
    if count >= full.len() {
        return full;
    }
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        out.push(full.swap_remove(rng.usize(0..full.len())));
    }
    out
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn choice_at(name: &str, choices: &[Value], encoded: f64) -> Result<Value> {
    let index = encoded.round();
    if index < 0.0 || index as usize >= choices.len() {
        return Err(Error::IllegalVectorValue {
            name: name.to_owned(),
            value: encoded,
        });
    }
    Ok(choices[index as usize].clone())
}

fn validate_choices(name: &str, choices: &[Value], default: Option<&Value>) -> Result<()> {
    if choices.is_empty() {
        return Err(Error::EmptyChoices);
    }
    for (i, choice) in choices.iter().enumerate() {
        if choices[..i].contains(choice) {
            return Err(Error::DuplicateChoice {
                name: name.to_owned(),
                value: choice.to_string(),
            });
        }
    }
    if let Some(default) = default {
        if !choices.contains(default) {
            return Err(Error::IllegalValue {
                name: name.to_owned(),
                value: default.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn float_roundtrip() {
        let p: Parameter = FloatParam::new("x", 2.0, 10.0).into();
        let encoded = p.inverse_transform(&Value::Float(4.0)).unwrap();
        assert_eq!(encoded, 0.25);
        assert_eq!(p.transform(encoded).unwrap(), Value::Float(4.0));
    }

    #[test]
    fn float_log_roundtrip() {
        let p: Parameter = FloatParam::new("lr", 1e-4, 1e-1).log_scale().into();
        let encoded = p.inverse_transform(&Value::Float(1e-2)).unwrap();
        let Value::Float(back) = p.transform(encoded).unwrap() else {
            panic!("expected float");
        };
        assert!((back - 1e-2).abs() < 1e-12);
    }

    #[test]
    fn float_default_midpoint() {
        let p: Parameter = FloatParam::new("x", 0.0, 10.0).into();
        assert_eq!(p.default_value(), Value::Float(5.0));
        assert_eq!(p.default_vector().unwrap(), 0.5);
    }

    #[test]
    fn float_validate_rejects_bad_declarations() {
        assert!(Parameter::from(FloatParam::new("x", 1.0, 0.0)).validate().is_err());
        assert!(
            Parameter::from(FloatParam::new("x", -1.0, 1.0).log_scale())
                .validate()
                .is_err()
        );
        assert!(
            Parameter::from(FloatParam::new("x", 0.0, 1.0).default_value(2.0))
                .validate()
                .is_err()
        );
    }

    #[test]
    fn float_neighbors_stay_in_unit_interval() {
        let p: Parameter = FloatParam::new("x", 0.0, 1.0).into();
        let mut rng = fastrand::Rng::with_seed(3);
        for start in [0.0, 0.5, 1.0] {
            for n in p.neighbors(start, &mut rng, 4) {
                assert!((0.0..=1.0).contains(&n));
                assert_ne!(n, start);
            }
        }
    }

    #[test]
    fn int_roundtrip_and_clamping() {
        let p: Parameter = IntParam::new("n", 0, 8).into();
        let encoded = p.inverse_transform(&Value::Int(6)).unwrap();
        assert_eq!(p.transform(encoded).unwrap(), Value::Int(6));
        // Decoding rounds onto the grid.
        assert_eq!(p.transform(0.49).unwrap(), Value::Int(4));
    }

    #[test]
    fn int_neighbors_are_distinct_integers() {
        let p: Parameter = IntParam::new("n", 0, 100).into();
        let mut rng = fastrand::Rng::with_seed(9);
        let current = p.inverse_transform(&Value::Int(50)).unwrap();
        let neighbors = p.neighbors(current, &mut rng, 4);
        assert_eq!(neighbors.len(), 4);
        let mut decoded: Vec<Value> = neighbors
            .iter()
            .map(|n| p.transform(*n).unwrap())
            .collect();
        decoded.dedup();
        assert_eq!(decoded.len(), 4);
        assert!(!decoded.contains(&Value::Int(50)));
    }

    #[test]
    fn int_neighbors_exhaust_small_ranges() {
        let p: Parameter = IntParam::new("flag", 0, 1).into();
        let mut rng = fastrand::Rng::with_seed(1);
        let neighbors = p.neighbors(0.0, &mut rng, 4);
        assert_eq!(neighbors.len(), 1);
        assert_eq!(p.transform(neighbors[0]).unwrap(), Value::Int(1));
    }

    #[test]
    fn categorical_neighbors_enumerate_other_choices() {
        let p: Parameter = CategoricalParam::new("opt", ["sgd", "adam", "rmsprop"]).into();
        assert_eq!(p.num_neighbors(1.0), NeighborCount::Finite(2));
        let mut rng = fastrand::Rng::with_seed(0);
        assert_eq!(p.neighbors(1.0, &mut rng, 2), vec![0.0, 2.0]);
    }

    #[test]
    fn categorical_single_draw_is_another_choice() {
        let p: Parameter = CategoricalParam::new("opt", ["sgd", "adam", "rmsprop"]).into();
        let mut rng = fastrand::Rng::with_seed(11);
        for _ in 0..20 {
            let drawn = p.neighbors(0.0, &mut rng, 1);
            assert_eq!(drawn.len(), 1);
            assert_ne!(drawn[0], 0.0);
        }
    }

    #[test]
    fn categorical_rejects_unknown_choice() {
        let p: Parameter = CategoricalParam::new("opt", ["sgd", "adam"]).into();
        assert!(p.is_legal(&Value::from("adam")));
        assert!(!p.is_legal(&Value::from("adagrad")));
        assert!(p.inverse_transform(&Value::from("adagrad")).is_err());
        assert!(p.transform(5.0).is_err());
        assert!(p.transform(f64::NAN).is_err());
    }

    #[test]
    fn categorical_validate() {
        let empty: Vec<&str> = Vec::new();
        assert!(
            Parameter::from(CategoricalParam::new("c", empty))
                .validate()
                .is_err()
        );
        assert!(
            Parameter::from(CategoricalParam::new("c", ["a", "a"]))
                .validate()
                .is_err()
        );
        assert!(
            Parameter::from(CategoricalParam::new("c", ["a", "b"]).default_value("z"))
                .validate()
                .is_err()
        );
        assert!(
            Parameter::from(CategoricalParam::new("c", ["a", "b"]).default_value("b"))
                .validate()
                .is_ok()
        );
    }

    #[test]
    fn ordinal_neighbors_are_adjacent() {
        let p: Parameter = OrdinalParam::new("size", ["s", "m", "l"]).into();
        let mut rng = fastrand::Rng::with_seed(0);
        assert_eq!(p.num_neighbors(0.0), NeighborCount::Finite(1));
        assert_eq!(p.num_neighbors(1.0), NeighborCount::Finite(2));
        assert_eq!(p.neighbors(1.0, &mut rng, 2), vec![0.0, 2.0]);
        assert_eq!(p.neighbors(2.0, &mut rng, 2), vec![1.0]);
    }

    #[test]
    fn constant_has_no_neighbors() {
        let p: Parameter = ConstantParam::new("seed", 42_i64).into();
        assert_eq!(p.num_neighbors(0.0), NeighborCount::Zero);
        assert!(!p.has_neighbors(0.0));
        let mut rng = fastrand::Rng::with_seed(0);
        assert!(p.neighbors(0.0, &mut rng, 4).is_empty());
        assert_eq!(p.default_vector().unwrap(), 0.0);
        assert_eq!(p.transform(0.0).unwrap(), Value::Int(42));
    }

    #[test]
    fn single_choice_categorical_has_no_neighbors() {
        let p: Parameter = CategoricalParam::new("only", ["x"]).into();
        assert_eq!(p.num_neighbors(0.0), NeighborCount::Zero);
    }
}
