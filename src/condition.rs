//! Activation conditions gating child parameters on parent values.
//!
//! A condition makes one parameter (the child) active only while a
//! predicate over one or more parent parameters holds. Literal conditions
//! read a single parent; `And`/`Or` conjunctions combine literals gating
//! the same child. Evaluation is defined over raw-domain [`Value`]s; a
//! missing parent is handled by the caller (the gated parameter is forced
//! inactive before evaluation is attempted).
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//!
//! use configspace::{Condition, Value};
//!
//! let cond = Condition::equals("momentum", "optimizer", "sgd");
//! let parents = HashMap::from([("optimizer", Value::from("sgd"))]);
//! assert!(cond.evaluate(&parents));
//! ```

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::value::Value;

/// A predicate over parent parameter values that gates a child parameter.
#[derive(Clone, Debug, PartialEq)]
pub enum Condition {
    /// The child is active while the parent equals `value`.
    Equals {
        /// The gated parameter.
        child: String,
        /// The parameter whose value is read.
        parent: String,
        /// The value the parent must hold.
        value: Value,
    },
    /// The child is active while the parent differs from `value`.
    NotEquals {
        /// The gated parameter.
        child: String,
        /// The parameter whose value is read.
        parent: String,
        /// The value the parent must not hold.
        value: Value,
    },
    /// The child is active while the numeric parent is strictly less than `value`.
    LessThan {
        /// The gated parameter.
        child: String,
        /// The parameter whose value is read.
        parent: String,
        /// The exclusive upper bound.
        value: Value,
    },
    /// The child is active while the numeric parent is strictly greater than `value`.
    GreaterThan {
        /// The gated parameter.
        child: String,
        /// The parameter whose value is read.
        parent: String,
        /// The exclusive lower bound.
        value: Value,
    },
    /// The child is active while the parent holds one of `choices`.
    In {
        /// The gated parameter.
        child: String,
        /// The parameter whose value is read.
        parent: String,
        /// The admissible parent values.
        choices: Vec<Value>,
    },
    /// Active while every member condition is satisfied.
    And(Vec<Condition>),
    /// Active while at least one member condition is satisfied.
    Or(Vec<Condition>),
}

impl Condition {
    /// Builds an equality condition.
    #[must_use]
    pub fn equals(
        child: impl Into<String>,
        parent: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        Condition::Equals {
            child: child.into(),
            parent: parent.into(),
            value: value.into(),
        }
    }

    /// Builds an inequality condition.
    #[must_use]
    pub fn not_equals(
        child: impl Into<String>,
        parent: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        Condition::NotEquals {
            child: child.into(),
            parent: parent.into(),
            value: value.into(),
        }
    }

    /// Builds a strict less-than condition over a numeric parent.
    #[must_use]
    pub fn less_than(
        child: impl Into<String>,
        parent: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        Condition::LessThan {
            child: child.into(),
            parent: parent.into(),
            value: value.into(),
        }
    }

    /// Builds a strict greater-than condition over a numeric parent.
    #[must_use]
    pub fn greater_than(
        child: impl Into<String>,
        parent: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        Condition::GreaterThan {
            child: child.into(),
            parent: parent.into(),
            value: value.into(),
        }
    }

    /// Builds a set-membership condition.
    #[must_use]
    pub fn in_choices<I, T>(child: impl Into<String>, parent: impl Into<String>, choices: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Condition::In {
            child: child.into(),
            parent: parent.into(),
            choices: choices.into_iter().map(Into::into).collect(),
        }
    }

    /// The parameter gated by this condition. For conjunctions, the child
    /// of the first member (all members gate the same child; enforced when
    /// the condition joins a space).
    #[must_use]
    pub fn child(&self) -> &str {
        match self {
            Condition::Equals { child, .. }
            | Condition::NotEquals { child, .. }
            | Condition::LessThan { child, .. }
            | Condition::GreaterThan { child, .. }
            | Condition::In { child, .. } => child,
            Condition::And(members) | Condition::Or(members) => {
                members.first().map_or("", Condition::child)
            }
        }
    }

    /// Every parent parameter read by this condition or any descendant
    /// literal of a conjunction.
    #[must_use]
    pub fn parent_names(&self) -> Vec<&str> {
        match self {
            Condition::Equals { parent, .. }
            | Condition::NotEquals { parent, .. }
            | Condition::LessThan { parent, .. }
            | Condition::GreaterThan { parent, .. }
            | Condition::In { parent, .. } => vec![parent],
            Condition::And(members) | Condition::Or(members) => {
                let mut names = Vec::new();
                for member in members {
                    for name in member.parent_names() {
                        if !names.contains(&name) {
                            names.push(name);
                        }
                    }
                }
                names
            }
        }
    }

    /// Evaluates the predicate over the given parent values.
    ///
    /// A referenced parent absent from `parents` makes the result `false`;
    /// callers are expected to have treated missing ancestors as forcing
    /// the child inactive before calling.
    #[must_use]
    pub fn evaluate(&self, parents: &HashMap<&str, Value>) -> bool {
        match self {
            Condition::Equals { parent, value, .. } => {
                parents.get(parent.as_str()) == Some(value)
            }
            Condition::NotEquals { parent, value, .. } => parents
                .get(parent.as_str())
                .is_some_and(|held| held != value),
            Condition::LessThan { parent, value, .. } => {
                numeric_pair(parents.get(parent.as_str()), value)
                    .is_some_and(|(held, bound)| held < bound)
            }
            Condition::GreaterThan { parent, value, .. } => {
                numeric_pair(parents.get(parent.as_str()), value)
                    .is_some_and(|(held, bound)| held > bound)
            }
            Condition::In {
                parent, choices, ..
            } => parents
                .get(parent.as_str())
                .is_some_and(|held| choices.contains(held)),
            Condition::And(members) => members.iter().all(|m| m.evaluate(parents)),
            Condition::Or(members) => members.iter().any(|m| m.evaluate(parents)),
        }
    }

    /// Checks structural well-formedness: conjunctions must be non-empty
    /// and every member must gate the same child.
    pub(crate) fn validate(&self) -> Result<()> {
        match self {
            Condition::And(members) | Condition::Or(members) => {
                let Some(first) = members.first() else {
                    return Err(Error::InvalidCondition("conjunction has no members"));
                };
                for member in members {
                    member.validate()?;
                    if member.child() != first.child() {
                        return Err(Error::InvalidCondition(
                            "conjunction members gate different children",
                        ));
                    }
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

fn numeric_pair(held: Option<&Value>, bound: &Value) -> Option<(f64, f64)> {
    Some((held?.as_f64()?, bound.as_f64()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parents(entries: &[(&'static str, Value)]) -> HashMap<&'static str, Value> {
        entries.iter().cloned().collect()
    }

    #[test]
    fn equals() {
        let cond = Condition::equals("child", "p", "sgd");
        assert!(cond.evaluate(&parents(&[("p", Value::from("sgd"))])));
        assert!(!cond.evaluate(&parents(&[("p", Value::from("adam"))])));
        assert!(!cond.evaluate(&parents(&[])));
    }

    #[test]
    fn not_equals() {
        let cond = Condition::not_equals("child", "p", "sgd");
        assert!(cond.evaluate(&parents(&[("p", Value::from("adam"))])));
        assert!(!cond.evaluate(&parents(&[("p", Value::from("sgd"))])));
        assert!(!cond.evaluate(&parents(&[])));
    }

    #[test]
    fn ordering_comparisons_are_numeric() {
        let lt = Condition::less_than("child", "p", 5.0);
        assert!(lt.evaluate(&parents(&[("p", Value::Int(3))])));
        assert!(!lt.evaluate(&parents(&[("p", Value::Float(5.0))])));
        assert!(!lt.evaluate(&parents(&[("p", Value::from("three"))])));

        let gt = Condition::greater_than("child", "p", 5.0);
        assert!(gt.evaluate(&parents(&[("p", Value::Float(5.5))])));
        assert!(!gt.evaluate(&parents(&[("p", Value::Int(5))])));
    }

    #[test]
    fn in_choices() {
        let cond = Condition::in_choices("child", "p", ["sgd", "adam"]);
        assert!(cond.evaluate(&parents(&[("p", Value::from("adam"))])));
        assert!(!cond.evaluate(&parents(&[("p", Value::from("rmsprop"))])));
    }

    #[test]
    fn conjunctions() {
        let and = Condition::And(vec![
            Condition::equals("child", "a", true),
            Condition::greater_than("child", "b", 1.0),
        ]);
        assert!(and.evaluate(&parents(&[
            ("a", Value::Bool(true)),
            ("b", Value::Float(2.0)),
        ])));
        assert!(!and.evaluate(&parents(&[
            ("a", Value::Bool(true)),
            ("b", Value::Float(0.5)),
        ])));

        let or = Condition::Or(vec![
            Condition::equals("child", "a", true),
            Condition::greater_than("child", "b", 1.0),
        ]);
        assert!(or.evaluate(&parents(&[
            ("a", Value::Bool(false)),
            ("b", Value::Float(2.0)),
        ])));
        assert!(!or.evaluate(&parents(&[
            ("a", Value::Bool(false)),
            ("b", Value::Float(0.5)),
        ])));
    }

    #[test]
    fn parent_names_of_conjunction_are_deduplicated() {
        let cond = Condition::And(vec![
            Condition::equals("child", "a", 1_i64),
            Condition::not_equals("child", "a", 3_i64),
            Condition::equals("child", "b", 2_i64),
        ]);
        assert_eq!(cond.parent_names(), vec!["a", "b"]);
        assert_eq!(cond.child(), "child");
    }

    #[test]
    fn conjunction_validation() {
        assert!(Condition::And(Vec::new()).validate().is_err());
        let mixed = Condition::Or(vec![
            Condition::equals("x", "a", 1_i64),
            Condition::equals("y", "a", 1_i64),
        ]);
        assert!(mixed.validate().is_err());
        let ok = Condition::And(vec![
            Condition::equals("x", "a", 1_i64),
            Condition::equals("x", "b", 1_i64),
        ]);
        assert!(ok.validate().is_ok());
    }
}
