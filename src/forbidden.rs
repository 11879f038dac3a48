//! Forbidden clauses: validity constraints beyond activation conditions.
//!
//! A forbidden clause marks a region of the space as invalid. Clauses are
//! enforced only during strict configuration construction; relaxed
//! construction (imputation) skips them.

use std::collections::HashMap;

use crate::value::Value;

/// A clause describing a forbidden assignment of parameter values.
#[derive(Clone, Debug, PartialEq)]
pub enum ForbiddenClause {
    /// Violated while the parameter holds exactly `value`.
    Equals {
        /// The constrained parameter.
        parameter: String,
        /// The forbidden value.
        value: Value,
    },
    /// Violated while every member clause is violated.
    And(Vec<ForbiddenClause>),
}

impl ForbiddenClause {
    /// Builds a single-parameter equality clause.
    #[must_use]
    pub fn equals(parameter: impl Into<String>, value: impl Into<Value>) -> Self {
        ForbiddenClause::Equals {
            parameter: parameter.into(),
            value: value.into(),
        }
    }

    /// Builds a conjunction violated only when every member is violated.
    #[must_use]
    pub fn all(members: Vec<ForbiddenClause>) -> Self {
        ForbiddenClause::And(members)
    }

    /// Every parameter read by this clause.
    #[must_use]
    pub fn parameter_names(&self) -> Vec<&str> {
        match self {
            ForbiddenClause::Equals { parameter, .. } => vec![parameter],
            ForbiddenClause::And(members) => {
                let mut names = Vec::new();
                for member in members {
                    for name in member.parameter_names() {
                        if !names.contains(&name) {
                            names.push(name);
                        }
                    }
                }
                names
            }
        }
    }

    /// Whether the clause is violated by the given (active) values. A
    /// parameter without a value never violates an equality.
    #[must_use]
    pub fn is_violated(&self, values: &HashMap<&str, Value>) -> bool {
        match self {
            ForbiddenClause::Equals { parameter, value } => {
                values.get(parameter.as_str()) == Some(value)
            }
            ForbiddenClause::And(members) => {
                !members.is_empty() && members.iter().all(|m| m.is_violated(values))
            }
        }
    }
}

impl core::fmt::Display for ForbiddenClause {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ForbiddenClause::Equals { parameter, value } => write!(f, "{parameter} == {value}"),
            ForbiddenClause::And(members) => {
                write!(f, "(")?;
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        write!(f, " && ")?;
                    }
                    write!(f, "{member}")?;
                }
                write!(f, ")")
            }
        }
    }
}
