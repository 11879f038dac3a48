//! Activation propagation along the condition graph.
//!
//! After one vector slot changes, the active/inactive status of every
//! transitively dependent parameter may be stale. [`propagate_activation`]
//! walks the condition graph outward from the changed parameter with an
//! explicit work queue (never recursion; condition chains can be deep)
//! and restores the invariant: a parameter holds a value iff all of its
//! gating conditions pass.

use std::collections::{HashMap, VecDeque};

use crate::error::{Error, Result};
use crate::space::ConfigurationSpace;
use crate::value::Value;

/// Repairs the activation state of every parameter reachable from
/// `changed`, whose new value must already be written into `vector`.
///
/// Each visited node is evaluated fresh against the current vector: it is
/// active only if no gating condition fails and no referenced ancestor is
/// missing. A node that becomes active receives its encoded default and
/// its own children are enqueued, since reactivation can ripple further
/// down. A node that becomes inactive is cleared to the missing sentinel;
/// its children are deliberately not re-examined in the same pass and are
/// only revisited if another propagation path reaches them, which can
/// leave stale values on grandchildren whose only gating ancestor was
/// deactivated. Strict construction of the resulting vector still rejects
/// such states.
///
/// # Errors
///
/// Returns an error if `changed` or a condition parent does not resolve
/// in `space`, or an ancestor slot cannot be decoded.
pub(crate) fn propagate_activation(
    space: &ConfigurationSpace,
    vector: &mut [f64],
    changed: &str,
) -> Result<()> {
    let mut queue: VecDeque<&str> = space.children_of(changed).iter().map(String::as_str).collect();
    while let Some(name) = queue.pop_front() {
        let idx = space
            .index_of(name)
            .ok_or_else(|| Error::UnknownParameter {
                name: name.to_owned(),
            })?;
        let holds_value = vector[idx].is_finite();
        let active = is_active(space, vector, name)?;
        if active && !holds_value {
            vector[idx] = space.parameter_at(idx).default_vector()?;
            for child in space.children_of(name) {
                queue.push_back(child.as_str());
            }
        } else if !active && holds_value {
            vector[idx] = f64::NAN;
        }
    }
    Ok(())
}

/// Evaluates every condition gating `name` against the current vector.
/// Gating is conjunctive: one failing condition or one missing referenced
/// ancestor makes the parameter inactive.
fn is_active(space: &ConfigurationSpace, vector: &[f64], name: &str) -> Result<bool> {
    for condition in space.conditions_of(name) {
        let mut parents: HashMap<&str, Value> = HashMap::new();
        for parent in condition.parent_names() {
            let idx = space
                .index_of(parent)
                .ok_or_else(|| Error::UnknownParameter {
                    name: parent.to_owned(),
                })?;
            let encoded = vector[idx];
            if !encoded.is_finite() {
                return Ok(false);
            }
            parents.insert(parent, space.parameter_at(idx).transform(encoded)?);
        }
        if !condition.evaluate(&parents) {
            return Ok(false);
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::Condition;
    use crate::parameter::{CategoricalParam, FloatParam};

    /// a gates b, b gates c: a chain of equality conditions on "on".
    fn chain_space() -> ConfigurationSpace {
        let mut space = ConfigurationSpace::new();
        for name in ["a", "b", "c"] {
            space
                .add_parameter(CategoricalParam::new(name, ["off", "on"]))
                .unwrap();
        }
        space
            .add_condition(Condition::equals("b", "a", "on"))
            .unwrap();
        space
            .add_condition(Condition::equals("c", "b", "on"))
            .unwrap();
        space
    }

    #[test]
    fn activation_ripples_down_with_defaults() {
        let space = chain_space();
        // a=off, b and c inactive; flip a to on.
        let mut vector = vec![1.0, f64::NAN, f64::NAN];
        propagate_activation(&space, &mut vector, "a").unwrap();
        // b activates at its default ("off"), which keeps c inactive.
        assert!((vector[1] - 0.0).abs() < f64::EPSILON);
        assert!(vector[2].is_nan());
    }

    #[test]
    fn reactivation_reaches_grandchildren() {
        let mut space = ConfigurationSpace::new();
        space
            .add_parameter(CategoricalParam::new("a", ["off", "on"]))
            .unwrap();
        space
            .add_parameter(CategoricalParam::new("b", ["on", "off"]))
            .unwrap();
        space
            .add_parameter(FloatParam::new("c", 0.0, 1.0))
            .unwrap();
        space
            .add_condition(Condition::equals("b", "a", "on"))
            .unwrap();
        space
            .add_condition(Condition::equals("c", "b", "on"))
            .unwrap();
        // b defaults to "on", so flipping a must activate b and then c.
        let mut vector = vec![1.0, f64::NAN, f64::NAN];
        propagate_activation(&space, &mut vector, "a").unwrap();
        assert!((vector[1] - 0.0).abs() < f64::EPSILON);
        assert!((vector[2] - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn deactivation_does_not_revisit_grandchildren() {
        let space = chain_space();
        // Everything on; flip a to off. b is visited as a's child and
        // cleared, but clearing it does not enqueue c, so c keeps its
        // stale value until some other propagation path reaches it.
        let mut vector = vec![0.0, 1.0, 1.0];
        propagate_activation(&space, &mut vector, "a").unwrap();
        assert!(vector[1].is_nan());
        assert!((vector[2] - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn no_transition_leaves_vector_untouched() {
        let space = chain_space();
        let mut vector = vec![1.0, 1.0, 1.0];
        let before = vector.clone();
        propagate_activation(&space, &mut vector, "a").unwrap();
        assert_eq!(vector, before);
    }

    #[test]
    fn missing_ancestor_forces_inactive() {
        let mut space = ConfigurationSpace::new();
        space
            .add_parameter(CategoricalParam::new("a", ["off", "on"]))
            .unwrap();
        space
            .add_parameter(CategoricalParam::new("b", ["off", "on"]))
            .unwrap();
        space
            .add_parameter(FloatParam::new("c", 0.0, 1.0))
            .unwrap();
        // c requires both a == on and b == on.
        space
            .add_condition(Condition::And(vec![
                Condition::equals("c", "a", "on"),
                Condition::equals("c", "b", "on"),
            ]))
            .unwrap();
        // b itself is gated on a.
        space
            .add_condition(Condition::equals("b", "a", "on"))
            .unwrap();
        // a off, b stale-on, c on: flipping a off must clear b, and c's
        // condition sees the missing b ancestor once its turn comes.
        let mut vector = vec![0.0, 1.0, 0.5];
        propagate_activation(&space, &mut vector, "a").unwrap();
        assert!(vector[1].is_nan());
        assert!(vector[2].is_nan());
    }
}
