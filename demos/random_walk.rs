//! Random-neighbor walk and imputation for numeric consumers.
//!
//! Takes single random steps through a conditional space (each step
//! mutates one active parameter and is validated by reconstruction, so
//! steps that would flip the active set are rejected and redrawn), then
//! shows how an inactive parameter is imputed away for a tree-based model.
//!
//! Run with: `cargo run --example random_walk`

use std::collections::HashMap;
use std::sync::Arc;

use configspace::prelude::*;

fn main() {
    let mut space = ConfigurationSpace::new();
    space
        .add_parameter(CategoricalParam::new("method", ["linear", "tree"]))
        .unwrap();
    space.add_parameter(IntParam::new("depth", 1, 16)).unwrap();
    space
        .add_parameter(FloatParam::new("reg", 0.0, 1.0))
        .unwrap();
    space
        .add_condition(Condition::equals("depth", "method", "tree"))
        .unwrap();
    let space = Arc::new(space);

    let values = HashMap::from([
        ("method".to_owned(), Value::from("tree")),
        ("depth".to_owned(), Value::Int(8)),
        ("reg".to_owned(), Value::Float(0.3)),
    ]);
    let mut current = Configuration::from_values(Arc::clone(&space), &values).unwrap();
    println!("start:   {:?}", current.vector());

    for seed in 0..10 {
        match get_random_neighbor(&current, seed) {
            Ok(next) => {
                println!("step {seed}: {:?}", next.vector());
                current = next;
            }
            Err(Error::SearchExhausted { attempts }) => {
                println!("step {seed}: no acceptable neighbor after {attempts} attempts");
                break;
            }
            Err(err) => panic!("unexpected failure: {err}"),
        }
    }

    // Tree models cannot split on "missing": fill the inactive depth slot.
    let linear = Configuration::from_values(
        Arc::clone(&space),
        &HashMap::from([
            ("method".to_owned(), Value::from("linear")),
            ("reg".to_owned(), Value::Float(0.5)),
        ]),
    )
    .unwrap();
    println!("\nsparse:                {:?}", linear.vector());

    let defaults = impute_inactive_values(&linear, ImputationStrategy::Default).unwrap();
    println!("imputed with defaults: {:?}", defaults.vector());

    let sentinel = impute_inactive_values(&linear, ImputationStrategy::Value(-1.0)).unwrap();
    println!("imputed with sentinel: {:?}", sentinel.vector());
}
