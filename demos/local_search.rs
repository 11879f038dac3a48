//! Local search over a conditional space: the "hello world" of the crate.
//!
//! Builds a small hyperparameter space where `momentum` only exists while
//! the optimizer is sgd, then hill-climbs: evaluate every configuration in
//! the one-exchange neighbourhood, move to the best one, stop when no
//! neighbor improves.
//!
//! Run with: `cargo run --example local_search`

use std::sync::Arc;

use configspace::prelude::*;

/// Synthetic loss: prefers a learning rate near 1e-3, and under sgd a
/// momentum near 0.9. Configurations without momentum pay a flat penalty.
fn loss(config: &Configuration) -> f64 {
    let Some(Value::Float(lr)) = config.get("lr").unwrap() else {
        return f64::INFINITY;
    };
    let base = (lr.ln() - (1e-3_f64).ln()).powi(2);
    match config.get("momentum").unwrap() {
        Some(Value::Float(momentum)) => base + (momentum - 0.9).powi(2),
        _ => base + 0.5,
    }
}

fn main() {
    let mut space = ConfigurationSpace::new();
    space
        .add_parameter(CategoricalParam::new("optimizer", ["sgd", "adam"]))
        .unwrap();
    space
        .add_parameter(FloatParam::new("lr", 1e-4, 1e-1).log_scale())
        .unwrap();
    space
        .add_parameter(FloatParam::new("momentum", 0.0, 1.0).default_value(0.5))
        .unwrap();
    space
        .add_condition(Condition::equals("momentum", "optimizer", "sgd"))
        .unwrap();
    let space = Arc::new(space);

    let mut current = space.default_configuration().unwrap();
    let mut best = loss(&current);
    println!("start: loss={best:.4}");

    for seed in 0..50_u64 {
        let neighbourhood = get_one_exchange_neighbourhood(&current, seed).unwrap();
        let Some((candidate, value)) = neighbourhood
            .into_iter()
            .map(|c| {
                let v = loss(&c);
                (c, v)
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
        else {
            break;
        };
        if value >= best {
            println!("round {seed}: no improving neighbor, stopping");
            break;
        }
        println!("round {seed}: loss {best:.4} -> {value:.4}");
        current = candidate;
        best = value;
    }

    println!("\nbest configuration (loss={best:.4}):");
    for name in ["optimizer", "lr", "momentum"] {
        match current.get(name).unwrap() {
            Some(value) => println!("  {name} = {value}"),
            None => println!("  {name} = (inactive)"),
        }
    }
}
