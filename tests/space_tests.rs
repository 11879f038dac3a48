use std::collections::HashMap;
use std::sync::Arc;

use configspace::prelude::*;

/// `mode` gates `level`, whose presence in turn gates `boost`.
fn deep_space() -> Arc<ConfigurationSpace> {
    let mut space = ConfigurationSpace::new();
    space
        .add_parameter(CategoricalParam::new("mode", ["off", "on"]))
        .unwrap();
    space
        .add_parameter(OrdinalParam::new("level", ["low", "medium", "high"]))
        .unwrap();
    space
        .add_parameter(FloatParam::new("boost", 0.0, 1.0))
        .unwrap();
    space
        .add_condition(Condition::equals("level", "mode", "on"))
        .unwrap();
    space
        .add_condition(Condition::in_choices("boost", "level", ["low", "medium", "high"]))
        .unwrap();
    Arc::new(space)
}

#[test]
fn activation_ripples_through_multiple_levels() {
    let space = deep_space();
    let config =
        Configuration::from_vector(Arc::clone(&space), vec![0.0, f64::NAN, f64::NAN]).unwrap();

    let neighbourhood = get_one_exchange_neighbourhood(&config, 4).unwrap();
    assert_eq!(neighbourhood.len(), 1);
    let candidate = &neighbourhood[0];
    assert_eq!(candidate.get("mode").unwrap(), Some(Value::from("on")));
    // level activates at its default, which in turn activates boost.
    assert_eq!(candidate.get("level").unwrap(), Some(Value::from("low")));
    assert_eq!(candidate.get("boost").unwrap(), Some(Value::Float(0.5)));
}

#[test]
fn values_roundtrip_through_from_values() {
    let space = deep_space();
    let config = Configuration::from_vector(Arc::clone(&space), vec![1.0, 1.0, 0.25]).unwrap();
    let rebuilt = Configuration::from_values(Arc::clone(&space), &config.values().unwrap()).unwrap();
    assert_eq!(rebuilt, config);
}

#[test]
fn from_values_requires_known_names() {
    let space = deep_space();
    let values = HashMap::from([("turbo".to_owned(), Value::Bool(true))]);
    let err = Configuration::from_values(Arc::clone(&space), &values).unwrap_err();
    assert!(matches!(err, Error::UnknownParameter { .. }));
}

#[test]
fn get_rejects_unknown_names() {
    let space = deep_space();
    let config = space.default_configuration().unwrap();
    assert!(matches!(
        config.get("turbo"),
        Err(Error::UnknownParameter { .. })
    ));
}

#[test]
fn ordinal_neighbourhood_respects_sequence_position() {
    let mut raw = ConfigurationSpace::new();
    raw.add_parameter(OrdinalParam::new("size", ["s", "m", "l"]))
        .unwrap();
    let space = Arc::new(raw);

    // At an end of the sequence: one neighbor.
    let config = Configuration::from_vector(Arc::clone(&space), vec![0.0]).unwrap();
    let neighbourhood = get_one_exchange_neighbourhood(&config, 0).unwrap();
    assert_eq!(neighbourhood.len(), 1);
    assert_eq!(neighbourhood[0].get("size").unwrap(), Some(Value::from("m")));

    // In the middle: both adjacent elements, in discovery order.
    let config = Configuration::from_vector(Arc::clone(&space), vec![1.0]).unwrap();
    let neighbourhood = get_one_exchange_neighbourhood(&config, 0).unwrap();
    assert_eq!(neighbourhood.len(), 2);
    assert_eq!(neighbourhood[0].get("size").unwrap(), Some(Value::from("s")));
    assert_eq!(neighbourhood[1].get("size").unwrap(), Some(Value::from("l")));
}

#[test]
fn default_configuration_of_deep_space_is_minimal() {
    let space = deep_space();
    let config = space.default_configuration().unwrap();
    assert_eq!(config.get("mode").unwrap(), Some(Value::from("off")));
    assert_eq!(config.get("level").unwrap(), None);
    assert_eq!(config.get("boost").unwrap(), None);
}
