use roadnet_generator::{NetworkConfig, NetworkGenerator};

#[test]
fn test_default_config() {
    let config = NetworkConfig::default();
    assert_eq!(config.max_road_capacity, 300);
    assert_eq!(config.max_travel_distance, 100);
    assert_eq!(config.average_velocity, 50);
    assert_eq!(config.average_consumption, 0.15);
    assert_eq!(config.charger_capacity, 10);
    assert_eq!(config.charger_speed, 5);
    assert_eq!(config.charger_time, 1);
    assert_eq!(NetworkGenerator::new(2, 2).unwrap().config, config);
}

#[test]
fn test_partial_json_overrides() {
    let config =
        NetworkConfig::from_json(r#"{"average_velocity": 30, "charger_speed": 7}"#).unwrap();
    assert_eq!(
        config,
        NetworkConfig {
            average_velocity: 30,
            charger_speed: 7,
            ..NetworkConfig::default()
        }
    );
    assert_eq!(NetworkConfig::from_json("{}").unwrap(), NetworkConfig::default());
}

#[test]
fn test_invalid_config() {
    assert!(NetworkConfig::from_json(r#"{"average_velocity": 0}"#).is_err());
    assert!(NetworkConfig::from_json(r#"{"average_consumption": -0.5}"#).is_err());
    assert!(NetworkConfig::from_json("not json").is_err());

    let config = NetworkConfig {
        average_velocity: 0,
        ..NetworkConfig::default()
    };
    let err = NetworkGenerator::with_config(4, 5, config).unwrap_err();
    assert!(err.to_string().contains("Average velocity must be positive"));

    let config = NetworkConfig {
        average_consumption: f64::NAN,
        ..NetworkConfig::default()
    };
    assert!(NetworkGenerator::with_config(4, 5, config).is_err());
}

#[test]
fn test_consumption_bounded_by_charge_range() {
    let config = NetworkConfig {
        average_consumption: 1e8,
        ..NetworkConfig::default()
    };
    let err = NetworkGenerator::with_config(4, 5, config).unwrap_err();
    assert!(err.to_string().contains("is too large"));
    assert!(NetworkConfig::from_json(r#"{"average_consumption": 1e12}"#).is_err());

    let config = NetworkConfig {
        max_travel_distance: 0,
        average_consumption: 1e12,
        ..NetworkConfig::default()
    };
    assert!(NetworkGenerator::with_config(4, 5, config).is_ok());
}
