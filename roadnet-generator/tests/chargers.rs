use rand::{rngs::SmallRng, SeedableRng};
use roadnet_generator::{NetworkConfig, NetworkGenerator};

#[test]
fn test_charger_list_is_ascending_subset() {
    let generator = NetworkGenerator::new(30, 10).unwrap();
    for seed in 0..20 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let charger_list = generator.create_charger_list(&mut rng);
        assert!(charger_list.len() <= 30);
        assert!(charger_list.windows(2).all(|w| w[0] < w[1]));
        assert!(charger_list.iter().all(|&node| node < 30));
    }
}

#[test]
fn test_charger_list_can_be_empty_or_full() {
    let generator = NetworkGenerator::new(1, 1).unwrap();
    let outcomes: Vec<Vec<usize>> = (0..64)
        .map(|seed| generator.create_charger_list(&mut SmallRng::seed_from_u64(seed)))
        .collect();
    assert!(outcomes.iter().any(|c| c.is_empty()));
    assert!(outcomes.iter().any(|c| c == &vec![0]));
}

#[test]
fn test_charger_attribute_lists() {
    let generator = NetworkGenerator::new(4, 5).unwrap();
    let charger_list = vec![0, 2, 3];
    assert_eq!(generator.create_charger_capacity_list(&charger_list), vec![10, 10, 10]);
    assert_eq!(generator.create_charger_speed_list(&charger_list), vec![5, 5, 5]);
    assert_eq!(generator.create_charger_time_list(&charger_list), vec![1, 1, 1]);

    assert!(generator.create_charger_capacity_list(&[]).is_empty());
    assert!(generator.create_charger_speed_list(&[]).is_empty());
    assert!(generator.create_charger_time_list(&[]).is_empty());
}

#[test]
fn test_charger_attribute_lists_follow_config() {
    let config = NetworkConfig {
        charger_capacity: 2,
        charger_speed: 11,
        charger_time: 3,
        ..NetworkConfig::default()
    };
    let generator = NetworkGenerator::with_config(6, 6, config).unwrap();
    let mut rng = SmallRng::seed_from_u64(9);
    let charger_list = generator.create_charger_list(&mut rng);
    let len = charger_list.len();
    assert_eq!(generator.create_charger_capacity_list(&charger_list), vec![2; len]);
    assert_eq!(generator.create_charger_speed_list(&charger_list), vec![11; len]);
    assert_eq!(generator.create_charger_time_list(&charger_list), vec![3; len]);
}
