use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{FleetGenerator, FLEET, MAX_PLACEMENT_ATTEMPTS, NUM_SHIPS};

#[test]
fn test_default_generator_is_standard_fleet() {
    let generator = FleetGenerator::default();
    assert_eq!(generator.fleet(), &FLEET);
    assert_eq!(generator.max_attempts(), MAX_PLACEMENT_ATTEMPTS);
}

#[test]
fn test_standard_fleet_fits_eventually() {
    let generator = FleetGenerator::default();
    for seed in 0..50 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = generator.random_board(&mut rng);
        assert_eq!(board.ships().len(), NUM_SHIPS);
        assert_eq!(board.sunk_count(), 0);
        assert!(!board.is_defeated());
    }
}

#[test]
fn test_try_board_succeeds_or_gives_up() {
    let generator = FleetGenerator::default();
    let mut rng = SmallRng::seed_from_u64(7);
    let mut built = 0;
    for _ in 0..50 {
        if let Some(board) = generator.try_board(&mut rng) {
            assert_eq!(board.ships().len(), NUM_SHIPS);
            built += 1;
        }
    }
    assert!(built > 0, "standard fleet should usually fit on the first try");
}

#[test]
fn test_overcrowded_fleet_gives_up() {
    // Ten 3-ships cannot fit on 6x6 without touching.
    let generator = FleetGenerator::new([3usize; 10], 500);
    let mut rng = SmallRng::seed_from_u64(1);
    assert!(generator.try_board(&mut rng).is_none());
}

#[test]
fn test_zero_budget_gives_up() {
    let generator = FleetGenerator::new(FLEET, 0);
    let mut rng = SmallRng::seed_from_u64(1);
    assert!(generator.try_board(&mut rng).is_none());
}

#[test]
fn test_same_seed_same_board() {
    let generator = FleetGenerator::default();
    let mut rng1 = SmallRng::seed_from_u64(42);
    let mut rng2 = SmallRng::seed_from_u64(42);
    assert_eq!(
        generator.random_board(&mut rng1),
        generator.random_board(&mut rng2)
    );
}
