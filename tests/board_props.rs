use broadside::{generate_ships, Board, Coordinate, GuessResult, BOARD_SIZE};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

fn random_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    Board::random(&mut rng).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn generated_fleet_is_valid(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let ships = generate_ships(&mut rng).unwrap();
        let mut lengths: Vec<usize> = ships.iter().map(|s| s.length()).collect();
        lengths.sort_unstable();
        prop_assert_eq!(lengths, vec![1, 2, 3, 4, 5]);
        for (i, a) in ships.iter().enumerate() {
            for b in ships.iter().skip(i + 1) {
                prop_assert!(!a.is_near_ship(b));
                prop_assert!(!b.is_near_ship(a));
            }
        }
        prop_assert!(Board::new(ships).is_ok());
    }

    #[test]
    fn generated_fleet_is_placed_largest_first(seed in any::<u64>()) {
        let board = random_board(seed);
        let lengths: Vec<usize> = board.ships().iter().map(|s| s.length()).collect();
        prop_assert_eq!(lengths, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn same_seed_same_fleet(seed in any::<u64>()) {
        prop_assert_eq!(random_board(seed), random_board(seed));
    }

    #[test]
    fn shots_and_damage_only_grow(seed in any::<u64>(), shots in 1usize..150) {
        let mut board = random_board(seed);
        let mut rng = SmallRng::seed_from_u64(seed ^ 0x5eed);
        let size = BOARD_SIZE as i32;
        for n in 1..=shots {
            let damage_before: usize = board.ships().iter().map(|s| s.damage_count()).sum();
            let shots_before = board.previous_shots();
            let target = Coordinate::new(rng.random_range(1..=size), rng.random_range(1..=size)).unwrap();
            let was_new = !board.was_attacked(target);

            let result = board.attack(target);

            let damage_after: usize = board.ships().iter().map(|s| s.damage_count()).sum();
            prop_assert!(shots_before.is_subset(&board.previous_shots()));
            prop_assert!(board.was_attacked(target));
            prop_assert_eq!(board.shot_history().len(), n);
            prop_assert_eq!(result.is_hit(), board.ship_at(target).is_some());
            prop_assert!(damage_after >= damage_before);
            if was_new {
                prop_assert_eq!(damage_after - damage_before, usize::from(result.is_hit()));
            } else {
                prop_assert_eq!(damage_after, damage_before);
            }
            if result == GuessResult::Sink {
                prop_assert!(board.ship_at(target).unwrap().has_sunk());
            }
        }
    }
}
