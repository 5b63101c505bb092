use std::collections::HashSet;

use broadside::{
    AiPlayer, AvoidanceTargeting, Board, BoardError, Coordinate, GuessResult, HuntTargeting,
    Player, Ship,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn c(x: i32, y: i32) -> Coordinate {
    Coordinate::new(x, y).unwrap()
}

/// Steer a fresh hunter until its last shot is `hit`, then report a hit there.
fn hunter_after_hit(rng: &mut SmallRng, hit: Coordinate) -> HuntTargeting {
    let mut hunter = HuntTargeting::new();
    loop {
        let target = hunter.next_target(rng).unwrap();
        if target == hit {
            hunter.observe(target, GuessResult::Hit);
            return hunter;
        }
        hunter.observe(target, GuessResult::Miss);
    }
}

#[test]
fn test_hunt_never_repeats_and_exhausts() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut hunter = HuntTargeting::new();
    let mut seen = HashSet::new();
    for _ in 0..100 {
        let target = hunter.next_target(&mut rng).unwrap();
        assert!(seen.insert(target), "{} chosen twice", target);
        hunter.observe(target, GuessResult::Miss);
    }
    assert_eq!(
        hunter.next_target(&mut rng).unwrap_err(),
        BoardError::NoTargetAvailable
    );
}

#[test]
fn test_hunt_follow_up_never_diagonal() {
    let hit = c(5, 5);
    let diagonals: Vec<_> = hit.diagonal_neighbors().into_iter().flatten().collect();
    for seed in 0..300 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut hunter = hunter_after_hit(&mut rng, hit);
        let next = hunter.next_target(&mut rng).unwrap();
        assert!(!diagonals.contains(&next), "seed {}: diagonal {}", seed, next);
        assert_ne!(next, hit);
        for diagonal in &diagonals {
            let (r, col) = diagonal.index();
            assert!(!hunter.candidates().contains(r, col));
        }
    }
}

#[test]
fn test_hunt_prefers_orthogonal_neighbors() {
    let hit = c(5, 5);
    let orthogonal: Vec<_> = hit.orthogonal_neighbors().into_iter().flatten().collect();
    let trials = 500;
    let mut adjacent = 0;
    for seed in 0..trials {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut hunter = hunter_after_hit(&mut rng, hit);
        if orthogonal.contains(&hunter.next_target(&mut rng).unwrap()) {
            adjacent += 1;
        }
    }
    // With k neighbours still open a follow-up is adjacent with probability
    // k / (k + 1); half the neighbours are open on average, so about 60%.
    // A uniform draw would land next to the hit about 2% of the time.
    assert!(adjacent * 10 > trials * 4, "only {} of {} adjacent", adjacent, trials);
}

#[test]
fn test_hunt_random_after_sink() {
    let mut rng = SmallRng::seed_from_u64(11);
    let mut hunter = hunter_after_hit(&mut rng, c(1, 1));
    let last = hunter.last_shot().unwrap();
    hunter.observe(last, GuessResult::Sink);
    let next = hunter.next_target(&mut rng).unwrap();
    assert_ne!(next, c(1, 1));
    assert_ne!(next, c(2, 2));
    let (r, col) = c(2, 2).index();
    assert!(!hunter.candidates().contains(r, col));
}

#[test]
fn test_hunt_ignores_stale_feedback() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut hunter = HuntTargeting::new();
    let first = hunter.next_target(&mut rng).unwrap();
    let other = Coordinate::all().find(|coord| *coord != first).unwrap();
    hunter.observe(other, GuessResult::Hit);
    // treated as a miss: the first shot's diagonals stay available
    hunter.next_target(&mut rng).unwrap();
    let kept = first
        .diagonal_neighbors()
        .into_iter()
        .flatten()
        .filter(|d| {
            let (r, col) = d.index();
            hunter.candidates().contains(r, col)
        })
        .count();
    assert_eq!(kept, first.diagonal_neighbors().into_iter().flatten().count());
}

#[test]
fn test_hunt_sinks_a_real_fleet_without_repeats() {
    for seed in 0..20 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::random(&mut rng).unwrap();
        let mut hunter = HuntTargeting::new();
        let mut seen = HashSet::new();
        while !board.all_sunk() {
            let target = hunter.next_target(&mut rng).unwrap();
            assert!(seen.insert(target), "seed {}: {} repeated", seed, target);
            let result = board.attack(target);
            hunter.observe(target, result);
        }
        assert!(seen.len() <= 100);
    }
}

#[test]
fn test_avoidance_never_repeats_and_exhausts() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut strategy = AvoidanceTargeting::new();
    let mut seen = HashSet::new();
    for _ in 0..100 {
        assert!(seen.insert(strategy.next_target(&mut rng).unwrap()));
    }
    assert_eq!(strategy.attacked().count_ones(), 100);
    assert_eq!(
        strategy.next_target(&mut rng).unwrap_err(),
        BoardError::NoTargetAvailable
    );
}

#[test]
fn test_avoidance_skips_zone_of_sunk_ships() {
    let mut sunk = Ship::new(c(4, 4), c(6, 4)).unwrap();
    for cell in sunk.cells().collect::<Vec<_>>() {
        sunk.apply_damage(cell);
    }
    let zone = sunk.zone();
    for seed in 0..50 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut strategy = AvoidanceTargeting::new();
        strategy.record_sunk_ship(sunk);
        let eligible = 100 - zone.count_ones();
        for _ in 0..eligible {
            let target = strategy.next_target(&mut rng).unwrap();
            assert!(!sunk.is_near(target), "seed {}: {} is next to a sunk ship", seed, target);
        }
        assert_eq!(
            strategy.next_target(&mut rng).unwrap_err(),
            BoardError::NoTargetAvailable
        );
    }
}

#[test]
fn test_avoidance_ignores_ships_afloat() {
    let afloat = Ship::new(c(1, 1), c(1, 3)).unwrap();
    let mut strategy = AvoidanceTargeting::new();
    strategy.record_sunk_ship(afloat);
    assert!(strategy.known_sunk().is_empty());
    assert_eq!(strategy.eligible().count_ones(), 100);
}

#[test]
fn test_ai_player_forwards_feedback() {
    let mut rng = SmallRng::seed_from_u64(9);
    let mut board = Board::random(&mut rng).unwrap();
    let mut player = AiPlayer::avoidance("bot".to_string());
    assert_eq!(player.name(), "bot");

    let view = board.visible_grid_fog_of_war();
    let single = board.ships()[4];
    let target = single.start();
    assert_eq!(board.attack(target), GuessResult::Sink);
    player.handle_guess_result(target, GuessResult::Sink);
    player.handle_sunk_ship(board.ship_at(target).unwrap());

    match &player {
        AiPlayer::Avoidance { strategy, .. } => assert_eq!(strategy.known_sunk().len(), 1),
        AiPlayer::Hunt { .. } => unreachable!(),
    }
    for _ in 0..20 {
        let next = player.select_target(&mut rng, &view).unwrap();
        assert!(!board.ship_at(target).unwrap().is_near(next));
    }
}
