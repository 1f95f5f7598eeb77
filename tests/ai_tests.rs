use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use seabattle::{
    Board, CellState, Coordinate, FleetCounts, GameConfig, HitOutcome, ShipClass,
    TargetingHeuristic,
};

/// A 10x10 board with one battle cruiser of `length` at `(x, y)`.
fn lone_ship_board(length: usize, x: usize, y: usize, vertical: bool) -> Board {
    let mut config = GameConfig::default();
    config.counts = FleetCounts::new(1, 0, 0, 0);
    config.lengths.battle_cruiser = length;
    let mut board = Board::new(&config);
    let mut ship = board.spawn_ship(ShipClass::BattleCruiser).unwrap();
    let placement = board.placement();
    if vertical {
        assert!(placement.rotate_at(&mut ship, x, y));
    } else {
        assert!(placement.set_position(&mut ship, x, y));
    }
    board.add_ship(ship).unwrap();
    board
}

/// Shoot with `ai` until `board` reports a destroyed ship. Returns the number of
/// shots fired after the first hit.
fn shoot_until_destroyed(ai: &mut TargetingHeuristic, board: &mut Board, rng: &mut SmallRng) -> usize {
    let mut after_first_hit = None;
    loop {
        let target = ai.next_target(board.grid(), rng).expect("cells left");
        assert_eq!(board.grid()[target], CellState::Empty);
        if let Some(n) = after_first_hit.as_mut() {
            *n += 1;
        }
        let outcome = board.hit_at_point(target.x, target.y);
        if outcome.is_hit() {
            ai.got_hit(target);
            after_first_hit.get_or_insert(0);
        }
        if let Some(id) = outcome.destroyed_ship() {
            let ship = board.ship(id).unwrap().clone();
            ai.ship_recessed(&ship);
            return after_first_hit.unwrap_or(0);
        }
    }
}

#[test]
fn test_single_hit_targets_legal_neighbors() {
    let mut board = lone_ship_board(3, 0, 0, false);
    let mut ai = TargetingHeuristic::new(*board.counts());
    board.hit_at_point(0, 0);
    ai.got_hit(Coordinate::new(0, 0));
    assert_eq!(
        ai.target_candidates(board.grid(), Coordinate::new(0, 0)),
        vec![Coordinate::new(0, 1), Coordinate::new(1, 0)]
    );
}

#[test]
fn test_line_walk_prefers_lower_end_then_turns() {
    let mut board = lone_ship_board(4, 2, 5, false);
    let mut ai = TargetingHeuristic::new(*board.counts());
    board.hit_at_point(3, 5);
    board.hit_at_point(4, 5);
    ai.got_hit(Coordinate::new(4, 5));
    assert_eq!(
        ai.target_candidates(board.grid(), Coordinate::new(4, 5)),
        vec![Coordinate::new(2, 5)]
    );

    board.hit_at_point(2, 5);
    ai.got_hit(Coordinate::new(2, 5));
    assert_eq!(
        ai.target_candidates(board.grid(), Coordinate::new(2, 5)),
        vec![Coordinate::new(1, 5)]
    );

    assert_eq!(board.hit_at_point(1, 5), HitOutcome::Missed);
    // A miss keeps the last hit.
    assert_eq!(ai.last_hit(), Some(Coordinate::new(2, 5)));
    assert_eq!(
        ai.target_candidates(board.grid(), Coordinate::new(2, 5)),
        vec![Coordinate::new(5, 5)]
    );
}

#[test]
fn test_vertical_line_walk() {
    let mut board = lone_ship_board(3, 6, 2, true);
    let ai = TargetingHeuristic::new(*board.counts());
    board.hit_at_point(6, 3);
    board.hit_at_point(6, 4);
    assert_eq!(
        ai.target_candidates(board.grid(), Coordinate::new(6, 3)),
        vec![Coordinate::new(6, 2)]
    );
}

#[test]
fn test_destroyed_ship_neighborhood_is_pruned() {
    let mut board = lone_ship_board(2, 0, 0, false);
    let mut ai = TargetingHeuristic::new(*board.counts());
    let mut rng = SmallRng::seed_from_u64(3);
    board.hit_at_point(0, 0);
    ai.got_hit(Coordinate::new(0, 0));
    assert!(board.hit_at_point(1, 0).destroyed_ship().is_some());
    ai.ship_recessed(board.ship_at(0, 0).unwrap());

    assert_eq!(ai.last_hit(), None);
    let hunt = ai.hunt_candidates(board.grid());
    assert_eq!(hunt.len(), 95);
    for (x, y) in [(2, 0), (0, 1), (1, 1)] {
        assert!(!hunt.contains(&Coordinate::new(x, y)));
    }
    assert!(hunt.contains(&Coordinate::new(2, 1)), "diagonal corner stays open");

    let next = ai.next_target(board.grid(), &mut rng).unwrap();
    assert!(hunt.contains(&next));
}

#[test]
fn test_exhausted_target_reverts_to_hunt() {
    let mut board = lone_ship_board(2, 0, 0, false);
    let mut ai = TargetingHeuristic::new(*board.counts());
    let mut rng = SmallRng::seed_from_u64(11);
    for (x, y) in [(5, 4), (5, 6), (4, 5), (6, 5)] {
        assert_eq!(board.hit_at_point(x, y), HitOutcome::Missed);
    }
    ai.got_hit(Coordinate::new(5, 5));
    assert!(ai
        .target_candidates(board.grid(), Coordinate::new(5, 5))
        .is_empty());
    let next = ai.next_target(board.grid(), &mut rng).unwrap();
    assert!(ai.is_legal_target(board.grid(), next));
}

#[test]
fn test_no_target_when_everything_is_struck() {
    let mut board = lone_ship_board(2, 0, 0, false);
    let ai = TargetingHeuristic::new(*board.counts());
    let mut rng = SmallRng::seed_from_u64(0);
    for y in 0..10 {
        for x in 0..10 {
            board.hit_at_point(x, y);
        }
    }
    assert_eq!(ai.next_target(board.grid(), &mut rng), None);
}

#[test]
fn test_reset_forgets_everything() {
    let mut board = lone_ship_board(2, 0, 0, false);
    let mut ai = TargetingHeuristic::new(*board.counts());
    let mut rng = SmallRng::seed_from_u64(9);
    shoot_until_destroyed(&mut ai, &mut board, &mut rng);
    assert_eq!(ai.recessed().len(), 1);
    ai.got_hit(Coordinate::new(4, 4));
    ai.reset(FleetCounts::minimal());
    assert_eq!(ai.last_hit(), None);
    assert!(ai.recessed().is_empty());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn lone_ship_falls_within_twice_its_length(
        seed in any::<u64>(),
        length in 2usize..=10,
        vertical in any::<bool>(),
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let along = rng.random_range(0..=10 - length);
        let across = rng.random_range(0..10);
        let (x, y) = if vertical { (across, along) } else { (along, across) };
        let mut board = lone_ship_board(length, x, y, vertical);
        let mut ai = TargetingHeuristic::new(*board.counts());

        let target_moves = shoot_until_destroyed(&mut ai, &mut board, &mut rng);
        prop_assert!(target_moves <= 2 * length, "{} moves for length {}", target_moves, length);
        prop_assert!(board.all_destroyed());
    }

    #[test]
    fn hunt_targets_are_always_legal(seed in any::<u64>(), shots in 0usize..80) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new(&GameConfig::default());
        board.populate(&mut rng).unwrap();
        let mut ai = TargetingHeuristic::new(*board.counts());

        for _ in 0..shots {
            let Some(target) = ai.next_target(board.grid(), &mut rng) else { break };
            let outcome = board.hit_at_point(target.x, target.y);
            if outcome.is_hit() {
                ai.got_hit(target);
            }
            if let Some(id) = outcome.destroyed_ship() {
                let ship = board.ship(id).unwrap().clone();
                ai.ship_recessed(&ship);
            }
        }

        for c in ai.hunt_candidates(board.grid()) {
            prop_assert_eq!(board.grid()[c], CellState::Empty);
            for ship in ai.recessed().ships() {
                prop_assert!(!ship.is_adjacent_or_overlapping(c.x, c.y));
            }
        }
        if let Some(next) = ai.next_target(board.grid(), &mut rng) {
            prop_assert!(ai.is_legal_target(board.grid(), next));
        }
    }
}
