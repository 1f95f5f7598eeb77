use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use seabattle::{Board, CellState, GameConfig, HitOutcome};

fn random_board(seed: u64, width: usize, height: usize) -> (Board, SmallRng) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new(&GameConfig::default().with_size(width, height));
    board.populate(&mut rng).unwrap();
    (board, rng)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn ships_never_touch_by_an_edge(
        seed in any::<u64>(),
        width in 10usize..=26,
        height in 10usize..=18,
    ) {
        let (board, _) = random_board(seed, width, height);
        let ships = board.fleet().ships();
        prop_assert!(board.fleet().is_complete());
        for (i, a) in ships.iter().enumerate() {
            prop_assert!(a.x() + a.width() <= width);
            prop_assert!(a.y() + a.height() <= height);
            for b in ships.iter().skip(i + 1) {
                prop_assert!(!a.footprint().collides_with(&b.footprint()));
                prop_assert!(!b.footprint().collides_with(&a.footprint()));
            }
        }
    }

    #[test]
    fn strike_is_idempotent(seed in any::<u64>(), x in 0usize..10, y in 0usize..10) {
        let (mut board, _) = random_board(seed, 10, 10);
        let before = board.clone();
        let first = board.hit_at_point(x, y);
        prop_assert_ne!(first, HitOutcome::AlreadyStruck);
        prop_assert_ne!(&board, &before);
        let after = board.clone();
        let second = board.hit_at_point(x, y);
        prop_assert_eq!(second, HitOutcome::AlreadyStruck);
        prop_assert!(!second.is_hit());
        prop_assert_eq!(&board, &after);
    }

    #[test]
    fn destruction_is_atomic(seed in any::<u64>()) {
        let (mut board, mut rng) = random_board(seed, 10, 10);
        let index = rng.random_range(0..board.fleet().len());
        let ship = board.fleet().ships()[index].clone();
        let cells: Vec<_> = ship.cells().collect();
        let (last, rest) = cells.split_last().unwrap();

        for c in rest {
            prop_assert!(board.hit_at_point(c.x, c.y).is_hit());
            prop_assert_eq!(board.grid().get(c.x, c.y), CellState::Hit);
        }
        let outcome = board.hit_at_point(last.x, last.y);
        prop_assert!(outcome.destroyed_ship().is_some());
        for c in &cells {
            prop_assert_eq!(board.grid().get(c.x, c.y), CellState::Destroyed);
        }
        prop_assert_eq!(board.grid().count(CellState::Destroyed), cells.len());
        prop_assert_eq!(board.grid().count(CellState::Hit), 0);
    }

    #[test]
    fn grid_state_follows_ship_masks(seed in any::<u64>(), shots in 0usize..150) {
        let (mut board, mut rng) = random_board(seed, 10, 10);
        for _ in 0..shots {
            let x = rng.random_range(0..10);
            let y = rng.random_range(0..10);
            board.hit_at_point(x, y);
        }
        for c in board.grid().coordinates() {
            let state = board.grid()[c];
            match board.ship_at(c.x, c.y) {
                Some(ship) if ship.is_destroyed() => prop_assert_eq!(state, CellState::Destroyed),
                Some(ship) if ship.is_struck(c.x, c.y) => prop_assert_eq!(state, CellState::Hit),
                Some(_) => prop_assert_eq!(state, CellState::Empty),
                None => prop_assert!(matches!(state, CellState::Empty | CellState::Missed)),
            }
        }
    }
}
