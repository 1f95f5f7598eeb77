use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{
    Color, Coordinate, Orientation, PlacementEngine, PlacementError, Ship, ShipClass,
};

fn cruiser(length: usize) -> Ship {
    Ship::new(ShipClass::Cruiser, length, Color::White)
}

#[test]
fn test_empty_positions_include_rotation_only_cells() {
    let empty: Vec<Ship> = Vec::new();
    let engine = PlacementEngine::new(10, 10, &empty);
    let positions = engine.find_empty_positions(&cruiser(5));

    // 60 horizontal origins, 60 vertical ones, 36 shared.
    assert_eq!(positions.len(), 84);
    assert_eq!(positions[0], Coordinate::new(0, 0));
    assert!(positions.contains(&Coordinate::new(9, 0)), "only fits rotated");
    assert!(!positions.contains(&Coordinate::new(9, 9)));

    let mut sorted = positions.clone();
    sorted.sort_by_key(|c| (c.y, c.x));
    assert_eq!(positions, sorted, "row-major order");
}

#[test]
fn test_place_new_prefers_origin() {
    let empty: Vec<Ship> = Vec::new();
    let ship = PlacementEngine::new(10, 10, &empty)
        .place_new(ShipClass::Cruiser, 4, Color::Red)
        .unwrap();
    assert_eq!(ship.position(), Coordinate::new(0, 0));
    assert_eq!(ship.orientation(), Orientation::Horizontal);
    assert_eq!(ship.color(), Color::Red);
}

#[test]
fn test_place_new_takes_first_free_cell_and_rotates_when_needed() {
    let empty: Vec<Ship> = Vec::new();
    let first = PlacementEngine::new(10, 10, &empty)
        .place_new(ShipClass::BattleCruiser, 5, Color::White)
        .unwrap();
    let placed = vec![first];
    let engine = PlacementEngine::new(10, 10, &placed);

    let second = engine
        .place_new(ShipClass::BattleCruiser, 5, Color::White)
        .unwrap();
    // Row 0 only has room for a vertical ship from column 6 on.
    assert_eq!(second.position(), Coordinate::new(6, 0));
    assert_eq!(second.orientation(), Orientation::Vertical);
}

#[test]
fn test_no_space_on_tiny_board() {
    let empty: Vec<Ship> = Vec::new();
    let engine = PlacementEngine::new(2, 2, &empty);
    let err = engine
        .place_new(ShipClass::BattleCruiser, 5, Color::White)
        .unwrap_err();
    assert_eq!(
        err,
        PlacementError::NoPlacementSpace {
            class: ShipClass::BattleCruiser,
            length: 5
        }
    );
    let mut rng = SmallRng::seed_from_u64(1);
    let mut ship = cruiser(5);
    assert!(engine.find_random_position(&mut ship, &mut rng).is_err());
}

#[test]
fn test_move_to_checks_only_the_board() {
    let empty: Vec<Ship> = Vec::new();
    let first = PlacementEngine::new(10, 10, &empty)
        .place_new(ShipClass::Cruiser, 4, Color::White)
        .unwrap();
    let placed = vec![first];
    let engine = PlacementEngine::new(10, 10, &placed);

    let mut ship = cruiser(4);
    assert!(engine.move_to(&mut ship, 1, 0), "overlap allowed while dragging");
    assert_eq!(ship.position(), Coordinate::new(1, 0));
    assert!(!engine.move_to(&mut ship, 7, 0), "would leave the board");
    assert_eq!(ship.position(), Coordinate::new(1, 0));

    assert!(!engine.set_position(&mut ship, 2, 1), "touches the placed ship");
    assert!(engine.set_position(&mut ship, 0, 2));
    assert_eq!(ship.position(), Coordinate::new(0, 2));
}

#[test]
fn test_collides_with_board() {
    let empty: Vec<Ship> = Vec::new();
    let engine = PlacementEngine::new(10, 12, &empty);
    let ship = cruiser(4);
    assert!(!engine.collides_with_board(&ship, 6, 11));
    assert!(engine.collides_with_board(&ship, 7, 0));
    assert!(engine.collides_with_board(&ship, 0, 12));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_position_is_always_legal(seed in any::<u64>(), length in 2usize..=6) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let empty: Vec<Ship> = Vec::new();
        let first = PlacementEngine::new(10, 10, &empty)
            .place_new(ShipClass::Cruiser, 4, Color::White)
            .unwrap();
        let placed = vec![first];
        let engine = PlacementEngine::new(10, 10, &placed);

        let mut ship = cruiser(length);
        let origin = engine.find_random_position(&mut ship, &mut rng).unwrap();
        prop_assert_eq!(ship.position(), origin);
        prop_assert!(!engine.collides_with_board(&ship, ship.x(), ship.y()));
        prop_assert!(!ship.collides_with_ship_at(ship.x(), ship.y(), &placed[0]));
    }
}
