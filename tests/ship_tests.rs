use seabattle::{Color, Coordinate, Footprint, Orientation, PlacementEngine, Ship, ShipClass};

fn ship(length: usize) -> Ship {
    Ship::new(ShipClass::Destroyer, length, Color::White)
}

#[test]
fn test_new_ship_is_horizontal_at_origin() {
    let s = ship(3);
    assert_eq!(s.position(), Coordinate::new(0, 0));
    assert_eq!((s.width(), s.height()), (3, 1));
    assert_eq!(s.orientation(), Orientation::Horizontal);
    assert_eq!(s.mask(), &[false, false, false]);
}

#[test]
fn test_adjacency_excludes_corners_of_expanded_box() {
    // Covers (2,2), (3,2), (4,2).
    let fp = Footprint::new(2, 2, 3, 1);

    // Diagonal corners may touch.
    for (x, y) in [(1, 1), (5, 1), (1, 3), (5, 3)] {
        assert!(!fp.is_adjacent_or_overlapping(x, y), "({x}, {y})");
    }
    // Edges may not.
    for (x, y) in [(1, 2), (5, 2), (2, 1), (4, 1), (3, 3), (2, 2), (4, 2)] {
        assert!(fp.is_adjacent_or_overlapping(x, y), "({x}, {y})");
    }
    // Far away.
    for (x, y) in [(0, 2), (6, 2), (3, 0), (3, 4)] {
        assert!(!fp.is_adjacent_or_overlapping(x, y), "({x}, {y})");
    }
}

#[test]
fn test_adjacency_at_board_origin() {
    let fp = Footprint::new(0, 0, 1, 2);
    assert!(fp.is_adjacent_or_overlapping(1, 0));
    assert!(fp.is_adjacent_or_overlapping(0, 2));
    assert!(!fp.is_adjacent_or_overlapping(1, 2));
}

#[test]
fn test_ships_may_share_a_corner_but_not_an_edge() {
    let mut placed = ship(3);
    let empty: Vec<Ship> = Vec::new();
    assert!(PlacementEngine::new(10, 10, &empty).set_position(&mut placed, 2, 2));
    let fleet = vec![placed];
    let engine = PlacementEngine::new(10, 10, &fleet);

    let mut other = ship(2);
    assert!(engine.set_position(&mut other, 5, 3), "corner contact is allowed");
    assert!(!engine.fits(&other, 5, 2), "edge contact is refused");
    assert!(!engine.fits(&other, 1, 3), "edge contact below is refused");
    assert!(engine.collides_with_ship(&other, 5, 2, &fleet[0]));
    assert!(!engine.collides_with_ship(&other, 5, 3, &fleet[0]));
}

#[test]
fn test_contains_and_cells() {
    let mut s = ship(4);
    let empty: Vec<Ship> = Vec::new();
    let engine = PlacementEngine::new(10, 10, &empty);
    assert!(engine.rotate_at(&mut s, 3, 1));
    let cells: Vec<_> = s.cells().collect();
    assert_eq!(
        cells,
        vec![
            Coordinate::new(3, 1),
            Coordinate::new(3, 2),
            Coordinate::new(3, 3),
            Coordinate::new(3, 4)
        ]
    );
    for c in &cells {
        assert!(s.contains(c.x, c.y));
    }
    assert!(!s.contains(3, 5));
    assert!(!s.contains(4, 1));
    assert!(s.footprint().cells().eq(cells.iter().copied()));
}

#[test]
fn test_footprint_cells_are_row_major() {
    let fp = Footprint::new(1, 2, 2, 2);
    let cells: Vec<_> = fp.cells().collect();
    assert_eq!(
        cells,
        vec![
            Coordinate::new(1, 2),
            Coordinate::new(2, 2),
            Coordinate::new(1, 3),
            Coordinate::new(2, 3)
        ]
    );
    assert_eq!(Footprint::new(4, 4, 0, 3).cells().count(), 0);
}

#[test]
fn test_register_hit_and_destroyed() {
    let mut s = ship(2);
    assert!(!s.is_destroyed());
    assert!(s.hit_at_point(0, 0));
    assert!(!s.hit_at_point(0, 0), "second strike is not a new hit");
    assert!(!s.is_destroyed());
    assert!(!s.hit_at_point(5, 5), "miss");
    assert!(s.hit_at_point(1, 0));
    assert!(s.is_destroyed());
    assert_eq!(s.hits(), 2);
}

#[test]
fn test_rotation_round_trip_restores_dimensions_and_mask() {
    let empty: Vec<Ship> = Vec::new();
    let engine = PlacementEngine::new(10, 10, &empty);
    let mut s = ship(4);
    assert!(engine.set_position(&mut s, 2, 2));
    assert!(s.hit_at_point(3, 2));
    let before = s.clone();

    assert!(engine.rotate(&mut s));
    assert_eq!((s.width(), s.height()), (1, 4));
    assert_eq!(s.orientation(), Orientation::Vertical);
    assert!(s.is_struck(2, 3), "second cell stays struck after rotation");

    assert!(engine.rotate(&mut s));
    assert_eq!(s, before);
}

#[test]
fn test_rotation_refused_off_board() {
    let empty: Vec<Ship> = Vec::new();
    let engine = PlacementEngine::new(10, 10, &empty);
    let mut s = ship(5);
    assert!(engine.set_position(&mut s, 0, 8));
    let before = s.clone();
    assert!(!engine.rotate(&mut s));
    assert_eq!(s, before);
}

#[test]
fn test_class_table_names() {
    assert_eq!(ShipClass::BattleCruiser.to_string(), "battle cruiser");
    assert_eq!(ShipClass::Submarine.rules().lengths, 2..=4);
    assert_eq!(ShipClass::ALL.len(), 4);
}
