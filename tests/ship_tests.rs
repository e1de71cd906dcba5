use seabattle::{Coord, Orientation, Ship};

#[test]
fn test_horizontal_cells() {
    let ship = Ship::new(Coord::new(2, 1), 3, Orientation::Horizontal);
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(cells, vec![Coord::new(2, 1), Coord::new(2, 2), Coord::new(2, 3)]);
}

#[test]
fn test_vertical_cells_and_hit_test() {
    let ship = Ship::new(Coord::new(0, 0), 2, Orientation::Vertical);
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(cells, vec![Coord::new(0, 0), Coord::new(1, 0)]);
    for cell in cells {
        assert!(ship.is_hit_by(cell));
    }
    assert!(!ship.is_hit_by(Coord::new(2, 0)));
    assert!(!ship.is_hit_by(Coord::new(0, 1)));
}

#[test]
fn test_cells_may_leave_the_board() {
    // Bounds are the board's business.
    let ship = Ship::new(Coord::new(6, 5), 2, Orientation::Horizontal);
    assert_eq!(ship.cells().last(), Some(Coord::new(6, 6)));
}

#[test]
fn test_hit_and_sunk() {
    let mut ship = Ship::new(Coord::new(1, 1), 2, Orientation::Horizontal);
    assert_eq!(ship.hitpoints(), 2);
    assert!(!ship.is_sunk());
    assert!(!ship.hit());
    assert_eq!(ship.hitpoints(), 1);
    assert!(ship.hit());
    assert!(ship.is_sunk());
    // a wreck cannot sink twice
    assert!(!ship.hit());
    assert_eq!(ship.hitpoints(), 0);
    assert_eq!(ship.length(), 2);
}
