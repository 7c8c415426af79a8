use blindbot_nav::{Cell, Direction, GridPathfinder, Mark, Overlay, Pathfinder};

fn open_overlay(width: u32, height: u32) -> Overlay {
    let mut o = Overlay::new(width, height);
    for y in 0..height as i32 {
        for x in 0..width as i32 {
            o.set(Cell::new(x, y), Mark::Safe);
        }
    }
    o
}

fn walk(start: Cell, moves: &[Direction]) -> Cell {
    moves.iter().fold(start, |c, d| d.apply(c))
}

#[test]
fn finds_path_around_wall_with_gap() {
    let mut o = open_overlay(5, 5);
    for y in 0..5 {
        if y == 2 {
            continue;
        }
        o.set(Cell::new(2, y), Mark::Wall);
    }

    let start = Cell::new(0, 0);
    let goal = Cell::new(4, 4);
    let route = GridPathfinder::default()
        .pathfind(&o, start, goal)
        .expect("path should exist");

    assert_eq!(walk(start, &route.moves), goal);
    assert_eq!(route.len(), 8);
    assert_eq!(route.cost, 8);
}

#[test]
fn known_pits_block() {
    let mut o = open_overlay(3, 1);
    o.set(Cell::new(1, 0), Mark::Pit);
    assert!(GridPathfinder::default()
        .pathfind(&o, Cell::new(0, 0), Cell::new(2, 0))
        .is_none());
}

#[test]
fn prefers_verified_ground_over_unknown_shortcut() {
    // Row 0 is unknown and direct; rows 1 and 2 detour over safe cells.
    let mut o = open_overlay(5, 3);
    for x in 1..4 {
        o.set(Cell::new(x, 0), Mark::Unknown);
    }

    let start = Cell::new(0, 0);
    let goal = Cell::new(4, 0);
    let route = GridPathfinder::new(3)
        .pathfind(&o, start, goal)
        .expect("path should exist");
    assert_eq!(route.len(), 6);
    assert_eq!(route.cost, 6);
    assert_eq!(walk(start, &route.moves), goal);

    let cheap = GridPathfinder::new(1)
        .pathfind(&o, start, goal)
        .expect("path should exist");
    assert_eq!(cheap.moves, vec![Direction::Right; 4]);
}

#[test]
fn same_cell_is_an_empty_route() {
    let o = open_overlay(2, 2);
    let route = GridPathfinder::default()
        .pathfind(&o, Cell::new(1, 1), Cell::new(1, 1))
        .expect("trivial route");
    assert!(route.is_empty());
    assert_eq!(route.cost, 0);
}

#[test]
fn deterministic_for_same_input() {
    let mut o = open_overlay(10, 10);
    for y in 0..10 {
        o.set(Cell::new(5, y), Mark::Wall);
    }
    o.set(Cell::new(5, 5), Mark::Safe);

    let pf = GridPathfinder::default();
    let a = pf.pathfind(&o, Cell::new(1, 1), Cell::new(8, 8)).expect("path");
    let b = pf.pathfind(&o, Cell::new(1, 1), Cell::new(8, 8)).expect("path");
    assert_eq!(a, b);
}

#[test]
fn target_outside_grid_has_no_route() {
    let o = open_overlay(2, 2);
    assert!(GridPathfinder::default()
        .pathfind(&o, Cell::new(0, 0), Cell::new(5, 5))
        .is_none());
}
