use blindbot_agent::{interpret, BeliefMap, Safety};
use blindbot_logic::{Cell, Clause, KnowledgeBase, Literal};
use blindbot_nav::{Environment, Mark, Maze, Perception, Reading};

fn c(x: i32, y: i32) -> Cell {
    Cell::new(x, y)
}

fn beliefs_for(maze: &Maze) -> BeliefMap {
    BeliefMap::new(KnowledgeBase::new(), maze.playable_locs())
}

/// 11x11 open field, agent in the middle, no pits.
fn open_field() -> Maze {
    let mut text = String::new();
    for y in 0..11 {
        for x in 0..11 {
            text.push(match (x, y) {
                (5, 5) => '@',
                (0, 0) => 'G',
                _ => '.',
            });
        }
        text.push('\n');
    }
    Maze::parse(&text).unwrap()
}

#[test]
fn empty_reading_clears_three_rings_and_condemns_nothing() {
    let maze = open_field();
    let mut beliefs = beliefs_for(&maze);
    let mut overlay = maze.agent_maze();
    let here = c(5, 5);

    let report = interpret(
        &Perception::new(here, Reading::Empty),
        &maze,
        &mut beliefs,
        &mut overlay,
    );
    assert_eq!(report.cleared.len(), 12);
    assert!(report.downgraded.is_empty());

    for cell in maze.cardinal_locs(here, 3) {
        assert_eq!(beliefs.classify(cell), Safety::Safe, "{cell}");
        assert!(beliefs.is_safe(cell));
        assert_eq!(overlay.get(cell), Mark::Safe);
    }
    for cell in maze.cardinal_locs(here, 4) {
        assert_ne!(beliefs.classify(cell), Safety::Pit, "{cell}");
    }
    assert_eq!(beliefs.classify(c(5, 1)), Safety::Unknown);
    assert_eq!(overlay.get(here), Mark::Safe);
}

#[test]
fn empty_reading_condemns_an_entailed_pit_four_out() {
    let maze = open_field();
    let mut beliefs = beliefs_for(&maze);
    let mut overlay = maze.agent_maze();
    beliefs.tell(Clause::new([
        Literal::pit(c(9, 5), true),
        Literal::pit(c(5, 9), true),
    ]));
    beliefs.tell_pit(c(5, 9), false);

    let report = interpret(
        &Perception::new(c(5, 5), Reading::Empty),
        &maze,
        &mut beliefs,
        &mut overlay,
    );
    assert_eq!(report.downgraded, vec![c(9, 5)]);
    assert_eq!(overlay.get(c(9, 5)), Mark::Pit);
    assert_eq!(overlay.get(c(5, 9)), Mark::Unknown);
    assert_eq!(beliefs.classify(c(1, 5)), Safety::Unknown);
}

#[test]
fn one_reading_asserts_a_disjunction_and_clears_nothing() {
    let maze = Maze::parse("XXXXXX\nXP@PGX\nXXXXXX\n").unwrap();
    let mut beliefs = beliefs_for(&maze);
    let mut overlay = maze.agent_maze();
    let here = maze.start();
    assert_eq!(maze.reading_at(here), Reading::One);

    let report = interpret(
        &Perception::new(here, Reading::One),
        &maze,
        &mut beliefs,
        &mut overlay,
    );
    assert_eq!(report.told, 2);
    assert!(report.cleared.is_empty());

    assert_eq!(beliefs.classify(c(1, 1)), Safety::Unknown);
    assert_eq!(beliefs.classify(c(3, 1)), Safety::Unknown);
    assert!(!beliefs.is_safe(c(1, 1)));
    assert!(!beliefs.is_safe(c(3, 1)));

    let either = Clause::new([Literal::pit(c(1, 1), true), Literal::pit(c(3, 1), true)]);
    assert!(beliefs.kb().ask(&either));
    assert_eq!(
        beliefs.suspects().iter().copied().collect::<Vec<_>>(),
        vec![c(1, 1), c(3, 1)]
    );
}

#[test]
fn two_reading_with_a_single_candidate_pins_the_pit() {
    let maze = Maze::parse("XXXXXXX\nX@.P.GX\nX.....X\nXXXXXXX\n").unwrap();
    let mut beliefs = beliefs_for(&maze);
    let mut overlay = maze.agent_maze();
    let here = maze.start();
    assert_eq!(maze.reading_at(here), Reading::Two);

    let report = interpret(
        &Perception::new(here, Reading::Two),
        &maze,
        &mut beliefs,
        &mut overlay,
    );
    assert_eq!(report.cleared, vec![c(2, 1), c(1, 2)]);
    assert_eq!(report.downgraded, vec![c(3, 1)]);
    assert_eq!(beliefs.classify(c(3, 1)), Safety::Pit);
    assert_eq!(overlay.get(c(3, 1)), Mark::Pit);
}

#[test]
fn three_reading_clears_two_rings() {
    let maze = Maze::parse("XXXXXXX\nX@..P.X\nX..X.GX\nXXXXXXX\n").unwrap();
    let mut beliefs = beliefs_for(&maze);
    let mut overlay = maze.agent_maze();
    let here = maze.start();
    assert_eq!(maze.reading_at(here), Reading::Three);

    let report = interpret(
        &Perception::new(here, Reading::Three),
        &maze,
        &mut beliefs,
        &mut overlay,
    );
    assert_eq!(report.cleared, vec![c(2, 1), c(1, 2), c(3, 1)]);
    assert_eq!(report.downgraded, vec![c(4, 1)]);
    assert_eq!(beliefs.classify(c(2, 2)), Safety::Unknown);
}

#[test]
fn pit_reading_condemns_the_cell_itself() {
    let maze = Maze::parse("XXXXXX\nX@P.GX\nXXXXXX\n").unwrap();
    let mut beliefs = beliefs_for(&maze);
    let mut overlay = maze.agent_maze();

    let report = interpret(
        &Perception::new(c(2, 1), Reading::Pit),
        &maze,
        &mut beliefs,
        &mut overlay,
    );
    assert_eq!(report.told, 1);
    assert_eq!(beliefs.classify(c(2, 1)), Safety::Pit);
    assert_eq!(overlay.get(c(2, 1)), Mark::Pit);
}

#[test]
fn known_pits_are_never_cleared() {
    let maze = open_field();
    let mut beliefs = beliefs_for(&maze);
    let mut overlay = maze.agent_maze();
    beliefs.tell_pit(c(6, 5), true);

    let report = interpret(
        &Perception::new(c(5, 5), Reading::Empty),
        &maze,
        &mut beliefs,
        &mut overlay,
    );
    assert_eq!(report.refused, vec![c(6, 5)]);
    assert!(!beliefs.known_pit_free(c(6, 5)));
    assert!(!beliefs.is_safe(c(6, 5)));
    assert_eq!(overlay.get(c(6, 5)), Mark::Pit);
}

#[test]
fn disjunction_over_walls_only_is_skipped() {
    let maze = Maze::parse("XXXXX\nX@XGX\nXXXXX\n").unwrap();
    let mut beliefs = beliefs_for(&maze);
    let mut overlay = maze.agent_maze();

    let report = interpret(
        &Perception::new(maze.start(), Reading::One),
        &maze,
        &mut beliefs,
        &mut overlay,
    );
    assert_eq!(report.told, 1);
    assert_eq!(beliefs.kb().len(), 1);
    assert!(!beliefs.kb().ask(&Clause::empty()));
}
