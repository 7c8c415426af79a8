use blindbot_agent::{run_episode, AgentConfig, EpisodeOutcome, Explorer, TraceKind};
use blindbot_logic::Cell;
use blindbot_nav::{Mark, Maze};

const PITFALL: &str = "\
XXXXXXX
X@.P.GX
X.....X
XXXXXXX
";

const FIELD: &str = "\
XXXXXXXXX
X@......X
X.......X
X......GX
XXXXXXXXX
";

fn c(x: i32, y: i32) -> Cell {
    Cell::new(x, y)
}

fn run(text: &str, max_steps: usize) -> blindbot_agent::EpisodeReport {
    let mut maze = Maze::parse(text).unwrap();
    let mut explorer = Explorer::from_config(&maze, &AgentConfig::default());
    run_episode(&mut maze, &mut explorer, max_steps)
}

#[test]
fn walks_around_a_deduced_pit() {
    let report = run(PITFALL, 100);

    assert_eq!(report.outcome, EpisodeOutcome::ReachedGoal);
    assert_eq!(
        report.path,
        vec![
            c(1, 1),
            c(2, 1),
            c(1, 1),
            c(1, 2),
            c(2, 2),
            c(3, 2),
            c(4, 2),
            c(4, 1),
            c(5, 1),
        ]
    );
    assert_eq!(report.steps, 8);
    assert_eq!(report.bumps, 0);
    assert_eq!(report.visited, 7);
    assert_eq!(report.overlay.get(c(3, 1)), Mark::Pit);

    let last = report.trace.last().map(|e| e.kind);
    assert_eq!(last, Some(TraceKind::GoalReached));
    assert!(report
        .trace
        .iter()
        .any(|e| e.kind == TraceKind::GoalShortcut && e.cell == c(5, 1)));
}

#[test]
fn open_field_is_crossed_without_bumps() {
    let report = run(FIELD, 100);
    assert_eq!(report.outcome, EpisodeOutcome::ReachedGoal);
    assert_eq!(report.bumps, 0);
    assert_eq!(report.path.last(), Some(&c(7, 3)));
}

#[test]
fn episodes_are_deterministic() {
    assert_eq!(run(PITFALL, 100), run(PITFALL, 100));
}

#[test]
fn step_limit_ends_the_episode() {
    let report = run(FIELD, 1);
    assert_eq!(report.outcome, EpisodeOutcome::StepLimit);
    assert_eq!(report.steps, 1);
    assert_eq!(report.path, vec![c(1, 1), c(2, 1)]);
}

#[test]
fn walled_in_agent_reports_stuck() {
    let report = run("XXXXX\nX@XGX\nXXXXX\n", 100);
    assert_eq!(report.outcome, EpisodeOutcome::Stuck);
    assert_eq!(report.steps, 0);
}

#[test]
fn forced_probe_can_end_in_a_pit() {
    let report = run("XXXXXXX\nXP@P.GX\nXXXXXXX\n", 100);
    assert_eq!(report.outcome, EpisodeOutcome::FellInPit);
    assert_eq!(report.path, vec![c(2, 1), c(3, 1)]);
    assert_eq!(report.overlay.get(c(3, 1)), Mark::Pit);
    assert!(!report.outcome.is_success());
}

#[test]
fn knowledge_base_grows_with_exploration() {
    let report = run(PITFALL, 100);
    assert!(report.kb_clauses > 2);
}
