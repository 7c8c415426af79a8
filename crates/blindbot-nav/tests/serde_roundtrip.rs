#![cfg(feature = "serde")]

use blindbot_nav::{Cell, Environment, EnvironmentMut, Maze, Overlay, Perception};

#[test]
fn overlay_and_perception_roundtrip_via_serde() {
    let maze = Maze::parse("XXXXX\nX@.GX\nX.P.X\nXXXXX\n").expect("maze");
    let overlay = maze.agent_maze();

    let json = serde_json::to_string(&overlay).expect("serialize overlay");
    let back: Overlay = serde_json::from_str(&json).expect("deserialize overlay");
    assert_eq!(overlay, back);

    let p = maze.perceive();
    let json = serde_json::to_string(&p).expect("serialize perception");
    let back: Perception = serde_json::from_str(&json).expect("deserialize perception");
    assert_eq!(p, back);
    assert_eq!(back.loc, Cell::new(1, 1));
}
