//! Grid overlay, pathfinding and environment contracts for the maze agent.
//!
//! The reasoning core only talks to the [`Environment`] and [`Pathfinder`]
//! traits. [`Maze`] and [`GridPathfinder`] are the reference implementations
//! used by the CLI and the tests.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod direction;
pub mod grid;
pub mod maze;
pub mod overlay;
pub mod pathfinder;
pub mod world;

pub use blindbot_logic::Cell;
pub use direction::Direction;
pub use grid::GridPathfinder;
pub use maze::Maze;
pub use overlay::{Mark, Overlay};
pub use pathfinder::{Pathfinder, Route};
pub use world::{Environment, EnvironmentMut, Perception, Reading, StepOutcome};

use thiserror::Error;

/// Errors produced while reading a maze from text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MazeError {
    #[error("maze has no rows")]
    Empty,

    #[error("unknown tile `{glyph}` at {cell}")]
    UnknownTile { glyph: char, cell: Cell },

    #[error("maze has no start (`@`)")]
    MissingStart,

    #[error("maze has no goal (`G`)")]
    MissingGoal,

    #[error("maze has a second start at {second} (first at {first})")]
    DuplicateStart { first: Cell, second: Cell },

    #[error("maze has a second goal at {second} (first at {first})")]
    DuplicateGoal { first: Cell, second: Cell },
}

pub type Result<T> = std::result::Result<T, MazeError>;
