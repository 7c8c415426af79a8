use std::collections::BTreeSet;

use blindbot_logic::Cell;

use crate::{Direction, Overlay};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What the agent senses on the tile it stands on.
///
/// A digit `n` means the nearest pit along the four cardinal rays is exactly
/// `n` cells away; `Empty` means there is none within [`Reading::RANGE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Reading {
    Empty,
    One,
    Two,
    Three,
    Pit,
}

impl Reading {
    /// Sensing range of the proximity readings.
    pub const RANGE: u32 = 3;

    /// Reading for a nearest-pit distance (`None`: nothing in range).
    pub fn from_distance(distance: Option<u32>) -> Self {
        match distance {
            Some(0) => Reading::Pit,
            Some(1) => Reading::One,
            Some(2) => Reading::Two,
            Some(3) => Reading::Three,
            _ => Reading::Empty,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Reading::Empty => '.',
            Reading::One => '1',
            Reading::Two => '2',
            Reading::Three => '3',
            Reading::Pit => 'P',
        }
    }

    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '.' => Some(Reading::Empty),
            '1' => Some(Reading::One),
            '2' => Some(Reading::Two),
            '3' => Some(Reading::Three),
            'P' => Some(Reading::Pit),
            _ => None,
        }
    }
}

/// One perception record, delivered once per cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Perception {
    pub loc: Cell,
    pub reading: Reading,
}

impl Perception {
    pub fn new(loc: Cell, reading: Reading) -> Self {
        Self { loc, reading }
    }
}

/// Result of executing one move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StepOutcome {
    Moved,
    /// Wall or edge: the player did not move.
    Bumped,
    FellInPit,
    ReachedGoal,
}

/// Read-only queries the agent may make about its surroundings.
pub trait Environment {
    fn player_loc(&self) -> Cell;
    fn goal_loc(&self) -> Cell;
    /// Every non-wall cell.
    fn playable_locs(&self) -> BTreeSet<Cell>;
    fn is_playable(&self, cell: Cell) -> bool;
    /// Cells on the four cardinal rays at distance `1..=radius`, clipped to the grid.
    fn cardinal_locs(&self, cell: Cell, radius: u32) -> BTreeSet<Cell>;
    /// A fresh overlay with the structure the agent is allowed to know.
    fn agent_maze(&self) -> Overlay;
}

/// Environments that can also be driven by an episode loop.
pub trait EnvironmentMut: Environment {
    fn perceive(&self) -> Perception;
    fn step(&mut self, dir: Direction) -> StepOutcome;
}
