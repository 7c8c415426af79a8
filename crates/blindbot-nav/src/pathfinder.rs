use blindbot_logic::Cell;

use crate::{Direction, Overlay};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A move sequence and its total step cost.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Route {
    pub cost: u32,
    pub moves: Vec<Direction>,
}

impl Route {
    pub fn new(cost: u32, moves: Vec<Direction>) -> Self {
        Self { cost, moves }
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

/// Turns a start/target pair into a move sequence over the agent's overlay.
pub trait Pathfinder {
    /// `None` when no route exists.
    fn pathfind(&self, overlay: &Overlay, start: Cell, target: Cell) -> Option<Route>;
}

impl<P: Pathfinder + ?Sized> Pathfinder for &P {
    fn pathfind(&self, overlay: &Overlay, start: Cell, target: Cell) -> Option<Route> {
        (**self).pathfind(overlay, start, target)
    }
}

impl<P: Pathfinder + ?Sized> Pathfinder for Box<P> {
    fn pathfind(&self, overlay: &Overlay, start: Cell, target: Cell) -> Option<Route> {
        (**self).pathfind(overlay, start, target)
    }
}
