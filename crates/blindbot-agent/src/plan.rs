use std::collections::VecDeque;

use blindbot_nav::Direction;

/// FIFO queue of moves the environment consumes one per cycle.
///
/// A plan is only ever replaced wholesale, cleared, or popped from the front.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plan {
    moves: VecDeque<Direction>,
}

impl Plan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&mut self, moves: impl IntoIterator<Item = Direction>) {
        self.moves = moves.into_iter().collect();
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }

    /// Dequeue the next move, `None` when the plan is exhausted.
    pub fn next_move(&mut self) -> Option<Direction> {
        self.moves.pop_front()
    }

    pub fn peek(&self) -> Option<Direction> {
        self.moves.front().copied()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Direction> + '_ {
        self.moves.iter().copied()
    }
}
