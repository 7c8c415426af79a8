use core::fmt;

use blindbot_logic::Cell;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What the agent currently believes about one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Mark {
    Wall,
    Unknown,
    Safe,
    Pit,
    Goal,
}

impl Mark {
    pub fn glyph(self) -> char {
        match self {
            Mark::Wall => 'X',
            Mark::Unknown => '.',
            Mark::Safe => 'S',
            Mark::Pit => 'P',
            Mark::Goal => 'G',
        }
    }

    pub fn is_passable(self) -> bool {
        !matches!(self, Mark::Wall | Mark::Pit)
    }
}

/// The agent's own copy of the maze: walls and goal known up front, every
/// other cell starts `Unknown` and is refined as the agent learns.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Overlay {
    width: i32,
    height: i32,
    marks: Vec<Mark>,
}

impl Overlay {
    pub fn new(width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "overlay must be non-empty");
        let width = width as i32;
        let height = height as i32;
        Self {
            width,
            height,
            marks: vec![Mark::Unknown; (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width as u32
    }

    pub fn height(&self) -> u32 {
        self.height as u32
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && cell.x < self.width && cell.y < self.height
    }

    pub(crate) fn idx(&self, cell: Cell) -> Option<usize> {
        if !self.in_bounds(cell) {
            return None;
        }
        Some((cell.y * self.width + cell.x) as usize)
    }

    pub(crate) fn cell_from_idx(&self, idx: usize) -> Cell {
        let idx = idx as i32;
        Cell::new(idx % self.width, idx / self.width)
    }

    pub(crate) fn len(&self) -> usize {
        self.marks.len()
    }

    /// Out-of-bounds cells read as walls.
    pub fn get(&self, cell: Cell) -> Mark {
        self.idx(cell).map(|i| self.marks[i]).unwrap_or(Mark::Wall)
    }

    pub fn set(&mut self, cell: Cell, mark: Mark) {
        if let Some(idx) = self.idx(cell) {
            self.marks[idx] = mark;
        }
    }

    /// Record a belief without overwriting structural marks (walls, goal).
    pub fn mark(&mut self, cell: Cell, mark: Mark) {
        if matches!(self.get(cell), Mark::Wall | Mark::Goal) {
            return;
        }
        self.set(cell, mark);
    }

    /// Copy with every cell matching `blocked` turned into a wall.
    pub fn blocking(&self, mut blocked: impl FnMut(Cell, Mark) -> bool) -> Overlay {
        let mut out = self.clone();
        for (idx, mark) in out.marks.iter_mut().enumerate() {
            if blocked(self.cell_from_idx(idx), *mark) {
                *mark = Mark::Wall;
            }
        }
        out
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.marks.iter().filter(|m| **m == mark).count()
    }

    /// Render with `@` at the agent's position.
    pub fn render(&self, agent: Option<Cell>) -> String {
        let mut out = String::with_capacity(self.marks.len() + self.height as usize);
        for y in 0..self.height {
            for x in 0..self.width {
                let cell = Cell::new(x, y);
                if agent == Some(cell) {
                    out.push('@');
                } else {
                    out.push(self.get(cell).glyph());
                }
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Overlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(None))
    }
}
