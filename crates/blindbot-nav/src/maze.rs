//! Text mazes and the simulated environment around them.
//!
//! ```text
//! XXXXXXX
//! X@..P.X      X wall, . open, P pit, @ start, G goal
//! X..X.GX
//! XXXXXXX
//! ```

use core::fmt;
use core::str::FromStr;
use std::collections::BTreeSet;

use blindbot_logic::Cell;

use crate::{
    Direction, Environment, EnvironmentMut, Mark, MazeError, Overlay, Perception, Reading, Result,
    StepOutcome,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tile {
    Wall,
    Open,
    Pit,
}

/// The ground-truth maze plus the player's position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
    start: Cell,
    goal: Cell,
    player: Cell,
}

impl Maze {
    pub fn parse(text: &str) -> Result<Self> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim_end)
            .filter(|l| !l.is_empty())
            .collect();
        if rows.is_empty() {
            return Err(MazeError::Empty);
        }

        let height = rows.len() as i32;
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0) as i32;
        let mut tiles = vec![Tile::Wall; (width * height) as usize];
        let mut start: Option<Cell> = None;
        let mut goal: Option<Cell> = None;

        for (y, row) in rows.iter().enumerate() {
            for (x, glyph) in row.chars().enumerate() {
                let cell = Cell::new(x as i32, y as i32);
                let tile = match glyph {
                    'X' | '#' => Tile::Wall,
                    '.' | ' ' => Tile::Open,
                    'P' => Tile::Pit,
                    '@' => {
                        if let Some(first) = start {
                            return Err(MazeError::DuplicateStart {
                                first,
                                second: cell,
                            });
                        }
                        start = Some(cell);
                        Tile::Open
                    }
                    'G' => {
                        if let Some(first) = goal {
                            return Err(MazeError::DuplicateGoal {
                                first,
                                second: cell,
                            });
                        }
                        goal = Some(cell);
                        Tile::Open
                    }
                    _ => return Err(MazeError::UnknownTile { glyph, cell }),
                };
                tiles[(cell.y * width + cell.x) as usize] = tile;
            }
        }

        let start = start.ok_or(MazeError::MissingStart)?;
        let goal = goal.ok_or(MazeError::MissingGoal)?;
        Ok(Self {
            width,
            height,
            tiles,
            start,
            goal,
            player: start,
        })
    }

    pub fn width(&self) -> u32 {
        self.width as u32
    }

    pub fn height(&self) -> u32 {
        self.height as u32
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn goal(&self) -> Cell {
        self.goal
    }

    /// Put the player back on the start tile.
    pub fn reset(&mut self) {
        self.player = self.start;
    }

    pub fn pit_count(&self) -> usize {
        self.tiles.iter().filter(|t| **t == Tile::Pit).count()
    }

    pub fn is_pit(&self, cell: Cell) -> bool {
        self.tile(cell) == Tile::Pit
    }

    fn tile(&self, cell: Cell) -> Tile {
        if cell.x < 0 || cell.y < 0 || cell.x >= self.width || cell.y >= self.height {
            return Tile::Wall;
        }
        self.tiles[(cell.y * self.width + cell.x) as usize]
    }

    fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && cell.x < self.width && cell.y < self.height
    }

    fn ring(&self, cell: Cell, distance: i32) -> impl Iterator<Item = Cell> + '_ {
        Direction::ALL.into_iter().filter_map(move |d| {
            let (dx, dy) = d.delta();
            let c = cell.offset(dx * distance, dy * distance);
            self.in_bounds(c).then_some(c)
        })
    }

    /// What a player standing on `cell` would sense.
    pub fn reading_at(&self, cell: Cell) -> Reading {
        if self.is_pit(cell) {
            return Reading::Pit;
        }
        let nearest = (1..=Reading::RANGE)
            .find(|&d| self.ring(cell, d as i32).any(|c| self.is_pit(c)));
        Reading::from_distance(nearest)
    }
}

impl FromStr for Maze {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Environment for Maze {
    fn player_loc(&self) -> Cell {
        self.player
    }

    fn goal_loc(&self) -> Cell {
        self.goal
    }

    fn playable_locs(&self) -> BTreeSet<Cell> {
        (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| Cell::new(x, y)))
            .filter(|&c| self.tile(c) != Tile::Wall)
            .collect()
    }

    fn is_playable(&self, cell: Cell) -> bool {
        self.tile(cell) != Tile::Wall
    }

    fn cardinal_locs(&self, cell: Cell, radius: u32) -> BTreeSet<Cell> {
        (1..=radius as i32)
            .flat_map(|d| self.ring(cell, d))
            .collect()
    }

    fn agent_maze(&self) -> Overlay {
        let mut overlay = Overlay::new(self.width(), self.height());
        for y in 0..self.height {
            for x in 0..self.width {
                let c = Cell::new(x, y);
                if self.tile(c) == Tile::Wall {
                    overlay.set(c, Mark::Wall);
                }
            }
        }
        overlay.set(self.goal, Mark::Goal);
        overlay
    }
}

impl EnvironmentMut for Maze {
    fn perceive(&self) -> Perception {
        Perception::new(self.player, self.reading_at(self.player))
    }

    fn step(&mut self, dir: Direction) -> StepOutcome {
        let next = dir.apply(self.player);
        match self.tile(next) {
            Tile::Wall => StepOutcome::Bumped,
            Tile::Pit => {
                self.player = next;
                StepOutcome::FellInPit
            }
            Tile::Open => {
                self.player = next;
                if next == self.goal {
                    StepOutcome::ReachedGoal
                } else {
                    StepOutcome::Moved
                }
            }
        }
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                let c = Cell::new(x, y);
                let glyph = if c == self.player {
                    '@'
                } else if c == self.goal {
                    'G'
                } else {
                    match self.tile(c) {
                        Tile::Wall => 'X',
                        Tile::Open => '.',
                        Tile::Pit => 'P',
                    }
                };
                write!(f, "{glyph}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
