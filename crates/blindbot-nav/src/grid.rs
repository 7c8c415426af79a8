use core::cmp::Ordering;
use std::collections::BinaryHeap;

use blindbot_logic::Cell;

use crate::{Direction, Mark, Overlay, Pathfinder, Route};

#[derive(Debug)]
struct OpenNode {
    f: u32,
    g: u32,
    cell: Cell,
    tie: u64,
}

impl OpenNode {
    fn key(&self) -> (u32, u32, Cell, u64) {
        (self.f, self.g, self.cell, self.tie)
    }
}

impl PartialEq for OpenNode {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for OpenNode {}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering to make BinaryHeap behave like a min-heap.
        other.key().cmp(&self.key())
    }
}

/// A* over the agent's overlay.
///
/// Walls and known pits are impassable. Cells the agent has not proven safe
/// are passable but cost `unknown_cost` per step, so routes through verified
/// ground win whenever they are not much longer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPathfinder {
    unknown_cost: u32,
}

impl Default for GridPathfinder {
    fn default() -> Self {
        Self::new(3)
    }
}

impl GridPathfinder {
    pub fn new(unknown_cost: u32) -> Self {
        Self {
            unknown_cost: unknown_cost.max(1),
        }
    }

    pub fn unknown_cost(&self) -> u32 {
        self.unknown_cost
    }

    fn step_cost(&self, mark: Mark) -> Option<u32> {
        match mark {
            Mark::Wall | Mark::Pit => None,
            Mark::Safe | Mark::Goal => Some(1),
            Mark::Unknown => Some(self.unknown_cost),
        }
    }

    fn heuristic(a: Cell, b: Cell) -> u32 {
        a.manhattan(b)
    }

    fn reconstruct_path(came_from: &[Option<usize>], mut current: usize) -> Vec<usize> {
        let mut out = vec![current];
        while let Some(prev) = came_from[current] {
            current = prev;
            out.push(current);
        }
        out.reverse();
        out
    }

    fn a_star(&self, overlay: &Overlay, start: Cell, goal: Cell) -> Option<(u32, Vec<Cell>)> {
        let start_idx = overlay.idx(start)?;
        let goal_idx = overlay.idx(goal)?;
        if !overlay.get(goal).is_passable() {
            return None;
        }

        let mut open = BinaryHeap::<OpenNode>::new();
        let mut tie: u64 = 0;

        let mut g_score = vec![u32::MAX; overlay.len()];
        let mut came_from: Vec<Option<usize>> = vec![None; overlay.len()];

        g_score[start_idx] = 0;
        open.push(OpenNode {
            f: Self::heuristic(start, goal),
            g: 0,
            cell: start,
            tie,
        });
        tie += 1;

        while let Some(node) = open.pop() {
            if node.cell == goal {
                let idx_path = Self::reconstruct_path(&came_from, goal_idx);
                let cells = idx_path
                    .into_iter()
                    .map(|i| overlay.cell_from_idx(i))
                    .collect();
                return Some((node.g, cells));
            }

            let node_idx = overlay.idx(node.cell)?;
            if node.g != g_score[node_idx] {
                // Stale heap entry.
                continue;
            }

            for dir in Direction::ALL {
                let n = dir.apply(node.cell);
                let Some(n_idx) = overlay.idx(n) else { continue };
                let Some(cost) = self.step_cost(overlay.get(n)) else {
                    continue;
                };

                let tentative_g = node.g.saturating_add(cost);
                if tentative_g >= g_score[n_idx] {
                    continue;
                }

                came_from[n_idx] = Some(node_idx);
                g_score[n_idx] = tentative_g;
                open.push(OpenNode {
                    f: tentative_g.saturating_add(Self::heuristic(n, goal)),
                    g: tentative_g,
                    cell: n,
                    tie,
                });
                tie += 1;
            }
        }

        None
    }
}

impl Pathfinder for GridPathfinder {
    fn pathfind(&self, overlay: &Overlay, start: Cell, target: Cell) -> Option<Route> {
        let (cost, cells) = self.a_star(overlay, start, target)?;
        let moves = cells
            .windows(2)
            .map(|pair| Direction::between(pair[0], pair[1]))
            .collect::<Option<Vec<_>>>()?;
        Some(Route::new(cost, moves))
    }
}
