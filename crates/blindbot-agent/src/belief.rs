//! Per-cell safety beliefs derived from the knowledge base.
//!
//! Classification is never cached: every call re-asks the knowledge base, so
//! a verdict can only get sharper as clauses are told.

use std::collections::BTreeSet;

use blindbot_logic::{Cell, Clause, KnowledgeBase, Literal};
use blindbot_nav::{Mark, Overlay};
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Safety {
    Safe,
    Pit,
    Unknown,
}

impl Safety {
    /// Overlay mark for a definite verdict.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Safety::Safe => Some(Mark::Safe),
            Safety::Pit => Some(Mark::Pit),
            Safety::Unknown => None,
        }
    }
}

/// Knowledge base plus the bookkeeping sets the controller explores with.
#[derive(Debug, Clone)]
pub struct BeliefMap {
    kb: KnowledgeBase,
    visited: BTreeSet<Cell>,
    safe: BTreeSet<Cell>,
    frontier: BTreeSet<Cell>,
    suspects: BTreeSet<Cell>,
}

impl BeliefMap {
    pub fn new(kb: KnowledgeBase, frontier: BTreeSet<Cell>) -> Self {
        Self {
            kb,
            visited: BTreeSet::new(),
            safe: BTreeSet::new(),
            frontier,
            suspects: BTreeSet::new(),
        }
    }

    pub fn kb(&self) -> &KnowledgeBase {
        &self.kb
    }

    /// Tell a clause. Cells of multi-literal clauses become suspects.
    pub fn tell(&mut self, clause: Clause) -> bool {
        if clause.len() > 1 {
            self.suspects.extend(clause.propositions().map(|p| p.cell));
        }
        self.kb.tell(clause)
    }

    pub fn tell_pit(&mut self, cell: Cell, present: bool) -> bool {
        self.tell(Clause::unit(Literal::pit(cell, present)))
    }

    /// Has `¬pit(cell)` been told directly?
    pub fn known_pit_free(&self, cell: Cell) -> bool {
        self.kb.contains(&Clause::unit(Literal::pit(cell, false)))
    }

    /// Pit if `pit(cell)` is entailed, else Safe if `¬pit(cell)` is, else Unknown.
    ///
    /// Under an inconsistent knowledge base both queries succeed and Pit wins
    /// because it is asked first.
    pub fn classify(&self, cell: Cell) -> Safety {
        if self.kb.ask(&Clause::unit(Literal::pit(cell, true))) {
            Safety::Pit
        } else if self.kb.ask(&Clause::unit(Literal::pit(cell, false))) {
            Safety::Safe
        } else {
            Safety::Unknown
        }
    }

    /// Record a visit. Returns `true` when the cell came off the frontier.
    pub fn visit(&mut self, cell: Cell) -> bool {
        self.visited.insert(cell);
        self.frontier.remove(&cell)
    }

    pub fn mark_safe(&mut self, cell: Cell) {
        self.safe.insert(cell);
    }

    pub fn is_visited(&self, cell: Cell) -> bool {
        self.visited.contains(&cell)
    }

    pub fn is_safe(&self, cell: Cell) -> bool {
        self.safe.contains(&cell)
    }

    pub fn is_frontier(&self, cell: Cell) -> bool {
        self.frontier.contains(&cell)
    }

    pub fn visited(&self) -> &BTreeSet<Cell> {
        &self.visited
    }

    pub fn safe(&self) -> &BTreeSet<Cell> {
        &self.safe
    }

    pub fn frontier(&self) -> &BTreeSet<Cell> {
        &self.frontier
    }

    pub fn suspects(&self) -> &BTreeSet<Cell> {
        &self.suspects
    }

    /// Unvisited cells known to be safe, in cell order.
    pub fn safe_frontier(&self) -> impl Iterator<Item = Cell> + '_ {
        self.frontier.intersection(&self.safe).copied()
    }

    /// Re-classify every suspect and drop the ones that are now settled.
    ///
    /// Returns the newly settled cells with their verdicts.
    pub fn refresh_suspects(&mut self, overlay: &mut Overlay) -> Vec<(Cell, Safety)> {
        let mut settled = Vec::new();
        for cell in self.suspects.clone() {
            let verdict = self.classify(cell);
            let Some(mark) = verdict.mark() else { continue };
            if verdict == Safety::Safe {
                self.safe.insert(cell);
            }
            overlay.mark(cell, mark);
            self.suspects.remove(&cell);
            settled.push((cell, verdict));
        }
        if !settled.is_empty() {
            debug!(
                settled = settled.len(),
                remaining = self.suspects.len(),
                "suspects refreshed"
            );
        }
        settled
    }
}
