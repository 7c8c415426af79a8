//! Turning readings into clauses.
//!
//! A digit `n` says the nearest cardinal pit is exactly `n` cells away, so
//! rings `1..n` are pit-free and ring `n` holds at least one pit. An empty
//! reading clears rings `1..=3`. Ring 4 after an empty reading, and ring `n`
//! after a digit, are re-classified once the new clauses are in.

use std::collections::BTreeSet;

use blindbot_logic::{Cell, Clause, Literal};
use blindbot_nav::{Environment, Mark, Overlay, Perception, Reading};
use tracing::{debug, warn};

use crate::{BeliefMap, Safety};

/// What one interpreted perception changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SensorReport {
    /// Clauses that were new to the knowledge base.
    pub told: usize,
    /// Cells told pit-free and added to the safe-set, in ring order.
    pub cleared: Vec<Cell>,
    /// Cells of the checked ring now entailed to be pits.
    pub downgraded: Vec<Cell>,
    /// Cells the reading would clear but that are already entailed pits.
    pub refused: Vec<Cell>,
}

/// Playable cells at cardinal distance exactly `radius`.
pub fn ring<E: Environment + ?Sized>(env: &E, cell: Cell, radius: u32) -> BTreeSet<Cell> {
    let outer = env.cardinal_locs(cell, radius);
    let inner = if radius > 1 {
        env.cardinal_locs(cell, radius - 1)
    } else {
        BTreeSet::new()
    };
    outer
        .difference(&inner)
        .copied()
        .filter(|&c| env.is_playable(c))
        .collect()
}

/// Radius certified pit-free by a reading, `None` for a pit.
fn cleared_radius(reading: Reading) -> Option<u32> {
    match reading {
        Reading::Empty => Some(Reading::RANGE),
        Reading::Three => Some(2),
        Reading::Two => Some(1),
        Reading::One => Some(0),
        Reading::Pit => None,
    }
}

/// Tell the knowledge base what `perception` implies and update the overlay.
pub fn interpret<E: Environment + ?Sized>(
    perception: &Perception,
    env: &E,
    beliefs: &mut BeliefMap,
    overlay: &mut Overlay,
) -> SensorReport {
    let here = perception.loc;
    let mut report = SensorReport::default();

    let Some(cleared) = cleared_radius(perception.reading) else {
        report.told += usize::from(beliefs.tell_pit(here, true));
        overlay.mark(here, Mark::Pit);
        debug!(cell = %here, "standing on a pit");
        return report;
    };

    report.told += usize::from(beliefs.tell_pit(here, false));
    overlay.mark(here, Mark::Safe);

    for radius in 1..=cleared {
        for cell in ring(env, here, radius) {
            if !beliefs.known_pit_free(cell) && beliefs.classify(cell) == Safety::Pit {
                warn!(
                    cell = %cell,
                    reading = ?perception.reading,
                    "reading clears a known pit; ignoring"
                );
                overlay.mark(cell, Mark::Pit);
                report.refused.push(cell);
                continue;
            }
            report.told += usize::from(beliefs.tell_pit(cell, false));
            beliefs.mark_safe(cell);
            overlay.mark(cell, Mark::Safe);
            report.cleared.push(cell);
        }
    }

    let checked = cleared + 1;
    let checked_ring = ring(env, here, checked);

    if perception.reading != Reading::Empty {
        if checked_ring.is_empty() {
            warn!(
                cell = %here,
                reading = ?perception.reading,
                "no playable cell can hold the sensed pit"
            );
        } else {
            let clause: Clause = checked_ring
                .iter()
                .map(|&c| Literal::pit(c, true))
                .collect();
            debug!(%clause, "pit disjunction");
            report.told += usize::from(beliefs.tell(clause));
        }
    }

    for &cell in &checked_ring {
        if beliefs.classify(cell) == Safety::Pit {
            overlay.mark(cell, Mark::Pit);
            report.downgraded.push(cell);
        }
    }

    debug!(
        cell = %here,
        reading = ?perception.reading,
        told = report.told,
        cleared = report.cleared.len(),
        downgraded = report.downgraded.len(),
        "perception interpreted"
    );
    report
}
