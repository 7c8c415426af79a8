use blindbot_logic::Cell;
use blindbot_nav::{EnvironmentMut, Overlay, Pathfinder, Reading, StepOutcome};
use tracing::{debug, info};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::trace::TraceEvent;
use crate::Explorer;

/// How an episode ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EpisodeOutcome {
    ReachedGoal,
    FellInPit,
    /// The explorer had no move to offer.
    Stuck,
    StepLimit,
}

impl EpisodeOutcome {
    pub fn is_success(self) -> bool {
        self == EpisodeOutcome::ReachedGoal
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EpisodeReport {
    pub outcome: EpisodeOutcome,
    /// Moves executed, bumps included.
    pub steps: usize,
    pub bumps: usize,
    /// Cells the player stood on, in order, starting with the start cell.
    pub path: Vec<Cell>,
    pub visited: usize,
    pub kb_clauses: usize,
    pub overlay: Overlay,
    pub trace: Vec<TraceEvent>,
}

/// Drive `explorer` through `env` until the goal, a pit, a stall or `max_steps`.
pub fn run_episode<E, P>(env: &mut E, explorer: &mut Explorer<P>, max_steps: usize) -> EpisodeReport
where
    E: EnvironmentMut,
    P: Pathfinder,
{
    let mut steps = 0;
    let mut bumps = 0;
    let mut path = vec![env.player_loc()];

    let outcome = loop {
        let perception = env.perceive();
        explorer.think(env, &perception);

        if perception.loc == env.goal_loc() {
            break EpisodeOutcome::ReachedGoal;
        }
        if perception.reading == Reading::Pit {
            break EpisodeOutcome::FellInPit;
        }
        if steps >= max_steps {
            break EpisodeOutcome::StepLimit;
        }
        let Some(dir) = explorer.next_move() else {
            break EpisodeOutcome::Stuck;
        };

        steps += 1;
        match env.step(dir) {
            StepOutcome::Bumped => {
                debug!(?dir, at = %env.player_loc(), "bumped");
                bumps += 1;
            }
            _ => path.push(env.player_loc()),
        }
    };

    info!(?outcome, steps, bumps, "episode finished");
    EpisodeReport {
        outcome,
        steps,
        bumps,
        path,
        visited: explorer.beliefs().visited().len(),
        kb_clauses: explorer.beliefs().kb().len(),
        overlay: explorer.overlay().clone(),
        trace: explorer
            .take_trace()
            .map(|log| log.events)
            .unwrap_or_default(),
    }
}
