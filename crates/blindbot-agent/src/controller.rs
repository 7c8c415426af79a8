//! The exploration controller.
//!
//! One [`Explorer`] lives for one episode. Each cycle the environment calls
//! [`Explorer::think`] with the latest perception and then drains moves with
//! [`Explorer::next_move`].

use std::collections::BTreeSet;

use blindbot_logic::{Cell, KnowledgeBase};
use blindbot_nav::{
    Direction, Environment, GridPathfinder, Mark, Overlay, Pathfinder, Perception, Reading, Route,
};
use tracing::{debug, info, warn};

use crate::trace::{TraceEvent, TraceKind, TraceLog, TraceSink};
use crate::{sensor, AgentConfig, BeliefMap, Plan, Safety};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Exploring,
    Committed { target: Cell },
    GoalReached,
}

pub struct Explorer<P: Pathfinder = GridPathfinder> {
    start: Cell,
    goal: Cell,
    loc: Cell,
    beliefs: BeliefMap,
    overlay: Overlay,
    plan: Plan,
    state: ControllerState,
    pathfinder: P,
    tick: u64,
    trace: Option<TraceLog>,
    sink: Option<Box<dyn TraceSink>>,
}

impl Explorer<GridPathfinder> {
    /// Explorer with the grid A* pathfinder configured from `config`.
    pub fn from_config<E: Environment + ?Sized>(env: &E, config: &AgentConfig) -> Self {
        Self::new(env, GridPathfinder::new(config.unknown_cell_cost), config)
    }
}

impl<P: Pathfinder> Explorer<P> {
    /// Fresh explorer for the episode `env` is about to run.
    ///
    /// The knowledge base starts with two axioms: neither the start nor the
    /// goal holds a pit.
    pub fn new<E: Environment + ?Sized>(env: &E, pathfinder: P, config: &AgentConfig) -> Self {
        let start = env.player_loc();
        let goal = env.goal_loc();

        let mut kb = KnowledgeBase::new();
        kb.set_budget(config.resolution_budget);

        let mut frontier = env.playable_locs();
        frontier.remove(&goal);

        let mut beliefs = BeliefMap::new(kb, frontier);
        beliefs.tell_pit(goal, false);
        beliefs.tell_pit(start, false);

        Self {
            start,
            goal,
            loc: start,
            beliefs,
            overlay: env.agent_maze(),
            plan: Plan::new(),
            state: ControllerState::Exploring,
            pathfinder,
            tick: 0,
            trace: config.trace.then(TraceLog::default),
            sink: None,
        }
    }

    /// Forward every trace event to `sink` as well as the built-in log.
    pub fn with_sink(mut self, sink: Box<dyn TraceSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn goal(&self) -> Cell {
        self.goal
    }

    pub fn location(&self) -> Cell {
        self.loc
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn beliefs(&self) -> &BeliefMap {
        &self.beliefs
    }

    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    pub fn plan(&self) -> &Plan {
        &self.plan
    }

    pub fn trace(&self) -> Option<&TraceLog> {
        self.trace.as_ref()
    }

    pub fn take_trace(&mut self) -> Option<TraceLog> {
        self.trace.take()
    }

    pub fn classify(&self, cell: Cell) -> Safety {
        self.beliefs.classify(cell)
    }

    /// Dequeue the next move; `None` means the agent has nothing to do.
    pub fn next_move(&mut self) -> Option<Direction> {
        self.plan.next_move()
    }

    /// Process one perception and (re)plan.
    pub fn think<E: Environment + ?Sized>(&mut self, env: &E, perception: &Perception) {
        self.tick += 1;
        self.loc = perception.loc;
        if self.state == ControllerState::GoalReached {
            return;
        }
        self.emit(TraceKind::Perceived, self.loc);

        if self.loc == self.goal {
            info!(cell = %self.loc, tick = self.tick, "goal reached");
            self.plan.clear();
            self.state = ControllerState::GoalReached;
            self.emit(TraceKind::GoalReached, self.loc);
            return;
        }

        if self.beliefs.visit(self.loc) {
            self.plan.clear();
            let report = sensor::interpret(perception, env, &mut self.beliefs, &mut self.overlay);
            for cell in report.downgraded {
                self.emit(TraceKind::Downgraded, cell);
            }
            for (cell, _) in self.beliefs.refresh_suspects(&mut self.overlay) {
                self.emit(TraceKind::Resolved, cell);
            }
        }

        if perception.reading == Reading::Pit {
            self.plan.clear();
            self.state = ControllerState::Exploring;
            return;
        }

        if let Some(dir) = Direction::between(self.loc, self.goal) {
            debug!(goal = %self.goal, ?dir, "goal is adjacent");
            self.plan.replace([dir]);
            self.state = ControllerState::Committed { target: self.goal };
            self.emit(TraceKind::GoalShortcut, self.goal);
            return;
        }

        if !self.plan.is_empty() {
            return;
        }

        if self.commit_to_frontier() || self.probe(env) {
            return;
        }

        warn!(cell = %self.loc, "no safe target and no probe available");
        self.state = ControllerState::Exploring;
        self.emit(TraceKind::Stuck, self.loc);
    }

    /// Route to the safe frontier cell closest to the goal.
    fn commit_to_frontier(&mut self) -> bool {
        let goal = self.goal;
        let mut candidates: Vec<Cell> = self.beliefs.safe_frontier().collect();
        candidates.sort_by_key(|&c| (c.manhattan(goal), c));
        if candidates.is_empty() {
            return false;
        }

        let chosen = choose_route(
            &self.pathfinder,
            &self.overlay,
            self.beliefs.suspects(),
            self.loc,
            &candidates,
        );
        let Some((target, route)) = chosen else {
            warn!(
                candidates = candidates.len(),
                "no route to any safe frontier cell; probing"
            );
            return false;
        };

        debug!(
            target = %target,
            moves = route.len(),
            cost = route.cost,
            "committed to frontier cell"
        );
        self.plan.replace(route.moves);
        self.state = ControllerState::Committed { target };
        self.emit(TraceKind::Committed, target);
        true
    }

    /// Single step toward the most promising playable neighbour.
    fn probe<E: Environment + ?Sized>(&mut self, env: &E) -> bool {
        let goal = self.goal;
        let mut options: Vec<(bool, Safety, u32, Cell)> = Vec::new();

        for cell in env.cardinal_locs(self.loc, 1) {
            if !env.is_playable(cell) || self.overlay.get(cell) == Mark::Pit {
                continue;
            }
            let safety = self.beliefs.classify(cell);
            match safety {
                Safety::Pit => {
                    self.overlay.mark(cell, Mark::Pit);
                    continue;
                }
                Safety::Safe => {
                    self.beliefs.mark_safe(cell);
                    self.overlay.mark(cell, Mark::Safe);
                }
                Safety::Unknown => {}
            }
            options.push((self.beliefs.is_visited(cell), safety, cell.manhattan(goal), cell));
        }

        let Some(&(_, safety, _, target)) = options.iter().min() else {
            return false;
        };
        let Some(dir) = Direction::between(self.loc, target) else {
            return false;
        };

        debug!(target = %target, ?safety, "probing");
        self.plan.replace([dir]);
        self.state = ControllerState::Committed { target };
        self.emit(TraceKind::Probe, target);
        true
    }

    fn emit(&mut self, kind: TraceKind, cell: Cell) {
        let event = TraceEvent::new(self.tick, kind, cell);
        if let Some(log) = self.trace.as_mut() {
            log.push(event);
        }
        if let Some(sink) = self.sink.as_mut() {
            sink.emit(event);
        }
    }
}

/// First candidate the pathfinder can reach, preferring proven ground.
///
/// The first pass walls off every unknown cell. The second only walls off
/// unknown cells named by an unresolved pit disjunction.
fn choose_route<P: Pathfinder>(
    pathfinder: &P,
    overlay: &Overlay,
    suspects: &BTreeSet<Cell>,
    from: Cell,
    candidates: &[Cell],
) -> Option<(Cell, Route)> {
    let verified = overlay.blocking(|_, mark| mark == Mark::Unknown);
    let guarded = overlay.blocking(|cell, mark| mark == Mark::Unknown && suspects.contains(&cell));

    for map in [&verified, &guarded] {
        for &target in candidates {
            match pathfinder.pathfind(map, from, target) {
                Some(route) if !route.is_empty() => return Some((target, route)),
                _ => debug!(target = %target, "no route"),
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: i32, y: i32) -> Cell {
        Cell::new(x, y)
    }

    /// ```text
    /// SSSS
    /// SXXS
    /// @.SS     @ at (0,2), target (2,2), (1,2) unknown
    /// ```
    fn shortcut_or_detour() -> Overlay {
        let mut overlay = Overlay::new(4, 3);
        for x in 0..4 {
            overlay.set(c(x, 0), Mark::Safe);
        }
        overlay.set(c(0, 1), Mark::Safe);
        overlay.set(c(1, 1), Mark::Wall);
        overlay.set(c(2, 1), Mark::Wall);
        overlay.set(c(3, 1), Mark::Safe);
        overlay.set(c(0, 2), Mark::Safe);
        overlay.set(c(2, 2), Mark::Safe);
        overlay.set(c(3, 2), Mark::Safe);
        overlay
    }

    #[test]
    fn proven_detour_beats_cheaper_unknown_shortcut() {
        let overlay = shortcut_or_detour();
        let pathfinder = GridPathfinder::default();
        assert_eq!(
            pathfinder.pathfind(&overlay, c(0, 2), c(2, 2)).map(|r| r.len()),
            Some(2)
        );

        let (target, route) =
            choose_route(&pathfinder, &overlay, &BTreeSet::new(), c(0, 2), &[c(2, 2)])
                .expect("route");
        assert_eq!(target, c(2, 2));
        assert_eq!(route.len(), 8);
        assert_eq!(route.moves.first(), Some(&Direction::Up));
    }

    #[test]
    fn unknown_cells_are_crossed_only_outside_disjunctions() {
        let mut overlay = shortcut_or_detour();
        overlay.set(c(3, 1), Mark::Wall);
        let pathfinder = GridPathfinder::default();

        let open = choose_route(&pathfinder, &overlay, &BTreeSet::new(), c(0, 2), &[c(2, 2)]);
        assert_eq!(open.map(|(_, r)| r.moves), Some(vec![Direction::Right; 2]));

        let suspects = BTreeSet::from([c(1, 2)]);
        assert!(choose_route(&pathfinder, &overlay, &suspects, c(0, 2), &[c(2, 2)]).is_none());
    }
}
