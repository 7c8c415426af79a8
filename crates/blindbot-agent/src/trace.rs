use blindbot_logic::Cell;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TraceKind {
    /// A perception was processed at `cell`.
    Perceived,
    /// A plan to the safe frontier cell `cell` was committed.
    Committed,
    /// Fallback single-step probe toward `cell`.
    Probe,
    /// The goal at `cell` is adjacent; one move planned.
    GoalShortcut,
    /// `cell` was proven to be a pit.
    Downgraded,
    /// A suspect `cell` was resolved by later evidence.
    Resolved,
    /// No move available at `cell`.
    Stuck,
    GoalReached,
}

/// One recorded agent decision.
///
/// Plain data so it can be recorded during an episode and rendered later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TraceEvent {
    pub tick: u64,
    pub kind: TraceKind,
    pub cell: Cell,
}

impl TraceEvent {
    pub fn new(tick: u64, kind: TraceKind, cell: Cell) -> Self {
        Self { tick, kind, cell }
    }
}

pub trait TraceSink {
    fn emit(&mut self, event: TraceEvent);
}

#[derive(Debug, Default)]
pub struct NullTraceSink;

impl TraceSink for NullTraceSink {
    fn emit(&mut self, _event: TraceEvent) {}
}

#[derive(Debug, Default)]
pub struct VecTraceSink {
    pub events: Vec<TraceEvent>,
}

impl TraceSink for VecTraceSink {
    fn emit(&mut self, event: TraceEvent) {
        self.events.push(event);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TraceLog {
    pub events: Vec<TraceEvent>,
}

impl TraceLog {
    pub fn push(&mut self, event: TraceEvent) {
        self.events.push(event);
    }

    pub fn count(&self, kind: TraceKind) -> usize {
        self.events.iter().filter(|e| e.kind == kind).count()
    }
}
