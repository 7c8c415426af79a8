//! Belief tracking and exploration for a maze agent that cannot see pits.
//!
//! Each cycle the environment hands the agent a [`Perception`]. The
//! [`Explorer`] feeds it through the sensor interpreter into the knowledge
//! base, classifies cells through the [`BeliefMap`], picks the next target and
//! fills its [`Plan`]; the environment then executes one move.
//!
//! [`Perception`]: blindbot_nav::Perception

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod belief;
pub mod config;
pub mod controller;
pub mod episode;
pub mod plan;
pub mod sensor;
pub mod trace;

pub use belief::{BeliefMap, Safety};
pub use config::AgentConfig;
pub use controller::{ControllerState, Explorer};
pub use episode::{run_episode, EpisodeOutcome, EpisodeReport};
pub use plan::Plan;
pub use sensor::{interpret, SensorReport};
pub use trace::{NullTraceSink, TraceEvent, TraceKind, TraceLog, TraceSink, VecTraceSink};
