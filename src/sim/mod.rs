//! Frame-driven simulation module
//!
//! All gameplay logic lives here. This module must stay host-agnostic:
//! - Time only advances through the `delta_ms` handed to `tick`
//! - Randomness only through an injected `RandomSource`
//! - No rendering, audio or storage dependencies (hosts drain `GameEvent`s)

pub mod aabb;
pub mod autopilot;
pub mod collision;
pub mod deadline;
pub mod difficulty;
pub mod energy;
pub mod feedback;
pub mod movement;
pub mod rng;
pub mod spawner;
pub mod state;
pub mod tick;
pub mod trajectory;

pub use aabb::Aabb;
pub use collision::{HazardOutcome, classify_hazard};
pub use deadline::DeadlineMarker;
pub use difficulty::{compute_speed, difficulty_ratio};
pub use energy::{ComboState, EnergyState, SprintState};
pub use feedback::{FeedbackMessage, FeedbackQueue};
pub use movement::jump;
pub use rng::{RandomSource, ScriptedRandom};
pub use state::{
    Collectible, CollectibleKind, Flight, GameEvent, GameOverSummary, GamePhase, GameState,
    Obstacle, ObstacleKind, Player, Tally,
};
pub use tick::tick;
pub use trajectory::{Archetype, Trajectory, plan_trajectory};
