//! Game state and core simulation types
//!
//! Everything the frame pipeline reads or mutates lives in `GameState`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use super::deadline::DeadlineMarker;
use super::energy::{ComboState, EnergyState, SprintState};
use super::feedback::FeedbackQueue;
use super::spawner::SpawnTimers;
use super::trajectory::{Archetype, Trajectory};
use crate::consts::*;
use crate::tuning::Tuning;

/// Session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Not started yet, waiting for `start_game`
    Idle,
    /// Updating every frame
    Running,
    /// Run ended (terminal until reset)
    GameOver,
}

/// The runner
///
/// x is fixed at `PLAYER_X`; `y` is the height of the feet above ground.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub y: f32,
    pub vy: f32,
    pub grounded: bool,
    /// Jumps left before touching the ground again
    pub jumps_remaining: u8,
    pub size: Vec2,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            y: 0.0,
            vy: 0.0,
            grounded: true,
            jumps_remaining: MAX_JUMPS,
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
        }
    }
}

impl Player {
    pub fn x(&self) -> f32 {
        PLAYER_X
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_bottom(PLAYER_X, self.y, self.size)
    }

    /// Put the runner back on the ground with a fresh set of jumps
    pub fn land(&mut self) {
        self.y = 0.0;
        self.vy = 0.0;
        self.grounded = true;
        self.jumps_remaining = MAX_JUMPS;
    }
}

/// Hazard categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    Ground,
    Floating,
    Projectile,
}

impl ObstacleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObstacleKind::Ground => "ground",
            ObstacleKind::Floating => "floating",
            ObstacleKind::Projectile => "projectile",
        }
    }

    /// Damage dealt on an unshielded hit
    pub fn damage(&self, tuning: &Tuning) -> f32 {
        match self {
            ObstacleKind::Ground => tuning.ground_damage,
            ObstacleKind::Floating => tuning.floating_damage,
            ObstacleKind::Projectile => tuning.projectile_damage,
        }
    }
}

/// Launch data of a projectile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    /// Session time of launch (ms)
    pub launch_ms: f64,
    pub archetype: Archetype,
    pub trajectory: Trajectory,
}

/// A hazard entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub kind: ObstacleKind,
    /// Center position
    pub pos: Vec2,
    pub size: Vec2,
    /// Current horizontal speed (px/s, leftward)
    pub speed: f32,
    pub damage: f32,
    /// Already credited as cleared (ground/floating only)
    pub passed: bool,
    /// Present for projectiles only
    pub flight: Option<Flight>,
}

impl Obstacle {
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    /// Whether clearing this hazard earns combo credit
    pub fn awards_pass(&self) -> bool {
        matches!(self.kind, ObstacleKind::Ground | ObstacleKind::Floating)
    }
}

/// Collectible tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollectibleKind {
    Regular,
    Special,
}

impl CollectibleKind {
    pub fn energy_gain(&self, tuning: &Tuning) -> f32 {
        match self {
            CollectibleKind::Regular => tuning.regular_energy_gain,
            CollectibleKind::Special => tuning.special_energy_gain,
        }
    }
}

/// A pickup entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collectible {
    pub id: u32,
    pub kind: CollectibleKind,
    /// Center position
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
}

impl Collectible {
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    pub fn is_special(&self) -> bool {
        self.kind == CollectibleKind::Special
    }
}

/// Flavor score breakdown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    /// Hazards that hit the player
    pub grinches: u32,
    /// Collectibles gathered
    pub elves: u32,
}

/// Final numbers handed to collaborators when a run ends
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameOverSummary {
    pub distance: u32,
    pub max_combo: u32,
    pub grinches: u32,
    pub elves: u32,
}

/// Outward notifications, drained by the host (audio, persistence, UI)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    Jumped { air: bool },
    Hit { kind: ObstacleKind, damage: f32 },
    Deflected { kind: ObstacleKind },
    ObstaclePassed { combo: u32 },
    Collected { kind: CollectibleKind, gain: f32 },
    ComboMilestone { combo: u32 },
    SprintStarted,
    SprintEnded,
    CategoryUnlocked { kind: ObstacleKind },
    DeadlineCaught,
    GameOver(GameOverSummary),
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub collectibles: Vec<Collectible>,
    pub energy: EnergyState,
    pub combo: ComboState,
    pub sprint: SprintState,
    pub deadline: DeadlineMarker,
    pub feedback: FeedbackQueue,
    pub spawner: SpawnTimers,
    /// Meters traveled
    pub distance: f32,
    /// Base scroll speed (before sprint/device multipliers)
    pub speed: f32,
    /// Effective scroll speed this frame
    pub scroll_speed: f32,
    /// Running time (ms)
    pub elapsed_ms: f64,
    pub tally: Tally,
    /// Camera shake intensity (0-1, decays every tick)
    pub screen_shake: f32,
    /// Events raised since the host last drained them
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Fresh session state with every sub-state at its default
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            phase: GamePhase::Idle,
            player: Player::default(),
            obstacles: Vec::new(),
            collectibles: Vec::new(),
            energy: EnergyState::full(tuning.energy_max),
            combo: ComboState::default(),
            sprint: SprintState::default(),
            deadline: DeadlineMarker::at_rest(tuning),
            feedback: FeedbackQueue::from_tuning(tuning),
            spawner: SpawnTimers::new(tuning),
            distance: 0.0,
            speed: tuning.speed_initial,
            scroll_speed: tuning.speed_initial * tuning.device.speed_multiplier(),
            elapsed_ms: 0.0,
            tally: Tally::default(),
            screen_shake: 0.0,
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn summary(&self) -> GameOverSummary {
        GameOverSummary {
            distance: self.distance.floor() as u32,
            max_combo: self.combo.max_combo,
            grinches: self.tally.grinches,
            elves: self.tally.elves,
        }
    }

    /// Single terminal transition
    ///
    /// Returns false (and emits nothing) if the run is not running.
    pub fn end_game(&mut self) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }
        self.phase = GamePhase::GameOver;
        self.sprint.active = false;
        self.sprint.timer_ms = 0.0;
        let summary = self.summary();
        log::info!(
            "Game over: {}m, max combo {}, grinches {}, elves {}",
            summary.distance,
            summary.max_combo,
            summary.grinches,
            summary.elves
        );
        self.events.push(GameEvent::GameOver(summary));
        true
    }
}
