//! Deadline Runner - A side-scrolling survival runner chased by a deadline
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (spawning, movement, collisions, energy)
//! - `session`: Lifecycle owner (start/reset/tick/jump) and state snapshots
//! - `tuning`: Data-driven game balance
//! - `platform`: Host integrations (browser bindings)

pub mod platform;
pub mod session;
pub mod sim;
pub mod tuning;

pub use session::{Session, Snapshot};
pub use tuning::{DeviceClass, Tuning};

/// Game configuration constants
pub mod consts {
    /// Logical playfield width (entities spawn just beyond it)
    pub const WORLD_WIDTH: f32 = 800.0;
    /// Entities spawn this far past the right edge
    pub const SPAWN_MARGIN: f32 = 60.0;
    /// Entities are culled once fully this far past the left edge
    pub const CULL_MARGIN: f32 = 80.0;
    /// Pixels scrolled per meter of distance
    pub const PIXELS_PER_METER: f32 = 10.0;

    /// Player defaults - x is fixed, y is height of the feet above ground
    pub const PLAYER_X: f32 = 150.0;
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 60.0;
    /// Downward acceleration on the player (px/s²)
    pub const PLAYER_GRAVITY: f32 = 2200.0;
    /// Upward velocity applied by a jump (px/s)
    pub const JUMP_VELOCITY: f32 = 780.0;
    /// Ground jump + one air jump
    pub const MAX_JUMPS: u8 = 2;

    /// Energy
    pub const ENERGY_MAX: f32 = 100.0;
    pub const ENERGY_DRAIN_AMOUNT: f32 = 1.0;
    pub const ENERGY_DRAIN_INTERVAL_MS: f32 = 500.0;
    pub const JUMP_ENERGY_COST: f32 = 2.0;
    pub const PASS_ENERGY_REWARD: f32 = 3.0;

    /// Hazard damage
    pub const GROUND_DAMAGE: f32 = 20.0;
    pub const FLOATING_DAMAGE: f32 = 15.0;
    pub const PROJECTILE_DAMAGE: f32 = 25.0;

    /// Hazard spawn intervals (ms) and unlock distances (m)
    pub const GROUND_INTERVAL_MS: (f32, f32) = (1400.0, 2600.0);
    /// Ground interval bounds shrink to this fraction at full difficulty
    pub const GROUND_INTERVAL_MIN_SCALE: f32 = 0.6;
    pub const FLOATING_INTERVAL_MS: (f32, f32) = (2500.0, 4500.0);
    pub const FLOATING_UNLOCK_DISTANCE: f32 = 150.0;
    pub const PROJECTILE_INTERVAL_MS: (f32, f32) = (4000.0, 7000.0);
    pub const PROJECTILE_UNLOCK_DISTANCE: f32 = 400.0;

    /// Hazard geometry
    pub const GROUND_SIZES: [(f32, f32); 3] = [(40.0, 50.0), (50.0, 70.0), (60.0, 40.0)];
    pub const FLOATING_SIZE: (f32, f32) = (50.0, 30.0);
    /// Center heights of floating hazards
    pub const FLOATING_HEIGHTS: [f32; 3] = [95.0, 135.0, 175.0];
    pub const PROJECTILE_SIZE: f32 = 24.0;
    /// Launch heights of projectiles (center)
    pub const PROJECTILE_LAUNCH_HEIGHTS: [f32; 2] = [60.0, 110.0];
    /// Fixed leftward projectile speed (px/s)
    pub const PROJECTILE_SPEED: f32 = 520.0;
    /// Nearly flat arc (negative = downward, px/s²)
    pub const PROJECTILE_GRAVITY: f32 = -60.0;
    /// Low archetype aims at this fraction of the player height
    pub const PROJECTILE_LOW_TARGET_FACTOR: f32 = 0.4;
    /// High archetype aims this far above the standing player's head
    pub const PROJECTILE_HIGH_CLEARANCE: f32 = 22.0;

    /// Collectibles
    pub const REGULAR_ENERGY_GAIN: f32 = 10.0;
    pub const SPECIAL_ENERGY_GAIN: f32 = 30.0;
    pub const REGULAR_INTERVAL_MS: (f32, f32) = (1200.0, 2400.0);
    pub const SPECIAL_INTERVAL_MS: (f32, f32) = (9000.0, 15000.0);
    pub const REGULAR_SIZE: f32 = 30.0;
    pub const SPECIAL_SIZE: f32 = 36.0;
    /// Center heights of collectibles
    pub const COLLECTIBLE_HEIGHTS: [f32; 4] = [25.0, 80.0, 140.0, 200.0];

    /// Combo / sprint
    pub const SPRINT_COMBO_THRESHOLD: u32 = 10;
    pub const COMBO_MILESTONES: [u32; 5] = [5, 10, 25, 50, 100];
    pub const SPRINT_DURATION_MS: f32 = 5000.0;
    pub const SPRINT_SPEED_MULTIPLIER: f32 = 1.5;
    pub const SPRINT_DISTANCE_MULTIPLIER: f32 = 2.0;

    /// Scroll speed (px/s)
    pub const SPEED_INITIAL: f32 = 300.0;
    pub const SPEED_MAX: f32 = 900.0;
    pub const SPEED_ACCELERATION: f32 = 8.0;
    pub const DISTANCE_BONUS_INTERVAL: f32 = 250.0;
    pub const DISTANCE_BONUS_STEP: f32 = 40.0;
    pub const DISTANCE_BONUS_CAP: f32 = 400.0;

    /// Device-class speed multipliers
    pub const DESKTOP_SPEED_MULTIPLIER: f32 = 1.0;
    pub const MOBILE_SPEED_MULTIPLIER: f32 = 0.85;

    /// Deadline trails the player by up to this many pixels at full energy
    pub const DEADLINE_MAX_GAP: f32 = 300.0;
    /// Exponential approach rate (1/s)
    pub const DEADLINE_RATE: f32 = 2.5;
    /// Must exceed `DEADLINE_MAX_GAP / ENERGY_MAX` so the last energy point is catchable
    pub const DEADLINE_CATCH_EPSILON: f32 = 4.0;

    /// Feedback bubbles
    pub const FEEDBACK_MAX_BUBBLES: usize = 3;
    pub const FEEDBACK_COOLDOWN_MS: f32 = 800.0;
    pub const FEEDBACK_DURATION_MS: f32 = 1800.0;

    /// Screen shake decay per tick
    pub const SHAKE_DECAY: f32 = 0.9;
}

/// Linear interpolation between `a` and `b`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
