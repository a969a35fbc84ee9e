//! Game balance and device configuration
//!
//! Every constant the simulation reads goes through `Tuning`, so hosts can
//! override a subset via JSON and tests can build targeted setups.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Device class the host is running on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DeviceClass {
    #[default]
    Desktop,
    Mobile,
}

impl DeviceClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceClass::Desktop => "Desktop",
            DeviceClass::Mobile => "Mobile",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "desktop" | "pc" => Some(DeviceClass::Desktop),
            "mobile" | "touch" => Some(DeviceClass::Mobile),
            _ => None,
        }
    }

    /// Uniform multiplier applied to the scroll speed
    pub fn speed_multiplier(&self) -> f32 {
        match self {
            DeviceClass::Desktop => DESKTOP_SPEED_MULTIPLIER,
            DeviceClass::Mobile => MOBILE_SPEED_MULTIPLIER,
        }
    }
}

/// Randomized countdown bounds for one spawn category (ms)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnInterval {
    pub min_ms: f32,
    pub max_ms: f32,
}

impl SpawnInterval {
    pub const fn new(bounds: (f32, f32)) -> Self {
        Self {
            min_ms: bounds.0,
            max_ms: bounds.1,
        }
    }

    /// An interval that never elapses within a session
    pub const fn never() -> Self {
        Self {
            min_ms: f32::MAX,
            max_ms: f32::MAX,
        }
    }

    /// Interval with both bounds multiplied by `factor`
    pub fn scaled(&self, factor: f32) -> Self {
        Self {
            min_ms: self.min_ms * factor,
            max_ms: self.max_ms * factor,
        }
    }
}

/// Game balance
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub device: DeviceClass,

    // === Energy ===
    pub energy_max: f32,
    pub energy_drain_amount: f32,
    pub energy_drain_interval_ms: f32,
    pub jump_energy_cost: f32,
    pub pass_energy_reward: f32,

    // === Hazards ===
    pub ground_damage: f32,
    pub floating_damage: f32,
    pub projectile_damage: f32,
    pub ground_interval: SpawnInterval,
    /// Ground interval bounds shrink to this fraction at full difficulty
    pub ground_interval_min_scale: f32,
    pub floating_interval: SpawnInterval,
    pub floating_unlock_distance: f32,
    pub projectile_interval: SpawnInterval,
    pub projectile_unlock_distance: f32,
    pub projectile_speed: f32,
    pub projectile_gravity: f32,

    // === Collectibles ===
    pub regular_energy_gain: f32,
    pub special_energy_gain: f32,
    pub regular_interval: SpawnInterval,
    pub special_interval: SpawnInterval,

    // === Combo / Sprint ===
    pub sprint_combo_threshold: u32,
    pub combo_milestones: Vec<u32>,
    pub sprint_duration_ms: f32,
    pub sprint_speed_multiplier: f32,
    pub sprint_distance_multiplier: f32,

    // === Speed ===
    pub speed_initial: f32,
    pub speed_max: f32,
    pub speed_acceleration: f32,
    pub distance_bonus_interval: f32,
    pub distance_bonus_step: f32,
    pub distance_bonus_cap: f32,

    // === Deadline ===
    pub deadline_max_gap: f32,
    pub deadline_rate: f32,
    pub deadline_catch_epsilon: f32,

    // === Feedback ===
    pub feedback_max_bubbles: usize,
    pub feedback_cooldown_ms: f32,
    pub feedback_duration_ms: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            device: DeviceClass::Desktop,

            energy_max: ENERGY_MAX,
            energy_drain_amount: ENERGY_DRAIN_AMOUNT,
            energy_drain_interval_ms: ENERGY_DRAIN_INTERVAL_MS,
            jump_energy_cost: JUMP_ENERGY_COST,
            pass_energy_reward: PASS_ENERGY_REWARD,

            ground_damage: GROUND_DAMAGE,
            floating_damage: FLOATING_DAMAGE,
            projectile_damage: PROJECTILE_DAMAGE,
            ground_interval: SpawnInterval::new(GROUND_INTERVAL_MS),
            ground_interval_min_scale: GROUND_INTERVAL_MIN_SCALE,
            floating_interval: SpawnInterval::new(FLOATING_INTERVAL_MS),
            floating_unlock_distance: FLOATING_UNLOCK_DISTANCE,
            projectile_interval: SpawnInterval::new(PROJECTILE_INTERVAL_MS),
            projectile_unlock_distance: PROJECTILE_UNLOCK_DISTANCE,
            projectile_speed: PROJECTILE_SPEED,
            projectile_gravity: PROJECTILE_GRAVITY,

            regular_energy_gain: REGULAR_ENERGY_GAIN,
            special_energy_gain: SPECIAL_ENERGY_GAIN,
            regular_interval: SpawnInterval::new(REGULAR_INTERVAL_MS),
            special_interval: SpawnInterval::new(SPECIAL_INTERVAL_MS),

            sprint_combo_threshold: SPRINT_COMBO_THRESHOLD,
            combo_milestones: COMBO_MILESTONES.to_vec(),
            sprint_duration_ms: SPRINT_DURATION_MS,
            sprint_speed_multiplier: SPRINT_SPEED_MULTIPLIER,
            sprint_distance_multiplier: SPRINT_DISTANCE_MULTIPLIER,

            speed_initial: SPEED_INITIAL,
            speed_max: SPEED_MAX,
            speed_acceleration: SPEED_ACCELERATION,
            distance_bonus_interval: DISTANCE_BONUS_INTERVAL,
            distance_bonus_step: DISTANCE_BONUS_STEP,
            distance_bonus_cap: DISTANCE_BONUS_CAP,

            deadline_max_gap: DEADLINE_MAX_GAP,
            deadline_rate: DEADLINE_RATE,
            deadline_catch_epsilon: DEADLINE_CATCH_EPSILON,

            feedback_max_bubbles: FEEDBACK_MAX_BUBBLES,
            feedback_cooldown_ms: FEEDBACK_COOLDOWN_MS,
            feedback_duration_ms: FEEDBACK_DURATION_MS,
        }
    }
}

impl Tuning {
    /// Default balance for a device class
    pub fn for_device(device: DeviceClass) -> Self {
        Self {
            device,
            ..Self::default()
        }
    }

    /// Balance with every spawn category switched off (scripted scenarios)
    pub fn without_spawns() -> Self {
        Self {
            ground_interval: SpawnInterval::never(),
            floating_interval: SpawnInterval::never(),
            projectile_interval: SpawnInterval::never(),
            regular_interval: SpawnInterval::never(),
            special_interval: SpawnInterval::never(),
            ..Self::default()
        }
    }

    /// Parse a (possibly partial) JSON override, falling back to defaults
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(tuning) => {
                log::info!("Loaded tuning overrides");
                tuning
            }
            Err(e) => {
                log::warn!("Invalid tuning JSON ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Whether `combo` is one of the configured milestone values
    pub fn is_milestone(&self, combo: u32) -> bool {
        self.combo_milestones.contains(&combo)
    }
}
