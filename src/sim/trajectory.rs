//! Projectile trajectory planning
//!
//! Projectiles fly strictly leftward at a fixed speed along a nearly flat
//! parabola. The vertical launch velocity is solved at spawn time so the
//! projectile is at the archetype's target height exactly when it reaches
//! the player's x:
//!
//! ```text
//! T  = (start_x - player_x) / speed
//! vy = (target_y - start_y - g·T²/2) / T
//! ```
//!
//! Positions are re-evaluated from the closed form every frame, never
//! integrated, so the arc does not drift with frame rate.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Which band of the player a projectile aims at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Archetype {
    /// Aims at the grounded hitbox - the player has to jump
    Low,
    /// Aims just above the standing player's head - the player has to stay down
    High,
}

impl Archetype {
    /// Height (center) the projectile should have when it reaches the player
    pub fn target_height(&self, player_height: f32) -> f32 {
        match self {
            Archetype::Low => player_height * PROJECTILE_LOW_TARGET_FACTOR,
            Archetype::High => player_height + PROJECTILE_HIGH_CLEARANCE + PROJECTILE_SIZE / 2.0,
        }
    }
}

/// Closed-form flight plan of a projectile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    pub start_x: f32,
    pub start_y: f32,
    /// Horizontal velocity (always negative)
    pub vx: f32,
    /// Initial vertical velocity
    pub vy: f32,
    /// Vertical acceleration (px/s², negative = downward)
    pub gravity: f32,
}

impl Trajectory {
    /// Center position `t` seconds after launch
    pub fn position_at(&self, t: f32) -> Vec2 {
        Vec2::new(
            self.start_x + self.vx * t,
            self.start_y + self.vy * t + 0.5 * self.gravity * t * t,
        )
    }
}

/// Solve the launch velocity for a projectile aimed at the player
///
/// Pure function: identical inputs always give an identical plan.
pub fn plan_trajectory(
    archetype: Archetype,
    start_x: f32,
    start_y: f32,
    player_x: f32,
    player_height: f32,
    horizontal_speed: f32,
    gravity: f32,
) -> Trajectory {
    let speed = horizontal_speed.abs();
    let target_y = archetype.target_height(player_height);
    let time_to_player = if speed > 0.0 {
        (start_x - player_x) / speed
    } else {
        0.0
    };

    // Already level with (or behind) the player: fly flat
    let vy = if time_to_player > f32::EPSILON {
        (target_y - start_y - 0.5 * gravity * time_to_player * time_to_player) / time_to_player
    } else {
        0.0
    };

    Trajectory {
        start_x,
        start_y,
        vx: -speed,
        vy,
        gravity,
    }
}
