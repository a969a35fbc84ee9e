//! Deadline pursuit
//!
//! The deadline trails the player by a gap proportional to remaining energy
//! and eases toward that target every frame:
//!
//! ```text
//! target = player_x - max_gap * energy / max
//! x     += (target - x) * min(rate * dt, 1)
//! ```
//!
//! The blend factor is capped at 1 so the marker never overshoots its target.

use serde::{Deserialize, Serialize};

use super::state::GameState;
use crate::consts::PLAYER_X;
use crate::tuning::Tuning;

/// Where the deadline wants to be for a given energy level
pub fn target_x(energy: f32, energy_max: f32, player_x: f32, max_gap: f32) -> f32 {
    let fill = if energy_max > 0.0 {
        (energy / energy_max).clamp(0.0, 1.0)
    } else {
        0.0
    };
    player_x - max_gap * fill
}

/// The pursuing boundary
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeadlineMarker {
    pub x: f32,
}

impl DeadlineMarker {
    /// Resting position for a full-energy start
    pub fn at_rest(tuning: &Tuning) -> Self {
        Self {
            x: target_x(tuning.energy_max, tuning.energy_max, PLAYER_X, tuning.deadline_max_gap),
        }
    }

    /// Ease toward `target`
    pub fn pursue(&mut self, target: f32, rate: f32, dt: f32) {
        let blend = (rate * dt).clamp(0.0, 1.0);
        self.x += (target - self.x) * blend;
    }

    /// Distance left between the deadline and the player (px)
    pub fn gap(&self, player_x: f32) -> f32 {
        player_x - self.x
    }

    pub fn has_caught(&self, player_x: f32, epsilon: f32) -> bool {
        self.gap(player_x) <= epsilon
    }
}

/// Per-frame pursuit step
pub fn update(state: &mut GameState, tuning: &Tuning, dt: f32) {
    let target = target_x(
        state.energy.energy,
        tuning.energy_max,
        state.player.x(),
        tuning.deadline_max_gap,
    );
    state.deadline.pursue(target, tuning.deadline_rate, dt);
}
