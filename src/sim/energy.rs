//! Energy, combo and sprint rules
//!
//! Energy is clamped to `[0, max]` at every mutation; combo is unsigned and
//! `max_combo` only ever rises. Sprint is a timed sub-mode orthogonal to the
//! session phase.

use serde::{Deserialize, Serialize};

use super::feedback;
use super::state::{GameEvent, GameState};
use crate::tuning::Tuning;

/// The player's depleting resource
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnergyState {
    pub energy: f32,
    /// Time accumulated toward the next passive drain (ms)
    pub drain_timer_ms: f32,
}

impl EnergyState {
    pub fn full(max: f32) -> Self {
        Self {
            energy: max,
            drain_timer_ms: 0.0,
        }
    }

    pub fn add(&mut self, amount: f32, max: f32) {
        self.energy = (self.energy + amount.max(0.0)).clamp(0.0, max);
    }

    /// Subtract energy; returns true when it has run out
    pub fn spend(&mut self, amount: f32, max: f32) -> bool {
        self.energy = (self.energy - amount.max(0.0)).clamp(0.0, max);
        self.is_depleted()
    }

    pub fn fill(&mut self, max: f32) {
        self.energy = max;
    }

    pub fn is_depleted(&self) -> bool {
        self.energy <= 0.0
    }
}

/// Consecutive clears since the last hit
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ComboState {
    pub combo: u32,
    /// High-water mark for the session
    pub max_combo: u32,
}

impl ComboState {
    /// Bump the streak and return the new value
    pub fn increment(&mut self) -> u32 {
        self.combo = self.combo.saturating_add(1);
        self.max_combo = self.max_combo.max(self.combo);
        self.combo
    }

    pub fn reset(&mut self) {
        self.combo = 0;
    }
}

/// Timed invulnerability + speed boost
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SprintState {
    pub active: bool,
    /// Remaining sprint time (ms)
    pub timer_ms: f32,
    /// Set on activation; the activating frame does not count down
    pub just_started: bool,
}

impl SprintState {
    /// Start the countdown; false if already sprinting
    pub fn activate(&mut self, duration_ms: f32) -> bool {
        if self.active {
            return false;
        }
        self.active = true;
        self.timer_ms = duration_ms;
        self.just_started = true;
        true
    }

    /// Count down; returns true on the frame the sprint expires
    pub fn countdown(&mut self, dt_ms: f32) -> bool {
        if !self.active {
            return false;
        }
        if self.just_started {
            self.just_started = false;
            return false;
        }
        self.timer_ms -= dt_ms;
        if self.timer_ms <= 0.0 {
            self.active = false;
            self.timer_ms = 0.0;
            return true;
        }
        false
    }

    pub fn remaining_ms(&self) -> f32 {
        if self.active { self.timer_ms.max(0.0) } else { 0.0 }
    }
}

/// Energy cost of a jump right now (waived while sprinting)
pub fn jump_cost(state: &GameState, tuning: &Tuning) -> f32 {
    if state.sprint.active {
        0.0
    } else {
        tuning.jump_energy_cost
    }
}

/// Enter sprint: refill energy and start the countdown
pub fn activate_sprint(state: &mut GameState, tuning: &Tuning) -> bool {
    if !state.sprint.activate(tuning.sprint_duration_ms) {
        return false;
    }
    state.energy.fill(tuning.energy_max);
    state.feedback.post(feedback::SPRINT_TEXT, true);
    state.events.push(GameEvent::SprintStarted);
    log::info!("Sprint! combo {}", state.combo.combo);
    true
}

/// Credit a hazard that scrolled past the player without touching it
pub fn register_pass(state: &mut GameState, tuning: &Tuning) {
    let combo = state.combo.increment();
    state.energy.add(tuning.pass_energy_reward, tuning.energy_max);
    state.events.push(GameEvent::ObstaclePassed { combo });

    let threshold = tuning.sprint_combo_threshold;
    if threshold > 0 && combo.is_multiple_of(threshold) && !state.sprint.active {
        activate_sprint(state, tuning);
    }

    if tuning.is_milestone(combo) {
        state.feedback.post(&feedback::milestone_text(combo), true);
        state.events.push(GameEvent::ComboMilestone { combo });
    }
}

/// Per-frame energy rules: sprint countdown, then passive drain
pub fn update(state: &mut GameState, tuning: &Tuning, dt_ms: f32) {
    if !state.is_running() {
        return;
    }

    if state.sprint.countdown(dt_ms) {
        state.events.push(GameEvent::SprintEnded);
        log::info!("Sprint over at {:.0} energy", state.energy.energy);
        // Drain cadence restarts from the end of the sprint
        state.energy.drain_timer_ms = 0.0;
        return;
    }

    if state.sprint.active || tuning.energy_drain_interval_ms <= 0.0 {
        return;
    }

    state.energy.drain_timer_ms += dt_ms;
    while state.energy.drain_timer_ms >= tuning.energy_drain_interval_ms {
        state.energy.drain_timer_ms -= tuning.energy_drain_interval_ms;
        if state.energy.spend(tuning.energy_drain_amount, tuning.energy_max) {
            log::debug!("Energy drained out");
            state.end_game();
            return;
        }
    }
}
