//! Session lifecycle and read-only snapshots
//!
//! `Session` is the single owner of a run: it holds the tuning, the game
//! state and the random source, and exposes the host-facing controls
//! (`start_game`, `reset_game`, `tick`, `jump`). Collaborators observe the
//! run through `Snapshot`s and drained `GameEvent`s only.

use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::sim::rng::{RandomSource, runtime_rng};
use crate::sim::{self, GameEvent, GamePhase, GameState};
use crate::tuning::Tuning;

/// Presentation-facing view of the run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    /// Meters traveled (floored)
    pub distance: u32,
    /// Energy (rounded)
    pub energy: u32,
    /// `max - energy`, used to derive how close the deadline is
    pub deadline_proximity: u32,
    /// Pixel gap between the deadline marker and the player
    pub deadline_gap: f32,
    pub combo: u32,
    pub max_combo: u32,
    pub sprint_active: bool,
    pub sprint_remaining_ms: f32,
    pub grinches: u32,
    pub elves: u32,
    /// Effective scroll speed (px/s)
    pub speed: f32,
    pub screen_shake: f32,
    /// Live feedback bubbles, oldest first
    pub feedback: Vec<String>,
}

impl Snapshot {
    pub fn capture(state: &GameState, tuning: &Tuning) -> Self {
        let energy = state.energy.energy.round().clamp(0.0, tuning.energy_max);
        Self {
            phase: state.phase,
            distance: state.distance.floor() as u32,
            energy: energy as u32,
            deadline_proximity: (tuning.energy_max.round() - energy).max(0.0) as u32,
            deadline_gap: state.deadline.gap(state.player.x()),
            combo: state.combo.combo,
            max_combo: state.combo.max_combo,
            sprint_active: state.sprint.active,
            sprint_remaining_ms: state.sprint.remaining_ms(),
            grinches: state.tally.grinches,
            elves: state.tally.elves,
            speed: state.scroll_speed,
            screen_shake: state.screen_shake,
            feedback: state.feedback.messages().map(|m| m.text.clone()).collect(),
        }
    }
}

/// Undrained events kept between `drain_events` calls; older ones are dropped
pub const MAX_PENDING_EVENTS: usize = 256;

/// One player's run, from idle through game over
pub struct Session<R: RandomSource = Pcg32> {
    tuning: Tuning,
    state: GameState,
    rng: R,
    snapshot: Snapshot,
}

impl Session<Pcg32> {
    /// Session with an unseeded runtime RNG
    pub fn new(tuning: Tuning) -> Self {
        Self::with_rng(tuning, runtime_rng())
    }
}

impl<R: RandomSource> Session<R> {
    /// Session drawing randomness from `rng`
    pub fn with_rng(tuning: Tuning, rng: R) -> Self {
        let state = GameState::new(&tuning);
        let snapshot = Snapshot::capture(&state, &tuning);
        Self {
            tuning,
            state,
            rng,
            snapshot,
        }
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable access for hosts that script scenarios
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// `Idle -> Running`; no-op (returns false) from any other phase
    pub fn start_game(&mut self) -> bool {
        if self.state.phase != GamePhase::Idle {
            return false;
        }
        self.state.player.land();
        self.state.phase = GamePhase::Running;
        self.state.events.push(GameEvent::Started);
        self.refresh_snapshot();
        log::info!("Run started ({})", self.tuning.device.as_str());
        true
    }

    /// Back to `Idle` with every sub-state at its default
    pub fn reset_game(&mut self) {
        self.state = GameState::new(&self.tuning);
        self.refresh_snapshot();
        log::info!("Run reset");
    }

    /// Advance one frame and refresh the snapshot
    ///
    /// Hosts that only read snapshots may ignore `drain_events`; the backlog
    /// is capped at `MAX_PENDING_EVENTS`, keeping the newest.
    pub fn tick(&mut self, delta_ms: f32) {
        sim::tick(&mut self.state, &self.tuning, &mut self.rng, delta_ms);
        let events = &mut self.state.events;
        if events.len() > MAX_PENDING_EVENTS {
            let excess = events.len() - MAX_PENDING_EVENTS;
            events.drain(..excess);
        }
        self.refresh_snapshot();
    }

    /// Jump input; false if no jump was available
    pub fn jump(&mut self) -> bool {
        let jumped = sim::jump(&mut self.state, &self.tuning);
        if jumped {
            self.refresh_snapshot();
        }
        jumped
    }

    /// Snapshot as of the last tick or control call
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Events raised since the last drain, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.state.events)
    }

    fn refresh_snapshot(&mut self) {
        self.snapshot = Snapshot::capture(&self.state, &self.tuning);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::ScriptedRandom;

    fn session(tuning: Tuning) -> Session<ScriptedRandom> {
        Session::with_rng(tuning, ScriptedRandom::new(vec![0.1, 0.7, 0.4, 0.9]))
    }

    #[test]
    fn test_lifecycle() {
        let mut s = session(Tuning::default());
        assert_eq!(s.phase(), GamePhase::Idle);
        s.tick(16.0);
        assert_eq!(s.snapshot().distance, 0);

        assert!(s.start_game());
        assert_eq!(s.phase(), GamePhase::Running);
        for _ in 0..120 {
            s.tick(16.0);
        }
        assert!(s.snapshot().distance > 0);

        s.reset_game();
        assert_eq!(s.phase(), GamePhase::Idle);
        assert_eq!(s.snapshot().distance, 0);
        assert_eq!(s.snapshot().energy, 100);
        assert!(s.state().obstacles.is_empty());
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut s = session(Tuning::default());
        assert!(s.start_game());
        for _ in 0..300 {
            s.tick(16.0);
        }
        s.state_mut().combo.combo = 3;
        s.state_mut().combo.max_combo = 3;
        let distance = s.state().distance;
        let entities = s.state().obstacles.len() + s.state().collectibles.len();
        assert!(entities > 0);

        assert!(!s.start_game());
        assert_eq!(s.state().distance, distance);
        assert_eq!(s.state().combo.combo, 3);
        assert_eq!(
            s.state().obstacles.len() + s.state().collectibles.len(),
            entities
        );
    }

    #[test]
    fn test_snapshot_fields() {
        let mut s = session(Tuning::without_spawns());
        s.start_game();
        s.state_mut().energy.energy = 72.4;
        s.state_mut().distance = 12.9;
        s.tick(0.0);

        let snap = s.snapshot();
        assert_eq!(snap.energy, 72);
        assert_eq!(snap.deadline_proximity, 28);
        assert_eq!(snap.distance, 12);
        assert!(!snap.sprint_active);
        assert_eq!(snap.sprint_remaining_ms, 0.0);
    }

    #[test]
    fn test_game_over_event_emitted_once() {
        let mut s = session(Tuning::without_spawns());
        s.start_game();
        s.state_mut().energy.energy = 1.0;
        for _ in 0..100 {
            s.tick(100.0);
        }
        assert_eq!(s.phase(), GamePhase::GameOver);

        let events = s.drain_events();
        let summaries: Vec<_> = events
            .iter()
            .filter_map(|e| match e {
                GameEvent::GameOver(summary) => Some(*summary),
                _ => None,
            })
            .collect();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].distance, s.snapshot().distance);

        // Drained; nothing new while game over
        s.tick(100.0);
        assert!(s.drain_events().is_empty());
        assert!(!s.jump());
    }

    #[test]
    fn test_undrained_events_are_capped() {
        let mut s = session(Tuning::without_spawns());
        s.start_game();
        for air in 0..(MAX_PENDING_EVENTS as u32 * 2) {
            s.state_mut().events.push(GameEvent::Jumped { air: air % 2 == 0 });
        }
        s.state_mut().end_game();
        s.tick(16.0);

        let events = s.drain_events();
        assert_eq!(events.len(), MAX_PENDING_EVENTS);
        assert!(matches!(events.last(), Some(GameEvent::GameOver(_))));
    }

    #[test]
    fn test_start_after_game_over_needs_reset() {
        let mut s = session(Tuning::without_spawns());
        s.start_game();
        s.state_mut().end_game();
        assert!(!s.start_game());
        s.reset_game();
        assert!(s.start_game());
    }

    #[test]
    fn test_snapshot_serializes() {
        let s = session(Tuning::default());
        let json = serde_json::to_string(s.snapshot()).expect("snapshot serializes");
        assert!(json.contains("\"deadline_proximity\":0"));
    }
}
