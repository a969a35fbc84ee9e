//! Frame pipeline
//!
//! One host frame advances the simulation by `delta_ms` in a fixed order:
//! speed -> spawn -> move -> collide -> energy -> deadline -> feedback.
//! Later steps depend on state mutated by earlier ones (collision must see
//! post-move positions).

use super::rng::RandomSource;
use super::state::GameState;
use super::{collision, deadline, difficulty, energy, movement, spawner};
use crate::consts::SHAKE_DECAY;
use crate::tuning::Tuning;

/// Longest frame the simulation will take in one step (ms)
pub const MAX_FRAME_MS: f32 = 250.0;

/// Advance the game state by one frame
pub fn tick<R: RandomSource>(state: &mut GameState, tuning: &Tuning, rng: &mut R, delta_ms: f32) {
    if !state.is_running() {
        return;
    }

    let delta_ms = if delta_ms.is_finite() {
        delta_ms.clamp(0.0, MAX_FRAME_MS)
    } else {
        0.0
    };
    let dt = delta_ms / 1000.0;
    state.elapsed_ms += delta_ms as f64;

    // Decay screen shake
    state.screen_shake *= SHAKE_DECAY;
    if state.screen_shake < 0.01 {
        state.screen_shake = 0.0;
    }

    difficulty::update(state, tuning, dt);
    spawner::update(state, tuning, rng, delta_ms);
    movement::update_player(state, dt);
    movement::move_entities(state, dt);
    collision::resolve(state, tuning, rng);
    energy::update(state, tuning, delta_ms);
    deadline::update(state, tuning, dt);
    state.feedback.update(delta_ms);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::rng::{ScriptedRandom, seeded_rng};
    use crate::sim::state::{GameEvent, GamePhase, Obstacle, ObstacleKind};
    use glam::Vec2;
    use proptest::prelude::*;

    fn running(tuning: &Tuning) -> GameState {
        let mut state = GameState::new(tuning);
        state.phase = GamePhase::Running;
        state
    }

    /// Ground hazard already behind the player, not yet credited
    fn cleared_hazard(state: &mut GameState) {
        let id = state.next_entity_id();
        state.obstacles.push(Obstacle {
            id,
            kind: ObstacleKind::Ground,
            pos: Vec2::new(PLAYER_X - 70.0, 25.0),
            size: Vec2::new(40.0, 50.0),
            speed: 0.0,
            damage: GROUND_DAMAGE,
            passed: false,
            flight: None,
        });
    }

    #[test]
    fn test_tick_ignored_unless_running() {
        let tuning = Tuning::default();
        let mut state = GameState::new(&tuning);
        let mut rng = ScriptedRandom::constant(0.5);
        tick(&mut state, &tuning, &mut rng, 16.0);
        assert_eq!(state.elapsed_ms, 0.0);
        assert_eq!(state.distance, 0.0);
    }

    #[test]
    fn test_drain_to_zero_scenario() {
        let tuning = Tuning {
            energy_drain_amount: 1.0,
            energy_drain_interval_ms: 500.0,
            ..Tuning::without_spawns()
        };
        let mut state = running(&tuning);
        let mut rng = ScriptedRandom::constant(0.5);
        state.energy.energy = 3.0;

        for _ in 0..10 {
            tick(&mut state, &tuning, &mut rng, 100.0);
        }
        assert_eq!(state.energy.energy, 1.0);
        assert_eq!(state.phase, GamePhase::Running);

        for _ in 0..5 {
            tick(&mut state, &tuning, &mut rng, 100.0);
        }
        assert_eq!(state.energy.energy, 0.0);
        assert_eq!(state.phase, GamePhase::GameOver);

        let game_overs = state
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::GameOver(_)))
            .count();
        assert_eq!(game_overs, 1);

        // Frame updates stop after game over
        let distance = state.distance;
        tick(&mut state, &tuning, &mut rng, 100.0);
        assert_eq!(state.distance, distance);
    }

    #[test]
    fn test_sprint_lifecycle_scenario() {
        let tuning = Tuning {
            sprint_combo_threshold: 10,
            ..Tuning::without_spawns()
        };
        let mut state = running(&tuning);
        let mut rng = ScriptedRandom::constant(0.5);
        state.energy.energy = 40.0;

        for i in 0..10 {
            cleared_hazard(&mut state);
            tick(&mut state, &tuning, &mut rng, 16.0);
            assert_eq!(state.combo.combo, i + 1);
        }
        assert!(state.sprint.active);
        assert_eq!(state.energy.energy, tuning.energy_max);

        // Ride out the sprint with no further input
        let frame = 16.0;
        let mut elapsed = 0.0;
        while elapsed < tuning.sprint_duration_ms {
            tick(&mut state, &tuning, &mut rng, frame);
            elapsed += frame;
        }
        assert!(!state.sprint.active);
        assert!(state.events.contains(&GameEvent::SprintEnded));
        assert_eq!(energy::jump_cost(&state, &tuning), tuning.jump_energy_cost);

        let before = state.energy.energy;
        assert!(movement::jump(&mut state, &tuning));
        assert_eq!(state.energy.energy, before - tuning.jump_energy_cost);
    }

    #[test]
    fn test_sprint_lasts_full_duration_after_activation() {
        let tuning = Tuning {
            sprint_combo_threshold: 1,
            ..Tuning::without_spawns()
        };
        let mut state = running(&tuning);
        let mut rng = ScriptedRandom::constant(0.5);
        let frame = 16.0;

        cleared_hazard(&mut state);
        tick(&mut state, &tuning, &mut rng, frame);
        assert!(state.sprint.active);
        assert_eq!(state.sprint.timer_ms, tuning.sprint_duration_ms);

        let later = ((tuning.sprint_duration_ms - frame) / frame).floor() as u32;
        for _ in 0..later {
            tick(&mut state, &tuning, &mut rng, frame);
        }
        assert!(state.sprint.active);
        assert!(!state.events.contains(&GameEvent::SprintEnded));

        tick(&mut state, &tuning, &mut rng, frame);
        tick(&mut state, &tuning, &mut rng, frame);
        assert!(!state.sprint.active);
        assert!(state.events.contains(&GameEvent::SprintEnded));
    }

    #[test]
    fn test_deadline_catches_runner_on_last_energy() {
        let tuning = Tuning {
            energy_drain_interval_ms: 0.0,
            ..Tuning::without_spawns()
        };
        let mut state = running(&tuning);
        let mut rng = ScriptedRandom::constant(0.5);
        state.energy.energy = 1.0;

        let mut frames = 0;
        while state.is_running() && frames < 1000 {
            assert_eq!(state.energy.energy, 1.0);
            tick(&mut state, &tuning, &mut rng, 16.0);
            frames += 1;
        }
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.energy.energy, 0.0);
        assert!(state.events.contains(&GameEvent::DeadlineCaught));
    }

    #[test]
    fn test_deadline_holds_off_with_energy_to_spare() {
        let tuning = Tuning {
            energy_drain_interval_ms: 0.0,
            ..Tuning::without_spawns()
        };
        let mut state = running(&tuning);
        let mut rng = ScriptedRandom::constant(0.5);
        state.energy.energy = 2.0;

        for _ in 0..1000 {
            tick(&mut state, &tuning, &mut rng, 16.0);
        }
        assert_eq!(state.phase, GamePhase::Running);
        assert!(state.deadline.gap(PLAYER_X) > tuning.deadline_catch_epsilon);
    }

    #[test]
    fn test_obstacle_pass_credited_once() {
        let tuning = Tuning::without_spawns();
        let mut state = running(&tuning);
        let mut rng = ScriptedRandom::constant(0.5);
        cleared_hazard(&mut state);

        for _ in 0..20 {
            tick(&mut state, &tuning, &mut rng, 16.0);
        }
        assert_eq!(state.combo.combo, 1);
        let passes = state
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::ObstaclePassed { .. }))
            .count();
        assert_eq!(passes, 1);
    }

    #[test]
    fn test_hazard_scrolls_into_player() {
        let tuning = Tuning::without_spawns();
        let mut state = running(&tuning);
        let mut rng = ScriptedRandom::constant(0.5);
        let id = state.next_entity_id();
        state.obstacles.push(Obstacle {
            id,
            kind: ObstacleKind::Ground,
            pos: Vec2::new(PLAYER_X + 100.0, 25.0),
            size: Vec2::new(40.0, 50.0),
            speed: 0.0,
            damage: GROUND_DAMAGE,
            passed: false,
            flight: None,
        });

        for _ in 0..30 {
            tick(&mut state, &tuning, &mut rng, 16.0);
        }
        assert_eq!(state.tally.grinches, 1);
        assert_eq!(state.combo.combo, 0);
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn test_low_projectile_hits_grounded_player() {
        let tuning = Tuning {
            projectile_interval: crate::tuning::SpawnInterval::new((16.0, 16.0)),
            ..Tuning::without_spawns()
        };
        let mut state = running(&tuning);
        state.distance = tuning.projectile_unlock_distance;
        // 0.0 -> Low archetype
        let mut rng = ScriptedRandom::constant(0.0);
        tick(&mut state, &tuning, &mut rng, 16.0);
        assert_eq!(state.obstacles.len(), 1);
        // Stop further launches
        state.spawner.projectile_ms = f32::MAX;

        for _ in 0..200 {
            tick(&mut state, &tuning, &mut rng, 16.0);
        }
        assert_eq!(state.tally.grinches, 1);
    }

    #[test]
    fn test_deadline_closes_in_as_energy_drops() {
        let tuning = Tuning::without_spawns();
        let mut state = running(&tuning);
        let mut rng = ScriptedRandom::constant(0.5);
        let start_gap = state.deadline.gap(PLAYER_X);
        state.energy.energy = 30.0;

        let mut last_gap = start_gap;
        for _ in 0..60 {
            tick(&mut state, &tuning, &mut rng, 16.0);
            let gap = state.deadline.gap(PLAYER_X);
            assert!(gap < last_gap);
            last_gap = gap;
        }
    }

    proptest! {
        #[test]
        fn prop_invariants_hold_every_tick(
            seed in any::<u64>(),
            jumps in proptest::collection::vec(any::<bool>(), 1..400),
        ) {
            let tuning = Tuning::default();
            let mut state = running(&tuning);
            let mut rng = seeded_rng(seed);

            for jump in jumps {
                if jump {
                    movement::jump(&mut state, &tuning);
                }
                tick(&mut state, &tuning, &mut rng, 1000.0 / 60.0);
                prop_assert!(state.energy.energy >= 0.0);
                prop_assert!(state.energy.energy <= tuning.energy_max);
                prop_assert!(state.combo.max_combo >= state.combo.combo);
                prop_assert!(state.deadline.gap(PLAYER_X) >= 0.0);
            }
        }
    }
}
