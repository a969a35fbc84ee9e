//! Collision resolution
//!
//! Once per frame, after movement, every hazard and collectible is tested
//! against the player's box. A hazard is either colliding or being credited
//! as passed in a given frame, never both.

use super::energy;
use super::feedback::{self, COLLECT_LINES, HIT_LINES, SPECIAL_LINES};
use super::rng::RandomSource;
use super::state::{Collectible, CollectibleKind, GameEvent, GameState, Obstacle};
use crate::tuning::Tuning;

/// What happened to a hazard this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HazardOutcome {
    /// Hit the player (destroyed)
    Hit,
    /// Smashed during sprint (destroyed)
    Deflected,
    /// Scrolled past the player for the first time
    Passed,
    /// Nothing this frame
    None,
}

/// Classify one hazard against the player (pure)
pub fn classify_hazard(obstacle: &Obstacle, state: &GameState) -> HazardOutcome {
    if obstacle.bounds().intersects(&state.player.bounds()) {
        return if state.sprint.active {
            HazardOutcome::Deflected
        } else {
            HazardOutcome::Hit
        };
    }
    // Center-x comparison; the passed flag keeps it to one credit per hazard
    if obstacle.awards_pass() && !obstacle.passed && obstacle.pos.x < state.player.x() {
        return HazardOutcome::Passed;
    }
    HazardOutcome::None
}

/// Unshielded hit: damage, combo reset, shake
fn apply_hit<R: RandomSource>(state: &mut GameState, tuning: &Tuning, rng: &mut R, obstacle: &Obstacle) {
    state.combo.reset();
    state.tally.grinches += 1;
    state.screen_shake = 1.0;
    state.events.push(GameEvent::Hit {
        kind: obstacle.kind,
        damage: obstacle.damage,
    });
    state.feedback.post(feedback::pick_line(rng, &HIT_LINES), false);
    log::debug!("Hit by {} hazard ({} damage)", obstacle.kind.as_str(), obstacle.damage);

    if state.energy.spend(obstacle.damage, tuning.energy_max) {
        state.end_game();
    }
}

fn apply_collect<R: RandomSource>(state: &mut GameState, tuning: &Tuning, rng: &mut R, collectible: &Collectible) {
    let gain = collectible.kind.energy_gain(tuning);
    state.energy.add(gain, tuning.energy_max);
    state.tally.elves += 1;
    state.events.push(GameEvent::Collected {
        kind: collectible.kind,
        gain,
    });
    let lines: &[&'static str] = match collectible.kind {
        CollectibleKind::Regular => &COLLECT_LINES,
        CollectibleKind::Special => &SPECIAL_LINES,
    };
    state.feedback.post(feedback::pick_line(rng, lines), false);
}

/// Per-frame collision step
pub fn resolve<R: RandomSource>(state: &mut GameState, tuning: &Tuning, rng: &mut R) {
    if !state.is_running() {
        return;
    }

    let obstacles = std::mem::take(&mut state.obstacles);
    let mut kept = Vec::with_capacity(obstacles.len());
    for mut obstacle in obstacles {
        if !state.is_running() {
            kept.push(obstacle);
            continue;
        }
        match classify_hazard(&obstacle, state) {
            HazardOutcome::Hit => apply_hit(state, tuning, rng, &obstacle),
            HazardOutcome::Deflected => {
                state.events.push(GameEvent::Deflected {
                    kind: obstacle.kind,
                });
            }
            HazardOutcome::Passed => {
                obstacle.passed = true;
                energy::register_pass(state, tuning);
                kept.push(obstacle);
            }
            HazardOutcome::None => kept.push(obstacle),
        }
    }
    state.obstacles = kept;

    if !state.is_running() {
        return;
    }

    let player_box = state.player.bounds();
    let collectibles = std::mem::take(&mut state.collectibles);
    let mut kept = Vec::with_capacity(collectibles.len());
    for collectible in collectibles {
        if collectible.bounds().intersects(&player_box) {
            apply_collect(state, tuning, rng, &collectible);
        } else {
            kept.push(collectible);
        }
    }
    state.collectibles = kept;

    if state
        .deadline
        .has_caught(state.player.x(), tuning.deadline_catch_epsilon)
    {
        state.energy.energy = 0.0;
        state.events.push(GameEvent::DeadlineCaught);
        log::info!("Caught by the deadline");
        state.end_game();
    }
}
