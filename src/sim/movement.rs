//! Player physics and entity movement
//!
//! Scrolling entities move left at the current scroll speed. Projectiles
//! ignore the scroll and are re-evaluated from their closed-form flight plan
//! using the time since launch.

use super::energy;
use super::state::{GameEvent, GameState};
use crate::consts::*;
use crate::tuning::Tuning;

/// Apply a jump if one is available
///
/// Returns true if the jump happened. A jump that spends the last of the
/// energy ends the run.
pub fn jump(state: &mut GameState, tuning: &Tuning) -> bool {
    if !state.is_running() || state.player.jumps_remaining == 0 {
        return false;
    }

    let air = !state.player.grounded;
    let cost = energy::jump_cost(state, tuning);
    state.player.grounded = false;
    state.player.vy = JUMP_VELOCITY;
    state.player.jumps_remaining -= 1;
    state.events.push(GameEvent::Jumped { air });

    if state.energy.spend(cost, tuning.energy_max) {
        log::debug!("Jump spent the last energy");
        state.end_game();
    }
    true
}

/// Gravity and landing
pub fn update_player(state: &mut GameState, dt: f32) {
    let player = &mut state.player;
    if player.grounded {
        return;
    }
    player.vy -= PLAYER_GRAVITY * dt;
    player.y += player.vy * dt;
    if player.y <= 0.0 {
        player.land();
    }
}

/// Advance every live entity and cull what has left the screen
pub fn move_entities(state: &mut GameState, dt: f32) {
    let scroll = state.scroll_speed;
    let now_ms = state.elapsed_ms;

    for obstacle in state.obstacles.iter_mut() {
        match obstacle.flight {
            Some(flight) => {
                let t = ((now_ms - flight.launch_ms) / 1000.0) as f32;
                obstacle.pos = flight.trajectory.position_at(t);
                obstacle.speed = -flight.trajectory.vx;
            }
            None => {
                obstacle.speed = scroll;
                obstacle.pos.x -= scroll * dt;
            }
        }
    }

    for collectible in state.collectibles.iter_mut() {
        collectible.speed = scroll;
        collectible.pos.x -= scroll * dt;
    }

    state
        .obstacles
        .retain(|o| o.bounds().max().x >= -CULL_MARGIN && o.bounds().max().y >= -CULL_MARGIN);
    state
        .collectibles
        .retain(|c| c.bounds().max().x >= -CULL_MARGIN);
}
