//! Demo driver
//!
//! A simple heuristic that decides when to jump. Used by the headless host
//! to play unattended sessions; not part of the frame pipeline.

use super::state::{GameState, Obstacle, ObstacleKind};
use super::trajectory::Archetype;

/// Look-ahead window in seconds before a hazard reaches the player
const REACTION_TIME: f32 = 0.22;

/// Whether jumping now over `obstacle` is worthwhile
fn wants_jump_over(obstacle: &Obstacle, player_x: f32, player_top: f32) -> bool {
    let ahead = obstacle.bounds().min().x - player_x;
    if ahead < 0.0 || obstacle.speed <= 0.0 {
        return false;
    }
    if ahead / obstacle.speed > REACTION_TIME {
        return false;
    }
    match obstacle.kind {
        ObstacleKind::Ground => true,
        // Floating hazards above the head are safe to run under
        ObstacleKind::Floating => obstacle.bounds().min().y < player_top,
        ObstacleKind::Projectile => obstacle
            .flight
            .is_some_and(|f| f.archetype == Archetype::Low),
    }
}

/// True when the runner should jump this frame
pub fn should_jump(state: &GameState) -> bool {
    if !state.is_running() || !state.player.grounded {
        return false;
    }
    let player_x = state.player.bounds().max().x;
    let player_top = state.player.bounds().max().y;
    state
        .obstacles
        .iter()
        .any(|o| wants_jump_over(o, player_x, player_top))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::GamePhase;
    use crate::tuning::Tuning;
    use glam::Vec2;

    fn with_ground(x: f32) -> GameState {
        let tuning = Tuning::without_spawns();
        let mut state = GameState::new(&tuning);
        state.phase = GamePhase::Running;
        let id = state.next_entity_id();
        state.obstacles.push(Obstacle {
            id,
            kind: ObstacleKind::Ground,
            pos: Vec2::new(x, 25.0),
            size: Vec2::new(40.0, 50.0),
            speed: 300.0,
            damage: GROUND_DAMAGE,
            passed: false,
            flight: None,
        });
        state
    }

    #[test]
    fn test_jumps_when_hazard_is_close() {
        assert!(should_jump(&with_ground(PLAYER_X + 60.0)));
    }

    #[test]
    fn test_waits_when_hazard_is_far() {
        assert!(!should_jump(&with_ground(PLAYER_X + 400.0)));
    }

    #[test]
    fn test_ignores_hazards_behind() {
        assert!(!should_jump(&with_ground(PLAYER_X - 100.0)));
    }
}
