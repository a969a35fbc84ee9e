//! Scroll speed model
//!
//! Speed accelerates with time up to a cap, and a stepwise distance floor
//! keeps raising the minimum so a careful player cannot coast forever.

use super::state::GameState;
use crate::consts::PIXELS_PER_METER;
use crate::tuning::Tuning;

/// Minimum speed guaranteed at `distance` meters
pub fn distance_floor(distance: f32, tuning: &Tuning) -> f32 {
    if tuning.distance_bonus_interval <= 0.0 {
        return tuning.speed_initial;
    }
    let steps = (distance.max(0.0) / tuning.distance_bonus_interval).floor();
    let bonus = (steps * tuning.distance_bonus_step).min(tuning.distance_bonus_cap);
    tuning.speed_initial + bonus
}

/// Next base speed (before sprint/device multipliers)
///
/// `dt` is in seconds.
pub fn compute_speed(dt: f32, distance: f32, previous_speed: f32, tuning: &Tuning) -> f32 {
    let accelerated = (previous_speed + dt * tuning.speed_acceleration).min(tuning.speed_max);
    accelerated
        .max(distance_floor(distance, tuning))
        .min(tuning.speed_max)
}

/// How far along the speed ramp we are, in `[0, 1]`
pub fn difficulty_ratio(speed: f32, tuning: &Tuning) -> f32 {
    let span = tuning.speed_max - tuning.speed_initial;
    if span <= 0.0 {
        return 1.0;
    }
    ((speed - tuning.speed_initial) / span).clamp(0.0, 1.0)
}

/// Per-frame speed and distance update
pub fn update(state: &mut GameState, tuning: &Tuning, dt: f32) {
    state.speed = compute_speed(dt, state.distance, state.speed, tuning);

    let sprint = state.sprint.active;
    let sprint_speed = if sprint { tuning.sprint_speed_multiplier } else { 1.0 };
    let sprint_distance = if sprint { tuning.sprint_distance_multiplier } else { 1.0 };

    state.scroll_speed = state.speed * sprint_speed * tuning.device.speed_multiplier();
    state.distance += state.scroll_speed * dt / PIXELS_PER_METER * sprint_distance;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_accelerates_and_caps() {
        let tuning = Tuning::default();
        let speed = compute_speed(1.0, 0.0, tuning.speed_initial, &tuning);
        assert_eq!(speed, tuning.speed_initial + tuning.speed_acceleration);

        let capped = compute_speed(1000.0, 0.0, tuning.speed_initial, &tuning);
        assert_eq!(capped, tuning.speed_max);
    }

    #[test]
    fn test_distance_floor_steps() {
        let tuning = Tuning::default();
        assert_eq!(distance_floor(0.0, &tuning), tuning.speed_initial);
        assert_eq!(distance_floor(249.0, &tuning), tuning.speed_initial);
        assert_eq!(
            distance_floor(250.0, &tuning),
            tuning.speed_initial + tuning.distance_bonus_step
        );
        // Bonus is capped
        assert_eq!(
            distance_floor(1_000_000.0, &tuning),
            tuning.speed_initial + tuning.distance_bonus_cap
        );
    }

    #[test]
    fn test_floor_overrides_slow_speed() {
        let tuning = Tuning::default();
        let speed = compute_speed(0.0, 500.0, tuning.speed_initial, &tuning);
        assert_eq!(speed, tuning.speed_initial + 2.0 * tuning.distance_bonus_step);
    }

    #[test]
    fn test_speed_never_decreases() {
        let tuning = Tuning::default();
        let mut speed = tuning.speed_initial;
        let mut distance = 0.0;
        for _ in 0..10_000 {
            let next = compute_speed(1.0 / 60.0, distance, speed, &tuning);
            assert!(next >= speed);
            assert!(next <= tuning.speed_max);
            speed = next;
            distance += 2.0;
        }
    }

    #[test]
    fn test_difficulty_ratio() {
        let tuning = Tuning::default();
        assert_eq!(difficulty_ratio(tuning.speed_initial, &tuning), 0.0);
        assert_eq!(difficulty_ratio(tuning.speed_max, &tuning), 1.0);
        assert_eq!(difficulty_ratio(0.0, &tuning), 0.0);
    }

    #[test]
    fn test_sprint_multiplies_speed_and_distance() {
        let tuning = Tuning::default();
        let mut normal = GameState::new(&tuning);
        let mut sprinting = GameState::new(&tuning);
        sprinting.sprint.activate(1000.0);

        update(&mut normal, &tuning, 0.1);
        update(&mut sprinting, &tuning, 0.1);

        let speed_ratio = sprinting.scroll_speed / normal.scroll_speed;
        assert!((speed_ratio - tuning.sprint_speed_multiplier).abs() < 1e-4);
        let distance_ratio = sprinting.distance / normal.distance;
        let expected = tuning.sprint_speed_multiplier * tuning.sprint_distance_multiplier;
        assert!((distance_ratio - expected).abs() < 1e-3);
    }
}
