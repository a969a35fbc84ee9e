//! Entity spawning
//!
//! Each category runs its own countdown. When it expires one entity is
//! created just past the right edge and a fresh countdown is drawn from the
//! category's interval. Floating and projectile hazards stay locked until
//! the run has covered their unlock distance.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::difficulty::difficulty_ratio;
use super::rng::RandomSource;
use super::state::{Collectible, CollectibleKind, Flight, GameEvent, GameState, Obstacle, ObstacleKind};
use super::trajectory::{Archetype, plan_trajectory};
use crate::consts::*;
use crate::lerp;
use crate::tuning::{SpawnInterval, Tuning};

/// Independent spawn countdowns (ms)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnTimers {
    pub ground_ms: f32,
    pub floating_ms: f32,
    pub projectile_ms: f32,
    pub regular_ms: f32,
    pub special_ms: f32,
    pub floating_unlocked: bool,
    pub projectile_unlocked: bool,
}

impl SpawnTimers {
    /// First spawn of each category happens after its shortest interval
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            ground_ms: tuning.ground_interval.min_ms,
            floating_ms: tuning.floating_interval.min_ms,
            projectile_ms: tuning.projectile_interval.min_ms,
            regular_ms: tuning.regular_interval.min_ms,
            special_ms: tuning.special_interval.min_ms,
            floating_unlocked: false,
            projectile_unlocked: false,
        }
    }
}

/// Ground interval bounds at the current difficulty
pub fn ground_interval(speed: f32, tuning: &Tuning) -> SpawnInterval {
    let scale = lerp(1.0, tuning.ground_interval_min_scale, difficulty_ratio(speed, tuning));
    tuning.ground_interval.scaled(scale)
}

fn draw_countdown<R: RandomSource>(rng: &mut R, interval: SpawnInterval) -> f32 {
    rng.range(interval.min_ms, interval.max_ms)
}

/// Advance a countdown; true when it has expired
fn countdown(timer: &mut f32, dt_ms: f32) -> bool {
    *timer -= dt_ms;
    *timer <= 0.0
}

fn spawn_x() -> f32 {
    WORLD_WIDTH + SPAWN_MARGIN
}

/// Per-frame spawner step
pub fn update<R: RandomSource>(state: &mut GameState, tuning: &Tuning, rng: &mut R, dt_ms: f32) {
    if !state.spawner.floating_unlocked && state.distance >= tuning.floating_unlock_distance {
        state.spawner.floating_unlocked = true;
        state.events.push(GameEvent::CategoryUnlocked {
            kind: ObstacleKind::Floating,
        });
        log::info!("Floating hazards unlocked at {:.0}m", state.distance);
    }
    if !state.spawner.projectile_unlocked && state.distance >= tuning.projectile_unlock_distance {
        state.spawner.projectile_unlocked = true;
        state.events.push(GameEvent::CategoryUnlocked {
            kind: ObstacleKind::Projectile,
        });
        log::info!("Projectiles unlocked at {:.0}m", state.distance);
    }

    if countdown(&mut state.spawner.ground_ms, dt_ms) {
        spawn_ground(state, tuning, rng);
        let interval = ground_interval(state.speed, tuning);
        state.spawner.ground_ms = draw_countdown(rng, interval);
    }

    if state.spawner.floating_unlocked && countdown(&mut state.spawner.floating_ms, dt_ms) {
        spawn_floating(state, tuning, rng);
        state.spawner.floating_ms = draw_countdown(rng, tuning.floating_interval);
    }

    if state.spawner.projectile_unlocked && countdown(&mut state.spawner.projectile_ms, dt_ms) {
        spawn_projectile(state, tuning, rng);
        state.spawner.projectile_ms = draw_countdown(rng, tuning.projectile_interval);
    }

    if countdown(&mut state.spawner.regular_ms, dt_ms) {
        spawn_collectible(state, rng, CollectibleKind::Regular);
        state.spawner.regular_ms = draw_countdown(rng, tuning.regular_interval);
    }

    if countdown(&mut state.spawner.special_ms, dt_ms) {
        spawn_collectible(state, rng, CollectibleKind::Special);
        state.spawner.special_ms = draw_countdown(rng, tuning.special_interval);
    }
}

/// Hazard sitting on the ground
pub fn spawn_ground<R: RandomSource>(state: &mut GameState, tuning: &Tuning, rng: &mut R) {
    let (w, h) = *rng.pick(&GROUND_SIZES);
    let id = state.next_entity_id();
    state.obstacles.push(Obstacle {
        id,
        kind: ObstacleKind::Ground,
        pos: Vec2::new(spawn_x(), h / 2.0),
        size: Vec2::new(w, h),
        speed: state.scroll_speed,
        damage: ObstacleKind::Ground.damage(tuning),
        passed: false,
        flight: None,
    });
}

/// Hazard hovering at one of the fixed lanes
pub fn spawn_floating<R: RandomSource>(state: &mut GameState, tuning: &Tuning, rng: &mut R) {
    let y = *rng.pick(&FLOATING_HEIGHTS);
    let (w, h) = FLOATING_SIZE;
    let id = state.next_entity_id();
    state.obstacles.push(Obstacle {
        id,
        kind: ObstacleKind::Floating,
        pos: Vec2::new(spawn_x(), y),
        size: Vec2::new(w, h),
        speed: state.scroll_speed,
        damage: ObstacleKind::Floating.damage(tuning),
        passed: false,
        flight: None,
    });
}

/// Projectile aimed at the player, trajectory fixed at launch
pub fn spawn_projectile<R: RandomSource>(state: &mut GameState, tuning: &Tuning, rng: &mut R) {
    let archetype = if rng.chance(0.5) {
        Archetype::Low
    } else {
        Archetype::High
    };
    let start_y = *rng.pick(&PROJECTILE_LAUNCH_HEIGHTS);
    let trajectory = plan_trajectory(
        archetype,
        spawn_x(),
        start_y,
        state.player.x(),
        state.player.size.y,
        tuning.projectile_speed,
        tuning.projectile_gravity,
    );
    log::debug!("Projectile {:?} launched, vy {:.1}", archetype, trajectory.vy);

    let id = state.next_entity_id();
    state.obstacles.push(Obstacle {
        id,
        kind: ObstacleKind::Projectile,
        pos: Vec2::new(trajectory.start_x, trajectory.start_y),
        size: Vec2::splat(PROJECTILE_SIZE),
        speed: -trajectory.vx,
        damage: ObstacleKind::Projectile.damage(tuning),
        passed: false,
        flight: Some(Flight {
            launch_ms: state.elapsed_ms,
            archetype,
            trajectory,
        }),
    });
}

/// Energy pickup of the given tier
pub fn spawn_collectible<R: RandomSource>(state: &mut GameState, rng: &mut R, kind: CollectibleKind) {
    let y = *rng.pick(&COLLECTIBLE_HEIGHTS);
    let size = match kind {
        CollectibleKind::Regular => REGULAR_SIZE,
        CollectibleKind::Special => SPECIAL_SIZE,
    };
    let id = state.next_entity_id();
    state.collectibles.push(Collectible {
        id,
        kind,
        pos: Vec2::new(spawn_x(), y),
        size: Vec2::splat(size),
        speed: state.scroll_speed,
    });
}
