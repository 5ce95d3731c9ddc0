//! Random obstacle spawner

use glam::Vec2;
use rand::Rng;

use super::state::{GameState, Obstacle, ObstacleKind};
use crate::settings::Settings;

/// Build a new obstacle at the top line with random position, drift and speed
pub fn new_obstacle<R: Rng>(
    rng: &mut R,
    id: u32,
    speed_boost: f32,
    settings: &Settings,
) -> Obstacle {
    let x = rng.random_range(0..=settings.obstacle_max_x() as u32) as f32;

    let oscillates = rng.random::<f64>() < settings.oscillate_chance;
    let dx = if oscillates {
        if rng.random::<bool>() {
            settings.oscillate_speed
        } else {
            -settings.oscillate_speed
        }
    } else {
        0.0
    };

    let base_speed = settings.base_speed_min + rng.random_range(0..=settings.base_speed_spread);
    let speed = base_speed as f32 + speed_boost;
    let kind = ObstacleKind::classify(dx, speed, settings.fast_speed);

    Obstacle::new(id, Vec2::new(x, settings.top_line), dx, speed, kind)
}

/// Roll the per-tick spawn chance and add an obstacle if it comes up.
/// Returns the new obstacle's ID and kind.
pub fn maybe_spawn(state: &mut GameState, settings: &Settings) -> Option<(u32, ObstacleKind)> {
    if state.rng.random::<f64>() >= settings.spawn_chance {
        return None;
    }

    let id = state.next_entity_id();
    let obstacle = new_obstacle(&mut state.rng, id, state.speed_boost, settings);
    let kind = obstacle.kind;
    log::debug!(
        "Spawned {:?} obstacle {} at x={} (dx={}, speed={})",
        kind,
        id,
        obstacle.pos.x,
        obstacle.dx,
        obstacle.speed
    );
    state.obstacles.push(obstacle);
    Some((id, kind))
}
