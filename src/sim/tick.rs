//! Fixed timestep simulation tick
//!
//! One call advances a running game by one 50 ms step: obstacles fall, hits
//! cost lives, dodged obstacles score, and new obstacles may spawn.

use super::collision::obstacle_hits_player;
use super::spawn::maybe_spawn;
use super::state::{GameEvent, GamePhase, GameState};
use crate::settings::Settings;

/// Advance the game state by one tick. Does nothing outside `Running`.
///
/// Collisions are resolved before scoring. On the tick that takes the last
/// life the run ends right there: other obstacles crossing the scoring line
/// on that tick are not scored and nothing spawns.
pub fn tick(state: &mut GameState, settings: &Settings) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if state.phase != GamePhase::Running {
        log::debug!("Ignoring tick in {:?}", state.phase);
        return events;
    }

    state.time_ticks += 1;

    // Fall and drift
    let max_x = settings.obstacle_max_x();
    for obstacle in &mut state.obstacles {
        obstacle.advance(max_x);
    }

    // Collisions cost a life and consume the obstacle
    let player_box = state.player.hitbox(settings);
    let lives = &mut state.lives;
    state.obstacles.retain_mut(|obstacle| {
        if *lives == 0 || obstacle.hit {
            return true;
        }
        if !obstacle_hits_player(&player_box, &obstacle.hitbox(settings.obstacle_size)) {
            return true;
        }
        obstacle.hit = true;
        *lives = lives.saturating_sub(1);
        events.push(GameEvent::Hit {
            id: obstacle.id,
            lives_left: *lives,
        });
        false
    });

    if state.lives == 0 {
        state.phase = GamePhase::GameOver;
        log::info!(
            "Game over: score {} after {} ticks",
            state.score,
            state.time_ticks
        );
        events.push(GameEvent::GameOver { score: state.score });
        return events;
    }

    // Obstacles past the scoring line were dodged
    let scoring_line = settings.scoring_line();
    for i in 0..state.obstacles.len() {
        let obstacle = &mut state.obstacles[i];
        if obstacle.scored || obstacle.hit || obstacle.pos.y <= scoring_line {
            continue;
        }
        obstacle.scored = true;
        state.score += 1;
        events.push(GameEvent::Scored { score: state.score });
        escalate(state, settings, &mut events);
    }

    if state.record_high_score() {
        events.push(GameEvent::NewBest {
            score: state.high_score,
        });
    }

    // Off the bottom of the track
    state.obstacles.retain(|o| o.pos.y < settings.height);

    if let Some((id, kind)) = maybe_spawn(state, settings) {
        events.push(GameEvent::Spawned { id, kind });
    }

    events
}

/// Difficulty escalation, checked against the freshly incremented score
fn escalate(state: &mut GameState, settings: &Settings, events: &mut Vec<GameEvent>) {
    if state.score % settings.boost_every == 0 {
        state.speed_boost += settings.boost_amount;
        log::debug!("Speed boost now {:.2}", state.speed_boost);
        events.push(GameEvent::SpeedBoost {
            boost: state.speed_boost,
        });
    }

    if state.score % settings.accelerate_every == 0 {
        for obstacle in &mut state.obstacles {
            obstacle.speed += settings.accelerate_amount;
        }
        log::debug!("Accelerated {} live obstacles", state.obstacles.len());
        events.push(GameEvent::Accelerated);
    }
}
