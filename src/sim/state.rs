//! Game state and core simulation types
//!
//! Everything a run mutates lives in `GameState`; the simulation steps take it
//! by `&mut` and never touch anything else.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::settings::Settings;

/// Countdown steps shown before a run starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CountdownStep {
    Three,
    Two,
    One,
    Go,
}

impl CountdownStep {
    /// Step shown after this one (None once "GO!" has been shown)
    pub fn next(self) -> Option<Self> {
        match self {
            CountdownStep::Three => Some(CountdownStep::Two),
            CountdownStep::Two => Some(CountdownStep::One),
            CountdownStep::One => Some(CountdownStep::Go),
            CountdownStep::Go => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CountdownStep::Three => "3",
            CountdownStep::Two => "2",
            CountdownStep::One => "1",
            CountdownStep::Go => "GO!",
        }
    }
}

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// How-to-play screen, waiting for start
    Intro,
    /// Pre-run countdown
    Countdown(CountdownStep),
    /// Active gameplay
    Running,
    /// Run ended, waiting for restart
    GameOver,
}

impl GamePhase {
    pub fn is_countdown(self) -> bool {
        matches!(self, GamePhase::Countdown(_))
    }
}

/// Obstacle classification, fixed at spawn time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObstacleKind {
    #[default]
    Straight,
    Moving,
    Fast,
}

impl ObstacleKind {
    /// Classify from spawn-time motion. Fast wins over moving.
    pub fn classify(dx: f32, speed: f32, fast_speed: f32) -> Self {
        if speed >= fast_speed {
            ObstacleKind::Fast
        } else if dx != 0.0 {
            ObstacleKind::Moving
        } else {
            ObstacleKind::Straight
        }
    }
}

/// A falling obstacle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    /// Horizontal drift per tick (0 for straight fallers)
    pub dx: f32,
    /// Fall distance per tick
    pub speed: f32,
    pub kind: ObstacleKind,
    /// Already counted toward the score
    pub scored: bool,
    /// Already consumed a life
    pub hit: bool,
}

impl Obstacle {
    pub fn new(id: u32, pos: Vec2, dx: f32, speed: f32, kind: ObstacleKind) -> Self {
        Self {
            id,
            pos,
            dx,
            speed,
            kind,
            scored: false,
            hit: false,
        }
    }

    /// Advance one tick: fall, then drift with a single-step wall bounce
    pub fn advance(&mut self, max_x: f32) {
        self.pos.y += self.speed;
        if self.dx != 0.0 {
            let mut x = self.pos.x + self.dx;
            if x < 0.0 || x > max_x {
                self.dx = -self.dx;
                x = self.pos.x + self.dx;
            }
            self.pos.x = x;
        }
    }

    pub fn hitbox(&self, size: f32) -> Aabb {
        Aabb::new(self.pos, Vec2::splat(size))
    }
}

/// The player's block on the baseline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Left edge, always within [0, width - size]
    pub x: f32,
}

impl Player {
    pub fn centered(settings: &Settings) -> Self {
        Self {
            x: settings.player_start_x(),
        }
    }

    pub fn move_left(&mut self, step: f32) {
        self.x = (self.x - step).max(0.0);
    }

    pub fn move_right(&mut self, step: f32, max_x: f32) {
        self.x = (self.x + step).min(max_x);
    }

    /// Hitbox: fixed band at the bottom of the track
    pub fn hitbox(&self, settings: &Settings) -> Aabb {
        Aabb::new(
            Vec2::new(self.x, settings.scoring_line()),
            Vec2::splat(settings.player_size),
        )
    }
}

/// Things that happened during a tick or transition, for audio/UI/persistence
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Spawned { id: u32, kind: ObstacleKind },
    Hit { id: u32, lives_left: u8 },
    Scored { score: u64 },
    /// Newly spawned obstacles fall faster from now on
    SpeedBoost { boost: f32 },
    /// Every live obstacle sped up
    Accelerated,
    NewBest { score: u64 },
    GameOver { score: u64 },
}

/// Complete run state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub player: Player,
    /// Live obstacles, in spawn order
    pub obstacles: Vec<Obstacle>,
    pub score: u64,
    pub lives: u8,
    /// Added to the base speed of every new obstacle
    pub speed_boost: f32,
    /// Best score across runs
    pub high_score: u64,
    /// Simulation ticks processed this run
    pub time_ticks: u64,
    next_id: u32,
}

impl GameState {
    /// Create a fresh game on the intro screen
    pub fn new(seed: u64, settings: &Settings, high_score: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Intro,
            player: Player::centered(settings),
            obstacles: Vec::new(),
            score: 0,
            lives: settings.starting_lives,
            speed_boost: 0.0,
            high_score,
            time_ticks: 0,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    /// Reset everything a run owns. The best score and RNG carry over.
    pub fn reset_run(&mut self, settings: &Settings) {
        self.player = Player::centered(settings);
        self.obstacles.clear();
        self.score = 0;
        self.lives = settings.starting_lives;
        self.speed_boost = 0.0;
        self.time_ticks = 0;
    }

    /// Raise the best score if the current run beat it
    pub fn record_high_score(&mut self) -> bool {
        if self.score > self.high_score {
            self.high_score = self.score;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_countdown_sequence() {
        let mut step = CountdownStep::Three;
        let mut labels = vec![step.label()];
        while let Some(next) = step.next() {
            step = next;
            labels.push(step.label());
        }
        assert_eq!(labels, ["3", "2", "1", "GO!"]);
    }

    #[test]
    fn test_classify() {
        assert_eq!(ObstacleKind::classify(0.0, 3.0, 6.0), ObstacleKind::Straight);
        assert_eq!(ObstacleKind::classify(2.0, 5.0, 6.0), ObstacleKind::Moving);
        assert_eq!(ObstacleKind::classify(-2.0, 6.0, 6.0), ObstacleKind::Fast);
        assert_eq!(ObstacleKind::classify(0.0, 7.0, 6.0), ObstacleKind::Fast);
    }

    #[test]
    fn test_straight_fall() {
        let mut obstacle = Obstacle::new(1, Vec2::new(100.0, 80.0), 0.0, 5.0, ObstacleKind::Straight);
        obstacle.advance(350.0);
        assert_eq!(obstacle.pos, Vec2::new(100.0, 85.0));
    }

    #[test]
    fn test_bounce_off_right_wall() {
        let mut obstacle = Obstacle::new(1, Vec2::new(349.0, 80.0), 2.0, 3.0, ObstacleKind::Moving);
        obstacle.advance(350.0);
        assert_eq!(obstacle.dx, -2.0);
        assert_eq!(obstacle.pos.x, 347.0);
    }

    #[test]
    fn test_bounce_off_left_wall() {
        let mut obstacle = Obstacle::new(1, Vec2::new(1.0, 80.0), -2.0, 3.0, ObstacleKind::Moving);
        obstacle.advance(350.0);
        assert_eq!(obstacle.dx, 2.0);
        assert_eq!(obstacle.pos.x, 3.0);
    }

    #[test]
    fn test_player_clamps() {
        let settings = Settings::default();
        let mut player = Player::centered(&settings);
        assert_eq!(player.x, 170.0);

        for _ in 0..20 {
            player.move_left(settings.player_step);
        }
        assert_eq!(player.x, 0.0);

        for _ in 0..20 {
            player.move_right(settings.player_step, settings.player_max_x());
        }
        assert_eq!(player.x, 340.0);
    }

    #[test]
    fn test_reset_run_keeps_high_score() {
        let settings = Settings::default();
        let mut state = GameState::new(7, &settings, 12);
        state.score = 30;
        state.lives = 0;
        state.speed_boost = 0.6;
        state.player.x = 0.0;
        state.record_high_score();
        state.reset_run(&settings);

        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 3);
        assert_eq!(state.speed_boost, 0.0);
        assert_eq!(state.player.x, 170.0);
        assert_eq!(state.high_score, 30);
    }
}
