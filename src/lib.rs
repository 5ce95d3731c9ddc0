//! Fall Dodge - a single-screen arcade avoidance game
//!
//! Core modules:
//! - `sim`: Simulation (spawning, falling, collisions, scoring, game phases)
//! - `driver`: Timer ownership that feeds the simulation at a fixed cadence
//! - `platform`: Browser/native platform hints and bindings
//! - `highscores`: Best-score persistence
//! - `settings`: Data-driven game tuning

pub mod driver;
pub mod highscores;
pub mod platform;
pub mod settings;
pub mod sim;

pub use driver::Driver;
pub use highscores::{BestScoreStore, MemoryStore};
#[cfg(not(target_arch = "wasm32"))]
pub use highscores::FileStore;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Track dimensions (pixels)
    pub const GAME_WIDTH: f32 = 400.0;
    pub const GAME_HEIGHT: f32 = 600.0;
    /// Obstacles appear at this distance from the top
    pub const TOP_LINE_HEIGHT: f32 = 80.0;
    /// Gap between the player band and the bottom of the track
    pub const BOTTOM_MARGIN: f32 = 10.0;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 60.0;
    /// Horizontal distance covered by one move intent
    pub const PLAYER_STEP: f32 = 30.0;
    pub const STARTING_LIVES: u8 = 3;

    /// Obstacle defaults
    pub const OBSTACLE_SIZE: f32 = 50.0;
    /// Chance of a spawn on any given tick (~0.5 per second at 20 Hz)
    pub const SPAWN_CHANCE: f64 = 0.025;
    /// Chance that a spawned obstacle drifts sideways
    pub const OSCILLATE_CHANCE: f64 = 0.5;
    /// Horizontal drift per tick for oscillating obstacles
    pub const OSCILLATE_SPEED: f32 = 2.0;
    /// Base fall speed is MIN + uniform integer in [0, SPREAD]
    pub const BASE_SPEED_MIN: u32 = 3;
    pub const BASE_SPEED_SPREAD: u32 = 4;
    /// Obstacles at or above this speed are classified as fast
    pub const FAST_SPEED: f32 = 6.0;

    /// Escalation: spawn speed boost every N points
    pub const BOOST_EVERY: u64 = 10;
    pub const BOOST_AMOUNT: f32 = 0.2;
    /// Escalation: live obstacles accelerate every N points
    pub const ACCELERATE_EVERY: u64 = 20;
    pub const ACCELERATE_AMOUNT: f32 = 0.05;

    /// Simulation tick period (20 Hz)
    pub const TICK_MS: u32 = 50;
    /// Countdown step period
    pub const COUNTDOWN_MS: u32 = 1000;
    /// Maximum simulation ticks fired per driver advance
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Viewports at or below this width get the compact layout
    pub const COMPACT_LAYOUT_MAX_WIDTH: u32 = 768;
}
