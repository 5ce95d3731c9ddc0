//! Game tuning
//!
//! Every number the simulation reads comes from here, so balance can be
//! adjusted without touching code. Persisted separately from the best score.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Game settings (arena geometry, spawn rates, escalation, timers)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Track ===
    pub width: f32,
    pub height: f32,
    /// Spawn height for new obstacles
    pub top_line: f32,
    /// Gap between the player band and the track bottom
    pub bottom_margin: f32,

    // === Player ===
    pub player_size: f32,
    pub player_step: f32,
    pub starting_lives: u8,

    // === Obstacles ===
    pub obstacle_size: f32,
    /// Per-tick spawn probability (0.0 - 1.0)
    pub spawn_chance: f64,
    /// Probability a new obstacle oscillates (0.0 - 1.0)
    pub oscillate_chance: f64,
    pub oscillate_speed: f32,
    pub base_speed_min: u32,
    pub base_speed_spread: u32,
    pub fast_speed: f32,

    // === Escalation ===
    pub boost_every: u64,
    pub boost_amount: f32,
    pub accelerate_every: u64,
    pub accelerate_amount: f32,

    // === Timers ===
    pub tick_ms: u32,
    pub countdown_ms: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: GAME_WIDTH,
            height: GAME_HEIGHT,
            top_line: TOP_LINE_HEIGHT,
            bottom_margin: BOTTOM_MARGIN,

            player_size: PLAYER_SIZE,
            player_step: PLAYER_STEP,
            starting_lives: STARTING_LIVES,

            obstacle_size: OBSTACLE_SIZE,
            spawn_chance: SPAWN_CHANCE,
            oscillate_chance: OSCILLATE_CHANCE,
            oscillate_speed: OSCILLATE_SPEED,
            base_speed_min: BASE_SPEED_MIN,
            base_speed_spread: BASE_SPEED_SPREAD,
            fast_speed: FAST_SPEED,

            boost_every: BOOST_EVERY,
            boost_amount: BOOST_AMOUNT,
            accelerate_every: ACCELERATE_EVERY,
            accelerate_amount: ACCELERATE_AMOUNT,

            tick_ms: TICK_MS,
            countdown_ms: COUNTDOWN_MS,
        }
    }
}

impl Settings {
    /// Top edge of the player band. Obstacles below this line have been dodged.
    pub fn scoring_line(&self) -> f32 {
        self.height - self.player_size - self.bottom_margin
    }

    /// Rightmost legal player x
    pub fn player_max_x(&self) -> f32 {
        (self.width - self.player_size).max(0.0)
    }

    /// Rightmost legal obstacle x
    pub fn obstacle_max_x(&self) -> f32 {
        (self.width - self.obstacle_size).max(0.0)
    }

    /// Player x when centred on the track
    pub fn player_start_x(&self) -> f32 {
        self.player_max_x() / 2.0
    }

    /// Clamp out-of-range values so the simulation never sees nonsense
    pub fn sanitized(mut self) -> Self {
        self.spawn_chance = self.spawn_chance.clamp(0.0, 1.0);
        self.oscillate_chance = self.oscillate_chance.clamp(0.0, 1.0);
        self.boost_every = self.boost_every.max(1);
        self.accelerate_every = self.accelerate_every.max(1);
        self.starting_lives = self.starting_lives.max(1);
        self.tick_ms = self.tick_ms.max(1);
        self.countdown_ms = self.countdown_ms.max(1);
        self
    }

    /// Parse settings from JSON, falling back to defaults on error
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<Settings>(json) {
            Ok(settings) => settings.sanitized(),
            Err(e) => {
                log::warn!("Ignoring malformed settings ({e}), using defaults");
                Self::default()
            }
        }
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "fall_dodge_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                log::info!("Loaded settings from LocalStorage");
                return Self::from_json(&json);
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Load settings from a JSON file (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => {
                log::info!("Loaded settings from {}", path.display());
                Self::from_json(&json)
            }
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }
}
