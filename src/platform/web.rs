//! Browser bindings
//!
//! The page owns the DOM, the key/touch listeners and the timer callbacks.
//! It forwards intents and elapsed time here and renders from the JSON
//! snapshot.

use wasm_bindgen::prelude::*;

use super::{entropy_seed, intent_for_key, is_compact_layout};
use crate::driver::Driver;
use crate::highscores::LocalStorageStore;
use crate::settings::Settings;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Fall Dodge (web) starting...");
}

/// Game handle exported to JavaScript
#[wasm_bindgen]
pub struct WebGame {
    driver: Driver<LocalStorageStore>,
}

#[wasm_bindgen]
impl WebGame {
    #[wasm_bindgen(constructor)]
    pub fn new(viewport_width: u32) -> WebGame {
        let mut driver = Driver::new(Settings::load(), LocalStorageStore, entropy_seed());
        driver.set_compact_layout(is_compact_layout(viewport_width));
        WebGame { driver }
    }

    pub fn resize(&mut self, viewport_width: u32) {
        self.driver
            .set_compact_layout(is_compact_layout(viewport_width));
    }

    pub fn start_game(&mut self) -> bool {
        self.driver.start_game()
    }

    pub fn restart_game(&mut self) -> bool {
        self.driver.restart_game()
    }

    pub fn move_left(&mut self) -> bool {
        self.driver.move_left()
    }

    pub fn move_right(&mut self) -> bool {
        self.driver.move_right()
    }

    /// Keyboard listener entry point. Returns true if the key was consumed.
    pub fn key_down(&mut self, key: &str) -> bool {
        match intent_for_key(key) {
            Some(intent) => self.driver.handle(intent),
            None => false,
        }
    }

    /// Feed elapsed milliseconds; returns the number of events produced
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        self.driver.advance(elapsed_ms).len() as u32
    }

    pub fn snapshot_json(&self) -> String {
        self.driver.snapshot().to_json()
    }
}
