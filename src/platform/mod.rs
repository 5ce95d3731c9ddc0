//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Layout hints (compact viewports get on-screen arrows)
//! - Key to intent mapping
//! - Entropy for run seeds

#[cfg(target_arch = "wasm32")]
pub mod web;

use crate::consts::COMPACT_LAYOUT_MAX_WIDTH;
use crate::sim::Intent;

/// Narrow viewports show touch buttons instead of relying on a keyboard
pub fn is_compact_layout(viewport_width: u32) -> bool {
    viewport_width <= COMPACT_LAYOUT_MAX_WIDTH
}

/// Map a DOM `KeyboardEvent.key` value to an intent
pub fn intent_for_key(key: &str) -> Option<Intent> {
    match key {
        "ArrowLeft" | "a" | "A" => Some(Intent::MoveLeft),
        "ArrowRight" | "d" | "D" => Some(Intent::MoveRight),
        _ => None,
    }
}

/// Seed for a new run
#[cfg(target_arch = "wasm32")]
pub fn entropy_seed() -> u64 {
    getrandom::u64().unwrap_or_else(|e| {
        log::warn!("No entropy available ({e}), using fixed seed");
        0x5eed
    })
}

/// Seed for a new run
#[cfg(not(target_arch = "wasm32"))]
pub fn entropy_seed() -> u64 {
    rand::random()
}
