//! Read-only view of the game for the presentation layer
//!
//! The simulation never draws anything. Front-ends take a `Snapshot` after each
//! tick or intent and render from it.

use serde::Serialize;

use super::state::{GamePhase, GameState, ObstacleKind};
use crate::settings::Settings;

/// One obstacle as the renderer sees it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObstacleView {
    pub id: u32,
    pub x: f32,
    pub y: f32,
    pub kind: ObstacleKind,
}

/// Everything needed to draw a frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    /// "3", "2", "1" or "GO!" while counting down
    pub countdown: Option<&'static str>,
    pub player_x: f32,
    pub obstacles: Vec<ObstacleView>,
    pub score: u64,
    pub lives: u8,
    /// One entry per starting life, true while that life remains
    pub hearts: Vec<bool>,
    pub high_score: u64,
    /// On-screen arrow buttons: compact layouts only, and only mid-run
    pub show_touch_controls: bool,
}

impl Snapshot {
    pub fn capture(state: &GameState, settings: &Settings, compact_layout: bool) -> Self {
        let countdown = match state.phase {
            GamePhase::Countdown(step) => Some(step.label()),
            _ => None,
        };

        Self {
            phase: state.phase,
            countdown,
            player_x: state.player.x,
            obstacles: state
                .obstacles
                .iter()
                .map(|o| ObstacleView {
                    id: o.id,
                    x: o.pos.x,
                    y: o.pos.y,
                    kind: o.kind,
                })
                .collect(),
            score: state.score,
            lives: state.lives,
            hearts: (1..=settings.starting_lives)
                .map(|i| state.lives >= i)
                .collect(),
            high_score: state.high_score,
            show_touch_controls: compact_layout && state.phase == GamePhase::Running,
        }
    }

    /// JSON for the browser front-end
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
