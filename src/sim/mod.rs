//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of timers,
//! rendering and platform code:
//! - One call to `tick` is one fixed 50 ms step
//! - Seeded RNG only (carried in `GameState`)
//! - Intents and ticks outside their phase are no-ops

pub mod collision;
pub mod phase;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::Aabb;
pub use phase::{Intent, advance_countdown, apply_intent, move_player, restart_game, start_game};
pub use snapshot::{ObstacleView, Snapshot};
pub use spawn::{maybe_spawn, new_obstacle};
pub use state::{CountdownStep, GameEvent, GamePhase, GameState, Obstacle, ObstacleKind, Player};
pub use tick::tick;
