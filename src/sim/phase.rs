//! Game phase state machine
//!
//! Intro → Countdown(3, 2, 1, GO!) → Running → GameOver → (restart) → Countdown.
//! Intents that the current phase does not accept are ignored.

use serde::{Deserialize, Serialize};

use super::state::{CountdownStep, GamePhase, GameState};
use crate::settings::Settings;

/// Player intents, already translated from whatever input device produced them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    MoveLeft,
    MoveRight,
    Start,
    Restart,
}

/// Apply an intent. Returns true if it changed anything.
pub fn apply_intent(state: &mut GameState, settings: &Settings, intent: Intent) -> bool {
    match intent {
        Intent::MoveLeft | Intent::MoveRight => move_player(state, settings, intent),
        Intent::Start => start_game(state),
        Intent::Restart => restart_game(state, settings),
    }
}

/// Leave the intro screen and begin the countdown
pub fn start_game(state: &mut GameState) -> bool {
    if state.phase != GamePhase::Intro {
        log::debug!("Ignoring start in {:?}", state.phase);
        return false;
    }
    state.phase = GamePhase::Countdown(CountdownStep::Three);
    log::info!("Game started, counting down");
    true
}

/// Reset the run after a game over and begin the countdown again
pub fn restart_game(state: &mut GameState, settings: &Settings) -> bool {
    if state.phase != GamePhase::GameOver {
        log::debug!("Ignoring restart in {:?}", state.phase);
        return false;
    }
    state.reset_run(settings);
    state.phase = GamePhase::Countdown(CountdownStep::Three);
    log::info!("Game restarted (best score {})", state.high_score);
    true
}

/// One countdown period elapsed: show the next step, or start running after "GO!"
pub fn advance_countdown(state: &mut GameState) -> bool {
    let GamePhase::Countdown(step) = state.phase else {
        return false;
    };
    state.phase = match step.next() {
        Some(next) => GamePhase::Countdown(next),
        None => {
            log::info!("Countdown finished, running");
            GamePhase::Running
        }
    };
    true
}

/// Move the player one step, clamped to the track. Only while running.
pub fn move_player(state: &mut GameState, settings: &Settings, intent: Intent) -> bool {
    if state.phase != GamePhase::Running {
        return false;
    }
    let before = state.player.x;
    match intent {
        Intent::MoveLeft => state.player.move_left(settings.player_step),
        Intent::MoveRight => state
            .player
            .move_right(settings.player_step, settings.player_max_x()),
        Intent::Start | Intent::Restart => return false,
    }
    state.player.x != before
}
