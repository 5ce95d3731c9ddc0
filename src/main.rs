//! Fall Dodge entry point
//!
//! The browser build is driven from JavaScript through `platform::web`. The
//! native binary plays one headless run with a simple autopilot and logs the
//! outcome, which is handy for checking balance changes.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::Path;

    use fall_dodge::platform::entropy_seed;
    use fall_dodge::sim::{GameEvent, GamePhase, GameState, Intent};
    use fall_dodge::{Driver, FileStore, Settings};

    /// Stop a run that survives this long (~50 minutes of game time)
    const MAX_TICKS: u64 = 60_000;

    /// Pick the move that keeps the player out of the way of the nearest threats
    fn autopilot(state: &GameState, settings: &Settings) -> Option<Intent> {
        let danger = |x: f32| -> f32 {
            state
                .obstacles
                .iter()
                .filter(|o| o.pos.y + settings.obstacle_size > settings.scoring_line() - 200.0)
                .filter(|o| o.pos.y < settings.height - settings.bottom_margin)
                .filter(|o| {
                    o.pos.x < x + settings.player_size + 5.0
                        && o.pos.x + settings.obstacle_size > x - 5.0
                })
                .map(|o| o.pos.y)
                .sum()
        };

        let x = state.player.x;
        let left = (x - settings.player_step).max(0.0);
        let right = (x + settings.player_step).min(settings.player_max_x());

        let stay = danger(x);
        if stay == 0.0 {
            return None;
        }
        let (go_left, go_right) = (danger(left), danger(right));
        if go_left < stay && go_left <= go_right {
            Some(Intent::MoveLeft)
        } else if go_right < stay {
            Some(Intent::MoveRight)
        } else {
            None
        }
    }

    pub fn run() {
        let settings = Settings::load_from(Path::new("fall_dodge_settings.json"));
        let store = FileStore::new("fall_dodge_best.json");
        let seed = entropy_seed();
        let mut driver = Driver::new(settings, store, seed);

        driver.start_game();
        let tick_ms = driver.settings().tick_ms;
        let countdown_ms = driver.settings().countdown_ms;
        while driver.phase().is_countdown() {
            driver.advance(countdown_ms);
        }

        let mut hits = 0;
        while driver.phase() == GamePhase::Running && driver.state().time_ticks < MAX_TICKS {
            if let Some(intent) = autopilot(driver.state(), driver.settings()) {
                driver.handle(intent);
            }
            for event in driver.advance(tick_ms) {
                if let GameEvent::Hit { lives_left, .. } = event {
                    hits += 1;
                    log::info!("Hit at score {}, {} lives left", driver.state().score, lives_left);
                }
            }
        }

        let state = driver.state();
        log::info!(
            "Run finished after {} ticks: score {}, best {}, hits {}",
            state.time_ticks,
            state.score,
            state.high_score,
            hits
        );
        println!(
            "Seed {seed}: score {} (best {}) in {} ticks",
            state.score, state.high_score, state.time_ticks
        );
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Fall Dodge (native) starting...");
    headless::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::wasm_start, this is just to satisfy the compiler
}
