//! Scheduling wrapper around the simulation
//!
//! The host feeds elapsed wall time; the driver owns the two periodic timers
//! and forwards whole periods to the simulation:
//! - a 50 ms tick timer that exists only while `Running`
//! - a 1000 ms countdown timer that exists only during `Countdown(*)`
//!
//! Timers are installed and torn down on phase changes, so a finished run can
//! never receive another tick.

use crate::consts::MAX_SUBSTEPS;
use crate::highscores::BestScoreStore;
use crate::settings::Settings;
use crate::sim::{
    GameEvent, GamePhase, GameState, Intent, Snapshot, advance_countdown, apply_intent, tick,
};

/// A periodic timer fed with elapsed milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    period_ms: u32,
    pending_ms: u32,
}

impl Timer {
    pub fn new(period_ms: u32) -> Self {
        Self {
            period_ms: period_ms.max(1),
            pending_ms: 0,
        }
    }

    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }

    pub fn pending_ms(&self) -> u32 {
        self.pending_ms
    }

    fn feed(&mut self, elapsed_ms: u32) {
        self.pending_ms = self.pending_ms.saturating_add(elapsed_ms);
    }

    /// Consume one period if enough time has built up
    fn fire(&mut self) -> bool {
        if self.pending_ms >= self.period_ms {
            self.pending_ms -= self.period_ms;
            true
        } else {
            false
        }
    }

    /// Drop backlog beyond one period (after hitting the substep cap)
    fn drop_backlog(&mut self) {
        self.pending_ms = self.pending_ms.min(self.period_ms);
    }
}

/// Owns the game state, its timers, and the best-score store
pub struct Driver<S: BestScoreStore> {
    state: GameState,
    settings: Settings,
    store: S,
    tick_timer: Option<Timer>,
    countdown_timer: Option<Timer>,
    compact_layout: bool,
}

impl<S: BestScoreStore> Driver<S> {
    /// New game on the intro screen. Reads the best score once.
    pub fn new(settings: Settings, store: S, seed: u64) -> Self {
        let settings = settings.sanitized();
        let high_score = store.load_best_score();
        log::info!("New game (seed {seed}, best score {high_score})");
        Self {
            state: GameState::new(seed, &settings, high_score),
            settings,
            store,
            tick_timer: None,
            countdown_timer: None,
            compact_layout: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn tick_timer(&self) -> Option<&Timer> {
        self.tick_timer.as_ref()
    }

    pub fn countdown_timer(&self) -> Option<&Timer> {
        self.countdown_timer.as_ref()
    }

    /// Layout hint from the platform. Affects only which controls are shown.
    pub fn set_compact_layout(&mut self, compact: bool) {
        self.compact_layout = compact;
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state, &self.settings, self.compact_layout)
    }

    /// Apply an intent immediately (moves are never queued)
    pub fn handle(&mut self, intent: Intent) -> bool {
        let changed = apply_intent(&mut self.state, &self.settings, intent);
        self.sync_timers();
        changed
    }

    pub fn move_left(&mut self) -> bool {
        self.handle(Intent::MoveLeft)
    }

    pub fn move_right(&mut self) -> bool {
        self.handle(Intent::MoveRight)
    }

    pub fn start_game(&mut self) -> bool {
        self.handle(Intent::Start)
    }

    pub fn restart_game(&mut self) -> bool {
        self.handle(Intent::Restart)
    }

    /// Feed elapsed wall time and fire whatever timers came due
    pub fn advance(&mut self, elapsed_ms: u32) -> Vec<GameEvent> {
        let mut events = Vec::new();
        let mut budget = elapsed_ms;

        if let Some(mut timer) = self.countdown_timer.take() {
            timer.feed(budget);
            budget = 0;
            while timer.fire() {
                advance_countdown(&mut self.state);
                if !self.state.phase.is_countdown() {
                    // Time left over after "GO!" carries into the first ticks
                    budget = timer.pending_ms();
                    break;
                }
            }
            if self.state.phase.is_countdown() {
                self.countdown_timer = Some(timer);
            }
            self.sync_timers();
        }

        if let Some(timer) = self.tick_timer.as_mut() {
            timer.feed(budget);
            let mut substeps = 0;
            while substeps < MAX_SUBSTEPS && timer.fire() {
                let tick_events = tick(&mut self.state, &self.settings);
                substeps += 1;

                if let Some(best) = tick_events.iter().find_map(|e| match e {
                    GameEvent::NewBest { score } => Some(*score),
                    _ => None,
                }) {
                    self.store.save_best_score(best);
                }
                events.extend(tick_events);

                if self.state.phase != GamePhase::Running {
                    break;
                }
            }
            if substeps == MAX_SUBSTEPS {
                timer.drop_backlog();
            }
        }
        self.sync_timers();

        events
    }

    /// Install or tear down timers to match the current phase
    fn sync_timers(&mut self) {
        match self.state.phase {
            GamePhase::Countdown(_) => {
                self.tick_timer = None;
                if self.countdown_timer.is_none() {
                    self.countdown_timer = Some(Timer::new(self.settings.countdown_ms));
                }
            }
            GamePhase::Running => {
                self.countdown_timer = None;
                if self.tick_timer.is_none() {
                    self.tick_timer = Some(Timer::new(self.settings.tick_ms));
                }
            }
            GamePhase::Intro | GamePhase::GameOver => {
                self.tick_timer = None;
                self.countdown_timer = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highscores::MemoryStore;
    use crate::sim::CountdownStep;

    fn driver(spawn_chance: f64) -> Driver<MemoryStore> {
        let settings = Settings {
            spawn_chance,
            ..Default::default()
        };
        Driver::new(settings, MemoryStore::with_raw("7"), 99)
    }

    #[test]
    fn test_loads_best_score() {
        let d = driver(0.0);
        assert_eq!(d.state().high_score, 7);
        assert_eq!(d.phase(), GamePhase::Intro);
        assert!(d.tick_timer().is_none() && d.countdown_timer().is_none());
    }

    #[test]
    fn test_countdown_timing() {
        let mut d = driver(0.0);
        assert!(d.start_game());
        assert_eq!(d.phase(), GamePhase::Countdown(CountdownStep::Three));
        assert!(d.countdown_timer().is_some());
        assert!(d.tick_timer().is_none());

        d.advance(999);
        assert_eq!(d.phase(), GamePhase::Countdown(CountdownStep::Three));
        d.advance(1);
        assert_eq!(d.phase(), GamePhase::Countdown(CountdownStep::Two));
        d.advance(1000);
        assert_eq!(d.phase(), GamePhase::Countdown(CountdownStep::One));
        d.advance(1000);
        assert_eq!(d.phase(), GamePhase::Countdown(CountdownStep::Go));
        d.advance(1000);
        assert_eq!(d.phase(), GamePhase::Running);
        assert!(d.countdown_timer().is_none());
        assert!(d.tick_timer().is_some());
        assert_eq!(d.state().time_ticks, 0);
    }

    #[test]
    fn test_leftover_countdown_time_drives_ticks() {
        let mut d = driver(0.0);
        d.start_game();
        d.advance(4000 + 120);
        assert_eq!(d.phase(), GamePhase::Running);
        assert_eq!(d.state().time_ticks, 2);
        assert_eq!(d.tick_timer().map(|t| t.pending_ms()), Some(20));
    }

    #[test]
    fn test_ticks_only_while_running() {
        let mut d = driver(0.0);
        d.advance(10_000);
        assert_eq!(d.phase(), GamePhase::Intro);
        assert_eq!(d.state().time_ticks, 0);
    }

    #[test]
    fn test_substep_cap() {
        let mut d = driver(0.0);
        d.start_game();
        d.advance(4000);
        d.advance(50 * 100);
        assert_eq!(d.state().time_ticks, MAX_SUBSTEPS as u64);
        assert!(d.tick_timer().map(|t| t.pending_ms()).unwrap_or(0) <= 50);
    }

    #[test]
    fn test_moves_during_countdown_ignored() {
        let mut d = driver(0.0);
        d.start_game();
        assert!(!d.move_left());
        d.advance(4000);
        assert!(d.move_left());
        assert_eq!(d.state().player.x, 140.0);
    }

    #[test]
    fn test_game_over_stops_timer_and_restart_resets() {
        let mut d = driver(0.0);
        d.start_game();
        d.advance(4000);
        d.state.lives = 1;
        d.state.obstacles.push(crate::sim::Obstacle::new(
            1,
            glam::Vec2::new(170.0, 531.0),
            0.0,
            0.0,
            Default::default(),
        ));

        let events = d.advance(50);
        assert!(events.iter().any(|e| matches!(e, GameEvent::GameOver { .. })));
        assert_eq!(d.phase(), GamePhase::GameOver);
        assert!(d.tick_timer().is_none());

        d.advance(10_000);
        assert_eq!(d.state().time_ticks, 1);

        assert!(d.restart_game());
        assert_eq!(d.phase(), GamePhase::Countdown(CountdownStep::Three));
        assert!(d.countdown_timer().is_some());
        assert_eq!(d.state().lives, 3);
        assert_eq!(d.state().score, 0);
        assert_eq!(d.state().player.x, 170.0);
    }

    #[test]
    fn test_best_score_saved_once_per_improving_tick() {
        let mut d = driver(0.0);
        d.start_game();
        d.advance(4000);
        d.move_left();
        d.move_left();
        d.move_left();
        d.move_left();
        d.move_left();
        d.move_left();
        assert_eq!(d.state().player.x, 0.0);

        d.state.score = 7;
        for (i, x) in [300.0, 320.0].into_iter().enumerate() {
            d.state.obstacles.push(crate::sim::Obstacle::new(
                i as u32 + 10,
                glam::Vec2::new(x, 529.0),
                0.0,
                2.0,
                Default::default(),
            ));
        }

        d.advance(50);
        assert_eq!(d.state().score, 9);
        assert_eq!(d.state().high_score, 9);
        assert_eq!(d.store().writes, 1);
        assert_eq!(d.store().load_best_score(), 9);

        // No improvement, no write
        d.advance(50);
        assert_eq!(d.store().writes, 1);
    }
}
