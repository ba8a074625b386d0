//! Run control for a single round of play
//!
//! [`GameSession`] is the one owner of the game state. It applies commands
//! from the input side, forwards scheduler ticks to the engine, keeps the
//! scheduler in step with the run status, and hands new high scores to the
//! persistence store.

use crate::game::{Command, Direction, GameEngine, GameEvent, GameState, RunStatus, Speed, StepResult};
use crate::persistence::HighScoreStore;
use crate::schedule::TickScheduler;

pub struct GameSession<S, H> {
    engine: GameEngine,
    state: GameState,
    scheduler: S,
    store: H,
    speed: Speed,
}

impl<S: TickScheduler, H: HighScoreStore> GameSession<S, H> {
    /// Create an idle session, reading the persisted high score once
    pub fn new(mut engine: GameEngine, scheduler: S, store: H) -> Self {
        let mut state = engine.new_game();
        state.high_score = store.load();
        let speed = engine.config().speed;

        tracing::info!(high_score = state.high_score, speed = speed.label(), "session ready");

        Self {
            engine,
            state,
            scheduler,
            store,
            speed,
        }
    }

    /// Read-only view for renderers
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn store(&self) -> &H {
        &self.store
    }

    /// Dispatch an input command
    pub fn apply(&mut self, command: Command) -> Vec<GameEvent> {
        match command {
            Command::RequestDirection(direction) => {
                self.request_direction(direction);
                Vec::new()
            }
            Command::TogglePause => self.toggle_pause(),
            Command::Start => self.start(),
            Command::Reset => self.reset(),
            Command::SetSpeed(speed) => self.set_speed(speed),
        }
    }

    /// Begin play. A finished round is reset first; running or paused is a no-op.
    pub fn start(&mut self) -> Vec<GameEvent> {
        match self.state.status {
            RunStatus::Running | RunStatus::Paused => return Vec::new(),
            RunStatus::Ended | RunStatus::Won => self.engine.reset(&mut self.state),
            RunStatus::Idle => {}
        }

        self.state.status = RunStatus::Running;
        self.scheduler.start(self.speed.interval());
        tracing::info!(speed = self.speed.label(), "round started");
        vec![GameEvent::StateChanged]
    }

    /// Switch between running and paused; other states are left alone
    pub fn toggle_pause(&mut self) -> Vec<GameEvent> {
        match self.state.status {
            RunStatus::Running => {
                self.state.status = RunStatus::Paused;
                self.scheduler.stop();
                tracing::info!(score = self.state.score, "paused");
            }
            RunStatus::Paused => {
                self.state.status = RunStatus::Running;
                self.scheduler.start(self.speed.interval());
                tracing::info!("resumed");
            }
            _ => return Vec::new(),
        }
        vec![GameEvent::StateChanged]
    }

    /// Stop ticking and return to a fresh idle round; the high score survives
    pub fn reset(&mut self) -> Vec<GameEvent> {
        self.scheduler.stop();
        self.engine.reset(&mut self.state);
        tracing::info!("round reset");
        vec![GameEvent::StateChanged]
    }

    /// Buffer a turn for the next tick; returns whether it was kept
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        let accepted = self.state.request_direction(direction);
        if !accepted {
            tracing::debug!(?direction, status = ?self.state.status, "direction request dropped");
        }
        accepted
    }

    /// Change the tick interval without touching the round
    pub fn set_speed(&mut self, speed: Speed) -> Vec<GameEvent> {
        if speed == self.speed {
            return Vec::new();
        }

        self.speed = speed;
        if self.state.is_running() {
            self.scheduler.reschedule(speed.interval());
        }
        tracing::debug!(speed = speed.label(), "speed changed");
        vec![GameEvent::StateChanged]
    }

    /// Handle one scheduler tick
    pub fn tick(&mut self) -> StepResult {
        if !self.state.is_running() {
            return StepResult::default();
        }

        let result = self.engine.advance_tick(&mut self.state);

        for event in &result.events {
            if let GameEvent::NewHighScore(score) = *event {
                tracing::info!(score, "new high score");
                if let Err(error) = self.store.save(score) {
                    tracing::warn!(?error, "failed to save high score");
                }
            }
        }

        if result.terminated {
            self.scheduler.stop();
        }

        result
    }
}
