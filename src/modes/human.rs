use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};

use crate::game::{GameEngine, GameEvent};
use crate::input::{InputHandler, KeyAction};
use crate::persistence::HighScoreStore;
use crate::render::Renderer;
use crate::schedule::IntervalScheduler;
use crate::session::GameSession;

pub struct HumanMode<H> {
    session: GameSession<IntervalScheduler, H>,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
    needs_redraw: bool,
}

impl<H: HighScoreStore> HumanMode<H> {
    pub fn new(engine: GameEngine, store: H) -> Self {
        Self {
            session: GameSession::new(engine, IntervalScheduler::new(), store),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
            needs_redraw: true,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        loop {
            if self.needs_redraw {
                let state = self.session.state();
                let speed = self.session.speed();
                terminal
                    .draw(|frame| self.renderer.render(frame, state, speed))
                    .context("Failed to draw frame")?;
                self.needs_redraw = false;
            }

            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(error)) => return Err(error).context("Failed to read terminal event"),
                        None => self.should_quit = true,
                    }
                }

                // Game logic tick; pending while the round is not running
                _ = self.session.scheduler_mut().tick() => {
                    let result = self.session.tick();
                    self.on_events(&result.events);
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => {
                // Only process key press events, not release
                if key.kind != KeyEventKind::Press {
                    return;
                }

                match self.input_handler.handle_key_event(key) {
                    KeyAction::Command(command) => {
                        let events = self.session.apply(command);
                        self.on_events(&events);
                    }
                    KeyAction::Quit => {
                        self.should_quit = true;
                    }
                    KeyAction::None => {}
                }
            }
            Event::Resize(..) => self.needs_redraw = true,
            _ => {}
        }
    }

    fn on_events(&mut self, events: &[GameEvent]) {
        for event in events {
            match event {
                GameEvent::StateChanged => self.needs_redraw = true,
                GameEvent::GameOver {
                    final_score,
                    collision,
                } => {
                    tracing::info!(final_score, ?collision, "round over");
                }
                GameEvent::Won { final_score } => {
                    tracing::info!(final_score, "round won");
                }
                GameEvent::NewHighScore(_) => {}
            }
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
