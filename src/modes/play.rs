//! Interactive play in the terminal
//!
//! `PlayMode` is the application context: it owns the terminal, the tick
//! clock, the renderer, the input handler and the session. Nothing is global.

use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use log::{info, warn};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::{Instant, Interval, interval_at};

use crate::game::GameConfig;
use crate::input::{InputHandler, KeyAction};
use crate::render::Renderer;
use crate::session::Session;

pub struct PlayMode {
    session: Session,
    renderer: Renderer,
    input_handler: InputHandler,
    tick_interval: Duration,
}

impl PlayMode {
    pub fn new(config: GameConfig) -> Self {
        let tick_interval = config.tick_interval();

        Self {
            session: Session::new(config),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            tick_interval,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut terminal = with_rollback(setup_terminal, || {
            // Best effort: the setup error is the one worth reporting
            let _ = execute!(stderr(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
        })?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;
        if let Err(err) = &result {
            warn!("game loop stopped: {err:#}");
        }

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        info!(
            "session ended after {} round(s)",
            self.session.rounds_played()
        );
        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();
        let mut tick_timer = tick_timer(self.tick_interval);

        self.draw(terminal)?;

        loop {
            tokio::select! {
                // Queue terminal events until the next tick
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                        None => self.session.handle_input(KeyAction::Quit),
                    }
                }

                // One update and one frame per tick
                _ = tick_timer.tick() => {
                    self.session.tick();
                    self.draw(terminal)?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.session.handle_input(KeyAction::Quit);
                }
            }

            if self.session.is_terminated() {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            let action = self.input_handler.handle_key_event(key);
            self.session.handle_input(action);
        }
    }

    fn draw(&self, terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
        let state = self.session.state();
        let phase = self.session.phase();
        terminal
            .draw(|frame| self.renderer.render(frame, state, phase))
            .context("Failed to draw frame")?;
        Ok(())
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

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stderr>>> {
    let mut stderr = stderr();
    execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
    terminal.hide_cursor().context("Failed to hide cursor")?;
    terminal.clear().context("Failed to clear terminal")?;
    Ok(terminal)
}

/// Run `setup`, calling `rollback` if it fails
fn with_rollback<T>(setup: impl FnOnce() -> Result<T>, rollback: impl FnOnce()) -> Result<T> {
    let result = setup();
    if result.is_err() {
        rollback();
    }
    result
}

/// Fixed-rate clock whose first tick comes one period from now
fn tick_timer(period: Duration) -> Interval {
    interval_at(Instant::now() + period, period)
}
