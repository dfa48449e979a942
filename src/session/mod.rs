//! Round lifecycle: playing, the game-over prompt, and restart or exit
//!
//! The session is driven one tick at a time by whoever owns the clock. A
//! restart replaces the round state in place, so any number of rounds can be
//! played without the call stack growing.

pub mod queue;

use log::info;

use crate::game::{Action, GameConfig, GameEngine, GameState};
use crate::input::KeyAction;

pub use queue::InputQueue;

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// A round is running
    Playing,
    /// The round ended; waiting for a yes/no answer
    GameOver,
    /// The player chose to leave
    Terminated,
}

pub struct Session {
    engine: GameEngine,
    state: GameState,
    phase: SessionPhase,
    queue: InputQueue,
    rounds_played: u32,
}

impl Session {
    pub fn new(config: GameConfig) -> Self {
        let queue = InputQueue::new(config.input_policy);
        let mut engine = GameEngine::new(config);
        let state = engine.reset();
        info!("round 1 started");

        Self {
            engine,
            state,
            phase: SessionPhase::Playing,
            queue,
            rounds_played: 1,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    pub fn is_terminated(&self) -> bool {
        self.phase == SessionPhase::Terminated
    }

    /// Accept an input event as it arrives.
    ///
    /// Quit takes effect at once from any phase; everything else waits for
    /// the next tick.
    pub fn handle_input(&mut self, action: KeyAction) {
        if action == KeyAction::Quit {
            if !self.is_terminated() {
                info!("quit requested after {} round(s)", self.rounds_played);
            }
            self.phase = SessionPhase::Terminated;
            return;
        }
        self.queue.push(action);
    }

    /// Advance the session by one tick and report the resulting phase
    pub fn tick(&mut self) -> SessionPhase {
        match self.phase {
            SessionPhase::Playing => self.tick_playing(),
            SessionPhase::GameOver => self.tick_game_over(),
            SessionPhase::Terminated => {}
        }
        self.phase
    }

    fn tick_playing(&mut self) {
        // Confirmations mean nothing mid-round
        let action = match self.queue.next_for_tick(SessionPhase::Playing) {
            Some(KeyAction::Steer(direction)) => Action::Move(direction),
            _ => Action::Continue,
        };

        let result = self.engine.step(&mut self.state, action);
        if result.terminated {
            info!(
                "round {} over after {} ticks, score {}, length {}",
                self.rounds_played,
                self.state.ticks,
                self.state.score,
                self.state.snake.len()
            );
            self.phase = SessionPhase::GameOver;
        }
    }

    fn tick_game_over(&mut self) {
        match self.queue.next_for_tick(SessionPhase::GameOver) {
            Some(KeyAction::ConfirmYes) => self.restart(),
            Some(KeyAction::ConfirmNo) => {
                info!("player declined another round");
                self.phase = SessionPhase::Terminated;
            }
            _ => {}
        }
    }

    fn restart(&mut self) {
        self.state = self.engine.reset();
        self.queue.clear();
        self.rounds_played += 1;
        self.phase = SessionPhase::Playing;
        info!("round {} started", self.rounds_played);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, InputPolicy, Position};

    fn seeded_session() -> Session {
        Session::new(GameConfig {
            seed: Some(3),
            ..GameConfig::default()
        })
    }

    /// Drive the snake into itself by circling a 2x2 square
    fn lose_round(session: &mut Session) {
        session.state.snake.grow();
        session.state.snake.grow();
        for apple in session.state.apples.iter_mut() {
            apple.position = Position::new(0, 0);
        }
        for direction in [Direction::Up, Direction::Left, Direction::Down, Direction::Right] {
            session.handle_input(KeyAction::Steer(direction));
            session.tick();
        }
    }

    #[test]
    fn test_starts_playing() {
        let session = seeded_session();
        assert_eq!(session.phase(), SessionPhase::Playing);
        assert_eq!(session.rounds_played(), 1);
        assert!(session.state().is_alive);
    }

    #[test]
    fn test_direction_input_steers() {
        let mut session = seeded_session();
        session.handle_input(KeyAction::Steer(Direction::Left));
        session.tick();
        assert_eq!(session.state().snake.heading(), Direction::Left);
        assert_eq!(session.state().snake.head().position, Position::new(380, 300));
    }

    #[test]
    fn test_one_event_per_tick() {
        let mut session = seeded_session();
        session.handle_input(KeyAction::Steer(Direction::Left));
        session.handle_input(KeyAction::Steer(Direction::Down));

        session.tick();
        assert_eq!(session.state().snake.heading(), Direction::Left);
        session.tick();
        assert_eq!(session.state().snake.heading(), Direction::Down);
    }

    #[test]
    fn test_drain_policy_applies_last_direction() {
        let mut session = Session::new(GameConfig {
            seed: Some(3),
            input_policy: InputPolicy::DrainKeepLast,
            ..GameConfig::default()
        });
        session.handle_input(KeyAction::Steer(Direction::Left));
        session.handle_input(KeyAction::Steer(Direction::Up));
        session.handle_input(KeyAction::Steer(Direction::Right));

        session.tick();
        assert_eq!(session.state().snake.heading(), Direction::Right);
    }

    #[test]
    fn test_drain_policy_keeps_direction_over_stray_confirmation() {
        let mut session = Session::new(GameConfig {
            seed: Some(3),
            input_policy: InputPolicy::DrainKeepLast,
            ..GameConfig::default()
        });
        session.handle_input(KeyAction::Steer(Direction::Left));
        session.handle_input(KeyAction::ConfirmYes);

        assert_eq!(session.tick(), SessionPhase::Playing);
        assert_eq!(session.state().snake.heading(), Direction::Left);
        assert_eq!(session.state().snake.head().position, Position::new(380, 300));
    }

    #[test]
    fn test_drain_policy_answers_prompt_despite_directions() {
        let mut session = Session::new(GameConfig {
            seed: Some(3),
            input_policy: InputPolicy::DrainKeepLast,
            ..GameConfig::default()
        });
        lose_round(&mut session);
        assert_eq!(session.phase(), SessionPhase::GameOver);

        session.handle_input(KeyAction::ConfirmYes);
        session.handle_input(KeyAction::Steer(Direction::Down));
        assert_eq!(session.tick(), SessionPhase::Playing);
        assert_eq!(session.rounds_played(), 2);
    }

    #[test]
    fn test_collision_enters_game_over() {
        let mut session = seeded_session();
        lose_round(&mut session);
        assert_eq!(session.phase(), SessionPhase::GameOver);
        assert!(!session.state().is_alive);
    }

    #[test]
    fn test_game_over_ignores_directions() {
        let mut session = seeded_session();
        lose_round(&mut session);
        let head = session.state().snake.head().position;

        session.handle_input(KeyAction::Steer(Direction::Up));
        assert_eq!(session.tick(), SessionPhase::GameOver);
        assert_eq!(session.tick(), SessionPhase::GameOver);
        assert_eq!(session.state().snake.head().position, head);
    }

    #[test]
    fn test_yes_restarts_fresh_round() {
        let mut session = seeded_session();
        lose_round(&mut session);

        session.handle_input(KeyAction::ConfirmYes);
        assert_eq!(session.tick(), SessionPhase::Playing);
        assert_eq!(session.rounds_played(), 2);
        assert!(session.state().is_alive);
        assert_eq!(session.state().score, 0);
        assert_eq!(session.state().snake.len(), 3);
        assert_eq!(session.state().snake.head().position, Position::new(400, 300));
    }

    #[test]
    fn test_no_terminates() {
        let mut session = seeded_session();
        lose_round(&mut session);

        session.handle_input(KeyAction::ConfirmNo);
        assert_eq!(session.tick(), SessionPhase::Terminated);
        assert!(session.is_terminated());
    }

    #[test]
    fn test_quit_is_immediate_from_any_phase() {
        let mut session = seeded_session();
        session.handle_input(KeyAction::Quit);
        assert!(session.is_terminated());

        let mut session = seeded_session();
        lose_round(&mut session);
        session.handle_input(KeyAction::Quit);
        assert!(session.is_terminated());
        assert_eq!(session.tick(), SessionPhase::Terminated);
    }

    #[test]
    fn test_many_restarts() {
        let mut session = seeded_session();
        for _ in 0..50 {
            lose_round(&mut session);
            session.handle_input(KeyAction::ConfirmYes);
            session.tick();
        }
        assert_eq!(session.rounds_played(), 51);
        assert_eq!(session.phase(), SessionPhase::Playing);
    }
}
