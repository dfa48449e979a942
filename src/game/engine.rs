use super::{
    action::Action,
    apple::Apple,
    config::GameConfig,
    geometry::Board,
    snake::Snake,
    state::{CollisionType, GameState},
};
use log::debug;
use rand::{SeedableRng, rngs::StdRng};

/// Information about a step
#[derive(Debug, Clone, PartialEq)]
pub struct StepInfo {
    /// Apples eaten this step
    pub apples_eaten: u32,
    /// Whether the requested turn was accepted
    pub turned: bool,
    /// Type of collision if one occurred
    pub collision_type: Option<CollisionType>,
}

/// Result of a game step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Score gained this step
    pub score_gained: u32,
    /// Whether the round has terminated
    pub terminated: bool,
    /// Additional information about the step
    pub info: StepInfo,
}

/// Runs the per-tick rules of a round
pub struct GameEngine {
    config: GameConfig,
    board: Board,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            board: config.board(),
            config,
            rng,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Start a fresh round: snake in the middle of the board, apples scattered
    pub fn reset(&mut self) -> GameState {
        let snake = Snake::new(self.board.center(), self.board);
        let apples = (0..self.config.apple_count)
            .map(|_| Apple::new(self.board.random_cell(&mut self.rng)))
            .collect();

        GameState::new(snake, apples, self.board)
    }

    /// Execute one tick of the round
    pub fn step(&mut self, state: &mut GameState, action: Action) -> StepResult {
        if !state.is_alive {
            return StepResult {
                score_gained: 0,
                terminated: true,
                info: StepInfo {
                    apples_eaten: 0,
                    turned: false,
                    collision_type: None,
                },
            };
        }

        let turned = match action {
            Action::Move(direction) => state.snake.set_direction(direction),
            Action::Continue => false,
        };

        state.snake.advance();

        // Eating happens before the collision check so the last apple still counts
        let head = self.board.cell_box(state.snake.head().position);
        let mut apples_eaten = 0;
        for apple in state.apples.iter_mut() {
            if apple.is_active() && head.overlaps(&self.board.cell_box(apple.position)) {
                apple.consume();
                state.snake.grow();
                apples_eaten += 1;
            }
        }
        let score_gained = apples_eaten * self.config.apple_reward;
        state.score += score_gained;

        let collision_type = if state.snake.check_self_collision() {
            state.is_alive = false;
            Some(CollisionType::SelfCollision)
        } else {
            None
        };

        // Respawn runs on the terminal tick too
        self.respawn_apples(state);

        state.ticks += 1;

        if apples_eaten > 0 {
            debug!(
                "ate {} apple(s) at {:?}, score {}, length {}",
                apples_eaten,
                state.snake.head().position,
                state.score,
                state.snake.len()
            );
        }

        StepResult {
            score_gained,
            terminated: !state.is_alive,
            info: StepInfo {
                apples_eaten,
                turned,
                collision_type,
            },
        }
    }

    /// Put every consumed apple back on a random cell; the snake is not avoided
    fn respawn_apples(&mut self, state: &mut GameState) {
        for apple in state.apples.iter_mut().filter(|apple| !apple.is_active()) {
            apple.respawn(self.board.random_cell(&mut self.rng));
        }
    }
}
