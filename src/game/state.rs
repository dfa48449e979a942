use super::apple::Apple;
use super::geometry::Board;
use super::snake::Snake;

/// Type of collision that ended a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Head ran into the snake's own body
    SelfCollision,
}

/// Complete state of one round
///
/// Recreated from scratch on every restart; nothing carries over.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub apples: Vec<Apple>,
    pub board: Board,
    pub score: u32,
    pub ticks: u32,
    pub is_alive: bool,
}

impl GameState {
    /// Create a new game state
    pub fn new(snake: Snake, apples: Vec<Apple>, board: Board) -> Self {
        Self {
            snake,
            apples,
            board,
            score: 0,
            ticks: 0,
            is_alive: true,
        }
    }

    /// Apples the renderer should draw
    pub fn active_apples(&self) -> impl Iterator<Item = &Apple> {
        self.apples.iter().filter(|apple| apple.is_active())
    }
}
