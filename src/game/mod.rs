//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! Every piece of round state is owned by the caller; nothing here is global.

pub mod action;
pub mod apple;
pub mod config;
pub mod engine;
pub mod geometry;
pub mod snake;
pub mod state;

// Re-export commonly used types
pub use action::{Action, Direction};
pub use apple::{Apple, AppleState};
pub use config::{GameConfig, InputPolicy};
pub use engine::{GameEngine, StepInfo, StepResult};
pub use geometry::{BoundingBox, Board, Position, boxes_overlap, wrap};
pub use snake::{Segment, Snake};
pub use state::{CollisionType, GameState};
