use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::geometry::Board;

/// Largest board, in cells, that a terminal can show
pub const MAX_COLUMNS: i32 = 1024;
pub const MAX_ROWS: i32 = 1024;

/// How queued input events are consumed on each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputPolicy {
    /// Take the oldest pending event; the rest wait for later ticks
    #[default]
    ConsumeOne,
    /// Empty the queue, keeping the last event relevant to the current phase
    DrainKeepLast,
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board width in board units
    pub board_width: i32,
    /// Board height in board units
    pub board_height: i32,
    /// Side of one square cell; snake segments and apples are one cell
    pub cell_size: i32,
    /// Game ticks per second
    pub ticks_per_second: u32,
    /// Number of apples kept on the board
    pub apple_count: usize,
    /// Score added per apple eaten
    pub apple_reward: u32,
    /// Input draining strategy
    pub input_policy: InputPolicy,
    /// Seed for apple placement; random when absent
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: 800,
            board_height: 600,
            cell_size: 20,
            ticks_per_second: 10,
            apple_count: 1,
            apple_reward: 10,
            input_policy: InputPolicy::ConsumeOne,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom board size
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            board_width: width,
            board_height: height,
            ..Default::default()
        }
    }

    /// Create a small board for testing
    pub fn small() -> Self {
        Self::new(200, 200)
    }

    /// Reject configurations the engine cannot run with
    pub fn validate(&self) -> Result<()> {
        ensure!(self.cell_size > 0, "cell size must be positive, got {}", self.cell_size);
        ensure!(
            self.board_width > 0 && self.board_width % self.cell_size == 0,
            "board width {} must be a positive multiple of cell size {}",
            self.board_width,
            self.cell_size
        );
        ensure!(
            self.board_height > 0 && self.board_height % self.cell_size == 0,
            "board height {} must be a positive multiple of cell size {}",
            self.board_height,
            self.cell_size
        );
        let board = self.board();
        ensure!(
            board.columns() <= MAX_COLUMNS && board.rows() <= MAX_ROWS,
            "board of {}x{} cells exceeds the {}x{} limit",
            board.columns(),
            board.rows(),
            MAX_COLUMNS,
            MAX_ROWS
        );
        ensure!(self.ticks_per_second > 0, "ticks per second must be positive");
        ensure!(self.apple_count > 0, "at least one apple is required");
        Ok(())
    }

    pub fn board(&self) -> Board {
        Board::new(self.board_width, self.board_height, self.cell_size)
    }

    /// Time between two ticks
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.ticks_per_second.max(1)
    }
}
