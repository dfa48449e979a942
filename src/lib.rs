//! Wrap Snake - a terminal Snake game on a wrap-around board
//!
//! This library provides:
//! - Core game logic (game module)
//! - Round lifecycle and restart prompt (session module)
//! - Keyboard mapping (input module)
//! - TUI rendering (render module)
//! - Interactive terminal play (modes module)

pub mod game;
pub mod input;
pub mod logging;
pub mod modes;
pub mod render;
pub mod session;
