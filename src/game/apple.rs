use super::geometry::Position;

/// Whether an apple is on the board or waiting to be respawned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppleState {
    Active,
    Consumed,
}

/// An apple; consumed apples are relocated and reactivated, never removed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Apple {
    pub position: Position,
    pub state: AppleState,
}

impl Apple {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            state: AppleState::Active,
        }
    }

    pub fn is_active(&self) -> bool {
        self.state == AppleState::Active
    }

    pub fn consume(&mut self) {
        self.state = AppleState::Consumed;
    }

    /// Move to `position` and put the apple back in play
    pub fn respawn(&mut self, position: Position) {
        self.position = position;
        self.state = AppleState::Active;
    }
}
