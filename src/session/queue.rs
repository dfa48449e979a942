use std::collections::VecDeque;

use super::SessionPhase;
use crate::game::InputPolicy;
use crate::input::KeyAction;

/// Events received between ticks, waiting for the session to consume them
#[derive(Debug, Default)]
pub struct InputQueue {
    pending: VecDeque<KeyAction>,
    policy: InputPolicy,
}

impl InputQueue {
    pub fn new(policy: InputPolicy) -> Self {
        Self {
            pending: VecDeque::new(),
            policy,
        }
    }

    pub fn push(&mut self, action: KeyAction) {
        if action != KeyAction::None {
            self.pending.push_back(action);
        }
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// The event this tick acts on, according to the queue's policy.
    ///
    /// Draining keeps the last event that means something in `phase`:
    /// a direction while playing, a yes/no answer at the game-over prompt.
    pub fn next_for_tick(&mut self, phase: SessionPhase) -> Option<KeyAction> {
        match self.policy {
            InputPolicy::ConsumeOne => self.pending.pop_front(),
            InputPolicy::DrainKeepLast => self
                .pending
                .drain(..)
                .filter(|action| match action {
                    KeyAction::Steer(_) => phase == SessionPhase::Playing,
                    KeyAction::ConfirmYes | KeyAction::ConfirmNo => {
                        phase == SessionPhase::GameOver
                    }
                    KeyAction::Quit | KeyAction::None => false,
                })
                .last(),
        }
    }
}
