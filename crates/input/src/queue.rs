use crate::action::Action;
use std::collections::VecDeque;

/// Single-threaded input queue.
///
/// Event callbacks push actions as they arrive; the frame loop drains the
/// queue once per frame before the state-transition step, which makes input
/// ordering explicit and testable.
#[derive(Debug, Default)]
pub struct InputQueue {
    pending: VecDeque<Action>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, action: Action) {
        self.pending.push_back(action);
    }

    /// Take every pending action in arrival order.
    pub fn drain(&mut self) -> Vec<Action> {
        self.pending.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
