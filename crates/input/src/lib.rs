//! Input layer: actions shared by every frontend, and the per-frame queue.
//!
//! # Invariants
//! - Desktop keys and CLI move strings produce the same action graph.
//! - The queue is drained exactly once per frame, before the state step.

pub mod action;
pub mod queue;

pub use action::{Action, ParseMoveError, parse_moves};
pub use queue::InputQueue;
