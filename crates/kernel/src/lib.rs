//! Game kernel: board generation, token movement, per-frame round evaluation.
//!
//! # Invariants
//! - Round evaluation is a pure function of token position and grid contents.
//! - All state mutations flow through explicit `Session` operations.
//! - Given the same seed and action sequence, rounds replay identically.

pub mod grid;
pub mod session;

pub use grid::{OccupancyGrid, SeedStream};
pub use session::{RoundState, Session, SessionSummary, evaluate};
