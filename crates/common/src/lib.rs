//! Shared board geometry and round outcome types.
//!
//! # Invariants
//! - Board dimensions and bounds are compile-time constants; every crate
//!   reads them from here.
//! - `Verdict::Won`/`Verdict::Lost` display the exact user-facing strings.

pub mod types;

pub use types::{Cell, Verdict};
pub use types::{
    BOARD_SIZE, GOAL_CORNER, GOAL_POCKET_X, GOAL_POCKET_Y, START_POS, STEP, X_MAX, X_MIN, Y_MAX,
    Y_MIN,
};
