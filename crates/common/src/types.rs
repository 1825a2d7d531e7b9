use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Rows and columns on the board.
pub const BOARD_SIZE: usize = 10;

/// Token displacement per movement input.
pub const STEP: f32 = 0.5;

/// Playable x range. Leaving it ends the round.
pub const X_MIN: f32 = 1.0;
pub const X_MAX: f32 = 9.5;

/// Playable y range.
pub const Y_MIN: f32 = -4.5;
pub const Y_MAX: f32 = 4.5;

/// Goal pocket: x >= `GOAL_POCKET_X` and y <= `GOAL_POCKET_Y` counts as a win
/// even when the position is nominally out of bounds.
pub const GOAL_POCKET_X: f32 = 9.0;
pub const GOAL_POCKET_Y: f32 = -4.0;

/// Landing exactly on this corner wins the round.
pub const GOAL_CORNER: Vec2 = Vec2::new(9.5, -4.5);

/// Token position at the start of every round. Sits outside the nominal x
/// band; safe because the evaluator only runs once the token has moved.
pub const START_POS: Vec2 = Vec2::new(0.5, 4.5);

/// A board cell index, (row, col) in [0, BOARD_SIZE)^2.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Cell center in the token's collision space: row maps to x, col to y.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.row as f32, self.col as f32)
    }
}

/// Outcome of evaluating the token against the board for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    InPlay,
    Won,
    Lost,
}

impl Verdict {
    pub fn is_terminal(self) -> bool {
        matches!(self, Verdict::Won | Verdict::Lost)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The terminal strings are the user-visible round messages.
        match self {
            Verdict::InPlay => write!(f, "in play"),
            Verdict::Won => write!(f, "You Win"),
            Verdict::Lost => write!(f, "You lose"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goal_corner_sits_on_bounds() {
        assert_eq!(GOAL_CORNER.x, X_MAX);
        assert_eq!(GOAL_CORNER.y, Y_MIN);
    }

    #[test]
    fn goal_corner_inside_pocket() {
        assert!(GOAL_CORNER.x >= GOAL_POCKET_X);
        assert!(GOAL_CORNER.y <= GOAL_POCKET_Y);
    }

    #[test]
    fn cell_center_maps_row_to_x() {
        let c = Cell::new(3, 7);
        assert_eq!(c.center(), Vec2::new(3.0, 7.0));
    }

    #[test]
    fn verdict_messages() {
        assert_eq!(Verdict::Won.to_string(), "You Win");
        assert_eq!(Verdict::Lost.to_string(), "You lose");
        assert!(Verdict::Won.is_terminal());
        assert!(Verdict::Lost.is_terminal());
        assert!(!Verdict::InPlay.is_terminal());
    }

    #[test]
    fn start_position_clear_of_any_possible_hole() {
        // Holes sit on integer centers; the start is never within STEP of one
        // on both axes at once.
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let c = Cell::new(row, col).center();
                let near_x = (c.x - START_POS.x).abs() < STEP;
                let near_y = (c.y - START_POS.y).abs() < STEP;
                assert!(!(near_x && near_y), "start collides with ({row}, {col})");
            }
        }
    }
}
