use thiserror::Error;

/// A high-level action any input frontend can produce.
///
/// The session consumes actions, never raw key events, so the desktop app
/// and the headless CLI share the same movement logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the token +0.5 along x.
    MoveRight,
    /// Move the token -0.5 along x.
    MoveLeft,
    /// Move the token -0.5 along y.
    MoveUp,
    /// Move the token +0.5 along y.
    MoveDown,
    /// Flip between the two fixed camera eye positions.
    ToggleCamera,
    /// Terminate cleanly. Handled by the event loop, not the session.
    Quit,
}

/// Failure to parse a textual move sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseMoveError {
    #[error("unrecognized move '{0}' (expected R, L, U, D, or C)")]
    Unrecognized(char),
}

/// Parse a move string like "RRUDC" into actions. Whitespace is ignored and
/// letters are case-insensitive.
pub fn parse_moves(input: &str) -> Result<Vec<Action>, ParseMoveError> {
    input
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c.to_ascii_uppercase() {
            'R' => Ok(Action::MoveRight),
            'L' => Ok(Action::MoveLeft),
            'U' => Ok(Action::MoveUp),
            'D' => Ok(Action::MoveDown),
            'C' => Ok(Action::ToggleCamera),
            other => Err(ParseMoveError::Unrecognized(other)),
        })
        .collect()
}
