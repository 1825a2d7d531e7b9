use crate::grid::{OccupancyGrid, SeedStream};
use glam::Vec2;
use gridmaze_common::{
    GOAL_CORNER, GOAL_POCKET_X, GOAL_POCKET_Y, START_POS, STEP, Verdict, X_MAX, X_MIN, Y_MAX,
    Y_MIN,
};
use gridmaze_input::Action;
use serde::{Deserialize, Serialize};

/// Stored round state. `Won`/`Lost` are instantaneous: the session re-arms
/// `Placing` in the same frame and reports the verdict to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    /// Token at the start position, round not yet begun.
    Placing,
    /// Token has moved; the evaluator runs every frame.
    InPlay,
}

impl std::fmt::Display for RoundState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundState::Placing => write!(f, "placing"),
            RoundState::InPlay => write!(f, "in play"),
        }
    }
}

/// One play session: board, token, mode flags, and the animation tick.
///
/// All mutations go through `apply` and `advance_frame`; renderers only read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    grid: OccupancyGrid,
    token: Vec2,
    state: RoundState,
    camera_alternate: bool,
    tick: u64,
    rounds_played: u64,
    rng: SeedStream,
}

impl Session {
    /// Start a session with a deterministic seed. The first board is
    /// generated immediately; the token waits at the start position.
    pub fn new(seed: u64) -> Self {
        let mut rng = SeedStream::new(seed);
        let grid = OccupancyGrid::generate(&mut rng);
        Self {
            grid,
            token: START_POS,
            state: RoundState::Placing,
            camera_alternate: false,
            tick: 0,
            rounds_played: 0,
            rng,
        }
    }

    pub fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    pub fn token(&self) -> Vec2 {
        self.token
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn camera_alternate(&self) -> bool {
        self.camera_alternate
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn rounds_played(&self) -> u64 {
        self.rounds_played
    }

    /// Cosmetic sinusoidal offset applied to slab and token transforms.
    /// Unrelated to game logic.
    pub fn vibration_offset(&self) -> f32 {
        0.004 * (self.tick as f32).to_radians().sin()
    }

    /// Apply one input action. Movement is a raw ±STEP adjustment with no
    /// clamping; out-of-bounds detection belongs to the evaluator.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::MoveRight => self.step_token(Vec2::new(STEP, 0.0)),
            Action::MoveLeft => self.step_token(Vec2::new(-STEP, 0.0)),
            // Up decrements y, down increments it (board axes point down-screen).
            Action::MoveUp => self.step_token(Vec2::new(0.0, -STEP)),
            Action::MoveDown => self.step_token(Vec2::new(0.0, STEP)),
            Action::ToggleCamera => self.camera_alternate = !self.camera_alternate,
            // Termination is owned by the event loop, not the session.
            Action::Quit => {}
        }
    }

    fn step_token(&mut self, delta: Vec2) {
        self.token += delta;
        self.state = RoundState::InPlay;
    }

    /// Advance one frame: bump the animation tick and, while in play, run the
    /// round evaluator. Returns the verdict exactly once per round end; the
    /// session has already re-armed for the next round when it does.
    pub fn advance_frame(&mut self) -> Option<Verdict> {
        self.tick = self.tick.wrapping_add(1);
        if self.state != RoundState::InPlay {
            return None;
        }
        let verdict = evaluate(self.token, &self.grid);
        if !verdict.is_terminal() {
            return None;
        }
        tracing::info!(round = self.rounds_played, %verdict, "round over");
        self.rounds_played += 1;
        self.rearm();
        Some(verdict)
    }

    /// Re-enter `Placing`: every entry regenerates the board and resets the
    /// token to the start position.
    fn rearm(&mut self) {
        self.grid = OccupancyGrid::generate(&mut self.rng);
        self.token = START_POS;
        self.state = RoundState::Placing;
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            state: self.state,
            token: self.token,
            tick: self.tick,
            rounds_played: self.rounds_played,
            holes: self.grid.hole_count(),
        }
    }
}

/// Snapshot of session state for tooling and headless output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    pub state: RoundState,
    pub token: Vec2,
    pub tick: u64,
    pub rounds_played: u64,
    pub holes: usize,
}

impl std::fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Session: state={} token=({:.1}, {:.1}) tick={} rounds={} holes={}",
            self.state, self.token.x, self.token.y, self.tick, self.rounds_played, self.holes
        )
    }
}

/// Pure round predicate for one frame while in play.
///
/// The tie-break order is load-bearing: the bounds/goal-pocket check runs
/// before the hole scan because both can hold at once near the goal.
pub fn evaluate(pos: Vec2, grid: &OccupancyGrid) -> Verdict {
    if pos.x > X_MAX || pos.x < X_MIN || pos.y < Y_MIN || pos.y > Y_MAX {
        if pos.x >= GOAL_POCKET_X && pos.y <= GOAL_POCKET_Y {
            return Verdict::Won;
        }
        return Verdict::Lost;
    }
    if pos == GOAL_CORNER {
        return Verdict::Won;
    }
    for hole in grid.holes() {
        let center = hole.center();
        if (center.x - pos.x).abs() < STEP && (center.y - pos.y).abs() < STEP {
            return Verdict::Lost;
        }
    }
    Verdict::InPlay
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridmaze_common::Cell;

    fn empty_grid() -> OccupancyGrid {
        OccupancyGrid::with_holes(&[])
    }

    #[test]
    fn goal_corner_wins() {
        assert_eq!(evaluate(Vec2::new(9.5, -4.5), &empty_grid()), Verdict::Won);
    }

    #[test]
    fn pocket_exit_wins_despite_out_of_bounds() {
        // Past the right edge but inside the pocket region.
        assert_eq!(evaluate(Vec2::new(10.0, -4.5), &empty_grid()), Verdict::Won);
        // Below the bottom edge but inside the pocket region.
        assert_eq!(evaluate(Vec2::new(9.5, -5.0), &empty_grid()), Verdict::Won);
    }

    #[test]
    fn out_of_bounds_away_from_pocket_loses() {
        assert_eq!(evaluate(Vec2::new(0.5, 0.0), &empty_grid()), Verdict::Lost);
        assert_eq!(evaluate(Vec2::new(5.0, 5.0), &empty_grid()), Verdict::Lost);
        assert_eq!(evaluate(Vec2::new(10.0, 4.0), &empty_grid()), Verdict::Lost);
    }

    #[test]
    fn pocket_coordinates_inside_bounds_stay_in_play() {
        // (9.2, -4.3) satisfies the pocket inequalities but is still inside
        // the playable bounds, so the pocket exception never fires for it.
        assert_eq!(
            evaluate(Vec2::new(9.2, -4.3), &empty_grid()),
            Verdict::InPlay
        );
    }

    #[test]
    fn hole_proximity_loses_on_both_axes() {
        let grid = OccupancyGrid::with_holes(&[Cell::new(3, 4)]);
        assert_eq!(evaluate(Vec2::new(3.1, 4.1), &grid), Verdict::Lost);
        // Within range on one axis only is safe.
        assert_eq!(evaluate(Vec2::new(3.1, 2.0), &grid), Verdict::InPlay);
        assert_eq!(evaluate(Vec2::new(6.0, 4.1), &grid), Verdict::InPlay);
        // The check is exclusive at exactly STEP distance.
        assert_eq!(evaluate(Vec2::new(3.5, 4.5), &grid), Verdict::InPlay);
    }

    #[test]
    fn safe_interior_position_stays_in_play() {
        let grid = OccupancyGrid::with_holes(&[Cell::new(0, 0)]);
        assert_eq!(evaluate(Vec2::new(5.0, 0.0), &grid), Verdict::InPlay);
    }

    #[test]
    fn evaluation_is_idempotent() {
        let grid = OccupancyGrid::with_holes(&[Cell::new(2, 2)]);
        let pos = Vec2::new(5.0, 1.0);
        let first = evaluate(pos, &grid);
        for _ in 0..10 {
            assert_eq!(evaluate(pos, &grid), first);
        }
    }

    #[test]
    fn placing_is_always_safe() {
        for seed in 0..50 {
            let mut session = Session::new(seed);
            for _ in 0..5 {
                assert_eq!(session.advance_frame(), None);
            }
            assert_eq!(session.state(), RoundState::Placing);
            assert_eq!(session.token(), START_POS);
        }
    }

    #[test]
    fn first_move_enters_play() {
        let mut session = Session::new(7);
        session.apply(Action::MoveRight);
        assert_eq!(session.state(), RoundState::InPlay);
        assert_eq!(session.token(), START_POS + Vec2::new(STEP, 0.0));
    }

    #[test]
    fn movement_axes_match_key_mapping() {
        let mut session = Session::new(7);
        session.apply(Action::MoveUp);
        assert_eq!(session.token().y, START_POS.y - STEP);
        session.apply(Action::MoveDown);
        session.apply(Action::MoveDown);
        assert_eq!(session.token().y, START_POS.y + STEP);
    }

    #[test]
    fn camera_toggle_does_not_start_the_round() {
        let mut session = Session::new(7);
        assert!(!session.camera_alternate());
        session.apply(Action::ToggleCamera);
        assert!(session.camera_alternate());
        assert_eq!(session.state(), RoundState::Placing);
        session.apply(Action::ToggleCamera);
        assert!(!session.camera_alternate());
    }

    #[test]
    fn losing_rearms_and_regenerates() {
        let mut session = Session::new(7);
        let before = session.grid().clone();
        // One step left puts the token at x = 0, out of bounds.
        session.apply(Action::MoveLeft);
        let verdict = session.advance_frame();
        assert_eq!(verdict, Some(Verdict::Lost));
        assert_eq!(session.state(), RoundState::Placing);
        assert_eq!(session.token(), START_POS);
        assert_eq!(session.rounds_played(), 1);
        assert_ne!(*session.grid(), before);
    }

    #[test]
    fn verdict_reported_exactly_once() {
        let mut session = Session::new(7);
        session.apply(Action::MoveLeft);
        assert!(session.advance_frame().is_some());
        // The session is back in placing; further frames report nothing.
        assert_eq!(session.advance_frame(), None);
        assert_eq!(session.advance_frame(), None);
    }

    #[test]
    fn winning_run_reaches_the_goal_corner() {
        // Drive straight to (9.5, -4.5) on an empty board.
        let mut session = Session::new(7);
        session.grid = OccupancyGrid::with_holes(&[]);
        for _ in 0..18 {
            session.apply(Action::MoveRight);
            assert_eq!(session.advance_frame(), None);
        }
        for _ in 0..17 {
            session.apply(Action::MoveUp);
        }
        assert_eq!(session.token(), Vec2::new(9.5, -4.0));
        assert_eq!(session.advance_frame(), None);
        session.apply(Action::MoveUp);
        assert_eq!(session.advance_frame(), Some(Verdict::Won));
        assert_eq!(session.state(), RoundState::Placing);
    }

    #[test]
    fn tick_advances_every_frame_in_any_state() {
        let mut session = Session::new(7);
        session.advance_frame();
        session.apply(Action::MoveRight);
        session.advance_frame();
        assert_eq!(session.tick(), 2);
    }

    #[test]
    fn vibration_offset_is_bounded() {
        let mut session = Session::new(7);
        for _ in 0..720 {
            session.advance_frame();
            assert!(session.vibration_offset().abs() <= 0.004 + 1e-6);
        }
    }

    #[test]
    fn sessions_with_same_seed_match() {
        let a = Session::new(123);
        let b = Session::new(123);
        assert_eq!(a.grid(), b.grid());
    }

    #[test]
    fn summary_reflects_state() {
        let mut session = Session::new(7);
        session.apply(Action::MoveRight);
        session.advance_frame();
        let summary = session.summary();
        assert_eq!(summary.state, RoundState::InPlay);
        assert_eq!(summary.tick, 1);
        let text = summary.to_string();
        assert!(text.contains("in play"));
    }
}
