use crate::view::SceneView;
use gridmaze_common::{BOARD_SIZE, Cell};
use gridmaze_kernel::Session;

/// Renderer-agnostic interface. Backends read session state and a view,
/// then produce output; they never mutate the session.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame from the given session state and view.
    fn render(&self, session: &Session, view: &SceneView) -> Self::Output;
}

/// Text renderer for headless output and tests.
///
/// Draws the board as ASCII: `#` for solid cells, `.` for holes, with a
/// state line and the token position. Rows run top to bottom.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, session: &Session, view: &SceneView) -> String {
        let mut out = String::new();
        out.push_str(&format!("=== {} ===\n", session.summary()));
        out.push_str(&format!(
            "Camera: eye=({:.1}, {:.1}, {:.1}) fov={:.0}\n",
            view.eye.x, view.eye.y, view.eye.z, view.fov_degrees
        ));
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                out.push(if session.grid().is_occupied(Cell::new(row, col)) {
                    '#'
                } else {
                    '.'
                });
            }
            out.push('\n');
        }
        out
    }
}
