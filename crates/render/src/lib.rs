//! Rendering adapter: renderer-agnostic interface over session state.
//!
//! # Invariants
//! - Renderers only read session state; the kernel owns all mutation.
//! - Draw commands are emitted in a fixed order: tiles, slabs, walls, token.

mod draw;
mod renderer;
mod view;

pub use draw::{DrawCommand, ShapeKind, build_draw_list};
pub use renderer::{DebugTextRenderer, Renderer};
pub use view::SceneView;
