//! wgpu render backend for the board demo.
//!
//! Renders the tile/slab board, boundary walls, and the token disc from a
//! pre-built draw list, using two fixed camera eye positions.
//!
//! # Invariants
//! - The renderer never mutates session state; it consumes draw commands.
//! - Draw-list order is preserved on the GPU: cuboid instances are uploaded
//!   in list order and the token disc is drawn last.

mod camera;
mod gpu;
mod shaders;

pub use camera::BoardCamera;
pub use gpu::WgpuRenderer;
pub use shaders::SCENE_SHADER;
