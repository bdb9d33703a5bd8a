//! Presentation layer
//!
//! `scene` turns game state into a `Frame` display list; `canvas` (wasm only)
//! replays it on the browser's 2D context.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod frame;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use frame::{DrawCmd, Frame, Glow, Rgba, colors};
pub use scene::build_frame;
