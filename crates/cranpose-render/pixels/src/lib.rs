//! Software pixel backend for Cranpose: paints draw calls into [`ImageBitmap`]s.
//!
//! [`ImageBitmap`]: cranpose_ui_graphics::ImageBitmap

mod canvas;
mod draw;
mod rasterize;

pub use canvas::BitmapCanvas;
pub use rasterize::{rasterize, RasterizeError};
