//! Pure math/data for drawing & units in Cranpose
//!
//! This crate contains geometry primitives, colors, pixel buffers, the
//! drawing contract and unit types that are used throughout the Cranpose
//! framework.

mod color;
mod draw;
mod geometry;
mod image;
mod unit;

pub use color::*;
pub use draw::*;
pub use geometry::*;
pub use image::*;
pub use unit::*;

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::draw::{DrawPrimitive, DrawScope, DrawScopeDefault};
    pub use crate::geometry::{EdgeInsets, IntEdgeInsets, IntRect, IntSize, Point, Rect, Size};
    pub use crate::image::ImageBitmap;
    pub use crate::unit::Dp;
}
