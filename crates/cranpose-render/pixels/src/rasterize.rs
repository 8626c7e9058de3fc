//! Off-screen rasterization of layout elements.

use crate::canvas::BitmapCanvas;
use cranpose_ui_graphics::{ImageBitmap, ImageBitmapError, Rect, Size};
use cranpose_ui_layout::{Constraints, LayoutElement};

#[derive(Debug, Clone, PartialEq)]
pub enum RasterizeError {
    /// The element measured to a size that cannot back a bitmap.
    InvalidSize { width: f32, height: f32 },
    Bitmap(ImageBitmapError),
}

impl std::fmt::Display for RasterizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RasterizeError::InvalidSize { width, height } => {
                write!(f, "element measured to unusable size {width}x{height}")
            }
            RasterizeError::Bitmap(err) => write!(f, "bitmap allocation failed: {err}"),
        }
    }
}

impl std::error::Error for RasterizeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RasterizeError::Bitmap(err) => Some(err),
            RasterizeError::InvalidSize { .. } => None,
        }
    }
}

impl From<ImageBitmapError> for RasterizeError {
    fn from(err: ImageBitmapError) -> Self {
        RasterizeError::Bitmap(err)
    }
}

/// Measures `element` under `constraints`, places it at the origin and
/// draws it into a bitmap of exactly the measured size.
pub fn rasterize(
    element: &mut dyn LayoutElement,
    constraints: Constraints,
) -> Result<ImageBitmap, RasterizeError> {
    let measured = element.measure(constraints);
    let (width, height) = constraints.constrain(measured.width, measured.height);
    if !width.is_finite() || !height.is_finite() || width < 1.0 || height < 1.0 {
        return Err(RasterizeError::InvalidSize { width, height });
    }
    let size = Size::new(width.ceil(), height.ceil());
    element.place(Rect::from_size(size));

    let mut bitmap = ImageBitmap::new(size.width as u32, size.height as u32)?;
    element.draw(&mut BitmapCanvas::new(&mut bitmap));
    log::debug!(
        "rasterized element into {}x{} bitmap",
        bitmap.width(),
        bitmap.height()
    );
    Ok(bitmap)
}

#[cfg(test)]
#[path = "tests/rasterize_tests.rs"]
mod tests;
