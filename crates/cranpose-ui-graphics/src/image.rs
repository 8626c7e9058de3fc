//! Fixed-size RGBA8 pixel buffers

use crate::color::Color;
use crate::geometry::IntSize;

/// Largest edge accepted for a single bitmap, in pixels.
pub const MAX_BITMAP_DIMENSION: u32 = 16_384;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageBitmapError {
    Empty { width: u32, height: u32 },
    TooLarge { width: u32, height: u32 },
}

impl std::fmt::Display for ImageBitmapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageBitmapError::Empty { width, height } => {
                write!(f, "bitmap dimensions must be positive, got {width}x{height}")
            }
            ImageBitmapError::TooLarge { width, height } => write!(
                f,
                "bitmap {width}x{height} exceeds the {MAX_BITMAP_DIMENSION}px limit"
            ),
        }
    }
}

impl std::error::Error for ImageBitmapError {}

/// A rasterized image. Pixels are stored row-major, four bytes per pixel (RGBA).
#[derive(Clone, PartialEq, Eq)]
pub struct ImageBitmap {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl std::fmt::Debug for ImageBitmap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageBitmap")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl ImageBitmap {
    /// Allocates a fully transparent bitmap.
    pub fn new(width: u32, height: u32) -> Result<Self, ImageBitmapError> {
        if width == 0 || height == 0 {
            return Err(ImageBitmapError::Empty { width, height });
        }
        if width > MAX_BITMAP_DIMENSION || height > MAX_BITMAP_DIMENSION {
            return Err(ImageBitmapError::TooLarge { width, height });
        }
        Ok(Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 4],
        })
    }

    pub fn filled(width: u32, height: u32, color: Color) -> Result<Self, ImageBitmapError> {
        let mut bitmap = Self::new(width, height)?;
        let rgba = color.to_rgba_u8();
        for chunk in bitmap.pixels.chunks_exact_mut(4) {
            chunk.copy_from_slice(&rgba);
        }
        Ok(bitmap)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> IntSize {
        IntSize::new(self.width as i32, self.height as i32)
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Returns the RGBA bytes at `(x, y)`, or `None` outside the bitmap.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y * self.width + x) * 4) as usize;
        let mut out = [0; 4];
        out.copy_from_slice(&self.pixels[idx..idx + 4]);
        Some(out)
    }
}

#[cfg(test)]
#[path = "tests/image_tests.rs"]
mod tests;
