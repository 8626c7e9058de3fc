use crate::draw::{blit, fill_rect};
use cranpose_ui_graphics::{Color, DrawScope, ImageBitmap, Point, Rect, Size};
use std::rc::Rc;

/// A [`DrawScope`] that paints straight into an [`ImageBitmap`].
///
/// Drawing is clipped to the bitmap. Image offsets are rounded to whole pixels.
pub struct BitmapCanvas<'a> {
    target: &'a mut ImageBitmap,
}

impl<'a> BitmapCanvas<'a> {
    pub fn new(target: &'a mut ImageBitmap) -> Self {
        Self { target }
    }

    pub fn clear(&mut self, color: Color) {
        let rgba = color.to_rgba_u8();
        for chunk in self.target.pixels_mut().chunks_exact_mut(4) {
            chunk.copy_from_slice(&rgba);
        }
    }
}

impl DrawScope for BitmapCanvas<'_> {
    fn size(&self) -> Size {
        self.target.size().into()
    }

    fn draw_rect_at(&mut self, rect: Rect, color: Color) {
        fill_rect(self.target, rect, color);
    }

    fn draw_image(&mut self, image: &Rc<ImageBitmap>, top_left: Point) {
        blit(
            self.target,
            image,
            top_left.x.round() as i32,
            top_left.y.round() as i32,
        );
    }
}

#[cfg(test)]
#[path = "tests/canvas_tests.rs"]
mod tests;
