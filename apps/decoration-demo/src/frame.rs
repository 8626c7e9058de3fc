//! Renders one frame of a decorated list into pixels.

use crate::contacts::{ContactList, HEADER_COLOR, ROW_COLOR};
use cranpose_decoration::{ItemDecoration, ListHost};
use cranpose_render_pixels::BitmapCanvas;
use cranpose_ui_graphics::{Color, DrawScope, ImageBitmap, ImageBitmapError, Rect};

const BACKGROUND: Color = Color::WHITE;

pub fn render_frame(
    list: &ContactList,
    decoration: &mut dyn ItemDecoration,
) -> Result<ImageBitmap, ImageBitmapError> {
    let size = list.measured_size();
    let mut frame = ImageBitmap::new(size.width.max(0) as u32, size.height.max(0) as u32)?;
    let mut canvas = BitmapCanvas::new(&mut frame);
    canvas.clear(BACKGROUND);
    decoration.draw(&mut canvas, list);
    for child in list.children() {
        canvas.draw_rect_at(Rect::from(child.bounds), ROW_COLOR);
    }
    decoration.draw_over(&mut canvas, list);
    Ok(frame)
}

/// Downsamples `frame` into text: `#` header, `=` row, blank background.
pub fn ascii_preview(frame: &ImageBitmap, step: u32) -> String {
    let step = step.max(1);
    let header = HEADER_COLOR.to_rgba_u8();
    let row = ROW_COLOR.to_rgba_u8();
    let mut out = String::new();
    for y in (0..frame.height()).step_by(step as usize) {
        for x in (0..frame.width()).step_by(step as usize) {
            let glyph = match frame.pixel(x, y) {
                Some(pixel) if pixel == header => '#',
                Some(pixel) if pixel == row => '=',
                _ => ' ',
            };
            out.push(glyph);
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
#[path = "tests/frame_tests.rs"]
mod tests;
