//! Per-pixel compositing into RGBA8 frames.

use cranpose_ui_graphics::{Color, ImageBitmap, IntRect, Rect};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ClipBounds {
    pub(crate) min_x: i32,
    pub(crate) min_y: i32,
    pub(crate) max_x: i32,
    pub(crate) max_y: i32,
}

/// Clips `rect` to the frame, rounding outward to whole pixels.
pub(crate) fn clip_rect_to_bounds(rect: Rect, width: u32, height: u32) -> Option<ClipBounds> {
    let min_x = rect.x.max(0.0);
    let min_y = rect.y.max(0.0);
    let max_x = (rect.x + rect.width).min(width as f32);
    let max_y = (rect.y + rect.height).min(height as f32);

    if max_x <= min_x || max_y <= min_y {
        return None;
    }

    let min_x = (min_x.floor() as i32).clamp(0, width as i32);
    let min_y = (min_y.floor() as i32).clamp(0, height as i32);
    let max_x = (max_x.ceil() as i32).clamp(0, width as i32);
    let max_y = (max_y.ceil() as i32).clamp(0, height as i32);

    if min_x >= max_x || min_y >= max_y {
        return None;
    }

    Some(ClipBounds {
        min_x,
        min_y,
        max_x,
        max_y,
    })
}

/// Source-over blend of a straight-alpha `src` onto `dst`.
pub(crate) fn blend_pixel(dst: &mut [u8], src: [f32; 4]) {
    let alpha = src[3];
    if alpha <= 0.0 {
        return;
    }
    for i in 0..3 {
        let existing = dst[i] as f32 / 255.0;
        let blended = src[i] * alpha + existing * (1.0 - alpha);
        dst[i] = (blended.clamp(0.0, 1.0) * 255.0).round() as u8;
    }
    let dst_alpha = dst[3] as f32 / 255.0;
    let out_alpha = alpha + dst_alpha * (1.0 - alpha);
    dst[3] = (out_alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
}

pub(crate) fn fill_rect(target: &mut ImageBitmap, rect: Rect, color: Color) {
    let width = target.width();
    let Some(bounds) = clip_rect_to_bounds(rect, width, target.height()) else {
        return;
    };
    let sample = color.to_array();
    let frame = target.pixels_mut();
    for py in bounds.min_y..bounds.max_y {
        for px in bounds.min_x..bounds.max_x {
            let idx = ((py as u32 * width + px as u32) * 4) as usize;
            blend_pixel(&mut frame[idx..idx + 4], sample);
        }
    }
}

/// Composites `image` onto `target` with its top-left corner at `(x, y)`.
pub(crate) fn blit(target: &mut ImageBitmap, image: &ImageBitmap, x: i32, y: i32) {
    let frame_rect = IntRect::new(0, 0, target.width() as i32, target.height() as i32);
    let image_rect = IntRect::from_origin_size(x, y, image.size());
    let Some(visible) = frame_rect.intersect(&image_rect) else {
        return;
    };
    let width = target.width();
    let src_width = image.width();
    let src = image.pixels();
    let frame = target.pixels_mut();
    for py in visible.top..visible.bottom {
        for px in visible.left..visible.right {
            let sx = (px - x) as u32;
            let sy = (py - y) as u32;
            let src_idx = ((sy * src_width + sx) * 4) as usize;
            let sample = [
                src[src_idx] as f32 / 255.0,
                src[src_idx + 1] as f32 / 255.0,
                src[src_idx + 2] as f32 / 255.0,
                src[src_idx + 3] as f32 / 255.0,
            ];
            let idx = ((py as u32 * width + px as u32) * 4) as usize;
            blend_pixel(&mut frame[idx..idx + 4], sample);
        }
    }
}
