//! Assertion utilities for decoration tests
//!
//! Helpers to pull drawn headers out of a recorded frame and to check the
//! gaps a spacing decoration produced between laid out cells.

use cranpose_decoration::ListChild;
use cranpose_ui_graphics::{DrawPrimitive, DrawScopeDefault, IntSize, Point};

/// An image recorded by a [`DrawScopeDefault`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawnImage {
    pub top_left: Point,
    pub size: IntSize,
}

/// Images drawn into `scope`, in draw order.
pub fn drawn_images(scope: &DrawScopeDefault) -> Vec<DrawnImage> {
    scope
        .primitives()
        .iter()
        .filter_map(|primitive| match primitive {
            DrawPrimitive::Image { image, top_left } => Some(DrawnImage {
                top_left: *top_left,
                size: image.size(),
            }),
            DrawPrimitive::Rect { .. } => None,
        })
        .collect()
}

/// Assert that an image of `height` was drawn with its top edge at `y`.
pub fn assert_image_at(images: &[DrawnImage], x: f32, y: f32, height: i32, msg: &str) {
    assert!(
        images
            .iter()
            .any(|image| image.top_left == Point::new(x, y) && image.size.height == height),
        "{}: no {}px image at ({}, {}) in {:?}",
        msg,
        height,
        x,
        y,
        images
    );
}

/// Assert that consecutive children are separated by exactly `gap` pixels
/// along the vertical axis.
pub fn assert_vertical_gaps(children: &[ListChild], gap: i32, msg: &str) {
    for pair in children.windows(2) {
        let actual = pair[1].bounds.top - pair[0].bounds.bottom;
        assert_eq!(
            actual, gap,
            "{}: gap between positions {} and {}",
            msg, pair[0].layout_position, pair[1].layout_position
        );
    }
}

/// Assert that consecutive children in one row are separated by `gap`
/// pixels, allowing `tolerance` for truncated insets.
pub fn assert_horizontal_gaps(row: &[ListChild], gap: i32, tolerance: i32, msg: &str) {
    for pair in row.windows(2) {
        let actual = pair[1].bounds.left - pair[0].bounds.right;
        assert!(
            (actual - gap).abs() <= tolerance,
            "{}: expected {} (±{}) between positions {} and {}, got {}",
            msg,
            gap,
            tolerance,
            pair[0].layout_position,
            pair[1].layout_position,
            actual
        );
    }
}
