//! Drawing contract shared by renderers and decorations

use crate::color::Color;
use crate::geometry::{Point, Rect, Size};
use crate::image::ImageBitmap;
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawPrimitive {
    Rect {
        rect: Rect,
        color: Color,
    },
    Image {
        image: Rc<ImageBitmap>,
        top_left: Point,
    },
}

pub trait DrawScope {
    fn size(&self) -> Size;
    /// Fills the whole scope.
    fn draw_rect(&mut self, color: Color) {
        let rect = Rect::from_size(self.size());
        self.draw_rect_at(rect, color);
    }
    /// Draws a rectangle at the specified position and size.
    fn draw_rect_at(&mut self, rect: Rect, color: Color);
    /// Draws `image` with its top-left corner at `top_left`. Negative offsets are allowed.
    fn draw_image(&mut self, image: &Rc<ImageBitmap>, top_left: Point);
}

/// Records primitives instead of painting them.
#[derive(Default)]
pub struct DrawScopeDefault {
    size: Size,
    primitives: Vec<DrawPrimitive>,
}

impl DrawScopeDefault {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            primitives: Vec::new(),
        }
    }

    pub fn primitives(&self) -> &[DrawPrimitive] {
        &self.primitives
    }

    pub fn into_primitives(self) -> Vec<DrawPrimitive> {
        self.primitives
    }
}

impl DrawScope for DrawScopeDefault {
    fn size(&self) -> Size {
        self.size
    }

    fn draw_rect_at(&mut self, rect: Rect, color: Color) {
        self.primitives.push(DrawPrimitive::Rect { rect, color });
    }

    fn draw_image(&mut self, image: &Rc<ImageBitmap>, top_left: Point) {
        self.primitives.push(DrawPrimitive::Image {
            image: Rc::clone(image),
            top_left,
        });
    }
}
