//! Header elements and sticky data sources for tests.

use cranpose_decoration::StickySupport;
use cranpose_ui_graphics::{Color, DrawScope, Rect, Size};
use cranpose_ui_layout::{Constraints, LayoutElement};
use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;

/// Header that fills the offered width with one color and wraps a fixed height.
#[derive(Clone, Debug)]
pub struct SolidHeader {
    height: f32,
    color: Color,
}

impl SolidHeader {
    pub fn new(height: f32, color: Color) -> Self {
        Self { height, color }
    }
}

impl LayoutElement for SolidHeader {
    fn measure(&mut self, constraints: Constraints) -> Size {
        let (width, height) = constraints.constrain(constraints.max_width, self.height);
        Size::new(width, height)
    }

    fn place(&mut self, _bounds: Rect) {}

    fn draw(&self, scope: &mut dyn DrawScope) {
        scope.draw_rect(self.color);
    }
}

/// Sticky data source with a mutable set of section starts.
///
/// Counts how many headers it had to build so tests can tell cache hits
/// from rasterizations.
#[derive(Debug)]
pub struct TestSections {
    starts: RefCell<BTreeSet<usize>>,
    header_height: f32,
    header_color: Color,
    created: Cell<usize>,
}

impl TestSections {
    pub fn new(starts: impl IntoIterator<Item = usize>, header_height: f32) -> Self {
        Self {
            starts: RefCell::new(starts.into_iter().collect()),
            header_height,
            header_color: Color::BLUE,
            created: Cell::new(0),
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.header_color = color;
        self
    }

    pub fn set_starts(&self, starts: impl IntoIterator<Item = usize>) {
        *self.starts.borrow_mut() = starts.into_iter().collect();
    }

    /// Number of headers built so far.
    pub fn created(&self) -> usize {
        self.created.get()
    }
}

impl StickySupport for TestSections {
    fn is_sticky(&self, position: usize) -> bool {
        self.starts.borrow().contains(&position)
    }

    fn create_sticky_header(&self, _position: usize) -> Box<dyn LayoutElement> {
        self.created.set(self.created.get() + 1);
        Box::new(SolidHeader::new(self.header_height, self.header_color))
    }
}
