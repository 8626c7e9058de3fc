//! A contact list grouped by first letter, laid out top to bottom.

use cranpose_decoration::{ItemDecoration, ListChild, ListHost, StickySupport};
use cranpose_ui_graphics::{Color, DrawScope, IntRect, IntSize, Rect, Size};
use cranpose_ui_layout::{Constraints, LayoutElement, LayoutStrategy};

pub const HEADER_HEIGHT: f32 = 24.0;
pub const HEADER_COLOR: Color = Color::from_rgb_u8(33, 150, 243);
pub const ROW_COLOR: Color = Color::from_rgb_u8(236, 239, 241);

pub struct ContactList {
    names: Vec<String>,
    size: IntSize,
    row_height: i32,
    scroll: i32,
    children: Vec<ListChild>,
}

impl ContactList {
    pub fn new(names: impl IntoIterator<Item = impl Into<String>>, size: IntSize) -> Self {
        let mut list = Self {
            names: Vec::new(),
            size,
            row_height: 40,
            scroll: 0,
            children: Vec::new(),
        };
        list.set_names(names);
        list
    }

    /// Replaces the data set. Sticky headers built for the old data must be
    /// invalidated by the caller.
    pub fn set_names(&mut self, names: impl IntoIterator<Item = impl Into<String>>) {
        self.names = names.into_iter().map(Into::into).collect();
        self.names.sort();
    }

    pub fn name(&self, position: usize) -> Option<&str> {
        self.names.get(position).map(String::as_str)
    }

    pub fn scroll_to(&mut self, scroll: i32) {
        self.scroll = scroll;
    }

    pub fn children(&self) -> &[ListChild] {
        &self.children
    }

    /// Lays out all rows with `decoration`'s offsets and keeps the visible ones.
    pub fn layout(&mut self, decoration: &mut dyn ItemDecoration) {
        let mut children = Vec::new();
        let mut cursor = -self.scroll;
        for position in 0..self.names.len() {
            let probe = ListChild::new(position, IntRect::default());
            let inset = decoration.item_offsets(&probe, &*self);
            let top = cursor + inset.top;
            let bounds = IntRect::new(
                inset.left,
                top,
                self.size.width - inset.right,
                top + self.row_height,
            );
            cursor = bounds.bottom + inset.bottom;
            if bounds.bottom > 0 && bounds.top < self.size.height {
                children.push(ListChild::new(position, bounds));
            }
        }
        log::debug!(
            "laid out {} rows, {} visible at scroll {}",
            self.names.len(),
            children.len(),
            self.scroll
        );
        self.children = children;
    }

    /// Whether `position` opens a new letter section.
    pub fn is_sticky_position(&self, position: usize) -> bool {
        if position >= self.names.len() {
            return false;
        }
        match position.checked_sub(1) {
            None => true,
            Some(previous) => self.initial(position) != self.initial(previous),
        }
    }

    fn initial(&self, position: usize) -> Option<char> {
        self.name(position)
            .and_then(|name| name.chars().next())
            .map(|c| c.to_ascii_uppercase())
    }
}

impl ListHost for ContactList {
    fn layout_strategy(&self) -> LayoutStrategy {
        LayoutStrategy::vertical()
    }

    fn measured_size(&self) -> IntSize {
        self.size
    }

    fn child_count(&self) -> usize {
        self.children.len()
    }

    fn child_at(&self, index: usize) -> Option<ListChild> {
        self.children.get(index).copied()
    }

    fn sticky_support(&self) -> Option<&dyn StickySupport> {
        Some(self)
    }
}

impl StickySupport for ContactList {
    fn is_sticky(&self, position: usize) -> bool {
        self.is_sticky_position(position)
    }

    fn create_sticky_header(&self, position: usize) -> Box<dyn LayoutElement> {
        Box::new(LetterHeader {
            letter: self.initial(position).unwrap_or('#'),
            size: Size::ZERO,
        })
    }
}

/// Full-width band announcing a letter section.
struct LetterHeader {
    letter: char,
    size: Size,
}

impl LayoutElement for LetterHeader {
    fn measure(&mut self, constraints: Constraints) -> Size {
        let (width, height) = constraints.constrain(constraints.max_width, HEADER_HEIGHT);
        Size::new(width, height)
    }

    fn place(&mut self, bounds: Rect) {
        self.size = Size::new(bounds.width, bounds.height);
    }

    fn draw(&self, scope: &mut dyn DrawScope) {
        scope.draw_rect(HEADER_COLOR);
        // A short white tick per letter index stands in for the glyph.
        let index = (self.letter as u32).saturating_sub('A' as u32) as f32;
        scope.draw_rect_at(
            Rect {
                x: 8.0,
                y: self.size.height / 2.0 - 2.0,
                width: 4.0 + index * 2.0,
                height: 4.0,
            },
            Color::WHITE,
        );
    }
}
