//! A headless list host that lays out fixed-extent cells.

use crate::elements::TestSections;
use cranpose_decoration::{ItemDecoration, ListChild, ListHost, StickySupport};
use cranpose_ui_graphics::{IntEdgeInsets, IntRect, IntSize};
use cranpose_ui_layout::{LayoutStrategy, Orientation};

/// Scriptable [`ListHost`].
///
/// Every cell has the same extent along the scroll axis and fills its lane
/// across it. [`TestList::layout`] runs a decoration's offsets the way a real
/// list would: insets grow the cell's slot and shift the cell inside it. Only
/// cells intersecting the viewport are kept as children.
#[derive(Debug)]
pub struct TestList {
    strategy: LayoutStrategy,
    size: IntSize,
    padding: IntEdgeInsets,
    item_count: usize,
    item_extent: i32,
    scroll: i32,
    sections: Option<TestSections>,
    children: Vec<ListChild>,
    offsets: Vec<IntEdgeInsets>,
}

impl TestList {
    pub fn new(strategy: LayoutStrategy, size: IntSize) -> Self {
        Self {
            strategy,
            size,
            padding: IntEdgeInsets::ZERO,
            item_count: 0,
            item_extent: 50,
            scroll: 0,
            sections: None,
            children: Vec::new(),
            offsets: Vec::new(),
        }
    }

    pub fn vertical(width: i32, height: i32) -> Self {
        Self::new(LayoutStrategy::vertical(), IntSize::new(width, height))
    }

    pub fn with_items(mut self, count: usize, extent: i32) -> Self {
        self.item_count = count;
        self.item_extent = extent;
        self
    }

    pub fn with_padding(mut self, padding: IntEdgeInsets) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_sections(mut self, sections: TestSections) -> Self {
        self.sections = Some(sections);
        self
    }

    pub fn sections(&self) -> Option<&TestSections> {
        self.sections.as_ref()
    }

    pub fn scroll_to(&mut self, scroll: i32) {
        self.scroll = scroll;
    }

    pub fn children(&self) -> &[ListChild] {
        &self.children
    }

    /// Offsets every item received in the last layout, by position.
    pub fn offsets(&self) -> &[IntEdgeInsets] {
        &self.offsets
    }

    pub fn child_for_position(&self, position: usize) -> Option<ListChild> {
        self.children
            .iter()
            .find(|child| child.layout_position == position)
            .copied()
    }

    /// Lays out every item with `decoration`'s offsets and keeps the visible ones.
    pub fn layout(&mut self, decoration: &mut dyn ItemDecoration) {
        let spans = self.strategy.span_count();
        let orientation = self.strategy.orientation().unwrap_or(Orientation::Vertical);
        let (main_extent, cross_extent) = match orientation {
            Orientation::Vertical => (self.size.height, self.size.width),
            Orientation::Horizontal => (self.size.width, self.size.height),
        };
        let lane = cross_extent / spans as i32;
        let item_extent = self.item_extent;

        let mut offsets = Vec::with_capacity(self.item_count);
        let mut slots = Vec::with_capacity(self.item_count);
        let mut cursor = -self.scroll;
        for row_start in (0..self.item_count).step_by(spans) {
            let row_end = (row_start + spans).min(self.item_count);
            let mut row_extent = 0;
            for position in row_start..row_end {
                let probe = ListChild::new(position, IntRect::default());
                let inset = decoration.item_offsets(&probe, &*self);
                let lane_index = (position - row_start) as i32;
                // Insets before and after the cell along the scroll axis, then across it.
                let (main_before, main_after, cross_before, cross_after) = match orientation {
                    Orientation::Vertical => (inset.top, inset.bottom, inset.left, inset.right),
                    Orientation::Horizontal => (inset.left, inset.right, inset.top, inset.bottom),
                };
                let main_start = cursor + main_before;
                let cross_start = lane_index * lane + cross_before;
                let cross_end = (lane_index + 1) * lane - cross_after;
                slots.push((position, main_start, cross_start, cross_end));
                row_extent = row_extent.max(main_before + item_extent + main_after);
                offsets.push(inset);
            }
            cursor += row_extent;
        }

        self.children = slots
            .into_iter()
            .map(|(position, main_start, cross_start, cross_end)| {
                let main_end = main_start + item_extent;
                let bounds = match orientation {
                    Orientation::Vertical => {
                        IntRect::new(cross_start, main_start, cross_end, main_end)
                    }
                    Orientation::Horizontal => {
                        IntRect::new(main_start, cross_start, main_end, cross_end)
                    }
                };
                ListChild::new(position, bounds)
            })
            .filter(|child| {
                let (start, end) = match orientation {
                    Orientation::Vertical => (child.bounds.top, child.bounds.bottom),
                    Orientation::Horizontal => (child.bounds.left, child.bounds.right),
                };
                end > 0 && start < main_extent
            })
            .collect();
        self.offsets = offsets;
    }
}

impl ListHost for TestList {
    fn layout_strategy(&self) -> LayoutStrategy {
        self.strategy
    }

    fn measured_size(&self) -> IntSize {
        self.size
    }

    fn padding(&self) -> IntEdgeInsets {
        self.padding
    }

    fn child_count(&self) -> usize {
        self.children.len()
    }

    fn child_at(&self, index: usize) -> Option<ListChild> {
        self.children.get(index).copied()
    }

    fn sticky_support(&self) -> Option<&dyn StickySupport> {
        self.sections.as_ref().map(|sections| sections as &dyn StickySupport)
    }
}
