//! What a list has to expose for decorations to work with it.

use cranpose_ui_graphics::{IntEdgeInsets, IntRect, IntSize};
use cranpose_ui_layout::{LayoutElement, LayoutStrategy};

/// A cell the list currently has laid out on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListChild {
    /// Index of the item in the data source.
    pub adapter_position: usize,
    /// Index of the item in the most recent layout pass. Differs from the
    /// adapter position only while data changes are still being applied.
    pub layout_position: usize,
    /// Current bounds relative to the list, including scroll.
    pub bounds: IntRect,
}

impl ListChild {
    /// A child whose adapter and layout positions agree.
    pub fn new(position: usize, bounds: IntRect) -> Self {
        Self {
            adapter_position: position,
            layout_position: position,
            bounds,
        }
    }
}

/// The list widget hosting decorations.
///
/// Children are reported in layout order; `child_at(0)` is the first visible cell.
pub trait ListHost {
    fn layout_strategy(&self) -> LayoutStrategy;

    /// Size the list measured itself to.
    fn measured_size(&self) -> IntSize;

    fn padding(&self) -> IntEdgeInsets {
        IntEdgeInsets::ZERO
    }

    fn child_count(&self) -> usize;

    fn child_at(&self, index: usize) -> Option<ListChild>;

    /// Sticky header capability of the list's data source, if it has one.
    fn sticky_support(&self) -> Option<&dyn StickySupport> {
        None
    }
}

/// Implemented by data sources whose items carry headers that stick to the
/// top of the viewport.
pub trait StickySupport {
    /// Whether the item at `position` starts a section and needs a header.
    fn is_sticky(&self, position: usize) -> bool;

    /// Builds the header element for the section starting at `position`.
    fn create_sticky_header(&self, position: usize) -> Box<dyn LayoutElement>;
}
