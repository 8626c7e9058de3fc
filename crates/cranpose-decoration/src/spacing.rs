//! Even spacing between list cells.

use crate::decoration::ItemDecoration;
use crate::host::{ListChild, ListHost};
use cranpose_ui_graphics::{Dp, IntEdgeInsets};
use cranpose_ui_layout::{LayoutStrategy, Orientation};

/// Spaces cells evenly for linear, grid and staggered grid layouts.
///
/// Gaps between neighbouring cells and gaps at the outer edges of the list
/// all equal `space` pixels. Inner edges are shared between the two cells
/// that meet there, so neither cell gets the full amount on its own. Unknown
/// layout strategies get `space` on every side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpaceItemDecoration {
    space: i32,
}

impl SpaceItemDecoration {
    pub fn new(space: i32) -> Self {
        Self { space }
    }

    /// Spacing given in density-independent pixels, rounded to whole pixels.
    pub fn from_dp(space: Dp, density: f32) -> Self {
        Self::new(space.round_to_px(density))
    }

    pub fn space(&self) -> i32 {
        self.space
    }

    /// Insets for `child` under `strategy`.
    ///
    /// Grids index by adapter position, linear lists by layout position.
    pub fn offsets_for(&self, strategy: LayoutStrategy, child: &ListChild) -> IntEdgeInsets {
        match strategy {
            LayoutStrategy::Grid { .. } | LayoutStrategy::StaggeredGrid { .. } => {
                self.grid_offsets(child.adapter_position, strategy.span_count())
            }
            LayoutStrategy::Linear { orientation } => {
                self.linear_offsets(child.layout_position, orientation)
            }
            LayoutStrategy::Other => IntEdgeInsets::uniform(self.space),
        }
    }

    fn grid_offsets(&self, position: usize, span_count: usize) -> IntEdgeInsets {
        let span_count = span_count.max(1);
        let column = position % span_count;
        let row = position / span_count;
        // Each column boundary is split so the two sides add up to `space`.
        let average = self.space as f32 / span_count as f32;

        IntEdgeInsets {
            left: ((span_count - column) as f32 * average) as i32,
            top: if row == 0 { self.space } else { 0 },
            right: ((column + 1) as f32 * average) as i32,
            bottom: self.space,
        }
    }

    fn linear_offsets(&self, position: usize, orientation: Orientation) -> IntEdgeInsets {
        let space = self.space;
        let half = space / 2;
        let is_first = position == 0;
        let is_vertical = orientation.is_vertical();
        let is_horizontal = orientation.is_horizontal();

        IntEdgeInsets {
            left: if is_vertical || is_first { space } else { half },
            top: if is_horizontal || is_first { space } else { half },
            right: if is_vertical { space } else { half },
            bottom: if is_horizontal { space } else { half },
        }
    }
}

impl ItemDecoration for SpaceItemDecoration {
    fn item_offsets(&mut self, child: &ListChild, host: &dyn ListHost) -> IntEdgeInsets {
        self.offsets_for(host.layout_strategy(), child)
    }
}

#[cfg(test)]
#[path = "tests/spacing_tests.rs"]
mod tests;
