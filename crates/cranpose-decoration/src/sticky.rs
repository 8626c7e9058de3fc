//! Sticky section headers drawn over a list.
//!
//! Headers are rasterized once per sticky position and cached. Every frame
//! each cached header is drawn just above the cell it belongs to, and the
//! header of the section the first visible cell is in is pinned to the top of
//! the viewport. When the next section's cell scrolls up underneath the
//! pinned header, the pinned header is pushed up by the overlap so the two
//! never draw on top of each other.
//!
//! The cache only knows positions. Call [`StickyItemDecoration::invalidate`]
//! whenever the list's data changes; until then the draw pass keeps using the
//! headers it already has, even for positions the data source no longer
//! reports as sticky.

use crate::collections::map::HashMap;
use crate::decoration::ItemDecoration;
use crate::host::{ListChild, ListHost, StickySupport};
use cranpose_render_pixels::{rasterize, RasterizeError};
use cranpose_ui_graphics::{DrawScope, ImageBitmap, IntEdgeInsets, Point};
use cranpose_ui_layout::Constraints;
use std::rc::Rc;

#[derive(Default)]
pub struct StickyItemDecoration {
    sticky_bitmaps: HashMap<usize, Rc<ImageBitmap>>,
}

impl StickyItemDecoration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops every cached header. Call after the list's data changed.
    pub fn invalidate(&mut self) {
        log::debug!(
            "StickyItemDecoration: dropping {} cached headers",
            self.sticky_bitmaps.len()
        );
        self.sticky_bitmaps.clear();
    }

    pub fn cache_len(&self) -> usize {
        self.sticky_bitmaps.len()
    }

    /// Positions that currently have a header, ascending.
    pub fn cached_positions(&self) -> Vec<usize> {
        let mut positions: Vec<usize> = self.sticky_bitmaps.keys().copied().collect();
        positions.sort_unstable();
        positions
    }

    pub fn cached_bitmap(&self, position: usize) -> Option<&Rc<ImageBitmap>> {
        self.sticky_bitmaps.get(&position)
    }

    fn header_bitmap(
        &mut self,
        position: usize,
        support: &dyn StickySupport,
        host: &dyn ListHost,
    ) -> Result<Rc<ImageBitmap>, RasterizeError> {
        if let Some(bitmap) = self.sticky_bitmaps.get(&position) {
            return Ok(Rc::clone(bitmap));
        }

        let list_size = host.measured_size();
        let height_budget = list_size.height - host.padding().vertical_sum();
        let constraints =
            Constraints::fill_width_wrap_height(list_size.width as f32, height_budget as f32);
        let mut header = support.create_sticky_header(position);
        let bitmap = Rc::new(rasterize(header.as_mut(), constraints)?);
        log::debug!(
            "StickyItemDecoration: cached {}x{} header for position {}",
            bitmap.width(),
            bitmap.height(),
            position
        );
        self.sticky_bitmaps.insert(position, Rc::clone(&bitmap));
        Ok(bitmap)
    }

    /// Pins the header of the section the first visible cell belongs to.
    fn draw_closest_sticky_bitmap(&self, scope: &mut dyn DrawScope, host: &dyn ListHost) {
        let Some(first) = host.child_at(0) else {
            return;
        };
        let position = first.layout_position;
        // Nearest header at or before the first visible position.
        let Some(bitmap) = self
            .sticky_bitmaps
            .iter()
            .filter(|(candidate, _)| **candidate <= position)
            .max_by_key(|(candidate, _)| **candidate)
            .map(|(_, bitmap)| bitmap)
        else {
            return;
        };

        let bitmap_height = bitmap.height() as i32;
        let view_bottom = first.bounds.bottom;
        let has_next_bitmap = self.sticky_bitmaps.contains_key(&(position + 1));
        let top = if view_bottom <= bitmap_height && has_next_bitmap {
            view_bottom - bitmap_height
        } else {
            0
        };
        log::trace!(
            "StickyItemDecoration: pinned header for position {} at y={}",
            position,
            top
        );
        scope.draw_image(bitmap, Point::new(0.0, top as f32));
    }
}

impl ItemDecoration for StickyItemDecoration {
    fn item_offsets(&mut self, child: &ListChild, host: &dyn ListHost) -> IntEdgeInsets {
        let Some(support) = host.sticky_support() else {
            return IntEdgeInsets::ZERO;
        };
        let position = child.layout_position;
        if !support.is_sticky(position) {
            return IntEdgeInsets::ZERO;
        }
        match self.header_bitmap(position, support, host) {
            Ok(bitmap) => IntEdgeInsets::top(bitmap.height() as i32),
            Err(err) => {
                log::warn!("StickyItemDecoration: no header for position {position}: {err}");
                IntEdgeInsets::ZERO
            }
        }
    }

    fn draw_over(&mut self, scope: &mut dyn DrawScope, host: &dyn ListHost) {
        for index in 0..host.child_count() {
            let Some(child) = host.child_at(index) else {
                continue;
            };
            if let Some(bitmap) = self.sticky_bitmaps.get(&child.layout_position) {
                let top = child.bounds.top - bitmap.height() as i32;
                scope.draw_image(bitmap, Point::new(child.bounds.left as f32, top as f32));
            }
        }
        self.draw_closest_sticky_bitmap(scope, host);
    }
}

impl std::fmt::Debug for StickyItemDecoration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StickyItemDecoration")
            .field("cached_positions", &self.cached_positions())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/sticky_tests.rs"]
mod tests;
