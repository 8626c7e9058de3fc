//! Layout strategies a list can use to arrange its cells

use crate::axis::Orientation;

/// How a list arranges its cells.
///
/// Decorations branch on this to decide which inset formula applies. Span
/// counts are always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutStrategy {
    /// A single row or column of cells.
    Linear { orientation: Orientation },
    /// Uniform rows of `span_count` columns.
    Grid { span_count: usize },
    /// Variable-height cells spread over `span_count` lanes.
    StaggeredGrid {
        span_count: usize,
        orientation: Orientation,
    },
    /// A strategy decorations know nothing about.
    Other,
}

impl LayoutStrategy {
    pub const fn linear(orientation: Orientation) -> Self {
        LayoutStrategy::Linear { orientation }
    }

    pub const fn vertical() -> Self {
        Self::linear(Orientation::Vertical)
    }

    pub const fn horizontal() -> Self {
        Self::linear(Orientation::Horizontal)
    }

    /// Grid with `span_count` columns; zero is treated as one.
    pub fn grid(span_count: usize) -> Self {
        LayoutStrategy::Grid {
            span_count: sanitize_span_count(span_count),
        }
    }

    /// Staggered grid with `span_count` lanes; zero is treated as one.
    pub fn staggered_grid(span_count: usize, orientation: Orientation) -> Self {
        LayoutStrategy::StaggeredGrid {
            span_count: sanitize_span_count(span_count),
            orientation,
        }
    }

    /// Number of columns (or lanes). Linear and unknown strategies report one.
    pub fn span_count(&self) -> usize {
        match *self {
            LayoutStrategy::Grid { span_count }
            | LayoutStrategy::StaggeredGrid { span_count, .. } => span_count.max(1),
            LayoutStrategy::Linear { .. } | LayoutStrategy::Other => 1,
        }
    }

    pub fn orientation(&self) -> Option<Orientation> {
        match *self {
            LayoutStrategy::Linear { orientation }
            | LayoutStrategy::StaggeredGrid { orientation, .. } => Some(orientation),
            LayoutStrategy::Grid { .. } => Some(Orientation::Vertical),
            LayoutStrategy::Other => None,
        }
    }

    pub fn is_grid(&self) -> bool {
        matches!(self, LayoutStrategy::Grid { .. } | LayoutStrategy::StaggeredGrid { .. })
    }
}

fn sanitize_span_count(span_count: usize) -> usize {
    if span_count == 0 {
        log::warn!("LayoutStrategy: span count 0 is invalid, using 1");
        1
    } else {
        span_count
    }
}

#[cfg(test)]
#[path = "tests/strategy_tests.rs"]
mod tests;
