/// Direction in which a list lays out and scrolls its cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Cells are placed left to right; the list scrolls horizontally.
    Horizontal,

    /// Cells are placed top to bottom; the list scrolls vertically.
    #[default]
    Vertical,
}

impl Orientation {
    /// Returns true if this is the horizontal orientation.
    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Orientation::Horizontal)
    }

    /// Returns true if this is the vertical orientation.
    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, Orientation::Vertical)
    }
}
