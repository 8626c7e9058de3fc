//! Contract for elements that can be measured, placed and drawn outside a
//! composition, e.g. to rasterize them once and reuse the pixels.

use crate::constraints::Constraints;
use cranpose_ui_graphics::{DrawScope, Rect, Size};

pub trait LayoutElement {
    /// Measures the element under `constraints` and returns the chosen size.
    fn measure(&mut self, constraints: Constraints) -> Size;

    /// Positions the element. Called after [`LayoutElement::measure`].
    fn place(&mut self, bounds: Rect);

    /// Draws the element relative to its placed bounds.
    fn draw(&self, scope: &mut dyn DrawScope);
}
