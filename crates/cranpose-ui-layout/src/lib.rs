//! Layout contracts for Cranpose lists and their decorations

mod axis;
mod constraints;
mod element;
mod strategy;

pub use axis::*;
pub use constraints::*;
pub use element::*;
pub use strategy::*;

pub mod prelude {
    pub use crate::axis::Orientation;
    pub use crate::constraints::Constraints;
    pub use crate::element::LayoutElement;
    pub use crate::strategy::LayoutStrategy;
}
