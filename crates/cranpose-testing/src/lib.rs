//! Testing utilities and harness for Cranpose list decorations

pub mod assertions;
pub mod elements;
pub mod list;

pub use assertions::{drawn_images, DrawnImage};
pub use elements::{SolidHeader, TestSections};
pub use list::TestList;

pub mod prelude {
    pub use crate::assertions::*;
    pub use crate::elements::{SolidHeader, TestSections};
    pub use crate::list::TestList;
}
