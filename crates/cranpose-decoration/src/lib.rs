//! Item decorations for Cranpose lists
//!
//! Two decorations are provided on top of the [`ListHost`] contract:
//!
//! - [`SpaceItemDecoration`] insets cells so every gap, inner or outer, equals
//!   one spacing value under linear, grid and staggered grid layouts.
//! - [`StickyItemDecoration`] draws section headers supplied through
//!   [`StickySupport`] and keeps the current one pinned to the viewport top.
//!
//! Several decorations can share one list through [`ItemDecorations`].

mod collections;
mod decoration;
mod host;
mod spacing;
mod sticky;

pub use decoration::{ItemDecoration, ItemDecorations};
pub use host::{ListChild, ListHost, StickySupport};
pub use spacing::SpaceItemDecoration;
pub use sticky::StickyItemDecoration;

pub mod prelude {
    pub use crate::decoration::{ItemDecoration, ItemDecorations};
    pub use crate::host::{ListChild, ListHost, StickySupport};
    pub use crate::spacing::SpaceItemDecoration;
    pub use crate::sticky::StickyItemDecoration;
}
