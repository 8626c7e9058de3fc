//! Headless Cranpose demo: a contact list decorated with even spacing and
//! sticky letter headers, rendered frame by frame into pixels.

pub mod contacts;
pub mod frame;

pub use contacts::ContactList;
pub use frame::{ascii_preview, render_frame};
