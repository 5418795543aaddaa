//! Screen state for the two front-end views.
//!
//! Each screen owns its state and its data source; handlers take `&mut self`
//! so nothing is shared between screen instances.

mod beeste;
mod selector;

pub use beeste::{BeesForm, BeesteScreen, LoadState, Overlay};
pub use selector::TypeSelector;
