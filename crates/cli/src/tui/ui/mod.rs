//! UI rendering modules.

mod contexts;
mod items;
mod layout;
mod status;

pub use layout::draw;
