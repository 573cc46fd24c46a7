//! Dashboard screen
//!
//! Split into the stat cards, recent orders, vendor info and activity log

pub mod components;
pub mod renderer;

pub use renderer::render_dashboard;
