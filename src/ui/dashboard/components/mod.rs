//! Dashboard component modules

pub mod info_panel;
pub mod logs;
pub mod metrics;
pub mod recent_orders;
