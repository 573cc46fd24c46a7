//! Chrome shared by every signed-in screen

pub mod banner;
pub mod confirm;
pub mod footer;
pub mod header;
