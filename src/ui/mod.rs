// Module declarations
mod app;
pub mod components;
pub mod dashboard;
pub mod input;
mod login;
mod orders;
mod product_form;
mod products;
pub mod splash;
pub mod utils;

// Re-exports for external use
pub use app::{App, UIConfig, run};
