pub mod messages;
pub mod setup;
pub mod state;
pub mod tui_mode;

pub use setup::{SessionData, setup_session};
pub use state::{Session, SessionState};
pub use tui_mode::run_tui_mode;
