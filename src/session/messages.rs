//! Unified messaging system for session operations

use crate::environment::Environment;

// ANSI Color Codes for session messages
pub const COLOR_INFO: &str = "\x1b[1;36m"; // Bold Cyan
pub const COLOR_SUCCESS: &str = "\x1b[1;32m"; // Bold Green
pub const COLOR_RESET: &str = "\x1b[0m";

/// Session-specific message types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionMessage {
    /// Normal session start/shutdown messages
    Info(String),
    /// Success messages for completed operations
    Success(String),
}

impl SessionMessage {
    pub fn info(msg: impl Into<String>) -> Self {
        Self::Info(msg.into())
    }

    pub fn success(msg: impl Into<String>) -> Self {
        Self::Success(msg.into())
    }

    pub fn render(&self) -> String {
        match self {
            Self::Info(msg) => format!("{}[INFO]{} {}", COLOR_INFO, COLOR_RESET, msg),
            Self::Success(msg) => format!("{}[SUCCESS]{} {}", COLOR_SUCCESS, COLOR_RESET, msg),
        }
    }

    pub fn print(&self) {
        println!("{}", self.render());
    }
}

pub fn print_session_starting(environment: &Environment) {
    SessionMessage::info(format!(
        "Starting vendor dashboard against {}",
        environment.api_url()
    ))
    .print();
}

pub fn print_session_shutdown(pending_requests: usize) {
    if pending_requests > 0 {
        SessionMessage::info(format!(
            "Shutting down, abandoning {} in-flight request(s)...",
            pending_requests
        ))
        .print();
    } else {
        SessionMessage::info("Shutting down...").print();
    }
}

pub fn print_session_exit_success() {
    SessionMessage::success("KiaKart vendor dashboard exited successfully").print();
}
