//! CLI command messaging system
//!
//! Consistent, colored status lines for the one-shot subcommands (login,
//! logout, listings). The TUI never prints through here.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Warn,
    Error,
    Success,
}

impl MessageKind {
    fn label(self) -> &'static str {
        match self {
            MessageKind::Info => "INFO",
            MessageKind::Warn => "WARN",
            MessageKind::Error => "ERROR",
            MessageKind::Success => "SUCCESS",
        }
    }

    fn color(self) -> &'static str {
        match self {
            MessageKind::Info => "\x1b[1;33m",
            MessageKind::Warn => "\x1b[1;91m",
            MessageKind::Error => "\x1b[1;31m",
            MessageKind::Success => "\x1b[1;32m",
        }
    }
}

const RESET: &str = "\x1b[0m";

/// `[LABEL] title` followed by the details, tab separated, when present.
pub fn format_message(kind: MessageKind, title: &str, details: &str) -> String {
    let mut line = format!("{}[{}]{} {}", kind.color(), kind.label(), RESET, title);
    if !details.is_empty() {
        line.push_str("\t ");
        line.push_str(details);
    }
    line
}

pub fn print_info(title: &str, details: &str) {
    println!("{}", format_message(MessageKind::Info, title, details));
}

pub fn print_warn(title: &str, details: &str) {
    eprintln!("{}", format_message(MessageKind::Warn, title, details));
}

/// Errors go to stderr so listings piped elsewhere stay clean.
pub fn print_error(title: &str, details: Option<&str>) {
    eprintln!(
        "{}",
        format_message(MessageKind::Error, title, details.unwrap_or_default())
    );
}

pub fn print_success(title: &str, details: &str) {
    println!("{}", format_message(MessageKind::Success, title, details));
}

#[macro_export]
macro_rules! print_cmd_info {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_info($title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_warn {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_warn($title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_error {
    ($title:expr) => {
        $crate::cli_messages::print_error($title, None)
    };
    ($title:expr, $($details:tt)+) => {
        $crate::cli_messages::print_error($title, Some(&format!($($details)+)))
    };
}

#[macro_export]
macro_rules! print_cmd_success {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_success($title, &format!($($details)*))
    };
}
