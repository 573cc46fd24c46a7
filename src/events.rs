//! Event System
//!
//! Activity log entries produced while handling request outcomes

use crate::error_classifier::LogLevel;
use crate::logging::should_log_with_env;
use chrono::Local;
use std::fmt::Display;

/// Area of the dashboard an event belongs to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Topic {
    Session,
    Products,
    Orders,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub topic: Topic,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    pub fn new(topic: Topic, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            topic,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn success(topic: Topic, msg: impl Into<String>) -> Self {
        Self::new(topic, msg.into(), EventType::Success, LogLevel::Info)
    }

    pub fn refresh(topic: Topic, msg: impl Into<String>) -> Self {
        Self::new(topic, msg.into(), EventType::Refresh, LogLevel::Debug)
    }

    pub fn error(topic: Topic, msg: impl Into<String>, log_level: LogLevel) -> Self {
        Self::new(topic, msg.into(), EventType::Error, log_level)
    }

    pub fn should_display(&self) -> bool {
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}: {}",
            self.event_type, self.timestamp, self.topic, self.msg
        )
    }
}
