//! Log level definitions and the gating rule shared by every logger

use super::error::{LoggerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Level every logger starts at unless configured otherwise.
pub const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

/// Ordinal logging severity.
///
/// Lower ordinals are more verbose. `Off` sits at ordinal zero but never takes
/// part in the ordering used for gating: a logger set to `Off` emits nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[derive(Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off = 0,
    Trace = 1,
    Debug = 2,
    #[default]
    Info = 3,
    #[serde(rename = "warn")]
    Warning = 4,
    #[serde(alias = "critical")]
    Error = 5,
}

impl LogLevel {
    /// All levels in ordinal order.
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Off,
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warning,
        LogLevel::Error,
    ];

    /// Canonical lowercase name, the inverse of [`parse_log_level`].
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warn",
            LogLevel::Error => "error",
        }
    }

    /// Fixed-width uppercase tag used by the text sinks
    pub fn tag(&self) -> &'static str {
        match self {
            LogLevel::Off => "OFF",
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::Off => White,
            LogLevel::Trace => BrightBlack,
            LogLevel::Debug => Blue,
            LogLevel::Info => Green,
            LogLevel::Warning => Yellow,
            LogLevel::Error => Red,
        }
    }
}

/// Decide whether a message at `message_level` passes a logger at `current`.
///
/// `always` bypasses the comparison entirely.
#[inline]
pub fn should_log(current: LogLevel, message_level: LogLevel, always: bool) -> bool {
    always || (current != LogLevel::Off && current <= message_level)
}

/// Parse a level name, case-insensitively. `critical` aliases to `Error`.
///
/// Returns `None` for anything unrecognized; callers fall back to a default.
pub fn parse_log_level(s: &str) -> Option<LogLevel> {
    match s.trim().to_ascii_lowercase().as_str() {
        "trace" => Some(LogLevel::Trace),
        "debug" => Some(LogLevel::Debug),
        "info" => Some(LogLevel::Info),
        "warn" => Some(LogLevel::Warning),
        "error" | "critical" => Some(LogLevel::Error),
        "off" => Some(LogLevel::Off),
        _ => None,
    }
}

/// Render a raw level ordinal, rejecting values outside the enumeration.
pub fn level_to_string(ordinal: u8) -> Result<&'static str> {
    LogLevel::try_from(ordinal).map(|level| level.as_str())
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        parse_log_level(s).ok_or_else(|| LoggerError::config("LogLevel", format!("unknown level '{}'", s)))
    }
}

impl TryFrom<u8> for LogLevel {
    type Error = LoggerError;

    fn try_from(value: u8) -> std::result::Result<Self, LoggerError> {
        LogLevel::ALL
            .get(value as usize)
            .copied()
            .ok_or(LoggerError::InvalidLevel(value))
    }
}
