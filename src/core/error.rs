//! Error types for the logging facade

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Level ordinal outside the defined enumeration
    #[error("Invalid log level ordinal: {0}")]
    InvalidLevel(u8),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// A sink failed to write, flush or close
    #[error("Sink '{sink}' failed: {message}")]
    SinkError { sink: String, message: String },

    /// A member of a fan-out panicked
    #[error("Logger #{index} panicked: {message}")]
    MemberPanicked { index: usize, message: String },

    /// Operation on a disposed logger or registry
    #[error("Logger already disposed")]
    Disposed,
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a sink error
    pub fn sink(sink: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::SinkError {
            sink: sink.into(),
            message: message.into(),
        }
    }

    /// Create an error for a member that panicked during a fan-out
    pub fn member_panicked(index: usize, message: impl Into<String>) -> Self {
        LoggerError::MemberPanicked {
            index,
            message: message.into(),
        }
    }
}

/// Extract a printable message from a `catch_unwind` payload
pub(crate) fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}
