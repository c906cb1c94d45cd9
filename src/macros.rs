//! Logging macros for ergonomic call sites.
//!
//! Each macro takes a logger, a message, and any number of arguments. The
//! arguments are converted with [`LogArg::from`](crate::LogArg) and joined to
//! the message with single spaces.
//!
//! # Examples
//!
//! ```
//! use log_registry::prelude::*;
//! use log_registry::info;
//!
//! let sink = MemorySink::new();
//! let logger = FilteringLogger::new(sink.clone(), LogLevel::Info);
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With arguments
//! let port = 8080;
//! info!(logger, "Server listening on port", port);
//!
//! assert_eq!(sink.messages(), vec!["Server started", "Server listening on port 8080"]);
//! ```

/// Log at an explicit level.
///
/// # Examples
///
/// ```
/// # use log_registry::prelude::*;
/// # let logger = NullLogger::new();
/// use log_registry::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code:", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $message:expr $(, $arg:expr)* $(,)?) => {
        $crate::core::logger::log(
            &$logger,
            $level,
            ::core::convert::AsRef::<str>::as_ref(&$message),
            &[$($crate::LogArg::from($arg)),*],
        )
    };
}

/// Log a trace-level message.
///
/// # Examples
///
/// ```
/// # use log_registry::prelude::*;
/// # let logger = NullLogger::new();
/// use log_registry::trace;
/// trace!(logger, "Entering function: calculate()");
/// trace!(logger, "Variable value:", 42);
/// ```
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use log_registry::prelude::*;
/// # let logger = NullLogger::new();
/// use log_registry::warn;
/// warn!(logger, "Low disk space");
/// warn!(logger, "Retry attempt", 3, "of", 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}
