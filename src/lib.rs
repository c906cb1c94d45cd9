//! # Log Registry
//!
//! A leveled logging facade with a resource-keyed logger registry.
//!
//! ## Features
//!
//! - **One Gating Rule**: every logger filters through [`should_log`]
//! - **Registry**: lazily created loggers per resource, per-key overrides,
//!   and a global level cascading to every logger without one
//! - **Multiplexing**: fan one logical logger out to several sinks
//! - **Change Events**: synchronous, ordered level-change notification
//! - **Thread Safe**: every logger is `Send + Sync`

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    #[cfg(feature = "console")]
    pub use crate::sinks::{ConsoleLoggerFactory, ConsoleSink};
    #[cfg(feature = "file")]
    pub use crate::sinks::{FileLoggerFactory, FileSink};
    pub use crate::sinks::{AdapterSink, MemorySink};
    pub use crate::core::{
        BufferLogger, Emitter, FilteringLogger, LevelChange, Listener, LogArg, LogConfig,
        LogLevel, LogService, Logger, LoggerError, LoggerFactory, LoggerOptions, LoggerRegistry,
        MultiplexLogger, NullLogger, NullLoggerFactory, RegistryBuilder, ResourceKey, Result,
        Sink, Subscription, DEFAULT_LOG_LEVEL,
    };
}

#[cfg(feature = "console")]
pub use crate::sinks::{ConsoleLoggerFactory, ConsoleSink};
#[cfg(feature = "file")]
pub use crate::sinks::{FileLoggerFactory, FileSink};
pub use crate::sinks::{AdapterSink, MemorySink};
pub use crate::core::{
    format_error, format_error_report, format_message, level_to_string, parse_log_level,
    should_log, BufferLogger, Emitter, FilteringLogger, LevelChange, Listener, LogArg, LogConfig,
    LogLevel, LogService, Logger, LoggerError, LoggerFactory, LoggerOptions, LoggerRegistry,
    MultiplexLogger, NullLogger, NullLoggerFactory, RegistryBuilder, ResourceKey, Result, Sink,
    Subscription, DEFAULT_LOG_LEVEL,
};
