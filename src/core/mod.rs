//! Core logger contract, level policy, combinators and the registry

pub mod buffer;
pub mod config;
pub mod error;
pub mod event;
pub mod facade;
pub mod filtering;
pub mod format;
pub mod log_level;
pub mod logger;
pub mod multiplex;
pub mod null;
pub mod registry;
pub mod resource;

pub use buffer::BufferLogger;
pub use config::LogConfig;
pub use error::{LoggerError, Result};
pub use event::{Emitter, Listener, Subscription};
pub use facade::LogService;
pub use filtering::{FilteringLogger, Sink};
pub use format::{format_error, format_error_report, format_message, LogArg};
pub use log_level::{level_to_string, parse_log_level, should_log, LogLevel, DEFAULT_LOG_LEVEL};
pub use logger::{log, Logger};
pub use multiplex::MultiplexLogger;
pub use null::{NullLogger, NullLoggerFactory};
pub use registry::{LevelChange, LoggerFactory, LoggerOptions, LoggerRegistry, RegistryBuilder};
pub use resource::ResourceKey;
