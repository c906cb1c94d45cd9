//! Sink implementations

pub mod adapter;
#[cfg(feature = "console")]
pub mod console;
#[cfg(feature = "file")]
pub mod file;
pub mod memory;

pub use adapter::AdapterSink;
#[cfg(feature = "console")]
pub use console::{ConsoleLoggerFactory, ConsoleSink};
#[cfg(feature = "file")]
pub use file::{FileLoggerFactory, FileSink};
pub use memory::MemorySink;

pub use crate::core::Sink;
