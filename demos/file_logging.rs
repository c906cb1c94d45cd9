//! File logging example
//!
//! Demonstrates a file-backed registry multiplexed with the console.
//!
//! Run with: cargo run --example file_logging

use log_registry::prelude::*;
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Log Registry - File Logging Example ===\n");

    let log_dir = std::env::temp_dir().join("log_registry_demo");
    let registry = LoggerRegistry::new(LogLevel::Debug, FileLoggerFactory::new(&log_dir));

    let file = registry.create_logger("app.log", &LoggerOptions::default(), None)?;
    let console: Arc<dyn Logger> = Arc::new(FilteringLogger::new(ConsoleSink::new(), LogLevel::Info));
    let both = MultiplexLogger::new(vec![file, console]);

    both.debug("written to the file only", &[]);
    both.info("written to file and console", &[LogArg::structured(&["a", "b"])]);
    both.flush()?;

    println!("\nLog written to {}", log_dir.join("app.log").display());

    registry.dispose()?;
    Ok(())
}
