//! Basic logger usage example
//!
//! Demonstrates a console logger, level gating and the logging macros.
//!
//! Run with: cargo run --example basic_usage

use log_registry::prelude::*;
use log_registry::{info, warn};

fn main() -> Result<()> {
    println!("=== Log Registry - Basic Usage Example ===\n");

    let logger = LogService::new(FilteringLogger::new(ConsoleSink::new(), LogLevel::Trace));

    // Log messages at different levels
    println!("1. Logging at different levels:");
    logger.trace("This is a trace message", &[]);
    logger.debug("This is a debug message", &[]);
    logger.info("This is an info message", &[]);
    logger.warn("This is a warning message", &[]);
    logger.error("This is an error message", &[]);

    println!("\n2. Logging with a higher level:");
    logger.set_level(LogLevel::Info);
    println!("   Level set to info - trace and debug won't show:");
    logger.trace("Trace message (hidden)", &[]);
    logger.debug("Debug message (hidden)", &[]);
    info!(logger, "Info message (visible) with args:", 42, true);
    warn!(logger, "Structured argument:", serde_json::json!({"retries": 3}));

    println!("\n3. Error objects:");
    let err = std::io::Error::new(std::io::ErrorKind::NotFound, "config.json missing");
    logger.error_report(&err, &[]);

    logger.dispose()?;
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
