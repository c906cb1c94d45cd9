//! Registry usage example
//!
//! Demonstrates per-resource console loggers, level overrides and a global
//! level source cascading to every logger without an override.
//!
//! Run with: cargo run --example registry_usage

use log_registry::prelude::*;
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Log Registry - Registry Example ===\n");

    let global = Emitter::<LogLevel>::new();
    let registry = LoggerRegistry::builder()
        .config(&LogConfig::from_env())
        .level_source(&global)
        .factory(ConsoleLoggerFactory)
        .build();

    let _changes = registry.on_did_change_level(Arc::new(|change: &LevelChange| {
        println!("   (level of {} is now {})", change.key, change.level);
    }));

    let main = registry.create_logger("output://main", &LoggerOptions::new().name("main"), None)?;
    let git = registry.create_logger("output://git", &LoggerOptions::new().name("git"), None)?;

    println!("1. Both loggers follow the global level ({}):", registry.global_level());
    main.info("main ready", &[]);
    git.info("git ready", &[]);

    println!("\n2. Override git to error:");
    registry.set_level("output://git", LogLevel::Error);
    git.info("git info (hidden)", &[]);

    println!("\n3. Global level to trace, git keeps its override:");
    global.fire(&LogLevel::Trace);
    main.trace("main trace (visible)", &[]);
    git.debug("git debug (hidden)", &[]);

    registry.dispose()?;
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
