//! In-memory capture sink
//!
//! Records every line it receives. Clones share the same storage, so a test
//! can keep one handle while the logger owns another.

use crate::core::{LogLevel, Result, Sink};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, Default)]
struct Captured {
    lines: Vec<(LogLevel, String)>,
    flushes: usize,
    closes: usize,
}

#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    captured: Arc<Mutex<Captured>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<(LogLevel, String)> {
        self.captured.lock().lines.clone()
    }

    /// Captured messages without their levels
    pub fn messages(&self) -> Vec<String> {
        self.captured
            .lock()
            .lines
            .iter()
            .map(|(_, message)| message.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.captured.lock().lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn flush_count(&self) -> usize {
        self.captured.lock().flushes
    }

    pub fn close_count(&self) -> usize {
        self.captured.lock().closes
    }

    pub fn clear(&self) {
        self.captured.lock().lines.clear();
    }
}

impl Sink for MemorySink {
    fn write(&mut self, level: LogLevel, message: &str) -> Result<()> {
        self.captured.lock().lines.push((level, message.to_string()));
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.captured.lock().flushes += 1;
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.captured.lock().closes += 1;
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
