//! Closure-backed sink for forwarding lines to another system

use crate::core::{LogLevel, Result, Sink};

/// Adapts `FnMut(LogLevel, &str) -> Result<()>` into a [`Sink`]
pub struct AdapterSink<F> {
    name: String,
    write: F,
}

impl<F> AdapterSink<F>
where
    F: FnMut(LogLevel, &str) -> Result<()> + Send,
{
    pub fn new(name: impl Into<String>, write: F) -> Self {
        Self {
            name: name.into(),
            write,
        }
    }
}

impl<F> Sink for AdapterSink<F>
where
    F: FnMut(LogLevel, &str) -> Result<()> + Send,
{
    fn write(&mut self, level: LogLevel, message: &str) -> Result<()> {
        (self.write)(level, message)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
