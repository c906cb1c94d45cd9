//! Inert logger and factory

use super::{
    error::Result,
    event::{Listener, Subscription},
    format::LogArg,
    log_level::LogLevel,
    logger::Logger,
    registry::{LoggerFactory, LoggerOptions},
    resource::ResourceKey,
};
use std::sync::Arc;

/// Logger that writes nothing, always reports `Info` and never fires
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLogger;

impl NullLogger {
    pub fn new() -> Self {
        NullLogger
    }
}

impl Logger for NullLogger {
    fn level(&self) -> LogLevel {
        LogLevel::Info
    }

    fn set_level(&self, _level: LogLevel) {}

    fn on_did_change_level(&self, _listener: Listener<LogLevel>) -> Subscription {
        Subscription::empty()
    }

    fn log(&self, _level: LogLevel, _message: &str, _args: &[LogArg]) {}

    fn dispose(&self) -> Result<()> {
        Ok(())
    }
}

/// Factory building a [`NullLogger`] for every key
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLoggerFactory;

impl LoggerFactory for NullLoggerFactory {
    fn create_logger(
        &self,
        _key: &ResourceKey,
        _level: LogLevel,
        _options: &LoggerOptions,
    ) -> Result<Arc<dyn Logger>> {
        Ok(Arc::new(NullLogger))
    }
}
