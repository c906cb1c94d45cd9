//! Single-logger convenience wrapper

use super::{
    error::Result,
    event::{Listener, Subscription},
    format::LogArg,
    log_level::LogLevel,
    logger::Logger,
};
use std::error::Error as StdError;

/// Owns one logger and forwards every call to it unchanged.
///
/// Lets a call site depend on the [`Logger`] contract without knowing
/// whether a registry is involved. The change event is the wrapped logger's.
pub struct LogService {
    logger: Box<dyn Logger>,
}

impl LogService {
    pub fn new(logger: impl Logger + 'static) -> Self {
        Self {
            logger: Box::new(logger),
        }
    }

    pub fn from_boxed(logger: Box<dyn Logger>) -> Self {
        Self { logger }
    }

    pub fn inner(&self) -> &dyn Logger {
        self.logger.as_ref()
    }
}

impl Logger for LogService {
    fn level(&self) -> LogLevel {
        self.logger.level()
    }

    fn set_level(&self, level: LogLevel) {
        self.logger.set_level(level);
    }

    fn on_did_change_level(&self, listener: Listener<LogLevel>) -> Subscription {
        self.logger.on_did_change_level(listener)
    }

    fn log(&self, level: LogLevel, message: &str, args: &[LogArg]) {
        self.logger.log(level, message, args);
    }

    fn trace(&self, message: &str, args: &[LogArg]) {
        self.logger.trace(message, args);
    }

    fn debug(&self, message: &str, args: &[LogArg]) {
        self.logger.debug(message, args);
    }

    fn info(&self, message: &str, args: &[LogArg]) {
        self.logger.info(message, args);
    }

    fn warn(&self, message: &str, args: &[LogArg]) {
        self.logger.warn(message, args);
    }

    fn error(&self, message: &str, args: &[LogArg]) {
        self.logger.error(message, args);
    }

    fn error_report(&self, error: &(dyn StdError + 'static), args: &[LogArg]) {
        self.logger.error_report(error, args);
    }

    fn flush(&self) -> Result<()> {
        self.logger.flush()
    }

    fn dispose(&self) -> Result<()> {
        self.logger.dispose()
    }
}
