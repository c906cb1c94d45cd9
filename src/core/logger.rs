//! The logger contract shared by sinks, combinators and facades

use super::{
    error::Result,
    event::{Listener, Subscription},
    format::{format_error_report, LogArg},
    log_level::LogLevel,
};
use std::backtrace::Backtrace;
use std::error::Error as StdError;

/// Capability set every logger satisfies.
///
/// Implementors provide [`Logger::log`]; the per-level methods and
/// [`Logger::error_report`] are expressed in terms of it. Write methods never
/// fail: sink errors are reported on stderr and swallowed.
pub trait Logger: Send + Sync {
    fn level(&self) -> LogLevel;

    /// Change the level. Implementations fire the change event only when the
    /// value actually changes, after the new value is visible.
    fn set_level(&self, level: LogLevel);

    /// Observe level changes of this logger
    fn on_did_change_level(&self, listener: Listener<LogLevel>) -> Subscription;

    /// Route one message at `level`. Gating is the implementation's concern.
    fn log(&self, level: LogLevel, message: &str, args: &[LogArg]);

    fn trace(&self, message: &str, args: &[LogArg]) {
        self.log(LogLevel::Trace, message, args);
    }

    fn debug(&self, message: &str, args: &[LogArg]) {
        self.log(LogLevel::Debug, message, args);
    }

    fn info(&self, message: &str, args: &[LogArg]) {
        self.log(LogLevel::Info, message, args);
    }

    fn warn(&self, message: &str, args: &[LogArg]) {
        self.log(LogLevel::Warning, message, args);
    }

    fn error(&self, message: &str, args: &[LogArg]) {
        self.log(LogLevel::Error, message, args);
    }

    /// Log an error object at `Error` level, rendered with its cause chain.
    ///
    /// When backtraces are enabled (`RUST_BACKTRACE` or `RUST_LIB_BACKTRACE`)
    /// the trace of this call is appended.
    fn error_report(&self, error: &(dyn StdError + 'static), args: &[LogArg]) {
        let report = format_error_report(error, args, &Backtrace::capture());
        self.error(&report, &[]);
    }

    /// Request a synchronous-as-possible drain of buffered output
    fn flush(&self) -> Result<()> {
        Ok(())
    }

    /// Release the logger. Calling it more than once is harmless and a
    /// disposed logger emits nothing further.
    fn dispose(&self) -> Result<()>;
}

/// Dispatch to the write method matching `level`. `Off` writes nothing.
pub fn log(logger: &dyn Logger, level: LogLevel, message: &str, args: &[LogArg]) {
    match level {
        LogLevel::Off => {}
        LogLevel::Trace => logger.trace(message, args),
        LogLevel::Debug => logger.debug(message, args),
        LogLevel::Info => logger.info(message, args),
        LogLevel::Warning => logger.warn(message, args),
        LogLevel::Error => logger.error(message, args),
    }
}
