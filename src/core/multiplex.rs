//! Fan-out of one logical logger across several member loggers

use super::{
    error::{panic_message, LoggerError, Result},
    event::{Emitter, Listener, Subscription},
    format::LogArg,
    log_level::{LogLevel, DEFAULT_LOG_LEVEL},
    logger::{self, Logger},
};
use parking_lot::{ReentrantMutex, RwLock};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Run `op` on every logger in order, isolating errors and panics.
///
/// Every member is attempted. Failures are reported on stderr and the first
/// one is returned once all members were processed.
pub(crate) fn fan_out<'a, I, F>(loggers: I, op_name: &str, op: F) -> Result<()>
where
    I: IntoIterator<Item = &'a Arc<dyn Logger>>,
    F: Fn(&dyn Logger) -> Result<()>,
{
    let mut first_error = None;

    for (idx, logger) in loggers.into_iter().enumerate() {
        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| op(logger.as_ref())));

        let err = match outcome {
            Ok(Ok(())) => continue,
            Ok(Err(e)) => e,
            Err(panic_info) => LoggerError::member_panicked(idx, panic_message(panic_info.as_ref())),
        };

        eprintln!("[LOGGER ERROR] Logger #{} {} failed: {}", idx, op_name, err);
        first_error.get_or_insert(err);
    }

    first_error.map_or(Ok(()), Err)
}

/// Forwards every call to each member, in the order given at construction.
///
/// The multiplexer does no gating of its own: each member decides for itself
/// whether a message passes.
pub struct MultiplexLogger {
    loggers: Vec<Arc<dyn Logger>>,
    level: RwLock<LogLevel>,
    level_change: ReentrantMutex<()>,
    on_did_change_level: Emitter<LogLevel>,
    disposed: AtomicBool,
}

impl MultiplexLogger {
    /// The initial level is the first member's, or the default when empty
    pub fn new(loggers: Vec<Arc<dyn Logger>>) -> Self {
        let level = loggers.first().map_or(DEFAULT_LOG_LEVEL, |first| first.level());

        Self {
            loggers,
            level: RwLock::new(level),
            level_change: ReentrantMutex::new(()),
            on_did_change_level: Emitter::new(),
            disposed: AtomicBool::new(false),
        }
    }

    pub fn loggers(&self) -> &[Arc<dyn Logger>] {
        &self.loggers
    }

    pub fn len(&self) -> usize {
        self.loggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.is_empty()
    }
}

impl Logger for MultiplexLogger {
    fn level(&self) -> LogLevel {
        *self.level.read()
    }

    fn set_level(&self, level: LogLevel) {
        let _change = self.level_change.lock();
        let _ = fan_out(&self.loggers, "set_level", |member| {
            member.set_level(level);
            Ok(())
        });

        {
            let mut current = self.level.write();
            if *current == level {
                return;
            }
            *current = level;
        }
        self.on_did_change_level.fire(&level);
    }

    fn on_did_change_level(&self, listener: Listener<LogLevel>) -> Subscription {
        self.on_did_change_level.subscribe_arc(listener)
    }

    fn log(&self, level: LogLevel, message: &str, args: &[LogArg]) {
        if self.disposed.load(Ordering::Acquire) {
            return;
        }

        let _ = fan_out(&self.loggers, "write", |member| {
            logger::log(member, level, message, args);
            Ok(())
        });
    }

    fn flush(&self) -> Result<()> {
        fan_out(&self.loggers, "flush", |member| member.flush())
    }

    fn dispose(&self) -> Result<()> {
        if self.disposed.swap(true, Ordering::AcqRel) {
            return Ok(());
        }
        self.on_did_change_level.dispose();
        fan_out(&self.loggers, "dispose", |member| member.dispose())
    }
}
