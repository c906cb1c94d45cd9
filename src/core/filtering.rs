//! Level-gated logger over a destination-specific sink
//!
//! [`FilteringLogger`] owns the level state, the `always` bypass and the
//! change event. Sinks only render lines that already passed the gate.

use super::{
    error::{panic_message, Result},
    event::{Emitter, Listener, Subscription},
    format::{format_message, LogArg},
    log_level::{should_log, LogLevel},
    logger::Logger,
    registry::LoggerOptions,
};
use parking_lot::{Mutex, ReentrantMutex, RwLock};
use std::sync::atomic::{AtomicBool, Ordering};

/// Destination for formatted log lines
pub trait Sink: Send {
    fn write(&mut self, level: LogLevel, message: &str) -> Result<()>;

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    /// Release held resources. Called once, on dispose.
    fn close(&mut self) -> Result<()> {
        self.flush()
    }

    fn name(&self) -> &str;
}

pub struct FilteringLogger<S: Sink> {
    level: RwLock<LogLevel>,
    level_change: ReentrantMutex<()>,
    always: bool,
    name: Option<String>,
    on_did_change_level: Emitter<LogLevel>,
    sink: Mutex<S>,
    disposed: AtomicBool,
}

impl<S: Sink> FilteringLogger<S> {
    pub fn new(sink: S, level: LogLevel) -> Self {
        Self {
            level: RwLock::new(level),
            level_change: ReentrantMutex::new(()),
            always: false,
            name: None,
            on_did_change_level: Emitter::new(),
            sink: Mutex::new(sink),
            disposed: AtomicBool::new(false),
        }
    }

    /// Build from registry options: `always` and `name` are taken from
    /// `options`, the remaining flags are the sink's concern.
    pub fn with_options(sink: S, level: LogLevel, options: &LoggerOptions) -> Self {
        let mut logger = Self::new(sink, level);
        logger.always = options.always;
        logger.name = options.name.clone();
        logger
    }

    /// Bypass level gating for every call
    #[must_use]
    pub fn always(mut self) -> Self {
        self.always = true;
        self
    }

    pub fn is_always(&self) -> bool {
        self.always
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::Acquire)
    }

    fn emit(&self, level: LogLevel, line: &str) {
        let mut sink = self.sink.lock();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| sink.write(level, line)));

        match result {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                eprintln!("[LOGGER ERROR] Sink '{}' failed: {}", sink.name(), e);
            }
            Err(panic_info) => {
                eprintln!(
                    "[LOGGER CRITICAL] Sink '{}' panicked: {}",
                    sink.name(),
                    panic_message(panic_info.as_ref())
                );
            }
        }
    }
}

impl<S: Sink> Logger for FilteringLogger<S> {
    fn level(&self) -> LogLevel {
        *self.level.read()
    }

    fn set_level(&self, level: LogLevel) {
        // held across the write and the fire so events arrive in write order
        let _change = self.level_change.lock();
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
        if self.is_disposed() || !should_log(self.level(), level, self.always) {
            return;
        }

        let line = format_message(message, args);
        self.emit(level, &line);
    }

    fn flush(&self) -> Result<()> {
        if self.is_disposed() {
            return Ok(());
        }
        self.sink.lock().flush()
    }

    fn dispose(&self) -> Result<()> {
        if self.disposed.swap(true, Ordering::AcqRel) {
            return Ok(());
        }
        self.on_did_change_level.dispose();
        self.sink.lock().close()
    }
}
