//! Logger that holds messages until its real destination is known
//!
//! Useful during startup, before configuration has decided where output
//! goes: accepted lines are kept in memory and replayed, in order, once a
//! target is attached.

use super::{
    error::Result,
    event::{Emitter, Listener, Subscription},
    format::{format_message, LogArg},
    log_level::{should_log, LogLevel, DEFAULT_LOG_LEVEL},
    logger::{self, Logger},
};
use parking_lot::{Mutex, ReentrantMutex, RwLock};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

struct BufferState {
    buffer: Vec<(LogLevel, String)>,
    target: Option<Arc<dyn Logger>>,
}

pub struct BufferLogger {
    level: RwLock<LogLevel>,
    level_change: ReentrantMutex<()>,
    state: Mutex<BufferState>,
    on_did_change_level: Emitter<LogLevel>,
    disposed: AtomicBool,
}

impl BufferLogger {
    pub fn new(level: LogLevel) -> Self {
        Self {
            level: RwLock::new(level),
            level_change: ReentrantMutex::new(()),
            state: Mutex::new(BufferState {
                buffer: Vec::new(),
                target: None,
            }),
            on_did_change_level: Emitter::new(),
            disposed: AtomicBool::new(false),
        }
    }

    /// Attach the destination and replay everything buffered so far.
    ///
    /// Replay happens under the buffer's lock so concurrent writers cannot
    /// overtake older lines. A different target attached earlier is disposed.
    pub fn set_target(&self, target: Arc<dyn Logger>) -> Result<()> {
        let previous = {
            let mut state = self.state.lock();
            let buffered = std::mem::take(&mut state.buffer);
            for (level, line) in &buffered {
                logger::log(target.as_ref(), *level, line, &[]);
            }
            state
                .target
                .replace(Arc::clone(&target))
                .filter(|previous| !Arc::ptr_eq(previous, &target))
        };

        match previous {
            Some(previous) => previous.dispose(),
            None => Ok(()),
        }
    }

    pub fn buffered_len(&self) -> usize {
        self.state.lock().buffer.len()
    }

    fn target(&self) -> Option<Arc<dyn Logger>> {
        self.state.lock().target.clone()
    }
}

impl Default for BufferLogger {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_LEVEL)
    }
}

impl Logger for BufferLogger {
    fn level(&self) -> LogLevel {
        *self.level.read()
    }

    fn set_level(&self, level: LogLevel) {
        let _change = self.level_change.lock();
        if let Some(target) = self.target() {
            target.set_level(level);
        }

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

        let mut state = self.state.lock();
        let target = state.target.clone();
        match target {
            Some(target) => {
                drop(state);
                logger::log(target.as_ref(), level, message, args);
            }
            None => {
                if should_log(self.level(), level, false) {
                    state.buffer.push((level, format_message(message, args)));
                }
            }
        }
    }

    fn flush(&self) -> Result<()> {
        match self.target() {
            Some(target) => target.flush(),
            None => Ok(()),
        }
    }

    fn dispose(&self) -> Result<()> {
        if self.disposed.swap(true, Ordering::AcqRel) {
            return Ok(());
        }
        self.on_did_change_level.dispose();

        let target = {
            let mut state = self.state.lock();
            state.buffer.clear();
            state.target.take()
        };
        match target {
            Some(target) => target.dispose(),
            None => Ok(()),
        }
    }
}
