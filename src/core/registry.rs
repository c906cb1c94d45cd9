//! Resource-keyed logger registry with per-key level overrides
//!
//! The registry lazily creates one logger per [`ResourceKey`] through a
//! [`LoggerFactory`], tracks explicit per-key level overrides, and holds the
//! global level that every logger without an override follows.
//!
//! # Level resolution
//!
//! - A key with an override keeps that level across global changes.
//! - A key without an override is set to the global level whenever it changes.
//! - Setting a key to exactly the current global level deletes its override.
//!
//! # Example
//!
//! ```
//! use log_registry::prelude::*;
//! use std::sync::Arc;
//!
//! let global = Emitter::<LogLevel>::new();
//! let registry = LoggerRegistry::builder()
//!     .global_level(LogLevel::Info)
//!     .level_source(&global)
//!     .factory(|_key: &ResourceKey, level: LogLevel, options: &LoggerOptions| -> Result<Arc<dyn Logger>> {
//!         let logger = FilteringLogger::with_options(MemorySink::new(), level, options);
//!         Ok(Arc::new(logger) as Arc<dyn Logger>)
//!     })
//!     .build();
//!
//! let main = registry.create_logger("/logs/main.log", &LoggerOptions::default(), None).unwrap();
//! registry.set_level("/logs/main.log", LogLevel::Trace);
//! assert_eq!(main.level(), LogLevel::Trace);
//!
//! global.fire(&LogLevel::Error);
//! assert_eq!(main.level(), LogLevel::Trace);
//! ```

use super::{
    config::LogConfig,
    error::{LoggerError, Result},
    event::{Emitter, Listener, Subscription},
    log_level::{LogLevel, DEFAULT_LOG_LEVEL},
    logger::Logger,
    multiplex::fan_out,
    null::NullLoggerFactory,
    resource::ResourceKey,
};
use parking_lot::{Mutex, ReentrantMutex};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::{Arc, Weak};

/// Per-creation logger configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoggerOptions {
    /// Label shown by sinks next to each line
    pub name: Option<String>,
    /// Passed through to file-backed sinks
    pub donot_rotate: bool,
    /// Plain output without colors or decorations
    pub donot_use_formatters: bool,
    /// Emit every call regardless of level
    pub always: bool,
}

impl LoggerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods return a new value"]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn donot_rotate(mut self, donot_rotate: bool) -> Self {
        self.donot_rotate = donot_rotate;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn donot_use_formatters(mut self, donot_use_formatters: bool) -> Self {
        self.donot_use_formatters = donot_use_formatters;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn always(mut self, always: bool) -> Self {
        self.always = always;
        self
    }
}

/// Builds the concrete logger for a key on first use
pub trait LoggerFactory: Send + Sync {
    fn create_logger(
        &self,
        key: &ResourceKey,
        level: LogLevel,
        options: &LoggerOptions,
    ) -> Result<Arc<dyn Logger>>;
}

impl<F> LoggerFactory for F
where
    F: Fn(&ResourceKey, LogLevel, &LoggerOptions) -> Result<Arc<dyn Logger>> + Send + Sync,
{
    fn create_logger(
        &self,
        key: &ResourceKey,
        level: LogLevel,
        options: &LoggerOptions,
    ) -> Result<Arc<dyn Logger>> {
        self(key, level, options)
    }
}

/// A per-key level change, fired by [`LoggerRegistry::set_level`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelChange {
    pub key: ResourceKey,
    pub level: LogLevel,
}

struct Entry {
    logger: Arc<dyn Logger>,
    name: Option<String>,
}

struct RegistryState {
    loggers: HashMap<ResourceKey, Entry>,
    /// Creation order, used for every fan-out
    order: Vec<ResourceKey>,
    overrides: HashMap<ResourceKey, LogLevel>,
    global_level: LogLevel,
    disposed: bool,
}

struct RegistryInner {
    // Reentrant: observers run inside the critical section and may call back.
    // RefCell borrows are never held across calls into loggers or observers.
    state: ReentrantMutex<RefCell<RegistryState>>,
    factory: Box<dyn LoggerFactory>,
    on_did_change_level: Emitter<LevelChange>,
}

impl RegistryInner {
    fn set_global_log_level(&self, level: LogLevel) {
        let guard = self.state.lock();

        let followers: Vec<Arc<dyn Logger>> = {
            let mut state = guard.borrow_mut();
            state.global_level = level;
            state
                .order
                .iter()
                .filter(|key| !state.overrides.contains_key(*key))
                .filter_map(|key| state.loggers.get(key))
                .map(|entry| Arc::clone(&entry.logger))
                .collect()
        };

        let _ = fan_out(&followers, "set_level", |logger| {
            logger.set_level(level);
            Ok(())
        });
    }
}

pub struct LoggerRegistry {
    inner: Arc<RegistryInner>,
    level_source: Mutex<Option<Subscription>>,
}

impl LoggerRegistry {
    pub fn new(global_level: LogLevel, factory: impl LoggerFactory + 'static) -> Self {
        Self::with_boxed_factory(global_level, Box::new(factory))
    }

    fn with_boxed_factory(global_level: LogLevel, factory: Box<dyn LoggerFactory>) -> Self {
        Self {
            inner: Arc::new(RegistryInner {
                state: ReentrantMutex::new(RefCell::new(RegistryState {
                    loggers: HashMap::new(),
                    order: Vec::new(),
                    overrides: HashMap::new(),
                    global_level,
                    disposed: false,
                })),
                factory,
                on_did_change_level: Emitter::new(),
            }),
            level_source: Mutex::new(None),
        }
    }

    /// A registry whose loggers are all inert
    pub fn null() -> Self {
        Self::new(DEFAULT_LOG_LEVEL, NullLoggerFactory)
    }

    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Follow an external global-level stream for the registry's lifetime.
    ///
    /// Replaces any previous source. The subscription only holds a weak
    /// reference back to the registry and is dropped on [`dispose`](Self::dispose).
    pub fn follow_level_source(&self, source: &Emitter<LogLevel>) {
        let weak: Weak<RegistryInner> = Arc::downgrade(&self.inner);
        let subscription = source.subscribe(move |level: &LogLevel| {
            if let Some(inner) = weak.upgrade() {
                inner.set_global_log_level(*level);
            }
        });
        *self.level_source.lock() = Some(subscription);
    }

    /// Return the logger for `key`, creating it on first use.
    ///
    /// The first creation wins: later calls return the same logger whatever
    /// options or level they pass. A new logger starts at `Trace` when
    /// `options.always` is set, otherwise at `level_override`, the key's
    /// recorded override, or the global level, in that order. A supplied
    /// `level_override` is recorded as the key's override.
    pub fn create_logger(
        &self,
        key: impl Into<ResourceKey>,
        options: &LoggerOptions,
        level_override: Option<LogLevel>,
    ) -> Result<Arc<dyn Logger>> {
        let key = key.into();
        let guard = self.inner.state.lock();

        let (level, recorded) = {
            let state = guard.borrow();
            if state.disposed {
                return Err(LoggerError::Disposed);
            }
            if let Some(entry) = state.loggers.get(&key) {
                return Ok(Arc::clone(&entry.logger));
            }

            if options.always {
                (LogLevel::Trace, None)
            } else {
                match level_override {
                    Some(level) => (level, Some(level)),
                    None => (
                        state.overrides.get(&key).copied().unwrap_or(state.global_level),
                        None,
                    ),
                }
            }
        };

        let logger = self.inner.factory.create_logger(&key, level, options)?;

        // the factory may have registered this key re-entrantly; keep that logger
        let existing = guard.borrow().loggers.get(&key).map(|entry| Arc::clone(&entry.logger));
        if let Some(existing) = existing {
            let _ = logger.dispose();
            return Ok(existing);
        }

        let mut state = guard.borrow_mut();
        if let Some(level) = recorded {
            state.overrides.insert(key.clone(), level);
        }
        state.loggers.insert(
            key.clone(),
            Entry {
                logger: Arc::clone(&logger),
                name: options.name.clone(),
            },
        );
        state.order.push(key);

        Ok(logger)
    }

    /// Look up an existing logger without creating one
    pub fn get_logger(&self, key: impl Into<ResourceKey>) -> Option<Arc<dyn Logger>> {
        let key = key.into();
        let guard = self.inner.state.lock();
        let state = guard.borrow();
        state.loggers.get(&key).map(|entry| Arc::clone(&entry.logger))
    }

    /// Set the level for one key.
    ///
    /// No-op when `level` already matches the key's recorded override, or the
    /// key has no override and `level` is the global level. Setting the
    /// global level removes the override. An existing logger is updated
    /// immediately and a [`LevelChange`] fires once.
    pub fn set_level(&self, key: impl Into<ResourceKey>, level: LogLevel) {
        let key = key.into();
        let guard = self.inner.state.lock();

        let logger = {
            let mut state = guard.borrow_mut();
            if state.disposed {
                return;
            }

            let unchanged = match state.overrides.get(&key) {
                Some(current) => *current == level,
                None => level == state.global_level,
            };
            if unchanged {
                return;
            }

            if level == state.global_level {
                state.overrides.remove(&key);
            } else {
                state.overrides.insert(key.clone(), level);
            }
            state.loggers.get(&key).map(|entry| Arc::clone(&entry.logger))
        };

        if let Some(logger) = logger {
            logger.set_level(level);
        }
        self.inner.on_did_change_level.fire(&LevelChange { key, level });
    }

    /// The key's override, or `None` when it follows the global level
    pub fn get_log_level(&self, key: impl Into<ResourceKey>) -> Option<LogLevel> {
        let key = key.into();
        let guard = self.inner.state.lock();
        let state = guard.borrow();
        state.overrides.get(&key).copied()
    }

    /// Snapshot of every override, sorted by key
    pub fn log_levels(&self) -> Vec<(ResourceKey, LogLevel)> {
        let guard = self.inner.state.lock();
        let state = guard.borrow();
        let mut levels: Vec<_> = state
            .overrides
            .iter()
            .map(|(key, level)| (key.clone(), *level))
            .collect();
        levels.sort();
        levels
    }

    pub fn global_level(&self) -> LogLevel {
        let guard = self.inner.state.lock();
        let level = guard.borrow().global_level;
        level
    }

    /// Apply a new global level to every logger without an override.
    ///
    /// Normally driven by the source given to
    /// [`follow_level_source`](Self::follow_level_source). Does not fire the
    /// registry's own change event.
    pub fn set_global_log_level(&self, level: LogLevel) {
        self.inner.set_global_log_level(level);
    }

    /// Created keys, in creation order
    pub fn keys(&self) -> Vec<ResourceKey> {
        let guard = self.inner.state.lock();
        let keys = guard.borrow().order.clone();
        keys
    }

    /// The `name` option the key's logger was created with
    pub fn logger_name(&self, key: impl Into<ResourceKey>) -> Option<String> {
        let key = key.into();
        let guard = self.inner.state.lock();
        let state = guard.borrow();
        state.loggers.get(&key).and_then(|entry| entry.name.clone())
    }

    pub fn len(&self) -> usize {
        let guard = self.inner.state.lock();
        let len = guard.borrow().loggers.len();
        len
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Observe per-key level changes
    #[must_use = "dropping the subscription unsubscribes the listener"]
    pub fn on_did_change_level(&self, listener: Listener<LevelChange>) -> Subscription {
        self.inner.on_did_change_level.subscribe_arc(listener)
    }

    /// Dispose every created logger, then forget all keys and overrides.
    ///
    /// All loggers are attempted; the first failure is returned. Later calls
    /// find nothing to do.
    pub fn dispose(&self) -> Result<()> {
        self.level_source.lock().take();

        let guard = self.inner.state.lock();
        let loggers: Vec<Arc<dyn Logger>> = {
            let mut state = guard.borrow_mut();
            state.disposed = true;
            state
                .order
                .iter()
                .filter_map(|key| state.loggers.get(key))
                .map(|entry| Arc::clone(&entry.logger))
                .collect()
        };

        let result = fan_out(&loggers, "dispose", |logger| logger.dispose());

        {
            let mut state = guard.borrow_mut();
            state.loggers.clear();
            state.order.clear();
            state.overrides.clear();
        }
        self.inner.on_did_change_level.dispose();

        result
    }
}

/// Builder for constructing a [`LoggerRegistry`] with a fluent API
pub struct RegistryBuilder {
    global_level: LogLevel,
    level_source: Option<Emitter<LogLevel>>,
    factory: Option<Box<dyn LoggerFactory>>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self {
            global_level: DEFAULT_LOG_LEVEL,
            level_source: None,
            factory: None,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn global_level(mut self, level: LogLevel) -> Self {
        self.global_level = level;
        self
    }

    /// Take the initial global level from a resolved configuration
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: &LogConfig) -> Self {
        self.global_level = config.resolve_level();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn level_source(mut self, source: &Emitter<LogLevel>) -> Self {
        self.level_source = Some(source.clone());
        self
    }

    /// Sink construction hook. Without one the registry builds null loggers.
    #[must_use = "builder methods return a new value"]
    pub fn factory<F: LoggerFactory + 'static>(mut self, factory: F) -> Self {
        self.factory = Some(Box::new(factory));
        self
    }

    pub fn build(self) -> LoggerRegistry {
        let factory = self
            .factory
            .unwrap_or_else(|| Box::new(NullLoggerFactory) as Box<dyn LoggerFactory>);
        let registry = LoggerRegistry::with_boxed_factory(self.global_level, factory);

        if let Some(source) = self.level_source {
            registry.follow_level_source(&source);
        }

        registry
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
