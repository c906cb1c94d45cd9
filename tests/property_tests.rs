//! Property-based tests for log_registry using proptest

use log_registry::prelude::*;
use log_registry::{parse_log_level, should_log};
use proptest::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Off),
        Just(LogLevel::Trace),
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warning),
        Just(LogLevel::Error),
    ]
}

fn message_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Trace),
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warning),
        Just(LogLevel::Error),
    ]
}

#[derive(Debug, Clone)]
enum Op {
    Create(u8),
    SetLevel(u8, LogLevel),
    SetGlobal(LogLevel),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u8..4).prop_map(Op::Create),
        ((0u8..4), any_level()).prop_map(|(k, l)| Op::SetLevel(k, l)),
        any_level().prop_map(Op::SetGlobal),
    ]
}

fn key(k: u8) -> String {
    format!("/logs/{}.log", k)
}

// ============================================================================
// Level Tests
// ============================================================================

proptest! {
    /// Level names round-trip through the codec
    #[test]
    fn test_level_str_roundtrip(level in any_level()) {
        prop_assert_eq!(parse_log_level(level.as_str()), Some(level));
    }

    /// Parsing ignores case
    #[test]
    fn test_parse_case_insensitive(level in any_level(), upper in any::<bool>()) {
        let name = if upper { level.as_str().to_uppercase() } else { level.as_str().to_string() };
        prop_assert_eq!(parse_log_level(&name), Some(level));
    }

    /// Unknown names never parse
    #[test]
    fn test_unknown_names_are_absent(name in "[a-z]{1,10}") {
        let known = ["trace", "debug", "info", "warn", "error", "critical", "off"];
        prop_assume!(!known.contains(&name.as_str()));
        prop_assert_eq!(parse_log_level(&name), None);
    }

    /// A logger at `threshold` emits exactly the messages at or above it
    #[test]
    fn test_gate_matches_ordering(threshold in any_level(), level in message_level()) {
        let expected = threshold != LogLevel::Off && level >= threshold;
        prop_assert_eq!(should_log(threshold, level, false), expected);
        prop_assert!(should_log(threshold, level, true));
    }

    /// Raising a threshold never lets more messages through
    #[test]
    fn test_gate_is_monotonic(a in message_level(), b in message_level(), level in message_level()) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        if should_log(high, level, false) {
            prop_assert!(should_log(low, level, false));
        }
    }

    /// Setting the same level twice fires once
    #[test]
    fn test_set_level_idempotent(start in any_level(), target in any_level()) {
        let logger = FilteringLogger::new(MemorySink::new(), start);
        let count = Arc::new(parking_lot::Mutex::new(0usize));
        let count_clone = Arc::clone(&count);
        let _sub = logger.on_did_change_level(Arc::new(move |_: &LogLevel| *count_clone.lock() += 1));

        logger.set_level(target);
        logger.set_level(target);

        prop_assert_eq!(*count.lock(), usize::from(start != target));
    }
}

// ============================================================================
// Registry Tests
// ============================================================================

proptest! {
    /// After any sequence of operations, every logger without an override is
    /// at the global level and every logger with one is at its override.
    #[test]
    fn test_registry_invariant(global in any_level(), ops in prop::collection::vec(op(), 1..40)) {
        let registry = LoggerRegistry::new(
            global,
            |_key: &ResourceKey, level: LogLevel, options: &LoggerOptions| -> Result<Arc<dyn Logger>> {
                Ok(Arc::new(FilteringLogger::with_options(MemorySink::new(), level, options)))
            },
        );
        let mut first_seen: HashMap<u8, Arc<dyn Logger>> = HashMap::new();

        for op in ops {
            match op {
                Op::Create(k) => {
                    let logger = registry.create_logger(key(k), &LoggerOptions::default(), None).unwrap();
                    let first = first_seen.entry(k).or_insert_with(|| Arc::clone(&logger));
                    prop_assert!(Arc::ptr_eq(first, &logger));
                }
                Op::SetLevel(k, level) => registry.set_level(key(k), level),
                Op::SetGlobal(level) => registry.set_global_log_level(level),
            }
        }

        let global = registry.global_level();
        for (k, logger) in &first_seen {
            let expected = registry.get_log_level(key(*k)).unwrap_or(global);
            prop_assert_eq!(logger.level(), expected);
        }
    }

    /// Every effective per-key change fires exactly one event
    #[test]
    fn test_registry_events_match_changes(levels in prop::collection::vec(any_level(), 1..20)) {
        let registry = LoggerRegistry::null();
        let events = Arc::new(parking_lot::Mutex::new(Vec::new()));
        let events_clone = Arc::clone(&events);
        let _sub = registry.on_did_change_level(Arc::new(move |c: &LevelChange| events_clone.lock().push(c.level)));

        let mut effective = registry.global_level();
        let mut expected = Vec::new();
        for level in levels {
            registry.set_level("k", level);
            if level != effective {
                expected.push(level);
                effective = level;
            }
        }

        prop_assert_eq!(events.lock().clone(), expected);
    }
}
