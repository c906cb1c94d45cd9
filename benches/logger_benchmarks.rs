//! Criterion benchmarks for log_registry

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use log_registry::prelude::*;
use log_registry::should_log;
use std::sync::Arc;

fn memory_registry() -> LoggerRegistry {
    LoggerRegistry::new(
        LogLevel::Info,
        |_key: &ResourceKey, level: LogLevel, options: &LoggerOptions| -> Result<Arc<dyn Logger>> {
            Ok(Arc::new(FilteringLogger::with_options(NullSink, level, options)))
        },
    )
}

struct NullSink;

impl Sink for NullSink {
    fn write(&mut self, _level: LogLevel, message: &str) -> Result<()> {
        black_box(message);
        Ok(())
    }

    fn name(&self) -> &str {
        "null"
    }
}

// ============================================================================
// Gating Benchmarks
// ============================================================================

fn bench_gating(c: &mut Criterion) {
    let mut group = c.benchmark_group("gating");
    group.throughput(Throughput::Elements(1));

    group.bench_function("should_log", |b| {
        b.iter(|| should_log(black_box(LogLevel::Info), black_box(LogLevel::Debug), false));
    });

    let logger = FilteringLogger::new(NullSink, LogLevel::Info);
    group.bench_function("filtered_out", |b| {
        b.iter(|| logger.debug(black_box("suppressed"), &[]));
    });

    group.bench_function("emitted_with_args", |b| {
        let args = [LogArg::from("user"), LogArg::from(42)];
        b.iter(|| logger.info(black_box("login"), &args));
    });

    group.finish();
}

// ============================================================================
// Registry Benchmarks
// ============================================================================

fn bench_registry(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry");

    let registry = memory_registry();
    let keys: Vec<String> = (0..100).map(|i| format!("/logs/{}.log", i)).collect();
    for key in &keys {
        registry.create_logger(key.as_str(), &LoggerOptions::default(), None).unwrap();
    }

    group.bench_function("lookup_existing", |b| {
        b.iter(|| registry.create_logger(black_box("/logs/50.log"), &LoggerOptions::default(), None));
    });

    group.throughput(Throughput::Elements(keys.len() as u64));
    group.bench_function("global_cascade_100", |b| {
        let mut flip = false;
        b.iter(|| {
            flip = !flip;
            let level = if flip { LogLevel::Debug } else { LogLevel::Warning };
            registry.set_global_log_level(level);
        });
    });

    group.finish();
}

// ============================================================================
// Multiplex Benchmarks
// ============================================================================

fn bench_multiplex(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiplex");
    group.throughput(Throughput::Elements(1));

    let members: Vec<Arc<dyn Logger>> = (0..4)
        .map(|_| Arc::new(FilteringLogger::new(NullSink, LogLevel::Info)) as Arc<dyn Logger>)
        .collect();
    let mux = MultiplexLogger::new(members);

    group.bench_function("fan_out_4", |b| {
        b.iter(|| mux.info(black_box("broadcast"), &[]));
    });

    group.finish();
}

criterion_group!(benches, bench_gating, bench_registry, bench_multiplex);
criterion_main!(benches);
