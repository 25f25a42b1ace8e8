//! Benchmarks for the browser registry and shared coordinator.
//!
//! Performance-critical paths:
//! - `BrowserRegistry::register`: validation plus copy-on-write append
//! - `BrowserRegistry::list`: snapshot taken by every coordinator load
//! - `BrowserCoordinator::browsers` / `active_browser`: guarded reads

#![allow(missing_docs)]

use std::sync::Arc;

use async_trait::async_trait;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use media_browser::content::MediaNode;
use media_browser::{
    BrowserCoordinator, BrowserDescriptor, BrowserError, BrowserId, BrowserLoadState,
    BrowserRegistry, MediaBrowser, register_browser,
};

struct NullBrowser {
    id: BrowserId,
    label: String,
}

#[async_trait]
impl MediaBrowser for NullBrowser {
    fn id(&self) -> &BrowserId {
        &self.id
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn load_state(&self) -> BrowserLoadState {
        BrowserLoadState::Idle
    }

    async fn populate(&self) -> Result<MediaNode, BrowserError> {
        Ok(MediaNode::new(self.id.as_str()))
    }
}

fn descriptor(i: usize) -> BrowserDescriptor {
    let label = format!("Browser {i}");
    BrowserDescriptor::new(format!("browser-{i}"), label.clone()).with_factory(move |id| {
        Ok(Arc::new(NullBrowser {
            id: id.clone(),
            label: label.clone(),
        }) as Arc<dyn MediaBrowser>)
    })
}

fn bench_register(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry/register");

    for count in [8usize, 64, 256] {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                let registry = BrowserRegistry::new();
                for i in 0..count {
                    let _ = registry.register(descriptor(i));
                }
                black_box(registry.len())
            });
        });
    }

    group.finish();
}

fn bench_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry/list");

    for count in [8usize, 64, 256] {
        let registry = BrowserRegistry::new();
        for i in 0..count {
            let _ = registry.register(descriptor(i));
        }
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| black_box(registry.list()));
        });
    }

    group.finish();
}

fn bench_coordinator_reads(c: &mut Criterion) {
    for i in 0..32 {
        let _ = register_browser(descriptor(i));
    }
    let coordinator = BrowserCoordinator::shared();
    if let Some(first) = coordinator.browsers().first() {
        let _ = coordinator.select(first);
    }

    let mut group = c.benchmark_group("coordinator");
    group.bench_function("browsers", |b| b.iter(|| black_box(coordinator.browsers())));
    group.bench_function("active_browser", |b| {
        b.iter(|| black_box(coordinator.active_browser()));
    });
    group.bench_function("entries", |b| b.iter(|| black_box(coordinator.entries())));
    group.finish();
}

criterion_group!(benches, bench_register, bench_list, bench_coordinator_reads);
criterion_main!(benches);
