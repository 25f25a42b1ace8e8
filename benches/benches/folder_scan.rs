//! Benchmarks for the bundled folder browser.
//!
//! Performance-critical paths:
//! - `FolderBrowser::populate`: directory walk plus extension filtering

#![allow(missing_docs)]

use std::fs::{self, File};

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use media_browser::MediaBrowser;
use media_browser::content::MediaKind;
use media_browser::folder::FolderBrowser;

const EXTENSIONS: [&str; 4] = ["jpg", "mp3", "mov", "txt"];

fn bench_populate(c: &mut Criterion) {
    let mut group = c.benchmark_group("folder/populate");
    let runtime = tokio::runtime::Runtime::new().expect("runtime");

    for count in [100usize, 1_000, 5_000] {
        let temp_dir = tempfile::tempdir().expect("tempdir");
        for i in 0..count {
            let album = temp_dir.path().join(format!("album-{}", i / 50));
            fs::create_dir_all(&album).expect("album");
            File::create(album.join(format!("file-{i}.{}", EXTENSIONS[i % EXTENSIONS.len()])))
                .expect("file");
        }
        let browser = FolderBrowser::new(
            FolderBrowser::id_for(MediaKind::Image),
            MediaKind::Image,
            vec![temp_dir.path().to_path_buf()],
        )
        .expect("browser");

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{count}_files")),
            &count,
            |b, _| {
                b.to_async(&runtime)
                    .iter(|| async { black_box(browser.populate().await) });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_populate);
criterion_main!(benches);
