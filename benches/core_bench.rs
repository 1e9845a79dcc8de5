use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::DVec2;
use std::hint::black_box;
use trajectory_path_editor::core::{apply_drag, regular_polygon_path, ContinuityMode};
use trajectory_path_editor::table::{parse_path_table, path_table_to_string};
use trajectory_path_editor::{PathModel, SamplerConfig, ViewWindow};

fn seed_path(node_count: usize) -> PathModel {
    regular_polygon_path(&ViewWindow::default(), node_count).expect("N-Eck fehlgeschlagen")
}

fn bench_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_trajectory");

    for &node_count in &[4usize, 32usize] {
        let path = seed_path(node_count);
        group.bench_with_input(
            BenchmarkId::new("evenly_spaced", node_count),
            &path,
            |b, path| {
                let config = SamplerConfig::default();
                b.iter(|| {
                    let trajectory =
                        trajectory_path_editor::core::sample_trajectory(black_box(path), &config)
                            .expect("Abtastung fehlgeschlagen");
                    black_box(trajectory.len())
                })
            },
        );
        group.bench_with_input(
            BenchmarkId::new("first_pass_only", node_count),
            &path,
            |b, path| {
                let config = SamplerConfig {
                    evenly_space: false,
                    ..SamplerConfig::default()
                };
                b.iter(|| {
                    let trajectory =
                        trajectory_path_editor::core::sample_trajectory(black_box(path), &config)
                            .expect("Abtastung fehlgeschlagen");
                    black_box(trajectory.len())
                })
            },
        );
    }

    group.finish();
}

fn bench_drag_solving(c: &mut Criterion) {
    let targets: Vec<DVec2> = (0..256)
        .map(|i| {
            let a = i as f64 * 0.05;
            DVec2::new(10.0 + a.cos(), 7.5 + a.sin())
        })
        .collect();

    for (name, mode) in [
        ("drag_free", ContinuityMode::Free),
        ("drag_heading_locked", ContinuityMode::HeadingLocked),
    ] {
        c.bench_function(name, |b| {
            let mut path = seed_path(16);
            b.iter(|| {
                for target in &targets {
                    black_box(apply_drag(&mut path, 1, black_box(*target), mode));
                }
            })
        });
    }
}

fn bench_table_io(c: &mut Criterion) {
    let content = path_table_to_string(&seed_path(256)).expect("Serialisierung fehlgeschlagen");

    c.bench_function("path_table_parse_256", |b| {
        b.iter(|| {
            let path = parse_path_table(black_box(&content)).expect("Parse fehlgeschlagen");
            black_box(path.segment_count())
        })
    });
}

criterion_group!(core_benches, bench_sampling, bench_drag_solving, bench_table_io);
criterion_main!(core_benches);
