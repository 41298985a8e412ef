//! Frame update benchmarks.
//!
//! Measures a full `advance` across tree depths, serial vs parallel
//! dispatch. Depth 8 is the worst case: 97k parts, 78k of them in the leaf
//! level alone.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fractal_plugin::{DispatchMode, Fractal, FractalConfig, RootTransform};

fn bench_advance(c: &mut Criterion) {
  let mut group = c.benchmark_group("advance");

  for depth in [4usize, 6, 8] {
    for (label, mode) in [
      ("serial", DispatchMode::Serial),
      ("parallel", DispatchMode::Parallel),
    ] {
      group.bench_with_input(BenchmarkId::new(label, depth), &depth, |b, &depth| {
        let mut fractal = Fractal::new(FractalConfig::new().with_depth(depth)).unwrap();
        fractal.set_dispatch_mode(mode);
        let root = RootTransform::IDENTITY;

        b.iter(|| {
          let stats = fractal.advance(black_box(1.0 / 60.0), root);
          black_box(stats.part_count)
        });
      });
    }
  }

  group.finish();
}

criterion_group!(benches, bench_advance);
criterion_main!(benches);
