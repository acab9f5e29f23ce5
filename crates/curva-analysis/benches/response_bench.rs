//! Sweep-cost benchmarks: the response curve recomputes on every dirty
//! tick, so a full-width sweep has to stay comfortably inside a 60 Hz
//! frame.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use curva_analysis::ResponseCurve;
use curva_core::{ChainSettings, CutSlope, EqChain};

fn configured_chain() -> EqChain {
    let mut chain = EqChain::new();
    let settings = ChainSettings {
        peak_freq_hz: 750.0,
        peak_gain_db: 6.0,
        peak_q: 1.0,
        low_cut_freq_hz: 80.0,
        high_cut_freq_hz: 12000.0,
        low_cut_slope: CutSlope::Db48,
        high_cut_slope: CutSlope::Db48,
    };
    chain.apply(&settings, 48000.0);
    chain
}

fn bench_sweep(c: &mut Criterion) {
    let chain = configured_chain();
    let mut group = c.benchmark_group("response_sweep");

    for width in [250usize, 500, 1000, 2000] {
        group.bench_with_input(BenchmarkId::from_parameter(width), &width, |b, &width| {
            b.iter(|| ResponseCurve::sweep(black_box(&chain), 48000.0, width));
        });
    }
    group.finish();
}

fn bench_rebuild_and_sweep(c: &mut Criterion) {
    // The worst case per tick: full coefficient rebuild plus a sweep.
    let mut chain = configured_chain();
    let settings = ChainSettings::default();

    c.bench_function("rebuild_then_sweep_500", |b| {
        b.iter(|| {
            chain.apply(black_box(&settings), 48000.0);
            ResponseCurve::sweep(&chain, 48000.0, 500)
        });
    });
}

criterion_group!(benches, bench_sweep, bench_rebuild_and_sweep);
criterion_main!(benches);
