use criterion::{criterion_group, criterion_main, Criterion};
use logoforge_core::RasterMask;
use logoforge_trace::trace_loops;

/// A filled disc with a concentric hole, at the pipeline's resolution cap
fn annulus_mask(size: usize) -> RasterMask {
    let center = size as f32 / 2.0;
    let outer = center * 0.9;
    let inner = center * 0.45;

    let mut pixels = Vec::with_capacity(size * size);
    for y in 0..size {
        for x in 0..size {
            let dx = x as f32 + 0.5 - center;
            let dy = y as f32 + 0.5 - center;
            let r = (dx * dx + dy * dy).sqrt();
            pixels.push(u8::from(r <= outer && r >= inner));
        }
    }
    RasterMask::from_pixels(size, size, pixels).unwrap()
}

fn bench_trace(c: &mut Criterion) {
    let mask = annulus_mask(520);
    c.bench_function("trace_annulus_520", |b| b.iter(|| trace_loops(&mask)));

    let small = annulus_mask(64);
    c.bench_function("trace_annulus_64", |b| b.iter(|| trace_loops(&small)));
}

criterion_group!(benches, bench_trace);
criterion_main!(benches);
