use criterion::{Criterion, criterion_group, criterion_main};
use glam::Vec2;
use henyard_core::collision::CollisionHandler;
use std::hint::black_box;

fn bench_is_valid(c: &mut Criterion) {
    let handler = CollisionHandler::farm();
    c.bench_function("is_valid farm sweep", |b| {
        b.iter(|| {
            let mut valid = 0;
            let mut x = -115.0;
            while x <= 115.0 {
                if handler.is_valid(black_box(x), black_box(x * 0.5), 4.0) {
                    valid += 1;
                }
                x += 1.0;
            }
            valid
        })
    });
}

fn bench_resolve(c: &mut Criterion) {
    let handler = CollisionHandler::farm();
    c.bench_function("resolve walk", |b| {
        b.iter(|| {
            let mut p = Vec2::ZERO;
            for _ in 0..200 {
                p = handler.resolve(p, p + Vec2::new(0.5, 0.2), black_box(4.0));
            }
            p
        })
    });
}

criterion_group!(benches, bench_is_valid, bench_resolve);
criterion_main!(benches);
