use hexint::primitives::BigUint;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn operand(digits: usize, seed: u32) -> BigUint {
    BigUint::from_digits(
        (0..digits as u32)
            .map(|i| seed ^ i.wrapping_mul(0x9E37_79B9))
            .collect(),
    )
}

pub fn bench_mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("karatsuba");

    for digits in [4, 16, 64, 256] {
        let a = operand(digits, 0xDEAD_BEEF);
        let b = operand(digits, 0xCAFE_F00D);

        group.bench_with_input(BenchmarkId::from_parameter(digits), &digits, |bench, _| {
            bench.iter(|| black_box(&a) * black_box(&b))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_mul);
criterion_main!(benches);
