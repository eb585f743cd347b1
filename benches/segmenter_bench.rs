use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pagesplit_core::geometry::Rectangle;
use pagesplit_core::layout::xycut::get_blocks_with_constant_thresholds;
use pagesplit_core::layout::Word;
use rust_decimal::Decimal;

/// A page of `rows * cols` words laid out on an evenly spaced grid, the
/// same shape as the two-columns/three-rows scenario scaled up.
fn grid_page(rows: i64, cols: i64) -> Vec<Word> {
    let mut words = Vec::with_capacity((rows * cols) as usize);
    for row in 0..rows {
        for col in 0..cols {
            let left = col * 20;
            let bottom = row * 30;
            let rect = Rectangle::new(
                Decimal::from(left),
                Decimal::from(left + 10),
                Decimal::from(bottom),
                Decimal::from(bottom + 10),
            );
            words.push(Word::new(format!("w{row}-{col}"), rect, vec![]));
        }
    }
    words
}

fn bench_get_blocks(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_blocks_grid");
    for &(rows, cols) in &[(3_i64, 2_i64), (10, 5), (25, 10)] {
        let words = grid_page(rows, cols);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{rows}x{cols}")),
            &words,
            |b, words| {
                b.iter(|| {
                    get_blocks_with_constant_thresholds(
                        black_box(words.clone()),
                        Decimal::ZERO,
                        Decimal::ONE,
                        Decimal::ONE,
                    )
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_get_blocks);
criterion_main!(benches);
