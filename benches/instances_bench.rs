//! Benchmark for instance dictionaries and adapters.
//!
//! Compares the dictionary-dispatched operations against the same work written
//! directly on the concrete types.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use polykind::adapter::{FunctionalAdapter, TryAdapter, ValidationAdapter};
use polykind::control::{Try, Validation};
use polykind::instances::{list, option, try_type, validation};
use polykind::typeclass::{Foldable, Functor, Monad, MonadZero, Monoid, Traverse};
use std::hint::black_box;

// =============================================================================
// List Dictionary vs Direct
// =============================================================================

fn benchmark_list_map(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("list_map");
    let functor = list::functor();

    for size in [100, 10_000] {
        let values: Vec<i32> = (0..size).collect();
        group.bench_with_input(BenchmarkId::new("dictionary", size), &values, |bencher, values| {
            bencher.iter(|| black_box(functor.map(values.clone(), |x| x * 2)));
        });
        group.bench_with_input(BenchmarkId::new("direct", size), &values, |bencher, values| {
            bencher.iter(|| black_box(values.clone().into_iter().map(|x| x * 2).collect::<Vec<_>>()));
        });
    }

    group.finish();
}

fn benchmark_list_filter(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("list_filter");
    let native = list::monad_zero();
    let derived = polykind::typeclass::general::monad_zero::<polykind::typeclass::ListWitness, _, _>(
        list::monad(),
        list::ListOps,
    );

    for size in [100, 10_000] {
        let values: Vec<i32> = (0..size).collect();
        group.bench_with_input(BenchmarkId::new("native", size), &values, |bencher, values| {
            bencher.iter(|| black_box(native.filter(values.clone(), |x| x % 3 == 0)));
        });
        group.bench_with_input(BenchmarkId::new("derived", size), &values, |bencher, values| {
            bencher.iter(|| black_box(derived.filter(values.clone(), |x| x % 3 == 0)));
        });
    }

    group.finish();
}

fn benchmark_list_traverse(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("list_traverse_option");
    let traverse = list::traverse();
    let applicative = option::applicative();

    for size in [100, 1_000] {
        let values: Vec<i32> = (0..size).collect();
        group.bench_with_input(BenchmarkId::new("traverse_a", size), &values, |bencher, values| {
            bencher.iter(|| black_box(traverse.traverse_a(&applicative, values.clone(), |x| Some(x * 2))));
        });
        group.bench_with_input(BenchmarkId::new("collect", size), &values, |bencher, values| {
            bencher.iter(|| black_box(values.iter().map(|x| Some(x * 2)).collect::<Option<Vec<_>>>()));
        });
    }

    group.finish();
}

fn benchmark_list_fold(criterion: &mut Criterion) {
    let foldable = list::foldable();
    let sum = Monoid::<i64>::sum();
    let values: Vec<i64> = (0..10_000).collect();

    criterion.bench_function("list_fold_left_10000", |bencher| {
        bencher.iter(|| black_box(foldable.fold_left(values.clone(), &sum)));
    });
    criterion.bench_function("list_fold_right_10000", |bencher| {
        bencher.iter(|| black_box(foldable.fold_right(values.clone(), &sum)));
    });
}

// =============================================================================
// Try / Validation
// =============================================================================

fn benchmark_try_chain(criterion: &mut Criterion) {
    let monad = try_type::monad();

    criterion.bench_function("try_flat_map_chain_100", |bencher| {
        bencher.iter(|| {
            let mut value = Try::success(0);
            for _ in 0..100 {
                value = monad.flat_map(value, |x| Try::success(x + 1));
            }
            black_box(value)
        });
    });
}

fn benchmark_validation_traverse(criterion: &mut Criterion) {
    let traverse = list::traverse();
    let applicative = validation::applicative::<Vec<String>>();
    let values: Vec<i32> = (-500..500).collect();

    criterion.bench_function("validation_accumulate_1000", |bencher| {
        bencher.iter(|| {
            black_box(traverse.traverse_a(&applicative, values.clone(), |x| {
                if x >= 0 {
                    Validation::success(x)
                } else {
                    Validation::fail(vec![x.to_string()])
                }
            }))
        });
    });
}

// =============================================================================
// Adapters
// =============================================================================

fn benchmark_adapters(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("adapter_map_flat_map");
    let try_adapter = TryAdapter::new();
    let validation_adapter = ValidationAdapter::<Vec<String>>::new();

    group.bench_function("try", |bencher| {
        bencher.iter(|| {
            let mapped = try_adapter.map(try_adapter.unit(black_box(20)), |x| x + 1);
            black_box(try_adapter.flat_map(mapped, |x| try_adapter.unit(x * 2)))
        });
    });
    group.bench_function("validation", |bencher| {
        bencher.iter(|| {
            let mapped = validation_adapter.map(validation_adapter.unit(black_box(20)), |x| x + 1);
            black_box(validation_adapter.flat_map(mapped, |x| validation_adapter.unit(x * 2)))
        });
    });

    group.finish();
}

// =============================================================================
// Criterion Group and Main
// =============================================================================

criterion_group!(
    benches,
    benchmark_list_map,
    benchmark_list_filter,
    benchmark_list_traverse,
    benchmark_list_fold,
    benchmark_try_chain,
    benchmark_validation_traverse,
    benchmark_adapters
);

criterion_main!(benches);
