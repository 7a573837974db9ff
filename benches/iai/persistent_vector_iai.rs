//! IAI-Callgrind benchmark for PersistentVector operations.
//!
//! Measures instruction counts for construction, access, update and
//! iteration. Setup functions build the input so that its cost is not
//! attributed to the measured benchmark.

use iai_callgrind::{library_benchmark, library_benchmark_group, main};
use lambars_vector::persistent::PersistentVector;
use std::hint::black_box;

fn setup_vector_100() -> PersistentVector<usize> {
    (0..100).collect()
}

fn setup_vector_1000() -> PersistentVector<usize> {
    (0..1000).collect()
}

fn setup_vector_10000() -> PersistentVector<usize> {
    (0..10000).collect()
}

#[library_benchmark]
fn push_back_1000() -> PersistentVector<usize> {
    let mut vector = PersistentVector::new();
    for index in 0..1000 {
        vector = vector.push_back(black_box(index));
    }
    black_box(vector)
}

#[library_benchmark]
fn push_back_40000() -> PersistentVector<usize> {
    let mut vector = PersistentVector::new();
    for index in 0..40000 {
        vector = vector.push_back(black_box(index));
    }
    black_box(vector)
}

#[library_benchmark]
#[bench::with_setup(setup_vector_100())]
fn get_sequential_100(vector: PersistentVector<usize>) -> usize {
    let vector = black_box(vector);
    let mut sum = 0;
    for index in 0..100_usize {
        if let Some(&value) = vector.get(black_box(index)) {
            sum += value;
        }
    }
    black_box(sum)
}

#[library_benchmark]
#[bench::with_setup(setup_vector_10000())]
fn get_sequential_10000(vector: PersistentVector<usize>) -> usize {
    let vector = black_box(vector);
    let mut sum = 0;
    for index in 0..10000_usize {
        if let Some(&value) = vector.get(black_box(index)) {
            sum += value;
        }
    }
    black_box(sum)
}

#[library_benchmark]
#[bench::with_setup(setup_vector_100())]
fn set_100(vector: PersistentVector<usize>) -> PersistentVector<usize> {
    let mut vector = black_box(vector);
    for index in 0..100_usize {
        vector = vector.set(black_box(index), black_box(index * 2));
    }
    black_box(vector)
}

#[library_benchmark]
#[bench::with_setup(setup_vector_10000())]
fn set_10000(vector: PersistentVector<usize>) -> PersistentVector<usize> {
    let mut vector = black_box(vector);
    for index in 0..10000_usize {
        vector = vector.set(black_box(index), black_box(index * 2));
    }
    black_box(vector)
}

#[library_benchmark]
#[bench::with_setup(setup_vector_1000())]
fn iter_1000(vector: PersistentVector<usize>) -> usize {
    let vector = black_box(vector);
    black_box(vector.iter().sum())
}

#[library_benchmark]
#[bench::with_setup(setup_vector_10000())]
fn drop_first_then_iter_10000(vector: PersistentVector<usize>) -> usize {
    let vector = black_box(vector).drop_first(black_box(5000));
    black_box(vector.iter().sum())
}

library_benchmark_group!(
    name = persistent_vector_group;
    benchmarks =
        push_back_1000, push_back_40000,
        get_sequential_100, get_sequential_10000,
        set_100, set_10000,
        iter_1000,
        drop_first_then_iter_10000
);

main!(library_benchmark_groups = persistent_vector_group);
