// std imports
use std::alloc::System;

// third-party imports
use criterion::{Criterion, criterion_group, criterion_main};
use stats_alloc::{INSTRUMENTED_SYSTEM, Region, StatsAlloc};
use wildcard::Pattern;
use wildmatch::WildMatch;

#[global_allocator]
static GLOBAL: &StatsAlloc<System> = &INSTRUMENTED_SYSTEM;

const SHORT: &str = "./src/main.rs";
const LONG: &str = "./target/release/build/some-very-long-crate-name-0123456789abcdef/out/generated.rs";

fn benchmark(c: &mut Criterion) {
    let mut c = c.benchmark_group("wildcard");

    let pattern = Pattern::new("*/build/*.rs");
    let reference = WildMatch::new("*/build/*.rs");

    let mut c1 = None;
    let mut n1 = 0;
    c.bench_function("wild-long-match", |b| {
        let reg = Region::new(&GLOBAL);
        b.iter(|| {
            assert!(pattern.matches(LONG));
            n1 += 1;
        });
        c1 = Some(reg.change());
    });
    println!("allocations at 1 ({:?} iterations): {:#?}", n1, c1);

    c.bench_function("wild-short-non-match", |b| {
        b.iter(|| {
            assert!(!pattern.matches(SHORT));
        });
    });

    c.bench_function("wildmatch-long-match", |b| {
        b.iter(|| {
            assert!(reference.matches(LONG));
        });
    });
    c.bench_function("wildmatch-short-non-match", |b| {
        b.iter(|| {
            assert!(!reference.matches(SHORT));
        });
    });

    let questions = Pattern::with_case_sensitivity("*/?????????.rs", true);
    c.bench_function("wild-questions-suffix", |b| {
        b.iter(|| {
            assert!(questions.matches(LONG));
        });
    });

    c.bench_function("wild-compile", |b| {
        b.iter(|| Pattern::new(r"*/target/*/build/*-????????????????/out/*\*.rs"));
    });
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
