// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `understory_state_list`.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_state_list::{StateFlag, StateId, StateSet, expand, expand_all};

const PIVOTS: [(&str, StateFlag); 6] = [
    ("default", StateFlag::DEFAULT),
    ("enabled", StateFlag::ENABLED),
    ("focused", StateFlag::FOCUSED),
    ("multiline", StateFlag::MULTILINE),
    ("activated", StateFlag::ACTIVATED),
    ("custom", StateFlag::present(StateId::FIRST_CUSTOM)),
];

fn bench_expand(c: &mut Criterion) {
    let mut group = c.benchmark_group("state_list/expand");

    for (name, pivot) in PIVOTS {
        group.bench_with_input(BenchmarkId::from_parameter(name), &pivot, |b, &pivot| {
            b.iter(|| black_box(expand(black_box(pivot))));
        });
    }

    group.bench_function("expand_all/activated+multiline", |b| {
        b.iter(|| black_box(expand_all([StateFlag::ACTIVATED, StateFlag::MULTILINE])));
    });

    group.finish();
}

fn bench_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("state_list/select");

    // Every combination of the five aspects; the default ladder always matches.
    let ids = [
        StateId::ENABLED,
        StateId::FOCUSED,
        StateId::MULTILINE,
        StateId::ACTIVATED,
        StateId::WINDOW_FOCUSED,
    ];
    let states: Vec<StateSet> = (0_u32..32)
        .map(|bits| {
            ids.iter()
                .enumerate()
                .filter(|(i, _)| bits & (1_u32 << *i) != 0)
                .map(|(_, id)| *id)
                .collect()
        })
        .collect();
    group.throughput(Throughput::Elements(states.len() as u64));

    for (name, pivot) in PIVOTS {
        let list = expand(pivot);
        group.bench_with_input(BenchmarkId::from_parameter(name), &states, |b, states| {
            b.iter(|| {
                for live in states {
                    black_box(list.select(black_box(live)));
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_expand, bench_select);
criterion_main!(benches);
