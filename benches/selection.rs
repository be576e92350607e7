// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Annospan-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Annospan and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use annospan::model::TokenIndex;
use annospan::selection::SelectionRange;

mod profiler;

// Benchmark identity (keep stable):
// - Group name in this file: `selection.click`
// - Case IDs: `walk_near`, `jump_far`, `interior_ties`.
fn click_sequence(tokens: &[TokenIndex]) -> u64 {
    let mut range = SelectionRange::default();
    let mut acc = 0u64;
    for &token in tokens {
        let interval = range.click(black_box(token));
        acc = acc.wrapping_mul(131).wrapping_add(interval.start() as u64);
        acc = acc.wrapping_mul(131).wrapping_add(interval.end() as u64);
    }
    acc
}

fn benches_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection.click");

    let walk_near = (0..1_000).map(|idx| idx * 3).collect::<Vec<TokenIndex>>();
    let jump_far = (0..1_000).map(|idx| (idx * 7_919) % 100_000).collect::<Vec<TokenIndex>>();
    let interior_ties = (0..1_000).map(|idx| 500 + (idx % 11)).collect::<Vec<TokenIndex>>();

    for (name, tokens) in
        [("walk_near", &walk_near), ("jump_far", &jump_far), ("interior_ties", &interior_ties)]
    {
        group.throughput(Throughput::Elements(tokens.len() as u64));
        group.bench_function(name, |b| b.iter(|| black_box(click_sequence(tokens))));
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_selection
}
criterion_main!(benches);
