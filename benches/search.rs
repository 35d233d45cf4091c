// SPDX-FileCopyrightText: 2026 channelbox-plus contributors
// SPDX-License-Identifier: MIT

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use channelbox_plus::model::AttributeInfo;
use channelbox_plus::search::{matching_attributes, AttrFilter};

// Benchmark identity (keep stable):
// - Group name in this file: `search.match`
// - Case IDs (`empty_query`, `single_term`, `multi_term`, `no_match`) must
//   remain stable across refactors so results stay comparable over time.
fn checksum(filter: &AttrFilter) -> u64 {
    match filter {
        AttrFilter::All => u64::MAX,
        AttrFilter::Restrict(names) => {
            let mut acc = 0u64;
            for name in names {
                acc = acc.wrapping_mul(131).wrapping_add(name.len() as u64);
            }
            acc
        }
    }
}

fn selection_snapshot(nodes: usize, per_node: usize) -> Vec<Vec<AttributeInfo>> {
    (0..nodes)
        .map(|node| {
            (0..per_node)
                .map(|index| {
                    let name = match index % 4 {
                        0 => format!("translate{node:02}_{index:03}"),
                        1 => format!("rotate{node:02}_{index:03}"),
                        2 => format!("stretchLimit{node:02}_{index:03}"),
                        _ => format!("visibility{node:02}_{index:03}"),
                    };
                    AttributeInfo::keyable(name)
                })
                .collect()
        })
        .collect()
}

fn bench_match(c: &mut Criterion) {
    let snapshot = selection_snapshot(16, 48);
    let total: u64 = snapshot.iter().map(|attrs| attrs.len() as u64).sum();

    let mut group = c.benchmark_group("search.match");
    group.throughput(Throughput::Elements(total));

    for (id, query) in [
        ("empty_query", ""),
        ("single_term", "translate"),
        ("multi_term", "stretch limit 03"),
        ("no_match", "nothing matches this"),
    ] {
        group.bench_function(id, |b| {
            b.iter(|| {
                let filter = matching_attributes(
                    black_box(query),
                    snapshot.iter().map(Vec::as_slice),
                );
                black_box(checksum(&filter))
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_match);
criterion_main!(benches);
