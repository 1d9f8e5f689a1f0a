// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Benchmark layout scoring and variant generation.
//!
//! Run with: cargo bench -p homeplan-core --bench scoring

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use homeplan_core::{generate_variants, score, Furniture, FurnitureId, RoomId};

fn furniture_for(rooms: &[homeplan_core::Room], per_room: usize) -> Vec<Furniture> {
    rooms
        .iter()
        .flat_map(|room| {
            (0..per_room).map(move |i| Furniture {
                id: FurnitureId::new(format!("{}-f{i}", room.id)),
                name: "Chair".into(),
                category: "chair".into(),
                width: 20.0,
                height: 20.0,
                x: room.x,
                y: room.y,
                room_id: RoomId::new(room.id.as_str()),
                rotation: 0.0,
            })
        })
        .collect()
}

fn bench_scoring(c: &mut Criterion) {
    let mut group = c.benchmark_group("score");
    for bedrooms in [1u32, 4, 16, 64] {
        let variants = generate_variants(bedrooms, 5000.0, "").expect("valid area");
        let rooms = variants[0].rooms.clone();
        let furniture = furniture_for(&rooms, 3);
        group.bench_with_input(BenchmarkId::from_parameter(bedrooms), &bedrooms, |b, _| {
            b.iter(|| score(black_box(&rooms), black_box(&furniture), black_box(5000.0)))
        });
    }
    group.finish();
}

fn bench_variants(c: &mut Criterion) {
    c.bench_function("generate_variants/8", |b| {
        b.iter(|| generate_variants(black_box(8), black_box(2400.0), "modern"))
    });
}

criterion_group!(benches, bench_scoring, bench_variants);
criterion_main!(benches);
