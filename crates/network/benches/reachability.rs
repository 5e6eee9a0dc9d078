//! Benchmarks for network queries
//!
//! Run with: cargo bench --package network
//!
//! Builds a synthetic world of ring-connected lovers with a few long-range
//! shortcuts, then measures the breadth-first search and the aggregations
//! layered on top of it.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use network::{FriendNetwork, hop_distances, lovers_within};
use ranking::RankMode;
use world::{LoverId, PizzaWorld, PlaceId};

const LOVERS: LoverId = 2_000;
const PLACES: PlaceId = 200;

fn synthetic_world() -> PizzaWorld {
    let mut world = PizzaWorld::new();

    for place in 0..PLACES {
        world
            .add_place(place, format!("Place {place}"), (place * 37) % 1_000, ["Margarita"])
            .expect("Failed to add place");
    }

    for lover in 0..LOVERS {
        world
            .join_network(lover, format!("Lover {lover}"))
            .expect("Failed to add lover");
    }

    for lover in 0..LOVERS {
        world
            .add_connection(lover, (lover + 1) % LOVERS)
            .expect("Failed to connect ring");
        if lover % 50 == 0 {
            let far = (lover + LOVERS / 2) % LOVERS;
            // some shortcuts land on an existing edge
            let _ = world.add_connection(lover, far);
        }

        for offset in 0..3 {
            let place = (lover * 7 + offset * 13) % PLACES;
            world
                .rate(place, lover, ((lover + offset) % 5 + 1) as i32)
                .expect("Failed to rate");
            world.favorite(lover, place).expect("Failed to favorite");
        }
    }

    world
}

fn bench_hop_distances(c: &mut Criterion) {
    let world = synthetic_world();

    c.bench_function("hop_distances_unbounded", |b| {
        b.iter(|| {
            let distances = hop_distances(&world, black_box(0)).unwrap();
            black_box(distances)
        })
    });

    c.bench_function("lovers_within_3", |b| {
        b.iter(|| {
            let distances = lovers_within(&world, black_box(0), black_box(3)).unwrap();
            black_box(distances)
        })
    });
}

fn bench_network_favorites(c: &mut Criterion) {
    let world = synthetic_world();
    let network = FriendNetwork::new(&world);

    c.bench_function("favorites_by_rating", |b| {
        b.iter(|| {
            let places = network.favorites(black_box(0), RankMode::Rating).unwrap();
            black_box(places.len())
        })
    });

    let wide = network.with_scope_hops(3);
    c.bench_function("favorites_by_distance_scope_3", |b| {
        b.iter(|| {
            let places = wide.favorites(black_box(0), RankMode::Distance).unwrap();
            black_box(places.len())
        })
    });
}

fn bench_is_recommended(c: &mut Criterion) {
    let world = synthetic_world();
    let network = FriendNetwork::new(&world);

    c.bench_function("is_recommended_far", |b| {
        b.iter(|| {
            let found = network
                .is_recommended(black_box(0), black_box(PLACES - 1), black_box(10))
                .unwrap();
            black_box(found)
        })
    });
}

criterion_group!(
    benches,
    bench_hop_distances,
    bench_network_favorites,
    bench_is_recommended
);
criterion_main!(benches);
