use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use matchstats::fake_feed::{FAKE_HOME, fake_player, synthetic_events};
use matchstats::main_events::filter_main_events;
use matchstats::normalize::parse_events_json;
use matchstats::player_profile::aggregate_player_profile;
use matchstats::serialize::to_json;

fn bench_normalize(c: &mut Criterion) {
    let raw = synthetic_events(1, 7);
    c.bench_function("normalize_events", |b| {
        b.iter(|| {
            let set = parse_events_json(1, black_box(&raw)).unwrap();
            black_box(set.len());
        })
    });
}

fn bench_main_events(c: &mut Criterion) {
    let set = parse_events_json(1, &synthetic_events(1, 7)).unwrap();
    c.bench_function("filter_main_events", |b| {
        b.iter(|| {
            let summary = filter_main_events(black_box(&set));
            black_box(to_json(&summary).ok());
        })
    });
}

fn bench_player_profile(c: &mut Criterion) {
    let set = parse_events_json(1, &synthetic_events(1, 7)).unwrap();
    let name = fake_player(FAKE_HOME, 9);
    c.bench_function("aggregate_player_profile", |b| {
        b.iter(|| {
            let profile = aggregate_player_profile(black_box(&set), black_box(&name)).ok();
            black_box(profile);
        })
    });
}

criterion_group!(benches, bench_normalize, bench_main_events, bench_player_profile);
criterion_main!(benches);
