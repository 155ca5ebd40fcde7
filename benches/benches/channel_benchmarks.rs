use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use localbus::{EventChannel, Subscription};

fn bench_subscribe(c: &mut Criterion) {
    let channel = EventChannel::<u64>::new();
    c.bench_function("channel_subscribe", |b| {
        b.iter(|| {
            let _sub = black_box(channel.subscribe(|_: &u64| {}));
        })
    });
}

fn bench_unsubscribe(c: &mut Criterion) {
    let channel = EventChannel::<u64>::new();
    c.bench_function("channel_unsubscribe", |b| {
        b.iter(|| {
            let sub = channel.subscribe(|_: &u64| {});
            black_box(sub).unsubscribe();
        })
    });
}

fn bench_dispatch_0_subs(c: &mut Criterion) {
    let channel = EventChannel::<u64>::new();
    c.bench_function("dispatch_0_subs", |b| {
        b.iter(|| {
            channel.dispatch(black_box(&1u64));
        })
    });
}

fn bench_dispatch_1_sub(c: &mut Criterion) {
    let channel = EventChannel::<u64>::new();
    let _sub = channel.subscribe(|action: &u64| {
        black_box(*action);
    });
    c.bench_function("dispatch_1_sub", |b| {
        b.iter(|| {
            channel.dispatch(black_box(&1u64));
        })
    });
}

fn bench_dispatch_10_subs(c: &mut Criterion) {
    let channel = EventChannel::<u64>::new();
    let _subs: Vec<Subscription<u64>> = (0..10)
        .map(|_| {
            channel.subscribe(|action: &u64| {
                black_box(*action);
            })
        })
        .collect();
    c.bench_function("dispatch_10_subs", |b| {
        b.iter(|| {
            channel.dispatch(black_box(&1u64));
        })
    });
}

fn bench_dispatch_100_subs(c: &mut Criterion) {
    let channel = EventChannel::<u64>::new();
    let _subs: Vec<Subscription<u64>> = (0..100)
        .map(|_| {
            channel.subscribe(|action: &u64| {
                black_box(*action);
            })
        })
        .collect();
    c.bench_function("dispatch_100_subs", |b| {
        b.iter(|| {
            channel.dispatch(black_box(&1u64));
        })
    });
}

criterion_group!(
    benches,
    bench_subscribe,
    bench_unsubscribe,
    bench_dispatch_0_subs,
    bench_dispatch_1_sub,
    bench_dispatch_10_subs,
    bench_dispatch_100_subs
);
criterion_main!(benches);
