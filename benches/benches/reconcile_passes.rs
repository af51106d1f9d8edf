// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use understory_pointable::catalog::PointerEvent;
use understory_pointable::reconcile::{initialize, reconcile};
use understory_pointable::types::{ListenerTarget, PointerConfig, TouchAction};

/// Node that only counts calls, so the bench measures the passes themselves.
#[derive(Default)]
struct Counter(u64);

impl ListenerTarget<u32> for Counter {
    type Error = ();

    fn add_listener(&mut self, _: &'static str, h: &u32) -> Result<(), ()> {
        self.0 += u64::from(*h);
        Ok(())
    }

    fn remove_listener(&mut self, _: &'static str, h: &u32) -> Result<(), ()> {
        self.0 ^= u64::from(*h);
        Ok(())
    }

    fn set_attribute(&mut self, _: &'static str, v: &'static str) -> Result<(), ()> {
        self.0 += v.len() as u64;
        Ok(())
    }

    fn remove_attribute(&mut self, _: &'static str) -> Result<(), ()> {
        self.0 += 1;
        Ok(())
    }
}

fn full(base: u32, touch_action: TouchAction) -> PointerConfig<u32> {
    let mut c = PointerConfig::new().with_touch_action(touch_action);
    for (i, e) in PointerEvent::ALL.into_iter().enumerate() {
        c.set_handler(e, Some(base + i as u32));
    }
    c
}

fn bench_passes(c: &mut Criterion) {
    let empty: PointerConfig<u32> = PointerConfig::new();
    let a = full(0, TouchAction::Auto);
    let b = full(100, TouchAction::None);
    let mut half = a.clone();
    for e in PointerEvent::ALL.into_iter().step_by(2) {
        half.set_handler(e, None);
    }

    c.bench_function("initialize_full", |bench| {
        bench.iter(|| {
            let mut node = Counter::default();
            initialize(&mut node, black_box(&a)).unwrap();
            node.0
        });
    });
    c.bench_function("reconcile_identical", |bench| {
        bench.iter(|| {
            let mut node = Counter::default();
            reconcile(&mut node, black_box(&a), black_box(&a)).unwrap();
            node.0
        });
    });
    c.bench_function("reconcile_replace_all", |bench| {
        bench.iter(|| {
            let mut node = Counter::default();
            reconcile(&mut node, black_box(&a), black_box(&b)).unwrap();
            node.0
        });
    });
    c.bench_function("reconcile_drop_half", |bench| {
        bench.iter(|| {
            let mut node = Counter::default();
            reconcile(&mut node, black_box(&a), black_box(&half)).unwrap();
            node.0
        });
    });
    c.bench_function("reconcile_clear", |bench| {
        bench.iter(|| {
            let mut node = Counter::default();
            reconcile(&mut node, black_box(&a), black_box(&empty)).unwrap();
            node.0
        });
    });
}

criterion_group!(benches, bench_passes);
criterion_main!(benches);
