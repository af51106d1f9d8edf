// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A component driving `Pointable` across re-renders with closure listeners.
//!
//! The recording node stands in for a rendered element. After each render we fire a synthetic
//! pointer event at whatever listeners the node holds, to show which closures are live.
//!
//! Run:
//! - `cargo run -p understory_pointable_demos --example pointable_lifecycle`

use std::cell::RefCell;
use std::rc::Rc;

use tracing_subscriber::EnvFilter;
use understory_pointable::catalog::PointerEvent;
use understory_pointable::pointable::Pointable;
use understory_pointable::record::Recorder;
use understory_pointable::types::{Listener, PointerConfig, TouchAction};

#[derive(Copy, Clone, Debug)]
struct PointerSample {
    x: f64,
    y: f64,
}

/// Deliver `sample` to every live listener for `event`.
fn fire(node: &Recorder<Listener<PointerSample>>, event: PointerEvent, sample: PointerSample) {
    for (name, listener) in node.live_listeners() {
        if name == event.platform_name() {
            listener.call(&sample);
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let log = Rc::new(RefCell::new(Vec::<String>::new()));
    let track = {
        let log = Rc::clone(&log);
        Listener::new(move |s: &PointerSample| {
            log.borrow_mut().push(format!("track {} {}", s.x, s.y));
        })
    };
    let pan = {
        let log = Rc::clone(&log);
        Listener::new(move |s: &PointerSample| log.borrow_mut().push(format!("pan {}", s.x)))
    };

    let mut node = Recorder::new();
    let mut pointable = Pointable::new(
        PointerConfig::new()
            .with_handler(PointerEvent::Move, track.clone())
            .with_touch_action(TouchAction::Auto),
    );
    pointable.mount(&mut node).unwrap();
    fire(&node, PointerEvent::Move, PointerSample { x: 1.0, y: 2.0 });

    // Same listener, new touch-action: only the attribute is written.
    pointable
        .update(
            &mut node,
            PointerConfig::new()
                .with_handler(PointerEvent::Move, track)
                .with_touch_action(TouchAction::PanY),
        )
        .unwrap();
    fire(&node, PointerEvent::Move, PointerSample { x: 3.0, y: 4.0 });

    // Different listener: the old one is detached before the new one is attached.
    pointable
        .update(
            &mut node,
            PointerConfig::new()
                .with_handler(PointerEvent::Move, pan)
                .with_touch_action(TouchAction::PanY),
        )
        .unwrap();
    fire(&node, PointerEvent::Move, PointerSample { x: 5.0, y: 6.0 });

    println!("== Node calls ==");
    for call in node.calls() {
        println!("  {call:?}");
    }
    println!("== Delivered ==\n  {:?}", log.borrow());

    assert_eq!(
        *log.borrow(),
        vec![
            "track 1 2".to_string(),
            "track 3 4".to_string(),
            "pan 5".to_string()
        ]
    );
    assert_eq!(node.attribute("touch-action"), Some("pan-y"));
}
