// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mount and update passes against a recording node.
//!
//! This example walks a node through three configurations and prints the calls each pass made.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p understory_pointable_demos --example pointable_basics`

use tracing_subscriber::EnvFilter;
use understory_pointable::catalog::PointerEvent;
use understory_pointable::reconcile::{initialize, reconcile};
use understory_pointable::record::{NodeCall, Recorder};
use understory_pointable::types::{PointerConfig, TouchAction};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut node: Recorder<&'static str> = Recorder::new();

    // Mount with hover handlers.
    let hover = PointerConfig::new()
        .with_handler(PointerEvent::Enter, "highlight")
        .with_handler(PointerEvent::Leave, "unhighlight");
    initialize(&mut node, &hover).unwrap();
    println!("== Mount ==");
    for call in node.take() {
        println!("  {call:?}");
    }

    // Switch to a drag surface that owns all touches.
    let drag = PointerConfig::new()
        .with_handler(PointerEvent::Move, "drag")
        .with_touch_action(TouchAction::None);
    reconcile(&mut node, &hover, &drag).unwrap();
    println!("== Hover -> drag ==");
    let calls = node.take();
    for call in &calls {
        println!("  {call:?}");
    }
    assert_eq!(
        calls,
        vec![
            NodeCall::AddListener("pointermove", "drag"),
            NodeCall::RemoveListener("pointerenter", "highlight"),
            NodeCall::RemoveListener("pointerleave", "unhighlight"),
            NodeCall::SetAttribute("touch-action", "none"),
        ]
    );

    // Drop every handler.
    reconcile(&mut node, &drag, &PointerConfig::new()).unwrap();
    println!("== Drag -> nothing ==");
    for call in node.take() {
        println!("  {call:?}");
    }
    assert_eq!(node.live_listeners().count(), 0);
    assert_eq!(node.attribute("touch-action"), None);
}
