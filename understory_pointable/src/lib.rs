// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_pointable --heading-base-level=0

//! Understory Pointable: deterministic, `no_std` pointer-listener reconciliation for rendered nodes.
//!
//! ## Overview
//!
//! A declarative component describes which pointer events it wants to hear about as a
//! [`PointerConfig`](crate::types::PointerConfig): one optional handler per catalog event plus a
//! [`TouchAction`](crate::types::TouchAction) mode.
//! This crate keeps a live node's listeners, and its `touch-action` attribute, in step with that
//! description across repeated re-renders.
//! It does not render anything and it does not decide when to run.
//! The host toolkit calls it at two points in a node's life and supplies both snapshots each time.
//!
//! ## Catalog
//!
//! The handleable events are fixed by [`PointerEvent`](crate::catalog::PointerEvent), in declaration order:
//! `pointermove`, `pointerdown`, `pointerup`, `pointerover`, `pointerout`, `pointerenter`, `pointerleave`, `pointercancel`.
//! Every pass walks the catalog in this order, so the sequence of node calls is deterministic and
//! can be asserted on.
//!
//! ## Passes
//!
//! 1) Mount: [`initialize`](crate::reconcile::initialize) attaches a listener for every present handler,
//!    then sets `touch-action` if anything was attached. An empty config touches nothing.
//! 2) Update: [`reconcile`](crate::reconcile::reconcile) compares the previously applied config with the next one, event by event.
//!    - Unchanged handler (including absent on both sides): no listener call.
//!    - Changed handler: remove the old one, then add the new one.
//!    - Afterwards `touch-action` is set from the next config if it has any handler, otherwise it is removed.
//!      This trailing call is always made and is always the last call of the pass.
//!
//! Neither pass keeps state. [`Pointable`](crate::pointable::Pointable) is a small holder for hosts that
//! want the last applied config tracked for them.
//!
//! ## Nodes
//!
//! A node is anything implementing [`ListenerTarget`](crate::types::ListenerTarget).
//! Its errors propagate out of a pass unchanged and abort the remaining calls.
//! [`Recorder`](crate::record::Recorder) is an in-memory node that records each call, and the `web`
//! feature implements the trait for `web_sys::Element`.
//!
//! ## Example
//!
//! ```
//! use understory_pointable::catalog::PointerEvent;
//! use understory_pointable::reconcile::{initialize, reconcile};
//! use understory_pointable::record::{NodeCall, Recorder};
//! use understory_pointable::types::{PointerConfig, TouchAction};
//!
//! let mut node: Recorder<u32> = Recorder::new();
//! let first = PointerConfig::<u32>::new()
//!     .with_handler(PointerEvent::Enter, 1)
//!     .with_handler(PointerEvent::Leave, 2);
//! initialize(&mut node, &first).unwrap();
//!
//! let next = PointerConfig::new()
//!     .with_handler(PointerEvent::Move, 3)
//!     .with_touch_action(TouchAction::None);
//! node.clear();
//! reconcile(&mut node, &first, &next).unwrap();
//! assert_eq!(
//!     node.calls(),
//!     &[
//!         NodeCall::AddListener("pointermove", 3),
//!         NodeCall::RemoveListener("pointerenter", 1),
//!         NodeCall::RemoveListener("pointerleave", 2),
//!         NodeCall::SetAttribute("touch-action", "none"),
//!     ]
//! );
//! ```
//!
//! ## Logging
//!
//! Node calls are reported through `tracing` at `trace` level, and each pass closes with a `debug`
//! event naming the attached set.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod adapters;
pub mod catalog;
pub mod pointable;
pub mod reconcile;
pub mod record;
pub mod types;
