// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mount and update passes.
//!
//! ## Overview
//!
//! [`initialize`] runs once, when the node first becomes available.
//! [`reconcile`] runs on every later configuration change with the snapshot that was applied last.
//! Both walk [`PointerEvent::ALL`] in order and finish with at most one `touch-action` call.
//!
//! ## Call order
//!
//! Within one event, a removal always precedes the matching addition.
//! Across events, catalog order is kept.
//! The attribute call, when there is one, is the last call of the pass.
//!
//! ## State
//!
//! Neither pass remembers anything. A reconcile is only correct if `prev` really is what the node
//! currently reflects; see [`Pointable`](crate::pointable::Pointable) for a holder that tracks it.

use tracing::{debug, trace};

use crate::catalog::{PointerEvent, PointerEventSet};
use crate::types::{ListenerTarget, PointerConfig, TOUCH_ACTION};

/// Attach listeners for every handler in `config` and set `touch-action` if any were attached.
///
/// An empty configuration produces no node calls at all.
///
/// ```
/// use understory_pointable::catalog::PointerEvent;
/// use understory_pointable::reconcile::initialize;
/// use understory_pointable::record::{NodeCall, Recorder};
/// use understory_pointable::types::PointerConfig;
///
/// let mut node = Recorder::new();
/// let config = PointerConfig::new().with_handler(PointerEvent::Move, "drag");
/// initialize(&mut node, &config).unwrap();
/// assert_eq!(
///     node.calls(),
///     &[
///         NodeCall::AddListener("pointermove", "drag"),
///         NodeCall::SetAttribute("touch-action", "auto"),
///     ]
/// );
/// ```
pub fn initialize<H, N>(node: &mut N, config: &PointerConfig<H>) -> Result<(), N::Error>
where
    N: ListenerTarget<H> + ?Sized,
{
    let mut attached = PointerEventSet::empty();
    for event in PointerEvent::ALL {
        if let Some(handler) = config.handler(event) {
            trace!(event = event.platform_name(), "add listener");
            node.add_listener(event.platform_name(), handler)?;
            attached |= event.flag();
        }
    }

    if !attached.is_empty() {
        trace!(value = config.touch_action.as_str(), "set touch-action");
        node.set_attribute(TOUCH_ACTION, config.touch_action.as_str())?;
    }
    debug!(?attached, "initialized pointer listeners");
    Ok(())
}

/// Bring the node from `prev` to `next` with the fewest listener calls.
///
/// For each catalog event whose handler differs, the old handler is removed (if any) and then the
/// new one added (if any). Events whose handler is unchanged, including events absent on both
/// sides, are skipped.
///
/// The pass then always makes one attribute call: `touch-action` is set from `next` when `next` has
/// any handler, and removed otherwise. The removal is issued even if the attribute was never set.
///
/// A node error aborts the pass and is returned as is. Calls already made are not undone.
pub fn reconcile<H, N>(
    node: &mut N,
    prev: &PointerConfig<H>,
    next: &PointerConfig<H>,
) -> Result<(), N::Error>
where
    H: PartialEq,
    N: ListenerTarget<H> + ?Sized,
{
    let mut attached = PointerEventSet::empty();
    for event in PointerEvent::ALL {
        let old = prev.handler(event);
        let new = next.handler(event);
        if new.is_some() {
            attached |= event.flag();
        }
        if old == new {
            continue;
        }

        let name = event.platform_name();
        if let Some(old) = old {
            trace!(event = name, "remove listener");
            node.remove_listener(name, old)?;
        }
        if let Some(new) = new {
            trace!(event = name, "add listener");
            node.add_listener(name, new)?;
        }
    }

    if attached.is_empty() {
        trace!("remove touch-action");
        node.remove_attribute(TOUCH_ACTION)?;
    } else {
        trace!(value = next.touch_action.as_str(), "set touch-action");
        node.set_attribute(TOUCH_ACTION, next.touch_action.as_str())?;
    }
    debug!(?attached, "reconciled pointer listeners");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{NodeCall, Recorder};
    use crate::types::{Listener, TouchAction};
    use alloc::vec;
    use alloc::vec::Vec;

    fn config(handlers: &[(PointerEvent, u32)], touch_action: TouchAction) -> PointerConfig<u32> {
        let mut c = PointerConfig::new().with_touch_action(touch_action);
        for &(e, h) in handlers {
            c.set_handler(e, Some(h));
        }
        c
    }

    /// Node that fails the `n`th call (0-based), counting every capability.
    struct FailAt {
        n: usize,
        seen: usize,
        ok: Vec<&'static str>,
    }

    #[derive(Debug, PartialEq)]
    struct Boom(usize);

    impl FailAt {
        fn new(n: usize) -> Self {
            Self {
                n,
                seen: 0,
                ok: Vec::new(),
            }
        }

        fn step(&mut self, what: &'static str) -> Result<(), Boom> {
            let i = self.seen;
            self.seen += 1;
            if i == self.n {
                return Err(Boom(i));
            }
            self.ok.push(what);
            Ok(())
        }
    }

    impl ListenerTarget<u32> for FailAt {
        type Error = Boom;
        fn add_listener(&mut self, event: &'static str, _: &u32) -> Result<(), Boom> {
            self.step(event)
        }
        fn remove_listener(&mut self, event: &'static str, _: &u32) -> Result<(), Boom> {
            self.step(event)
        }
        fn set_attribute(&mut self, name: &'static str, _: &'static str) -> Result<(), Boom> {
            self.step(name)
        }
        fn remove_attribute(&mut self, name: &'static str) -> Result<(), Boom> {
            self.step(name)
        }
    }

    // No handlers: nothing at all, not even an attribute removal.
    #[test]
    fn initialize_without_handlers_is_silent() {
        let mut node = Recorder::new();
        initialize(&mut node, &config(&[], TouchAction::Auto)).unwrap();
        assert!(node.calls().is_empty());

        initialize(&mut node, &config(&[], TouchAction::None)).unwrap();
        assert!(node.calls().is_empty());
    }

    #[test]
    fn initialize_adds_in_catalog_order_then_sets_attribute() {
        let mut node = Recorder::new();
        let c = config(
            &[(PointerEvent::Leave, 2), (PointerEvent::Enter, 1)],
            TouchAction::Auto,
        );
        initialize(&mut node, &c).unwrap();
        assert_eq!(
            node.calls(),
            &[
                NodeCall::AddListener("pointerenter", 1),
                NodeCall::AddListener("pointerleave", 2),
                NodeCall::SetAttribute("touch-action", "auto"),
            ]
        );
    }

    #[test]
    fn initialize_every_event_maps_to_its_platform_name() {
        for e in PointerEvent::ALL {
            let mut node = Recorder::new();
            initialize(&mut node, &config(&[(e, 9)], TouchAction::PanY)).unwrap();
            assert_eq!(
                node.calls(),
                &[
                    NodeCall::AddListener(e.platform_name(), 9),
                    NodeCall::SetAttribute("touch-action", "pan-y"),
                ]
            );
        }
    }

    #[test]
    fn reconcile_empty_to_some_adds_and_sets() {
        let mut node = Recorder::new();
        let prev = config(&[], TouchAction::Auto);
        let next = config(
            &[(PointerEvent::Enter, 1), (PointerEvent::Leave, 2)],
            TouchAction::Auto,
        );
        reconcile(&mut node, &prev, &next).unwrap();
        assert_eq!(
            node.calls(),
            &[
                NodeCall::AddListener("pointerenter", 1),
                NodeCall::AddListener("pointerleave", 2),
                NodeCall::SetAttribute("touch-action", "auto"),
            ]
        );
    }

    #[test]
    fn reconcile_some_to_empty_removes_and_clears() {
        let mut node = Recorder::new();
        let prev = config(
            &[(PointerEvent::Enter, 1), (PointerEvent::Leave, 2)],
            TouchAction::Auto,
        );
        let next = config(&[], TouchAction::Auto);
        reconcile(&mut node, &prev, &next).unwrap();
        assert_eq!(
            node.calls(),
            &[
                NodeCall::RemoveListener("pointerenter", 1),
                NodeCall::RemoveListener("pointerleave", 2),
                NodeCall::RemoveAttribute("touch-action"),
            ]
        );
    }

    // Empty on both sides still clears the attribute.
    #[test]
    fn reconcile_empty_to_empty_still_clears() {
        let mut node = Recorder::new();
        let empty = config(&[], TouchAction::Auto);
        reconcile(&mut node, &empty, &empty).unwrap();
        assert_eq!(node.calls(), &[NodeCall::RemoveAttribute("touch-action")]);
    }

    #[test]
    fn reconcile_swaps_events_and_touch_action() {
        let mut node = Recorder::new();
        let prev = config(
            &[(PointerEvent::Enter, 1), (PointerEvent::Leave, 2)],
            TouchAction::Auto,
        );
        let next = config(&[(PointerEvent::Move, 3)], TouchAction::None);
        reconcile(&mut node, &prev, &next).unwrap();
        // `pointermove` comes first in the catalog, so its addition leads.
        assert_eq!(
            node.calls(),
            &[
                NodeCall::AddListener("pointermove", 3),
                NodeCall::RemoveListener("pointerenter", 1),
                NodeCall::RemoveListener("pointerleave", 2),
                NodeCall::SetAttribute("touch-action", "none"),
            ]
        );
    }

    #[test]
    fn reconcile_replaced_handler_removes_then_adds() {
        let mut node = Recorder::new();
        let prev = config(&[(PointerEvent::Down, 1)], TouchAction::Auto);
        let next = config(&[(PointerEvent::Down, 2)], TouchAction::Auto);
        reconcile(&mut node, &prev, &next).unwrap();
        assert_eq!(
            node.calls(),
            &[
                NodeCall::RemoveListener("pointerdown", 1),
                NodeCall::AddListener("pointerdown", 2),
                NodeCall::SetAttribute("touch-action", "auto"),
            ]
        );
    }

    // Unchanged handlers are untouched while the attribute is re-asserted from `next`.
    #[test]
    fn reconcile_identical_configs_only_reasserts_attribute() {
        let mut node = Recorder::new();
        let c = config(
            &[(PointerEvent::Up, 4), (PointerEvent::Cancel, 5)],
            TouchAction::Manipulation,
        );
        reconcile(&mut node, &c, &c.clone()).unwrap();
        assert_eq!(
            node.calls(),
            &[NodeCall::SetAttribute("touch-action", "manipulation")]
        );
    }

    #[test]
    fn reconcile_touch_action_change_alone_sets_new_value() {
        let mut node = Recorder::new();
        let prev = config(&[(PointerEvent::Over, 1)], TouchAction::PanX);
        let next = config(&[(PointerEvent::Over, 1)], TouchAction::PanY);
        reconcile(&mut node, &prev, &next).unwrap();
        assert_eq!(
            node.calls(),
            &[NodeCall::SetAttribute("touch-action", "pan-y")]
        );
    }

    #[test]
    fn reconcile_mixed_keep_add_remove_replace() {
        let mut node = Recorder::new();
        let prev = config(
            &[
                (PointerEvent::Move, 1),
                (PointerEvent::Down, 2),
                (PointerEvent::Out, 3),
            ],
            TouchAction::Auto,
        );
        let next = config(
            &[
                (PointerEvent::Move, 1),
                (PointerEvent::Down, 20),
                (PointerEvent::Cancel, 4),
            ],
            TouchAction::None,
        );
        reconcile(&mut node, &prev, &next).unwrap();
        assert_eq!(
            node.calls(),
            &[
                NodeCall::RemoveListener("pointerdown", 2),
                NodeCall::AddListener("pointerdown", 20),
                NodeCall::RemoveListener("pointerout", 3),
                NodeCall::AddListener("pointercancel", 4),
                NodeCall::SetAttribute("touch-action", "none"),
            ]
        );
    }

    // Same inputs give the same calls; nothing is carried between passes.
    #[test]
    fn reconcile_is_repeatable() {
        let c = config(
            &[(PointerEvent::Enter, 1), (PointerEvent::Up, 2)],
            TouchAction::Auto,
        );
        let mut node = Recorder::new();
        reconcile(&mut node, &c, &c).unwrap();
        let first = node.take();
        reconcile(&mut node, &c, &c).unwrap();
        let second = node.take();
        assert_eq!(first, second);
        assert_eq!(first, vec![NodeCall::SetAttribute("touch-action", "auto")]);
    }

    // Walk a sequence of configs and check the node always mirrors the latest one.
    #[test]
    fn live_listeners_track_each_applied_config() {
        let steps = [
            config(&[(PointerEvent::Enter, 1)], TouchAction::Auto),
            config(
                &[(PointerEvent::Enter, 1), (PointerEvent::Move, 2)],
                TouchAction::None,
            ),
            config(&[(PointerEvent::Move, 3)], TouchAction::PanX),
            config(&[], TouchAction::PanX),
            config(&[(PointerEvent::Cancel, 4)], TouchAction::Auto),
        ];
        let mut node = Recorder::new();
        let mut prev = config(&[], TouchAction::Auto);
        initialize(&mut node, &prev).unwrap();
        for next in steps {
            reconcile(&mut node, &prev, &next).unwrap();
            // The recorder keeps attach order, the config keeps catalog order.
            let mut live: Vec<(&str, u32)> =
                node.live_listeners().map(|(e, h)| (e, *h)).collect();
            let mut want: Vec<(&str, u32)> = next
                .handlers()
                .map(|(e, h)| (e.platform_name(), *h))
                .collect();
            live.sort_unstable();
            want.sort_unstable();
            assert_eq!(live, want);
            let want_attr = next.has_listeners().then_some(next.touch_action.as_str());
            assert_eq!(node.attribute(TOUCH_ACTION), want_attr);
            prev = next;
        }
    }

    #[test]
    fn listener_handles_diff_by_identity() {
        let a: Listener<()> = Listener::new(|_| {});
        let b: Listener<()> = Listener::new(|_| {});
        let prev = PointerConfig::new().with_handler(PointerEvent::Move, a.clone());
        let same = PointerConfig::new().with_handler(PointerEvent::Move, a.clone());
        let other = PointerConfig::new().with_handler(PointerEvent::Move, b.clone());

        let mut node = Recorder::new();
        reconcile(&mut node, &prev, &same).unwrap();
        assert_eq!(node.take(), vec![NodeCall::SetAttribute("touch-action", "auto")]);

        reconcile(&mut node, &prev, &other).unwrap();
        assert_eq!(
            node.take(),
            vec![
                NodeCall::RemoveListener("pointermove", a),
                NodeCall::AddListener("pointermove", b),
                NodeCall::SetAttribute("touch-action", "auto"),
            ]
        );
    }

    #[test]
    fn initialize_propagates_node_error_and_stops() {
        let c = config(
            &[(PointerEvent::Move, 1), (PointerEvent::Down, 2)],
            TouchAction::Auto,
        );
        let mut node = FailAt::new(1);
        assert_eq!(initialize(&mut node, &c), Err(Boom(1)));
        assert_eq!(node.ok, ["pointermove"]);
        assert_eq!(node.seen, 2);

        // Failing on the attribute call surfaces too.
        let mut node = FailAt::new(2);
        assert_eq!(initialize(&mut node, &c), Err(Boom(2)));
        assert_eq!(node.ok, ["pointermove", "pointerdown"]);
    }

    #[test]
    fn reconcile_propagates_node_error_and_stops() {
        let prev = config(&[(PointerEvent::Down, 1)], TouchAction::Auto);
        let next = config(&[(PointerEvent::Down, 2)], TouchAction::Auto);
        // Fails on the addition that follows the removal.
        let mut node = FailAt::new(1);
        assert_eq!(reconcile(&mut node, &prev, &next), Err(Boom(1)));
        assert_eq!(node.ok, ["pointerdown"]);
        assert_eq!(node.seen, 2);

        let empty = config(&[], TouchAction::Auto);
        let mut node = FailAt::new(0);
        assert_eq!(reconcile(&mut node, &empty, &empty), Err(Boom(0)));
        assert!(node.ok.is_empty());
    }
}
