// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types: the node protocol, configuration snapshots, touch-action modes, and listener handles.
//!
//! ## Overview
//!
//! The passes in [`reconcile`](crate::reconcile) read two [`PointerConfig`] snapshots and drive a
//! [`ListenerTarget`]. Nothing here holds on to a node between calls.

use alloc::rc::Rc;
use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use crate::catalog::{PointerEvent, PointerEventSet};

/// Name of the attribute kept in step with the attached listener set.
pub const TOUCH_ACTION: &str = "touch-action";

/// A rendered node that accepts pointer listeners and attributes.
///
/// The passes call these in a fixed order; see [`reconcile`](crate::reconcile::reconcile).
/// Errors are returned to the caller of the pass unchanged.
pub trait ListenerTarget<H> {
    /// Failure reported by the node.
    type Error;

    /// Attach `handler` for the platform event `event`.
    fn add_listener(&mut self, event: &'static str, handler: &H) -> Result<(), Self::Error>;
    /// Detach a previously attached `handler` for `event`.
    fn remove_listener(&mut self, event: &'static str, handler: &H) -> Result<(), Self::Error>;
    /// Set attribute `name` to `value`.
    fn set_attribute(&mut self, name: &'static str, value: &'static str)
    -> Result<(), Self::Error>;
    /// Remove attribute `name`. Removing an attribute that was never set is not an error.
    fn remove_attribute(&mut self, name: &'static str) -> Result<(), Self::Error>;
}

/// Value of the `touch-action` attribute.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum TouchAction {
    /// `auto`: the platform handles touch gestures.
    #[default]
    Auto,
    /// `none`: every touch is delivered as pointer events.
    None,
    /// `pan-x`: horizontal panning stays with the platform.
    PanX,
    /// `pan-y`: vertical panning stays with the platform.
    PanY,
    /// `manipulation`: panning and pinch zoom stay with the platform.
    Manipulation,
}

impl TouchAction {
    /// Every mode, in the order they are documented.
    pub const ALL: [Self; 5] = [
        Self::Auto,
        Self::None,
        Self::PanX,
        Self::PanY,
        Self::Manipulation,
    ];

    /// Attribute value for this mode.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::None => "none",
            Self::PanX => "pan-x",
            Self::PanY => "pan-y",
            Self::Manipulation => "manipulation",
        }
    }
}

impl fmt::Display for TouchAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a known `touch-action` value.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unknown touch-action value `{value}`")]
pub struct ParseTouchActionError {
    value: String,
}

impl ParseTouchActionError {
    /// The rejected input.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl FromStr for TouchAction {
    type Err = ParseTouchActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| ParseTouchActionError {
                value: s.to_string(),
            })
    }
}

/// One snapshot of a component's pointer configuration.
///
/// Each catalog event has its own slot. `None` is the only representation of "no handler",
/// so an unset slot and a cleared slot compare equal.
///
/// Handlers are compared with `PartialEq` when diffing, and that comparison is expected to be
/// identity: two handlers are equal when attaching one and removing the other would detach it.
/// [`Listener`] provides this for closures.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PointerConfig<H> {
    /// Handler for [`PointerEvent::Move`].
    pub on_pointer_move: Option<H>,
    /// Handler for [`PointerEvent::Down`].
    pub on_pointer_down: Option<H>,
    /// Handler for [`PointerEvent::Up`].
    pub on_pointer_up: Option<H>,
    /// Handler for [`PointerEvent::Over`].
    pub on_pointer_over: Option<H>,
    /// Handler for [`PointerEvent::Out`].
    pub on_pointer_out: Option<H>,
    /// Handler for [`PointerEvent::Enter`].
    pub on_pointer_enter: Option<H>,
    /// Handler for [`PointerEvent::Leave`].
    pub on_pointer_leave: Option<H>,
    /// Handler for [`PointerEvent::Cancel`].
    pub on_pointer_cancel: Option<H>,
    /// Value written to `touch-action` while any handler is present.
    pub touch_action: TouchAction,
}

impl<H> Default for PointerConfig<H> {
    fn default() -> Self {
        Self {
            on_pointer_move: None,
            on_pointer_down: None,
            on_pointer_up: None,
            on_pointer_over: None,
            on_pointer_out: None,
            on_pointer_enter: None,
            on_pointer_leave: None,
            on_pointer_cancel: None,
            touch_action: TouchAction::default(),
        }
    }
}

impl<H> PointerConfig<H> {
    /// A configuration with no handlers and `touch-action: auto`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handler for `event`, if present.
    pub fn handler(&self, event: PointerEvent) -> Option<&H> {
        match event {
            PointerEvent::Move => self.on_pointer_move.as_ref(),
            PointerEvent::Down => self.on_pointer_down.as_ref(),
            PointerEvent::Up => self.on_pointer_up.as_ref(),
            PointerEvent::Over => self.on_pointer_over.as_ref(),
            PointerEvent::Out => self.on_pointer_out.as_ref(),
            PointerEvent::Enter => self.on_pointer_enter.as_ref(),
            PointerEvent::Leave => self.on_pointer_leave.as_ref(),
            PointerEvent::Cancel => self.on_pointer_cancel.as_ref(),
        }
    }

    fn slot_mut(&mut self, event: PointerEvent) -> &mut Option<H> {
        match event {
            PointerEvent::Move => &mut self.on_pointer_move,
            PointerEvent::Down => &mut self.on_pointer_down,
            PointerEvent::Up => &mut self.on_pointer_up,
            PointerEvent::Over => &mut self.on_pointer_over,
            PointerEvent::Out => &mut self.on_pointer_out,
            PointerEvent::Enter => &mut self.on_pointer_enter,
            PointerEvent::Leave => &mut self.on_pointer_leave,
            PointerEvent::Cancel => &mut self.on_pointer_cancel,
        }
    }

    /// Replace the handler for `event`, returning the previous one.
    pub fn set_handler(&mut self, event: PointerEvent, handler: Option<H>) -> Option<H> {
        core::mem::replace(self.slot_mut(event), handler)
    }

    /// Builder form of [`set_handler`](Self::set_handler).
    pub fn with_handler(mut self, event: PointerEvent, handler: H) -> Self {
        *self.slot_mut(event) = Some(handler);
        self
    }

    /// Builder form for [`touch_action`](Self::touch_action).
    pub fn with_touch_action(mut self, touch_action: TouchAction) -> Self {
        self.touch_action = touch_action;
        self
    }

    /// Present handlers, in catalog order.
    pub fn handlers(&self) -> impl Iterator<Item = (PointerEvent, &H)> {
        PointerEvent::ALL
            .into_iter()
            .filter_map(move |e| self.handler(e).map(|h| (e, h)))
    }

    /// The set of events that have a handler.
    pub fn attached(&self) -> PointerEventSet {
        self.handlers().map(|(e, _)| e).collect()
    }

    /// Whether any handler is present.
    pub fn has_listeners(&self) -> bool {
        self.handlers().next().is_some()
    }
}

/// A shared closure handler that compares by identity.
///
/// Clones of one `Listener` are equal to each other.
/// Two listeners built from separate closures are never equal, even if the closures are identical.
pub struct Listener<E>(Rc<dyn Fn(&E)>);

impl<E> Listener<E> {
    /// Wrap a closure.
    pub fn new(f: impl Fn(&E) + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// Invoke the handler.
    pub fn call(&self, event: &E) {
        (self.0)(event);
    }
}

impl<E> Clone for Listener<E> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<E> PartialEq for Listener<E> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<E> Eq for Listener<E> {}

impl<E> fmt::Debug for Listener<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Listener")
            .field(&Rc::as_ptr(&self.0).cast::<()>())
            .finish()
    }
}
