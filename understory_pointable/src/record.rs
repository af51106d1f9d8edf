// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An in-memory node that records every call made to it.
//!
//! [`Recorder`] is useful for tests and for hosts that want to inspect or batch node work before
//! applying it elsewhere. Besides the raw call log it keeps the resulting live state, i.e. the
//! attached listeners and attribute values, the way a real node would.

use alloc::vec::Vec;
use core::convert::Infallible;

use crate::types::ListenerTarget;

/// One call made on a [`ListenerTarget`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeCall<H> {
    /// `add_listener(event, handler)`.
    AddListener(&'static str, H),
    /// `remove_listener(event, handler)`.
    RemoveListener(&'static str, H),
    /// `set_attribute(name, value)`.
    SetAttribute(&'static str, &'static str),
    /// `remove_attribute(name)`.
    RemoveAttribute(&'static str),
}

/// A [`ListenerTarget`] that logs calls and tracks the listeners and attributes they leave behind.
///
/// Adding a listener that is already attached for the same event is recorded but leaves a single
/// live entry, as DOM event targets do. Removing one that is not attached is likewise a no-op on
/// the live state.
#[derive(Clone, Debug)]
pub struct Recorder<H> {
    calls: Vec<NodeCall<H>>,
    listeners: Vec<(&'static str, H)>,
    attributes: Vec<(&'static str, &'static str)>,
}

impl<H> Default for Recorder<H> {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            listeners: Vec::new(),
            attributes: Vec::new(),
        }
    }
}

impl<H> Recorder<H> {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls recorded since creation or the last [`clear`](Self::clear) / [`take`](Self::take).
    pub fn calls(&self) -> &[NodeCall<H>] {
        &self.calls
    }

    /// Take the recorded calls, leaving the log empty. Live state is kept.
    pub fn take(&mut self) -> Vec<NodeCall<H>> {
        core::mem::take(&mut self.calls)
    }

    /// Forget the recorded calls. Live state is kept.
    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// Currently attached listeners, in the order they were attached.
    pub fn live_listeners(&self) -> impl Iterator<Item = (&'static str, &H)> {
        self.listeners.iter().map(|(e, h)| (*e, h))
    }

    /// Current value of attribute `name`, if set.
    pub fn attribute(&self, name: &str) -> Option<&'static str> {
        self.attributes
            .iter()
            .find(|(n, _)| *n == name)
            .map(|&(_, v)| v)
    }
}

impl<H: Clone + PartialEq> ListenerTarget<H> for Recorder<H> {
    type Error = Infallible;

    fn add_listener(&mut self, event: &'static str, handler: &H) -> Result<(), Infallible> {
        self.calls.push(NodeCall::AddListener(event, handler.clone()));
        if !self
            .listeners
            .iter()
            .any(|(e, h)| *e == event && h == handler)
        {
            self.listeners.push((event, handler.clone()));
        }
        Ok(())
    }

    fn remove_listener(&mut self, event: &'static str, handler: &H) -> Result<(), Infallible> {
        self.calls
            .push(NodeCall::RemoveListener(event, handler.clone()));
        self.listeners.retain(|(e, h)| !(*e == event && h == handler));
        Ok(())
    }

    fn set_attribute(&mut self, name: &'static str, value: &'static str) -> Result<(), Infallible> {
        self.calls.push(NodeCall::SetAttribute(name, value));
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
        Ok(())
    }

    fn remove_attribute(&mut self, name: &'static str) -> Result<(), Infallible> {
        self.calls.push(NodeCall::RemoveAttribute(name));
        self.attributes.retain(|(n, _)| *n != name);
        Ok(())
    }
}
