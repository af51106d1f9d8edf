// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The fixed catalog of pointer events.
//!
//! ## Overview
//!
//! [`PointerEvent`] names every event a [`PointerConfig`](crate::types::PointerConfig) can carry a
//! handler for. Each entry pairs a logical (declarative prop) name with the platform event name
//! passed to the node.
//!
//! [`PointerEvent::ALL`] lists the entries in declaration order. Both passes in
//! [`reconcile`](crate::reconcile) iterate it, so that order is the order node calls are issued in.
//!
//! [`PointerEventSet`] is a compact set of entries. Its [`events`](PointerEventSet::events) iterator
//! also yields catalog order.

use core::fmt;

/// A pointer event the node can be asked to listen for.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointerEvent {
    /// `onPointerMove` / `pointermove`.
    #[cfg_attr(feature = "serde", serde(rename = "pointermove"))]
    Move,
    /// `onPointerDown` / `pointerdown`.
    #[cfg_attr(feature = "serde", serde(rename = "pointerdown"))]
    Down,
    /// `onPointerUp` / `pointerup`.
    #[cfg_attr(feature = "serde", serde(rename = "pointerup"))]
    Up,
    /// `onPointerOver` / `pointerover`.
    #[cfg_attr(feature = "serde", serde(rename = "pointerover"))]
    Over,
    /// `onPointerOut` / `pointerout`.
    #[cfg_attr(feature = "serde", serde(rename = "pointerout"))]
    Out,
    /// `onPointerEnter` / `pointerenter`.
    #[cfg_attr(feature = "serde", serde(rename = "pointerenter"))]
    Enter,
    /// `onPointerLeave` / `pointerleave`.
    #[cfg_attr(feature = "serde", serde(rename = "pointerleave"))]
    Leave,
    /// `onPointerCancel` / `pointercancel`.
    #[cfg_attr(feature = "serde", serde(rename = "pointercancel"))]
    Cancel,
}

impl PointerEvent {
    /// Every catalog entry, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Move,
        Self::Down,
        Self::Up,
        Self::Over,
        Self::Out,
        Self::Enter,
        Self::Leave,
        Self::Cancel,
    ];

    /// Platform event name passed to the node's listener calls.
    pub const fn platform_name(self) -> &'static str {
        match self {
            Self::Move => "pointermove",
            Self::Down => "pointerdown",
            Self::Up => "pointerup",
            Self::Over => "pointerover",
            Self::Out => "pointerout",
            Self::Enter => "pointerenter",
            Self::Leave => "pointerleave",
            Self::Cancel => "pointercancel",
        }
    }

    /// Declarative name of the handler slot, as a component would spell it.
    pub const fn logical_name(self) -> &'static str {
        match self {
            Self::Move => "onPointerMove",
            Self::Down => "onPointerDown",
            Self::Up => "onPointerUp",
            Self::Over => "onPointerOver",
            Self::Out => "onPointerOut",
            Self::Enter => "onPointerEnter",
            Self::Leave => "onPointerLeave",
            Self::Cancel => "onPointerCancel",
        }
    }

    /// Look up an entry by platform name (e.g. `"pointerdown"`).
    pub fn from_platform_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.platform_name() == name)
    }

    /// Look up an entry by logical name (e.g. `"onPointerDown"`).
    pub fn from_logical_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.logical_name() == name)
    }

    /// The single-entry set containing this event.
    pub const fn flag(self) -> PointerEventSet {
        match self {
            Self::Move => PointerEventSet::MOVE,
            Self::Down => PointerEventSet::DOWN,
            Self::Up => PointerEventSet::UP,
            Self::Over => PointerEventSet::OVER,
            Self::Out => PointerEventSet::OUT,
            Self::Enter => PointerEventSet::ENTER,
            Self::Leave => PointerEventSet::LEAVE,
            Self::Cancel => PointerEventSet::CANCEL,
        }
    }
}

impl fmt::Display for PointerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.platform_name())
    }
}

bitflags::bitflags! {
    /// A set of catalog events, one bit per entry.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct PointerEventSet: u8 {
        /// [`PointerEvent::Move`].
        const MOVE   = 0b0000_0001;
        /// [`PointerEvent::Down`].
        const DOWN   = 0b0000_0010;
        /// [`PointerEvent::Up`].
        const UP     = 0b0000_0100;
        /// [`PointerEvent::Over`].
        const OVER   = 0b0000_1000;
        /// [`PointerEvent::Out`].
        const OUT    = 0b0001_0000;
        /// [`PointerEvent::Enter`].
        const ENTER  = 0b0010_0000;
        /// [`PointerEvent::Leave`].
        const LEAVE  = 0b0100_0000;
        /// [`PointerEvent::Cancel`].
        const CANCEL = 0b1000_0000;
    }
}

impl PointerEventSet {
    /// Iterate the events in this set in catalog order.
    pub fn events(self) -> impl Iterator<Item = PointerEvent> {
        PointerEvent::ALL
            .into_iter()
            .filter(move |e| self.contains(e.flag()))
    }
}

impl From<PointerEvent> for PointerEventSet {
    fn from(event: PointerEvent) -> Self {
        event.flag()
    }
}

impl FromIterator<PointerEvent> for PointerEventSet {
    fn from_iter<I: IntoIterator<Item = PointerEvent>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |set, event| set | event.flag())
    }
}
