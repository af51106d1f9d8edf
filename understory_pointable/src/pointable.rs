// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lifecycle holder that remembers the last applied configuration.
//!
//! ## Usage
//!
//! 1) Build a [`Pointable`] with the component's initial [`PointerConfig`].
//! 2) When the node is available, call [`Pointable::mount`]. This runs
//!    [`initialize`](crate::reconcile::initialize).
//! 3) On every later change, call [`Pointable::update`] with the new configuration. This runs
//!    [`reconcile`](crate::reconcile::reconcile) against the stored snapshot and then stores the new one.
//!
//! ```
//! use understory_pointable::catalog::PointerEvent;
//! use understory_pointable::pointable::Pointable;
//! use understory_pointable::record::{NodeCall, Recorder};
//! use understory_pointable::types::PointerConfig;
//!
//! let mut node = Recorder::new();
//! let mut p = Pointable::new(PointerConfig::new().with_handler(PointerEvent::Down, 1_u32));
//! p.mount(&mut node).unwrap();
//! p.update(&mut node, PointerConfig::new()).unwrap();
//! assert_eq!(
//!     node.calls(),
//!     &[
//!         NodeCall::AddListener("pointerdown", 1),
//!         NodeCall::SetAttribute("touch-action", "auto"),
//!         NodeCall::RemoveListener("pointerdown", 1),
//!         NodeCall::RemoveAttribute("touch-action"),
//!     ]
//! );
//! ```

use crate::reconcile::{initialize, reconcile};
use crate::types::{ListenerTarget, PointerConfig};

/// A component's pointer configuration together with its mount state.
///
/// The holder does not own the node; each call borrows it for the duration of the pass.
#[derive(Clone, Debug)]
pub struct Pointable<H> {
    config: PointerConfig<H>,
    mounted: bool,
}

impl<H> Default for Pointable<H> {
    fn default() -> Self {
        Self::new(PointerConfig::default())
    }
}

impl<H> Pointable<H> {
    /// Create an unmounted holder with `config` as the configuration to apply on mount.
    pub fn new(config: PointerConfig<H>) -> Self {
        Self {
            config,
            mounted: false,
        }
    }

    /// The last applied configuration, or the pending one before mount.
    pub fn config(&self) -> &PointerConfig<H> {
        &self.config
    }

    /// Whether [`mount`](Self::mount) has completed.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Attach the stored configuration to `node`.
    ///
    /// Mounting twice is a no-op. If the node fails, the holder stays unmounted.
    pub fn mount<N>(&mut self, node: &mut N) -> Result<(), N::Error>
    where
        N: ListenerTarget<H> + ?Sized,
    {
        if self.mounted {
            return Ok(());
        }
        initialize(node, &self.config)?;
        self.mounted = true;
        Ok(())
    }
}

impl<H: PartialEq> Pointable<H> {
    /// Move `node` from the stored configuration to `next`.
    ///
    /// Before mount, `next` simply replaces the pending configuration and the node is not touched.
    /// After mount, `next` is stored only once the reconcile pass has succeeded; on failure the
    /// previous snapshot is kept and the error returned.
    pub fn update<N>(&mut self, node: &mut N, next: PointerConfig<H>) -> Result<(), N::Error>
    where
        N: ListenerTarget<H> + ?Sized,
    {
        if self.mounted {
            reconcile(node, &self.config, &next)?;
        }
        self.config = next;
        Ok(())
    }
}
