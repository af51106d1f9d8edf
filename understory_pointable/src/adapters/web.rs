// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM elements as listener targets.
//!
//! ## Feature
//!
//! Enable with `web`.
//!
//! ## Notes
//!
//! Handlers are `js_sys::Function` values, compared with JavaScript identity, so a config holding
//! the same function object across renders leaves its listener alone.
//! Keep the Rust-side closure alive (for example a `wasm_bindgen::closure::Closure` stored by the
//! component) for as long as any config refers to its function.

use js_sys::Function;
use wasm_bindgen::JsValue;
use web_sys::Element;

use crate::types::ListenerTarget;

impl ListenerTarget<Function> for Element {
    type Error = JsValue;

    fn add_listener(&mut self, event: &'static str, handler: &Function) -> Result<(), JsValue> {
        self.add_event_listener_with_callback(event, handler)
    }

    fn remove_listener(&mut self, event: &'static str, handler: &Function) -> Result<(), JsValue> {
        self.remove_event_listener_with_callback(event, handler)
    }

    fn set_attribute(&mut self, name: &'static str, value: &'static str) -> Result<(), JsValue> {
        Self::set_attribute(self, name, value)
    }

    fn remove_attribute(&mut self, name: &'static str) -> Result<(), JsValue> {
        Self::remove_attribute(self, name)
    }
}
