#![forbid(unsafe_code)]

//! Browser host boundary for the tilegrid reorder engine.
//!
//! Host-driven: JavaScript owns the event loop, forwarding pointer events
//! and layout measurements each frame; the engine answers with order
//! mutations the host re-renders from.
//!
//! [`GridController`] is the platform-independent half; it runs (and is
//! tested) natively. The `wasm` module wraps it in `wasm-bindgen` exports
//! for the browser build.

pub mod controller;

#[cfg(target_arch = "wasm32")]
mod wasm;

pub use controller::{GridController, GridLayoutSpec};

#[cfg(target_arch = "wasm32")]
pub use wasm::GridRunner;
