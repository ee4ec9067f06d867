//! Platform abstraction layer
//!
//! Handles the edges between the simulation and its host:
//! - Input events to per-tick intents
//! - Browser bindings (wasm32 only)

pub mod input;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use input::{Button, InputState, SwipeTracker};
