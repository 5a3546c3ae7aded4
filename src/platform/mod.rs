//! Platform abstraction layer
//!
//! The core never calls a host directly. Each bridge here owns a `GameState`,
//! forwards host frame ticks and input edges into it, and hands back the
//! snapshot and drained events for the host to draw and play.

#[cfg(target_arch = "wasm32")]
pub mod web;
