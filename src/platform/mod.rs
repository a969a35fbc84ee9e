//! Platform abstraction layer
//!
//! Host integrations that drive a `Session`:
//! - `web`: browser bindings (wasm32 only)

#[cfg(target_arch = "wasm32")]
pub mod web;
