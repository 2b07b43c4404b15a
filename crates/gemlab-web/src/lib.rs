#![forbid(unsafe_code)]

//! Browser runner for the gemlab combination picker.
//!
//! This crate provides [`SelectorRunner`] on `wasm32`, a `wasm-bindgen`
//! export that binds the `gemlab-core` selector to the page: slot text goes
//! to `#slot1`/`#slot2`, the step-2 row is `#row2`, the decide button is
//! `#decide-btn`, and notifications use `window.alert`.
//!
//! All logic the exports share lives in [`runner_core`], which has no JS
//! types and is exercised by native tests.

pub mod runner_core;

pub use runner_core::{RunnerCore, Snapshot};

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::SelectorRunner;
