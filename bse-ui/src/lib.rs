//! Shared Dioxus components and D3.js bridge for the funnel screens.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js savings chart via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (cards, buttons, gauge, etc.)
//! - `format`: fr-FR display formatting for euro amounts

pub mod components;
pub mod format;
pub mod js_bridge;
pub mod state;
