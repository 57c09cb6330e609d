//! Browser side of the ginger price dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Chart.js calls via `js_sys::eval()` and the `ChartJs` backend
//! - `api`, `config`: the `fetch` backend and where it points
//! - `state`: reactive AppState with Dioxus Signals
//! - `view`: `DomView`, the flows' renderer over that state
//! - `components`: RSX pieces of the page

pub mod api;
pub mod components;
pub mod config;
pub mod js_bridge;
pub mod state;
pub mod view;
