//! Core of the ginger (jahe) price dashboard.
//!
//! Everything here is plain Rust with no browser dependency:
//! - `price`, `analytics`, `days`: wire types for `/predict` and `/analytics`
//! - `chart`: Chart.js line configurations and the per-canvas instance owner
//! - `view`, `backend`: the seams the flows render and fetch through
//! - `flow`: the prediction and analytics flows
//!
//! The WASM page in `jahe-chart-ui` supplies a DOM view and a `fetch` backend.

pub mod analytics;
pub mod backend;
pub mod chart;
pub mod days;
pub mod error;
pub mod flow;
pub mod price;
pub mod view;

pub use analytics::{AnalyticsResponse, Trend, WeatherPanel, WeatherSnapshot};
pub use backend::PriceBackend;
pub use chart::{ChartBackend, ChartRenderer, ChartSpec, RenderOutcome};
pub use days::DayCount;
pub use error::{FetchError, FlowError, ValidationError};
pub use price::{PredictionResponse, PredictionRow, PricePoint};
pub use view::{Notice, Phase, PriceView, Region};
