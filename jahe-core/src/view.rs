//! The view boundary the flows render through.
//!
//! The dashboard implements [`PriceView`] over Dioxus signals; tests implement
//! it with a recorder. Flow code never touches the DOM directly.

use crate::analytics::{Trend, WeatherPanel};
use crate::chart::{ChartSpec, RenderOutcome};
use crate::price::PredictionRow;

/// Element ids on the dashboard page.
pub mod ids {
    pub const PRICE_CHART: &str = "priceChart";
    pub const PREDICTION_CHART: &str = "predictionChart";
    pub const PREDICT_BUTTON: &str = "predict-btn";
    pub const DAYS_INPUT: &str = "days";
}

/// Shown in the list region while `/predict` is pending.
pub const LOADING_PREDICTION: &str = "Memproses prediksi...";
/// Shown in the list region when `/predict` fails.
pub const PREDICTION_FAILED: &str = "Error: Gagal mendapatkan prediksi";
/// Shown in the weather region when `/analytics` fails.
pub const ANALYTICS_FAILED: &str = "Error: Gagal mendapatkan data analitik";

/// Where the prediction request currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Idle,
    Validating,
    Requesting,
    Rendering,
    Error,
}

impl Phase {
    pub fn is_busy(self) -> bool {
        matches!(self, Phase::Requesting | Phase::Rendering)
    }
}

/// Text regions of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    PredictionList,
    AvgPrice,
    MaxPrice,
    MinPrice,
    CurrentPrice,
    PriceTrend,
    WeatherData,
    DataSummary,
}

impl Region {
    pub fn dom_id(self) -> &'static str {
        match self {
            Region::PredictionList => "prediction-list",
            Region::AvgPrice => "avg-price",
            Region::MaxPrice => "max-price",
            Region::MinPrice => "min-price",
            Region::CurrentPrice => "current-price",
            Region::PriceTrend => "price-trend",
            Region::WeatherData => "weather-data",
            Region::DataSummary => "data-summary",
        }
    }
}

/// Transient text shown in place of a region's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Loading(String),
    Error(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Notice::Loading(text) | Notice::Error(text) => text,
        }
    }

    /// CSS class of the wrapping element.
    pub fn css_class(&self) -> &'static str {
        match self {
            Notice::Loading(_) => "loading",
            Notice::Error(_) => "error",
        }
    }
}

/// Everything a flow can do to the page.
pub trait PriceView {
    /// Replace the prediction list with `rows`, clearing any notice.
    fn render_list(&mut self, rows: Vec<PredictionRow>);

    /// Replace a region's content with a loading or error notice.
    fn render_notice(&mut self, region: Region, notice: Notice);

    /// Write a formatted statistic into a region.
    fn render_stat(&mut self, region: Region, text: String);

    fn render_trend(&mut self, trend: Trend);

    fn render_weather(&mut self, panel: WeatherPanel);

    /// Draw `spec` on a canvas, replacing whatever chart was there.
    fn render_chart(&mut self, canvas_id: &str, spec: ChartSpec) -> RenderOutcome;

    /// Tell the user their input was rejected.
    fn alert(&mut self, message: &str);

    fn set_phase(&mut self, _phase: Phase) {}
}
