//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use jahe_core::{Notice, Phase, PredictionRow, Region, Trend, WeatherPanel};

/// Shared state for the dashboard page.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Raw text of the day-count input
    pub days_input: Signal<String>,
    /// Where the latest prediction request is
    pub phase: Signal<Phase>,
    /// Rows of the prediction list
    pub predictions: Signal<Vec<PredictionRow>>,
    /// Loading/error text shown instead of the rows
    pub list_notice: Signal<Option<Notice>>,
    /// Rejected-input message
    pub alert: Signal<Option<String>>,
    pub avg_price: Signal<Option<String>>,
    pub max_price: Signal<Option<String>>,
    pub min_price: Signal<Option<String>>,
    pub current_price: Signal<Option<String>>,
    /// Data point count and date range behind the statistics
    pub data_summary: Signal<Option<String>>,
    pub trend: Signal<Option<Trend>>,
    pub weather: Signal<WeatherPanel>,
}

impl AppState {
    /// Default day count shown in the input.
    pub const DEFAULT_DAYS: &'static str = "7";

    pub fn new() -> Self {
        Self {
            days_input: Signal::new(Self::DEFAULT_DAYS.to_string()),
            phase: Signal::new(Phase::Idle),
            predictions: Signal::new(Vec::new()),
            list_notice: Signal::new(None),
            alert: Signal::new(None),
            avg_price: Signal::new(None),
            max_price: Signal::new(None),
            min_price: Signal::new(None),
            current_price: Signal::new(None),
            data_summary: Signal::new(None),
            trend: Signal::new(None),
            weather: Signal::new(WeatherPanel::Pending),
        }
    }

    /// The signal backing a text statistic region.
    pub fn stat(&self, region: Region) -> Option<Signal<Option<String>>> {
        match region {
            Region::AvgPrice => Some(self.avg_price),
            Region::MaxPrice => Some(self.max_price),
            Region::MinPrice => Some(self.min_price),
            Region::CurrentPrice => Some(self.current_price),
            Region::DataSummary => Some(self.data_summary),
            Region::PredictionList | Region::PriceTrend | Region::WeatherData => None,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
