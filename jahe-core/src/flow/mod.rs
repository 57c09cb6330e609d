//! The page's request flows.
//!
//! Both flows take a [`PriceBackend`] and a [`PriceView`] and handle their own
//! errors by rendering them; the returned `Result` is informational.

mod analytics;
mod prediction;

pub use analytics::refresh_analytics;
pub use prediction::request_prediction;

use crate::backend::PriceBackend;
use crate::error::FlowError;
use crate::price::PredictionResponse;
use crate::view::PriceView;

/// Prediction, then (only if it succeeded) an analytics refresh.
///
/// The analytics step starts after the prediction has been fully rendered.
/// Its outcome never changes the returned result.
pub async fn predict_then_refresh<B, V>(
    backend: &B,
    view: &mut V,
    input: &str,
) -> Result<PredictionResponse, FlowError>
where
    B: PriceBackend,
    V: PriceView,
{
    let prediction = request_prediction(backend, view, input).await?;
    if let Err(e) = refresh_analytics(backend, view).await {
        log::warn!("analytics refresh after prediction failed: {}", e);
    }
    Ok(prediction)
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::analytics::{AnalyticsResponse, Trend, WeatherPanel};
    use crate::backend::PriceBackend;
    use crate::chart::memory::MemoryCanvas;
    use crate::chart::{presets, ChartRenderer, ChartSpec, RenderOutcome};
    use crate::days::DayCount;
    use crate::error::FetchError;
    use crate::price::{PredictionResponse, PredictionRow};
    use crate::view::{ids, Notice, Phase, PriceView, Region};
    use std::cell::RefCell;

    pub fn two_day_forecast() -> PredictionResponse {
        serde_json::from_str(
            r#"{
                "dates": ["2024-01-01", "2024-01-02"],
                "predictions": [35000, 35500],
                "historical_dates": ["2023-12-30", "2023-12-31"],
                "historical_prices": [34000, 34200]
            }"#,
        )
        .unwrap()
    }

    pub fn analytics_fixture(trend: &str, weather: &str) -> AnalyticsResponse {
        serde_json::from_str(&format!(
            r#"{{"avg_price": 20500, "max_price": 25000, "min_price": 15000,
                "price_trend": "{trend}", "current_weather": {weather}}}"#
        ))
        .unwrap()
    }

    /// Answers every call with a canned result and logs what was asked.
    pub struct FakeBackend {
        prediction: Option<Result<PredictionResponse, FetchError>>,
        analytics: Option<Result<AnalyticsResponse, FetchError>>,
        calls: RefCell<Vec<String>>,
    }

    impl FakeBackend {
        pub fn new() -> Self {
            Self {
                prediction: None,
                analytics: None,
                calls: RefCell::new(Vec::new()),
            }
        }

        pub fn with_prediction(mut self, result: Result<PredictionResponse, FetchError>) -> Self {
            self.prediction = Some(result);
            self
        }

        pub fn with_analytics(mut self, result: Result<AnalyticsResponse, FetchError>) -> Self {
            self.analytics = Some(result);
            self
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }

        fn unconfigured(endpoint: &str) -> FetchError {
            FetchError::Transport {
                endpoint: endpoint.to_string(),
                reason: "not configured".to_string(),
            }
        }
    }

    impl PriceBackend for FakeBackend {
        async fn predict(&self, days: DayCount) -> Result<PredictionResponse, FetchError> {
            self.calls.borrow_mut().push(format!("predict {days}"));
            self.prediction
                .clone()
                .unwrap_or_else(|| Err(Self::unconfigured("/predict")))
        }

        async fn analytics(&self) -> Result<AnalyticsResponse, FetchError> {
            self.calls.borrow_mut().push("analytics".to_string());
            self.analytics
                .clone()
                .unwrap_or_else(|| Err(Self::unconfigured("/analytics")))
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    pub enum ViewEvent {
        Phase(Phase),
        List(Vec<PredictionRow>),
        Notice(Region, Notice),
        Stat(Region, String),
        Trend(Trend),
        Weather(WeatherPanel),
        Chart(String, ChartSpec),
        Alert(String),
    }

    impl ViewEvent {
        /// Short name for ordering assertions; phases are left out.
        pub fn kind(&self) -> Option<&'static str> {
            match self {
                ViewEvent::Phase(_) => None,
                ViewEvent::List(_) => Some("list"),
                ViewEvent::Notice(..) => Some("notice"),
                ViewEvent::Stat(..) => Some("stat"),
                ViewEvent::Trend(_) => Some("trend"),
                ViewEvent::Weather(_) => Some("weather"),
                ViewEvent::Chart(..) => Some("chart"),
                ViewEvent::Alert(_) => Some("alert"),
            }
        }
    }

    /// Records every call and draws charts on in-memory canvases.
    pub struct RecordingView {
        pub events: Vec<ViewEvent>,
        pub charts: ChartRenderer<MemoryCanvas>,
    }

    impl RecordingView {
        pub fn new() -> Self {
            Self {
                events: Vec::new(),
                charts: ChartRenderer::new(MemoryCanvas::with_canvases(&[
                    ids::PRICE_CHART,
                    ids::PREDICTION_CHART,
                ])),
            }
        }

        /// Draw the placeholder chart the page shows on load.
        pub fn draw_sample_prediction(&mut self) {
            self.charts
                .render(ids::PREDICTION_CHART, &presets::sample_prediction_chart());
        }

        pub fn phases(&self) -> Vec<Phase> {
            self.events
                .iter()
                .filter_map(|e| match e {
                    ViewEvent::Phase(p) => Some(*p),
                    _ => None,
                })
                .collect()
        }

        pub fn lists(&self) -> Vec<Vec<PredictionRow>> {
            self.events
                .iter()
                .filter_map(|e| match e {
                    ViewEvent::List(rows) => Some(rows.clone()),
                    _ => None,
                })
                .collect()
        }

        pub fn notices(&self) -> Vec<Notice> {
            self.events
                .iter()
                .filter_map(|e| match e {
                    ViewEvent::Notice(_, n) => Some(n.clone()),
                    _ => None,
                })
                .collect()
        }

        pub fn stats(&self) -> Vec<(Region, String)> {
            self.events
                .iter()
                .filter_map(|e| match e {
                    ViewEvent::Stat(r, s) => Some((*r, s.clone())),
                    _ => None,
                })
                .collect()
        }

        pub fn trends(&self) -> Vec<Trend> {
            self.events
                .iter()
                .filter_map(|e| match e {
                    ViewEvent::Trend(t) => Some(*t),
                    _ => None,
                })
                .collect()
        }

        pub fn weather(&self) -> Vec<WeatherPanel> {
            self.events
                .iter()
                .filter_map(|e| match e {
                    ViewEvent::Weather(w) => Some(w.clone()),
                    _ => None,
                })
                .collect()
        }

        pub fn alerts(&self) -> Vec<String> {
            self.events
                .iter()
                .filter_map(|e| match e {
                    ViewEvent::Alert(a) => Some(a.clone()),
                    _ => None,
                })
                .collect()
        }
    }

    impl PriceView for RecordingView {
        fn render_list(&mut self, rows: Vec<PredictionRow>) {
            self.events.push(ViewEvent::List(rows));
        }

        fn render_notice(&mut self, region: Region, notice: Notice) {
            self.events.push(ViewEvent::Notice(region, notice));
        }

        fn render_stat(&mut self, region: Region, text: String) {
            self.events.push(ViewEvent::Stat(region, text));
        }

        fn render_trend(&mut self, trend: Trend) {
            self.events.push(ViewEvent::Trend(trend));
        }

        fn render_weather(&mut self, panel: WeatherPanel) {
            self.events.push(ViewEvent::Weather(panel));
        }

        fn render_chart(&mut self, canvas_id: &str, spec: ChartSpec) -> RenderOutcome {
            let outcome = self.charts.render(canvas_id, &spec);
            self.events.push(ViewEvent::Chart(canvas_id.to_string(), spec));
            outcome
        }

        fn alert(&mut self, message: &str) {
            self.events.push(ViewEvent::Alert(message.to_string()));
        }

        fn set_phase(&mut self, phase: Phase) {
            self.events.push(ViewEvent::Phase(phase));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{analytics_fixture, two_day_forecast, FakeBackend, RecordingView};
    use super::*;
    use crate::backend::PREDICT_PATH;
    use crate::error::FetchError;

    #[tokio::test]
    async fn test_analytics_follows_prediction() {
        let backend = FakeBackend::new()
            .with_prediction(Ok(two_day_forecast()))
            .with_analytics(Ok(analytics_fixture("up", "null")));
        let mut view = RecordingView::new();

        predict_then_refresh(&backend, &mut view, "2").await.unwrap();

        assert_eq!(backend.calls(), vec!["predict 2", "analytics"]);
        let kinds: Vec<&str> = view.events.iter().filter_map(|e| e.kind()).collect();
        let chart_at = kinds.iter().position(|k| *k == "chart").unwrap();
        let first_stat = kinds.iter().position(|k| *k == "stat").unwrap();
        assert!(chart_at < first_stat, "analytics rendered before prediction: {kinds:?}");
    }

    #[tokio::test]
    async fn test_failed_prediction_skips_analytics() {
        let backend = FakeBackend::new()
            .with_prediction(Err(FetchError::Status {
                endpoint: PREDICT_PATH.to_string(),
                status: 503,
                detail: None,
            }))
            .with_analytics(Ok(analytics_fixture("up", "null")));
        let mut view = RecordingView::new();

        assert!(predict_then_refresh(&backend, &mut view, "3").await.is_err());
        assert_eq!(backend.calls(), vec!["predict 3"]);
    }

    #[tokio::test]
    async fn test_invalid_input_makes_no_calls() {
        let backend = FakeBackend::new()
            .with_prediction(Ok(two_day_forecast()))
            .with_analytics(Ok(analytics_fixture("up", "null")));
        let mut view = RecordingView::new();

        assert!(predict_then_refresh(&backend, &mut view, "99").await.is_err());
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_analytics_failure_keeps_prediction() {
        let backend = FakeBackend::new().with_prediction(Ok(two_day_forecast()));
        let mut view = RecordingView::new();

        let prediction = predict_then_refresh(&backend, &mut view, "2").await.unwrap();
        assert_eq!(prediction.dates.len(), 2);
        assert_eq!(backend.calls(), vec!["predict 2", "analytics"]);
        assert_eq!(view.lists().len(), 1);
    }
}
