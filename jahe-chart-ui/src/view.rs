//! [`PriceView`] over the page's signals and Chart.js canvases.

use crate::js_bridge::ChartJs;
use crate::state::AppState;
use dioxus::prelude::*;
use jahe_core::chart::{presets, ChartRenderer, ChartSpec, RenderOutcome};
use jahe_core::view::ids;
use jahe_core::{Notice, Phase, PredictionRow, PriceView, Region, Trend, WeatherPanel};
use std::cell::RefCell;
use std::rc::Rc;

/// The page's chart owner, shared by every flow run.
pub type SharedCharts = Rc<RefCell<ChartRenderer<ChartJs>>>;

pub fn new_shared_charts() -> SharedCharts {
    Rc::new(RefCell::new(ChartRenderer::new(ChartJs)))
}

/// Renders flow output into [`AppState`]; components pick it up reactively.
pub struct DomView {
    state: AppState,
    charts: SharedCharts,
}

impl DomView {
    pub fn new(state: AppState, charts: SharedCharts) -> Self {
        Self { state, charts }
    }

    /// Draw the static price-trend and sample prediction charts shown before
    /// the first request.
    pub fn draw_sample_charts(&mut self) {
        let history = presets::price_trend_chart(&presets::sample_price_history());
        if self.render_chart(ids::PRICE_CHART, history) == RenderOutcome::Skipped {
            log::debug!("#{} not mounted, sample trend skipped", ids::PRICE_CHART);
        }
        if self.render_chart(ids::PREDICTION_CHART, presets::sample_prediction_chart())
            == RenderOutcome::Skipped
        {
            log::debug!("#{} not mounted, sample prediction skipped", ids::PREDICTION_CHART);
        }
    }
}

impl PriceView for DomView {
    fn render_list(&mut self, rows: Vec<PredictionRow>) {
        self.state.list_notice.set(None);
        self.state.predictions.set(rows);
    }

    fn render_notice(&mut self, region: Region, notice: Notice) {
        match region {
            Region::PredictionList => {
                self.state.predictions.set(Vec::new());
                self.state.list_notice.set(Some(notice));
            }
            Region::WeatherData => {
                self.state
                    .weather
                    .set(WeatherPanel::Failed(notice.text().to_string()));
            }
            other => self.render_stat(other, notice.text().to_string()),
        }
    }

    fn render_stat(&mut self, region: Region, text: String) {
        match self.state.stat(region) {
            Some(mut signal) => signal.set(Some(text)),
            None => log::warn!("#{} is not a statistic region", region.dom_id()),
        }
    }

    fn render_trend(&mut self, trend: Trend) {
        self.state.trend.set(Some(trend));
    }

    fn render_weather(&mut self, panel: WeatherPanel) {
        self.state.weather.set(panel);
    }

    fn render_chart(&mut self, canvas_id: &str, spec: ChartSpec) -> RenderOutcome {
        self.charts.borrow_mut().render(canvas_id, &spec)
    }

    fn alert(&mut self, message: &str) {
        self.state.alert.set(Some(message.to_string()));
    }

    fn set_phase(&mut self, phase: Phase) {
        if phase == Phase::Validating {
            self.state.alert.set(None);
        }
        self.state.phase.set(phase);
    }
}
