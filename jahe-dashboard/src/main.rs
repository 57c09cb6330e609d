//! Ginger (jahe) price prediction dashboard
//!
//! Page flow:
//! 1. On mount: load Chart.js, draw the sample price-trend and prediction
//!    charts, and fetch `/analytics` once.
//! 2. On "Prediksi": validate the day count, `POST /predict`, render the list
//!    and the historical + predicted chart, then refresh analytics.

use dioxus::prelude::*;
use jahe_chart_ui::api::FetchBackend;
use jahe_chart_ui::components::{
    ChartCanvas, DaysInput, ErrorDisplay, PredictionList, SectionHeader, StatCard, TrendBadge,
    WeatherPanel,
};
use jahe_chart_ui::config::ApiConfig;
use jahe_chart_ui::js_bridge;
use jahe_chart_ui::state::AppState;
use jahe_chart_ui::view::{new_shared_charts, DomView, SharedCharts};
use jahe_core::flow::{predict_then_refresh, refresh_analytics};
use jahe_core::view::ids;
use jahe_core::Region;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("jahe-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);
    let charts: SharedCharts = use_hook(new_shared_charts);
    let backend: FetchBackend = use_hook(|| FetchBackend::new(ApiConfig::from_local_storage()));

    // ─── Mount: sample charts and the first analytics fetch ───
    let mount_charts = charts.clone();
    let mount_backend = backend.clone();
    use_effect(move || {
        js_bridge::init_charts();
        let mut view = DomView::new(state, mount_charts.clone());
        view.draw_sample_charts();

        let backend = mount_backend.clone();
        let charts = mount_charts.clone();
        spawn(async move {
            let mut view = DomView::new(state, charts);
            if let Err(e) = refresh_analytics(&backend, &mut view).await {
                log::warn!("initial analytics load failed: {}", e);
            }
        });
    });

    // ─── "Prediksi" click ───
    // Clicks are not coordinated: each one runs its own flow to completion.
    let on_predict = move |_: ()| {
        let input = (state.days_input)();
        let backend = backend.clone();
        let charts = charts.clone();
        spawn(async move {
            let mut view = DomView::new(state, charts);
            match predict_then_refresh(&backend, &mut view, &input).await {
                Ok(response) => log::info!("rendered {} predicted prices", response.dates.len()),
                Err(e) => log::info!("prediction did not complete: {}", e),
            }
        });
    };

    let alert = state.alert.read().clone();

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 900px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            SectionHeader {
                title: "Tren Harga Jahe".to_string(),
                hint: "Satuan: Rupiah per kilogram (Rp/kg)".to_string(),
            }
            ChartCanvas { id: ids::PRICE_CHART.to_string() }

            SectionHeader {
                title: "Prediksi Harga".to_string(),
                hint: "Jumlah hari antara 1-30".to_string(),
            }
            DaysInput { on_predict }
            if let Some(message) = alert {
                ErrorDisplay { message }
            }
            PredictionList {}
            ChartCanvas { id: ids::PREDICTION_CHART.to_string() }

            StatsSection {}
            SectionHeader { title: "Cuaca Saat Ini".to_string() }
            WeatherPanel {}
        }
    }
}

/// Price statistics and trend, with the data summary beside the heading.
#[component]
fn StatsSection() -> Element {
    let state = use_context::<AppState>();
    let summary = (state.data_summary)();

    rsx! {
        SectionHeader {
            title: "Analitik".to_string(),
            span {
                id: Region::DataSummary.dom_id(),
                style: "font-size: 11px; color: #888;",
                if let Some(summary) = summary { "{summary}" }
            }
        }
        div {
            style: "display: flex; gap: 8px; flex-wrap: wrap;",
            StatCard { region: Region::AvgPrice, label: "Harga Rata-rata".to_string(), value: (state.avg_price)() }
            StatCard { region: Region::MaxPrice, label: "Harga Tertinggi".to_string(), value: (state.max_price)() }
            StatCard { region: Region::MinPrice, label: "Harga Terendah".to_string(), value: (state.min_price)() }
            StatCard { region: Region::CurrentPrice, label: "Harga Saat Ini".to_string(), value: (state.current_price)() }
            TrendBadge {}
        }
    }
}
