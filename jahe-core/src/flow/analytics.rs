//! Fetch aggregate analytics and fill the statistics and weather regions.

use crate::analytics::{AnalyticsResponse, WeatherPanel};
use crate::backend::PriceBackend;
use crate::error::FetchError;
use crate::view::{PriceView, Region, ANALYTICS_FAILED};
use jahe_utils::currency::format_rupiah;

/// Run once on page load and again after every successful prediction.
///
/// A failed request only touches the weather region; the statistics keep
/// whatever they showed before.
pub async fn refresh_analytics<B, V>(backend: &B, view: &mut V) -> Result<AnalyticsResponse, FetchError>
where
    B: PriceBackend,
    V: PriceView,
{
    let analytics = match backend.analytics().await {
        Ok(analytics) => analytics,
        Err(e) => {
            log::error!("error getting analytics: {}", e);
            view.render_weather(WeatherPanel::Failed(ANALYTICS_FAILED.to_string()));
            return Err(e);
        }
    };

    view.render_stat(Region::AvgPrice, format_rupiah(analytics.avg_price));
    view.render_stat(Region::MaxPrice, format_rupiah(analytics.max_price));
    view.render_stat(Region::MinPrice, format_rupiah(analytics.min_price));
    if let Some(current) = analytics.current_price {
        view.render_stat(Region::CurrentPrice, format_rupiah(current));
    }
    if let Some(summary) = analytics.data_summary() {
        view.render_stat(Region::DataSummary, summary);
    }
    view.render_trend(analytics.price_trend);
    view.render_weather(WeatherPanel::from_snapshot(analytics.current_weather.as_ref()));

    Ok(analytics)
}
