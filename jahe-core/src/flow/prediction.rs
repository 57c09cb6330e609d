//! Validate -> request -> render for the "Prediksi" button.

use crate::backend::{PriceBackend, PREDICT_PATH};
use crate::chart::{presets, RenderOutcome};
use crate::days::DayCount;
use crate::error::{FetchError, FlowError};
use crate::price::PredictionResponse;
use crate::view::{ids, Notice, Phase, PriceView, Region, LOADING_PREDICTION, PREDICTION_FAILED};

/// Run one prediction request from raw input text.
///
/// Phases go `Validating -> Requesting -> Rendering -> Idle`, or through
/// `Error` to `Idle` when the input is rejected or the request fails. A
/// rejected input never reaches the backend. On failure the list shows an
/// inline error and the chart is left alone.
pub async fn request_prediction<B, V>(
    backend: &B,
    view: &mut V,
    input: &str,
) -> Result<PredictionResponse, FlowError>
where
    B: PriceBackend,
    V: PriceView,
{
    view.set_phase(Phase::Validating);
    let days = match DayCount::parse(input) {
        Ok(days) => days,
        Err(e) => {
            log::info!("rejected day count: {}", e);
            view.set_phase(Phase::Error);
            view.alert(e.user_message());
            view.set_phase(Phase::Idle);
            return Err(e.into());
        }
    };

    view.set_phase(Phase::Requesting);
    view.render_notice(
        Region::PredictionList,
        Notice::Loading(LOADING_PREDICTION.to_string()),
    );

    let response = match fetch_checked(backend, days).await {
        Ok(response) => response,
        Err(e) => {
            log::error!("prediction for {} days failed: {}", days, e);
            if let FetchError::Status {
                detail: Some(detail),
                ..
            } = &e
            {
                log::error!("server said: {}", detail);
            }
            view.set_phase(Phase::Error);
            view.render_notice(
                Region::PredictionList,
                Notice::Error(PREDICTION_FAILED.to_string()),
            );
            view.set_phase(Phase::Idle);
            return Err(e.into());
        }
    };

    view.set_phase(Phase::Rendering);
    view.render_list(response.rows());
    let spec = presets::prediction_chart(
        &response.historical_points(),
        &response.predicted_points(),
    );
    if view.render_chart(ids::PREDICTION_CHART, spec) == RenderOutcome::Skipped {
        log::debug!("prediction chart skipped");
    }
    log::info!("rendered {} predicted days", response.dates.len());
    view.set_phase(Phase::Idle);

    Ok(response)
}

async fn fetch_checked<B: PriceBackend>(
    backend: &B,
    days: DayCount,
) -> Result<PredictionResponse, FetchError> {
    let response = backend.predict(days).await?;
    response
        .check()
        .map_err(|reason| FetchError::Inconsistent {
            endpoint: PREDICT_PATH.to_string(),
            reason,
        })?;
    Ok(response)
}
