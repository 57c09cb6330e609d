//! The two backend endpoints, as seen from the page.

use crate::analytics::AnalyticsResponse;
use crate::days::DayCount;
use crate::error::FetchError;
use crate::price::PredictionResponse;
use serde::de::DeserializeOwned;
use serde::Deserialize;

pub const PREDICT_PATH: &str = "/predict";
pub const ANALYTICS_PATH: &str = "/analytics";

/// Access to `/predict` and `/analytics`.
///
/// Futures are not `Send`; implementations run on the browser's single thread.
#[allow(async_fn_in_trait)]
pub trait PriceBackend {
    /// `POST /predict` with `{"days": n}`.
    async fn predict(&self, days: DayCount) -> Result<PredictionResponse, FetchError>;

    /// `GET /analytics`.
    async fn analytics(&self) -> Result<AnalyticsResponse, FetchError>;
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Turn a finished HTTP exchange into a typed body.
///
/// Non-2xx statuses become [`FetchError::Status`], carrying the backend's
/// `{"error": "..."}` message when it sent one.
pub fn decode_response<T: DeserializeOwned>(
    endpoint: &str,
    status: u16,
    body: &str,
) -> Result<T, FetchError> {
    if !(200..300).contains(&status) {
        let detail = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .map(|b| b.error);
        return Err(FetchError::Status {
            endpoint: endpoint.to_string(),
            status,
            detail,
        });
    }
    serde_json::from_str(body).map_err(|e| FetchError::Decode {
        endpoint: endpoint.to_string(),
        reason: e.to_string(),
    })
}
