//! `fetch`-based [`PriceBackend`] for the browser.

use crate::config::ApiConfig;
use jahe_core::backend::{decode_response, PriceBackend, ANALYTICS_PATH, PREDICT_PATH};
use jahe_core::days::{DayCount, PredictRequest};
use jahe_core::{AnalyticsResponse, FetchError, PredictionResponse};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

/// Talks to the backend with `window.fetch`. No retries, no timeout.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FetchBackend {
    config: ApiConfig,
}

impl FetchBackend {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Send one request and return the status and body text.
    async fn send(
        &self,
        path: &str,
        method: &str,
        json_body: Option<String>,
    ) -> Result<(u16, String), FetchError> {
        let url = self.config.endpoint(path);
        let transport = |e: JsValue| FetchError::Transport {
            endpoint: path.to_string(),
            reason: js_error_text(&e),
        };

        let init = RequestInit::new();
        init.set_method(method);
        if let Some(body) = &json_body {
            init.set_body(&JsValue::from_str(body));
        }
        let request = Request::new_with_str_and_init(&url, &init).map_err(transport)?;
        request
            .headers()
            .set("Accept", "application/json")
            .map_err(transport)?;
        if json_body.is_some() {
            request
                .headers()
                .set("Content-Type", "application/json")
                .map_err(transport)?;
        }

        let window = web_sys::window().ok_or_else(|| FetchError::Transport {
            endpoint: path.to_string(),
            reason: "no window".to_string(),
        })?;
        let value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(transport)?;
        let response: Response = value.dyn_into().map_err(transport)?;
        let status = response.status();

        let text = JsFuture::from(response.text().map_err(transport)?)
            .await
            .map_err(transport)?
            .as_string()
            .unwrap_or_default();
        log::debug!("{} {} -> {} ({} bytes)", method, url, status, text.len());
        Ok((status, text))
    }
}

impl PriceBackend for FetchBackend {
    async fn predict(&self, days: DayCount) -> Result<PredictionResponse, FetchError> {
        let body = serde_json::to_string(&PredictRequest { days }).map_err(|e| {
            FetchError::Transport {
                endpoint: PREDICT_PATH.to_string(),
                reason: e.to_string(),
            }
        })?;
        let (status, text) = self.send(PREDICT_PATH, "POST", Some(body)).await?;
        decode_response(PREDICT_PATH, status, &text)
    }

    async fn analytics(&self) -> Result<AnalyticsResponse, FetchError> {
        let (status, text) = self.send(ANALYTICS_PATH, "GET", None).await?;
        decode_response(ANALYTICS_PATH, status, &text)
    }
}

fn js_error_text(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
