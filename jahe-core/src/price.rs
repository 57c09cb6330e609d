//! Price series and the `/predict` response.

use crate::analytics::{lenient_weather, WeatherSnapshot};
use jahe_utils::currency::format_rupiah;
use serde::{Deserialize, Deserializer, Serialize};

/// One dated price, in Rupiah per kilogram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: String,
    pub price: f64,
}

impl PricePoint {
    pub fn new(date: impl Into<String>, price: f64) -> Self {
        Self {
            date: date.into(),
            price,
        }
    }
}

/// Body returned by `POST /predict`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PredictionResponse {
    pub dates: Vec<String>,
    pub predictions: Vec<f64>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub historical_dates: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub historical_prices: Vec<f64>,
    /// Sent by the backend alongside the forecast; the analytics flow renders
    /// weather, so this is kept only for callers that want it.
    #[serde(default, deserialize_with = "lenient_weather")]
    pub current_weather: Option<WeatherSnapshot>,
}

impl PredictionResponse {
    /// Reject a response whose forecast dates and prices do not pair up.
    pub fn check(&self) -> Result<(), String> {
        if self.dates.len() != self.predictions.len() {
            return Err(format!(
                "{} dates but {} predictions",
                self.dates.len(),
                self.predictions.len()
            ));
        }
        Ok(())
    }

    /// The forecast as dated points, in response order.
    pub fn predicted_points(&self) -> Vec<PricePoint> {
        pair_up(&self.dates, &self.predictions)
    }

    /// The trailing history as dated points.
    ///
    /// Extra dates or prices on either side are dropped.
    pub fn historical_points(&self) -> Vec<PricePoint> {
        if self.historical_dates.len() != self.historical_prices.len() {
            log::warn!(
                "historical series length mismatch ({} dates, {} prices); truncating",
                self.historical_dates.len(),
                self.historical_prices.len()
            );
        }
        pair_up(&self.historical_dates, &self.historical_prices)
    }

    /// One display row per forecast day.
    pub fn rows(&self) -> Vec<PredictionRow> {
        self.predicted_points()
            .iter()
            .map(PredictionRow::from_point)
            .collect()
    }
}

/// A rendered line of the prediction list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionRow {
    pub date: String,
    pub price: String,
}

impl PredictionRow {
    pub fn from_point(point: &PricePoint) -> Self {
        Self {
            date: point.date.clone(),
            price: format_rupiah(point.price),
        }
    }
}

fn pair_up(dates: &[String], prices: &[f64]) -> Vec<PricePoint> {
    dates
        .iter()
        .zip(prices)
        .map(|(date, price)| PricePoint::new(date.clone(), *price))
        .collect()
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_are_formatted_in_order() {
        let response: PredictionResponse = serde_json::from_str(
            r#"{"dates": ["2024-01-01", "2024-01-02"], "predictions": [35000, 35500]}"#,
        )
        .unwrap();
        assert!(response.check().is_ok());

        let rows = response.rows();
        assert_eq!(
            rows,
            vec![
                PredictionRow {
                    date: "2024-01-01".to_string(),
                    price: "Rp 35.000".to_string()
                },
                PredictionRow {
                    date: "2024-01-02".to_string(),
                    price: "Rp 35.500".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_repeated_dates_stay_separate_rows() {
        let response: PredictionResponse = serde_json::from_str(
            r#"{"dates": ["2024-01-01", "2024-01-01"], "predictions": [35000, 35062.5]}"#,
        )
        .unwrap();
        let rows = response.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].date, rows[1].date);
        assert_eq!(rows[1].price, "Rp 35.062,5");
    }

    #[test]
    fn test_optional_history_and_weather() {
        let response: PredictionResponse = serde_json::from_str(
            r#"{
                "dates": ["2024-01-03"],
                "predictions": [36000.25],
                "historical_dates": null,
                "current_weather": null
            }"#,
        )
        .unwrap();
        assert!(response.historical_points().is_empty());
        assert!(response.current_weather.is_none());
        assert_eq!(response.rows()[0].price, "Rp 36.000,25");
    }

    #[test]
    fn test_mismatched_forecast_fails_check() {
        let response: PredictionResponse =
            serde_json::from_str(r#"{"dates": ["2024-01-01"], "predictions": [1, 2]}"#).unwrap();
        assert_eq!(response.check(), Err("1 dates but 2 predictions".to_string()));
    }

    #[test]
    fn test_history_truncates_to_shorter_side() {
        let response: PredictionResponse = serde_json::from_str(
            r#"{
                "dates": [],
                "predictions": [],
                "historical_dates": ["2023-12-30", "2023-12-31"],
                "historical_prices": [34000]
            }"#,
        )
        .unwrap();
        assert_eq!(
            response.historical_points(),
            vec![PricePoint::new("2023-12-30", 34000.0)]
        );
    }
}
