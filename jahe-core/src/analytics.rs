//! The `/analytics` response: aggregate prices, trend and current weather.

use serde::{Deserialize, Deserializer};

/// Placeholder for a missing or failed weather lookup.
pub const WEATHER_UNAVAILABLE: &str = "Data cuaca tidak tersedia";

/// OpenWeatherMap status code for a successful lookup.
pub const WEATHER_OK: i64 = 200;

/// Body returned by `GET /analytics`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalyticsResponse {
    pub avg_price: f64,
    pub max_price: f64,
    pub min_price: f64,
    #[serde(default)]
    pub price_trend: Trend,
    #[serde(default)]
    pub current_price: Option<f64>,
    #[serde(default)]
    pub total_data_points: Option<u64>,
    #[serde(default)]
    pub date_range: Option<DateRange>,
    #[serde(default, deserialize_with = "lenient_weather")]
    pub current_weather: Option<WeatherSnapshot>,
}

impl AnalyticsResponse {
    /// Short description of the data behind the statistics, if the backend sent any.
    pub fn data_summary(&self) -> Option<String> {
        let range = self
            .date_range
            .as_ref()
            .map(|r| format!("{} s/d {}", r.start, r.end));
        match (self.total_data_points, range) {
            (Some(points), Some(range)) => Some(format!("{points} data harga, {range}")),
            (Some(points), None) => Some(format!("{points} data harga")),
            (None, Some(range)) => Some(range),
            (None, None) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

/// Direction of recent price movement.
///
/// Anything the backend sends other than `up` or `down` is treated as stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Trend {
    Up,
    Down,
    #[default]
    Stable,
}

impl Trend {
    pub fn from_wire(raw: &str) -> Self {
        match raw {
            "up" => Trend::Up,
            "down" => Trend::Down,
            _ => Trend::Stable,
        }
    }

    /// Localized label.
    pub fn label(self) -> &'static str {
        match self {
            Trend::Up => "Naik",
            Trend::Down => "Turun",
            Trend::Stable => "Stabil",
        }
    }

    /// CSS class applied to the label.
    pub fn css_class(self) -> &'static str {
        match self {
            Trend::Up => "trend-up",
            Trend::Down => "trend-down",
            Trend::Stable => "trend-neutral",
        }
    }
}

impl<'de> Deserialize<'de> for Trend {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(Trend::from_wire).unwrap_or_default())
    }
}

/// Current weather as relayed from OpenWeatherMap.
///
/// Every field is optional because error payloads only carry `cod` and `message`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct WeatherSnapshot {
    #[serde(deserialize_with = "status_code")]
    pub cod: Option<i64>,
    pub name: String,
    pub sys: WeatherSys,
    pub main: WeatherMain,
    pub weather: Vec<WeatherCondition>,
    pub wind: WeatherWind,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct WeatherSys {
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct WeatherMain {
    pub temp: Option<f64>,
    pub temp_min: Option<f64>,
    pub temp_max: Option<f64>,
    pub humidity: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct WeatherCondition {
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct WeatherWind {
    pub speed: Option<f64>,
}

impl WeatherSnapshot {
    pub fn is_ok(&self) -> bool {
        self.cod == Some(WEATHER_OK)
    }

    /// The fixed set of labelled readings shown in the weather region.
    pub fn fields(&self) -> Vec<WeatherField> {
        let description = self
            .weather
            .first()
            .map(|w| w.description.as_str())
            .filter(|d| !d.is_empty())
            .unwrap_or("-");
        vec![
            WeatherField::new("Kota", format!("{}, {}", self.name, self.sys.country)),
            WeatherField::new(
                "Suhu",
                format!(
                    "{}°C (Min: {}°C, Max: {}°C)",
                    reading(self.main.temp),
                    reading(self.main.temp_min),
                    reading(self.main.temp_max)
                ),
            ),
            WeatherField::new("Kelembapan", format!("{}%", reading(self.main.humidity))),
            WeatherField::new("Deskripsi", description),
            WeatherField::new("Kecepatan Angin", format!("{} m/s", reading(self.wind.speed))),
        ]
    }
}

/// A labelled line of the weather region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherField {
    pub label: &'static str,
    pub value: String,
}

impl WeatherField {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// What the weather region shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WeatherPanel {
    /// Nothing fetched yet.
    #[default]
    Pending,
    Details(Vec<WeatherField>),
    Unavailable,
    /// The analytics request itself failed.
    Failed(String),
}

impl WeatherPanel {
    pub fn from_snapshot(snapshot: Option<&WeatherSnapshot>) -> Self {
        match snapshot {
            Some(weather) if weather.is_ok() => WeatherPanel::Details(weather.fields()),
            _ => WeatherPanel::Unavailable,
        }
    }
}

fn reading(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawStatus {
    Number(i64),
    Text(String),
}

fn status_code<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    Ok(match Option::<RawStatus>::deserialize(deserializer)? {
        Some(RawStatus::Number(code)) => Some(code),
        Some(RawStatus::Text(code)) => code.trim().parse().ok(),
        None => None,
    })
}

/// Decode an optional weather snapshot, treating anything malformed as absent.
pub(crate) fn lenient_weather<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<WeatherSnapshot>, D::Error> {
    let raw = serde_json::Value::deserialize(deserializer)?;
    if raw.is_null() {
        return Ok(None);
    }
    match serde_json::from_value(raw) {
        Ok(snapshot) => Ok(Some(snapshot)),
        Err(e) => {
            log::warn!("ignoring malformed weather snapshot: {}", e);
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JAKARTA: &str = r#"{
        "cod": 200,
        "name": "Jakarta",
        "sys": {"country": "ID"},
        "main": {"temp": 30.5, "temp_min": 29, "temp_max": 32.1, "humidity": 70},
        "weather": [{"description": "awan pecah"}],
        "wind": {"speed": 3.6}
    }"#;

    fn analytics_with(trend: &str, weather: &str) -> AnalyticsResponse {
        serde_json::from_str(&format!(
            r#"{{"avg_price": 20000, "max_price": 25000, "min_price": 15000,
                "price_trend": {trend}, "current_weather": {weather}}}"#
        ))
        .unwrap()
    }

    #[test]
    fn test_trend_mapping() {
        assert_eq!(analytics_with(r#""up""#, "null").price_trend, Trend::Up);
        assert_eq!(analytics_with(r#""down""#, "null").price_trend, Trend::Down);
        assert_eq!(analytics_with(r#""stable""#, "null").price_trend, Trend::Stable);
        assert_eq!(analytics_with(r#""sideways""#, "null").price_trend, Trend::Stable);
        assert_eq!(analytics_with("null", "null").price_trend, Trend::Stable);

        assert_eq!(Trend::Up.label(), "Naik");
        assert_eq!(Trend::Up.css_class(), "trend-up");
        assert_eq!(Trend::Down.label(), "Turun");
        assert_eq!(Trend::Stable.css_class(), "trend-neutral");
    }

    #[test]
    fn test_weather_details() {
        let analytics = analytics_with(r#""up""#, JAKARTA);
        let panel = WeatherPanel::from_snapshot(analytics.current_weather.as_ref());
        let fields = match panel {
            WeatherPanel::Details(fields) => fields,
            other => panic!("expected weather details, got {other:?}"),
        };
        let rendered: Vec<(&str, &str)> = fields
            .iter()
            .map(|f| (f.label, f.value.as_str()))
            .collect();
        assert_eq!(
            rendered,
            vec![
                ("Kota", "Jakarta, ID"),
                ("Suhu", "30.5°C (Min: 29°C, Max: 32.1°C)"),
                ("Kelembapan", "70%"),
                ("Deskripsi", "awan pecah"),
                ("Kecepatan Angin", "3.6 m/s"),
            ]
        );
    }

    #[test]
    fn test_weather_not_found_is_unavailable() {
        let analytics = analytics_with(r#""up""#, r#"{"cod": 404, "message": "city not found"}"#);
        assert_eq!(analytics.current_weather.as_ref().unwrap().cod, Some(404));
        assert_eq!(
            WeatherPanel::from_snapshot(analytics.current_weather.as_ref()),
            WeatherPanel::Unavailable
        );

        let text_code = analytics_with(r#""up""#, r#"{"cod": "404"}"#);
        assert_eq!(text_code.current_weather.unwrap().cod, Some(404));
    }

    #[test]
    fn test_missing_or_malformed_weather_is_unavailable() {
        let missing: AnalyticsResponse = serde_json::from_str(
            r#"{"avg_price": 1, "max_price": 2, "min_price": 0, "price_trend": "up"}"#,
        )
        .unwrap();
        assert_eq!(
            WeatherPanel::from_snapshot(missing.current_weather.as_ref()),
            WeatherPanel::Unavailable
        );

        let malformed = analytics_with(r#""up""#, r#""sunny""#);
        assert!(malformed.current_weather.is_none());
    }

    #[test]
    fn test_data_summary() {
        let full: AnalyticsResponse = serde_json::from_str(
            r#"{"avg_price": 1, "max_price": 2, "min_price": 0, "price_trend": "down",
                "current_price": 1.5, "total_data_points": 366,
                "date_range": {"start": "2023-01-01", "end": "2024-01-01"},
                "trend_text": "Turun"}"#,
        )
        .unwrap();
        assert_eq!(full.current_price, Some(1.5));
        assert_eq!(
            full.data_summary().as_deref(),
            Some("366 data harga, 2023-01-01 s/d 2024-01-01")
        );
        assert_eq!(analytics_with(r#""up""#, "null").data_summary(), None);
    }
}
