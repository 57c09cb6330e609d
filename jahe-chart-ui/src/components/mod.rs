//! Reusable Dioxus RSX components for the dashboard page.

mod chart_canvas;
mod days_input;
mod error_display;
mod loading_spinner;
mod prediction_list;
mod section_header;
mod stat_card;
mod trend_badge;
mod weather_panel;

pub use chart_canvas::ChartCanvas;
pub use days_input::DaysInput;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use prediction_list::PredictionList;
pub use section_header::{anchor_id, SectionHeader};
pub use stat_card::StatCard;
pub use trend_badge::TrendBadge;
pub use weather_panel::WeatherPanel;
