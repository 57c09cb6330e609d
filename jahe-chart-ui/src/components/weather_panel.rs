//! Current weather region.

use crate::components::LoadingSpinner;
use crate::state::AppState;
use dioxus::prelude::*;
use jahe_core::analytics::WEATHER_UNAVAILABLE;
use jahe_core::{Region, WeatherPanel as Panel};

/// Weather readings, the unavailable placeholder, or the analytics error.
#[component]
pub fn WeatherPanel() -> Element {
    let state = use_context::<AppState>();
    let panel = state.weather.read().clone();

    rsx! {
        div {
            id: Region::WeatherData.dom_id(),
            match panel {
                Panel::Pending => rsx! { LoadingSpinner { message: "Memuat data cuaca...".to_string() } },
                Panel::Details(fields) => rsx! {
                    for field in fields.into_iter() {
                        div {
                            class: "weather-data-item",
                            strong { "{field.label}:" }
                            " {field.value}"
                        }
                    }
                },
                Panel::Unavailable => rsx! { p { "{WEATHER_UNAVAILABLE}" } },
                Panel::Failed(message) => rsx! { div { class: "error", "{message}" } },
            }
        }
    }
}
