//! Price trend indicator.

use crate::state::AppState;
use dioxus::prelude::*;
use jahe_core::Region;

/// "Naik", "Turun" or "Stabil", styled by direction.
#[component]
pub fn TrendBadge() -> Element {
    let state = use_context::<AppState>();
    let trend = (state.trend)();
    let (class, label) = match trend {
        Some(trend) => (trend.css_class(), trend.label()),
        None => ("", "-"),
    };

    rsx! {
        div {
            class: "stat-card",
            style: "flex: 1; padding: 8px 12px; border: 1px solid #e0e0e0; border-radius: 4px;",
            div { style: "font-size: 12px; color: #666;", "Tren Harga" }
            div {
                id: Region::PriceTrend.dom_id(),
                style: "font-size: 18px; font-weight: bold;",
                span { class, "{label}" }
            }
        }
    }
}
