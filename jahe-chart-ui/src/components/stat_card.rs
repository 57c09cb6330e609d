//! A single labelled statistic.

use dioxus::prelude::*;
use jahe_core::Region;

#[derive(Props, Clone, PartialEq)]
pub struct StatCardProps {
    /// Region the value belongs to (sets the element id)
    pub region: Region,
    pub label: String,
    /// Formatted value, `None` until analytics arrive
    pub value: Option<String>,
}

#[component]
pub fn StatCard(props: StatCardProps) -> Element {
    let value = props.value.clone().unwrap_or_else(|| "-".to_string());

    rsx! {
        div {
            class: "stat-card",
            style: "flex: 1; padding: 8px 12px; border: 1px solid #e0e0e0; border-radius: 4px;",
            div { style: "font-size: 12px; color: #666;", "{props.label}" }
            div {
                id: props.region.dom_id(),
                style: "font-size: 18px; font-weight: bold;",
                "{value}"
            }
        }
    }
}
