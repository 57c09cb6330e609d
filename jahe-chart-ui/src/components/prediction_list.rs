//! The list of predicted prices.

use crate::state::AppState;
use dioxus::prelude::*;
use jahe_core::{Notice, Region};

/// One row per forecast day, or the current loading/error notice.
#[component]
pub fn PredictionList() -> Element {
    let state = use_context::<AppState>();
    let notice = state.list_notice.read().clone();
    let rows = state.predictions.read().clone();

    rsx! {
        div {
            id: Region::PredictionList.dom_id(),
            if let Some(notice) = notice {
                NoticeLine { notice }
            } else {
                for (i, row) in rows.iter().enumerate() {
                    div {
                        key: "{i}",
                        class: "prediction-item",
                        span { class: "prediction-date", "{row.date}" }
                        " "
                        span { class: "prediction-price", "{row.price}" }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct NoticeLineProps {
    notice: Notice,
}

#[component]
fn NoticeLine(props: NoticeLineProps) -> Element {
    let class = props.notice.css_class();
    let text = props.notice.text().to_string();
    rsx! {
        div { class, "{text}" }
    }
}
