//! Loading indicator.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LoadingSpinnerProps {
    #[props(default = "Memuat data...".to_string())]
    pub message: String,
}

/// Simple loading indicator.
#[component]
pub fn LoadingSpinner(props: LoadingSpinnerProps) -> Element {
    rsx! {
        div {
            class: "loading",
            style: "display: flex; justify-content: center; align-items: center; padding: 16px; color: #666;",
            "{props.message}"
        }
    }
}
