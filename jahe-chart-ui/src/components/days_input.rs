//! Day-count input and the predict button.

use crate::state::AppState;
use dioxus::prelude::*;
use jahe_core::view::ids;
use jahe_core::DayCount;

#[derive(Props, Clone, PartialEq)]
pub struct DaysInputProps {
    /// Called when the predict button is clicked
    pub on_predict: EventHandler<()>,
}

/// Number input for the forecast horizon plus the "Prediksi" button.
///
/// The raw text goes to `AppState::days_input`; validation happens in the flow.
#[component]
pub fn DaysInput(props: DaysInputProps) -> Element {
    let mut state = use_context::<AppState>();
    let current = (state.days_input)();
    let busy = (state.phase)().is_busy();
    let min = DayCount::MIN.to_string();
    let max = DayCount::MAX.to_string();

    let on_input = move |evt: Event<FormData>| {
        state.days_input.set(evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            label {
                r#for: ids::DAYS_INPUT,
                style: "font-weight: bold;",
                "Jumlah hari: "
            }
            input {
                id: ids::DAYS_INPUT,
                r#type: "number",
                value: "{current}",
                min: "{min}",
                max: "{max}",
                style: "width: 80px;",
                oninput: on_input,
            }
            button {
                id: ids::PREDICT_BUTTON,
                class: "btn btn-primary",
                onclick: move |_| props.on_predict.call(()),
                if busy { "Memproses..." } else { "Prediksi" }
            }
        }
    }
}
