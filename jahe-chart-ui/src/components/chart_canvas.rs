//! Canvas host for a Chart.js chart.

use dioxus::prelude::*;

/// Props for ChartCanvas
#[derive(Props, Clone, PartialEq)]
pub struct ChartCanvasProps {
    /// The DOM id of the canvas (Chart.js draws into this)
    pub id: String,
    /// Height of the chart area in pixels
    #[props(default = 360)]
    pub height: u32,
}

/// A fixed-height box holding a `<canvas>`.
///
/// Chart configs set `maintainAspectRatio: false`, so the wrapper decides the size.
#[component]
pub fn ChartCanvas(props: ChartCanvasProps) -> Element {
    let style = format!("height: {}px; position: relative; width: 100%;", props.height);

    rsx! {
        div {
            class: "chart-container",
            style: "{style}",
            canvas { id: "{props.id}" }
        }
    }
}
