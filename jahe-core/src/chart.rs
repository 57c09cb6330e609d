//! Line chart configuration and ownership of live chart instances.
//!
//! [`ChartSpec`] serializes to the configuration object Chart.js expects for
//! `new Chart(ctx, config)`. [`ChartRenderer`] owns at most one live instance
//! per canvas and always disposes the old one before drawing a new one.
//! Drawing itself goes through a [`ChartBackend`] so the ownership rules can be
//! exercised without a browser.

use serde::Serialize;
use std::collections::HashMap;

/// A complete line chart configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

/// One plotted series. `None` entries are gaps in the line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<Option<f64>>,
    pub border_color: String,
    pub background_color: String,
    pub border_width: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub border_dash: Vec<u32>,
    pub fill: bool,
    pub tension: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub plugins: Plugins,
    pub scales: Scales,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plugins {
    pub title: TitleOptions,
    pub legend: LegendOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitleOptions {
    pub display: bool,
    pub text: String,
}

impl TitleOptions {
    fn shown(text: impl Into<String>) -> Self {
        Self {
            display: true,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendOptions {
    pub display: bool,
    pub position: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scales {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<Axis>,
    pub y: Axis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    pub begin_at_zero: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<TitleOptions>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
}

/// How a series is drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesStyle {
    pub color: &'static str,
    pub background: &'static str,
    pub width: u32,
    pub line: LineStyle,
    pub fill: bool,
    pub tension: f64,
}

impl SeriesStyle {
    pub fn new(color: &'static str, background: &'static str) -> Self {
        Self {
            color,
            background,
            width: 3,
            line: LineStyle::Solid,
            fill: false,
            tension: 0.4,
        }
    }

    pub fn width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    pub fn line(mut self, line: LineStyle) -> Self {
        self.line = line;
        self
    }

    pub fn fill(mut self, fill: bool) -> Self {
        self.fill = fill;
        self
    }

    pub fn tension(mut self, tension: f64) -> Self {
        self.tension = tension;
        self
    }
}

/// Builder for a [`ChartSpec`].
#[derive(Debug, Clone, Default)]
pub struct LineChart {
    title: String,
    x_label: Option<String>,
    y_label: Option<String>,
    labels: Vec<String>,
    datasets: Vec<Dataset>,
}

impl LineChart {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = Some(label.into());
        self
    }

    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = Some(label.into());
        self
    }

    pub fn series(
        mut self,
        label: impl Into<String>,
        data: Vec<Option<f64>>,
        style: SeriesStyle,
    ) -> Self {
        self.datasets.push(Dataset {
            label: label.into(),
            data,
            border_color: style.color.to_string(),
            background_color: style.background.to_string(),
            border_width: style.width,
            border_dash: match style.line {
                LineStyle::Solid => Vec::new(),
                LineStyle::Dashed => vec![5, 5],
            },
            fill: style.fill,
            tension: style.tension,
        });
        self
    }

    /// Finish the chart. Every series is padded or cut to the label count.
    pub fn build(mut self) -> ChartSpec {
        let len = self.labels.len();
        for dataset in &mut self.datasets {
            if dataset.data.len() != len {
                log::debug!(
                    "series {:?} has {} values for {} labels; resizing",
                    dataset.label,
                    dataset.data.len(),
                    len
                );
                dataset.data.resize(len, None);
            }
        }

        ChartSpec {
            kind: "line",
            data: ChartData {
                labels: self.labels,
                datasets: self.datasets,
            },
            options: ChartOptions {
                responsive: true,
                maintain_aspect_ratio: false,
                plugins: Plugins {
                    title: TitleOptions::shown(self.title),
                    legend: LegendOptions {
                        display: true,
                        position: "top",
                    },
                },
                scales: Scales {
                    x: self.x_label.map(|text| Axis {
                        begin_at_zero: false,
                        title: Some(TitleOptions::shown(text)),
                    }),
                    y: Axis {
                        begin_at_zero: false,
                        title: self.y_label.map(TitleOptions::shown),
                    },
                },
            },
        }
    }
}

/// The page's two charts, with their sample data and live-data variants.
pub mod presets {
    use super::{ChartSpec, LineChart, LineStyle, SeriesStyle};
    use crate::price::PricePoint;
    use jahe_utils::dates::is_chronological;

    const MONTHS: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];

    /// Twelve months of illustrative prices, 18.000 rising to 34.500.
    pub fn sample_price_history() -> Vec<PricePoint> {
        MONTHS
            .iter()
            .zip((0u32..).map(|i| 18000.0 + 1500.0 * f64::from(i)))
            .map(|(month, price)| PricePoint::new(*month, price))
            .collect()
    }

    /// Price trend chart for the `priceChart` canvas.
    pub fn price_trend_chart(points: &[PricePoint]) -> ChartSpec {
        LineChart::new("Ginger Price Trend (Last 12 Months)")
            .labels(points.iter().map(|p| p.date.clone()))
            .y_label("Price (Rp/kg)")
            .series(
                "Ginger Price (Rp/kg)",
                points.iter().map(|p| Some(p.price)).collect(),
                SeriesStyle::new("#d2691e", "rgba(210, 105, 30, 0.1)").fill(true),
            )
            .build()
    }

    /// Placeholder prediction chart shown before the first request.
    pub fn sample_prediction_chart() -> ChartSpec {
        let predicted = [34500.0, 35200.0, 35800.0, 36500.0, 37200.0, 37900.0];
        let mut actual = vec![None; predicted.len()];
        actual[0] = Some(predicted[0]);

        LineChart::new("Price Prediction (Next 5 Days)")
            .labels(["Today", "Tomorrow", "+2 Days", "+3 Days", "+4 Days", "+5 Days"])
            .y_label("Price (Rp/kg)")
            .series(
                "Predicted Price (Rp/kg)",
                predicted.iter().copied().map(Some).collect(),
                SeriesStyle::new("#cd853f", "rgba(205, 133, 63, 0.2)").fill(true),
            )
            .series(
                "Actual Price (Rp/kg)",
                actual,
                SeriesStyle::new("#d2691e", "rgba(210, 105, 30, 0.2)").fill(true),
            )
            .build()
    }

    /// History followed by forecast on one time axis.
    ///
    /// Labels are the historical dates then the predicted dates. Each series
    /// is blank under the other's span. The history series is left out
    /// entirely when there is no history.
    pub fn prediction_chart(historical: &[PricePoint], predicted: &[PricePoint]) -> ChartSpec {
        let labels: Vec<String> = historical
            .iter()
            .chain(predicted)
            .map(|p| p.date.clone())
            .collect();
        match is_chronological(&labels) {
            Ok(true) => {}
            Ok(false) => log::warn!("prediction chart labels are not in chronological order"),
            Err(e) => log::warn!("prediction chart has unparseable labels: {}", e),
        }

        let mut chart = LineChart::new("Grafik Harga Historis dan Prediksi Harga Jahe")
            .labels(labels)
            .x_label("Tanggal")
            .y_label("Harga (Rp)");

        if !historical.is_empty() {
            let data = historical
                .iter()
                .map(|p| Some(p.price))
                .chain(std::iter::repeat(None).take(predicted.len()))
                .collect();
            chart = chart.series(
                "Harga Historis (Rp)",
                data,
                SeriesStyle::new("#a7c957", "rgba(167, 201, 87, 0.1)")
                    .width(2)
                    .line(LineStyle::Dashed)
                    .tension(0.3),
            );
        }

        let data = std::iter::repeat(None)
            .take(historical.len())
            .chain(predicted.iter().map(|p| Some(p.price)))
            .collect();
        chart
            .series(
                "Prediksi Harga Jahe (Rp)",
                data,
                SeriesStyle::new("#6a994e", "rgba(106, 153, 78, 0.1)")
                    .fill(true)
                    .tension(0.3),
            )
            .build()
    }
}

/// Result of asking for a chart to be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    Rendered,
    /// The target canvas does not exist; nothing was drawn.
    Skipped,
}

/// Something that can draw and dispose charts on named canvases.
pub trait ChartBackend {
    /// Identifies one live chart instance.
    type Handle;

    /// Draw a new chart, or return `None` when the canvas is missing.
    fn create(&mut self, canvas_id: &str, spec: &ChartSpec) -> Option<Self::Handle>;

    fn destroy(&mut self, handle: Self::Handle);
}

/// Sole owner of the live chart on each canvas.
pub struct ChartRenderer<B: ChartBackend> {
    backend: B,
    instances: HashMap<String, B::Handle>,
}

impl<B: ChartBackend> ChartRenderer<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            instances: HashMap::new(),
        }
    }

    /// Draw `spec` on `canvas_id`, disposing the chart previously drawn there.
    pub fn render(&mut self, canvas_id: &str, spec: &ChartSpec) -> RenderOutcome {
        self.release(canvas_id);
        match self.backend.create(canvas_id, spec) {
            Some(handle) => {
                self.instances.insert(canvas_id.to_string(), handle);
                RenderOutcome::Rendered
            }
            None => {
                log::debug!("canvas #{} not found; chart skipped", canvas_id);
                RenderOutcome::Skipped
            }
        }
    }

    /// Dispose the chart on `canvas_id`, if any.
    pub fn release(&mut self, canvas_id: &str) {
        if let Some(previous) = self.instances.remove(canvas_id) {
            self.backend.destroy(previous);
        }
    }

    pub fn is_rendered(&self, canvas_id: &str) -> bool {
        self.instances.contains_key(canvas_id)
    }

    pub fn live_instances(&self) -> usize {
        self.instances.len()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

/// In-memory canvases for exercising [`ChartRenderer`] without a browser.
#[cfg(test)]
pub(crate) mod memory {
    use super::{ChartBackend, ChartSpec};
    use std::collections::{HashMap, HashSet};

    #[derive(Default)]
    pub struct MemoryCanvas {
        canvases: HashSet<String>,
        next_id: u64,
        /// instance id -> (canvas id, chart title)
        pub live: HashMap<u64, (String, String)>,
        pub created: usize,
        pub destroyed: usize,
    }

    impl MemoryCanvas {
        pub fn with_canvases(ids: &[&str]) -> Self {
            Self {
                canvases: ids.iter().map(|id| id.to_string()).collect(),
                ..Default::default()
            }
        }

        pub fn live_on(&self, canvas_id: &str) -> usize {
            self.live.values().filter(|(c, _)| c == canvas_id).count()
        }
    }

    impl ChartBackend for MemoryCanvas {
        type Handle = u64;

        fn create(&mut self, canvas_id: &str, spec: &ChartSpec) -> Option<u64> {
            if !self.canvases.contains(canvas_id) {
                return None;
            }
            self.next_id += 1;
            self.created += 1;
            self.live.insert(
                self.next_id,
                (canvas_id.to_string(), spec.options.plugins.title.text.clone()),
            );
            Some(self.next_id)
        }

        fn destroy(&mut self, handle: u64) {
            if self.live.remove(&handle).is_some() {
                self.destroyed += 1;
            }
        }
    }
}
