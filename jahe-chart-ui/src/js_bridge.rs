//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The Chart.js bridge lives in `assets/js/chart-bridge.js` and is evaluated as
//! globals (no ES modules) once Chart.js itself has loaded. This module
//! provides Rust wrappers that serialize chart configs and call those globals,
//! plus [`ChartJs`], the [`ChartBackend`] used by the page.

use jahe_core::chart::{ChartBackend, ChartSpec};

static CHART_BRIDGE_JS: &str = include_str!("../assets/js/chart-bridge.js");

/// Chart.js build injected when the host page did not load it already.
pub const CHART_JS_URL: &str = "https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('jahe JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Load Chart.js if needed and install the bridge once it is available.
///
/// The bridge defines `renderLineChart`/`destroyLineChart` via `function`
/// declarations. They are evaluated at global scope via indirect eval once
/// `Chart` exists, then promoted to `window.*` explicitly.
pub fn init_charts() {
    let store_js = format!(
        "window.__jaheChartScripts = {};",
        serde_json::to_string(CHART_BRIDGE_JS).unwrap_or_default()
    );
    call_js(&store_js);

    call_js(&chart_loader_js(CHART_JS_URL));
}

/// Script that loads Chart.js from `url` and installs the bridge.
///
/// A failed load stops the wait loop and removes the script tag, so a later
/// [`init_charts`] tries again.
fn chart_loader_js(url: &str) -> String {
    format!(
        r#"
        (function() {{
            if (window.__jaheChartsReady || window.__jaheChartsLoading) {{ return; }}
            window.__jaheChartsLoading = true;
            var waitForChartJs = null;
            if (typeof Chart === 'undefined' && !document.querySelector('script[data-jahe-chartjs]')) {{
                var tag = document.createElement('script');
                tag.src = {url};
                tag.setAttribute('data-jahe-chartjs', '');
                tag.onerror = function() {{
                    clearInterval(waitForChartJs);
                    window.__jaheChartsLoading = false;
                    tag.remove();
                    console.error('[jahe] could not load Chart.js from', tag.src);
                }};
                document.head.appendChild(tag);
            }}
            waitForChartJs = setInterval(function() {{
                if (typeof Chart !== 'undefined') {{
                    clearInterval(waitForChartJs);
                    (0, eval)(window.__jaheChartScripts);
                    delete window.__jaheChartScripts;
                    if (typeof renderLineChart !== 'undefined') window.renderLineChart = renderLineChart;
                    if (typeof destroyLineChart !== 'undefined') window.destroyLineChart = destroyLineChart;
                    window.__jaheChartsLoading = false;
                    window.__jaheChartsReady = true;
                    console.log('jahe charts initialized');
                }}
            }}, 100);
        }})();
        "#,
        url = serde_json::to_string(url).unwrap_or_default(),
    )
}

/// Render a line chart on a canvas.
///
/// Polls until the bridge is ready and the canvas exists. Every render or
/// destroy bumps a per-canvas generation, so a poll that was overtaken by a
/// newer call gives up instead of drawing stale data.
pub fn render_line_chart(canvas_id: &str, config_json: &str) {
    let id = serde_json::to_string(canvas_id).unwrap_or_default();
    let config = serde_json::to_string(config_json).unwrap_or_default();
    call_js(&format!(
        r#"
        (function() {{
            var id = {id};
            window.__jaheChartGen = window.__jaheChartGen || {{}};
            var gen = (window.__jaheChartGen[id] || 0) + 1;
            window.__jaheChartGen[id] = gen;
            var poll = setInterval(function() {{
                if (window.__jaheChartGen[id] !== gen) {{
                    clearInterval(poll);
                    return;
                }}
                if (window.__jaheChartsReady &&
                    typeof window.renderLineChart !== 'undefined' &&
                    document.getElementById(id)) {{
                    clearInterval(poll);
                    try {{
                        window.renderLineChart(id, {config});
                    }} catch(e) {{ console.error('[jahe] renderLineChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Destroy the chart on a canvas and cancel any render still waiting for it.
pub fn destroy_line_chart(canvas_id: &str) {
    let id = serde_json::to_string(canvas_id).unwrap_or_default();
    call_js(&format!(
        r#"
        window.__jaheChartGen = window.__jaheChartGen || {{}};
        window.__jaheChartGen[{id}] = (window.__jaheChartGen[{id}] || 0) + 1;
        if (typeof window.destroyLineChart !== 'undefined') window.destroyLineChart({id});
        "#,
    ));
}

/// Whether an element with this id is in the document.
pub fn element_exists(id: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .is_some()
}

/// Chart.js drawing on `<canvas>` elements of the current document.
///
/// Handles are canvas ids; the JS side keeps the actual `Chart` objects.
#[derive(Debug, Default, Clone, Copy)]
pub struct ChartJs;

impl ChartBackend for ChartJs {
    type Handle = String;

    fn create(&mut self, canvas_id: &str, spec: &ChartSpec) -> Option<String> {
        if !element_exists(canvas_id) {
            return None;
        }
        let config_json = match serde_json::to_string(spec) {
            Ok(json) => json,
            Err(e) => {
                log::error!("could not serialize chart for #{}: {}", canvas_id, e);
                return None;
            }
        };
        render_line_chart(canvas_id, &config_json);
        Some(canvas_id.to_string())
    }

    fn destroy(&mut self, handle: String) {
        destroy_line_chart(&handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_chart_js_load_allows_retry() {
        let js = chart_loader_js(CHART_JS_URL);
        let onerror = &js[js.find("tag.onerror").unwrap()..];
        let handler = &onerror[..onerror.find("};").unwrap()];
        assert!(handler.contains("clearInterval(waitForChartJs)"));
        assert!(handler.contains("window.__jaheChartsLoading = false"));
        assert!(handler.contains("tag.remove()"));
    }

    #[test]
    fn test_loader_url_is_a_js_string() {
        let js = chart_loader_js("https://cdn.example/chart.js?a='b'");
        assert!(js.contains(r#"tag.src = "https://cdn.example/chart.js?a='b'";"#));
    }
}
