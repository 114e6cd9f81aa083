//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js savings chart lives in `assets/js/savings-chart.js`, loaded
//! at runtime as a global (no ES modules) and exposed via `window.*`.
//! This module provides safe Rust wrappers that serialize data and call
//! that global.

// Embed the D3 chart JS file at compile time
static SAVINGS_CHART_JS: &str = include_str!("../assets/js/savings-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('BSE JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize the chart script with a wait-for-D3 polling loop.
///
/// The chart JS defines `renderSavingsChart(...)` via a `function`
/// declaration. To ensure it becomes globally accessible (not
/// block-scoped inside the setInterval callback), it is evaluated at
/// global scope via indirect eval once D3 is ready, and then explicitly
/// promoted to `window.*`.
pub fn init_charts() {
    // Store the script on window so the polling callback can eval it
    // at global scope (not block-scoped inside setInterval).
    let store_js = format!(
        "window.__bseChartScripts = {};",
        serde_json::to_string(SAVINGS_CHART_JS).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    // Eval at global scope via indirect eval
                    (0, eval)(window.__bseChartScripts);
                    delete window.__bseChartScripts;
                    // Promote the function declaration to window explicitly
                    if (typeof renderSavingsChart !== 'undefined') window.renderSavingsChart = renderSavingsChart;
                    window.__bseChartsReady = true;
                    console.log('BSE charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Render the dual-series savings area chart.
///
/// Uses a polling loop to wait for D3.js to load, the chart script to
/// initialize, and the container DOM element to exist before rendering.
pub fn render_savings_chart(container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = data_json.replace('\'', "\\'").replace('\n', "");
    let escaped_config = config_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__bseChartsReady &&
                    typeof window.renderSavingsChart !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderSavingsChart('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[BSE] renderSavingsChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById('{}'); if (el) el.innerHTML = '';",
        container_id
    ));
}
