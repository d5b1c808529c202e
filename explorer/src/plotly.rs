use brain_graph::ChartSpec;
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;

/// Draw (or redraw in place) `spec` into `target` with `window.Plotly.react`.
pub fn react(target: &Element, spec: &ChartSpec) -> Result<(), JsValue> {
    let win = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let plotly = js_sys::Reflect::get(&win, &JsValue::from_str("Plotly"))?;
    if plotly.is_undefined() {
        return Err(JsValue::from_str("Plotly.js is not loaded"));
    }
    let react: js_sys::Function =
        js_sys::Reflect::get(&plotly, &JsValue::from_str("react"))?.dyn_into()?;

    // plain objects rather than JS Maps
    let serializer = Serializer::json_compatible();
    let data = spec.data.serialize(&serializer)?;
    let layout = spec.layout.serialize(&serializer)?;
    let config = spec.config.serialize(&serializer)?;

    react.apply(&plotly, &js_sys::Array::of4(target, &data, &layout, &config))?;
    Ok(())
}
