// ============================================================================
// GOOGLE MAPS FFI - Bindings al Maps JS API
// ============================================================================
// Solo wrappers, sin estado ni lógica. `google.maps` existe cuando el script
// del cargador terminó (ver services::maps_loader).
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

#[wasm_bindgen(js_namespace = ["google", "maps"])]
extern "C" {
    #[wasm_bindgen(js_name = Map)]
    pub type GoogleMap;

    #[wasm_bindgen(constructor, js_class = "Map", catch)]
    pub fn new(container: &HtmlElement, options: &JsValue) -> Result<GoogleMap, JsValue>;

    #[wasm_bindgen(method, js_name = setCenter, catch)]
    pub fn set_center(this: &GoogleMap, center: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(method, js_name = setZoom, catch)]
    pub fn set_zoom(this: &GoogleMap, zoom: f64) -> Result<(), JsValue>;
}

/// Si `window.google.maps` ya está definido.
pub fn maps_api_present() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    js_sys::Reflect::get(&window, &JsValue::from_str("google"))
        .ok()
        .filter(|google| google.is_object())
        .and_then(|google| js_sys::Reflect::get(&google, &JsValue::from_str("maps")).ok())
        .map_or(false, |maps| maps.is_object())
}

/// Texto legible para un valor JS lanzado.
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(value, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{:?}", value))
}
