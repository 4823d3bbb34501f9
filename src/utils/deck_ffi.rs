// ============================================================================
// DECK.GL FFI - Bindings a los bundles UMD de deck.gl (global `deck`)
// ============================================================================

use wasm_bindgen::prelude::*;

use super::google_maps_ffi::GoogleMap;

#[wasm_bindgen(js_namespace = deck)]
extern "C" {
    pub type GoogleMapsOverlay;

    #[wasm_bindgen(constructor, catch)]
    pub fn new(props: &JsValue) -> Result<GoogleMapsOverlay, JsValue>;

    #[wasm_bindgen(method, js_name = setMap, catch)]
    pub fn set_map(this: &GoogleMapsOverlay, map: &GoogleMap) -> Result<(), JsValue>;
}

#[wasm_bindgen(js_namespace = deck)]
extern "C" {
    pub type GeoJsonLayer;

    #[wasm_bindgen(constructor, catch)]
    pub fn new(props: &JsValue) -> Result<GeoJsonLayer, JsValue>;
}

#[wasm_bindgen(js_namespace = deck)]
extern "C" {
    pub type ArcLayer;

    #[wasm_bindgen(constructor, catch)]
    pub fn new(props: &JsValue) -> Result<ArcLayer, JsValue>;
}
