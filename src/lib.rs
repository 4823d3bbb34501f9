// ============================================================================
// NETWORK TO FREEDOM SITES MAP - Yew + deck.gl sobre Google Maps
// ============================================================================
// - Models: subconjunto GeoJSON y viewport
// - Layers: definición de las capas de puntos y arcos (Rust puro)
// - Overlay: máquina de estados del sincronizador + implementación web
// - Services: cargador del Maps JS API, notificador de clicks
// - Hooks / Components: cableado Yew
// ============================================================================

pub mod components;
pub mod config;
pub mod hooks;
pub mod layers;
pub mod models;
pub mod overlay;
pub mod services;
pub mod utils;

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_logger::Config;

use crate::components::{Root, RootProps};
use crate::config::AppConfig;

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(Config::default());
    log::info!("🚀 Iniciando mapa Network to Freedom...");

    let config = AppConfig::from_env();

    // Montar en un contenedor nuevo añadido a <body>
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("No document available"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("No <body> element"))?;
    let container = document.create_element("div")?;
    body.append_child(&container)?;

    yew::Renderer::<Root>::with_root_and_props(
        container,
        RootProps {
            config: Rc::new(config),
        },
    )
    .render();

    Ok(())
}
