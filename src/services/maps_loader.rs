// ============================================================================
// MAPS LOADER - Inyecta el Google Maps JS API e informa de su estado
// ============================================================================
// Solo hay tres estados. Cualquier fallo (clave ausente o rechazada, red)
// termina en Failure; no hay reintento.
// ============================================================================

use std::fmt;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Event, HtmlScriptElement};

use crate::config::AppConfig;
use crate::utils::constants::{GOOGLE_MAPS_SCRIPT_ID, GOOGLE_MAPS_SCRIPT_URL};
use crate::utils::google_maps_ffi::maps_api_present;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoaderStatus {
    Loading,
    Failure,
    Success,
}

impl fmt::Display for LoaderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoaderStatus::Loading => write!(f, "LOADING"),
            LoaderStatus::Failure => write!(f, "FAILURE"),
            LoaderStatus::Success => write!(f, "SUCCESS"),
        }
    }
}

/// Texto que se muestra en lugar del mapa; `None` cuando el SDK está listo.
pub fn placeholder(status: LoaderStatus) -> Option<String> {
    match status {
        LoaderStatus::Loading => Some(format!("{} ..", status)),
        LoaderStatus::Failure => Some(format!("{} ...", status)),
        LoaderStatus::Success => None,
    }
}

/// URL del script del SDK, escapando los valores con `encodeURIComponent`.
pub fn script_url(config: &AppConfig) -> String {
    script_url_with(config, |raw| String::from(js_sys::encode_uri_component(raw)))
}

fn script_url_with<E>(config: &AppConfig, encode: E) -> String
where
    E: Fn(&str) -> String,
{
    let mut url = format!(
        "{}?key={}&v=weekly",
        GOOGLE_MAPS_SCRIPT_URL,
        encode(&config.google_maps_api_key)
    );
    if let Some(map_id) = &config.google_map_id {
        url.push_str("&map_ids=");
        url.push_str(&encode(map_id));
    }
    url
}

/// Empieza a cargar el SDK y avisa de cada cambio de estado a `on_status`.
pub fn load(config: &AppConfig, on_status: Rc<dyn Fn(LoaderStatus)>) -> Result<(), JsValue> {
    if !config.has_api_key() {
        log::error!("❌ GOOGLE_MAPS_API_KEY no está configurada");
        on_status(LoaderStatus::Failure);
        return Ok(());
    }
    if maps_api_present() {
        on_status(LoaderStatus::Success);
        return Ok(());
    }

    let window = window().ok_or_else(|| JsValue::from_str("No window available"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("No document available"))?;

    // Google llama a esta global cuando rechaza la clave
    let auth_failure = Closure::wrap(Box::new({
        let on_status = on_status.clone();
        move || {
            log::error!("❌ Google Maps rechazó la API key");
            on_status(LoaderStatus::Failure);
        }
    }) as Box<dyn FnMut()>);
    js_sys::Reflect::set(
        &window,
        &JsValue::from_str("gm_authFailure"),
        auth_failure.as_ref(),
    )?;
    auth_failure.forget();

    let (script, fresh) = match document.get_element_by_id(GOOGLE_MAPS_SCRIPT_ID) {
        Some(existing) => (existing.dyn_into::<HtmlScriptElement>()?, false),
        None => {
            let script = document
                .create_element("script")?
                .dyn_into::<HtmlScriptElement>()?;
            script.set_id(GOOGLE_MAPS_SCRIPT_ID);
            script.set_src(&script_url(config));
            script.set_async(true);
            (script, true)
        }
    };

    let on_load = Closure::wrap(Box::new({
        let on_status = on_status.clone();
        move |_event: Event| {
            log::info!("✅ Google Maps JS API cargado");
            on_status(LoaderStatus::Success);
        }
    }) as Box<dyn FnMut(Event)>);
    let on_error = Closure::wrap(Box::new({
        let on_status = on_status.clone();
        move |_event: Event| {
            log::error!("❌ No se pudo cargar el Google Maps JS API");
            on_status(LoaderStatus::Failure);
        }
    }) as Box<dyn FnMut(Event)>);

    script.add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref())?;
    script.add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref())?;
    // Cada uno se dispara como mucho una vez por página
    on_load.forget();
    on_error.forget();

    if fresh {
        let head = document
            .head()
            .ok_or_else(|| JsValue::from_str("No <head> element"))?;
        head.append_child(&script)?;
        log::info!("🌐 Cargando Google Maps JS API...");
    }
    on_status(LoaderStatus::Loading);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholders_follow_status() {
        assert_eq!(placeholder(LoaderStatus::Loading).as_deref(), Some("LOADING .."));
        assert_eq!(placeholder(LoaderStatus::Failure).as_deref(), Some("FAILURE ..."));
        assert_eq!(placeholder(LoaderStatus::Success), None);
    }

    #[test]
    fn script_url_carries_key_and_version() {
        let config = AppConfig::new("AIza-key_1");

        assert_eq!(
            script_url_with(&config, str::to_string),
            "https://maps.googleapis.com/maps/api/js?key=AIza-key_1&v=weekly"
        );
    }

    #[test]
    fn key_and_map_id_both_go_through_the_encoder() {
        let config = AppConfig::new("a b&c").with_map_id("8e0a97af9386fef");

        assert_eq!(
            script_url_with(&config, |raw| format!("<{}>", raw)),
            "https://maps.googleapis.com/maps/api/js?key=<a b&c>&v=weekly&map_ids=<8e0a97af9386fef>"
        );
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn script_url_escapes_with_encode_uri_component() {
        let config = AppConfig::new("a b&c/ñ").with_map_id("8e0a97af9386fef");

        assert_eq!(
            script_url(&config),
            "https://maps.googleapis.com/maps/api/js?key=a%20b%26c%2F%C3%B1&v=weekly&map_ids=8e0a97af9386fef"
        );
    }
}
