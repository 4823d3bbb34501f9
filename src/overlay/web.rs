use std::rc::Rc;

use js_sys::{Array, Object, Reflect};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use super::traits::{HostMap, LayerOverlay, OverlayError};
use crate::layers::LayerSet;
use crate::models::{Feature, FeatureCollection, LatLng, Rgba};
use crate::services::notifier::ClickNotifier;
use crate::utils::deck_ffi::{self, GoogleMapsOverlay};
use crate::utils::google_maps_ffi::{js_error_message, GoogleMap};

/// `google.maps.Map` detrás del trait `HostMap`.
pub struct WebHostMap {
    map: GoogleMap,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MapOptions<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    map_id: Option<&'a str>,
}

impl WebHostMap {
    pub fn create(container: &HtmlElement, map_id: Option<&str>) -> Result<Self, OverlayError> {
        let options = to_js(&MapOptions { map_id })
            .map_err(|e| OverlayError::host_call("new google.maps.Map", e))?;
        let map = GoogleMap::new(container, &options)
            .map_err(|e| OverlayError::host_call("new google.maps.Map", js_error_message(&e)))?;
        log::info!("🗺️ Mapa de Google creado (map id: {:?})", map_id);
        Ok(Self { map })
    }
}

impl HostMap for WebHostMap {
    fn set_center(&self, center: LatLng) -> Result<(), OverlayError> {
        let value = to_js(&center).map_err(|e| OverlayError::host_call("setCenter", e))?;
        self.map
            .set_center(&value)
            .map_err(|e| OverlayError::host_call("setCenter", js_error_message(&e)))
    }

    fn set_zoom(&self, zoom: f64) -> Result<(), OverlayError> {
        self.map
            .set_zoom(zoom)
            .map_err(|e| OverlayError::host_call("setZoom", js_error_message(&e)))
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PointLayerProps<'a> {
    id: &'a str,
    data: &'a str,
    filled: bool,
    point_radius_min_pixels: f64,
    point_radius_scale: f64,
    get_fill_color: Rgba,
    pickable: bool,
    auto_highlight: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ArcLayerProps<'a> {
    id: &'a str,
    data: &'a str,
    get_source_color: Rgba,
    get_target_color: Rgba,
    get_width: f64,
}

/// Callbacks de Rust entregados a deck.gl. Deben vivir tanto como el overlay.
struct LayerCallbacks {
    _point_radius: Closure<dyn Fn(JsValue) -> f64>,
    _point_click: Closure<dyn Fn(JsValue)>,
    _arc_transform: Closure<dyn Fn(JsValue) -> JsValue>,
    _arc_source: Closure<dyn Fn(JsValue) -> JsValue>,
    _arc_target: Closure<dyn Fn(JsValue) -> JsValue>,
}

/// `deck.GoogleMapsOverlay` con el conjunto fijo de capas.
pub struct DeckOverlay {
    overlay: GoogleMapsOverlay,
    _callbacks: LayerCallbacks,
}

impl DeckOverlay {
    pub fn new(layers: Rc<LayerSet>, notifier: Rc<dyn ClickNotifier>) -> Result<Self, OverlayError> {
        let point_radius = {
            let layers = Rc::clone(&layers);
            Closure::wrap(Box::new(move |feature: JsValue| {
                match serde_wasm_bindgen::from_value::<Feature>(feature) {
                    Ok(feature) => layers.point.radius(&feature),
                    Err(e) => {
                        log::warn!("⚠️ Feature de sitio ilegible: {}", e);
                        0.0
                    }
                }
            }) as Box<dyn Fn(JsValue) -> f64>)
        };

        let point_click = {
            let layers = Rc::clone(&layers);
            Closure::wrap(Box::new(move |info: JsValue| {
                let picked = picked_feature(&info);
                layers.point.handle_click(picked.as_ref(), notifier.as_ref());
            }) as Box<dyn Fn(JsValue)>)
        };

        let arc_transform = {
            let layers = Rc::clone(&layers);
            Closure::wrap(Box::new(move |data: JsValue| {
                let arcs = serde_wasm_bindgen::from_value::<FeatureCollection>(data)
                    .map_err(|e| e.to_string())
                    .and_then(|collection| to_js(&layers.arc.arcs(&collection)));
                arcs.unwrap_or_else(|e| {
                    log::error!("❌ Falló el dataTransform de la capa de arcos: {}", e);
                    Array::new().into()
                })
            }) as Box<dyn Fn(JsValue) -> JsValue>)
        };

        let arc_source = Closure::wrap(Box::new(|segment: JsValue| field(&segment, "source"))
            as Box<dyn Fn(JsValue) -> JsValue>);
        let arc_target = Closure::wrap(Box::new(|segment: JsValue| field(&segment, "target"))
            as Box<dyn Fn(JsValue) -> JsValue>);

        let point = &layers.point;
        let point_props = to_js(&PointLayerProps {
            id: point.id,
            data: &point.data_url,
            filled: point.filled,
            point_radius_min_pixels: point.radius_min_pixels,
            point_radius_scale: point.radius_scale,
            get_fill_color: point.fill_color,
            pickable: point.pickable,
            auto_highlight: point.auto_highlight,
        })
        .map_err(OverlayError::LayerConstruction)?;
        set_prop(&point_props, "getPointRadius", point_radius.as_ref())?;
        set_prop(&point_props, "onClick", point_click.as_ref())?;
        let point_layer = deck_ffi::GeoJsonLayer::new(&point_props)
            .map_err(|e| OverlayError::LayerConstruction(js_error_message(&e)))?;

        let arc = &layers.arc;
        let arc_props = to_js(&ArcLayerProps {
            id: arc.id,
            data: &arc.data_url,
            get_source_color: arc.source_color,
            get_target_color: arc.target_color,
            get_width: arc.width,
        })
        .map_err(OverlayError::LayerConstruction)?;
        set_prop(&arc_props, "dataTransform", arc_transform.as_ref())?;
        set_prop(&arc_props, "getSourcePosition", arc_source.as_ref())?;
        set_prop(&arc_props, "getTargetPosition", arc_target.as_ref())?;
        let arc_layer = deck_ffi::ArcLayer::new(&arc_props)
            .map_err(|e| OverlayError::LayerConstruction(js_error_message(&e)))?;

        let overlay_props: JsValue = Object::new().into();
        set_prop(&overlay_props, "layers", &Array::of2(&point_layer, &arc_layer))?;
        let overlay = GoogleMapsOverlay::new(&overlay_props)
            .map_err(|e| OverlayError::LayerConstruction(js_error_message(&e)))?;

        log::info!("✅ Overlay de deck.gl creado con capas {:?}", layers.ids());
        Ok(Self {
            overlay,
            _callbacks: LayerCallbacks {
                _point_radius: point_radius,
                _point_click: point_click,
                _arc_transform: arc_transform,
                _arc_source: arc_source,
                _arc_target: arc_target,
            },
        })
    }
}

impl LayerOverlay for DeckOverlay {
    type Host = WebHostMap;

    fn attach(&self, host: &WebHostMap) -> Result<(), OverlayError> {
        self.overlay
            .set_map(&host.map)
            .map_err(|e| OverlayError::host_call("overlay.setMap", js_error_message(&e)))
    }
}

/// La feature bajo el puntero, si hay. deck.gl deja `object` vacío en los
/// clicks sobre zona sin sitios.
fn picked_feature(info: &JsValue) -> Option<Feature> {
    let object = Reflect::get(info, &JsValue::from_str("object")).ok()?;
    if object.is_undefined() || object.is_null() {
        return None;
    }
    match serde_wasm_bindgen::from_value::<Feature>(object) {
        Ok(feature) => Some(feature),
        Err(e) => {
            log::warn!("⚠️ El objeto pulsado no es una feature de sitio: {}", e);
            None
        }
    }
}

fn field(target: &JsValue, key: &str) -> JsValue {
    Reflect::get(target, &JsValue::from_str(key)).unwrap_or(JsValue::UNDEFINED)
}

fn set_prop(target: &JsValue, key: &str, value: &JsValue) -> Result<(), OverlayError> {
    Reflect::set(target, &JsValue::from_str(key), value)
        .map(|_| ())
        .map_err(|e| OverlayError::LayerConstruction(format!("{}: {}", key, js_error_message(&e))))
}

/// Objetos y arrays JS planos, nunca `Map`.
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, String> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| e.to_string())
}
