// ============================================================================
// USE OVERLAY HOOK - Conecta el sincronizador al ciclo de vida del componente
// ============================================================================
// Capas, overlay de deck y sincronizador se crean solo en el primer render.
// Efecto 1: crea el mapa anfitrión y avisa que está listo. Efecto 2: reenvía
// los cambios del prop viewport. Ambos terminan en el único paso apply.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::AppConfig;
use crate::layers::LayerSet;
use crate::models::Viewport;
use crate::overlay::{DeckOverlay, OverlayError, OverlaySynchronizer, WebHostMap};
use crate::services::notifier::{AlertNotifier, ClickNotifier};

type WebSynchronizer = OverlaySynchronizer<DeckOverlay>;

fn build_synchronizer(config: &AppConfig, viewport: Viewport) -> Option<WebSynchronizer> {
    let layers = Rc::new(LayerSet::from_config(config));
    let notifier: Rc<dyn ClickNotifier> = Rc::new(AlertNotifier);
    match DeckOverlay::new(Rc::clone(&layers), notifier) {
        Ok(overlay) => Some(OverlaySynchronizer::new(layers, overlay, viewport)),
        Err(e) => {
            log::error!("❌ {}", e);
            None
        }
    }
}

fn create_host(container: &NodeRef, map_id: Option<&str>) -> Result<WebHostMap, OverlayError> {
    let element = container
        .get()
        .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| OverlayError::host_call("new google.maps.Map", "el contenedor del mapa no está montado"))?;
    WebHostMap::create(&element, map_id)
}

#[hook]
pub fn use_overlay(config: Rc<AppConfig>, container: NodeRef, viewport: Viewport) {
    let sync: Rc<RefCell<Option<WebSynchronizer>>> =
        use_mut_ref(|| build_synchronizer(&config, viewport));

    {
        let sync = sync.clone();
        use_effect_with((), move |_| {
            let ready = create_host(&container, config.google_map_id.as_deref()).and_then(|host| {
                match sync.borrow_mut().as_mut() {
                    Some(sync) => sync.host_ready(host),
                    None => Ok(()),
                }
            });
            if let Err(e) = ready {
                log::error!("❌ {}", e);
            }
            || ()
        });
    }

    {
        let sync = sync.clone();
        use_effect_with(viewport, move |viewport| {
            if let Some(sync) = sync.borrow_mut().as_mut() {
                if let Err(e) = sync.set_viewport(*viewport) {
                    log::error!("❌ {}", e);
                }
            }
            || ()
        });
    }
}
