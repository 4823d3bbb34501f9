use std::rc::Rc;

use yew::prelude::*;

use crate::config::AppConfig;
use crate::services::maps_loader::{self, LoaderStatus};

/// Carga el Google Maps JS API una vez por config y sigue su estado.
#[hook]
pub fn use_maps_loader(config: Rc<AppConfig>) -> LoaderStatus {
    let status = use_state(|| LoaderStatus::Loading);

    {
        let status = status.clone();
        use_effect_with(config, move |config| {
            let on_status: Rc<dyn Fn(LoaderStatus)> = Rc::new(move |next: LoaderStatus| {
                log::info!("🗺️ Cargador de Maps: {}", next);
                status.set(next);
            });
            if let Err(e) = maps_loader::load(config, on_status.clone()) {
                log::error!("❌ No se pudo iniciar el cargador de Maps: {:?}", e);
                on_status(LoaderStatus::Failure);
            }
            || ()
        });
    }

    *status
}
