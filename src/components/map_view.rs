use std::rc::Rc;

use yew::prelude::*;

use crate::config::AppConfig;
use crate::hooks::use_overlay;
use crate::models::Viewport;
use crate::utils::constants::MAP_CONTAINER_ID;

#[derive(Properties, PartialEq)]
pub struct MapViewProps {
    pub config: Rc<AppConfig>,
    pub viewport: Viewport,
}

/// Mapa a pantalla completa con el overlay de sitios.
#[function_component(MapView)]
pub fn map_view(props: &MapViewProps) -> Html {
    let container = use_node_ref();
    use_overlay(props.config.clone(), container.clone(), props.viewport);

    html! {
        <div ref={container} id={MAP_CONTAINER_ID} style="height: 100vh; width: 100%;" />
    }
}
