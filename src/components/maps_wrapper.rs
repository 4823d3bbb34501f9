use std::rc::Rc;

use yew::prelude::*;

use crate::config::AppConfig;
use crate::hooks::use_maps_loader;
use crate::services::maps_loader::placeholder;

#[derive(Properties, PartialEq)]
pub struct MapsWrapperProps {
    pub config: Rc<AppConfig>,
    #[prop_or_default]
    pub children: Children,
}

/// Renderiza los hijos solo cuando el Google Maps JS API está listo; si no,
/// una línea de estado.
#[function_component(MapsWrapper)]
pub fn maps_wrapper(props: &MapsWrapperProps) -> Html {
    let status = use_maps_loader(props.config.clone());

    match placeholder(status) {
        Some(text) => html! { <h3>{ text }</h3> },
        None => html! { <>{ for props.children.iter() }</> },
    }
}
