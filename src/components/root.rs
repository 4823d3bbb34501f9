use std::rc::Rc;

use yew::prelude::*;

use super::{MapView, MapsWrapper};
use crate::config::AppConfig;

#[derive(Properties, PartialEq)]
pub struct RootProps {
    pub config: Rc<AppConfig>,
}

#[function_component(Root)]
pub fn root(props: &RootProps) -> Html {
    let viewport = props.config.initial_viewport;

    html! {
        <MapsWrapper config={props.config.clone()}>
            <MapView config={props.config.clone()} {viewport} />
        </MapsWrapper>
    }
}
