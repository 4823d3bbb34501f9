pub mod arc_layer;
pub mod point_layer;

pub use arc_layer::{ArcLayer, ArcSegment};
pub use point_layer::PointLayer;

use crate::config::AppConfig;
use crate::utils::constants::ARC_ORIGIN;

/// Las dos capas fijas sobre el mapa anfitrión. Se construyen una vez por mapa
/// montado y se comparten con `Rc`; después solo cambia el viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerSet {
    pub point: PointLayer,
    pub arc: ArcLayer,
}

impl LayerSet {
    pub fn from_config(config: &AppConfig) -> Self {
        let policy = config.layer_policy;
        Self {
            point: PointLayer::new(config.sites_url.clone(), policy.radius_inversion_base),
            arc: ArcLayer::new(config.sites_url.clone(), ARC_ORIGIN, policy.arc_score_threshold),
        }
    }

    pub fn ids(&self) -> [&'static str; 2] {
        [self.point.id, self.arc.id]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_layers_read_the_configured_dataset() {
        let mut config = AppConfig::default();
        config.sites_url = "https://example.test/sites.geojson".to_string();
        config.layer_policy.arc_score_threshold = 70.0;

        let layers = LayerSet::from_config(&config);

        assert_eq!(layers.ids(), ["nat_parks", "arcs"]);
        assert_eq!(layers.point.data_url, config.sites_url);
        assert_eq!(layers.arc.data_url, config.sites_url);
        assert_eq!(layers.arc.score_threshold(), 70.0);
        assert_eq!(layers.arc.origin, ARC_ORIGIN);
    }
}
