// ============================================================================
// POINT LAYER - Un círculo translúcido por sitio
// ============================================================================

use crate::models::{Feature, Rgba};
use crate::services::notifier::{ClickNotifier, SiteClicked};

/// Definición de la capa GeoJSON de puntos `nat_parks`.
#[derive(Debug, Clone, PartialEq)]
pub struct PointLayer {
    pub id: &'static str,
    pub data_url: String,
    pub filled: bool,
    /// Mínimo en píxeles para que los sitios se vean con poco zoom.
    pub radius_min_pixels: f64,
    /// Metros por unidad de radio.
    pub radius_scale: f64,
    pub fill_color: Rgba,
    pub pickable: bool,
    pub auto_highlight: bool,
    radius_inversion_base: f64,
}

impl PointLayer {
    pub const ID: &'static str = "nat_parks";

    pub fn new(data_url: impl Into<String>, radius_inversion_base: f64) -> Self {
        Self {
            id: Self::ID,
            data_url: data_url.into(),
            filled: true,
            radius_min_pixels: 2.0,
            radius_scale: 2000.0,
            fill_color: [200, 0, 80, 180],
            pickable: true,
            auto_highlight: true,
            radius_inversion_base,
        }
    }

    /// Radio en unidades de capa antes de `radius_scale`: menos score, más grande.
    /// Sin score el sitio queda en el mínimo de píxeles.
    pub fn radius(&self, feature: &Feature) -> f64 {
        match feature.score() {
            Some(score) => (self.radius_inversion_base - score).max(0.0),
            None => 0.0,
        }
    }

    /// Convierte el resultado del picking en un evento de click. Un click en
    /// zona vacía no trae feature y no produce nada.
    pub fn click(&self, picked: Option<&Feature>) -> Option<SiteClicked> {
        picked.map(|feature| SiteClicked::from_properties(&feature.properties))
    }

    /// Pasa el click al notifier. Devuelve si se disparó.
    pub fn handle_click(&self, picked: Option<&Feature>, notifier: &dyn ClickNotifier) -> bool {
        match self.click(picked) {
            Some(event) => {
                log::info!("📍 Sitio pulsado: {}", event.message());
                notifier.notify(&event);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SiteProperties;
    use crate::services::notifier::RecordingNotifier;

    fn site(name: &str, score: Option<f64>, x: f64, y: f64) -> Feature {
        Feature {
            geometry: None,
            properties: SiteProperties {
                location_name: Some(name.to_string()),
                score,
                x: Some(x.to_string()),
                y: Some(y.to_string()),
                ..SiteProperties::default()
            },
        }
    }

    fn layer() -> PointLayer {
        PointLayer::new("https://example.test/sites.geojson", 100.0)
    }

    #[test]
    fn radius_is_inverse_of_score() {
        let layer = layer();

        assert_eq!(layer.radius(&site("a", Some(40.0), 0.0, 0.0)), 60.0);
        assert_eq!(layer.radius(&site("b", Some(95.0), 0.0, 0.0)), 5.0);
        assert_eq!(layer.radius(&site("c", Some(0.0), 0.0, 0.0)), 100.0);
    }

    #[test]
    fn radius_never_goes_negative_and_missing_score_is_zero() {
        let layer = layer();

        assert_eq!(layer.radius(&site("over", Some(120.0), 0.0, 0.0)), 0.0);
        assert_eq!(layer.radius(&site("none", None, 0.0, 0.0)), 0.0);
    }

    #[test]
    fn radius_base_is_policy() {
        let layer = PointLayer::new("u", 50.0);

        assert_eq!(layer.radius(&site("a", Some(40.0), 0.0, 0.0)), 10.0);
    }

    #[test]
    fn fixed_styling() {
        let layer = layer();

        assert_eq!(layer.id, "nat_parks");
        assert_eq!(layer.fill_color, [200, 0, 80, 180]);
        assert_eq!(layer.radius_min_pixels, 2.0);
        assert_eq!(layer.radius_scale, 2000.0);
        assert!(layer.filled && layer.pickable && layer.auto_highlight);
    }

    #[test]
    fn clicking_a_site_notifies_once_with_name_and_xy() {
        let layer = layer();
        let notifier = RecordingNotifier::default();
        let feature = site("X", Some(10.0), 1.0, 2.0);

        assert!(layer.handle_click(Some(&feature), &notifier));

        let messages = notifier.messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("X (1, 2)"));
    }

    #[test]
    fn clicking_empty_space_is_a_no_op() {
        let layer = layer();
        let notifier = RecordingNotifier::default();

        assert!(!layer.handle_click(None, &notifier));
        assert!(notifier.messages().is_empty());
    }
}
