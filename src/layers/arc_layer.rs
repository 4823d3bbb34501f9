// ============================================================================
// ARC LAYER - Arcos desde el sitio de origen a cada sitio con score bajo
// ============================================================================
// Mismo dataset que la capa de puntos, filtrado antes de dibujar. Se instala
// como `dataTransform` de deck.gl: la descarga sigue siendo del SDK.
// ============================================================================

use serde::Serialize;

use crate::models::{Feature, FeatureCollection, Rgba};

/// Un arco para deck.gl. Posiciones en `[lng, lat(, alt)]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArcSegment {
    pub name: Option<String>,
    pub source: [f64; 2],
    pub target: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArcLayer {
    pub id: &'static str,
    pub data_url: String,
    pub origin: [f64; 2],
    pub source_color: Rgba,
    pub target_color: Rgba,
    pub width: f64,
    score_threshold: f64,
}

impl ArcLayer {
    pub const ID: &'static str = "arcs";

    pub fn new(data_url: impl Into<String>, origin: [f64; 2], score_threshold: f64) -> Self {
        Self {
            id: Self::ID,
            data_url: data_url.into(),
            origin,
            source_color: [0, 128, 200, 255],
            target_color: [200, 0, 80, 255],
            width: 1.0,
            score_threshold,
        }
    }

    pub fn score_threshold(&self) -> f64 {
        self.score_threshold
    }

    /// Sitios con score estrictamente menor al umbral. Sin score, fuera.
    pub fn includes(&self, feature: &Feature) -> bool {
        feature
            .score()
            .map_or(false, |score| score < self.score_threshold)
    }

    /// Un arco por sitio incluido con geometría Point.
    pub fn arcs(&self, collection: &FeatureCollection) -> Vec<ArcSegment> {
        let arcs: Vec<ArcSegment> = collection
            .features
            .iter()
            .filter(|feature| self.includes(feature))
            .filter_map(|feature| {
                let target = feature.coordinates()?;
                Some(ArcSegment {
                    name: feature.properties.location_name.clone(),
                    source: self.origin,
                    target: target.to_vec(),
                })
            })
            .collect();

        log::info!(
            "🌉 Capa de arcos: {} de {} sitios por debajo de {}",
            arcs.len(),
            collection.features.len(),
            self.score_threshold
        );
        arcs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Geometry, SiteProperties};
    use crate::utils::constants::ARC_ORIGIN;

    fn site(name: &str, score: Option<f64>, lng: f64, lat: f64) -> Feature {
        Feature {
            geometry: Some(Geometry::Point { coordinates: vec![lng, lat] }),
            properties: SiteProperties {
                location_name: Some(name.to_string()),
                score,
                ..SiteProperties::default()
            },
        }
    }

    fn layer() -> ArcLayer {
        ArcLayer::new("https://example.test/sites.geojson", ARC_ORIGIN, 90.0)
    }

    #[test]
    fn high_scores_are_filtered_out() {
        let collection = FeatureCollection {
            features: vec![
                site("low", Some(10.0), -76.0, 39.0),
                site("edge", Some(90.0), -77.0, 38.0),
                site("high", Some(99.5), -78.0, 37.0),
                site("just-below", Some(89.99), -79.0, 36.0),
            ],
        };

        let arcs = layer().arcs(&collection);
        let names: Vec<_> = arcs.iter().map(|a| a.name.as_deref().unwrap()).collect();

        assert_eq!(names, vec!["low", "just-below"]);
    }

    #[test]
    fn each_arc_runs_from_origin_to_site() {
        let collection = FeatureCollection {
            features: vec![site("a", Some(50.0), -76.61, 39.29)],
        };

        let arcs = layer().arcs(&collection);

        assert_eq!(arcs.len(), 1);
        assert_eq!(arcs[0].source, [-75.596037, 39.951913]);
        assert_eq!(arcs[0].target, vec![-76.61, 39.29]);
    }

    #[test]
    fn unscored_and_non_point_sites_get_no_arc() {
        let mut no_geometry = site("no-geometry", Some(5.0), 0.0, 0.0);
        no_geometry.geometry = Some(Geometry::Other);
        let collection = FeatureCollection {
            features: vec![site("unscored", None, -76.0, 39.0), no_geometry],
        };

        assert!(layer().arcs(&collection).is_empty());
    }

    #[test]
    fn malformed_feature_does_not_hide_arcs_of_good_ones() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "geometry": { "type": "Point", "coordinates": null },
                    "properties": { "Location_Name": 1234, "Score": 10 }
                },
                {
                    "geometry": { "type": "Point", "coordinates": [-76.61, 39.29] },
                    "properties": { "Location_Name": "Good", "Score": 20 }
                }
            ]
        }"#;
        let collection: FeatureCollection = serde_json::from_str(json).unwrap();

        let arcs = layer().arcs(&collection);

        assert_eq!(arcs.len(), 1);
        assert_eq!(arcs[0].name.as_deref(), Some("Good"));
        assert_eq!(arcs[0].target, vec![-76.61, 39.29]);
    }

    #[test]
    fn threshold_is_policy() {
        let layer = ArcLayer::new("u", ARC_ORIGIN, 20.0);

        assert!(layer.includes(&site("a", Some(19.0), 0.0, 0.0)));
        assert!(!layer.includes(&site("b", Some(40.0), 0.0, 0.0)));
    }

    #[test]
    fn fixed_styling() {
        let layer = layer();

        assert_eq!(layer.id, "arcs");
        assert_eq!(layer.source_color, [0, 128, 200, 255]);
        assert_eq!(layer.target_color, [200, 0, 80, 255]);
        assert_eq!(layer.width, 1.0);
    }
}
