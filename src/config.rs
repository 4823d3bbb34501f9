use crate::models::{LatLng, Viewport};
use crate::utils::constants::DEFAULT_SITES_URL;

/// Configuración que recibe el componente raíz.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub google_maps_api_key: String,
    /// Id de estilo vectorial; `None` deja el estilo raster por defecto de Google.
    pub google_map_id: Option<String>,
    pub sites_url: String,
    pub initial_viewport: Viewport,
    pub layer_policy: LayerPolicy,
}

/// Parámetros numéricos de las dos capas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerPolicy {
    /// El radio del punto es `radius_inversion_base - score`.
    pub radius_inversion_base: f64,
    /// Solo los sitios con score estrictamente menor tienen arco.
    pub arc_score_threshold: f64,
}

impl Default for LayerPolicy {
    fn default() -> Self {
        Self {
            radius_inversion_base: 100.0,
            arc_score_threshold: 90.0,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            google_maps_api_key: String::new(),
            google_map_id: None,
            sites_url: DEFAULT_SITES_URL.to_string(),
            initial_viewport: Viewport::default(),
            layer_policy: LayerPolicy::default(),
        }
    }
}

impl AppConfig {
    pub fn new(google_maps_api_key: impl Into<String>) -> Self {
        Self {
            google_maps_api_key: google_maps_api_key.into(),
            ..Self::default()
        }
    }

    pub fn with_map_id(mut self, map_id: impl Into<String>) -> Self {
        self.google_map_id = Some(map_id.into());
        self
    }

    /// Carga la configuración fijada en compilación (ver `build.rs`).
    pub fn from_env() -> Self {
        Self::from_lookup(compile_time_var)
    }

    /// Construye la configuración desde cualquier lookup de claves. Los números
    /// que no se pueden parsear vuelven a su valor por defecto.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let number = |key: &str, default: f64| match non_empty(key) {
            Some(raw) => raw.parse::<f64>().unwrap_or_else(|_| {
                log::warn!("⚠️ Config: {}={:?} no es un número, usando {}", key, raw, default);
                default
            }),
            None => default,
        };

        let center = defaults.initial_viewport.center;
        let policy = defaults.layer_policy;

        Self {
            google_maps_api_key: non_empty("GOOGLE_MAPS_API_KEY").unwrap_or_default(),
            google_map_id: non_empty("GOOGLE_MAPS_MAP_ID"),
            sites_url: non_empty("SITES_URL").unwrap_or(defaults.sites_url),
            initial_viewport: Viewport::new(
                LatLng::new(
                    number("DEFAULT_MAP_CENTER_LAT", center.lat),
                    number("DEFAULT_MAP_CENTER_LNG", center.lng),
                ),
                number("DEFAULT_MAP_ZOOM", defaults.initial_viewport.zoom),
            ),
            layer_policy: LayerPolicy {
                radius_inversion_base: number("POINT_RADIUS_BASE", policy.radius_inversion_base),
                arc_score_threshold: number("ARC_SCORE_THRESHOLD", policy.arc_score_threshold),
            },
        }
    }

    pub fn has_api_key(&self) -> bool {
        !self.google_maps_api_key.is_empty()
    }
}

fn compile_time_var(key: &str) -> Option<String> {
    let value = match key {
        "GOOGLE_MAPS_API_KEY" => option_env!("GOOGLE_MAPS_API_KEY"),
        "GOOGLE_MAPS_MAP_ID" => option_env!("GOOGLE_MAPS_MAP_ID"),
        "SITES_URL" => option_env!("SITES_URL"),
        "DEFAULT_MAP_CENTER_LAT" => option_env!("DEFAULT_MAP_CENTER_LAT"),
        "DEFAULT_MAP_CENTER_LNG" => option_env!("DEFAULT_MAP_CENTER_LNG"),
        "DEFAULT_MAP_ZOOM" => option_env!("DEFAULT_MAP_ZOOM"),
        "POINT_RADIUS_BASE" => option_env!("POINT_RADIUS_BASE"),
        "ARC_SCORE_THRESHOLD" => option_env!("ARC_SCORE_THRESHOLD"),
        _ => None,
    };
    value.map(str::to_string)
}
