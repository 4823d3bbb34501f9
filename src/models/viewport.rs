use serde::{Deserialize, Serialize};

/// Coordenada del mapa, serializada como espera `google.maps.LatLngLiteral`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Región visible que pide el componente.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub center: LatLng,
    pub zoom: f64,
}

impl Viewport {
    pub const fn new(center: LatLng, zoom: f64) -> Self {
        Self { center, zoom }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        // Washington, DC
        Self::new(LatLng::new(38.889805, -77.009056), 8.0)
    }
}

/// Color RGBA como lo reciben los accessors de deck.gl.
pub type Rgba = [u8; 4];
