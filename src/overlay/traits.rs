use crate::models::LatLng;

/// El mapa anfitrión visto desde el sincronizador: solo se le escribe el viewport.
pub trait HostMap {
    fn set_center(&self, center: LatLng) -> Result<(), OverlayError>;

    fn set_zoom(&self, zoom: f64) -> Result<(), OverlayError>;
}

/// Overlay de visualización que se puede enlazar a un mapa anfitrión.
pub trait LayerOverlay {
    type Host: HostMap;

    /// Enlaza (o re-enlaza) el overlay a la superficie del mapa.
    fn attach(&self, host: &Self::Host) -> Result<(), OverlayError>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum OverlayError {
    /// Una llamada al mapa o al SDK de visualización lanzó una excepción.
    HostCall {
        operation: &'static str,
        message: String,
    },
    LayerConstruction(String),
    /// El mapa avisó por segunda vez que está listo.
    AlreadyAttached,
}

impl OverlayError {
    pub fn host_call(operation: &'static str, message: impl Into<String>) -> Self {
        OverlayError::HostCall {
            operation,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for OverlayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OverlayError::HostCall { operation, message } => {
                write!(f, "Host map call {} failed: {}", operation, message)
            }
            OverlayError::LayerConstruction(msg) => write!(f, "Layer construction failed: {}", msg),
            OverlayError::AlreadyAttached => write!(f, "Overlay is already attached to a host map"),
        }
    }
}

impl std::error::Error for OverlayError {}
