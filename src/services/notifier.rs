// ============================================================================
// CLICK NOTIFIER - Muestra al usuario el sitio pulsado
// ============================================================================

use crate::models::SiteProperties;

/// Click sobre un sitio dibujado.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteClicked {
    pub name: String,
    pub x: Option<String>,
    pub y: Option<String>,
}

impl SiteClicked {
    pub fn from_properties(properties: &SiteProperties) -> Self {
        Self {
            name: properties
                .location_name
                .clone()
                .unwrap_or_else(|| "Unnamed site".to_string()),
            x: properties.x.clone(),
            y: properties.y.clone(),
        }
    }

    /// `"{name} ({x}, {y})"` con X/Y tal como vienen en el dataset.
    pub fn message(&self) -> String {
        format!("{} ({}, {})", self.name, or_unknown(&self.x), or_unknown(&self.y))
    }
}

fn or_unknown(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("?")
}

pub trait ClickNotifier {
    fn notify(&self, event: &SiteClicked);
}

/// `window.alert` bloqueante, lo normal en el navegador.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlertNotifier;

impl ClickNotifier for AlertNotifier {
    fn notify(&self, event: &SiteClicked) {
        let Some(window) = web_sys::window() else {
            log::warn!("⚠️ No hay window para mostrar el alert");
            return;
        };
        if let Err(e) = window.alert_with_message(&event.message()) {
            log::error!("❌ Falló el alert: {:?}", e);
        }
    }
}

#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: std::cell::RefCell<Vec<String>>,
}

#[cfg(test)]
impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

#[cfg(test)]
impl ClickNotifier for RecordingNotifier {
    fn notify(&self, event: &SiteClicked) {
        self.messages.borrow_mut().push(event.message());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_matches_name_and_coordinates() {
        let event = SiteClicked {
            name: "X".to_string(),
            x: Some("1".to_string()),
            y: Some("2".to_string()),
        };

        assert_eq!(event.message(), "X (1, 2)");
    }

    #[test]
    fn fractional_and_missing_values() {
        let properties = SiteProperties {
            x: Some("-76.5".to_string()),
            ..SiteProperties::default()
        };

        assert_eq!(SiteClicked::from_properties(&properties).message(), "Unnamed site (-76.5, ?)");
    }

    #[test]
    fn coordinate_text_is_shown_as_written() {
        let json = r#"{ "Location_Name": "Ferry", "X": "1.50", "Y": "unknown" }"#;
        let properties: SiteProperties = serde_json::from_str(json).unwrap();

        assert_eq!(SiteClicked::from_properties(&properties).message(), "Ferry (1.50, unknown)");
    }
}
