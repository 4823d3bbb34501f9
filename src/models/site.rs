// ============================================================================
// SITE FEATURES - Subconjunto GeoJSON del dataset Network to Freedom
// ============================================================================
// Solo lectura: el SDK de visualización descarga la colección y devuelve
// las features a Rust a través de los accessors de cada capa.
// Una feature mal formada no tumba la colección: se descarta o queda vacía.
// ============================================================================

use serde::{de::Visitor, Deserialize, Deserializer};
use serde_json::{Map, Value};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct FeatureCollection {
    #[serde(default, deserialize_with = "deserialize_features")]
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Feature {
    #[serde(default, deserialize_with = "deserialize_geometry")]
    pub geometry: Option<Geometry>,
    #[serde(default, deserialize_with = "deserialize_properties")]
    pub properties: SiteProperties,
}

impl Feature {
    /// Coordenadas del Point en `[lng, lat(, alt)]`; `None` para otras geometrías.
    pub fn coordinates(&self) -> Option<&[f64]> {
        match &self.geometry {
            Some(Geometry::Point { coordinates }) => Some(coordinates),
            _ => None,
        }
    }

    pub fn score(&self) -> Option<f64> {
        self.properties.score
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point { coordinates: Vec<f64> },
    #[serde(other)]
    Other,
}

/// Propiedades de un sitio. `X` e `Y` se guardan como texto tal cual llegan;
/// el resto de claves del dataset va a `extra` sin tocar.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SiteProperties {
    #[serde(rename = "Location_Name", default, deserialize_with = "deserialize_lenient_text")]
    pub location_name: Option<String>,
    #[serde(rename = "Score", default, deserialize_with = "deserialize_lenient_number")]
    pub score: Option<f64>,
    #[serde(rename = "X", default, deserialize_with = "deserialize_lenient_text")]
    pub x: Option<String>,
    #[serde(rename = "Y", default, deserialize_with = "deserialize_lenient_text")]
    pub y: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SiteProperties {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}

fn deserialize_features<'de, D>(deserializer: D) -> Result<Vec<Feature>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        Value::Null => Vec::new(),
        other => {
            log::warn!("⚠️ 'features' no es un array ({}), colección vacía", other);
            return Ok(Vec::new());
        }
    };

    let total = items.len();
    let features: Vec<Feature> = items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value(item) {
            Ok(feature) => Some(feature),
            Err(e) => {
                log::warn!("⚠️ Feature {} descartada: {}", index, e);
                None
            }
        })
        .collect();

    if features.len() < total {
        log::warn!("⚠️ {} de {} features descartadas", total - features.len(), total);
    }
    Ok(features)
}

fn deserialize_geometry<'de, D>(deserializer: D) -> Result<Option<Geometry>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(value) = Option::<Value>::deserialize(deserializer)? else {
        return Ok(None);
    };
    match serde_json::from_value(value) {
        Ok(geometry) => Ok(Some(geometry)),
        Err(e) => {
            log::warn!("⚠️ Geometría inválida, se ignora: {}", e);
            Ok(None)
        }
    }
}

fn deserialize_properties<'de, D>(deserializer: D) -> Result<SiteProperties, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(value) = Option::<Value>::deserialize(deserializer)? else {
        return Ok(SiteProperties::default());
    };
    match serde_json::from_value(value) {
        Ok(properties) => Ok(properties),
        Err(e) => {
            log::warn!("⚠️ Propiedades inválidas, se usan vacías: {}", e);
            Ok(SiteProperties::default())
        }
    }
}

/// Acepta un número o un string numérico. Cualquier otra cosa queda como
/// ausente en vez de fallar.
fn deserialize_lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    struct LenientNumberVisitor;

    impl<'de> Visitor<'de> for LenientNumberVisitor {
        type Value = Option<f64>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a number, a numeric string or null")
        }

        fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(value))
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(value as f64))
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(value as f64))
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.trim().parse::<f64>().ok())
        }

        fn visit_bool<E>(self, _value: bool) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }

        fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_any(self)
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: serde::de::SeqAccess<'de>,
        {
            while seq.next_element::<serde::de::IgnoredAny>()?.is_some() {}
            Ok(None)
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: serde::de::MapAccess<'de>,
        {
            while map
                .next_entry::<serde::de::IgnoredAny, serde::de::IgnoredAny>()?
                .is_some()
            {}
            Ok(None)
        }
    }

    deserializer.deserialize_option(LenientNumberVisitor)
}

/// Texto tal cual: los strings se guardan sin normalizar ("1.50" sigue
/// siendo "1.50"), números y booleanos pasan a su forma textual.
fn deserialize_lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct LenientTextVisitor;

    impl<'de> Visitor<'de> for LenientTextVisitor {
        type Value = Option<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string, a number or null")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(value))
        }

        fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }

        fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_any(self)
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: serde::de::SeqAccess<'de>,
        {
            while seq.next_element::<serde::de::IgnoredAny>()?.is_some() {}
            Ok(None)
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: serde::de::MapAccess<'de>,
        {
            while map
                .next_entry::<serde::de::IgnoredAny, serde::de::IgnoredAny>()?
                .is_some()
            {}
            Ok(None)
        }
    }

    deserializer.deserialize_option(LenientTextVisitor)
}
