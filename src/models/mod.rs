pub mod site;
pub mod viewport;

pub use site::{Feature, FeatureCollection, Geometry, SiteProperties};
pub use viewport::{LatLng, Rgba, Viewport};
