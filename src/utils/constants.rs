/// Sitios públicos Network to Freedom publicados por el National Park Service.
pub const DEFAULT_SITES_URL: &str =
    "https://nationalparkservice.github.io/data/projects/network_to_freedom/public_sites.geojson";

/// Origen de los arcos en `[lng, lat]`: Frederick Douglass National Historic Site.
pub const ARC_ORIGIN: [f64; 2] = [-75.596037, 39.951913];

/// Endpoint de arranque del Google Maps JS API.
pub const GOOGLE_MAPS_SCRIPT_URL: &str = "https://maps.googleapis.com/maps/api/js";

/// `id` del `<script>` inyectado, para no cargarlo dos veces.
pub const GOOGLE_MAPS_SCRIPT_ID: &str = "google-maps-js-api";

/// `id` del contenedor del mapa.
pub const MAP_CONTAINER_ID: &str = "map";
