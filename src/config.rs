// ============================================================================
// CONFIG - Build-time configuration (.env -> build.rs -> option_env!)
// ============================================================================

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url: String,
    pub google_maps_api_key: String,
    pub enable_logging: bool,
    pub map_config: MapConfig,
    pub search_config: SearchConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: "http://127.0.0.1:8000".to_string(),
            google_maps_api_key: String::new(),
            enable_logging: true,
            map_config: MapConfig::default(),
            search_config: SearchConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    pub default_center_lat: f64,
    pub default_center_lng: f64,
    pub default_zoom: f64,
    pub tile_url: String,
    pub tile_attribution: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            default_center_lat: 43.2557,
            default_center_lng: -79.8711,
            default_zoom: 13.0,
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            tile_attribution: "© OpenStreetMap contributors".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Max lateral distance (km) from the route for a charger to count as "on route"
    pub route_corridor_km: f64,
    /// Use `/stations?lat=&lon=&radius_km=` on map moves instead of `/stations`
    pub bounded_refresh: bool,
    pub min_refresh_radius_km: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            route_corridor_km: 0.5,
            bounded_refresh: true,
            min_refresh_radius_km: 5.0,
        }
    }
}

fn parse_or<T: std::str::FromStr>(value: Option<&str>, default: T) -> T {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

impl AppConfig {
    /// Load configuration from compile-time environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend_url: option_env!("BACKEND_URL")
                .map(|s| s.trim_end_matches('/').to_string())
                .unwrap_or(defaults.backend_url),
            google_maps_api_key: option_env!("GOOGLE_MAPS_API_KEY")
                .unwrap_or("")
                .to_string(),
            enable_logging: parse_or(option_env!("ENABLE_LOGGING"), true),
            map_config: MapConfig {
                default_center_lat: parse_or(
                    option_env!("DEFAULT_MAP_CENTER_LAT"),
                    defaults.map_config.default_center_lat,
                ),
                default_center_lng: parse_or(
                    option_env!("DEFAULT_MAP_CENTER_LNG"),
                    defaults.map_config.default_center_lng,
                ),
                default_zoom: parse_or(
                    option_env!("DEFAULT_MAP_ZOOM"),
                    defaults.map_config.default_zoom,
                ),
                tile_url: option_env!("TILE_URL")
                    .map(str::to_string)
                    .unwrap_or(defaults.map_config.tile_url),
                tile_attribution: option_env!("TILE_ATTRIBUTION")
                    .map(str::to_string)
                    .unwrap_or(defaults.map_config.tile_attribution),
            },
            search_config: SearchConfig {
                route_corridor_km: parse_or(
                    option_env!("ROUTE_CORRIDOR_KM"),
                    defaults.search_config.route_corridor_km,
                ),
                bounded_refresh: parse_or(
                    option_env!("BOUNDED_REFRESH"),
                    defaults.search_config.bounded_refresh,
                ),
                min_refresh_radius_km: parse_or(
                    option_env!("MIN_REFRESH_RADIUS_KM"),
                    defaults.search_config.min_refresh_radius_km,
                ),
            },
        }
    }

    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Info
        } else {
            log::Level::Warn
        }
    }

    pub fn google_maps_key(&self) -> &str {
        &self.google_maps_api_key
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
