// ============================================================================
// GEO - Distance / radius / zoom helpers (pure math)
// ============================================================================

use crate::models::{Bounds, LatLng};

const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Tile size of the Web-Mercator world at zoom 0
const WORLD_DIM_PX: f64 = 256.0;
const ZOOM_MAX: i32 = 21;

/// Great-circle distance in km (haversine)
pub fn haversine_km(a: LatLng, b: LatLng) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().min(1.0).asin()
}

/// Radius that covers the whole visible area from `center`, never below `min_km`
pub fn refresh_radius_km(center: LatLng, bounds: &Bounds, min_km: f64) -> f64 {
    bounds
        .corners()
        .iter()
        .map(|corner| haversine_km(center, *corner))
        .fold(min_km, f64::max)
}

fn lat_rad(lat: f64) -> f64 {
    let sin = lat.to_radians().sin();
    let rad_x2 = ((1.0 + sin) / (1.0 - sin)).ln() / 2.0;
    rad_x2.clamp(-std::f64::consts::PI, std::f64::consts::PI) / 2.0
}

fn zoom_for(map_px: f64, fraction: f64) -> i32 {
    if fraction <= 0.0 {
        return ZOOM_MAX;
    }
    (map_px / WORLD_DIM_PX / fraction).log2().floor() as i32
}

/// Highest zoom at which `bounds` fits a `width` x `height` px map
pub fn zoom_level_for_bounds(bounds: &Bounds, width: f64, height: f64) -> i32 {
    let ne = bounds.north_east;
    let sw = bounds.south_west;

    let lat_fraction = (lat_rad(ne.lat) - lat_rad(sw.lat)) / std::f64::consts::PI;
    let lng_diff = ne.lng - sw.lng;
    let lng_fraction = ((lng_diff + 360.0) % 360.0) / 360.0;

    let lat_zoom = zoom_for(height, lat_fraction);
    let lng_zoom = zoom_for(width, lng_fraction);

    lat_zoom.min(lng_zoom).min(ZOOM_MAX).max(0)
}
