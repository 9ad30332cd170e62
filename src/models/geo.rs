use serde::{Deserialize, Serialize};

/// Geographic point in degrees (`{lat, lng}` on the wire)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// `"lat,lng"` format used by `/chargers-on-route`
    pub fn to_query_value(&self) -> String {
        format!("{},{}", self.lat, self.lng)
    }
}

/// Visible map area as reported by the map widget on `moveend`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl Bounds {
    pub fn new(south_west: LatLng, north_east: LatLng) -> Self {
        Self { south_west, north_east }
    }

    /// Smallest bounds containing every point; `None` for an empty path
    pub fn from_points(points: &[LatLng]) -> Option<Self> {
        let first = points.first()?;
        let mut sw = *first;
        let mut ne = *first;
        for p in &points[1..] {
            sw.lat = sw.lat.min(p.lat);
            sw.lng = sw.lng.min(p.lng);
            ne.lat = ne.lat.max(p.lat);
            ne.lng = ne.lng.max(p.lng);
        }
        Some(Self::new(sw, ne))
    }

    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.south_west.lat + self.north_east.lat) / 2.0,
            (self.south_west.lng + self.north_east.lng) / 2.0,
        )
    }

    pub fn corners(&self) -> [LatLng; 4] {
        [
            self.south_west,
            self.north_east,
            LatLng::new(self.south_west.lat, self.north_east.lng),
            LatLng::new(self.north_east.lat, self.south_west.lng),
        ]
    }
}

/// Center + bounds pair emitted by the map after each move
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub center: LatLng,
    pub bounds: Bounds,
}
