use crate::models::LatLng;
use crate::utils::leaflet_ffi::{is_leaflet_map_ready, set_leaflet_center, set_leaflet_markers};
use super::{validate, MapError, MapMarker, MapRenderer};

/// Station map renderer backed by Leaflet (OSM tiles)
#[derive(Default)]
pub struct LeafletMap;

impl LeafletMap {
    pub fn new() -> Self {
        Self
    }
}

impl MapRenderer for LeafletMap {
    fn set_markers(&mut self, markers: &[MapMarker]) -> Result<(), MapError> {
        if !self.is_ready() {
            return Err(MapError::NotReady);
        }
        let json = serde_json::to_string(markers).map_err(|e| MapError::Serialization(e.to_string()))?;
        log::info!("🗺️ [LEAFLET] Pushing {} markers ({} bytes)", markers.len(), json.len());
        set_leaflet_markers(&json);
        Ok(())
    }

    fn set_center(&mut self, center: LatLng) -> Result<(), MapError> {
        if !self.is_ready() {
            return Err(MapError::NotReady);
        }
        let center = validate(center)?;
        log::info!("🎯 [LEAFLET] Centering on ({}, {})", center.lat, center.lng);
        set_leaflet_center(center.lat, center.lng);
        Ok(())
    }

    fn is_ready(&self) -> bool {
        is_leaflet_map_ready()
    }
}
