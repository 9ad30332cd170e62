use serde::Serialize;
use thiserror::Error;

use crate::models::{LatLng, Marker};

/// What the map bridge receives per marker. Popup fields are set as text, never HTML.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub id: Option<String>,
    pub title: String,
    pub summary: String,
    pub coords: [f64; 2], // [lat, lng]
}

impl From<&Marker> for MapMarker {
    fn from(marker: &Marker) -> Self {
        Self {
            id: marker.id.clone(),
            title: marker.popup.title.clone(),
            summary: marker.popup.summary.clone(),
            coords: [marker.position.lat, marker.position.lng],
        }
    }
}

/// Renderer seam for the station map
pub trait MapRenderer {
    /// Replace every marker on the map
    fn set_markers(&mut self, markers: &[MapMarker]) -> Result<(), MapError>;

    fn set_center(&mut self, center: LatLng) -> Result<(), MapError>;

    fn is_ready(&self) -> bool;
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MapError {
    #[error("Map is not ready")]
    NotReady,
    #[error("Invalid coordinates ({0}, {1})")]
    InvalidCoordinates(f64, f64),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub fn validate(center: LatLng) -> Result<LatLng, MapError> {
    let valid = center.lat.is_finite()
        && center.lng.is_finite()
        && (-90.0..=90.0).contains(&center.lat)
        && (-180.0..=180.0).contains(&center.lng);
    if valid {
        Ok(center)
    } else {
        Err(MapError::InvalidCoordinates(center.lat, center.lng))
    }
}
