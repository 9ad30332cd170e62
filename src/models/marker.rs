use serde::Serialize;

use crate::models::geo::LatLng;
use crate::models::station::{Station, StationStatus};

/// Popup body as plain fields; the map bridge sets them with textContent
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PopupContent {
    pub title: String,
    pub summary: String,
}

/// Point rendered on the map and as a row in the marker list
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub position: LatLng,
    pub popup: PopupContent,
    /// Station id; markers without one can't open the status report
    pub id: Option<String>,
}

impl Marker {
    pub fn label(&self) -> &str {
        &self.popup.title
    }
}

impl From<&Station> for Marker {
    fn from(station: &Station) -> Self {
        let total = station.stations.len();
        let summary = if total == 0 {
            "No chargers listed".to_string()
        } else {
            format!(
                "{} charger{} · {} available",
                total,
                if total == 1 { "" } else { "s" },
                station.count_with_status(StationStatus::Available)
            )
        };
        let title = if station.name.trim().is_empty() {
            station.id.clone()
        } else {
            station.name.clone()
        };

        Marker {
            position: station.position(),
            popup: PopupContent { title, summary },
            id: Some(station.id.clone()),
        }
    }
}
