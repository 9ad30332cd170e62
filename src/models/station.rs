use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::models::geo::LatLng;

/// Charger status. Anything the backend sends that we don't know maps to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum StationStatus {
    Available,
    #[serde(rename = "In-Use", alias = "InUse", alias = "In Use")]
    InUse,
    Degraded,
    #[default]
    #[serde(other)]
    Unknown,
}

impl StationStatus {
    /// Fixed set offered in the status report form, in display order
    pub const ALL: [StationStatus; 4] = [
        StationStatus::Available,
        StationStatus::InUse,
        StationStatus::Degraded,
        StationStatus::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StationStatus::Available => "Available",
            StationStatus::InUse => "In-Use",
            StationStatus::Degraded => "Degraded",
            StationStatus::Unknown => "Unknown",
        }
    }

    /// Inverse of `as_str`, used when reading `<select>` values back
    pub fn from_label(label: &str) -> StationStatus {
        Self::ALL
            .into_iter()
            .find(|s| s.as_str() == label)
            .unwrap_or(StationStatus::Unknown)
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            StationStatus::Available => "status-available",
            StationStatus::InUse => "status-in-use",
            StationStatus::Degraded => "status-degraded",
            StationStatus::Unknown => "status-unknown",
        }
    }
}

impl fmt::Display for StationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sub-station ids come as numbers or strings depending on the data source.
/// Kept as received so the PUT body matches what the backend stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubStationId {
    Number(i64),
    Text(String),
}

impl fmt::Display for SubStationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubStationId::Number(n) => write!(f, "{}", n),
            SubStationId::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeoCoordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Single charger inside a station
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubStation {
    pub id: SubStationId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub status: StationStatus,
    /// level, freeOfCharge, connectors... passed through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Physical charging site as stored by the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Station {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "geoCoordinates")]
    pub geo_coordinates: GeoCoordinates,
    #[serde(default)]
    pub stations: Vec<SubStation>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Station {
    pub fn position(&self) -> LatLng {
        LatLng::new(self.geo_coordinates.latitude, self.geo_coordinates.longitude)
    }

    pub fn count_with_status(&self, status: StationStatus) -> usize {
        self.stations.iter().filter(|s| s.status == status).count()
    }

    /// Copy of this record with `sub_stations` swapped in; every other field kept
    pub fn with_sub_stations(&self, sub_stations: Vec<SubStation>) -> Station {
        Station {
            stations: sub_stations,
            ..self.clone()
        }
    }
}

/// `GET /stations` body
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StationsResponse {
    #[serde(default)]
    pub stations: Vec<Station>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_backend_record_with_numeric_sub_ids() {
        let station: Station = serde_json::from_value(json!({
            "id": "A",
            "name": "Jackson Square",
            "geoCoordinates": {"latitude": 43.26, "longitude": -79.92},
            "distance_km": 1.2,
            "stations": [
                {"id": 1, "name": "Port 1", "status": "Available", "level": "L2", "freeOfCharge": false},
                {"id": "p-2", "name": "Port 2", "status": "In-Use"}
            ]
        }))
        .unwrap();

        assert_eq!(station.position(), LatLng::new(43.26, -79.92));
        assert_eq!(station.stations[0].id, SubStationId::Number(1));
        assert_eq!(station.stations[1].id, SubStationId::Text("p-2".into()));
        assert_eq!(station.stations[1].status, StationStatus::InUse);
        assert_eq!(station.extra.get("distance_km"), Some(&json!(1.2)));
        assert_eq!(station.stations[0].extra.get("level"), Some(&json!("L2")));
    }

    #[test]
    fn unknown_or_missing_status_is_unknown() {
        let sub: SubStation =
            serde_json::from_value(json!({"id": 3, "status": "OutOfOrder"})).unwrap();
        assert_eq!(sub.status, StationStatus::Unknown);

        let sub: SubStation = serde_json::from_value(json!({"id": 4})).unwrap();
        assert_eq!(sub.status, StationStatus::Unknown);
        assert_eq!(sub.name, "");
    }

    #[test]
    fn serializes_extras_back_at_top_level() {
        let station: Station = serde_json::from_value(json!({
            "id": "A",
            "name": "Site",
            "geoCoordinates": {"latitude": 1.0, "longitude": 2.0},
            "networkId": 7,
            "stations": [{"id": 1, "name": "P1", "status": "Degraded", "level": "L3"}]
        }))
        .unwrap();

        let value = serde_json::to_value(&station).unwrap();
        assert_eq!(value["networkId"], json!(7));
        assert_eq!(value["stations"][0]["level"], json!("L3"));
        assert_eq!(value["stations"][0]["status"], json!("Degraded"));
        assert_eq!(value["stations"][0]["id"], json!(1));
    }

    #[test]
    fn status_labels_match_select_values() {
        for status in StationStatus::ALL {
            assert_eq!(StationStatus::from_label(status.as_str()), status);
        }
        assert_eq!(StationStatus::from_label("bogus"), StationStatus::Unknown);
    }
}
