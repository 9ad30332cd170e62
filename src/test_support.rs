// In-memory fakes for the backend / provider / renderer seams

use std::cell::RefCell;
use std::collections::VecDeque;

use futures::channel::oneshot;
use serde_json::json;

use crate::maps::{MapError, MapMarker, MapRenderer};
use crate::models::{LatLng, RouteSearchResponse, Station};
use crate::services::{ApiError, StationQuery, StationsApi};
use crate::viewmodels::route_viewmodel::RouteProvider;

pub fn station(id: &str, lat: f64, lng: f64, statuses: &[&str]) -> Station {
    let subs: Vec<_> = statuses
        .iter()
        .enumerate()
        .map(|(i, s)| json!({"id": i + 1, "name": format!("Port {}", i + 1), "status": s}))
        .collect();
    serde_json::from_value(json!({
        "id": id,
        "name": format!("Station {}", id),
        "geoCoordinates": {"latitude": lat, "longitude": lng},
        "stations": subs
    }))
    .unwrap()
}

/// Records every request as "METHOD path" and answers from canned data
#[derive(Default)]
pub struct FakeApi {
    pub calls: RefCell<Vec<String>>,
    pub stations: RefCell<Vec<Station>>,
    /// When non-empty, `fetch_stations` waits on these in order
    pub pending_lists: RefCell<VecDeque<oneshot::Receiver<Vec<Station>>>>,
    pub station: RefCell<Option<Station>>,
    pub written: RefCell<Vec<(String, Station)>>,
    /// When non-empty, `update_station` waits on these in order; a dropped sender fails the write
    pub pending_writes: RefCell<VecDeque<oneshot::Receiver<()>>>,
    pub fail_reads: RefCell<bool>,
    pub fail_writes: RefCell<bool>,
    pub route_chargers: RefCell<Vec<Station>>,
    /// When non-empty, `chargers_on_route` answers from these in order
    pub pending_route_chargers: RefCell<VecDeque<oneshot::Receiver<Vec<Station>>>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn failure() -> ApiError {
        ApiError::Http { status: 500, status_text: "Internal Server Error".into() }
    }
}

impl StationsApi for FakeApi {
    async fn fetch_stations(&self, query: StationQuery) -> Result<Vec<Station>, ApiError> {
        let params: Vec<String> = query.query_params().iter().map(|(k, v)| format!("{}={}", k, v)).collect();
        self.calls.borrow_mut().push(format!("GET /stations?{}", params.join("&")));

        let pending = self.pending_lists.borrow_mut().pop_front();
        match pending {
            Some(rx) => rx.await.map_err(|_| ApiError::Network("cancelled".into())),
            None => Ok(self.stations.borrow().clone()),
        }
    }

    async fn fetch_station(&self, station_id: &str) -> Result<Station, ApiError> {
        self.calls.borrow_mut().push(format!("GET /data/{}", station_id));
        if *self.fail_reads.borrow() {
            return Err(Self::failure());
        }
        self.station
            .borrow()
            .clone()
            .ok_or(ApiError::Http { status: 404, status_text: "Not Found".into() })
    }

    async fn update_station(&self, station_id: &str, station: &Station) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(format!("PUT /data/{}", station_id));
        let pending = self.pending_writes.borrow_mut().pop_front();
        if let Some(rx) = pending {
            rx.await.map_err(|_| Self::failure())?;
        }
        if *self.fail_writes.borrow() {
            return Err(Self::failure());
        }
        self.written.borrow_mut().push((station_id.to_string(), station.clone()));
        Ok(())
    }

    async fn chargers_on_route(
        &self,
        origin: LatLng,
        destination: LatLng,
        max_distance_km: f64,
    ) -> Result<RouteSearchResponse, ApiError> {
        self.calls.borrow_mut().push(format!(
            "GET /chargers-on-route?origin={}&destination={}&max_distance={}",
            origin.to_query_value(),
            destination.to_query_value(),
            max_distance_km
        ));
        if *self.fail_reads.borrow() {
            return Err(Self::failure());
        }
        let pending = self.pending_route_chargers.borrow_mut().pop_front();
        let chargers = match pending {
            Some(rx) => rx.await.map_err(|_| Self::failure())?,
            None => self.route_chargers.borrow().clone(),
        };
        Ok(RouteSearchResponse { route: Vec::new(), chargers })
    }
}

/// Geocoder/directions fake; addresses missing from `places` fail
#[derive(Default)]
pub struct FakeRouteProvider {
    pub calls: RefCell<Vec<String>>,
    pub places: Vec<(String, LatLng)>,
    pub fail_directions: bool,
}

impl FakeRouteProvider {
    pub fn with_places(places: &[(&str, LatLng)]) -> Self {
        Self {
            places: places.iter().map(|(a, p)| (a.to_string(), *p)).collect(),
            ..Self::default()
        }
    }
}

impl RouteProvider for FakeRouteProvider {
    async fn geocode(&self, address: &str) -> Result<LatLng, ApiError> {
        self.calls.borrow_mut().push(format!("geocode {}", address));
        self.places
            .iter()
            .find(|(a, _)| a == address)
            .map(|(_, p)| *p)
            .ok_or_else(|| ApiError::Provider("ZERO_RESULTS".into()))
    }

    async fn driving_route(&self, origin: LatLng, destination: LatLng) -> Result<Vec<LatLng>, ApiError> {
        self.calls.borrow_mut().push("directions".to_string());
        if self.fail_directions {
            return Err(ApiError::Provider("NOT_FOUND".into()));
        }
        Ok(vec![origin, LatLng::new((origin.lat + destination.lat) / 2.0, origin.lng), destination])
    }
}

/// Remembers what the map was told to draw
#[derive(Default)]
pub struct FakeRenderer {
    pub markers: Vec<MapMarker>,
    pub centers: Vec<LatLng>,
    pub ready: bool,
}

impl FakeRenderer {
    pub fn ready() -> Self {
        Self { ready: true, ..Self::default() }
    }
}

impl MapRenderer for FakeRenderer {
    fn set_markers(&mut self, markers: &[MapMarker]) -> Result<(), MapError> {
        if !self.ready {
            return Err(MapError::NotReady);
        }
        self.markers = markers.to_vec();
        Ok(())
    }

    fn set_center(&mut self, center: LatLng) -> Result<(), MapError> {
        if !self.ready {
            return Err(MapError::NotReady);
        }
        self.centers.push(center);
        Ok(())
    }

    fn is_ready(&self) -> bool {
        self.ready
    }
}
