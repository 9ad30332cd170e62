// ============================================================================
// ROUTE VIEWMODEL - Geocode -> directions -> chargers along the route
// ============================================================================
// Steps run strictly in order; the first failure aborts and nothing is drawn.
// ============================================================================

use thiserror::Error;

use crate::maps::MapMarker;
use crate::models::{Bounds, LatLng, Marker, RoutePlan};
use crate::services::{ApiError, DirectionsService, GeocodingService, StationsApi};
use crate::state::RouteState;
use crate::utils::geo::zoom_level_for_bounds;

pub const MISSING_INPUT_MESSAGE: &str = "Please enter both origin and destination.";
pub const ROUTE_FAILED_MESSAGE: &str = "Failed to calculate route. Please try again.";

/// Address lookup + driving directions
#[allow(async_fn_in_trait)]
pub trait RouteProvider {
    async fn geocode(&self, address: &str) -> Result<LatLng, ApiError>;
    async fn driving_route(&self, origin: LatLng, destination: LatLng) -> Result<Vec<LatLng>, ApiError>;
}

/// Geocoding over HTTP, directions through the Google Maps bridge
#[derive(Clone)]
pub struct GoogleRouteProvider {
    geocoding: GeocodingService,
    directions: DirectionsService,
}

impl GoogleRouteProvider {
    pub fn new() -> Self {
        Self {
            geocoding: GeocodingService::new(),
            directions: DirectionsService::new(),
        }
    }
}

impl RouteProvider for GoogleRouteProvider {
    async fn geocode(&self, address: &str) -> Result<LatLng, ApiError> {
        self.geocoding.geocode(address).await
    }

    async fn driving_route(&self, origin: LatLng, destination: LatLng) -> Result<Vec<LatLng>, ApiError> {
        self.directions.driving_route(origin, destination).await
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteError {
    #[error("origin and destination are required")]
    MissingInput,
    #[error("could not geocode {which}: {source}")]
    Geocode { which: &'static str, source: ApiError },
    #[error("directions failed: {0}")]
    Directions(ApiError),
    #[error("chargers on route failed: {0}")]
    Chargers(ApiError),
}

impl RouteError {
    /// Text for the browser alert
    pub fn user_message(&self) -> &'static str {
        match self {
            RouteError::MissingInput => MISSING_INPUT_MESSAGE,
            _ => ROUTE_FAILED_MESSAGE,
        }
    }
}

pub struct RouteViewModel;

impl RouteViewModel {
    pub async fn plan<P: RouteProvider, A: StationsApi>(
        provider: &P,
        api: &A,
        origin: &str,
        destination: &str,
        corridor_km: f64,
    ) -> Result<RoutePlan, RouteError> {
        let (origin, destination) = (origin.trim(), destination.trim());
        if origin.is_empty() || destination.is_empty() {
            return Err(RouteError::MissingInput);
        }

        let origin_pos = provider
            .geocode(origin)
            .await
            .map_err(|source| RouteError::Geocode { which: "origin", source })?;
        let destination_pos = provider
            .geocode(destination)
            .await
            .map_err(|source| RouteError::Geocode { which: "destination", source })?;

        let path = provider
            .driving_route(origin_pos, destination_pos)
            .await
            .map_err(RouteError::Directions)?;

        let found = api
            .chargers_on_route(origin_pos, destination_pos, corridor_km)
            .await
            .map_err(RouteError::Chargers)?;

        log::info!("🛣️ [ROUTE] {} path points, {} chargers", path.len(), found.chargers.len());
        Ok(RoutePlan {
            origin: origin_pos,
            destination: destination_pos,
            path,
            chargers: found.chargers,
        })
    }

    /// Run one calculation from the current inputs and store the plan.
    /// `Ok(false)` means a newer calculation superseded this one, whatever its outcome.
    pub async fn calculate<P: RouteProvider, A: StationsApi>(
        route: &RouteState,
        provider: &P,
        api: &A,
        corridor_km: f64,
    ) -> Result<bool, RouteError> {
        let (origin, destination) = route.inputs();
        let token = route.begin_calculation();
        log::info!("🧮 [ROUTE] Calculating '{}' -> '{}'", origin, destination);

        match Self::plan(provider, api, &origin, &destination, corridor_km).await {
            Ok(plan) => Ok(route.finish_calculation(token, Some(plan))),
            Err(e) => {
                if !route.finish_calculation(token, None) {
                    log::info!("⏭️ [ROUTE] Superseded calculation failed: {}", e);
                    return Ok(false);
                }
                log::error!("❌ [ROUTE] {}", e);
                Err(e)
            }
        }
    }

    /// Charger pins for the route map, popups as plain text
    pub fn charger_markers(plan: &RoutePlan) -> Vec<MapMarker> {
        plan.chargers
            .iter()
            .map(|station| MapMarker::from(&Marker::from(station)))
            .collect()
    }

    /// Zoom that fits the path and every charger into a `width` x `height` map
    pub fn overlay_zoom(plan: &RoutePlan, width: f64, height: f64) -> Option<i32> {
        let points: Vec<LatLng> = plan
            .path
            .iter()
            .copied()
            .chain(plan.chargers.iter().map(|s| s.position()))
            .collect();
        Bounds::from_points(&points).map(|bounds| zoom_level_for_bounds(&bounds, width, height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{station, FakeApi, FakeRouteProvider};
    use futures::channel::oneshot;
    use futures::executor::{block_on, LocalPool};
    use futures::task::LocalSpawnExt;
    use std::cell::RefCell;
    use std::rc::Rc;

    const HAMILTON: LatLng = LatLng { lat: 43.2557, lng: -79.8711 };
    const TORONTO: LatLng = LatLng { lat: 43.6532, lng: -79.3832 };

    fn provider() -> FakeRouteProvider {
        FakeRouteProvider::with_places(&[("Hamilton", HAMILTON), ("Toronto", TORONTO)])
    }

    #[test]
    fn full_flow_runs_steps_in_order() {
        let provider = provider();
        let api = FakeApi::new();
        *api.route_chargers.borrow_mut() = vec![station("R1", 43.4, -79.6, &["Available"])];

        let plan = block_on(RouteViewModel::plan(&provider, &api, "Hamilton", "Toronto", 0.5)).unwrap();

        assert_eq!(
            *provider.calls.borrow(),
            vec!["geocode Hamilton", "geocode Toronto", "directions"]
        );
        assert_eq!(
            api.calls(),
            vec!["GET /chargers-on-route?origin=43.2557,-79.8711&destination=43.6532,-79.3832&max_distance=0.5"]
        );
        assert_eq!(plan.origin, HAMILTON);
        assert_eq!(plan.destination, TORONTO);
        assert_eq!(plan.path.len(), 3);
        assert_eq!(plan.chargers.len(), 1);
    }

    #[test]
    fn blank_input_is_rejected_before_any_call() {
        let provider = provider();
        let api = FakeApi::new();

        let err = block_on(RouteViewModel::plan(&provider, &api, "  ", "Toronto", 0.5)).unwrap_err();

        assert_eq!(err, RouteError::MissingInput);
        assert_eq!(err.user_message(), MISSING_INPUT_MESSAGE);
        assert!(provider.calls.borrow().is_empty());
        assert!(api.calls().is_empty());
    }

    #[test]
    fn unknown_destination_aborts_before_directions() {
        let provider = provider();
        let api = FakeApi::new();

        let err = block_on(RouteViewModel::plan(&provider, &api, "Hamilton", "Atlantis", 0.5)).unwrap_err();

        assert!(matches!(err, RouteError::Geocode { which: "destination", .. }));
        assert_eq!(err.user_message(), ROUTE_FAILED_MESSAGE);
        assert_eq!(*provider.calls.borrow(), vec!["geocode Hamilton", "geocode Atlantis"]);
        assert!(api.calls().is_empty());
    }

    #[test]
    fn directions_failure_skips_backend() {
        let provider = FakeRouteProvider { fail_directions: true, ..provider() };
        let api = FakeApi::new();

        let err = block_on(RouteViewModel::plan(&provider, &api, "Hamilton", "Toronto", 0.5)).unwrap_err();

        assert!(matches!(err, RouteError::Directions(_)));
        assert!(api.calls().is_empty());
    }

    #[test]
    fn overlay_fits_path_and_chargers() {
        let plan = RoutePlan {
            origin: HAMILTON,
            destination: TORONTO,
            path: vec![HAMILTON, TORONTO],
            chargers: vec![station("R1", 43.4, -79.6, &["Available", "Degraded"])],
        };

        let markers = RouteViewModel::charger_markers(&plan);
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].coords, [43.4, -79.6]);
        assert_eq!(markers[0].summary, "2 chargers · 1 available");

        let zoom = RouteViewModel::overlay_zoom(&plan, 800.0, 600.0).unwrap();
        assert!((8..=11).contains(&zoom), "zoom {}", zoom);
    }

    #[test]
    fn failed_calculation_keeps_previous_plan() {
        let provider = provider();
        let api = FakeApi::new();
        let route = RouteState::new();
        route.set_origin("Hamilton");
        route.set_destination("Toronto");
        assert_eq!(block_on(RouteViewModel::calculate(&route, &provider, &api, 0.5)), Ok(true));
        let first = route.get_plan();
        assert!(first.is_some());

        *api.fail_reads.borrow_mut() = true;
        let result = block_on(RouteViewModel::calculate(&route, &provider, &api, 0.5));

        assert!(matches!(result, Err(RouteError::Chargers(_))));
        assert_eq!(route.get_plan(), first);
        assert!(!*route.calculating.borrow());
    }

    #[test]
    fn superseded_failure_is_not_reported() {
        let provider = Rc::new(provider());
        let api = Rc::new(FakeApi::new());
        let route = RouteState::new();
        route.set_origin("Hamilton");
        route.set_destination("Toronto");
        let (tx_old, rx_old) = oneshot::channel();
        let (tx_new, rx_new) = oneshot::channel();
        api.pending_route_chargers.borrow_mut().extend([rx_old, rx_new]);

        let results = Rc::new(RefCell::new(Vec::new()));
        let mut pool = LocalPool::new();
        for _ in 0..2 {
            let (route, provider, api, results) = (route.clone(), provider.clone(), api.clone(), results.clone());
            pool.spawner()
                .spawn_local(async move {
                    let result = RouteViewModel::calculate(&route, provider.as_ref(), api.as_ref(), 0.5).await;
                    results.borrow_mut().push(result);
                })
                .unwrap();
        }
        pool.run_until_stalled();

        tx_new.send(vec![station("R1", 43.4, -79.6, &["Available"])]).unwrap();
        pool.run_until_stalled();
        // the older request fails only after the newer one has drawn its plan
        drop(tx_old);
        pool.run_until_stalled();

        assert_eq!(*results.borrow(), vec![Ok(true), Ok(false)]);
        assert_eq!(route.get_plan().map(|p| p.chargers.len()), Some(1));
        assert!(!*route.calculating.borrow());
    }
}
