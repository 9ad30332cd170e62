// ============================================================================
// MAP VIEWMODEL - Station map logic
// ============================================================================
// Data preparation + refresh on bounds change. No DOM here.
// ============================================================================

use crate::config::SearchConfig;
use crate::maps::{MapError, MapMarker, MapRenderer};
use crate::models::{LatLng, Marker, Viewport};
use crate::services::{ApiError, StationQuery, StationsApi};
use crate::state::MarkerStore;
use crate::utils::geo::refresh_radius_km;

pub struct MapViewModel;

impl MapViewModel {
    /// One map point per marker, same order as the list
    pub fn prepare_markers_for_map(markers: &[Marker]) -> Vec<MapMarker> {
        markers.iter().map(MapMarker::from).collect()
    }

    /// Query for a `moveend`: bounded around the view center, or everything
    pub fn station_query(viewport: &Viewport, search: &SearchConfig) -> StationQuery {
        if !search.bounded_refresh {
            return StationQuery::All;
        }
        let radius = refresh_radius_km(viewport.center, &viewport.bounds, search.min_refresh_radius_km);
        StationQuery::Near {
            center: viewport.center,
            // two decimals are plenty for a search radius
            radius_km: (radius * 100.0).ceil() / 100.0,
        }
    }

    /// Fetch and replace the marker collection. `Ok(false)` means a newer refresh
    /// was issued meanwhile and this response was dropped.
    pub async fn refresh<A: StationsApi>(
        store: &MarkerStore,
        api: &A,
        query: StationQuery,
    ) -> Result<bool, ApiError> {
        let token = store.begin_refresh();
        log::info!("🔄 [MAP] Refresh {:?} started", token);

        let stations = api.fetch_stations(query).await.map_err(|e| {
            log::error!("❌ [MAP] Refresh {:?} failed: {}", token, e);
            e
        })?;

        Ok(store.apply_refresh(token, &stations))
    }

    /// Push the whole collection to the renderer
    pub fn sync_markers<R: MapRenderer>(renderer: &mut R, markers: &[Marker]) -> Result<usize, MapError> {
        let map_markers = Self::prepare_markers_for_map(markers);
        renderer.set_markers(&map_markers)?;
        Ok(map_markers.len())
    }

    pub fn recenter<R: MapRenderer>(renderer: &mut R, center: LatLng) -> Result<(), MapError> {
        renderer.set_center(center)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Bounds;
    use crate::test_support::{station, FakeApi, FakeRenderer};
    use crate::viewmodels::MarkerListViewModel;
    use futures::channel::oneshot;
    use futures::executor::{block_on, LocalPool};
    use futures::task::LocalSpawnExt;
    use std::rc::Rc;

    fn viewport() -> Viewport {
        let bounds = Bounds::new(LatLng::new(43.20, -79.95), LatLng::new(43.30, -79.80));
        Viewport { center: bounds.center(), bounds }
    }

    fn marker_ids(store: &MarkerStore) -> Vec<String> {
        store.snapshot().iter().filter_map(|m| m.id.clone()).collect()
    }

    #[test]
    fn bounded_query_covers_viewport() {
        let search = SearchConfig { bounded_refresh: true, min_refresh_radius_km: 1.0, ..SearchConfig::default() };
        match MapViewModel::station_query(&viewport(), &search) {
            StationQuery::Near { center, radius_km } => {
                assert_eq!(center, viewport().center);
                assert!(radius_km > 7.5 && radius_km < 9.0, "radius {}", radius_km);
            }
            other => panic!("unexpected {:?}", other),
        }

        let unbounded = SearchConfig { bounded_refresh: false, ..SearchConfig::default() };
        assert_eq!(MapViewModel::station_query(&viewport(), &unbounded), StationQuery::All);
    }

    #[test]
    fn refresh_replaces_markers_with_latest_response() {
        let store = MarkerStore::new();
        let api = FakeApi::new();

        *api.stations.borrow_mut() = vec![station("A", 43.26, -79.92, &["Available"]), station("B", 43.0, -79.0, &[])];
        assert_eq!(block_on(MapViewModel::refresh(&store, &api, StationQuery::All)), Ok(true));
        assert_eq!(marker_ids(&store), vec!["A", "B"]);

        *api.stations.borrow_mut() = vec![station("C", 43.1, -79.1, &[])];
        assert_eq!(block_on(MapViewModel::refresh(&store, &api, StationQuery::All)), Ok(true));
        assert_eq!(marker_ids(&store), vec!["C"]);
        assert_eq!(api.calls(), vec!["GET /stations?", "GET /stations?"]);
    }

    #[test]
    fn failed_refresh_keeps_previous_markers() {
        let store = MarkerStore::new();
        let api = FakeApi::new();
        *api.stations.borrow_mut() = vec![station("A", 1.0, 1.0, &[])];
        block_on(MapViewModel::refresh(&store, &api, StationQuery::All)).unwrap();

        let (tx, rx) = oneshot::channel();
        api.pending_lists.borrow_mut().push_back(rx);
        drop(tx);
        assert!(block_on(MapViewModel::refresh(&store, &api, StationQuery::All)).is_err());
        assert_eq!(marker_ids(&store), vec!["A"]);
    }

    #[test]
    fn out_of_order_responses_keep_the_newest_request() {
        let store = MarkerStore::new();
        let api = Rc::new(FakeApi::new());
        let (tx_old, rx_old) = oneshot::channel();
        let (tx_new, rx_new) = oneshot::channel();
        api.pending_lists.borrow_mut().extend([rx_old, rx_new]);

        let mut pool = LocalPool::new();
        let spawner = pool.spawner();
        for _ in 0..2 {
            let (store, api) = (store.clone(), api.clone());
            spawner
                .spawn_local(async move {
                    let _ = MapViewModel::refresh(&store, api.as_ref(), StationQuery::All).await;
                })
                .unwrap();
        }
        pool.run_until_stalled();

        // second request answers first, then the first one straggles in
        tx_new.send(vec![station("NEW", 2.0, 2.0, &[])]).unwrap();
        pool.run_until_stalled();
        tx_old.send(vec![station("OLD", 1.0, 1.0, &[])]).unwrap();
        pool.run_until_stalled();

        assert_eq!(marker_ids(&store), vec!["NEW"]);
    }

    #[test]
    fn map_and_list_render_the_same_count() {
        let store = MarkerStore::new();
        let token = store.begin_refresh();
        store.apply_refresh(
            token,
            &[station("A", 1.0, 1.0, &[]), station("B", 2.0, 2.0, &[]), station("C", 3.0, 3.0, &[])],
        );

        let snapshot = store.snapshot();
        let mut renderer = FakeRenderer::ready();
        let drawn = MapViewModel::sync_markers(&mut renderer, &snapshot).unwrap();
        let rows = MarkerListViewModel::rows(&snapshot, None);

        assert_eq!(drawn, rows.len());
        assert_eq!(renderer.markers.len(), 3);
        assert_eq!(renderer.markers[1].coords, [2.0, 2.0]);
    }

    #[test]
    fn renderer_not_ready_is_reported() {
        let mut renderer = FakeRenderer::default();
        assert_eq!(MapViewModel::sync_markers(&mut renderer, &[]), Err(MapError::NotReady));
        assert_eq!(MapViewModel::recenter(&mut renderer, LatLng::new(0.0, 0.0)), Err(MapError::NotReady));
    }
}
