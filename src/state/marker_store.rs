// ============================================================================
// MARKER STORE - Canonical marker collection shared by the list and the map
// ============================================================================

use std::rc::Rc;

use crate::models::{Marker, Station};
use crate::state::reactivity::{GenerationCounter, ReactiveState, RefreshToken};

/// One snapshot (`Rc<[Marker]>`) handed to every view; replaced, never edited
#[derive(Clone)]
pub struct MarkerStore {
    markers: ReactiveState<Rc<[Marker]>>,
    generations: GenerationCounter,
}

impl MarkerStore {
    pub fn new() -> Self {
        Self {
            markers: ReactiveState::new(Rc::from(Vec::new())),
            generations: GenerationCounter::new(),
        }
    }

    pub fn snapshot(&self) -> Rc<[Marker]> {
        self.markers.get()
    }

    /// Take a token before issuing the request
    pub fn begin_refresh(&self) -> RefreshToken {
        self.generations.next()
    }

    /// Single update entry point. Replaces the whole collection with `stations`
    /// if `token` is still the newest; stale responses are dropped.
    pub fn apply_refresh(&self, token: RefreshToken, stations: &[Station]) -> bool {
        if !self.generations.is_current(token) {
            log::info!("⏭️ [MARKERS] Dropping stale response {:?}", token);
            return false;
        }
        let markers: Vec<Marker> = stations.iter().map(Marker::from).collect();
        log::info!("📍 [MARKERS] Replacing collection with {} markers", markers.len());
        self.markers.set(Rc::from(markers));
        true
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.markers.subscribe(callback);
    }
}

impl Default for MarkerStore {
    fn default() -> Self {
        Self::new()
    }
}
