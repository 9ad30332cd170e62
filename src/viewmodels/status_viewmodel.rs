// ============================================================================
// STATUS VIEWMODEL - Read / edit / submit of one station's chargers
// ============================================================================
// Borrows of the modal state are never held across an await
// ============================================================================

use std::cell::RefCell;

use crate::models::StationStatus;
use crate::services::{ApiError, StationsApi};
use crate::state::StatusModal;

pub struct StatusViewModel;

impl StatusViewModel {
    /// Open for `station_id` and read its record. `Ok(true)` once rows are loaded,
    /// `Ok(false)` when no read was needed or the modal moved on meanwhile.
    pub async fn open<A: StationsApi>(
        modal: &RefCell<StatusModal>,
        api: &A,
        station_id: &str,
    ) -> Result<bool, ApiError> {
        let token = match modal.borrow_mut().open(station_id) {
            Some(token) => token,
            None => return Ok(false),
        };
        log::info!("📝 [STATUS] Opening report for station {}", station_id);

        match api.fetch_station(station_id).await {
            Ok(station) => Ok(modal.borrow_mut().loaded(token, station)),
            Err(e) => {
                log::error!("❌ [STATUS] Could not load station {}: {}", station_id, e);
                modal.borrow_mut().read_failed(token);
                Err(e)
            }
        }
    }

    pub fn set_status(modal: &RefCell<StatusModal>, index: usize, status: StationStatus) -> bool {
        let changed = modal.borrow_mut().set_status(index, status);
        if changed {
            log::info!("✏️ [STATUS] Row {} -> {}", index, status);
        }
        changed
    }

    /// PUT the merged record. Success closes; failure keeps the edits.
    /// A report cancelled while its write was in flight is left alone.
    pub async fn submit<A: StationsApi>(modal: &RefCell<StatusModal>, api: &A) -> Result<bool, ApiError> {
        let submission = modal.borrow().submission();
        let (station_id, record) = match submission {
            Some(s) => s,
            None => return Ok(false),
        };
        let token = match modal.borrow_mut().begin_submit() {
            Some(token) => token,
            None => return Ok(false),
        };
        log::info!("📤 [STATUS] Submitting {} chargers for station {}", record.stations.len(), station_id);

        match api.update_station(&station_id, &record).await {
            Ok(()) => {
                if modal.borrow_mut().submit_succeeded(token) {
                    log::info!("✅ [STATUS] Station {} updated", station_id);
                } else {
                    log::info!("⏭️ [STATUS] Station {} updated after its report was closed", station_id);
                }
                Ok(true)
            }
            Err(e) => {
                modal.borrow_mut().submit_failed(token);
                log::error!("❌ [STATUS] Update of station {} failed: {}", station_id, e);
                Err(e)
            }
        }
    }

    pub fn cancel(modal: &RefCell<StatusModal>) {
        log::info!("🚪 [STATUS] Report cancelled");
        modal.borrow_mut().cancel();
    }
}
