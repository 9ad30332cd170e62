// ============================================================================
// STATUS MODAL STATE - Closed / Open state machine for the status report form
// ============================================================================

use crate::models::{Station, StationStatus, SubStation};
use crate::state::reactivity::{GenerationCounter, RefreshToken};

#[derive(Debug, Clone, PartialEq)]
pub struct StatusReport {
    pub station_id: String,
    /// Issued by `open`; reads and writes only land on the report that started them
    pub token: RefreshToken,
    /// Record as read from the backend; `None` until the read completes
    pub original: Option<Station>,
    /// Working copy of `original.stations`, edited in place
    pub edited: Vec<SubStation>,
    pub submitting: bool,
    /// Read failed; nothing to edit, no retry
    pub load_failed: bool,
}

/// Closed while there is no report. Each open starts a new session token,
/// so a cancelled report's responses never reach a reopened one.
#[derive(Debug, Clone, Default)]
pub struct StatusModal {
    report: Option<StatusReport>,
    sessions: GenerationCounter,
}

impl StatusModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.report.is_some()
    }

    pub fn station_id(&self) -> Option<&str> {
        self.report.as_ref().map(|r| r.station_id.as_str())
    }

    pub fn report(&self) -> Option<&StatusReport> {
        self.report.as_ref()
    }

    /// Closed -> Open. Returns the session token when the caller must issue the read.
    /// Re-opening the station that is already open does not read again.
    pub fn open(&mut self, station_id: &str) -> Option<RefreshToken> {
        if self.station_id() == Some(station_id) {
            return None;
        }
        let token = self.sessions.next();
        self.report = Some(StatusReport {
            station_id: station_id.to_string(),
            token,
            original: None,
            edited: Vec::new(),
            submitting: false,
            load_failed: false,
        });
        Some(token)
    }

    fn session(&mut self, token: RefreshToken) -> Option<&mut StatusReport> {
        self.report.as_mut().filter(|r| r.token == token)
    }

    /// Read completed. Ignored if the session that issued it was closed meanwhile.
    pub fn loaded(&mut self, token: RefreshToken, station: Station) -> bool {
        match self.session(token) {
            Some(report) if report.original.is_none() => {
                report.edited = station.stations.clone();
                report.original = Some(station);
                true
            }
            _ => false,
        }
    }

    pub fn read_failed(&mut self, token: RefreshToken) {
        if let Some(report) = self.session(token) {
            if report.original.is_none() {
                report.load_failed = true;
            }
        }
    }

    /// Sub-station rows to render; empty until loaded
    pub fn rows(&self) -> &[SubStation] {
        match &self.report {
            Some(report) => &report.edited,
            None => &[],
        }
    }

    /// Direct replacement of one row's status
    pub fn set_status(&mut self, index: usize, status: StationStatus) -> bool {
        match self.report.as_mut() {
            Some(report) if !report.submitting => match report.edited.get_mut(index) {
                Some(sub) => {
                    sub.status = status;
                    true
                }
                None => false,
            },
            _ => false,
        }
    }

    /// Original record merged with the edited rows, plus the id to write to.
    /// `None` while closed, still loading, or already submitting.
    pub fn submission(&self) -> Option<(String, Station)> {
        let report = self.report()?;
        if report.submitting {
            return None;
        }
        let original = report.original.as_ref()?;
        Some((report.station_id.clone(), original.with_sub_stations(report.edited.clone())))
    }

    /// Lock the rows for the write; the token identifies this session's result
    pub fn begin_submit(&mut self) -> Option<RefreshToken> {
        let report = self.report.as_mut()?;
        report.submitting = true;
        Some(report.token)
    }

    /// Write succeeded: close, if the submitting session is still the open one
    pub fn submit_succeeded(&mut self, token: RefreshToken) -> bool {
        if self.session(token).is_some() {
            self.report = None;
            true
        } else {
            false
        }
    }

    /// Write failed: stay open, edits kept
    pub fn submit_failed(&mut self, token: RefreshToken) {
        if let Some(report) = self.session(token) {
            report.submitting = false;
        }
    }

    /// Explicit cancel; edits are discarded
    pub fn cancel(&mut self) {
        self.report = None;
    }
}
