// ============================================================================
// STATE MODULE - Rc<RefCell> state + notifications
// ============================================================================

pub mod reactivity;
pub mod marker_store;
pub mod status_modal;
pub mod route_state;
pub mod app_state;

pub use reactivity::*;
pub use marker_store::*;
pub use status_modal::*;
pub use route_state::*;
pub use app_state::*;
