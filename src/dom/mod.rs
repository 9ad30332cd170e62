// ============================================================================
// DOM MODULE - Thin helpers over web_sys
// ============================================================================

pub mod element;
pub mod builder;
pub mod events;
pub mod incremental;

pub use element::*;
pub use builder::*;
pub use events::*;
