// Map renderers

pub mod traits;
pub mod leaflet;

pub use traits::*;
pub use leaflet::LeafletMap;
