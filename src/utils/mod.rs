// Shared helpers: geo math + JS bridge bindings

pub mod geo;
pub mod leaflet_ffi;
pub mod google_maps_ffi;
