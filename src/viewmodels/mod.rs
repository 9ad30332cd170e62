pub mod map_viewmodel;
pub mod marker_list_viewmodel;
pub mod status_viewmodel;
pub mod route_viewmodel;

pub use map_viewmodel::MapViewModel;
pub use marker_list_viewmodel::{MarkerListViewModel, MarkerRow};
pub use status_viewmodel::StatusViewModel;
pub use route_viewmodel::{GoogleRouteProvider, RouteViewModel};
