pub mod app;
pub mod marker_list;
pub mod map_view;
pub mod status_modal;
pub mod route_view;
pub mod loyalty;

pub use app::render_app;
pub use marker_list::{render_marker_list, render_marker_rows};
pub use map_view::{mount_map_view, render_map_view};
pub use status_modal::render_status_modal;
pub use route_view::{mount_route_view, render_calculate_button, render_route_view};
pub use loyalty::render_loyalty;
