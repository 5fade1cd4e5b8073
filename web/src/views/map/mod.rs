pub mod leaflet_surface;
pub mod map_marker;
pub mod map_marker_popup;
pub mod map_renderer;
