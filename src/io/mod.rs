pub mod geojson;
pub mod wkt;

pub use geojson::{frame_to_geojson, grid_to_geojson};
pub use wkt::{lines_to_wkt, outline_to_wkt};
