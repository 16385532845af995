pub mod clip;
pub mod parse;

pub use clip::{clip_lines, clip_polygons, collect_polygons};
pub use parse::{parse_geojson, parse_geojson_all, parse_geometry, parse_wkt};
