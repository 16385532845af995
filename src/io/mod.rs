pub mod csv;
pub mod geojson;

pub use self::csv::write_panel_table;
pub use self::geojson::{
    NetLayer, net_to_feature_collection, read_geojson_file, write_net_geojson,
};
