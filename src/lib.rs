//! # globenet-rs
//!
//! Splits a longitude/latitude map into the 16 x 7 trapezoidal panels of a faceted
//! globe model and unwarps each panel onto a square stud grid, so panel artwork can be
//! printed flat.
//!
//! There are three main entry points.
//!
//! ### 1. `build_panel` - Single Panel Geometry
//!
//! ```
//! use globenet_rs::{GlobeLayout, build_panel};
//!
//! # fn main() -> Result<(), globenet_rs::GlobeError> {
//! let layout = GlobeLayout::default();
//! let panel = build_panel(&layout, 4, -2)?;
//!
//! // Stud-normalised position of a point inside the panel.
//! let out = panel.transform.apply(&(panel.lon_mid, -40.0));
//! assert!(out.x.abs() < 1e-12);
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `GlobeNet` - The Unfolded Net
//!
//! ```
//! use globenet_rs::{GlobeLayout, GlobeNet};
//! use geo_types::{MultiPolygon, polygon};
//!
//! let net = GlobeNet::build(&GlobeLayout::default());
//!
//! let island = MultiPolygon::new(vec![polygon![
//!     (x: -180.0, y: -5.0),
//!     (x: -170.0, y: -5.0),
//!     (x: -170.0, y: 5.0),
//!     (x: -180.0, y: -5.0),
//! ]]);
//! for (index, content) in net.project_polygons(&island) {
//!     println!("{}: {} polygons", index, content.0.len());
//! }
//! ```
//!
//! ### 3. File Output for Renderers
//!
//! ```no_run
//! use globenet_rs::{GlobeLayout, GlobeNet, collect_polygons, read_geojson_file, write_net_geojson};
//!
//! # fn main() -> Result<(), globenet_rs::GlobeError> {
//! let net = GlobeNet::build(&GlobeLayout::default());
//! let world = collect_polygons(read_geojson_file("world.geojson")?);
//! let content = net.project_polygons(&world);
//! write_net_geojson(&net, &content, "net.geojson")?;
//! # Ok(())
//! # }
//! ```
//!

pub mod coord;
pub mod error;
pub mod geom;
pub mod io;
pub mod layout;
pub mod net;
pub mod panel;

pub use coord::Coordinate;
pub use error::GlobeError;
pub use geom::{
    clip_lines, clip_polygons, collect_polygons, parse_geojson, parse_geojson_all,
    parse_geometry, parse_wkt,
};
pub use io::{
    NetLayer, net_to_feature_collection, read_geojson_file, write_net_geojson, write_panel_table,
};
pub use layout::{
    BASE_STEP_DEG, BASE_STEP_STUD, CoefficientTable, GlobeLayout, GlobeLayoutBuilder, LAT_COUNT,
    LON_COUNT, LON_OFFSET, PIXELS_PER_STUD, Parity, ShapeCoefficients,
};
pub use net::{GlobeNet, NetTile, PanelCache, net_offset};
pub use panel::{Hemisphere, Panel, PanelIndex, StretchTransform, build_panel, make_transform};

pub use geo_types;
