use crate::error::GlobeError;
use crate::geom::parse_geojson_all;
use crate::net::{GlobeNet, NetTile};
use crate::panel::PanelIndex;
use geo_types::{Geometry, MultiPolygon};
use geojson::{Feature, FeatureCollection};
use log::info;
use std::path::Path;

/// Kind of feature written for each panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetLayer {
    Outline,
    Grid,
    Content,
}

impl NetLayer {
    pub fn name(self) -> &'static str {
        match self {
            NetLayer::Outline => "outline",
            NetLayer::Grid => "grid",
            NetLayer::Content => "content",
        }
    }
}

/// Reads map-source geometries from a GeoJSON file.
///
/// Accepts a bare geometry, a feature or a feature collection. Features without a
/// geometry are skipped.
pub fn read_geojson_file(path: impl AsRef<Path>) -> Result<Vec<Geometry<f64>>, GlobeError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    let geoms = parse_geojson_all(&contents)?;
    info!("read {} geometries from {}", geoms.len(), path.display());
    Ok(geoms)
}

fn feature(geometry: geojson::Geometry, tile: &NetTile, layer: NetLayer) -> Feature {
    let index = tile.index();
    let mut feature = Feature::from(geometry);
    feature.set_property("lon", index.lon());
    feature.set_property("lat", index.lat());
    feature.set_property("parity", index.parity().index());
    feature.set_property("layer", layer.name());
    feature
}

/// Builds a feature collection of the net: one outline and one grid feature per panel,
/// plus a content feature for every panel that has projected content.
pub fn net_to_feature_collection(
    net: &GlobeNet,
    content: &[(PanelIndex, MultiPolygon<f64>)],
) -> FeatureCollection {
    let mut features = Vec::with_capacity(net.len() * 2 + content.len());

    for tile in net.iter() {
        features.push(feature(
            geojson::Geometry::from(&tile.outline),
            tile,
            NetLayer::Outline,
        ));
        if !tile.grid.0.is_empty() {
            features.push(feature(
                geojson::Geometry::from(&tile.grid),
                tile,
                NetLayer::Grid,
            ));
        }
    }

    for (index, geom) in content {
        if let Some(tile) = net.tile(*index) {
            features.push(feature(
                geojson::Geometry::from(geom),
                tile,
                NetLayer::Content,
            ));
        }
    }

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

/// Writes the net (and optional projected content) as a GeoJSON feature collection for
/// a renderer to rasterise.
pub fn write_net_geojson(
    net: &GlobeNet,
    content: &[(PanelIndex, MultiPolygon<f64>)],
    path: impl AsRef<Path>,
) -> Result<(), GlobeError> {
    let path = path.as_ref();
    let collection = net_to_feature_collection(net, content);
    let count = collection.features.len();

    std::fs::write(path, collection.to_string())?;
    info!("wrote {} net features to {}", count, path.display());
    Ok(())
}
