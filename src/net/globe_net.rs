use crate::layout::GlobeLayout;
use crate::net::tile::NetTile;
use crate::panel::PanelIndex;
use geo::BoundingRect;
use geo_types::{MultiLineString, MultiPolygon, Polygon, Rect};
use log::{debug, info};
use rayon::prelude::*;

/// The unfolded net of every panel on the globe.
///
/// Panels are independent of each other, so they are built in parallel.
///
/// # Example
///
/// ```
/// use globenet_rs::{GlobeLayout, GlobeNet, PanelIndex};
///
/// # fn main() -> Result<(), globenet_rs::GlobeError> {
/// let layout = GlobeLayout::default();
/// let net = GlobeNet::build(&layout);
/// assert_eq!(net.len(), 112);
///
/// let index = PanelIndex::new(0, -3, &layout)?;
/// let tile = net.tile(index);
/// assert!(tile.is_some());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct GlobeNet {
    layout: GlobeLayout,
    tiles: Vec<NetTile>,
}

impl GlobeNet {
    pub fn build(layout: &GlobeLayout) -> Self {
        let indices: Vec<PanelIndex> = PanelIndex::all(layout).collect();
        let tiles: Vec<NetTile> = indices
            .par_iter()
            .map(|index| NetTile::new(layout, *index))
            .collect();

        info!(
            "built net of {} panels ({} columns x {} rows)",
            tiles.len(),
            layout.lon_count(),
            2 * layout.lat_count() - 1
        );

        Self {
            layout: layout.clone(),
            tiles,
        }
    }

    pub fn layout(&self) -> &GlobeLayout {
        &self.layout
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tiles(&self) -> &[NetTile] {
        &self.tiles
    }

    pub fn iter(&self) -> impl Iterator<Item = &NetTile> {
        self.tiles.iter()
    }

    pub fn tile(&self, index: PanelIndex) -> Option<&NetTile> {
        self.tiles
            .binary_search_by(|tile| tile.index().cmp(&index))
            .ok()
            .map(|i| &self.tiles[i])
    }

    pub fn outlines(&self) -> Vec<Polygon<f64>> {
        self.tiles.iter().map(|tile| tile.outline.clone()).collect()
    }

    /// Extent of the whole net in panel units.
    pub fn bounds(&self) -> Option<Rect<f64>> {
        MultiPolygon::new(self.outlines()).bounding_rect()
    }

    /// Raster size in pixels needed to print the net at the layout's stud resolution.
    pub fn pixel_extent(&self) -> Option<(u32, u32)> {
        let scale = self.layout.pixels_per_stud() * self.layout.base_step_stud() as f64;
        self.bounds().map(|rect| {
            (
                (rect.width() * scale).ceil() as u32,
                (rect.height() * scale).ceil() as u32,
            )
        })
    }

    /// Projects polygonal map content onto every panel.
    ///
    /// Only panels that actually contain content appear in the result.
    pub fn project_polygons(&self, content: &MultiPolygon<f64>) -> Vec<(PanelIndex, MultiPolygon<f64>)> {
        let projected: Vec<_> = self
            .tiles
            .par_iter()
            .filter_map(|tile| tile.project_polygons(content).map(|p| (tile.index(), p)))
            .collect();

        debug!(
            "map content touches {} of {} panels",
            projected.len(),
            self.tiles.len()
        );
        projected
    }

    /// Projects line map content onto every panel.
    pub fn project_lines(&self, lines: &MultiLineString<f64>) -> Vec<(PanelIndex, MultiLineString<f64>)> {
        self.tiles
            .par_iter()
            .filter_map(|tile| tile.project_lines(lines).map(|l| (tile.index(), l)))
            .collect()
    }
}
