use crate::geom::{clip_lines, clip_polygons};
use crate::layout::GlobeLayout;
use crate::net::placement::placement_offset;
use crate::panel::{Panel, PanelIndex};
use geo::{BooleanOps, MapCoords, Translate};
use geo_types::{Coord, MultiLineString, MultiPolygon, Polygon};

/// A panel placed in the unfolded net, ready for flat printing.
#[derive(Debug, Clone, PartialEq)]
pub struct NetTile {
    pub panel: Panel,
    /// Translation applied after the panel transform
    pub offset: Coord<f64>,
    /// Panel outline in net space
    pub outline: Polygon<f64>,
    /// Stud gridlines in net space, clipped to the outline
    pub grid: MultiLineString<f64>,
}

impl NetTile {
    pub(crate) fn new(layout: &GlobeLayout, index: PanelIndex) -> Self {
        Self::from_panel(layout, Panel::new(layout, index))
    }

    pub(crate) fn from_panel(layout: &GlobeLayout, panel: Panel) -> Self {
        let offset = placement_offset(layout, panel.index);
        let t = panel.transform;

        let outline = t
            .transform_geometry(&panel.outline())
            .translate(offset.x, offset.y);
        let grid_net = t
            .transform_geometry(&panel.grid_multi_line())
            .translate(offset.x, offset.y);
        let grid = outline.clip(&grid_net, false);

        Self {
            panel,
            offset,
            outline,
            grid,
        }
    }

    pub fn index(&self) -> PanelIndex {
        self.panel.index
    }

    /// Carries degree-space geometry into net space: transform, then translate.
    pub fn to_net<G>(&self, geom: &G) -> G::Output
    where
        G: MapCoords<f64, f64>,
        G::Output: Translate<f64>,
    {
        self.panel
            .transform
            .transform_geometry(geom)
            .translate(self.offset.x, self.offset.y)
    }

    /// Clips polygonal map content to this panel and carries it into net space.
    ///
    /// `None` means the panel has no content, which is a normal outcome.
    pub fn project_polygons(&self, content: &MultiPolygon<f64>) -> Option<MultiPolygon<f64>> {
        clip_polygons(content, &self.panel).map(|clipped| self.to_net(&clipped))
    }

    /// Clips line content to this panel and carries it into net space.
    pub fn project_lines(&self, lines: &MultiLineString<f64>) -> Option<MultiLineString<f64>> {
        clip_lines(lines, &self.panel).map(|clipped| self.to_net(&clipped))
    }
}
