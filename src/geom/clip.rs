use crate::panel::Panel;
use geo::{BooleanOps, BoundingRect, Translate};
use geo_types::{Geometry, MultiLineString, MultiPolygon, Polygon, Rect, coord};

/// Gathers the polygonal parts of map-source geometries into one multipolygon.
///
/// Points, lines and other non-areal geometries are skipped; collections are flattened.
pub fn collect_polygons<I>(geoms: I) -> MultiPolygon<f64>
where
    I: IntoIterator<Item = Geometry<f64>>,
{
    let mut polygons = Vec::new();
    for geom in geoms {
        match geom {
            Geometry::Polygon(p) => polygons.push(p),
            Geometry::MultiPolygon(mp) => polygons.extend(mp.0),
            Geometry::Rect(r) => polygons.push(r.to_polygon()),
            Geometry::Triangle(t) => polygons.push(t.to_polygon()),
            Geometry::GeometryCollection(gc) => polygons.extend(collect_polygons(gc.0).0),
            _ => {}
        }
    }
    MultiPolygon::new(polygons)
}

/// Parts of a panel outline lying past the antimeridian, each with the longitude shift
/// that carries map content onto it.
fn antimeridian_overhangs(outline: &Polygon<f64>) -> Vec<(MultiPolygon<f64>, f64)> {
    let Some(rect) = outline.bounding_rect() else {
        return Vec::new();
    };

    let mut overhangs = Vec::new();
    if rect.min().x < -180.0 {
        let west = Rect::new(rect.min(), coord! { x: -180.0, y: rect.max().y });
        overhangs.push((outline.intersection(&west.to_polygon()), -360.0));
    }
    if rect.max().x > 180.0 {
        let east = Rect::new(coord! { x: 180.0, y: rect.min().y }, rect.max());
        overhangs.push((outline.intersection(&east.to_polygon()), 360.0));
    }
    overhangs
}

/// Clips polygonal map content to a panel's outline.
///
/// Content within [-180, 180] also fills the parts of the outline that hang past the
/// antimeridian. Returns `None` when nothing of the content falls inside the panel,
/// e.g. a polar panel over open ocean.
pub fn clip_polygons(content: &MultiPolygon<f64>, panel: &Panel) -> Option<MultiPolygon<f64>> {
    let outline = panel.outline();
    let mut clipped = outline.intersection(content);

    for (overhang, shift) in antimeridian_overhangs(&outline) {
        let wrapped = overhang.intersection(&content.translate(shift, 0.0));
        if !wrapped.0.is_empty() {
            // Union so sources that already extend past ±180 are not counted twice.
            clipped = clipped.union(&wrapped);
        }
    }

    if clipped.0.is_empty() {
        None
    } else {
        Some(clipped)
    }
}

/// Clips line content (rivers, graticules, panel gridlines) to a panel's outline.
///
/// Wraps across the antimeridian like [`clip_polygons`].
pub fn clip_lines(lines: &MultiLineString<f64>, panel: &Panel) -> Option<MultiLineString<f64>> {
    let outline = panel.outline();
    let mut clipped = outline.clip(lines, false);

    for (overhang, shift) in antimeridian_overhangs(&outline) {
        clipped
            .0
            .extend(overhang.clip(&lines.translate(shift, 0.0), false).0);
    }

    let kept: Vec<_> = clipped.0.into_iter().filter(|l| l.0.len() > 1).collect();
    if kept.is_empty() {
        None
    } else {
        Some(MultiLineString::new(kept))
    }
}
