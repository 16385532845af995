use crate::error::GlobeError;
use crate::layout::constants::STUD_EPSILON;
use crate::layout::{GlobeLayout, Parity, ShapeCoefficients};
use crate::panel::index::{Hemisphere, PanelIndex};
use crate::panel::transform::{StretchTransform, make_transform};
use geo::ConvexHull;
use geo_types::{Coord, Line, LineString, MultiLineString, Polygon, coord};
use log::debug;

/// One trapezoidal tile of the globe, in degree space.
///
/// The panel's "low" edge faces the equator and its "high" edge faces the pole, so for
/// southern panels the low edge is the northern one. `lat_min` and `lat_max` are given in
/// that band frame (as if the panel were northern); [`Panel::lat_range`] gives the signed
/// latitudes.
///
/// # Example
///
/// ```
/// use globenet_rs::{GlobeLayout, build_panel};
///
/// # fn main() -> Result<(), globenet_rs::GlobeError> {
/// let layout = GlobeLayout::default();
/// let panel = build_panel(&layout, 0, 0)?;
/// assert_eq!(panel.lon_mid, -177.0);
/// assert_eq!(panel.boundary.0.len(), 5);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub index: PanelIndex,
    pub hemisphere: Hemisphere,
    pub shape: ShapeCoefficients,
    /// Equator-facing latitude magnitude
    pub lat_min: f64,
    /// Pole-facing latitude magnitude
    pub lat_max: f64,
    pub lon_mid: f64,
    pub lower_left: Coord<f64>,
    pub lower_right: Coord<f64>,
    pub upper_right: Coord<f64>,
    pub upper_left: Coord<f64>,
    /// Closed ring `[ll, lr, ur, ul, ll]`. Not necessarily convex, see [`Panel::outline`].
    pub boundary: LineString<f64>,
    /// Stud columns (converging towards the pole) followed by stud rows (unclipped).
    pub grid_lines: Vec<Line<f64>>,
    pub transform: StretchTransform,
    /// Degrees per stud along the low edge
    pub low_stud_to_deg: f64,
    /// Degrees per stud along the high edge
    pub high_stud_to_deg: f64,
}

/// Builds the panel at `(lon, lat)`.
pub fn build_panel(layout: &GlobeLayout, lon: u8, lat: i8) -> Result<Panel, GlobeError> {
    let index = PanelIndex::new(lon, lat, layout)?;
    Ok(Panel::new(layout, index))
}

impl Panel {
    /// Builds a panel from an index already validated against `layout`.
    pub(crate) fn new(layout: &GlobeLayout, index: PanelIndex) -> Self {
        let parity = index.parity();
        let band = index.band();
        let hemisphere = index.hemisphere();
        let sign = hemisphere.sign();

        let table = layout.coefficients();
        let shape = table.lookup(band, parity);
        let neighbour = table.lookup(band, parity.other());

        let stud = layout.base_step_stud() as f64;
        let step_deg = layout.base_step_deg();
        let lon_count = layout.lon_count() as f64;

        // Each ring's circumference in studs is the sum of both column shapes, repeated
        // lon_count / 2 times. Using the combined width makes neighbours meet exactly.
        let ring_low_stud = stud * (shape.base_width + neighbour.base_width) * lon_count / 2.0;
        let ring_high_stud = stud * (shape.top_width + neighbour.top_width) * lon_count / 2.0;
        let low_stud_to_deg = 360.0 / ring_low_stud;
        let high_stud_to_deg = 360.0 / ring_high_stud;

        let low_width_deg = low_stud_to_deg * shape.base_width * stud;
        let high_width_deg = high_stud_to_deg * shape.top_width * stud;

        let lat_min = layout.band_lat_min(band, parity);
        let lat_max = lat_min + step_deg * shape.height_factor;
        let lon_mid = index.lon() as f64 * step_deg + layout.lon_offset();

        let lower_left = coord! { x: lon_mid - low_width_deg / 2.0, y: lat_min * sign };
        let lower_right = coord! { x: lon_mid + low_width_deg / 2.0, y: lat_min * sign };
        let upper_right = coord! { x: lon_mid + high_width_deg / 2.0, y: lat_max * sign };
        let upper_left = coord! { x: lon_mid - high_width_deg / 2.0, y: lat_max * sign };

        let boundary = LineString::from(vec![
            lower_left,
            lower_right,
            upper_right,
            upper_left,
            lower_left,
        ]);

        let grid_lines = PanelEdges {
            lon_mid,
            lat_min,
            lat_max,
            sign,
            low_stud_to_deg,
            high_stud_to_deg,
        }
        .grid_lines(layout, &shape);

        // Southern panels put y = 0 on their southern (pole-facing) edge, so the roles of
        // the two edges swap.
        let transform = match hemisphere {
            Hemisphere::North => make_transform(
                lon_mid,
                1.0 / (stud * low_stud_to_deg),
                low_stud_to_deg / high_stud_to_deg - 1.0,
                lat_min,
                1.0 / (lat_max - lat_min),
                shape.height_factor,
            ),
            Hemisphere::South => make_transform(
                lon_mid,
                1.0 / (stud * high_stud_to_deg),
                high_stud_to_deg / low_stud_to_deg - 1.0,
                sign * lat_max,
                1.0 / (lat_max - lat_min),
                shape.height_factor,
            ),
        };

        debug!(
            "built panel {} ({:?}, {:?}): lat {:.4}..{:.4}, lon_mid {:.4}",
            index, hemisphere, parity, lat_min, lat_max, lon_mid
        );

        Self {
            index,
            hemisphere,
            shape,
            lat_min,
            lat_max,
            lon_mid,
            lower_left,
            lower_right,
            upper_right,
            upper_left,
            boundary,
            grid_lines,
            transform,
            low_stud_to_deg,
            high_stud_to_deg,
        }
    }

    pub fn parity(&self) -> Parity {
        self.index.parity()
    }

    /// Signed latitude span, ascending.
    pub fn lat_range(&self) -> (f64, f64) {
        match self.hemisphere {
            Hemisphere::North => (self.lat_min, self.lat_max),
            Hemisphere::South => (-self.lat_max, -self.lat_min),
        }
    }

    /// Convex hull of the boundary, for clipping map content.
    ///
    /// Triangular panels may have a degenerate ring, so callers should clip against this
    /// rather than the raw boundary.
    pub fn outline(&self) -> Polygon<f64> {
        self.boundary.convex_hull()
    }

    pub fn grid_multi_line(&self) -> MultiLineString<f64> {
        MultiLineString::new(
            self.grid_lines
                .iter()
                .map(|l| LineString::from(vec![l.start, l.end]))
                .collect(),
        )
    }

    /// Physical width of the equator-facing edge, in studs.
    pub fn stud_width_low(&self, layout: &GlobeLayout) -> f64 {
        self.shape.base_width * layout.base_step_stud() as f64
    }

    /// Physical width of the pole-facing edge, in studs.
    pub fn stud_width_high(&self, layout: &GlobeLayout) -> f64 {
        self.shape.top_width * layout.base_step_stud() as f64
    }
}

/// Degree-space edges of a panel: absolute latitudes plus the hemisphere sign, and the
/// width of one stud along each edge.
struct PanelEdges {
    lon_mid: f64,
    lat_min: f64,
    lat_max: f64,
    sign: f64,
    low_stud_to_deg: f64,
    high_stud_to_deg: f64,
}

impl PanelEdges {
    /// Stud columns converging from edge to edge, then one full-width line per stud row.
    fn grid_lines(&self, layout: &GlobeLayout, shape: &ShapeCoefficients) -> Vec<Line<f64>> {
        let stud = layout.base_step_stud() as f64;
        let step_deg = layout.base_step_deg();

        let half_columns = (stud * shape.top_width / 2.0 + STUD_EPSILON).floor() as i64;
        let rows = (stud * shape.height_factor).round() as i64;
        let row_deg = step_deg / stud;

        let columns = (-half_columns..=half_columns).map(|i| {
            Line::new(
                coord! { x: self.lon_mid + i as f64 * self.low_stud_to_deg, y: self.lat_min * self.sign },
                coord! { x: self.lon_mid + i as f64 * self.high_stud_to_deg, y: self.lat_max * self.sign },
            )
        });

        let rows = (0..=rows).map(|j| {
            let lat = (self.lat_min + j as f64 * row_deg) * self.sign;
            Line::new(
                coord! { x: self.lon_mid - step_deg, y: lat },
                coord! { x: self.lon_mid + step_deg, y: lat },
            )
        });

        columns.chain(rows).collect()
    }
}
