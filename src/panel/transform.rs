use crate::coord::Coordinate;
use geo::MapCoords;
use geo_types::{Coord, coord};
use serde::{Deserialize, Serialize};

/// Unwarps a panel from degree space into stud-normalised panel space.
///
/// The y axis is normalised to `[0, 1]` across the panel's latitude span and then scaled
/// by the band height. The x axis is centred on the panel's middle meridian and scaled by
/// a factor that varies linearly with the normalised y, so stud columns which converge
/// towards the pole in degree space come out vertical and evenly spaced.
///
/// A panel's corners land at `±base_width / 2` and `±top_width / 2` studs, an
/// axis-aligned rectangle only when `base_width == top_width`.
///
/// Only meaningful for positions inside the originating panel. Outside it the mapping is
/// still defined but is a plain linear extrapolation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StretchTransform {
    /// Longitude of the panel's centre line
    pub x_mid: f64,
    /// x scale at the `y_low` edge
    pub x_scale: f64,
    /// Extra x scale gained across the panel height
    pub x_ratio: f64,
    /// Latitude mapped to y = 0
    pub y_low: f64,
    /// Inverse of the panel's latitude span
    pub y_scale: f64,
    /// Height of the panel in panel units
    pub y_coeff: f64,
}

/// Builds a [`StretchTransform`] from its six parameters.
///
/// # Example
///
/// ```
/// use globenet_rs::make_transform;
///
/// let identity = make_transform(0.0, 1.0, 0.0, 0.0, 1.0, 1.0);
/// let out = identity.apply(&(2.0, 1.0));
/// assert_eq!((out.x, out.y), (2.0, 1.0));
/// ```
pub fn make_transform(
    x_mid: f64,
    x_scale: f64,
    x_ratio: f64,
    y_low: f64,
    y_scale: f64,
    y_coeff: f64,
) -> StretchTransform {
    StretchTransform {
        x_mid,
        x_scale,
        x_ratio,
        y_low,
        y_scale,
        y_coeff,
    }
}

impl StretchTransform {
    /// Maps one position.
    pub fn apply(&self, c: &impl Coordinate) -> Coord<f64> {
        let y_norm = (c.y() - self.y_low) * self.y_scale;
        let x = (c.x() - self.x_mid) * self.x_scale * (1.0 + y_norm * self.x_ratio);
        coord! { x: x, y: y_norm * self.y_coeff }
    }

    pub fn apply_coord(&self, c: Coord<f64>) -> Coord<f64> {
        self.apply(&c)
    }

    /// Maps a sequence of positions one at a time.
    pub fn apply_all<C: Coordinate>(&self, coords: &[C]) -> Vec<Coord<f64>> {
        coords.iter().map(|c| self.apply(c)).collect()
    }

    /// Maps every coordinate of a geometry, e.g. content already clipped to the panel.
    pub fn transform_geometry<G>(&self, geom: &G) -> G::Output
    where
        G: MapCoords<f64, f64>,
    {
        let t = *self;
        geom.map_coords(move |c| t.apply_coord(c))
    }

    /// The mapping as a plain closure.
    pub fn as_fn(&self) -> impl Fn(Coord<f64>) -> Coord<f64> + Copy + Send + Sync {
        let t = *self;
        move |c| t.apply_coord(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::{LineString, Point};

    #[test]
    fn test_identity() {
        let t = make_transform(0.0, 1.0, 0.0, 0.0, 1.0, 1.0);
        assert_eq!(t.apply(&(0.0, 0.0)), coord! { x: 0.0, y: 0.0 });
        assert_eq!(t.apply(&(2.0, 1.0)), coord! { x: 2.0, y: 1.0 });
    }

    #[test]
    fn test_ratio_halves_scale_at_top() {
        let (x_mid, x_scale, y_low, y_scale) = (0.25, 2.0, 10.0, 0.5);
        let t = make_transform(x_mid, x_scale, -0.5, y_low, y_scale, 1.0);

        let out = t.apply(&(1.0, y_low + 1.0 / y_scale));
        assert!((out.x - (1.0 - x_mid) * x_scale * 0.5).abs() < 1e-12);
        assert!((out.y - 1.0).abs() < 1e-12);

        let base = t.apply(&(1.0, y_low));
        assert!((base.x - (1.0 - x_mid) * x_scale).abs() < 1e-12);
        assert_eq!(base.y, 0.0);
    }

    #[test]
    fn test_y_coeff_scales_height_only() {
        let t = make_transform(0.0, 1.0, 0.0, 0.0, 1.0, 2.0 / 3.0);
        let out = t.apply(&Point::new(0.5, 1.0));
        assert_eq!(out.x, 0.5);
        assert!((out.y - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_apply_all_matches_single() {
        let t = make_transform(-177.0, 0.1, -0.25, -11.25, 1.0 / 22.5, 1.0);
        let coords = vec![(-180.0, 0.0), (-170.0, 5.0), (-177.0, 11.25)];

        let batch = t.apply_all(&coords);
        assert_eq!(batch.len(), 3);
        for (c, out) in coords.iter().zip(&batch) {
            assert_eq!(t.apply(c), *out);
        }
    }

    #[test]
    fn test_transform_geometry() {
        let t = make_transform(0.0, 1.0, 0.0, 0.0, 1.0, 1.0);
        let shifted = make_transform(1.0, 1.0, 0.0, 1.0, 1.0, 1.0);
        let line = LineString::from(vec![(1.0, 1.0), (2.0, 3.0)]);

        assert_eq!(t.transform_geometry(&line), line);

        let moved = shifted.transform_geometry(&line);
        assert_eq!(moved.0[0], coord! { x: 0.0, y: 0.0 });
        assert_eq!(moved.0[1], coord! { x: 1.0, y: 2.0 });
    }

    #[test]
    fn test_as_fn() {
        let t = make_transform(0.0, 2.0, 0.0, 0.0, 1.0, 1.0);
        let f = t.as_fn();
        assert_eq!(f(coord! { x: 1.0, y: 0.5 }), coord! { x: 2.0, y: 0.5 });
    }
}
