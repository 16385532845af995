use crate::error::GlobeError;
use crate::layout::{GlobeLayout, Parity};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which side of the equator a panel is built on.
///
/// The equatorial row counts as north.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hemisphere {
    North,
    South,
}

impl Hemisphere {
    pub fn from_lat(lat: i8) -> Self {
        if lat < 0 { Hemisphere::South } else { Hemisphere::North }
    }

    /// +1.0 for north, -1.0 for south.
    pub fn sign(self) -> f64 {
        match self {
            Hemisphere::North => 1.0,
            Hemisphere::South => -1.0,
        }
    }
}

/// Position of a panel in the lon/lat grid.
///
/// `lon` counts columns eastward from the calibration meridian, `lat` counts rows
/// from the equatorial row (negative is south). Indices only come from
/// [`PanelIndex::new`] or [`PanelIndex::all`], both checked against a layout:
///
/// ```compile_fail
/// let index = globenet_rs::PanelIndex { lon: 16, lat: 0 };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PanelIndex {
    lon: u8,
    lat: i8,
}

impl PanelIndex {
    /// Creates an index, rejecting positions outside the layout's grid.
    pub fn new(lon: u8, lat: i8, layout: &GlobeLayout) -> Result<Self, GlobeError> {
        let max_lat = layout.max_lat_index();
        if lon >= layout.lon_count() || lat < -max_lat || lat > max_lat {
            return Err(GlobeError::InvalidPanelIndex { lon, lat });
        }
        Ok(Self { lon, lat })
    }

    /// Skips the range check; callers inside the crate guarantee it.
    pub(crate) fn unchecked(lon: u8, lat: i8) -> Self {
        Self { lon, lat }
    }

    /// Re-checks this index against `layout`, which may not be the one it came from.
    pub fn validate(self, layout: &GlobeLayout) -> Result<Self, GlobeError> {
        Self::new(self.lon, self.lat, layout)
    }

    pub fn lon(&self) -> u8 {
        self.lon
    }

    pub fn lat(&self) -> i8 {
        self.lat
    }

    /// All panel indices of a layout, ordered by column then row (south to north).
    pub fn all(layout: &GlobeLayout) -> impl Iterator<Item = PanelIndex> + '_ {
        let max_lat = layout.max_lat_index();
        (0..layout.lon_count())
            .flat_map(move |lon| (-max_lat..=max_lat).map(move |lat| PanelIndex::unchecked(lon, lat)))
    }

    pub fn parity(&self) -> Parity {
        Parity::from_lon(self.lon)
    }

    /// Absolute latitude band, used to look up the panel shape.
    pub fn band(&self) -> usize {
        self.lat.unsigned_abs() as usize
    }

    pub fn hemisphere(&self) -> Hemisphere {
        Hemisphere::from_lat(self.lat)
    }
}

impl fmt::Display for PanelIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.lon, self.lat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_index() -> Result<(), GlobeError> {
        let layout = GlobeLayout::default();
        let index = PanelIndex::new(15, -3, &layout)?;
        assert_eq!(index.parity(), Parity::Odd);
        assert_eq!(index.band(), 3);
        assert_eq!(index.hemisphere(), Hemisphere::South);
        assert_eq!(index.to_string(), "15_-3");
        Ok(())
    }

    #[test]
    fn test_out_of_range_index() {
        let layout = GlobeLayout::default();
        assert_eq!(
            PanelIndex::new(16, 0, &layout),
            Err(GlobeError::InvalidPanelIndex { lon: 16, lat: 0 })
        );
        assert!(PanelIndex::new(0, 4, &layout).is_err());
        assert!(PanelIndex::new(0, -4, &layout).is_err());
    }

    #[test]
    fn test_index_from_larger_layout_rejected() -> Result<(), GlobeError> {
        let layout = GlobeLayout::default();
        let small = GlobeLayout::builder()
            .lon_count(8)
            .lat_count(1)
            .coefficients(crate::layout::CoefficientTable::new(vec![
                [crate::layout::ShapeCoefficients::new(1.0, 1.0, 1.0); 2],
                [crate::layout::ShapeCoefficients::new(1.0, 0.0, 1.0); 2],
            ]))
            .build()?;

        let index = PanelIndex::new(15, 3, &layout)?;
        assert_eq!(index.validate(&layout), Ok(index));
        assert_eq!(
            index.validate(&small),
            Err(GlobeError::InvalidPanelIndex { lon: 15, lat: 3 })
        );
        Ok(())
    }

    #[test]
    fn test_index_serializes_as_object() -> Result<(), GlobeError> {
        let index = PanelIndex::new(2, -1, &GlobeLayout::default())?;
        let json = serde_json::to_string(&index)
            .map_err(|e| GlobeError::SerializationError(e.to_string()))?;
        assert_eq!(json, r#"{"lon":2,"lat":-1}"#);
        Ok(())
    }

    #[test]
    fn test_equator_is_north() {
        assert_eq!(Hemisphere::from_lat(0), Hemisphere::North);
        assert_eq!(Hemisphere::from_lat(0).sign(), 1.0);
        assert_eq!(Hemisphere::from_lat(-1).sign(), -1.0);
    }

    #[test]
    fn test_all_indices() {
        let layout = GlobeLayout::default();
        let all: Vec<_> = PanelIndex::all(&layout).collect();
        assert_eq!(all.len(), 112);
        assert_eq!(all[0], PanelIndex::unchecked(0, -3));
        assert_eq!(all[111], PanelIndex::unchecked(15, 3));
    }
}
