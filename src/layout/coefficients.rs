use serde::{Deserialize, Serialize};

/// Alternating column shape within a latitude ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    pub fn from_lon(lon: u8) -> Self {
        if lon % 2 == 0 { Parity::Even } else { Parity::Odd }
    }

    /// The shape used by the neighbouring columns.
    pub fn other(self) -> Self {
        match self {
            Parity::Even => Parity::Odd,
            Parity::Odd => Parity::Even,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Parity::Even => 0,
            Parity::Odd => 1,
        }
    }
}

/// Shape of one quadrant, in multiples of a standard panel (6 studs).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeCoefficients {
    /// Width of the equator-facing edge
    pub base_width: f64,
    /// Width of the pole-facing edge
    pub top_width: f64,
    /// Height relative to a standard band
    pub height_factor: f64,
}

impl ShapeCoefficients {
    pub const fn new(base_width: f64, top_width: f64, height_factor: f64) -> Self {
        Self {
            base_width,
            top_width,
            height_factor,
        }
    }

    fn is_valid(&self) -> bool {
        [self.base_width, self.top_width, self.height_factor]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }
}

/// Panel shapes indexed by absolute latitude band, then parity.
///
/// Only the absolute band matters since southern panels mirror northern ones. The last
/// row is the polar cap, which only contributes its height.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoefficientTable(Vec<[ShapeCoefficients; 2]>);

impl CoefficientTable {
    pub fn new(rows: Vec<[ShapeCoefficients; 2]>) -> Self {
        Self(rows)
    }

    /// Shape coefficients for a band and parity.
    ///
    /// Panics if `band` is past the terminal row; callers derive it from a validated
    /// panel index.
    pub fn lookup(&self, band: usize, parity: Parity) -> ShapeCoefficients {
        self.0[band][parity.index()]
    }

    /// Number of bands including the polar cap.
    pub fn bands(&self) -> usize {
        self.0.len()
    }

    /// Checks the table against the number of panel bands it must describe.
    pub(crate) fn check(&self, lat_count: usize) -> Result<(), String> {
        if self.0.len() != lat_count + 1 {
            return Err(format!(
                "expected {} coefficient rows (including the polar cap), found {}",
                lat_count + 1,
                self.0.len()
            ));
        }

        for (band, row) in self.0.iter().enumerate() {
            if !row.iter().all(ShapeCoefficients::is_valid) {
                return Err(format!("band {} has a negative or non-finite coefficient", band));
            }
            // Band boundaries must not depend on longitude.
            if row[0].height_factor != row[1].height_factor {
                return Err(format!(
                    "band {} height factor differs between parities ({} vs {})",
                    band, row[0].height_factor, row[1].height_factor
                ));
            }
            if band < lat_count {
                if row[0].height_factor <= 0.0 {
                    return Err(format!("band {} has zero height factor", band));
                }
                if row[0].base_width + row[1].base_width <= 0.0 {
                    return Err(format!("band {} has zero combined base width", band));
                }
                if row[0].top_width + row[1].top_width <= 0.0 {
                    return Err(format!("band {} has zero combined top width", band));
                }
            }
        }

        Ok(())
    }
}

impl Default for CoefficientTable {
    /// The 16 x 7 panel globe.
    fn default() -> Self {
        let c = ShapeCoefficients::new;
        Self(vec![
            [c(1.0, 1.0, 1.0), c(1.0, 1.0, 1.0)],
            [c(1.0, 1.0, 1.0), c(1.0, 2.0 / 3.0, 1.0)],
            [c(1.0, 1.0 / 3.0, 1.0), c(2.0 / 3.0, 2.0 / 3.0, 1.0)],
            [c(1.0 / 3.0, 1.0 / 3.0, 2.0 / 3.0), c(2.0 / 3.0, 1.0 / 3.0, 2.0 / 3.0)],
            [c(1.0 / 3.0, 0.0, 5.0 / 6.0), c(1.0 / 3.0, 0.0, 5.0 / 6.0)],
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parity_from_lon() {
        assert_eq!(Parity::from_lon(0), Parity::Even);
        assert_eq!(Parity::from_lon(7), Parity::Odd);
        assert_eq!(Parity::Even.other(), Parity::Odd);
        assert_eq!(Parity::Odd.other().index(), 0);
    }

    #[test]
    fn test_default_lookup() {
        let table = CoefficientTable::default();
        assert_eq!(table.bands(), 5);

        let c = table.lookup(2, Parity::Even);
        assert_eq!(c.base_width, 1.0);
        assert!((c.top_width - 1.0 / 3.0).abs() < 1e-12);

        let cap = table.lookup(4, Parity::Odd);
        assert_eq!(cap.top_width, 0.0);
        assert!((cap.height_factor - 5.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_default_table_is_valid() {
        assert!(CoefficientTable::default().check(4).is_ok());
    }

    #[test]
    fn test_check_rejects_row_count() {
        assert!(CoefficientTable::default().check(3).is_err());
    }

    #[test]
    fn test_check_rejects_parity_height_mismatch() {
        let c = ShapeCoefficients::new;
        let table = CoefficientTable::new(vec![
            [c(1.0, 1.0, 1.0), c(1.0, 1.0, 0.5)],
            [c(1.0, 0.0, 1.0), c(1.0, 0.0, 1.0)],
        ]);
        let err = table.check(1);
        assert!(err.is_err());
        assert!(err.unwrap_err().contains("height factor"));
    }

    #[test]
    fn test_check_rejects_zero_top_width() {
        let c = ShapeCoefficients::new;
        let table = CoefficientTable::new(vec![
            [c(1.0, 0.0, 1.0), c(1.0, 0.0, 1.0)],
            [c(1.0, 0.0, 1.0), c(1.0, 0.0, 1.0)],
        ]);
        assert!(table.check(1).is_err());
    }

    #[test]
    fn test_check_rejects_zero_height() {
        let c = ShapeCoefficients::new;
        let table = CoefficientTable::new(vec![
            [c(1.0, 1.0, 1.0), c(1.0, 1.0, 1.0)],
            [c(1.0, 1.0, 0.0), c(1.0, 1.0, 0.0)],
            [c(1.0, 0.0, 1.0), c(1.0, 0.0, 1.0)],
        ]);
        let err = table.check(2);
        assert!(matches!(err, Err(ref msg) if msg.contains("band 1 has zero height")));
    }

    #[test]
    fn test_check_allows_zero_height_polar_cap() {
        let c = ShapeCoefficients::new;
        let table = CoefficientTable::new(vec![
            [c(1.0, 1.0, 1.0), c(1.0, 1.0, 1.0)],
            [c(0.0, 0.0, 0.0), c(0.0, 0.0, 0.0)],
        ]);
        assert!(table.check(1).is_ok());
    }

    #[test]
    fn test_check_rejects_non_finite() {
        let c = ShapeCoefficients::new;
        for bad in [f64::NAN, f64::INFINITY] {
            let table = CoefficientTable::new(vec![
                [c(1.0, bad, 1.0), c(1.0, bad, 1.0)],
                [c(1.0, 0.0, 1.0), c(1.0, 0.0, 1.0)],
            ]);
            let err = table.check(1);
            assert!(matches!(err, Err(ref msg) if msg.contains("non-finite")));
        }
    }

    #[test]
    fn test_check_rejects_zero_base_width() {
        let c = ShapeCoefficients::new;
        let table = CoefficientTable::new(vec![
            [c(0.0, 1.0, 1.0), c(0.0, 1.0, 1.0)],
            [c(1.0, 0.0, 1.0), c(1.0, 0.0, 1.0)],
        ]);
        let err = table.check(1);
        assert!(matches!(err, Err(ref msg) if msg.contains("base width")));
    }

    #[test]
    fn test_check_rejects_negative() {
        let c = ShapeCoefficients::new;
        let table = CoefficientTable::new(vec![
            [c(-1.0, 1.0, 1.0), c(1.0, 1.0, 1.0)],
            [c(1.0, 0.0, 1.0), c(1.0, 0.0, 1.0)],
        ]);
        assert!(table.check(1).is_err());
    }
}
