use crate::layout::coefficients::Parity;
use crate::layout::config::GlobeLayout;

impl GlobeLayout {
    /// Lower latitude boundary of an absolute band, in degrees.
    ///
    /// Band 0 is centred on the equator, so the running sum starts half a step below
    /// it. Validation guarantees height factors agree across parities, which keeps the
    /// result independent of `parity`.
    pub fn band_lat_min(&self, band: usize, parity: Parity) -> f64 {
        let step = self.base_step_deg();
        (0..band).fold(-step / 2.0, |lat, b| {
            lat + step * self.coefficients().lookup(b, parity).height_factor
        })
    }

    /// Upper latitude boundary of an absolute band, in degrees.
    pub fn band_lat_max(&self, band: usize, parity: Parity) -> f64 {
        self.band_lat_min(band, parity)
            + self.base_step_deg() * self.coefficients().lookup(band, parity).height_factor
    }

    /// Latitude range covered by the polar cap above the last panel band.
    pub fn polar_cap(&self) -> (f64, f64) {
        let cap = self.lat_count() as usize;
        (
            self.band_lat_min(cap, Parity::Even),
            self.band_lat_max(cap, Parity::Even),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_zero_straddles_equator() {
        let layout = GlobeLayout::default();
        assert_eq!(layout.band_lat_min(0, Parity::Even), -11.25);
        assert_eq!(layout.band_lat_max(0, Parity::Even), 11.25);
    }

    #[test]
    fn test_band_boundaries() {
        let layout = GlobeLayout::default();
        let expected = [-11.25, 11.25, 33.75, 56.25, 71.25];
        for (band, lat) in expected.iter().enumerate() {
            assert!((layout.band_lat_min(band, Parity::Even) - lat).abs() < 1e-9);
        }
    }

    #[test]
    fn test_band_min_independent_of_parity() {
        let layout = GlobeLayout::default();
        for band in 0..layout.coefficients().bands() {
            assert_eq!(
                layout.band_lat_min(band, Parity::Even),
                layout.band_lat_min(band, Parity::Odd)
            );
        }
    }

    #[test]
    fn test_polar_cap_reaches_pole() {
        let (min, max) = GlobeLayout::default().polar_cap();
        assert!((min - 71.25).abs() < 1e-9);
        assert!((max - 90.0).abs() < 1e-9);
    }
}
