use crate::error::GlobeError;
use crate::layout::GlobeLayout;
use crate::panel::{Panel, PanelIndex};
use std::sync::OnceLock;

/// Lazily built panels of one layout, keyed by index.
///
/// Panels are pure functions of their index, so each is built at most once and can be
/// shared across threads.
#[derive(Debug)]
pub struct PanelCache {
    layout: GlobeLayout,
    panels: Vec<OnceLock<Panel>>,
}

impl PanelCache {
    pub fn new(layout: GlobeLayout) -> Self {
        let panels = (0..layout.panel_count()).map(|_| OnceLock::new()).collect();
        Self { layout, panels }
    }

    pub fn layout(&self) -> &GlobeLayout {
        &self.layout
    }

    /// Returns the panel at `(lon, lat)`, building it on first use.
    pub fn get(&self, lon: u8, lat: i8) -> Result<&Panel, GlobeError> {
        self.panel(PanelIndex::new(lon, lat, &self.layout)?)
    }

    /// Like [`PanelCache::get`], taking an index that may come from another layout.
    pub fn panel(&self, index: PanelIndex) -> Result<&Panel, GlobeError> {
        let index = index.validate(&self.layout)?;
        let max_lat = self.layout.max_lat_index() as isize;
        let rows = 2 * max_lat as usize + 1;
        let slot = index.lon() as usize * rows + (index.lat() as isize + max_lat) as usize;
        Ok(self.panels[slot].get_or_init(|| Panel::new(&self.layout, index)))
    }

    /// Number of panels built so far.
    pub fn built(&self) -> usize {
        self.panels.iter().filter(|p| p.get().is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rayon::prelude::*;

    #[test]
    fn test_cache_builds_once() -> Result<(), GlobeError> {
        let cache = PanelCache::new(GlobeLayout::default());
        assert_eq!(cache.built(), 0);

        let first = cache.get(3, -2)? as *const Panel;
        let second = cache.get(3, -2)? as *const Panel;
        assert_eq!(first, second);
        assert_eq!(cache.built(), 1);
        Ok(())
    }

    #[test]
    fn test_cache_matches_direct_build() -> Result<(), GlobeError> {
        let layout = GlobeLayout::default();
        let cache = PanelCache::new(layout.clone());
        for index in PanelIndex::all(&layout) {
            assert_eq!(cache.panel(index)?, &Panel::new(&layout, index));
        }
        assert_eq!(cache.built(), 112);
        Ok(())
    }

    #[test]
    fn test_cache_rejects_invalid_index() {
        let cache = PanelCache::new(GlobeLayout::default());
        assert!(matches!(
            cache.get(0, -4),
            Err(GlobeError::InvalidPanelIndex { lon: 0, lat: -4 })
        ));
    }

    #[test]
    fn test_cache_rejects_index_from_larger_layout() -> Result<(), GlobeError> {
        let tall = GlobeLayout::builder()
            .lat_count(5)
            .coefficients(crate::layout::CoefficientTable::new(vec![
                [crate::layout::ShapeCoefficients::new(1.0, 1.0, 1.0); 2],
                [crate::layout::ShapeCoefficients::new(1.0, 1.0, 1.0); 2],
                [crate::layout::ShapeCoefficients::new(1.0, 1.0, 1.0); 2],
                [crate::layout::ShapeCoefficients::new(1.0, 1.0, 1.0); 2],
                [crate::layout::ShapeCoefficients::new(1.0, 1.0, 1.0); 2],
                [crate::layout::ShapeCoefficients::new(1.0, 0.0, 1.0); 2],
            ]))
            .build()?;
        let index = PanelIndex::new(0, 4, &tall)?;

        let cache = PanelCache::new(GlobeLayout::default());
        assert!(matches!(
            cache.panel(index),
            Err(GlobeError::InvalidPanelIndex { lon: 0, lat: 4 })
        ));
        assert_eq!(cache.built(), 0);
        Ok(())
    }

    #[test]
    fn test_cache_shared_across_threads() {
        let layout = GlobeLayout::default();
        let cache = PanelCache::new(layout.clone());
        let indices: Vec<_> = PanelIndex::all(&layout).collect();

        let lon_mids: Vec<f64> = indices
            .par_iter()
            .filter_map(|index| cache.panel(*index).ok().map(|p| p.lon_mid))
            .collect();

        assert_eq!(lon_mids.len(), 112);
        assert_eq!(cache.built(), 112);
    }
}
