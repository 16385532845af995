use crate::error::GlobeError;
use crate::layout::GlobeLayout;
use crate::panel::{Hemisphere, PanelIndex};
use geo_types::{Coord, coord};

/// Translation that places a transformed panel in the unfolded net.
///
/// Columns sit one unit apart. Rows stack away from the equatorial row, which spans
/// `[-0.5, 0.5]`, by the height factors of the bands in between, so rows shorter than
/// a standard band (the polar row) still meet their neighbours edge to edge. Northern
/// panels hang from their lower edge and southern panels from their upper edge, since
/// their transforms put y = 0 at the southern side.
///
/// Fails if `index` lies outside `layout`'s grid.
pub fn net_offset(layout: &GlobeLayout, index: PanelIndex) -> Result<Coord<f64>, GlobeError> {
    let index = index.validate(layout)?;
    Ok(placement_offset(layout, index))
}

pub(crate) fn placement_offset(layout: &GlobeLayout, index: PanelIndex) -> Coord<f64> {
    let table = layout.coefficients();
    let parity = index.parity();
    let band = index.band();

    let y = match index.hemisphere() {
        Hemisphere::North => (0..band).fold(-0.5, |y, b| y + table.lookup(b, parity).height_factor),
        Hemisphere::South => {
            (1..=band).fold(-0.5, |y, b| y - table.lookup(b, parity).height_factor)
        }
    };

    coord! { x: index.lon() as f64, y: y }
}
