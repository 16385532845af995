use crate::error::GlobeError;
use crate::layout::GlobeLayout;
use crate::net::placement::placement_offset;
use crate::panel::{Hemisphere, Panel, PanelIndex};
use log::info;
use serde::Serialize;
use std::fs::File;
use std::path::Path;

/// One row of the panel parameter table.
#[derive(Debug, Clone, Serialize)]
struct PanelRow {
    lon: u8,
    lat: i8,
    parity: usize,
    hemisphere: &'static str,
    lat_min: f64,
    lat_max: f64,
    lon_mid: f64,
    x_mid: f64,
    x_scale: f64,
    x_ratio: f64,
    y_low: f64,
    y_scale: f64,
    y_coeff: f64,
    net_x: f64,
    net_y: f64,
}

impl PanelRow {
    fn new(layout: &GlobeLayout, panel: &Panel) -> Self {
        let t = panel.transform;
        let offset = placement_offset(layout, panel.index);
        let (lat_min, lat_max) = panel.lat_range();
        Self {
            lon: panel.index.lon(),
            lat: panel.index.lat(),
            parity: panel.parity().index(),
            hemisphere: match panel.hemisphere {
                Hemisphere::North => "north",
                Hemisphere::South => "south",
            },
            lat_min,
            lat_max,
            lon_mid: panel.lon_mid,
            x_mid: t.x_mid,
            x_scale: t.x_scale,
            x_ratio: t.x_ratio,
            y_low: t.y_low,
            y_scale: t.y_scale,
            y_coeff: t.y_coeff,
            net_x: offset.x,
            net_y: offset.y,
        }
    }
}

/// Writes every panel's latitude span, transform parameters and net offset as CSV.
pub fn write_panel_table(layout: &GlobeLayout, path: impl AsRef<Path>) -> Result<(), GlobeError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| GlobeError::IoError(e.to_string()))?;
    let mut writer = csv::Writer::from_writer(file);

    let mut rows = 0;
    for index in PanelIndex::all(layout) {
        let panel = Panel::new(layout, index);
        writer
            .serialize(PanelRow::new(layout, &panel))
            .map_err(|e| GlobeError::CsvError(e.to_string()))?;
        rows += 1;
    }

    writer
        .flush()
        .map_err(|e| GlobeError::CsvError(e.to_string()))?;

    info!("wrote {} panel rows to {}", rows, path.display());
    Ok(())
}
