use crate::error::GlobeError;
use crate::layout::coefficients::CoefficientTable;
use crate::layout::constants::{BASE_STEP_STUD, LAT_COUNT, LON_COUNT, LON_OFFSET, PIXELS_PER_STUD};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Immutable description of a physical globe model.
///
/// Every panel computation takes one of these explicitly, so a different polyhedron
/// only needs a different layout value. The only ways to obtain one ([`GlobeLayout::default`],
/// [`GlobeLayoutBuilder::build`], deserialization) all validate it.
///
/// # Example
///
/// ```
/// use globenet_rs::GlobeLayout;
///
/// # fn main() -> Result<(), globenet_rs::GlobeError> {
/// let layout = GlobeLayout::builder().lon_offset(-168.0).build()?;
/// assert_eq!(layout.lon_count(), 16);
/// assert_eq!(layout.base_step_deg(), 22.5);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LayoutFile")]
pub struct GlobeLayout {
    lon_count: u8,
    base_step_stud: u32,
    lon_offset: f64,
    lat_count: u8,
    pixels_per_stud: f64,
    coefficients: CoefficientTable,
}

impl GlobeLayout {
    pub fn builder() -> GlobeLayoutBuilder {
        GlobeLayoutBuilder::new()
    }

    /// Parses and validates a layout from JSON. Missing fields take the default globe's
    /// values.
    ///
    /// Malformed JSON is a `SerializationError`; well-formed JSON describing an
    /// unusable layout is an `InvalidLayout`.
    pub fn from_json_str(s: &str) -> Result<Self, GlobeError> {
        let file: LayoutFile =
            serde_json::from_str(s).map_err(|e| GlobeError::SerializationError(e.to_string()))?;
        Self::try_from(file)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, GlobeError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn to_json_string(&self) -> Result<String, GlobeError> {
        serde_json::to_string_pretty(self).map_err(|e| GlobeError::SerializationError(e.to_string()))
    }

    pub fn lon_count(&self) -> u8 {
        self.lon_count
    }

    pub fn base_step_stud(&self) -> u32 {
        self.base_step_stud
    }

    /// Angular step in degrees shared by both lon and lat tiling.
    pub fn base_step_deg(&self) -> f64 {
        360.0 / self.lon_count as f64
    }

    pub fn lon_offset(&self) -> f64 {
        self.lon_offset
    }

    pub fn lat_count(&self) -> u8 {
        self.lat_count
    }

    /// Largest valid absolute latitude index.
    pub fn max_lat_index(&self) -> i8 {
        self.lat_count as i8 - 1
    }

    pub fn pixels_per_stud(&self) -> f64 {
        self.pixels_per_stud
    }

    pub fn coefficients(&self) -> &CoefficientTable {
        &self.coefficients
    }

    /// Total number of panels in the net.
    pub fn panel_count(&self) -> usize {
        self.lon_count as usize * (2 * self.lat_count as usize - 1)
    }

    fn validate(self) -> Result<Self, GlobeError> {
        if self.lon_count == 0 || self.lon_count % 2 != 0 {
            return Err(GlobeError::InvalidLayout(format!(
                "lon_count must be a positive even number, got {}",
                self.lon_count
            )));
        }
        if self.base_step_stud == 0 {
            return Err(GlobeError::InvalidLayout(
                "base_step_stud must be positive".to_string(),
            ));
        }
        if self.lat_count == 0 || self.lat_count > i8::MAX as u8 {
            return Err(GlobeError::InvalidLayout(format!(
                "lat_count must be in 1..=127, got {}",
                self.lat_count
            )));
        }
        if !self.lon_offset.is_finite() {
            return Err(GlobeError::InvalidLayout("lon_offset must be finite".to_string()));
        }
        if !(self.pixels_per_stud.is_finite() && self.pixels_per_stud > 0.0) {
            return Err(GlobeError::InvalidLayout(
                "pixels_per_stud must be positive".to_string(),
            ));
        }
        self.coefficients
            .check(self.lat_count as usize)
            .map_err(GlobeError::InvalidLayout)?;

        Ok(self)
    }
}

impl Default for GlobeLayout {
    fn default() -> Self {
        Self {
            lon_count: LON_COUNT,
            base_step_stud: BASE_STEP_STUD,
            lon_offset: LON_OFFSET,
            lat_count: LAT_COUNT,
            pixels_per_stud: PIXELS_PER_STUD,
            coefficients: CoefficientTable::default(),
        }
    }
}

/// On-disk form of a layout, validated on conversion.
#[derive(Deserialize)]
#[serde(default)]
struct LayoutFile {
    lon_count: u8,
    base_step_stud: u32,
    lon_offset: f64,
    lat_count: u8,
    pixels_per_stud: f64,
    coefficients: CoefficientTable,
}

impl Default for LayoutFile {
    fn default() -> Self {
        let layout = GlobeLayout::default();
        Self {
            lon_count: layout.lon_count,
            base_step_stud: layout.base_step_stud,
            lon_offset: layout.lon_offset,
            lat_count: layout.lat_count,
            pixels_per_stud: layout.pixels_per_stud,
            coefficients: layout.coefficients,
        }
    }
}

impl TryFrom<LayoutFile> for GlobeLayout {
    type Error = GlobeError;

    fn try_from(file: LayoutFile) -> Result<Self, Self::Error> {
        GlobeLayout {
            lon_count: file.lon_count,
            base_step_stud: file.base_step_stud,
            lon_offset: file.lon_offset,
            lat_count: file.lat_count,
            pixels_per_stud: file.pixels_per_stud,
            coefficients: file.coefficients,
        }
        .validate()
    }
}

#[derive(Debug, Default)]
pub struct GlobeLayoutBuilder {
    lon_count: Option<u8>,
    base_step_stud: Option<u32>,
    lon_offset: Option<f64>,
    lat_count: Option<u8>,
    pixels_per_stud: Option<f64>,
    coefficients: Option<CoefficientTable>,
}

impl GlobeLayoutBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lon_count(mut self, lon_count: u8) -> Self {
        self.lon_count = Some(lon_count);
        self
    }

    pub fn base_step_stud(mut self, base_step_stud: u32) -> Self {
        self.base_step_stud = Some(base_step_stud);
        self
    }

    pub fn lon_offset(mut self, lon_offset: f64) -> Self {
        self.lon_offset = Some(lon_offset);
        self
    }

    pub fn lat_count(mut self, lat_count: u8) -> Self {
        self.lat_count = Some(lat_count);
        self
    }

    pub fn pixels_per_stud(mut self, pixels_per_stud: f64) -> Self {
        self.pixels_per_stud = Some(pixels_per_stud);
        self
    }

    pub fn coefficients(mut self, coefficients: CoefficientTable) -> Self {
        self.coefficients = Some(coefficients);
        self
    }

    /// Fills unset fields from the default globe and validates the result.
    pub fn build(self) -> Result<GlobeLayout, GlobeError> {
        let defaults = GlobeLayout::default();
        GlobeLayout {
            lon_count: self.lon_count.unwrap_or(defaults.lon_count),
            base_step_stud: self.base_step_stud.unwrap_or(defaults.base_step_stud),
            lon_offset: self.lon_offset.unwrap_or(defaults.lon_offset),
            lat_count: self.lat_count.unwrap_or(defaults.lat_count),
            pixels_per_stud: self.pixels_per_stud.unwrap_or(defaults.pixels_per_stud),
            coefficients: self.coefficients.unwrap_or(defaults.coefficients),
        }
        .validate()
    }
}
