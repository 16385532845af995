/// Number of panel columns around each latitude ring
pub const LON_COUNT: u8 = 16;

/// Width of a standard panel in studs
pub const BASE_STEP_STUD: u32 = 6;

/// Angular step shared by the lon and lat tiling, in degrees (360 / LON_COUNT)
pub const BASE_STEP_DEG: f64 = 360.0 / LON_COUNT as f64;

/// Longitude of panel column 0's centre line. Use -168.0 to anchor on Earth's usual
/// prime meridian layout.
pub const LON_OFFSET: f64 = -177.0;

/// Number of latitude bands covered by panels in each hemisphere
pub const LAT_COUNT: u8 = 4;

/// Raster scale handed to renderers
pub const PIXELS_PER_STUD: f64 = 100.0;

/// Tolerance used when turning fractional stud counts into whole gridline counts
pub(crate) const STUD_EPSILON: f64 = 1e-9;
