mod bands;
pub mod coefficients;
pub mod config;
pub mod constants;

pub use coefficients::{CoefficientTable, Parity, ShapeCoefficients};
pub use config::{GlobeLayout, GlobeLayoutBuilder};
pub use constants::{
    BASE_STEP_DEG, BASE_STEP_STUD, LAT_COUNT, LON_COUNT, LON_OFFSET, PIXELS_PER_STUD,
};
