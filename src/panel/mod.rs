pub mod builder;
pub mod index;
pub mod transform;

pub use builder::{Panel, build_panel};
pub use index::{Hemisphere, PanelIndex};
pub use transform::{StretchTransform, make_transform};
