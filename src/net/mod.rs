pub mod cache;
pub mod globe_net;
pub mod placement;
pub mod tile;

pub use cache::PanelCache;
pub use globe_net::GlobeNet;
pub use placement::net_offset;
pub use tile::NetTile;
