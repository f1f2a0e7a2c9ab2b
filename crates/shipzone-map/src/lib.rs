pub mod error;
pub mod markers;
pub mod render;

pub use error::MapError;
pub use markers::{order_markers, store_markers, OrderMarker, StoreMarker};
pub use render::{render_map, write_map, MapView};
