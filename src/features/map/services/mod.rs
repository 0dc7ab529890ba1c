mod location_picker;
pub mod markers;
mod map_service;
mod tile_service;

pub use location_picker::LocationPicker;
pub use map_service::MapService;
pub use tile_service::TileService;
