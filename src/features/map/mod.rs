//! Map views over the report collection.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/map` | Markers, popups, legend and (in reporting mode) the candidate marker |
//! | GET | `/api/map/tiles/{z}/{x}/{y}` | Tile imagery passed through from the public tile service |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::{MapService, TileService};
