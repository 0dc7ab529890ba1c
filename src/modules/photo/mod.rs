mod data_uri;
mod gps;

pub use data_uri::decode_image_data_uri;
pub use gps::read_gps_position;
