pub mod photo;
pub mod storage;
