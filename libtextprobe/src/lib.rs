pub mod detection;
pub mod encoding;
pub mod utils;
