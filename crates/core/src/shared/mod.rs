pub mod constants;
pub mod corner;
pub mod error;
pub mod image_format;
pub mod round_options;
