//! Rounds the corners of PNG and JPEG images by clearing a circular mask at
//! each selected corner to transparent white.
//!
//! The algorithm lives in [`rounding`]; [`image_io`] and [`pipeline`] wrap it
//! for files, globs and base64 payloads.

pub mod image_io;
pub mod pipeline;
pub mod rounding;
pub mod shared;

pub use rounding::convert;
pub use shared::error::RoundError;
pub use shared::round_options::RoundOptions;
