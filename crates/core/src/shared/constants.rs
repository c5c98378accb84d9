use image::Rgba;

/// Written over every masked pixel: white with zero alpha.
pub const CLEAR_COLOR: Rgba<u8> = Rgba([255, 255, 255, 0]);

pub const DEFAULT_RATE: f64 = 0.25;
pub const DEFAULT_CORNERS: &str = "tl,tr,bl,br";
pub const DEFAULT_SUFFIX: &str = "_rounded";

pub const JPEG_QUALITY: u8 = 75;

/// Upper bound on jobs queued ahead of the workers.
pub const JOB_QUEUE_CAPACITY: usize = 16;
