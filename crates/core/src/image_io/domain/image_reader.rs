use std::path::Path;

use image::DynamicImage;

use crate::shared::error::RoundError;
use crate::shared::image_format::ImageFormat;

/// A decoded image along with the format it was stored in.
pub struct SourceImage {
    pub image: DynamicImage,
    pub format: ImageFormat,
}

/// Reads and decodes a single image file.
pub trait ImageReader: Send + Sync {
    fn read(&self, path: &Path) -> Result<SourceImage, RoundError>;
}
