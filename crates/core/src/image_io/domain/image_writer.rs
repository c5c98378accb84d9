use std::path::Path;

use image::DynamicImage;

use crate::shared::error::RoundError;
use crate::shared::image_format::ImageFormat;

/// Encodes and writes a single image file.
pub trait ImageWriter: Send + Sync {
    fn write(
        &self,
        path: &Path,
        image: &DynamicImage,
        format: ImageFormat,
    ) -> Result<(), RoundError>;
}
