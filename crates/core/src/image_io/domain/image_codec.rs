use image::DynamicImage;

use crate::shared::error::RoundError;
use crate::shared::image_format::ImageFormat;

/// Converts between encoded bytes and decoded images.
pub trait ImageCodec: Send + Sync {
    /// Decodes `bytes`, identifying the format from its signature.
    fn decode(&self, bytes: &[u8]) -> Result<(DynamicImage, ImageFormat), RoundError>;

    fn encode(&self, image: &DynamicImage, format: ImageFormat) -> Result<Vec<u8>, RoundError>;
}
