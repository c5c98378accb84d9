use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::DynamicImage;

use crate::image_io::domain::image_codec::ImageCodec;
use crate::shared::constants::JPEG_QUALITY;
use crate::shared::error::RoundError;
use crate::shared::image_format::ImageFormat;

/// PNG/JPEG codec backed by the `image` crate.
///
/// JPEG has no alpha channel, so transparent pixels are written as their
/// color channels (cleared corners come out white).
pub struct RasterCodec {
    jpeg_quality: u8,
}

impl RasterCodec {
    pub fn new() -> Self {
        Self {
            jpeg_quality: JPEG_QUALITY,
        }
    }

    pub fn with_jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = quality.clamp(1, 100);
        self
    }
}

impl Default for RasterCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageCodec for RasterCodec {
    fn decode(&self, bytes: &[u8]) -> Result<(DynamicImage, ImageFormat), RoundError> {
        let detected = image::guess_format(bytes).map_err(|_| RoundError::InvalidFormat)?;
        let format = ImageFormat::try_from(detected)?;
        let image =
            image::load_from_memory_with_format(bytes, detected).map_err(RoundError::Decode)?;
        Ok((image, format))
    }

    fn encode(&self, image: &DynamicImage, format: ImageFormat) -> Result<Vec<u8>, RoundError> {
        let mut bytes = Vec::new();
        match format {
            ImageFormat::Png => image.write_with_encoder(PngEncoder::new(&mut bytes)),
            ImageFormat::Jpeg => DynamicImage::ImageRgb8(image.to_rgb8()).write_with_encoder(
                JpegEncoder::new_with_quality(&mut bytes, self.jpeg_quality),
            ),
        }
        .map_err(RoundError::Encode)?;
        Ok(bytes)
    }
}
