use std::fs;
use std::path::Path;

use crate::image_io::domain::image_codec::ImageCodec;
use crate::image_io::domain::image_reader::{ImageReader, SourceImage};
use crate::shared::error::RoundError;

use super::raster_codec::RasterCodec;

/// Reads an image file into memory and decodes it.
pub struct ImageFileReader {
    codec: Box<dyn ImageCodec>,
}

impl ImageFileReader {
    pub fn new() -> Self {
        Self::with_codec(Box::new(RasterCodec::new()))
    }

    pub fn with_codec(codec: Box<dyn ImageCodec>) -> Self {
        Self { codec }
    }
}

impl Default for ImageFileReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageReader for ImageFileReader {
    fn read(&self, path: &Path) -> Result<SourceImage, RoundError> {
        let bytes = fs::read(path).map_err(|source| RoundError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let (image, format) = self.codec.decode(&bytes)?;
        log::debug!(
            "Decoded {} ({format}, {}x{}, {:?})",
            path.display(),
            image.width(),
            image.height(),
            image.color()
        );
        Ok(SourceImage { image, format })
    }
}
