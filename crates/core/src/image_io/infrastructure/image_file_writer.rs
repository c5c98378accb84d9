use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use image::DynamicImage;

use crate::image_io::domain::image_codec::ImageCodec;
use crate::image_io::domain::image_writer::ImageWriter;
use crate::shared::error::RoundError;
use crate::shared::image_format::ImageFormat;

use super::raster_codec::RasterCodec;

/// Writes encoded images so that the destination is never left truncated.
///
/// The image is encoded in memory, written to a hidden `.partial` sibling and
/// renamed over the destination once the write has been flushed.
pub struct ImageFileWriter {
    codec: Box<dyn ImageCodec>,
}

impl ImageFileWriter {
    pub fn new() -> Self {
        Self::with_codec(Box::new(RasterCodec::new()))
    }

    pub fn with_codec(codec: Box<dyn ImageCodec>) -> Self {
        Self { codec }
    }
}

impl Default for ImageFileWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageWriter for ImageFileWriter {
    fn write(
        &self,
        path: &Path,
        image: &DynamicImage,
        format: ImageFormat,
    ) -> Result<(), RoundError> {
        let bytes = self.codec.encode(image, format)?;
        let write_error = |source| RoundError::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_error)?;
        }

        let partial = partial_path(path);
        let result = write_synced(&partial, &bytes).and_then(|()| fs::rename(&partial, path));
        if let Err(source) = result {
            let _ = fs::remove_file(&partial);
            return Err(write_error(source));
        }
        Ok(())
    }
}

fn partial_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{name}.partial"))
}

fn write_synced(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}
