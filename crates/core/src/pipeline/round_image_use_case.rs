use std::path::Path;

use crate::image_io::domain::image_reader::ImageReader;
use crate::image_io::domain::image_writer::ImageWriter;
use crate::rounding::domain::corner_rounder::CornerRounder;
use crate::shared::error::RoundError;
use crate::shared::round_options::RoundOptions;

/// Single-file pipeline: read → round → write in the source format.
pub struct RoundImageUseCase {
    reader: Box<dyn ImageReader>,
    writer: Box<dyn ImageWriter>,
    rounder: Box<dyn CornerRounder>,
    options: RoundOptions,
}

impl RoundImageUseCase {
    pub fn new(
        reader: Box<dyn ImageReader>,
        writer: Box<dyn ImageWriter>,
        rounder: Box<dyn CornerRounder>,
        options: RoundOptions,
    ) -> Self {
        Self {
            reader,
            writer,
            rounder,
            options,
        }
    }

    pub fn execute(&self, input_path: &Path, output_path: &Path) -> Result<(), RoundError> {
        let source = self.reader.read(input_path)?;
        let rounded = self.rounder.round(source.image, &self.options)?;
        self.writer.write(output_path, &rounded, source.format)?;
        log::info!("{} -> {}", input_path.display(), output_path.display());
        Ok(())
    }
}
