use image::DynamicImage;

use crate::shared::error::RoundError;
use crate::shared::round_options::RoundOptions;

/// Domain interface for rounding the corners of a decoded image.
///
/// Takes the image by value and returns the rounded one, which may be a
/// newly allocated surface when the input could not be written in place.
pub trait CornerRounder: Send + Sync {
    fn round(
        &self,
        image: DynamicImage,
        options: &RoundOptions,
    ) -> Result<DynamicImage, RoundError>;
}
