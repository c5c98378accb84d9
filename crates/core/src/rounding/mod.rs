pub mod domain;
pub mod infrastructure;

use image::DynamicImage;

use crate::shared::error::RoundError;
use crate::shared::round_options::RoundOptions;

use self::domain::corner_rounder::CornerRounder;
use self::infrastructure::circular_corner_rounder::CircularCornerRounder;

/// Rounds `image` with the default transparent clear color.
pub fn convert(image: DynamicImage, options: &RoundOptions) -> Result<DynamicImage, RoundError> {
    CircularCornerRounder::default().round(image, options)
}
