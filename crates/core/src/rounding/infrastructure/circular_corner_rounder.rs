use image::{DynamicImage, Rgba};

use crate::rounding::domain::corner_mask::{corner_radius, round_corners};
use crate::rounding::domain::corner_rounder::CornerRounder;
use crate::rounding::domain::surface::normalize;
use crate::shared::constants::CLEAR_COLOR;
use crate::shared::error::RoundError;
use crate::shared::round_options::RoundOptions;

/// Clears a circular quarter-disk at each selected corner with a hard edge.
pub struct CircularCornerRounder {
    clear_color: Rgba<u8>,
}

impl CircularCornerRounder {
    pub fn new(clear_color: Rgba<u8>) -> Self {
        Self { clear_color }
    }
}

impl Default for CircularCornerRounder {
    fn default() -> Self {
        Self::new(CLEAR_COLOR)
    }
}

impl CornerRounder for CircularCornerRounder {
    fn round(
        &self,
        image: DynamicImage,
        options: &RoundOptions,
    ) -> Result<DynamicImage, RoundError> {
        let mut surface = normalize(image)?;
        if options.corners().is_empty() {
            log::debug!("No corners selected, leaving image untouched");
            return Ok(surface.into_image());
        }
        let (width, height) = (surface.width(), surface.height());
        let radius = corner_radius(width, height, options.rate());
        log::debug!(
            "Rounding {width}x{height} image: radius {radius:.2}, corners {}",
            options.corners()
        );

        round_corners(
            &mut surface,
            width,
            height,
            radius,
            options.corners(),
            self.clear_color,
        );
        Ok(surface.into_image())
    }
}
