use image::{DynamicImage, GenericImage, GenericImageView, ImageBuffer, Pixel, Rgba};

use crate::shared::error::RoundError;

/// A decoded image classified by whether it can hold the clear color.
///
/// Only representations with an alpha channel are writable as-is; opaque
/// ones have to be widened to RGBA first.
pub enum Surface {
    Mutable(MutableSurface),
    Immutable(DynamicImage),
}

impl From<DynamicImage> for Surface {
    fn from(image: DynamicImage) -> Self {
        if image.color().has_alpha() {
            Surface::Mutable(MutableSurface { image })
        } else {
            Surface::Immutable(image)
        }
    }
}

/// An image with an alpha channel that accepts per-pixel writes.
///
/// Writes outside the image bounds are ignored.
#[derive(Debug, Clone)]
pub struct MutableSurface {
    image: DynamicImage,
}

impl MutableSurface {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn set(&mut self, x: i64, y: i64, color: Rgba<u8>) {
        if let Some((x, y)) = self.in_bounds(x, y) {
            self.image.put_pixel(x, y, color);
        }
    }

    #[cfg(test)]
    pub fn get(&self, x: u32, y: u32) -> Rgba<u8> {
        self.image.get_pixel(x, y)
    }

    pub fn as_image(&self) -> &DynamicImage {
        &self.image
    }

    pub fn into_image(self) -> DynamicImage {
        self.image
    }

    fn in_bounds(&self, x: i64, y: i64) -> Option<(u32, u32)> {
        let x = u32::try_from(x).ok()?;
        let y = u32::try_from(y).ok()?;
        (x < self.width() && y < self.height()).then_some((x, y))
    }
}

/// Returns a writable surface for `image`, copying only when required.
///
/// Images that already carry alpha are handed back untouched. Opaque 8-bit
/// and 16-bit luma or RGB images (what JPEG and non-alpha PNG decode to) are
/// copied pixel by pixel into an RGBA buffer of the same bit depth.
pub fn normalize(image: DynamicImage) -> Result<MutableSurface, RoundError> {
    match Surface::from(image) {
        Surface::Mutable(surface) => Ok(surface),
        Surface::Immutable(image) => {
            log::debug!(
                "Converting {:?} {}x{} image to RGBA",
                image.color(),
                image.width(),
                image.height()
            );
            let image = widen_to_rgba(&image)?;
            Ok(MutableSurface { image })
        }
    }
}

fn widen_to_rgba(image: &DynamicImage) -> Result<DynamicImage, RoundError> {
    match image {
        DynamicImage::ImageLuma8(buf) => Ok(DynamicImage::ImageRgba8(copy_pixels(buf))),
        DynamicImage::ImageRgb8(buf) => Ok(DynamicImage::ImageRgba8(copy_pixels(buf))),
        DynamicImage::ImageLuma16(buf) => Ok(DynamicImage::ImageRgba16(copy_pixels(buf))),
        DynamicImage::ImageRgb16(buf) => Ok(DynamicImage::ImageRgba16(copy_pixels(buf))),
        other => Err(RoundError::UnsupportedFormat(other.color())),
    }
}

/// Row-major copy, one read and one write per pixel.
fn copy_pixels<P>(
    source: &ImageBuffer<P, Vec<P::Subpixel>>,
) -> ImageBuffer<Rgba<P::Subpixel>, Vec<P::Subpixel>>
where
    P: Pixel,
    Rgba<P::Subpixel>: Pixel<Subpixel = P::Subpixel>,
{
    let (width, height) = source.dimensions();
    let mut target = ImageBuffer::new(width, height);
    for y in 0..height {
        for x in 0..width {
            target.put_pixel(x, y, source.get_pixel(x, y).to_rgba());
        }
    }
    target
}
