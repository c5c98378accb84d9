use image::Rgba;

use crate::shared::corner::CornerSet;

use super::surface::MutableSurface;

/// Radius of the rounded corner for an image of the given size.
///
/// `rate = 1` gives the inscribed circle, `rate = 0` disables rounding.
pub fn corner_radius(width: u32, height: u32, rate: f64) -> f64 {
    (f64::from(width.min(height)) / 2.0) * rate
}

/// Horizontal extent to clear for each row offset `0..=floor(radius)`.
///
/// Row `y` clears `round(radius - sqrt(2*y*radius - y^2))` columns, the
/// distance between the corner and a circle of `radius` anchored on it.
pub fn row_extents(radius: f64) -> Vec<u32> {
    if !radius.is_finite() {
        return vec![0];
    }
    let radius = radius.max(0.0);
    let last_row = radius.floor() as u32;
    (0..=last_row)
        .map(|y| {
            let y = f64::from(y);
            (radius - (2.0 * y * radius - y * y).sqrt()).round() as u32
        })
        .collect()
}

/// Writes `clear_color` over the masked pixels of every selected corner.
///
/// All corners share one extent table, so they are mirror images of each
/// other whatever the aspect ratio. Offsets that land outside the surface
/// (every `x = 0` and `y = 0` offset does) are dropped by the surface.
pub fn round_corners(
    surface: &mut MutableSurface,
    width: u32,
    height: u32,
    radius: f64,
    corners: CornerSet,
    clear_color: Rgba<u8>,
) {
    let w = i64::from(width);
    let h = i64::from(height);

    for (y, extent) in row_extents(radius).into_iter().enumerate() {
        let y = y as i64;
        for corner in corners.iter() {
            for x in 0..=i64::from(extent) {
                let (px, py) = corner.pixel_at(x, y, w, h);
                surface.set(px, py, clear_color);
            }
        }
    }
}
