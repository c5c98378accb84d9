use crate::image_io::domain::image_codec::ImageCodec;
use crate::image_io::infrastructure::data_uri;
use crate::rounding::domain::corner_rounder::CornerRounder;
use crate::shared::error::RoundError;
use crate::shared::round_options::RoundOptions;

/// In-memory pipeline for one base64 payload: decode → round → encode.
pub struct RoundBase64UseCase {
    codec: Box<dyn ImageCodec>,
    rounder: Box<dyn CornerRounder>,
    options: RoundOptions,
}

impl RoundBase64UseCase {
    pub fn new(
        codec: Box<dyn ImageCodec>,
        rounder: Box<dyn CornerRounder>,
        options: RoundOptions,
    ) -> Self {
        Self {
            codec,
            rounder,
            options,
        }
    }

    /// Returns a `data:image/...;base64,` URI in the format of the input.
    pub fn execute(&self, payload: &str) -> Result<String, RoundError> {
        let bytes = data_uri::decode(payload)?;
        let (image, format) = self.codec.decode(&bytes)?;
        let rounded = self.rounder.round(image, &self.options)?;
        let encoded = self.codec.encode(&rounded, format)?;
        log::debug!("Encoded {} bytes of {format}", encoded.len());
        Ok(data_uri::encode(format, &encoded))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_io::infrastructure::raster_codec::RasterCodec;
    use crate::rounding::infrastructure::circular_corner_rounder::CircularCornerRounder;
    use crate::shared::constants::CLEAR_COLOR;
    use crate::shared::image_format::ImageFormat;
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use image::{DynamicImage, Rgb, RgbImage, Rgba, RgbaImage};

    fn use_case(rate: f64) -> RoundBase64UseCase {
        RoundBase64UseCase::new(
            Box::new(RasterCodec::new()),
            Box::new(CircularCornerRounder::default()),
            RoundOptions::parse(rate, "tl,tr,bl,br").unwrap(),
        )
    }

    fn png_payload(image: &DynamicImage) -> String {
        let bytes = RasterCodec::new().encode(image, ImageFormat::Png).unwrap();
        STANDARD.encode(bytes)
    }

    fn decode_output(output: &str, prefix: &str) -> DynamicImage {
        let payload = output.strip_prefix(prefix).expect("data URI prefix");
        let bytes = STANDARD.decode(payload).unwrap();
        image::load_from_memory(&bytes).unwrap()
    }

    #[test]
    fn test_png_data_uri_round_trip() {
        let source = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            100,
            100,
            Rgba([10, 20, 30, 255]),
        ));
        let input = format!("data:image/png;base64,{}\n", png_payload(&source));

        let output = use_case(0.5).execute(&input).unwrap();

        assert!(output.starts_with("data:image/png;base64,"));
        assert!(!output.ends_with('\n'));
        let rounded = decode_output(&output, "data:image/png;base64,").to_rgba8();
        assert_eq!(*rounded.get_pixel(0, 0), CLEAR_COLOR);
        assert_eq!(*rounded.get_pixel(50, 50), Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn test_bare_payload_accepted() {
        let source = DynamicImage::ImageRgba8(RgbaImage::new(8, 8));
        let output = use_case(0.0).execute(&png_payload(&source)).unwrap();
        assert!(output.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_jpeg_payload_stays_jpeg() {
        let source = DynamicImage::ImageRgb8(RgbImage::from_pixel(64, 64, Rgb([0, 0, 0])));
        let bytes = RasterCodec::new().encode(&source, ImageFormat::Jpeg).unwrap();
        let input = format!("data:image/jpeg;base64,{}", STANDARD.encode(bytes));

        let output = use_case(1.0).execute(&input).unwrap();

        let rounded = decode_output(&output, "data:image/jpeg;base64,").to_rgb8();
        assert!(rounded.get_pixel(0, 0).0.iter().all(|&c| c > 200));
    }

    #[test]
    fn test_zero_rate_keeps_pixels() {
        let source = DynamicImage::ImageRgba8(RgbaImage::from_fn(12, 12, |x, y| {
            Rgba([x as u8 * 20, y as u8 * 20, 0, 255])
        }));
        let output = use_case(0.0).execute(&png_payload(&source)).unwrap();
        let rounded = decode_output(&output, "data:image/png;base64,");
        assert_eq!(rounded.to_rgba8(), source.to_rgba8());
    }

    #[test]
    fn test_non_image_payload_is_invalid_format() {
        let input = STANDARD.encode(b"plain text, not an image");
        assert!(matches!(
            use_case(0.5).execute(&input),
            Err(RoundError::InvalidFormat)
        ));
    }

    #[test]
    fn test_garbage_is_base64_error() {
        assert!(matches!(
            use_case(0.5).execute("%%%"),
            Err(RoundError::Base64(_))
        ));
    }
}
