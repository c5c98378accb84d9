use std::fmt;

use super::error::RoundError;

/// The two encodings the tool reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
}

impl ImageFormat {
    pub fn mime_type(self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
        }
    }

    /// Prefix of a `data:` URI carrying base64 bytes of this format.
    pub fn data_uri_prefix(self) -> String {
        format!("data:{};base64,", self.mime_type())
    }
}

impl TryFrom<image::ImageFormat> for ImageFormat {
    type Error = RoundError;

    fn try_from(format: image::ImageFormat) -> Result<Self, Self::Error> {
        match format {
            image::ImageFormat::Png => Ok(ImageFormat::Png),
            image::ImageFormat::Jpeg => Ok(ImageFormat::Jpeg),
            _ => Err(RoundError::InvalidFormat),
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageFormat::Png => write!(f, "png"),
            ImageFormat::Jpeg => write!(f, "jpeg"),
        }
    }
}
