use std::path::PathBuf;

use image::ColorType;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoundError {
    #[error("missing paths")]
    MissingPaths,
    #[error("no files matched the given paths")]
    NoMatches,
    #[error("invalid image format")]
    InvalidFormat,
    #[error("invalid rounding rate {0} (must be between 0.0 and 1.0)")]
    InvalidRate(f64),
    #[error("invalid corner value '{0}' (expected tl, tr, bl or br)")]
    InvalidCorner(String),
    #[error("unsupported pixel format: {0:?}")]
    UnsupportedFormat(ColorType),
    #[error("invalid path pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode image: {0}")]
    Decode(#[source] image::ImageError),
    #[error("failed to encode image: {0}")]
    Encode(#[source] image::ImageError),
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("no input on stdin")]
    EmptyInput,
    #[error("--output {0} can only be used with a single input, got {1}")]
    AmbiguousOutput(PathBuf, usize),
    #[error("{failed} of {total} file(s) failed")]
    BatchFailed { failed: usize, total: usize },
}

impl RoundError {
    /// True for option errors that are reported before any image I/O happens.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            RoundError::MissingPaths
                | RoundError::InvalidRate(_)
                | RoundError::InvalidCorner(_)
                | RoundError::AmbiguousOutput(..)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_value() {
        assert_eq!(
            RoundError::InvalidRate(1.5).to_string(),
            "invalid rounding rate 1.5 (must be between 0.0 and 1.0)"
        );
        assert_eq!(
            RoundError::InvalidCorner("xx".into()).to_string(),
            "invalid corner value 'xx' (expected tl, tr, bl or br)"
        );
    }

    #[test]
    fn test_io_errors_keep_source() {
        use std::error::Error as _;
        let err = RoundError::Read {
            path: PathBuf::from("a.png"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().starts_with("failed to read a.png"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_usage_errors() {
        assert!(RoundError::InvalidRate(-0.1).is_usage());
        assert!(RoundError::InvalidCorner("x".into()).is_usage());
        assert!(!RoundError::InvalidFormat.is_usage());
        assert!(!RoundError::UnsupportedFormat(ColorType::Rgb32F).is_usage());
    }
}
