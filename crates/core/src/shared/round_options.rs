use super::constants::{DEFAULT_CORNERS, DEFAULT_RATE};
use super::corner::CornerSet;
use super::error::RoundError;

/// Validated parameters for a rounding pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundOptions {
    rate: f64,
    corners: CornerSet,
}

impl RoundOptions {
    pub fn new(rate: f64, corners: CornerSet) -> Result<Self, RoundError> {
        Ok(Self {
            rate: parse_rate(rate)?,
            corners,
        })
    }

    /// Validates both raw values as they come from the command line.
    pub fn parse(rate: f64, corners: &str) -> Result<Self, RoundError> {
        let rate = parse_rate(rate)?;
        let corners = corners.parse()?;
        Ok(Self { rate, corners })
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn corners(&self) -> CornerSet {
        self.corners
    }
}

impl Default for RoundOptions {
    fn default() -> Self {
        Self {
            rate: DEFAULT_RATE,
            corners: CornerSet::all(),
        }
    }
}

/// Rejects rates outside `[0, 1]`, including NaN.
pub fn parse_rate(rate: f64) -> Result<f64, RoundError> {
    if (0.0..=1.0).contains(&rate) {
        Ok(rate)
    } else {
        Err(RoundError::InvalidRate(rate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default_matches_cli_defaults() {
        let options = RoundOptions::default();
        assert_eq!(options.rate(), DEFAULT_RATE);
        assert_eq!(options.corners(), DEFAULT_CORNERS.parse().unwrap());
    }

    #[rstest]
    #[case::zero(0.0)]
    #[case::quarter(0.25)]
    #[case::one(1.0)]
    fn test_rate_in_range_accepted(#[case] rate: f64) {
        assert_eq!(parse_rate(rate).unwrap(), rate);
    }

    #[rstest]
    #[case::above(1.5)]
    #[case::negative(-0.01)]
    #[case::nan(f64::NAN)]
    #[case::infinite(f64::INFINITY)]
    fn test_rate_out_of_range_rejected(#[case] rate: f64) {
        assert!(matches!(parse_rate(rate), Err(RoundError::InvalidRate(_))));
    }

    #[test]
    fn test_parse_reports_rate_before_corners() {
        let err = RoundOptions::parse(1.5, "xx").unwrap_err();
        assert!(matches!(err, RoundError::InvalidRate(r) if r == 1.5));
    }

    #[test]
    fn test_parse_invalid_corner() {
        let err = RoundOptions::parse(0.5, "tl,xx").unwrap_err();
        assert!(matches!(err, RoundError::InvalidCorner(ref t) if t == "xx"));
    }
}
