use std::fmt;
use std::str::FromStr;

use super::error::RoundError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    pub fn token(self) -> &'static str {
        match self {
            Corner::TopLeft => "tl",
            Corner::TopRight => "tr",
            Corner::BottomLeft => "bl",
            Corner::BottomRight => "br",
        }
    }

    /// Maps mask offset `(x, y)` to image coordinates relative to this corner.
    ///
    /// The `-1` on the left and top edges is intentional: column `x` of the
    /// extent table lands on pixel `x - 1`, and row `y` on pixel row `y - 1`.
    /// Offsets of zero therefore fall one pixel outside the image.
    pub fn pixel_at(self, x: i64, y: i64, width: i64, height: i64) -> (i64, i64) {
        match self {
            Corner::TopLeft => (x - 1, y - 1),
            Corner::TopRight => (width - x, y - 1),
            Corner::BottomLeft => (x - 1, height - y),
            Corner::BottomRight => (width - x, height - y),
        }
    }
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Corner {
    type Err = RoundError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tl" => Ok(Corner::TopLeft),
            "tr" => Ok(Corner::TopRight),
            "bl" => Ok(Corner::BottomLeft),
            "br" => Ok(Corner::BottomRight),
            other => Err(RoundError::InvalidCorner(other.to_string())),
        }
    }
}

/// Subset of the four image corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CornerSet {
    bits: u8,
}

impl CornerSet {
    pub fn none() -> Self {
        Self { bits: 0 }
    }

    pub fn all() -> Self {
        Corner::ALL.into_iter().collect()
    }

    pub fn insert(&mut self, corner: Corner) {
        self.bits |= Self::bit(corner);
    }

    pub fn contains(&self, corner: Corner) -> bool {
        self.bits & Self::bit(corner) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Selected corners in `Corner::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = Corner> + '_ {
        Corner::ALL.into_iter().filter(|c| self.contains(*c))
    }

    fn bit(corner: Corner) -> u8 {
        match corner {
            Corner::TopLeft => 0b0001,
            Corner::TopRight => 0b0010,
            Corner::BottomLeft => 0b0100,
            Corner::BottomRight => 0b1000,
        }
    }
}

impl FromIterator<Corner> for CornerSet {
    fn from_iter<I: IntoIterator<Item = Corner>>(iter: I) -> Self {
        let mut set = CornerSet::none();
        for corner in iter {
            set.insert(corner);
        }
        set
    }
}

/// Parses a comma separated list such as `tl,br`.
///
/// Tokens are trimmed; an empty token is rejected like any other unknown one.
impl FromStr for CornerSet {
    type Err = RoundError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',').map(|token| token.trim().parse::<Corner>()).collect()
    }
}

impl fmt::Display for CornerSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tokens: Vec<&str> = self.iter().map(Corner::token).collect();
        f.write_str(&tokens.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_all_contains_every_corner() {
        let set = CornerSet::all();
        assert_eq!(set.iter().count(), 4);
        for corner in Corner::ALL {
            assert!(set.contains(corner));
        }
    }

    #[test]
    fn test_none_is_empty() {
        assert!(CornerSet::none().is_empty());
        assert_eq!(CornerSet::none().iter().count(), 0);
    }

    #[rstest]
    #[case::single("tl", &[Corner::TopLeft])]
    #[case::pair("tr,bl", &[Corner::TopRight, Corner::BottomLeft])]
    #[case::spaced(" br , tl ", &[Corner::TopLeft, Corner::BottomRight])]
    #[case::duplicate("tl,tl", &[Corner::TopLeft])]
    #[case::all("tl,tr,bl,br", &Corner::ALL)]
    fn test_parse_valid(#[case] input: &str, #[case] expected: &[Corner]) {
        let set: CornerSet = input.parse().unwrap();
        let corners: Vec<Corner> = set.iter().collect();
        assert_eq!(corners, expected);
    }

    #[rstest]
    #[case::unknown("xx", "xx")]
    #[case::one_bad("tl,xx", "xx")]
    #[case::empty("", "")]
    #[case::trailing_comma("tl,", "")]
    #[case::uppercase("TL", "TL")]
    fn test_parse_invalid(#[case] input: &str, #[case] bad: &str) {
        match input.parse::<CornerSet>() {
            Err(RoundError::InvalidCorner(token)) => assert_eq!(token, bad),
            other => panic!("expected InvalidCorner, got {other:?}"),
        }
    }

    #[test]
    fn test_display_round_trips_default() {
        let set: CornerSet = "br,tl".parse().unwrap();
        assert_eq!(set.to_string(), "tl,br");
        assert_eq!(CornerSet::all().to_string(), "tl,tr,bl,br");
    }

    #[rstest]
    #[case::top_left(Corner::TopLeft, (0, 0), (-1, -1))]
    #[case::top_right(Corner::TopRight, (0, 0), (10, -1))]
    #[case::bottom_left(Corner::BottomLeft, (0, 0), (-1, 8))]
    #[case::bottom_right(Corner::BottomRight, (0, 0), (10, 8))]
    #[case::top_left_inside(Corner::TopLeft, (3, 2), (2, 1))]
    #[case::top_right_inside(Corner::TopRight, (3, 2), (7, 1))]
    #[case::bottom_left_inside(Corner::BottomLeft, (3, 2), (2, 6))]
    #[case::bottom_right_inside(Corner::BottomRight, (3, 2), (7, 6))]
    fn test_pixel_at_offsets(
        #[case] corner: Corner,
        #[case] offset: (i64, i64),
        #[case] expected: (i64, i64),
    ) {
        assert_eq!(corner.pixel_at(offset.0, offset.1, 10, 8), expected);
    }
}
