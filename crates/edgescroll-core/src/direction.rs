use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One side of a scrollable container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Top,
    Bottom,
    Left,
    Right,
}

impl Direction {
    /// Order in which edge zones are tested; the first match wins in corners
    pub const DETECTION_ORDER: [Direction; 4] =
        [Direction::Top, Direction::Bottom, Direction::Left, Direction::Right];

    /// Whether scrolling in this direction moves the horizontal offset
    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Step with the sign of this direction: negative towards the origin
    #[inline]
    pub fn signed_step(self, step: f64) -> f64 {
        match self {
            Direction::Top | Direction::Left => -step,
            Direction::Bottom | Direction::Right => step,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Top => "top",
            Direction::Bottom => "bottom",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(Direction::Top),
            "bottom" => Ok(Direction::Bottom),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            other => Err(crate::Error::InvalidDirection(other.to_string())),
        }
    }
}
