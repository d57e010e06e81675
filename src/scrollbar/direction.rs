//! Track direction

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ScrollbarError;

/// Axis a track and its thumb run along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrackDirection {
    /// Horizontal track, sized by width and moved along x
    #[serde(rename = "x", alias = "horizontal")]
    Horizontal,
    /// Vertical track, sized by height and moved along y
    #[serde(rename = "y", alias = "vertical")]
    Vertical,
}

impl TrackDirection {
    /// Short axis name used in class names, `x` or `y`
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Horizontal => "x",
            Self::Vertical => "y",
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Horizontal)
    }
}

impl fmt::Display for TrackDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrackDirection {
    type Err = ScrollbarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "x" | "horizontal" => Ok(Self::Horizontal),
            "y" | "vertical" => Ok(Self::Vertical),
            _ => Err(ScrollbarError::UnknownDirection(s.to_string())),
        }
    }
}
