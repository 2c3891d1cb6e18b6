use crate::errors::OffCanvasError;
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;

/// A panel length, either absolute pixels or a percentage of the container width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Px(f32),
    Percent(f32),
}

impl Default for Length {
    fn default() -> Self {
        Length::Px(0.0)
    }
}

impl Length {
    /// Percentages are always taken from the container width, whatever the
    /// sliding axis is.
    pub fn resolve(&self, container_width: f32) -> f32 {
        match *self {
            Length::Px(px) => px,
            Length::Percent(pct) => container_width * pct / 100.0,
        }
    }
}

impl From<f32> for Length {
    fn from(px: f32) -> Self {
        Length::Px(px)
    }
}

impl From<f64> for Length {
    fn from(px: f64) -> Self {
        Length::Px(px as f32)
    }
}

impl FromStr for Length {
    type Err = OffCanvasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || OffCanvasError::InvalidLength(s.to_owned());

        if let Some(pct) = trimmed.strip_suffix('%') {
            return parse_finite(pct).map(Length::Percent).ok_or_else(invalid);
        }

        let px = trimmed.strip_suffix("px").unwrap_or(trimmed);
        parse_finite(px).map(Length::Px).ok_or_else(invalid)
    }
}

fn parse_finite(s: &str) -> Option<f32> {
    s.trim().parse::<f32>().ok().filter(|v| v.is_finite())
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Px(px) => write!(f, "{px}px"),
            Length::Percent(pct) => write!(f, "{pct}%"),
        }
    }
}

impl<'de> Deserialize<'de> for Length {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f32),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(px) => Ok(Length::Px(px)),
            Raw::Text(text) => text.parse().map_err(serde::de::Error::custom),
        }
    }
}
