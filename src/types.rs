//! Shared types and enums used across whiteborder.
//! Includes `Orientation`, `AspectRatio`, `FitStrategy` and `AspectMode`.
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Orientation of an image; squares count as landscape
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    pub fn of(width: u32, height: u32) -> Self {
        if height > width {
            Orientation::Portrait
        } else {
            Orientation::Landscape
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Orientation::Portrait => write!(f, "portrait"),
            Orientation::Landscape => write!(f, "landscape"),
        }
    }
}

/// Width-to-height ratio, e.g. `8.5x11` for US Letter
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct AspectRatio {
    pub width: f64,
    pub height: f64,
}

impl AspectRatio {
    /// 8.5 x 11 inches
    pub const LETTER: AspectRatio = AspectRatio {
        width: 8.5,
        height: 11.0,
    };

    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn value(&self) -> f64 {
        self.width / self.height
    }

    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

impl std::fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for AspectRatio {
    type Err = String;

    /// Accepts `WxH` or `W:H`, decimals allowed
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s
            .split_once(['x', 'X', ':'])
            .ok_or_else(|| format!("expected WxH or W:H, got '{}'", s))?;
        let width = w
            .trim()
            .parse::<f64>()
            .map_err(|_| format!("invalid width '{}'", w))?;
        let height = h
            .trim()
            .parse::<f64>()
            .map_err(|_| format!("invalid height '{}'", h))?;

        let ratio = AspectRatio { width, height };
        if !ratio.is_valid() {
            return Err(format!("aspect components must be positive, got '{}'", s));
        }
        Ok(ratio)
    }
}

/// How an image is brought to a target aspect ratio
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum FitStrategy {
    /// Centre-crop the long axis; output never exceeds the input
    Crop,
    /// Stretch the short axis; output never drops below the input
    Resize,
}

impl std::fmt::Display for FitStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FitStrategy::Crop => write!(f, "Crop"),
            FitStrategy::Resize => write!(f, "Resize"),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum AspectMode {
    KeepOriginal,
    Fit {
        ratio: AspectRatio,
        strategy: FitStrategy,
    },
}

impl Default for AspectMode {
    fn default() -> Self {
        AspectMode::Fit {
            ratio: AspectRatio::LETTER,
            strategy: FitStrategy::Crop,
        }
    }
}
