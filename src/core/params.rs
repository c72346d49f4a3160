use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{AspectMode, AspectRatio, Orientation};

/// Symmetric margins as a fraction of the image size on each axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub h_padding: f64,
    pub v_padding: f64,
}

impl Margins {
    pub fn new(h_padding: f64, v_padding: f64) -> Self {
        Self {
            h_padding,
            v_padding,
        }
    }
}

/// Mat canvas expressed as a border aspect relative to the image aspect,
/// e.g. an 8x10 print on an 11x14 mat
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatAspect {
    pub border: AspectRatio,
    pub image: AspectRatio,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrientationSettings {
    pub margins: Margins,
    /// When set, the canvas grows to the mat size if that is larger than the margins
    pub mat: Option<MatAspect>,
}

/// Border parameters for a whole batch, suitable for presets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BorderConfig {
    pub aspect: AspectMode,
    pub portrait: OrientationSettings,
    pub landscape: OrientationSettings,
}

impl Default for BorderConfig {
    fn default() -> Self {
        Self {
            aspect: AspectMode::default(),
            portrait: OrientationSettings {
                margins: Margins::new(0.12, 0.06),
                mat: None,
            },
            landscape: OrientationSettings {
                margins: Margins::new(0.06, 0.12),
                mat: None,
            },
        }
    }
}

impl BorderConfig {
    pub fn settings_for(&self, orientation: Orientation) -> &OrientationSettings {
        match orientation {
            Orientation::Portrait => &self.portrait,
            Orientation::Landscape => &self.landscape,
        }
    }

    /// Reject configurations the transforms are not defined for.
    pub fn validate(&self) -> Result<()> {
        if let AspectMode::Fit { ratio, .. } = self.aspect {
            if !ratio.is_valid() {
                return Err(Error::invalid("aspect", ratio));
            }
        }

        validate_settings(&self.portrait, "portrait")?;
        validate_settings(&self.landscape, "landscape")?;

        // Percentage and mat canvases size differently; a batch uses one or the other.
        if self.portrait.mat.is_some() != self.landscape.mat.is_some() {
            return Err(Error::invalid(
                "mat",
                "must be set for both orientations or neither",
            ));
        }

        Ok(())
    }
}

fn validate_settings(settings: &OrientationSettings, orientation: &'static str) -> Result<()> {
    let in_range = |p: f64| p.is_finite() && (0.0..=1.0).contains(&p);

    if !in_range(settings.margins.h_padding) {
        return Err(Error::invalid(
            "h_padding",
            format!("{} ({})", settings.margins.h_padding, orientation),
        ));
    }
    if !in_range(settings.margins.v_padding) {
        return Err(Error::invalid(
            "v_padding",
            format!("{} ({})", settings.margins.v_padding, orientation),
        ));
    }

    if let Some(mat) = settings.mat {
        if !mat.border.is_valid() {
            return Err(Error::invalid(
                "border_aspect",
                format!("{} ({})", mat.border, orientation),
            ));
        }
        if !mat.image.is_valid() {
            return Err(Error::invalid(
                "image_aspect",
                format!("{} ({})", mat.image, orientation),
            ));
        }
    }

    Ok(())
}
