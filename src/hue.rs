//! Hue angle and the cylindrical color tuples.
//!
//! Tuples are plain transient values: decomposer getters on
//! [`ColorRecord`](crate::ColorRecord) return them and the matching `From`
//! conversions feed them back through the composer. Hue is in degrees
//! (0–360); every other scalar is in 0.0–1.0.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Hue angle of a color, or its absence for grays.
///
/// Composers dispatch on this explicitly: `Achromatic` skips the sextant
/// step and reconstructs from the remaining scalars alone.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Hue {
    /// Angle in degrees.
    Defined(f64),
    /// Zero-chroma color with no meaningful hue.
    Achromatic,
}

impl Hue {
    /// Angle in degrees, or `None` for [`Hue::Achromatic`].
    pub fn degrees(self) -> Option<f64> {
        match self {
            Hue::Defined(h) => Some(h),
            Hue::Achromatic => None,
        }
    }

    /// True for [`Hue::Achromatic`].
    pub fn is_achromatic(self) -> bool {
        matches!(self, Hue::Achromatic)
    }
}

impl From<f64> for Hue {
    fn from(degrees: f64) -> Self {
        Hue::Defined(degrees)
    }
}

impl From<Option<f64>> for Hue {
    fn from(degrees: Option<f64>) -> Self {
        degrees.map_or(Hue::Achromatic, Hue::Defined)
    }
}

/// Hue, saturation, lightness.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

/// [`Hsl`] with an alpha scalar.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Hsla {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
    pub alpha: f64,
}

/// Hue, saturation, value. Also known as HSB.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Hsv {
    pub hue: f64,
    pub saturation: f64,
    pub value: f64,
}

/// [`Hsv`] with an alpha scalar.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Hsva {
    pub hue: f64,
    pub saturation: f64,
    pub value: f64,
    pub alpha: f64,
}

/// Hue, saturation, brightness: the same model as [`Hsv`].
pub type Hsb = Hsv;

/// Hue, saturation, brightness, alpha: the same model as [`Hsva`].
pub type Hsba = Hsva;

/// Hue, saturation, intensity with alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Hsi {
    pub hue: Hue,
    pub saturation: f64,
    pub intensity: f64,
    pub alpha: f64,
}

/// Luma (Y′), chroma and hue with alpha.
///
/// Luma uses the Rec. 601 weights 0.30 / 0.59 / 0.11.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LumaChromaHue {
    pub hue: Hue,
    pub chroma: f64,
    pub luma: f64,
    pub alpha: f64,
}
