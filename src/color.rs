//! ColorRecord type: the canonical four-byte color representation.
//!
//! Every conversion passes through this record: hex strings and packed
//! integers are bit repackings of it, cylindrical tuples are decomposed from
//! and composed into it. Equality and hashing go through the packed
//! `RRGGBBAA` integer.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::hex::{self, HexParseError};
use crate::hue::{Hsi, Hsl, Hsla, Hsv, Hsva, Hue, LumaChromaHue};
use crate::math;

/// RGBA color with 8-bit channels.
#[derive(Debug, Clone, Copy)]
pub struct ColorRecord {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Default for ColorRecord {
    fn default() -> Self {
        Self::rgb(0, 0, 0)
    }
}

impl ColorRecord {
    /// Create from four channel bytes.
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Opaque color from three channels.
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::new(red, green, blue, crate::constants::OPAQUE)
    }

    fn from_array([red, green, blue, alpha]: [u8; 4]) -> Self {
        Self::new(red, green, blue, alpha)
    }

    /// Channels as `[red, green, blue, alpha]`.
    pub fn to_rgba(&self) -> [u8; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }

    /// Copy of this color with a different alpha byte.
    #[must_use]
    pub fn with_alpha(self, alpha: u8) -> Self {
        Self { alpha, ..self }
    }

    /// Copy of this color with alpha from a 0.0–1.0 scalar (clamped, truncated).
    #[must_use]
    pub fn with_unit_alpha(self, alpha: f64) -> Self {
        self.with_alpha(math::unit_to_byte(math::clamp_unit(alpha)))
    }
}

impl ColorRecord {
    /// Parse a hex string (with or without `#`, 3, 6, or 8 digits).
    ///
    /// 8 digits are read as RRGGBBAA. 3 and 6 digits default to full opacity.
    pub fn from_hex(hex: &str) -> Option<Self> {
        Self::try_from_hex(hex).ok()
    }

    /// Like [`from_hex`](Self::from_hex), reporting why parsing failed.
    pub fn try_from_hex(hex: &str) -> Result<Self, HexParseError> {
        hex::parse_hex(hex).map(Self::from_hex_with_alpha)
    }

    /// Format as `#RRGGBB` or `#RRGGBBAA`, uppercase.
    pub fn to_hex(&self, with_alpha: bool) -> String {
        hex::format_hex(self.to_rgba(), with_alpha)
    }

    /// Packed big-endian integer: `0xRRGGBBAA`, or `0x00RRGGBB` without alpha.
    pub fn to_hex_int(&self, with_alpha: bool) -> u32 {
        hex::pack(self.to_rgba(), with_alpha)
    }

    /// Unpack `0xRRGGBBAA`.
    pub fn from_hex_with_alpha(value: u32) -> Self {
        Self::from_array(hex::unpack_with_alpha(value))
    }

    /// Unpack `0xRRGGBB` as an opaque color.
    pub fn from_hex_without_alpha(value: u32) -> Self {
        Self::from_array(hex::unpack_without_alpha(value))
    }
}

impl ColorRecord {
    /// Convert to HSL. Hue in degrees, the rest 0.0–1.0.
    pub fn to_hsl(&self) -> Hsl {
        let d = math::decompose(self.red, self.green, self.blue);
        Hsl {
            hue: d.hue,
            saturation: d.saturation_hsl,
            lightness: d.lightness,
        }
    }

    /// Convert to HSL with alpha as 0.0–1.0.
    pub fn to_hsla(&self) -> Hsla {
        let Hsl {
            hue,
            saturation,
            lightness,
        } = self.to_hsl();
        Hsla {
            hue,
            saturation,
            lightness,
            alpha: self.unit_alpha(),
        }
    }

    /// Convert to HSV. Hue in degrees, the rest 0.0–1.0.
    pub fn to_hsv(&self) -> Hsv {
        let d = math::decompose(self.red, self.green, self.blue);
        Hsv {
            hue: d.hue,
            saturation: d.saturation_hsv,
            value: d.value,
        }
    }

    /// Convert to HSV with alpha as 0.0–1.0.
    pub fn to_hsva(&self) -> Hsva {
        let Hsv {
            hue,
            saturation,
            value,
        } = self.to_hsv();
        Hsva {
            hue,
            saturation,
            value,
            alpha: self.unit_alpha(),
        }
    }

    /// Same as [`to_hsv`](Self::to_hsv).
    pub fn to_hsb(&self) -> Hsv {
        self.to_hsv()
    }

    /// Same as [`to_hsva`](Self::to_hsva).
    pub fn to_hsba(&self) -> Hsva {
        self.to_hsva()
    }

    /// Convert to luma/chroma/hue. Grays report [`Hue::Achromatic`].
    ///
    /// Composing the result reproduces each channel within one step, except
    /// for hues above 359° (red with a trace of blue): the composer clamps
    /// those to 359°, which can cost a second step.
    pub fn to_luma_chroma_hue(&self) -> LumaChromaHue {
        let d = math::decompose(self.red, self.green, self.blue);
        LumaChromaHue {
            hue: if d.chroma == 0.0 {
                Hue::Achromatic
            } else {
                Hue::Defined(d.hue)
            },
            chroma: d.chroma,
            luma: d.luma,
            alpha: self.unit_alpha(),
        }
    }

    /// Create from HSL, fully opaque. Out-of-domain inputs are clamped.
    pub fn from_hsl(hue: Hue, saturation: f64, lightness: f64) -> Self {
        Self::from_hsla(hue, saturation, lightness, 1.0)
    }

    /// Create from HSL and a 0.0–1.0 alpha. Out-of-domain inputs are clamped.
    pub fn from_hsla(hue: Hue, saturation: f64, lightness: f64, alpha: f64) -> Self {
        Self::from_array(math::compose_hsl(hue, saturation, lightness, alpha))
    }

    /// Create from HSV, fully opaque. Out-of-domain inputs are clamped.
    pub fn from_hsv(hue: Hue, saturation: f64, value: f64) -> Self {
        Self::from_hsva(hue, saturation, value, 1.0)
    }

    /// Create from HSV and a 0.0–1.0 alpha. Out-of-domain inputs are clamped.
    pub fn from_hsva(hue: Hue, saturation: f64, value: f64, alpha: f64) -> Self {
        Self::from_array(math::compose_hsv(hue, saturation, value, alpha))
    }

    /// Same as [`from_hsv`](Self::from_hsv).
    pub fn from_hsb(hue: Hue, saturation: f64, brightness: f64) -> Self {
        Self::from_hsv(hue, saturation, brightness)
    }

    /// Same as [`from_hsva`](Self::from_hsva).
    pub fn from_hsba(hue: Hue, saturation: f64, brightness: f64, alpha: f64) -> Self {
        Self::from_hsva(hue, saturation, brightness, alpha)
    }

    /// Create from hue, saturation and intensity.
    pub fn from_hsi(hue: Hue, saturation: f64, intensity: f64, alpha: f64) -> Self {
        Self::from_array(math::compose_hsi(hue, saturation, intensity, alpha))
    }

    /// Create from luma (Y′), chroma and hue. Hue 360 is read as 0 and the
    /// hue domain is [0, 359].
    pub fn from_luma_chroma_hue(hue: Hue, chroma: f64, luma: f64, alpha: f64) -> Self {
        Self::from_array(math::compose_luma_chroma_hue(hue, chroma, luma, alpha))
    }

    fn unit_alpha(&self) -> f64 {
        self.alpha as f64 / crate::constants::BYTE_SCALE
    }
}

impl ColorRecord {
    /// Channels as 0.0–1.0 floats, the shape platform color types use.
    pub fn to_unit_rgba(&self) -> [f64; 4] {
        self.to_rgba().map(|c| c as f64 / crate::constants::BYTE_SCALE)
    }

    /// Create from 0.0–1.0 floats. Values are clamped and rounded.
    pub fn from_unit_rgba(rgba: [f64; 4]) -> Self {
        Self::from_array(
            rgba.map(|c| (math::clamp_unit(c) * crate::constants::BYTE_SCALE).round() as u8),
        )
    }
}

impl PartialEq for ColorRecord {
    fn eq(&self, other: &Self) -> bool {
        self.to_hex_int(true) == other.to_hex_int(true)
    }
}

impl Eq for ColorRecord {}

impl Hash for ColorRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_hex_int(true).hash(state);
    }
}

impl fmt::Display for ColorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex(true))
    }
}

impl FromStr for ColorRecord {
    type Err = HexParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from_hex(s)
    }
}

impl TryFrom<&str> for ColorRecord {
    type Error = HexParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_from_hex(value)
    }
}

impl From<u32> for ColorRecord {
    fn from(value: u32) -> Self {
        Self::from_hex_with_alpha(value)
    }
}

impl From<ColorRecord> for u32 {
    fn from(color: ColorRecord) -> Self {
        color.to_hex_int(true)
    }
}

impl From<Hsl> for ColorRecord {
    fn from(hsl: Hsl) -> Self {
        Self::from_hsl(Hue::Defined(hsl.hue), hsl.saturation, hsl.lightness)
    }
}

impl From<Hsla> for ColorRecord {
    fn from(hsla: Hsla) -> Self {
        Self::from_hsla(
            Hue::Defined(hsla.hue),
            hsla.saturation,
            hsla.lightness,
            hsla.alpha,
        )
    }
}

impl From<Hsv> for ColorRecord {
    fn from(hsv: Hsv) -> Self {
        Self::from_hsv(Hue::Defined(hsv.hue), hsv.saturation, hsv.value)
    }
}

impl From<Hsva> for ColorRecord {
    fn from(hsva: Hsva) -> Self {
        Self::from_hsva(
            Hue::Defined(hsva.hue),
            hsva.saturation,
            hsva.value,
            hsva.alpha,
        )
    }
}

impl From<Hsi> for ColorRecord {
    fn from(hsi: Hsi) -> Self {
        Self::from_hsi(hsi.hue, hsi.saturation, hsi.intensity, hsi.alpha)
    }
}

impl From<LumaChromaHue> for ColorRecord {
    fn from(lch: LumaChromaHue) -> Self {
        Self::from_luma_chroma_hue(lch.hue, lch.chroma, lch.luma, lch.alpha)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ColorRecord {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.to_hex_int(true))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ColorRecord {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <u32 as serde::Deserialize>::deserialize(deserializer).map(Self::from_hex_with_alpha)
    }
}
