//! Color math: hue decomposition and the piecewise hue composers.
//!
//! Channels are normalized to 0.0–1.0 internally. Composers clamp every
//! scalar into its domain before use and never fail; the final narrowing
//! clamps to the byte range and truncates toward zero.

use crate::constants::{
    BYTE_SCALE, HUE_MAX, LUMA_BLUE, LUMA_GREEN, LUMA_HUE_MAX, LUMA_RED, SEXTANT_DEGREES,
};
use crate::hue::Hue;

/// Shared result of decomposing an RGB triple. All scalars except `hue`
/// are in 0.0–1.0; `hue` is in degrees, 0.0 when `chroma` is zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Decomposition {
    pub hue: f64,
    pub chroma: f64,
    pub saturation_hsv: f64,
    pub saturation_hsl: f64,
    pub lightness: f64,
    pub value: f64,
    pub luma: f64,
}

/// RGB bytes → hue, chroma, both saturations, lightness, value and luma.
pub(crate) fn decompose(red: u8, green: u8, blue: u8) -> Decomposition {
    let r = red as f64 / BYTE_SCALE;
    let g = green as f64 / BYTE_SCALE;
    let b = blue as f64 / BYTE_SCALE;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let chroma = max - min;
    let lightness = (max + min) / 2.0;

    // Tie-break order is red, green, blue.
    let hue = if chroma == 0.0 {
        0.0
    } else if max == r {
        SEXTANT_DEGREES * ((g - b) / chroma).rem_euclid(6.0)
    } else if max == g {
        SEXTANT_DEGREES * ((b - r) / chroma) + 120.0
    } else {
        SEXTANT_DEGREES * ((r - g) / chroma) + 240.0
    };

    let saturation_hsv = if max == 0.0 { 0.0 } else { chroma / max };
    let saturation_hsl = if lightness == 0.0 || lightness == 1.0 {
        0.0
    } else {
        (max - lightness) / lightness.min(1.0 - lightness)
    };

    Decomposition {
        hue,
        chroma,
        saturation_hsv,
        saturation_hsl,
        lightness,
        value: max,
        luma: rec601_luma(r, g, b),
    }
}

/// HSL → RGBA bytes. An achromatic hue yields the gray at `lightness`.
pub(crate) fn compose_hsl(hue: Hue, saturation: f64, lightness: f64, alpha: f64) -> [u8; 4] {
    let s = clamp_unit(saturation);
    let l = clamp_unit(lightness);
    let (triple, m) = match hue {
        Hue::Defined(h) => {
            let h_prime = wrap_hue(h) / SEXTANT_DEGREES;
            let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
            let x = chroma * zigzag(h_prime);
            (sextant(h_prime, chroma, x), l - chroma / 2.0)
        }
        Hue::Achromatic => ((0.0, 0.0, 0.0), l),
    };
    narrow(triple, m, alpha)
}

/// HSV/HSB → RGBA bytes. An achromatic hue yields the gray at `value`.
pub(crate) fn compose_hsv(hue: Hue, saturation: f64, value: f64, alpha: f64) -> [u8; 4] {
    let s = clamp_unit(saturation);
    let v = clamp_unit(value);
    let (triple, m) = match hue {
        Hue::Defined(h) => {
            let h_prime = wrap_hue(h) / SEXTANT_DEGREES;
            let chroma = v * s;
            let x = chroma * zigzag(h_prime);
            (sextant(h_prime, chroma, x), v - chroma)
        }
        Hue::Achromatic => ((0.0, 0.0, 0.0), v),
    };
    narrow(triple, m, alpha)
}

/// HSI → RGBA bytes.
pub(crate) fn compose_hsi(hue: Hue, saturation: f64, intensity: f64, alpha: f64) -> [u8; 4] {
    let s = clamp_unit(saturation);
    let i = clamp_unit(intensity);
    let m = i - (1.0 - s);
    let triple = match hue {
        Hue::Defined(h) => {
            let h_prime = wrap_hue(h) / SEXTANT_DEGREES;
            let z = zigzag(h_prime);
            let chroma = 2.0 * i * s / (1.0 + z);
            sextant(h_prime, chroma, chroma * z)
        }
        Hue::Achromatic => (0.0, 0.0, 0.0),
    };
    narrow(triple, m, alpha)
}

/// Luma/chroma/hue → RGBA bytes. Hue 360 maps to 0 before the
/// [0, 359] domain clamp.
pub(crate) fn compose_luma_chroma_hue(hue: Hue, chroma: f64, luma: f64, alpha: f64) -> [u8; 4] {
    let y = clamp_unit(luma);
    let (triple, m) = match hue {
        Hue::Defined(h) => {
            let h = if h == HUE_MAX { 0.0 } else { h };
            let h_prime = clamp_domain(h, 0.0, LUMA_HUE_MAX) / SEXTANT_DEGREES;
            let chroma = clamp_unit(chroma);
            let (r1, g1, b1) = sextant(h_prime, chroma, chroma * zigzag(h_prime));
            ((r1, g1, b1), y - rec601_luma(r1, g1, b1))
        }
        Hue::Achromatic => ((0.0, 0.0, 0.0), y),
    };
    narrow(triple, m, alpha)
}

/// Unit scalar → byte: clamp to 0–255, truncate toward zero.
pub(crate) fn unit_to_byte(x: f64) -> u8 {
    clamp_domain(x * BYTE_SCALE, 0.0, BYTE_SCALE) as u8
}

/// Clamp into 0.0–1.0; NaN becomes 0.0.
pub(crate) fn clamp_unit(x: f64) -> f64 {
    clamp_domain(x, 0.0, 1.0)
}

fn clamp_domain(x: f64, lo: f64, hi: f64) -> f64 {
    let clamped = if x.is_nan() { lo } else { x.clamp(lo, hi) };
    if clamped != x {
        tracing::trace!(input = x, clamped, lo, hi, "scalar clamped into domain");
    }
    clamped
}

/// Clamp to [0, 360] then fold 360 onto 0.
fn wrap_hue(h: f64) -> f64 {
    let h = clamp_domain(h, 0.0, HUE_MAX);
    if h == HUE_MAX {
        0.0
    } else {
        h
    }
}

/// `1 - |H' mod 2 - 1|`: rises 0 → 1 → 0 across each pair of sextants.
fn zigzag(h_prime: f64) -> f64 {
    1.0 - (h_prime % 2.0 - 1.0).abs()
}

/// Order chroma and the intermediate value across channels by sextant.
/// Anything outside [0, 6) yields black.
fn sextant(h_prime: f64, chroma: f64, x: f64) -> (f64, f64, f64) {
    if !(0.0..6.0).contains(&h_prime) {
        return (0.0, 0.0, 0.0);
    }
    match h_prime.floor() as u8 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    }
}

fn rec601_luma(r: f64, g: f64, b: f64) -> f64 {
    LUMA_RED * r + LUMA_GREEN * g + LUMA_BLUE * b
}

fn narrow((r1, g1, b1): (f64, f64, f64), m: f64, alpha: f64) -> [u8; 4] {
    [
        unit_to_byte(r1 + m),
        unit_to_byte(g1 + m),
        unit_to_byte(b1 + m),
        unit_to_byte(clamp_unit(alpha)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn decompose_primaries() {
        let red = decompose(255, 0, 0);
        assert!(approx(red.hue, 0.0));
        assert!(approx(red.saturation_hsv, 1.0));
        assert!(approx(red.saturation_hsl, 1.0));
        assert!(approx(red.lightness, 0.5));
        assert!(approx(red.value, 1.0));

        assert!(approx(decompose(0, 255, 0).hue, 120.0));
        assert!(approx(decompose(0, 0, 255).hue, 240.0));
        assert!(approx(decompose(255, 255, 0).hue, 60.0));
        assert!(approx(decompose(0, 255, 255).hue, 180.0));
        assert!(approx(decompose(255, 0, 255).hue, 300.0));
    }

    #[test]
    fn decompose_red_branch_wraps_negative_hue() {
        let d = decompose(255, 0, 1);
        assert!(d.hue > 359.0 && d.hue < 360.0, "hue was {}", d.hue);
    }

    #[test]
    fn decompose_ties_prefer_red_then_green() {
        // red == green == max: red branch, (g - b) / c = 1
        assert!(approx(decompose(200, 200, 0).hue, 60.0));
        // green == blue == max: green branch, (b - r) / c + 2 = 3
        assert!(approx(decompose(0, 200, 200).hue, 180.0));
    }

    #[test]
    fn decompose_achromatic_is_total() {
        for v in 0..=255u8 {
            let d = decompose(v, v, v);
            assert_eq!(d.hue, 0.0);
            assert_eq!(d.chroma, 0.0);
            assert_eq!(d.saturation_hsv, 0.0);
            assert_eq!(d.saturation_hsl, 0.0);
        }
    }

    #[test]
    fn decompose_luma_weights() {
        assert!(approx(decompose(255, 0, 0).luma, 0.30));
        assert!(approx(decompose(0, 255, 0).luma, 0.59));
        assert!(approx(decompose(0, 0, 255).luma, 0.11));
        assert!(approx(decompose(255, 255, 255).luma, 1.0));
    }

    #[test]
    fn sextant_orderings() {
        let (c, x) = (1.0, 0.5);
        assert_eq!(sextant(0.0, c, x), (c, x, 0.0));
        assert_eq!(sextant(1.0, c, x), (x, c, 0.0));
        assert_eq!(sextant(2.0, c, x), (0.0, c, x));
        assert_eq!(sextant(3.0, c, x), (0.0, x, c));
        assert_eq!(sextant(4.0, c, x), (x, 0.0, c));
        assert_eq!(sextant(5.0, c, x), (c, 0.0, x));
        assert_eq!(sextant(5.999, c, x), (c, 0.0, x));
    }

    #[test]
    fn sextant_out_of_range_is_black() {
        assert_eq!(sextant(6.0, 1.0, 1.0), (0.0, 0.0, 0.0));
        assert_eq!(sextant(-0.5, 1.0, 1.0), (0.0, 0.0, 0.0));
        assert_eq!(sextant(f64::NAN, 1.0, 1.0), (0.0, 0.0, 0.0));
    }

    #[test]
    fn hsl_sextant_boundaries() {
        let at = |h: f64| compose_hsl(Hue::Defined(h), 1.0, 0.5, 1.0);
        assert_eq!(at(0.0), [255, 0, 0, 255]);
        assert_eq!(at(60.0), [255, 255, 0, 255]);
        assert_eq!(at(120.0), [0, 255, 0, 255]);
        assert_eq!(at(180.0), [0, 255, 255, 255]);
        assert_eq!(at(240.0), [0, 0, 255, 255]);
        assert_eq!(at(300.0), [255, 0, 255, 255]);
        assert_eq!(at(360.0), at(0.0));
    }

    #[test]
    fn hsv_sextant_boundaries() {
        let at = |h: f64| compose_hsv(Hue::Defined(h), 1.0, 1.0, 1.0);
        assert_eq!(at(0.0), [255, 0, 0, 255]);
        assert_eq!(at(60.0), [255, 255, 0, 255]);
        assert_eq!(at(120.0), [0, 255, 0, 255]);
        assert_eq!(at(180.0), [0, 255, 255, 255]);
        assert_eq!(at(240.0), [0, 0, 255, 255]);
        assert_eq!(at(300.0), [255, 0, 255, 255]);
        assert_eq!(at(360.0), [255, 0, 0, 255]);
    }

    #[test]
    fn hsv_achromatic_is_gray_at_value() {
        assert_eq!(compose_hsv(Hue::Achromatic, 1.0, 1.0, 1.0), [255, 255, 255, 255]);
        assert_eq!(compose_hsv(Hue::Achromatic, 0.3, 0.0, 0.0), [0, 0, 0, 0]);
    }

    #[test]
    fn hsl_clamps_out_of_domain_inputs() {
        assert_eq!(
            compose_hsl(Hue::Defined(-30.0), 2.0, 0.5, 7.0),
            compose_hsl(Hue::Defined(0.0), 1.0, 0.5, 1.0)
        );
        assert_eq!(
            compose_hsl(Hue::Defined(720.0), 1.0, 0.5, 1.0),
            compose_hsl(Hue::Defined(0.0), 1.0, 0.5, 1.0)
        );
        assert_eq!(compose_hsl(Hue::Defined(f64::NAN), f64::NAN, 0.0, -1.0), [0, 0, 0, 0]);
    }

    #[test]
    fn hsi_follows_table() {
        // Full saturation, intensity 0.5, hue 0: z = 0, chroma = 1, m = 0.5
        assert_eq!(compose_hsi(Hue::Defined(0.0), 1.0, 0.5, 1.0), [255, 127, 127, 255]);
        // Hue 60: z = 1, chroma = 0.5, x = 0.5, m = 0.5
        assert_eq!(compose_hsi(Hue::Defined(60.0), 1.0, 0.5, 1.0), [255, 255, 127, 255]);
        // Achromatic keeps the intensity offset
        assert_eq!(compose_hsi(Hue::Achromatic, 1.0, 0.5, 1.0), [127, 127, 127, 255]);
        assert_eq!(compose_hsi(Hue::Achromatic, 0.0, 0.5, 1.0), [0, 0, 0, 255]);
    }

    #[test]
    fn hsi_folds_360_onto_0() {
        let at_zero = compose_hsi(Hue::Defined(0.0), 1.0, 0.5, 1.0);
        assert_eq!(compose_hsi(Hue::Defined(360.0), 1.0, 0.5, 1.0), at_zero);
        assert_eq!(at_zero, [255, 127, 127, 255]);
    }

    #[test]
    fn luma_chroma_hue_clamps_hue_above_359() {
        // (255, 0, 1) decomposes to hue ~359.76, composed back at 359
        let d = decompose(255, 0, 1);
        let rgba = compose_luma_chroma_hue(Hue::Defined(d.hue), d.chroma, d.luma, 1.0);
        assert_eq!(rgba, [0xFE, 0x00, 0x03, 0xFF]);
    }

    #[test]
    fn luma_chroma_hue_remaps_360_to_0() {
        assert_eq!(
            compose_luma_chroma_hue(Hue::Defined(360.0), 0.5, 0.5, 1.0),
            compose_luma_chroma_hue(Hue::Defined(0.0), 0.5, 0.5, 1.0)
        );
        // Above 360 clamps to 359 rather than wrapping
        assert_eq!(
            compose_luma_chroma_hue(Hue::Defined(400.0), 0.5, 0.5, 1.0),
            compose_luma_chroma_hue(Hue::Defined(359.0), 0.5, 0.5, 1.0)
        );
    }

    #[test]
    fn luma_chroma_hue_preserves_luma() {
        // Hue 0, chroma 0.5: triple (0.5, 0, 0), m = 0.5 - 0.15 = 0.35
        let [r, g, b, a] = compose_luma_chroma_hue(Hue::Defined(0.0), 0.5, 0.5, 1.0);
        assert_eq!((r, g, b, a), (216, 89, 89, 255));
        assert_eq!(compose_luma_chroma_hue(Hue::Achromatic, 0.9, 0.5, 0.5), [127, 127, 127, 127]);
    }

    #[test]
    fn unit_to_byte_truncates_and_clamps() {
        assert_eq!(unit_to_byte(0.5), 127);
        assert_eq!(unit_to_byte(1.0), 255);
        assert_eq!(unit_to_byte(1.5), 255);
        assert_eq!(unit_to_byte(-0.2), 0);
        assert_eq!(unit_to_byte(f64::NAN), 0);
    }
}
