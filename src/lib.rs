//! # chroma-record
//!
//! A four-byte RGBA color record with lossless hex and packed-integer forms,
//! plus conversions to and from HSL, HSV/HSB, HSI and luma/chroma/hue.
//!
//! All conversions pass through [`ColorRecord`]. Numeric constructors never
//! fail: out-of-domain scalars are clamped. Only hex parsing can fail.
//!
//! ## Usage
//!
//! ```rust
//! use chroma_record::{ColorRecord, Hue};
//!
//! let color = ColorRecord::from_hex("3B82F6").unwrap();
//! assert_eq!(color.to_hex(true), "#3B82F6FF");
//!
//! let hsl = color.to_hsl();
//! let back = ColorRecord::from_hsl(Hue::Defined(hsl.hue), hsl.saturation, hsl.lightness);
//! assert!((back.blue as i16 - color.blue as i16).abs() <= 1);
//! ```
//!
//! ## Features
//!
//! - `serde`: (de)serialize [`ColorRecord`] as its packed `0xRRGGBBAA` integer.
//! - `clipboard`: copy and paste colors as hex text.
//! - `floem`: `From` conversions with `floem::peniko::Color`.

mod color;

#[cfg(feature = "clipboard")]
pub mod clipboard;
pub mod constants;
#[cfg(feature = "floem")]
mod floem_adapter;
pub mod hex;
mod hue;
mod math;

pub use color::ColorRecord;
pub use hex::HexParseError;
pub use hue::{Hsb, Hsba, Hsi, Hsl, Hsla, Hsv, Hsva, Hue, LumaChromaHue};
