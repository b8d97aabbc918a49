//! Conversions to and from Floem's `peniko::Color`.

use floem::peniko::Color;

use crate::color::ColorRecord;

impl From<ColorRecord> for Color {
    fn from(c: ColorRecord) -> Self {
        Color::rgba8(c.red, c.green, c.blue, c.alpha)
    }
}

impl From<Color> for ColorRecord {
    fn from(c: Color) -> Self {
        ColorRecord::new(c.r, c.g, c.b, c.a)
    }
}
