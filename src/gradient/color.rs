use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorError;

/// Non-premultiplied RGBA, one byte per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::opaque(0x00, 0x00, 0x00);
    pub const WHITE: Rgba = Rgba::opaque(0xFF, 0xFF, 0xFF);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 0xFF)
    }

    /// Perceptual luminance in `[0, 1]`. Alpha is ignored.
    pub fn luminance(&self) -> f64 {
        (0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b))
            / 255.0
    }

    /// Black on light colors, white on dark ones.
    pub fn contrasting_text(&self) -> Rgba {
        if self.luminance() > 0.5 {
            Self::BLACK
        } else {
            Self::WHITE
        }
    }

    /// Scale R, G and B by `factor` (clamped to `[0, 1]`), truncating.
    /// Alpha is kept.
    pub fn darken(&self, factor: f64) -> Rgba {
        let factor = if factor.is_nan() { 1.0 } else { factor.clamp(0.0, 1.0) };
        let scale = |c: u8| (f64::from(c) * factor) as u8;
        Rgba::new(scale(self.r), scale(self.g), scale(self.b), self.a)
    }

    /// Composite `self` over an opaque `backdrop`.
    pub fn over(&self, backdrop: Rgba) -> Rgba {
        let alpha = f64::from(self.a) / 255.0;
        let mix = |fg: u8, bg: u8| -> u8 {
            let v = f64::from(fg) * alpha + f64::from(bg) * (1.0 - alpha);
            to_channel(v)
        };
        Rgba::opaque(
            mix(self.r, backdrop.r),
            mix(self.g, backdrop.g),
            mix(self.b, backdrop.b),
        )
    }
}

pub(crate) fn to_channel(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    v.round().clamp(0.0, 255.0) as u8
}

impl FromStr for Rgba {
    type Err = ColorError;

    /// `#RRGGBB` or `#RRGGBBAA`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let hex = trimmed
            .strip_prefix('#')
            .ok_or_else(|| ColorError::MissingHash(s.to_string()))?;
        if hex.len() != 6 && hex.len() != 8 {
            return Err(ColorError::BadLength(s.to_string()));
        }
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::BadDigits(s.to_string()));
        }

        let byte = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| ColorError::BadDigits(s.to_string()))
        };
        let alpha = if hex.len() == 8 { byte(6)? } else { 0xFF };
        Ok(Rgba::new(byte(0)?, byte(2)?, byte(4)?, alpha))
    }
}

impl TryFrom<String> for Rgba {
    type Error = ColorError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Rgba> for String {
    fn from(c: Rgba) -> Self {
        c.to_string()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 0xFF {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}
