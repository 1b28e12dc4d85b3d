//! Two-stop linear color ramps.
//!
//! Values are clamped into the ramp's domain and optionally snapped to a
//! step before the position along the ramp is computed, so nearby amounts
//! share one color band.

mod color;

pub use color::Rgba;

use serde::{Deserialize, Serialize};

use color::to_channel;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gradient {
    pub min: f64,
    pub max: f64,
    pub start: Rgba,
    pub end: Rgba,
    /// Band width. `None` interpolates continuously.
    #[serde(default)]
    pub step: Option<f64>,
}

impl Gradient {
    /// Spending ramp: pale sand at 5 to red at 1000, in bands of 5.
    pub const AMOUNT: Gradient = Gradient {
        min: 5.0,
        max: 1000.0,
        start: Rgba::opaque(0xF8, 0xD4, 0x95),
        end: Rgba::opaque(0xFF, 0x00, 0x00),
        step: Some(5.0),
    };

    /// Positive balance ramp: pastel green at 0 to full green at 3000.
    pub const POSITIVE_BALANCE: Gradient = Gradient {
        min: 0.0,
        max: 3000.0,
        start: Rgba::opaque(0xD4, 0xF8, 0xD4),
        end: Rgba::opaque(0x00, 0xFF, 0x00),
        step: None,
    };

    /// Position of `value` along the ramp, in `[0, 1]`.
    pub fn fraction(&self, value: f64) -> f64 {
        // f64::max/min drop a NaN operand, so NaN lands on `min`.
        let clamped = value.max(self.min).min(self.max);
        let snapped = match self.step {
            Some(step) if step > 0.0 && step.is_finite() => (clamped / step).round() * step,
            _ => clamped,
        };

        let fraction = (snapped - self.min) / (self.max - self.min);
        if fraction.is_finite() {
            fraction.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    pub fn color_at(&self, fraction: f64) -> Rgba {
        let lerp = |from: u8, to: u8| -> u8 {
            to_channel(f64::from(from) + fraction * (f64::from(to) - f64::from(from)))
        };
        Rgba::new(
            lerp(self.start.r, self.end.r),
            lerp(self.start.g, self.end.g),
            lerp(self.start.b, self.end.b),
            lerp(self.start.a, self.end.a),
        )
    }
}

impl Default for Gradient {
    fn default() -> Self {
        Self::AMOUNT
    }
}

/// Balances: one flat color below zero, a ramp from zero up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BalanceGradient {
    pub negative: Rgba,
    pub positive: Gradient,
}

impl Default for BalanceGradient {
    fn default() -> Self {
        Self {
            negative: Rgba::opaque(0xFF, 0x00, 0x00),
            positive: Gradient::POSITIVE_BALANCE,
        }
    }
}

/// A gradient lookup: background plus readable text color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shade {
    pub background: Rgba,
    pub foreground: Rgba,
}

impl Shade {
    pub fn on(background: Rgba) -> Self {
        Self {
            background,
            foreground: background.contrasting_text(),
        }
    }
}

/// Style of one rendered cell. `None` leaves that side to the host theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Option<Rgba>,
    pub bg: Option<Rgba>,
}

impl CellStyle {
    pub fn background(bg: Rgba) -> Self {
        Self {
            fg: None,
            bg: Some(bg),
        }
    }

    pub fn foreground(fg: Rgba) -> Self {
        Self {
            fg: Some(fg),
            bg: None,
        }
    }
}

impl From<Shade> for CellStyle {
    fn from(shade: Shade) -> Self {
        Self {
            fg: Some(shade.foreground),
            bg: Some(shade.background),
        }
    }
}

pub fn color_for_value(value: f64, gradient: &Gradient) -> Shade {
    Shade::on(gradient.color_at(gradient.fraction(value)))
}

pub fn color_for_balance(balance: f64, policy: &BalanceGradient) -> Shade {
    if balance < 0.0 {
        return Shade::on(policy.negative);
    }
    color_for_value(balance, &policy.positive)
}
