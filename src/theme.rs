//! `ratatui` adapters for terminal hosts. Terminals have no alpha, so
//! translucent colors are flattened onto a backdrop first.

use ratatui::style::{Color, Style};

use crate::gradient::{CellStyle, Rgba};

/// Base surface of a dark terminal theme.
pub const TERMINAL_BACKDROP: Rgba = Rgba::opaque(30, 30, 46);

impl From<Rgba> for Color {
    fn from(c: Rgba) -> Self {
        Color::Rgb(c.r, c.g, c.b)
    }
}

impl CellStyle {
    /// `fg` is flattened onto the cell's own background when it has one.
    pub fn to_ratatui(&self, backdrop: Rgba) -> Style {
        let bg = self.bg.map(|c| c.over(backdrop));
        let mut style = Style::default();
        if let Some(fg) = self.fg {
            style = style.fg(fg.over(bg.unwrap_or(backdrop)).into());
        }
        if let Some(bg) = bg {
            style = style.bg(bg.into());
        }
        style
    }
}

pub fn cell_style(style: CellStyle) -> Style {
    style.to_ratatui(TERMINAL_BACKDROP)
}
