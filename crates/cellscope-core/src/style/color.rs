//! Color types for cell styling

use std::fmt;

use crate::{Error, Result};

/// An RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// Automatic color (theme-dependent)
    #[default]
    Auto,
    /// RGB color
    Rgb { r: u8, g: u8, b: u8 },
    /// RGB color with alpha channel
    Argb { a: u8, r: u8, g: u8, b: u8 },
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);

    /// Create an RGB color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb { r, g, b }
    }

    /// Create an ARGB color
    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Color::Argb { a, r, g, b }
    }

    /// Parse a color from a hex string like "FFFF00" or "FFFFFF00"
    ///
    /// Accepts an optional leading '#'. Six digits are RRGGBB, eight
    /// digits are AARRGGBB.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim_start_matches('#');

        let parse_byte = |s: &str| {
            u8::from_str_radix(s, 16)
                .map_err(|_| Error::other(format!("invalid hex color: '{hex}'")))
        };

        match hex.len() {
            6 => Ok(Color::Rgb {
                r: parse_byte(&hex[0..2])?,
                g: parse_byte(&hex[2..4])?,
                b: parse_byte(&hex[4..6])?,
            }),
            8 => Ok(Color::Argb {
                a: parse_byte(&hex[0..2])?,
                r: parse_byte(&hex[2..4])?,
                g: parse_byte(&hex[4..6])?,
                b: parse_byte(&hex[6..8])?,
            }),
            _ => Err(Error::other(format!("invalid hex color: '{hex}'"))),
        }
    }

    /// Format as a hex string ("FFFF00" for RGB, "FFFFFF00" for ARGB)
    ///
    /// Auto renders as black.
    pub fn to_hex(&self) -> String {
        match self {
            Color::Auto => "000000".to_string(),
            Color::Rgb { r, g, b } => format!("{r:02X}{g:02X}{b:02X}"),
            Color::Argb { a, r, g, b } => format!("{a:02X}{r:02X}{g:02X}{b:02X}"),
        }
    }

    /// Get the RGB components, dropping any alpha channel
    ///
    /// Auto resolves to black.
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        match *self {
            Color::Auto => (0, 0, 0),
            Color::Rgb { r, g, b } => (r, g, b),
            Color::Argb { r, g, b, .. } => (r, g, b),
        }
    }

    /// Check if this is the automatic color
    pub fn is_auto(&self) -> bool {
        matches!(self, Color::Auto)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Auto => write!(f, "auto"),
            _ => write!(f, "#{}", self.to_hex()),
        }
    }
}
