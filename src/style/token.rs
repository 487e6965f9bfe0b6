//! Style token rendering
//!
//! Turns the color and attribute tokens found in the config file into the
//! literal SGR escape sequences written to the terminal. Every token is
//! rendered exactly once, when the config is loaded.

use crate::error::{EaselError, Result};

/// Full style reset
pub const RESET: &str = "\x1b[0m";

/// Preset color names and their ANSI palette index
static PRESET_COLORS: &[(&str, u8)] = &[
    ("black", 0),
    ("red", 1),
    ("green", 2),
    ("yellow", 3),
    ("blue", 4),
    ("magenta", 5),
    ("cyan", 6),
    ("white", 7),
];

/// Preset attribute names and their SGR parameter
static PRESET_ATTRIBUTES: &[(&str, u8)] = &[
    ("bold", 1),
    ("dim", 2),
    ("italic", 3),
    ("underline", 4),
    ("blink", 5),
    ("reverse", 7),
    ("hidden", 8),
];

/// A parsed color token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// One of the eight basic palette colors
    Preset(u8),
    /// 24-bit truecolor
    Rgb { r: u8, g: u8, b: u8 },
}

impl Color {
    /// Parse a color token
    ///
    /// Returns `Ok(None)` for the empty token, which means "leave this
    /// channel alone".
    pub fn parse(token: &str) -> Result<Option<Self>> {
        if token.is_empty() {
            return Ok(None);
        }

        if let Some(hex) = token.strip_prefix('#') {
            return Self::from_hex(hex)
                .map(Some)
                .ok_or_else(|| EaselError::UnknownColor(token.to_string()));
        }

        PRESET_COLORS
            .iter()
            .find(|(name, _)| *name == token)
            .map(|&(_, index)| Some(Color::Preset(index)))
            .ok_or_else(|| EaselError::UnknownColor(token.to_string()))
    }

    /// Parse the six hex digits of a `#RRGGBB` literal
    fn from_hex(hex: &str) -> Option<Self> {
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Color::Rgb { r, g, b })
    }

    /// SGR sequence selecting this color as foreground
    pub fn foreground_code(&self) -> String {
        match self {
            Color::Preset(index) => format!("\x1b[3{}m", index),
            Color::Rgb { r, g, b } => format!("\x1b[38;2;{};{};{}m", r, g, b),
        }
    }

    /// SGR sequence selecting this color as background
    pub fn background_code(&self) -> String {
        match self {
            Color::Preset(index) => format!("\x1b[4{}m", index),
            Color::Rgb { r, g, b } => format!("\x1b[48;2;{};{};{}m", r, g, b),
        }
    }
}

/// Render a foreground color token; empty token renders to nothing
pub fn foreground(token: &str) -> Result<String> {
    Ok(Color::parse(token)?
        .map(|color| color.foreground_code())
        .unwrap_or_default())
}

/// Render a background color token; empty token renders to nothing
pub fn background(token: &str) -> Result<String> {
    Ok(Color::parse(token)?
        .map(|color| color.background_code())
        .unwrap_or_default())
}

/// Render a comma-separated attribute list
///
/// Items are trimmed and empty items are ignored, so `"bold, italic,"` is
/// the same as `"bold,italic"`.
pub fn attributes(token: &str) -> Result<String> {
    let mut codes = String::new();

    for name in token.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let (_, sgr) = PRESET_ATTRIBUTES
            .iter()
            .find(|(preset, _)| *preset == name)
            .ok_or_else(|| EaselError::UnknownAttribute(name.to_string()))?;
        codes.push_str(&format!("\x1b[{}m", sgr));
    }

    Ok(codes)
}
