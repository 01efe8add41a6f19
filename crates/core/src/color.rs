//! Color string parsing for rendering layers.
//!
//! Accepted forms:
//! - `#rgb` and `#rrggbb` (hex digits, any case)
//! - `rgb(r, g, b)` with components in 0..=255
//! - a small set of CSS named colors

use thiserror::Error;

use crate::types::Rgb;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("empty color string")]
    Empty,

    #[error("invalid hex color '{0}': expected #rgb or #rrggbb")]
    InvalidHex(String),

    #[error("invalid rgb() color '{0}': expected rgb(r, g, b) with components 0-255")]
    InvalidRgbFunction(String),

    #[error("unknown color name '{0}'")]
    UnknownName(String),
}

const NAMED: &[(&str, Rgb)] = &[
    ("black", Rgb::new(0, 0, 0)),
    ("white", Rgb::new(255, 255, 255)),
    ("red", Rgb::new(255, 0, 0)),
    ("green", Rgb::new(0, 128, 0)),
    ("lime", Rgb::new(0, 255, 0)),
    ("blue", Rgb::new(0, 0, 255)),
    ("yellow", Rgb::new(255, 255, 0)),
    ("cyan", Rgb::new(0, 255, 255)),
    ("magenta", Rgb::new(255, 0, 255)),
    ("orange", Rgb::new(255, 165, 0)),
    ("purple", Rgb::new(128, 0, 128)),
    ("pink", Rgb::new(255, 192, 203)),
    ("brown", Rgb::new(165, 42, 42)),
    ("gray", Rgb::new(128, 128, 128)),
    ("grey", Rgb::new(128, 128, 128)),
    ("teal", Rgb::new(0, 128, 128)),
    ("navy", Rgb::new(0, 0, 128)),
];

/// Parse a color string into an [`Rgb`].
pub fn parse_color(s: &str) -> Result<Rgb, ColorError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ColorError::Empty);
    }
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| ColorError::InvalidHex(s.to_string()));
    }

    let lower = s.to_ascii_lowercase();
    if let Some(args) = lower
        .strip_prefix("rgb(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        return parse_rgb_args(args).ok_or_else(|| ColorError::InvalidRgbFunction(s.to_string()));
    }

    NAMED
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|(_, rgb)| *rgb)
        .ok_or_else(|| ColorError::UnknownName(s.to_string()))
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 => {
            let mut c = hex.chars().map(|ch| ch.to_digit(16).map(|d| (d * 17) as u8));
            Some(Rgb::new(c.next()??, c.next()??, c.next()??))
        }
        6 => {
            let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            Some(Rgb::new(byte(0)?, byte(2)?, byte(4)?))
        }
        _ => None,
    }
}

fn parse_rgb_args(args: &str) -> Option<Rgb> {
    let mut parts = args.split(',').map(|p| p.trim().parse::<u8>().ok());
    let rgb = Rgb::new(parts.next()??, parts.next()??, parts.next()??);
    if parts.next().is_some() {
        return None;
    }
    Some(rgb)
}
