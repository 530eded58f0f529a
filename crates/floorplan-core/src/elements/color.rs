//! RGBA colour with CSS-string serialization.

use std::fmt;
use std::str::FromStr;

use peniko::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure to parse a CSS colour string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color: {0:?}")]
pub struct ColorParseError(pub String);

/// Serializable color representation (RGBA8).
///
/// On the wire this is a CSS colour string (`#RRGGBB`, `#RRGGBBAA` or
/// `transparent`); parsing also accepts `#rgb`, `rgb()` and `rgba()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    pub const fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    pub const fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// Same colour with a new alpha in 0.0 - 1.0.
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self {
            a: unit_to_byte(alpha),
            ..self
        }
    }

    /// Alpha as a fraction.
    pub fn alpha(&self) -> f64 {
        f64::from(self.a) / 255.0
    }

    /// Parse a CSS colour string.
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let color = input.trim();
        let err = || ColorParseError(input.to_string());

        match color.to_ascii_lowercase().as_str() {
            "transparent" => return Ok(Self::transparent()),
            "black" => return Ok(Self::black()),
            "white" => return Ok(Self::white()),
            _ => {}
        }

        if let Some(hex) = color.strip_prefix('#') {
            if !hex.is_ascii() {
                return Err(err());
            }
            let byte = |s: &str| u8::from_str_radix(s, 16).map_err(|_| err());
            return match hex.len() {
                3 => Ok(Self::rgb(
                    byte(&hex[0..1])? * 17,
                    byte(&hex[1..2])? * 17,
                    byte(&hex[2..3])? * 17,
                )),
                6 => Ok(Self::rgb(byte(&hex[0..2])?, byte(&hex[2..4])?, byte(&hex[4..6])?)),
                8 => Ok(Self::new(
                    byte(&hex[0..2])?,
                    byte(&hex[2..4])?,
                    byte(&hex[4..6])?,
                    byte(&hex[6..8])?,
                )),
                _ => Err(err()),
            };
        }

        let lower = color.to_ascii_lowercase();
        let args = lower
            .strip_prefix("rgba(")
            .or_else(|| lower.strip_prefix("rgb("))
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(err)?;

        let parts: Vec<f64> = args
            .split(',')
            .map(|p| p.trim().parse::<f64>().map_err(|_| err()))
            .collect::<Result<_, _>>()?;

        let channel = |v: f64| v.clamp(0.0, 255.0).round() as u8;
        match parts.as_slice() {
            [r, g, b] => Ok(Self::rgb(channel(*r), channel(*g), channel(*b))),
            [r, g, b, a] => Ok(Self::new(channel(*r), channel(*g), channel(*b), unit_to_byte(*a))),
            _ => Err(err()),
        }
    }
}

fn unit_to_byte(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl Default for SerializableColor {
    fn default() -> Self {
        Self::black()
    }
}

impl fmt::Display for SerializableColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.a {
            0 if *self == Self::transparent() => f.write_str("transparent"),
            255 => write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b),
            a => write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, a),
        }
    }
}

impl FromStr for SerializableColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for SerializableColor {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<SerializableColor> for String {
    fn from(color: SerializableColor) -> Self {
        color.to_string()
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(SerializableColor::parse("#FFFFFF").unwrap(), SerializableColor::white());
        assert_eq!(SerializableColor::parse("#333").unwrap(), SerializableColor::rgb(0x33, 0x33, 0x33));
        assert_eq!(
            SerializableColor::parse("#8b451380").unwrap(),
            SerializableColor::new(0x8B, 0x45, 0x13, 0x80)
        );
    }

    #[test]
    fn test_parse_rgba() {
        let color = SerializableColor::parse("rgba(255, 249, 196, 0.7)").unwrap();
        assert_eq!(color, SerializableColor::new(255, 249, 196, 179));

        let color = SerializableColor::parse("rgb(10,20,30)").unwrap();
        assert_eq!(color, SerializableColor::rgb(10, 20, 30));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(SerializableColor::parse("#12").is_err());
        assert!(SerializableColor::parse("rgba(1,2)").is_err());
        assert!(SerializableColor::parse("chartreuse-ish").is_err());
        assert!(SerializableColor::parse("#zzzzzz").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(SerializableColor::rgb(0xE3, 0xF2, 0xFD).to_string(), "#E3F2FD");
        assert_eq!(SerializableColor::transparent().to_string(), "transparent");
        assert_eq!(SerializableColor::new(255, 255, 255, 51).to_string(), "#FFFFFF33");
    }

    #[test]
    fn test_serde_uses_css_string() {
        let json = serde_json::to_string(&SerializableColor::rgb(0x0F, 0x9D, 0x58)).unwrap();
        assert_eq!(json, "\"#0F9D58\"");
        let back: SerializableColor = serde_json::from_str("\"rgba(255, 255, 255, 0.2)\"").unwrap();
        assert_eq!(back, SerializableColor::new(255, 255, 255, 51));
    }

    #[test]
    fn test_peniko_conversion() {
        let color = SerializableColor::new(12, 34, 56, 78);
        let peniko: Color = color.into();
        assert_eq!(SerializableColor::from(peniko), color);
    }
}
