//! Custom serialization helpers for [Color].
//!
//! Colors are written as `#rrggbb` when opaque and `#rrggbbaa` otherwise.
//! Use with `#[serde(with = "viewkit_core::serde_color")]`, or
//! `serde_color::option` for `Option<Color>` fields.

use serde::{Deserialize, Deserializer, Serializer};
use vello::peniko::Color;

/// Serialize a Color as a hex string.
pub fn serialize<S>(color: &Color, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&to_hex(*color))
}

/// Deserialize a Color from a hex string.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    let hex = String::deserialize(deserializer)?;
    parse_hex_color(&hex).map_err(Error::custom)
}

/// Helpers for `Option<Color>` fields.
///
/// `None` is spelled `"none"`, so a file can say "no color" explicitly
/// instead of leaving the field out.
pub mod option {
    use super::{parse_hex_color, to_hex};
    use serde::{Deserialize, Deserializer, Serializer};
    use vello::peniko::Color;

    /// Serialize an optional Color as a hex string or `"none"`.
    pub fn serialize<S>(color: &Option<Color>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match color {
            Some(color) => serializer.serialize_str(&to_hex(*color)),
            None => serializer.serialize_str("none"),
        }
    }

    /// Deserialize an optional Color from a hex string or `"none"`.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Color>, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;
        let value = String::deserialize(deserializer)?;
        if value.eq_ignore_ascii_case("none") {
            return Ok(None);
        }
        parse_hex_color(&value).map(Some).map_err(Error::custom)
    }
}

fn to_hex(color: Color) -> String {
    let rgba = color.to_rgba8();
    if rgba.a == 255 {
        format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
    } else {
        format!("#{:02x}{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b, rgba.a)
    }
}

fn parse_hex_color(hex: &str) -> Result<Color, String> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(format!("Invalid hex color '{}'", hex));
    }
    let channel = |range: std::ops::Range<usize>| {
        digits
            .get(range)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
            .ok_or_else(|| format!("Invalid hex color '{}'", hex))
    };

    match digits.len() {
        6 => Ok(Color::from_rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
        8 => Ok(Color::from_rgba8(
            channel(0..2)?,
            channel(2..4)?,
            channel(4..6)?,
            channel(6..8)?,
        )),
        _ => Err("Hex color must be 6 or 8 characters".to_string()),
    }
}
