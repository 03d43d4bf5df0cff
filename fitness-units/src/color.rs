//! Display colors attached to measurement zones.

use fitness_units_core::{UnitsError, UnitsResult};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// An RGB color with alpha, optionally remembered as a hex string.
///
/// Channels are in `0.0..=255.0`, alpha in `0.0..=1.0`.
#[derive(Clone, Debug, PartialEq)]
pub struct Color {
    red: f32,
    green: f32,
    blue: f32,
    alpha: f32,
    hex: Option<String>,
}

impl Color {
    /// Builds a color from channel values. Alpha is clamped to `0.0..=1.0`.
    pub fn rgba(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Color {
            red,
            green,
            blue,
            alpha: alpha.clamp(0.0, 1.0),
            hex: None,
        }
    }

    /// Parses `RRGGBB` or `RGB`, with an optional `#` or `0x` prefix.
    ///
    /// ```rust
    /// use fitness_units::Color;
    ///
    /// let c = Color::from_hex("#f80", 2.0).unwrap();
    /// assert_eq!(c.hex(), Some("FF8800"));
    /// assert_eq!((c.red(), c.green(), c.blue(), c.alpha()), (255.0, 136.0, 0.0, 1.0));
    /// ```
    pub fn from_hex(hex: &str, alpha: f32) -> UnitsResult<Self> {
        let digits = hex
            .strip_prefix("0x")
            .or_else(|| hex.strip_prefix("0X"))
            .or_else(|| hex.strip_prefix('#'))
            .unwrap_or(hex);

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(UnitsError::InvalidColor(format!("'{}' is not a hex color", hex)));
        }

        let digits = match digits.len() {
            6 => digits.to_ascii_uppercase(),
            3 => digits
                .chars()
                .flat_map(|c| [c, c])
                .collect::<String>()
                .to_ascii_uppercase(),
            n => {
                return Err(UnitsError::InvalidColor(format!(
                    "'{}' has {} digits, expected 3 or 6",
                    hex, n
                )))
            }
        };

        let rgb = u32::from_str_radix(&digits, 16)
            .map_err(|e| UnitsError::InvalidColor(format!("'{}': {}", hex, e)))?;
        let channel = |shift: u32| f32::from(((rgb >> shift) & 0xFF) as u8);

        Ok(Color {
            red: channel(16),
            green: channel(8),
            blue: channel(0),
            alpha: alpha.clamp(0.0, 1.0),
            hex: Some(digits),
        })
    }

    pub fn red(&self) -> f32 {
        self.red
    }

    pub fn green(&self) -> f32 {
        self.green
    }

    pub fn blue(&self) -> f32 {
        self.blue
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Uppercase hex digits, when the color was built from a hex string.
    pub fn hex(&self) -> Option<&str> {
        self.hex.as_deref()
    }

    /// Writes `alpha` and then either `hex` or the three channels into an open map.
    pub(crate) fn serialize_entries<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        map.serialize_entry("alpha", &self.alpha)?;
        match &self.hex {
            Some(hex) => map.serialize_entry("hex", hex)?,
            None => {
                map.serialize_entry("red", &self.red)?;
                map.serialize_entry("green", &self.green)?;
                map.serialize_entry("blue", &self.blue)?;
            }
        }
        Ok(())
    }

    pub(crate) fn entry_count(&self) -> usize {
        if self.hex.is_some() {
            2
        } else {
            4
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entry_count()))?;
        self.serialize_entries(&mut map)?;
        map.end()
    }
}
