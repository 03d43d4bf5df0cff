//! Named value ranges such as heart rate or FTP zones.

use crate::color::Color;
use fitness_units_core::{UnitsError, UnitsResult};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::ops::RangeInclusive;

/// An inclusive `u8` range with a name and a display color.
#[derive(Clone, Debug, PartialEq)]
pub struct MeasurementZone {
    range: RangeInclusive<u8>,
    name: String,
    color: Color,
}

impl MeasurementZone {
    /// Fails with [`UnitsError::InvalidZone`] when `lower > upper`.
    ///
    /// ```rust
    /// use fitness_units::{Color, MeasurementZone};
    ///
    /// let blue = Color::rgba(0.0, 128.0, 255.0, 1.0);
    /// let z2 = MeasurementZone::new(115, 135, "Endurance", blue).unwrap();
    /// assert!(z2.contains(120));
    /// assert!(!z2.contains(136));
    /// ```
    pub fn new(lower: u8, upper: u8, name: impl Into<String>, color: Color) -> UnitsResult<Self> {
        if lower > upper {
            return Err(UnitsError::InvalidZone { lower, upper });
        }
        Ok(MeasurementZone {
            range: lower..=upper,
            name: name.into(),
            color,
        })
    }

    pub fn contains(&self, value: u8) -> bool {
        self.range.contains(&value)
    }

    pub fn range(&self) -> &RangeInclusive<u8> {
        &self.range
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> &Color {
        &self.color
    }
}

#[derive(Serialize)]
struct BoundsRecord {
    #[serde(rename = "lowerBounds")]
    lower_bounds: u8,
    #[serde(rename = "upperBounds")]
    upper_bounds: u8,
}

impl Serialize for MeasurementZone {
    /// `name`, `range` and the color's own entries, all in one map.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2 + self.color.entry_count()))?;
        map.serialize_entry("name", &self.name)?;
        map.serialize_entry(
            "range",
            &BoundsRecord {
                lower_bounds: *self.range.start(),
                upper_bounds: *self.range.end(),
            },
        )?;
        self.color.serialize_entries(&mut map)?;
        map.end()
    }
}
