//! Text values tagged with a unit (device names, labels read from sensors, …).

use fitness_units_core::codec::UnitRecord;
use fitness_units_core::{Unit, UnitsError};
use serde::de::{self, Deserializer};
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A string value with a unit. Equal when both the symbol and the text match.
#[derive(Clone, Debug)]
pub struct StringMeasurement<U: Unit> {
    value: String,
    unit: U,
}

impl<U: Unit> StringMeasurement<U> {
    pub fn new(value: impl Into<String>, unit: U) -> Self {
        StringMeasurement {
            value: value.into(),
            unit,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn unit(&self) -> U {
        self.unit
    }
}

impl<U: Unit, V: Unit> PartialEq<StringMeasurement<V>> for StringMeasurement<U> {
    fn eq(&self, other: &StringMeasurement<V>) -> bool {
        self.unit.same_unit(&other.unit) && self.value == other.value
    }
}

impl<U: Unit> fmt::Display for StringMeasurement<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit.symbol())
    }
}

#[derive(Serialize)]
struct SymbolRecord<'a> {
    symbol: &'a str,
}

impl<U: Unit> Serialize for StringMeasurement<U> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("StringMeasurement", 2)?;
        state.serialize_field("value", &self.value)?;
        state.serialize_field(
            "unit",
            &SymbolRecord {
                symbol: self.unit.symbol(),
            },
        )?;
        state.end()
    }
}

#[derive(Deserialize)]
struct StringMeasurementRecord {
    value: String,
    unit: UnitRecord,
}

impl<'de, U: Unit> Deserialize<'de> for StringMeasurement<U> {
    /// Only the symbol is read; a converter record, if present, is ignored.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let record = StringMeasurementRecord::deserialize(deserializer)?;
        let unit = U::from_symbol(&record.unit.symbol).ok_or_else(|| {
            de::Error::custom(UnitsError::UnknownSymbol {
                family: U::FAMILY,
                symbol: record.unit.symbol.clone(),
            })
        })?;
        Ok(StringMeasurement::new(record.value, unit))
    }
}
