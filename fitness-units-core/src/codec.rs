//! Self-describing serde support.
//!
//! ```json
//! {"value": 5.0, "valid": true,
//!  "unit": {"symbol": "N", "converter": {"coefficient": 1.0, "constant": 0.0}}}
//! {"value": 142, "valid": true, "unit": {"type": "UInt8"}}
//! ```
//!
//! Measurements carry their unit symbol and, for dimensional families only, the unit's converter.
//! Numeric wrappers carry a width tag. On decode the unit family or the numeric type comes from the
//! type parameter; the payload is only checked against it.
//!
//! Numeric payloads whose tag differs from the target type are widened freely. Narrowing is
//! accepted only when the value fits: first the tag's own width, then the target's. Anything else
//! is [`UnitsError::ValueOutOfRange`].

use crate::converter::LinearConverter;
use crate::error::{UnitsError, UnitsResult};
use crate::measurement::ValidatedMeasurement;
use crate::numeric::{
    BinaryFloatingPoint, BinaryInteger, FloatTag, IntegerTag, NumericTag,
    ValidatedBinaryFloatingPoint, ValidatedBinaryInteger,
};
use crate::unit::Unit;
use core::fmt;
use core::marker::PhantomData;
use serde::de::{self, DeserializeOwned, Deserializer, MapAccess, Visitor};
use serde::ser::{self, SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};

/// `unit.converter` record.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConverterRecord {
    pub coefficient: f64,
    pub constant: f64,
}

impl From<LinearConverter> for ConverterRecord {
    fn from(converter: LinearConverter) -> Self {
        ConverterRecord {
            coefficient: converter.coefficient(),
            constant: converter.constant(),
        }
    }
}

impl TryFrom<ConverterRecord> for LinearConverter {
    type Error = UnitsError;

    fn try_from(record: ConverterRecord) -> UnitsResult<Self> {
        LinearConverter::new(record.coefficient, record.constant)
    }
}

/// `unit` record of a measurement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UnitRecord {
    pub symbol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub converter: Option<ConverterRecord>,
}

impl UnitRecord {
    pub fn from_unit<U: Unit>(unit: &U) -> Self {
        UnitRecord {
            symbol: unit.symbol().to_string(),
            converter: unit.linear_converter().map(ConverterRecord::from),
        }
    }

    /// Rebuilds a `U` through [`Unit::from_parts`].
    pub fn into_unit<U: Unit>(self) -> UnitsResult<U> {
        let converter = self.converter.map(LinearConverter::try_from).transpose()?;
        U::from_parts(&self.symbol, converter)
    }
}

/// `unit` record of a numeric wrapper.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRecord {
    #[serde(rename = "type")]
    pub type_name: String,
}

impl TypeRecord {
    pub fn new(tag: NumericTag) -> Self {
        TypeRecord {
            type_name: tag.name().to_string(),
        }
    }

    pub fn tag(&self) -> UnitsResult<NumericTag> {
        NumericTag::parse(&self.type_name)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// JSON helpers
// ─────────────────────────────────────────────────────────────────────────────

pub fn to_json<T: Serialize>(value: &T) -> UnitsResult<String> {
    Ok(serde_json::to_string(value)?)
}

pub fn to_json_pretty<T: Serialize>(value: &T) -> UnitsResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Decodes any of the wrappers from JSON.
///
/// A field that fails to decode is reported by its path ([`UnitsError::Decode`]).
///
/// ```rust
/// use fitness_units_core::{codec, UnitForce, ValidatedMeasurement};
///
/// let json = r#"{"value":2.0,"valid":true,
///     "unit":{"symbol":"kgf","converter":{"coefficient":9.80665,"constant":0.0}}}"#;
/// let m: ValidatedMeasurement<UnitForce> = codec::from_json(json).unwrap();
/// assert_eq!(m.unit(), UnitForce::KilogramForce);
///
/// let bad = r#"{"value":"2.0","valid":true,"unit":{"symbol":"N"}}"#;
/// let err = codec::from_json::<ValidatedMeasurement<UnitForce>>(bad).unwrap_err();
/// assert!(err.to_string().starts_with("value: "));
/// ```
pub fn from_json<T: DeserializeOwned>(json: &str) -> UnitsResult<T> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    let value = serde_path_to_error::deserialize(&mut deserializer)?;
    deserializer.end()?;
    Ok(value)
}

// ─────────────────────────────────────────────────────────────────────────────
// Shared field handling
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(field_identifier, rename_all = "lowercase")]
enum Field {
    Value,
    Valid,
    Unit,
    #[serde(other)]
    Other,
}

const FIELDS: &[&str] = &["value", "valid", "unit"];

fn set_once<T, E: de::Error>(slot: &mut Option<T>, value: T, name: &'static str) -> Result<(), E> {
    if slot.is_some() {
        return Err(E::duplicate_field(name));
    }
    *slot = Some(value);
    Ok(())
}

/// NaN and the infinities have no JSON number form, so they are refused instead of written as
/// `null`.
fn check_finite<S: Serializer>(value: f64) -> Result<(), S::Error> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ser::Error::custom(format_args!("value: {} cannot be encoded", value)))
    }
}

/// A numeric payload as read from the wire, before the tag is known.
#[derive(Clone, Copy, Debug)]
enum WireNumber {
    Signed(i128),
    Float(f64),
}

impl<'de> Deserialize<'de> for WireNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct WireNumberVisitor;

        impl<'de> Visitor<'de> for WireNumberVisitor {
            type Value = WireNumber;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a number")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<WireNumber, E> {
                Ok(WireNumber::Signed(i128::from(v)))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<WireNumber, E> {
                Ok(WireNumber::Signed(i128::from(v)))
            }

            fn visit_i128<E: de::Error>(self, v: i128) -> Result<WireNumber, E> {
                Ok(WireNumber::Signed(v))
            }

            fn visit_u128<E: de::Error>(self, v: u128) -> Result<WireNumber, E> {
                i128::try_from(v)
                    .map(WireNumber::Signed)
                    .map_err(|_| E::custom(format!("value: {} is too large", v)))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<WireNumber, E> {
                Ok(WireNumber::Float(v))
            }
        }

        deserializer.deserialize_any(WireNumberVisitor)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ValidatedMeasurement
// ─────────────────────────────────────────────────────────────────────────────

impl<U: Unit> Serialize for ValidatedMeasurement<U> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        check_finite::<S>(self.value())?;
        let mut state = serializer.serialize_struct("ValidatedMeasurement", 3)?;
        state.serialize_field("value", &self.value())?;
        state.serialize_field("valid", &self.valid())?;
        state.serialize_field("unit", &UnitRecord::from_unit(&self.unit()))?;
        state.end()
    }
}

impl<'de, U: Unit> Deserialize<'de> for ValidatedMeasurement<U> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MeasurementVisitor<U>(PhantomData<U>);

        impl<'de, U: Unit> Visitor<'de> for MeasurementVisitor<U> {
            type Value = ValidatedMeasurement<U>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(formatter, "a {} measurement with value, valid and unit fields", U::FAMILY)
            }

            fn visit_map<M: MapAccess<'de>>(self, mut map: M) -> Result<Self::Value, M::Error> {
                let mut value: Option<f64> = None;
                let mut valid: Option<bool> = None;
                let mut unit: Option<UnitRecord> = None;

                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Value => set_once(&mut value, map.next_value()?, "value"),
                        Field::Valid => set_once(&mut valid, map.next_value()?, "valid"),
                        Field::Unit => set_once(&mut unit, map.next_value()?, "unit"),
                        Field::Other => map.next_value::<de::IgnoredAny>().map(|_| ()),
                    }?;
                }

                let value = value.ok_or_else(|| de::Error::missing_field("value"))?;
                let valid = valid.ok_or_else(|| de::Error::missing_field("valid"))?;
                let unit = unit
                    .ok_or_else(|| de::Error::missing_field("unit"))?
                    .into_unit::<U>()
                    .map_err(de::Error::custom)?;

                Ok(ValidatedMeasurement::new(value, valid, unit))
            }
        }

        deserializer.deserialize_struct(
            "ValidatedMeasurement",
            FIELDS,
            MeasurementVisitor(PhantomData),
        )
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ValidatedBinaryInteger
// ─────────────────────────────────────────────────────────────────────────────

impl<T: BinaryInteger> Serialize for ValidatedBinaryInteger<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let wide = self.value().to_wide();
        let mut state = serializer.serialize_struct("ValidatedBinaryInteger", 3)?;
        if T::TAG.is_signed() {
            let value = i64::try_from(wide).map_err(ser::Error::custom)?;
            state.serialize_field("value", &value)?;
        } else {
            let value = u64::try_from(wide).map_err(ser::Error::custom)?;
            state.serialize_field("value", &value)?;
        }
        state.serialize_field("valid", &self.valid())?;
        state.serialize_field("unit", &TypeRecord::new(NumericTag::Integer(T::TAG)))?;
        state.end()
    }
}

/// Narrows or widens an integer payload tagged `tag` into `T`.
pub(crate) fn integer_from_wire<T: BinaryInteger>(tag: IntegerTag, value: i128) -> UnitsResult<T> {
    let out_of_range = |target: &'static str| UnitsError::ValueOutOfRange {
        value: value.to_string(),
        tag: tag.name().to_string(),
        target,
    };

    if !tag.contains(value) {
        return Err(out_of_range(tag.name()));
    }
    let decoded = T::from_wide(value).ok_or_else(|| out_of_range(T::TAG.name()))?;
    if tag != T::TAG {
        log::debug!("decoded {} payload {} into {}", tag.name(), value, T::TAG.name());
    }
    Ok(decoded)
}

impl<'de, T: BinaryInteger> Deserialize<'de> for ValidatedBinaryInteger<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IntegerVisitor<T>(PhantomData<T>);

        impl<'de, T: BinaryInteger> Visitor<'de> for IntegerVisitor<T> {
            type Value = ValidatedBinaryInteger<T>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(formatter, "a validated {} with value, valid and unit fields", T::TAG.name())
            }

            fn visit_map<M: MapAccess<'de>>(self, mut map: M) -> Result<Self::Value, M::Error> {
                let mut value: Option<WireNumber> = None;
                let mut valid: Option<bool> = None;
                let mut unit: Option<TypeRecord> = None;

                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Value => set_once(&mut value, map.next_value()?, "value"),
                        Field::Valid => set_once(&mut valid, map.next_value()?, "valid"),
                        Field::Unit => set_once(&mut unit, map.next_value()?, "unit"),
                        Field::Other => map.next_value::<de::IgnoredAny>().map(|_| ()),
                    }?;
                }

                let value = value.ok_or_else(|| de::Error::missing_field("value"))?;
                let valid = valid.ok_or_else(|| de::Error::missing_field("valid"))?;
                let unit = unit.ok_or_else(|| de::Error::missing_field("unit"))?;

                let tag = match unit.tag().map_err(de::Error::custom)? {
                    NumericTag::Integer(tag) => tag,
                    NumericTag::Float(tag) => {
                        return Err(de::Error::custom(UnitsError::TagKindMismatch {
                            tag: tag.name().to_string(),
                            expected: "an integer",
                        }))
                    }
                };
                let value = match value {
                    WireNumber::Signed(v) => v,
                    WireNumber::Float(v) => {
                        return Err(de::Error::custom(format!(
                            "value: expected an integer for tag '{}', found {}",
                            tag.name(),
                            v
                        )))
                    }
                };

                let value = integer_from_wire::<T>(tag, value).map_err(de::Error::custom)?;
                Ok(ValidatedBinaryInteger::new(value, valid))
            }
        }

        deserializer.deserialize_struct(
            "ValidatedBinaryInteger",
            FIELDS,
            IntegerVisitor(PhantomData),
        )
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ValidatedBinaryFloatingPoint
// ─────────────────────────────────────────────────────────────────────────────

impl<T: BinaryFloatingPoint> Serialize for ValidatedBinaryFloatingPoint<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let value = self.value().to_f64();
        check_finite::<S>(value)?;
        let mut state = serializer.serialize_struct("ValidatedBinaryFloatingPoint", 3)?;
        if T::TAG.is_single() {
            // f32 prints its shortest form, which is what single-precision readers expect
            state.serialize_field("value", &(value as f32))?;
        } else {
            state.serialize_field("value", &value)?;
        }
        state.serialize_field("valid", &self.valid())?;
        state.serialize_field("unit", &TypeRecord::new(NumericTag::Float(T::TAG)))?;
        state.end()
    }
}

/// Narrows or widens a float payload tagged `tag` into `T`.
///
/// A single-precision tag reads the payload at single precision. Narrowing a double into `f32` must
/// be exact.
pub(crate) fn float_from_wire<T: BinaryFloatingPoint>(tag: FloatTag, value: f64) -> UnitsResult<T> {
    let out_of_range = |target: &'static str| UnitsError::ValueOutOfRange {
        value: value.to_string(),
        tag: tag.name().to_string(),
        target,
    };

    let value = if tag.is_single() {
        let single = value as f32;
        if value.is_finite() && single.is_infinite() {
            return Err(out_of_range(tag.name()));
        }
        f64::from(single)
    } else {
        value
    };

    let decoded = T::from_f64(value).ok_or_else(|| out_of_range(T::TAG.name()))?;
    if tag.is_single() != T::TAG.is_single() {
        log::debug!("decoded {} payload {} into {}", tag.name(), value, T::TAG.name());
    }
    Ok(decoded)
}

impl<'de, T: BinaryFloatingPoint> Deserialize<'de> for ValidatedBinaryFloatingPoint<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FloatVisitor<T>(PhantomData<T>);

        impl<'de, T: BinaryFloatingPoint> Visitor<'de> for FloatVisitor<T> {
            type Value = ValidatedBinaryFloatingPoint<T>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(formatter, "a validated {} with value, valid and unit fields", T::TAG.name())
            }

            fn visit_map<M: MapAccess<'de>>(self, mut map: M) -> Result<Self::Value, M::Error> {
                let mut value: Option<WireNumber> = None;
                let mut valid: Option<bool> = None;
                let mut unit: Option<TypeRecord> = None;

                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Value => set_once(&mut value, map.next_value()?, "value"),
                        Field::Valid => set_once(&mut valid, map.next_value()?, "valid"),
                        Field::Unit => set_once(&mut unit, map.next_value()?, "unit"),
                        Field::Other => map.next_value::<de::IgnoredAny>().map(|_| ()),
                    }?;
                }

                let value = value.ok_or_else(|| de::Error::missing_field("value"))?;
                let valid = valid.ok_or_else(|| de::Error::missing_field("valid"))?;
                let unit = unit.ok_or_else(|| de::Error::missing_field("unit"))?;

                let tag = match unit.tag().map_err(de::Error::custom)? {
                    NumericTag::Float(tag) => tag,
                    NumericTag::Integer(tag) => {
                        return Err(de::Error::custom(UnitsError::TagKindMismatch {
                            tag: tag.name().to_string(),
                            expected: "a floating point",
                        }))
                    }
                };
                let value = match value {
                    WireNumber::Float(v) => v,
                    // whole numbers may be written without a fraction
                    WireNumber::Signed(v) => v as f64,
                };

                let value = float_from_wire::<T>(tag, value).map_err(de::Error::custom)?;
                Ok(ValidatedBinaryFloatingPoint::new(value, valid))
            }
        }

        deserializer.deserialize_struct(
            "ValidatedBinaryFloatingPoint",
            FIELDS,
            FloatVisitor(PhantomData),
        )
    }
}
