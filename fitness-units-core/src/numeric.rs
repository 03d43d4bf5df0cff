//! Validity-tagged integers and floats that remember their width on the wire.
//!
//! Each supported primitive carries a static [`NumericTag`] through the [`BinaryInteger`] and
//! [`BinaryFloatingPoint`] traits, so the tag written on encode is chosen by the type parameter at
//! compile time.

use crate::error::{UnitsError, UnitsResult};
use core::fmt;
use core::str::FromStr;

/// Width and signedness tags for integers.
///
/// `UInt` and `Int` are the 64-bit platform words; `usize` and `isize` encode with them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IntegerTag {
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    UInt,
    Int8,
    Int16,
    Int32,
    Int64,
    Int,
}

impl IntegerTag {
    pub const ALL: [IntegerTag; 10] = [
        IntegerTag::UInt8,
        IntegerTag::UInt16,
        IntegerTag::UInt32,
        IntegerTag::UInt64,
        IntegerTag::UInt,
        IntegerTag::Int8,
        IntegerTag::Int16,
        IntegerTag::Int32,
        IntegerTag::Int64,
        IntegerTag::Int,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            IntegerTag::UInt8 => "UInt8",
            IntegerTag::UInt16 => "UInt16",
            IntegerTag::UInt32 => "UInt32",
            IntegerTag::UInt64 => "UInt64",
            IntegerTag::UInt => "UInt",
            IntegerTag::Int8 => "Int8",
            IntegerTag::Int16 => "Int16",
            IntegerTag::Int32 => "Int32",
            IntegerTag::Int64 => "Int64",
            IntegerTag::Int => "Int",
        }
    }

    pub const fn is_signed(self) -> bool {
        matches!(
            self,
            IntegerTag::Int8
                | IntegerTag::Int16
                | IntegerTag::Int32
                | IntegerTag::Int64
                | IntegerTag::Int
        )
    }

    /// Inclusive range of values the tag can carry.
    pub const fn bounds(self) -> (i128, i128) {
        match self {
            IntegerTag::UInt8 => (0, u8::MAX as i128),
            IntegerTag::UInt16 => (0, u16::MAX as i128),
            IntegerTag::UInt32 => (0, u32::MAX as i128),
            IntegerTag::UInt64 | IntegerTag::UInt => (0, u64::MAX as i128),
            IntegerTag::Int8 => (i8::MIN as i128, i8::MAX as i128),
            IntegerTag::Int16 => (i16::MIN as i128, i16::MAX as i128),
            IntegerTag::Int32 => (i32::MIN as i128, i32::MAX as i128),
            IntegerTag::Int64 | IntegerTag::Int => (i64::MIN as i128, i64::MAX as i128),
        }
    }

    pub const fn contains(self, value: i128) -> bool {
        let (min, max) = self.bounds();
        value >= min && value <= max
    }
}

/// Width tags for floating point values. `Float`/`Float32` are single precision, `Float64`/`Double`
/// double.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FloatTag {
    Float,
    Float32,
    Float64,
    Double,
}

impl FloatTag {
    pub const ALL: [FloatTag; 4] = [
        FloatTag::Float,
        FloatTag::Float32,
        FloatTag::Float64,
        FloatTag::Double,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            FloatTag::Float => "Float",
            FloatTag::Float32 => "Float32",
            FloatTag::Float64 => "Float64",
            FloatTag::Double => "Double",
        }
    }

    pub const fn is_single(self) -> bool {
        matches!(self, FloatTag::Float | FloatTag::Float32)
    }
}

/// Any tag that may appear in a `unit.type` field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumericTag {
    Integer(IntegerTag),
    Float(FloatTag),
}

impl NumericTag {
    /// Parses a tag name, ignoring ASCII case.
    ///
    /// ```rust
    /// use fitness_units_core::numeric::{IntegerTag, NumericTag};
    ///
    /// assert_eq!(NumericTag::parse("uint8").unwrap(), NumericTag::Integer(IntegerTag::UInt8));
    /// assert!(NumericTag::parse("UInt128").is_err());
    /// ```
    pub fn parse(tag: &str) -> UnitsResult<Self> {
        let integer = IntegerTag::ALL
            .iter()
            .find(|t| t.name().eq_ignore_ascii_case(tag))
            .map(|t| NumericTag::Integer(*t));
        let float = || {
            FloatTag::ALL
                .iter()
                .find(|t| t.name().eq_ignore_ascii_case(tag))
                .map(|t| NumericTag::Float(*t))
        };

        integer.or_else(float).ok_or_else(|| UnitsError::UnknownNumericTag {
            tag: tag.to_string(),
        })
    }

    pub const fn name(self) -> &'static str {
        match self {
            NumericTag::Integer(tag) => tag.name(),
            NumericTag::Float(tag) => tag.name(),
        }
    }
}

impl FromStr for NumericTag {
    type Err = UnitsError;

    fn from_str(s: &str) -> UnitsResult<Self> {
        NumericTag::parse(s)
    }
}

impl fmt::Display for NumericTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Integer primitives that can live in a [`ValidatedBinaryInteger`].
pub trait BinaryInteger: Copy + fmt::Debug + fmt::Display + PartialEq + 'static {
    const TAG: IntegerTag;

    /// Lossless widening used by the codec.
    fn to_wide(self) -> i128;

    /// `None` when `value` does not fit.
    fn from_wide(value: i128) -> Option<Self>;
}

/// Floating point primitives that can live in a [`ValidatedBinaryFloatingPoint`].
pub trait BinaryFloatingPoint: Copy + fmt::Debug + fmt::Display + PartialEq + 'static {
    const TAG: FloatTag;

    fn to_f64(self) -> f64;

    /// `None` when `value` cannot be represented exactly.
    fn from_f64(value: f64) -> Option<Self>;
}

macro_rules! impl_binary_integer {
    ($($ty:ty => $tag:ident),* $(,)?) => {
        $(
            impl BinaryInteger for $ty {
                const TAG: IntegerTag = IntegerTag::$tag;

                #[inline]
                fn to_wide(self) -> i128 {
                    // every supported width is at most 64 bits
                    self as i128
                }

                #[inline]
                fn from_wide(value: i128) -> Option<Self> {
                    <$ty>::try_from(value).ok()
                }
            }
        )*
    };
}

impl_binary_integer!(
    u8 => UInt8,
    u16 => UInt16,
    u32 => UInt32,
    u64 => UInt64,
    usize => UInt,
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    isize => Int,
);

impl BinaryFloatingPoint for f32 {
    const TAG: FloatTag = FloatTag::Float;

    #[inline]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    fn from_f64(value: f64) -> Option<Self> {
        let narrowed = value as f32;
        if value.is_nan() || f64::from(narrowed) == value {
            Some(narrowed)
        } else {
            None
        }
    }
}

impl BinaryFloatingPoint for f64 {
    const TAG: FloatTag = FloatTag::Double;

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn from_f64(value: f64) -> Option<Self> {
        Some(value)
    }
}

/// An integer plus a validity flag.
///
/// ```rust
/// use fitness_units_core::ValidatedBinaryInteger;
///
/// let hr = ValidatedBinaryInteger::new(142u8, true);
/// assert_eq!(hr.to_string(), "142 UInt8");
/// assert_eq!(format!("{:#}", hr), "142 UInt8 valid: true");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ValidatedBinaryInteger<T: BinaryInteger> {
    value: T,
    valid: bool,
}

impl<T: BinaryInteger> ValidatedBinaryInteger<T> {
    #[inline]
    pub const fn new(value: T, valid: bool) -> Self {
        Self { value, valid }
    }

    #[inline]
    pub fn value(&self) -> T {
        self.value
    }

    #[inline]
    pub const fn valid(&self) -> bool {
        self.valid
    }

    #[inline]
    pub fn with_valid(self, valid: bool) -> Self {
        Self { valid, ..self }
    }

    /// Applies `f` to the value, keeping the flag.
    pub fn map_valid<R: BinaryInteger>(self, f: impl FnOnce(T) -> R) -> ValidatedBinaryInteger<R> {
        ValidatedBinaryInteger::new(f(self.value), self.valid)
    }

    /// The tag this wrapper writes on the wire.
    pub const fn tag(&self) -> IntegerTag {
        T::TAG
    }
}

impl<T: BinaryInteger> fmt::Display for ValidatedBinaryInteger<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, T::TAG.name())?;
        if f.alternate() {
            write!(f, " valid: {}", self.valid)?;
        }
        Ok(())
    }
}

/// A float plus a validity flag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValidatedBinaryFloatingPoint<T: BinaryFloatingPoint> {
    value: T,
    valid: bool,
}

impl<T: BinaryFloatingPoint> ValidatedBinaryFloatingPoint<T> {
    #[inline]
    pub const fn new(value: T, valid: bool) -> Self {
        Self { value, valid }
    }

    #[inline]
    pub fn value(&self) -> T {
        self.value
    }

    #[inline]
    pub const fn valid(&self) -> bool {
        self.valid
    }

    #[inline]
    pub fn with_valid(self, valid: bool) -> Self {
        Self { valid, ..self }
    }

    pub fn map_valid<R: BinaryFloatingPoint>(
        self,
        f: impl FnOnce(T) -> R,
    ) -> ValidatedBinaryFloatingPoint<R> {
        ValidatedBinaryFloatingPoint::new(f(self.value), self.valid)
    }

    pub const fn tag(&self) -> FloatTag {
        T::TAG
    }
}

impl<T: BinaryFloatingPoint> fmt::Display for ValidatedBinaryFloatingPoint<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, T::TAG.name())?;
        if f.alternate() {
            write!(f, " valid: {}", self.valid)?;
        }
        Ok(())
    }
}
