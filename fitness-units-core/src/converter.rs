//! Linear conversion to and from a family's base unit.

use crate::error::{UnitsError, UnitsResult};

/// Relative tolerance used when a decoded converter is checked against the catalog.
const CONVERTER_TOLERANCE: f64 = 1e-12;

/// Anything that can move a value to and from its family's base unit.
pub trait Convertible {
    /// Converts `value` expressed in this unit to the base unit.
    fn to_base(&self, value: f64) -> f64;

    /// Converts `value` expressed in the base unit to this unit.
    fn from_base(&self, value: f64) -> f64;
}

/// `base = value * coefficient + constant`.
///
/// The coefficient is never zero, so [`LinearConverter::from_base`] is always defined.
///
/// ```rust
/// use fitness_units_core::{Convertible, LinearConverter};
///
/// let celsius = LinearConverter::new(1.0, 273.15).unwrap();
/// assert_eq!(celsius.to_base(0.0), 273.15);
/// assert!(LinearConverter::new(0.0, 1.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearConverter {
    coefficient: f64,
    constant: f64,
}

impl LinearConverter {
    /// Creates a converter, rejecting a zero or non-finite coefficient and a non-finite constant.
    pub fn new(coefficient: f64, constant: f64) -> UnitsResult<Self> {
        let reason = if coefficient == 0.0 {
            Some("coefficient must be non-zero")
        } else if !coefficient.is_finite() {
            Some("coefficient must be finite")
        } else if !constant.is_finite() {
            Some("constant must be finite")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(UnitsError::InvalidConverter {
                coefficient,
                constant,
                reason,
            }),
            None => Ok(Self {
                coefficient,
                constant,
            }),
        }
    }

    /// Creates a purely multiplicative converter (`constant == 0`).
    pub fn with_coefficient(coefficient: f64) -> UnitsResult<Self> {
        Self::new(coefficient, 0.0)
    }

    /// Converter for catalog tables; the catalog test checks every entry against
    /// [`LinearConverter::new`].
    pub(crate) const fn catalog(coefficient: f64, constant: f64) -> Self {
        Self {
            coefficient,
            constant,
        }
    }

    /// The converter of a base unit.
    pub const fn identity() -> Self {
        Self::catalog(1.0, 0.0)
    }

    #[inline]
    pub const fn coefficient(&self) -> f64 {
        self.coefficient
    }

    #[inline]
    pub const fn constant(&self) -> f64 {
        self.constant
    }

    /// True when both parameters agree within a relative tolerance of `1e-12`.
    pub fn approx_eq(&self, other: &LinearConverter) -> bool {
        close(self.coefficient, other.coefficient) && close(self.constant, other.constant)
    }
}

impl Convertible for LinearConverter {
    #[inline]
    fn to_base(&self, value: f64) -> f64 {
        value * self.coefficient + self.constant
    }

    #[inline]
    fn from_base(&self, value: f64) -> f64 {
        (value - self.constant) / self.coefficient
    }
}

fn close(a: f64, b: f64) -> bool {
    if a == b {
        return true;
    }
    let scale = a.abs().max(b.abs());
    (a - b).abs() <= CONVERTER_TOLERANCE * scale
}
