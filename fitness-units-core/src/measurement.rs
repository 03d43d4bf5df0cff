//! `ValidatedMeasurement<U>`: a value, a validity flag and a unit.
//!
//! Arithmetic between two measurements of the same unit and validity stays in that unit. Anything
//! else falls back to the family's base unit when the family has one, and to an
//! [`UnitsError::IncompatibleUnits`] error when it does not.

use crate::converter::{Convertible, LinearConverter};
use crate::error::{UnitsError, UnitsResult};
use crate::unit::{Dimension, Unit};
use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};

/// A measured value tagged with its unit and a caller-supplied validity flag.
///
/// The flag never blocks an operation. It only decides which flag the result carries.
///
/// ```rust
/// use fitness_units_core::{UnitForce, ValidatedMeasurement};
///
/// let a = ValidatedMeasurement::new(5.0, true, UnitForce::Newton);
/// let b = ValidatedMeasurement::new(1.0, true, UnitForce::KilogramForce);
/// let sum = a + b;
/// assert_eq!(sum.unit(), UnitForce::Newton);
/// assert!((sum.value() - 14.80665).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ValidatedMeasurement<U: Unit> {
    value: f64,
    valid: bool,
    unit: U,
}

impl<U: Unit> ValidatedMeasurement<U> {
    #[inline]
    pub const fn new(value: f64, valid: bool, unit: U) -> Self {
        Self { value, valid, unit }
    }

    #[inline]
    pub const fn value(&self) -> f64 {
        self.value
    }

    #[inline]
    pub const fn valid(&self) -> bool {
        self.valid
    }

    #[inline]
    pub fn unit(&self) -> U {
        self.unit
    }

    /// Same value and unit, different validity.
    #[inline]
    pub fn with_valid(self, valid: bool) -> Self {
        Self { valid, ..self }
    }

    /// Adds two measurements of the same family.
    ///
    /// Fails with [`UnitsError::IncompatibleUnits`] when the units differ and the family has no
    /// base unit to pivot through.
    pub fn try_add(self, rhs: Self) -> UnitsResult<Self> {
        self.combine(rhs, "add", |a, b| a + b)
    }

    /// Subtracts `rhs` from `self`, with the same unit rules as [`ValidatedMeasurement::try_add`].
    pub fn try_sub(self, rhs: Self) -> UnitsResult<Self> {
        self.combine(rhs, "subtract", |a, b| a - b)
    }

    fn combine(
        self,
        rhs: Self,
        operation: &'static str,
        op: fn(f64, f64) -> f64,
    ) -> UnitsResult<Self> {
        let same_unit = self.unit.same_unit(&rhs.unit);
        if same_unit && self.valid == rhs.valid {
            return Ok(Self::new(op(self.value, rhs.value), self.valid, self.unit));
        }

        match (
            self.unit.linear_converter(),
            rhs.unit.linear_converter(),
            U::base_unit(),
        ) {
            (Some(lhs_converter), Some(rhs_converter), Some(base)) => Ok(Self::in_base(
                self,
                rhs,
                lhs_converter,
                rhs_converter,
                base,
                op,
            )),
            // labels with equal symbols only differ in validity
            _ if same_unit => Ok(Self::new(op(self.value, rhs.value), self.valid, self.unit)),
            _ => Err(UnitsError::incompatible(
                operation,
                self.unit.symbol(),
                rhs.unit.symbol(),
            )),
        }
    }

    fn in_base(
        lhs: Self,
        rhs: Self,
        lhs_converter: LinearConverter,
        rhs_converter: LinearConverter,
        base: U,
        op: fn(f64, f64) -> f64,
    ) -> Self {
        log::trace!(
            "combining '{}' and '{}' in base unit '{}'",
            lhs.unit.symbol(),
            rhs.unit.symbol(),
            base.symbol()
        );
        let value = op(
            lhs_converter.to_base(lhs.value),
            rhs_converter.to_base(rhs.value),
        );
        Self::new(value, lhs.valid, base)
    }

    /// Both values in the shared base unit, when the two units have one.
    fn common_base<V: Unit>(&self, other: &ValidatedMeasurement<V>) -> Option<(f64, f64)> {
        if U::FAMILY != V::FAMILY {
            return None;
        }
        let (lhs_base, rhs_base) = (U::base_unit()?, V::base_unit()?);
        if !lhs_base.same_unit(&rhs_base) {
            return None;
        }
        let lhs = self.unit.linear_converter()?.to_base(self.value);
        let rhs = other.unit.linear_converter()?.to_base(other.value);
        Some((lhs, rhs))
    }

    /// `self < other`, comparing in the base unit when the symbols differ.
    ///
    /// Validity is ignored. Fails with [`UnitsError::IncompatibleUnits`] when the two units share
    /// no base unit.
    pub fn try_less_than<V: Unit>(&self, other: &ValidatedMeasurement<V>) -> UnitsResult<bool> {
        if self.unit.same_unit(&other.unit) {
            return Ok(self.value < other.value);
        }
        self.common_base(other)
            .map(|(lhs, rhs)| lhs < rhs)
            .ok_or_else(|| {
                UnitsError::incompatible("compare", self.unit.symbol(), other.unit.symbol())
            })
    }
}

impl<D: Dimension> ValidatedMeasurement<D> {
    /// Converts to another unit of the same family, keeping the validity flag.
    ///
    /// ```rust
    /// use fitness_units_core::{UnitLength, ValidatedMeasurement};
    ///
    /// let km = ValidatedMeasurement::new(1.0, true, UnitLength::Kilometers);
    /// let m = km.convert(UnitLength::Meters);
    /// assert_eq!(m.value(), 1000.0);
    /// ```
    pub fn convert(self, to: D) -> Self {
        Self::new(crate::unit::convert(self.value, self.unit, to), self.valid, to)
    }

    pub fn to_base_unit(self) -> Self {
        self.convert(D::base())
    }

    /// `self < other` within one family. Never fails.
    pub fn less_than(&self, other: &Self) -> bool {
        if self.unit.same_unit(&other.unit) {
            self.value < other.value
        } else {
            self.unit.to_base(self.value) < other.unit.to_base(other.value)
        }
    }

    fn combine_dimension(self, rhs: Self, op: fn(f64, f64) -> f64) -> Self {
        if self.unit.same_unit(&rhs.unit) && self.valid == rhs.valid {
            Self::new(op(self.value, rhs.value), self.valid, self.unit)
        } else {
            Self::in_base(self, rhs, self.unit.converter(), rhs.unit.converter(), D::base(), op)
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Dimension> Add for ValidatedMeasurement<D> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.combine_dimension(rhs, |a, b| a + b)
    }
}

impl<D: Dimension> Sub for ValidatedMeasurement<D> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.combine_dimension(rhs, |a, b| a - b)
    }
}

impl<U: Unit> Mul<f64> for ValidatedMeasurement<U> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.value * rhs, self.valid, self.unit)
    }
}

impl<U: Unit> Mul<ValidatedMeasurement<U>> for f64 {
    type Output = ValidatedMeasurement<U>;
    #[inline]
    fn mul(self, rhs: ValidatedMeasurement<U>) -> ValidatedMeasurement<U> {
        ValidatedMeasurement::new(self * rhs.value, rhs.valid, rhs.unit)
    }
}

impl<U: Unit> Div<f64> for ValidatedMeasurement<U> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::new(self.value / rhs, self.valid, self.unit)
    }
}

impl<U: Unit> Div<ValidatedMeasurement<U>> for f64 {
    type Output = ValidatedMeasurement<U>;
    #[inline]
    fn div(self, rhs: ValidatedMeasurement<U>) -> ValidatedMeasurement<U> {
        ValidatedMeasurement::new(self / rhs.value, rhs.valid, rhs.unit)
    }
}

impl<U: Unit> Neg for ValidatedMeasurement<U> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.value, self.valid, self.unit)
    }
}

/// Equal symbols compare value and validity. Different symbols compare in the shared base unit, and
/// units without one are never equal.
impl<U: Unit, V: Unit> PartialEq<ValidatedMeasurement<V>> for ValidatedMeasurement<U> {
    fn eq(&self, other: &ValidatedMeasurement<V>) -> bool {
        if self.unit.same_unit(&other.unit) {
            return self.value == other.value && self.valid == other.valid;
        }
        match self.common_base(other) {
            Some((lhs, rhs)) => lhs == rhs && self.valid == other.valid,
            None => false,
        }
    }
}

impl<U: Unit> fmt::Display for ValidatedMeasurement<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit.symbol())?;
        if f.alternate() {
            write!(f, " valid: {}", self.valid)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{
        UnitCadence, UnitConcentrationMass, UnitCount, UnitForce, UnitMass, UnitTemperature,
    };
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;

    fn newtons(v: f64) -> ValidatedMeasurement<UnitForce> {
        ValidatedMeasurement::new(v, true, UnitForce::Newton)
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Conversion
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn convert_keeps_validity() {
        let m = ValidatedMeasurement::new(1000.0, false, UnitConcentrationMass::MilligramsPerLiter);
        let g = m.convert(UnitConcentrationMass::GramsPerLiter);
        assert_relative_eq!(g.value(), 1.0, max_relative = 1e-12);
        assert!(!g.valid());

        let kg = m.convert(UnitConcentrationMass::KilogramsPerLiter);
        assert_relative_eq!(kg.value(), 0.001, max_relative = 1e-12);
        assert_eq!(kg.unit(), UnitConcentrationMass::KilogramsPerLiter);
    }

    #[test]
    fn to_base_unit() {
        let k = ValidatedMeasurement::new(0.0, true, UnitTemperature::Celsius).to_base_unit();
        assert_eq!(k.unit(), UnitTemperature::Kelvin);
        assert_eq!(k.value(), 273.15);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Arithmetic
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn add_mixed_units_lands_in_base() {
        let sum = newtons(5.0) + ValidatedMeasurement::new(1.0, true, UnitForce::KilogramForce);
        assert_eq!(sum.unit(), UnitForce::Newton);
        assert_abs_diff_eq!(sum.value(), 14.80665, epsilon = 1e-12);
        assert!(sum.valid());
    }

    #[test]
    fn mixed_validity_takes_lhs_flag_and_base_unit() {
        let lhs = ValidatedMeasurement::new(2.0, false, UnitMass::Grams);
        let rhs = ValidatedMeasurement::new(3.0, true, UnitMass::Grams);
        let diff = lhs - rhs;
        assert_eq!(diff.unit(), UnitMass::Kilograms);
        assert_abs_diff_eq!(diff.value(), -0.001, epsilon = 1e-15);
        assert!(!diff.valid());
    }

    #[test]
    fn same_unit_add_stays_put() {
        let lhs = ValidatedMeasurement::new(2.0, true, UnitMass::Grams);
        let sum = lhs + lhs;
        assert_eq!(sum.unit(), UnitMass::Grams);
        assert_eq!(sum.value(), 4.0);
    }

    #[test]
    fn labels_need_equal_symbols() {
        let bpm = ValidatedMeasurement::new(60.0, true, UnitCadence::BeatsPerMinute);
        let rpm = ValidatedMeasurement::new(90.0, true, UnitCadence::RevolutionsPerMinute);

        let err = bpm.try_add(rpm).unwrap_err();
        assert!(matches!(
            err,
            UnitsError::IncompatibleUnits { operation: "add", ref lhs, ref rhs }
                if lhs == "BPM" && rhs == "RPM"
        ));

        let sum = bpm.try_add(bpm).unwrap();
        assert_eq!(sum.value(), 120.0);
        assert_eq!(sum.unit(), UnitCadence::BeatsPerMinute);
    }

    #[test]
    fn labels_with_mixed_validity_keep_unit() {
        let lhs = ValidatedMeasurement::new(10.0, false, UnitCount::Steps);
        let rhs = ValidatedMeasurement::new(4.0, true, UnitCount::Steps);
        let diff = lhs.try_sub(rhs).unwrap();
        assert_eq!(diff.value(), 6.0);
        assert_eq!(diff.unit(), UnitCount::Steps);
        assert!(!diff.valid());
    }

    #[test]
    fn try_add_matches_operator_for_dimensions() {
        let kgf = ValidatedMeasurement::new(1.0, true, UnitForce::KilogramForce);
        assert_eq!(newtons(5.0).try_add(kgf).unwrap(), newtons(5.0) + kgf);
    }

    #[test]
    fn scalar_operators() {
        let m = ValidatedMeasurement::new(10.0, false, UnitForce::PoundForce);
        assert_eq!((m * 2.0).value(), 20.0);
        assert_eq!((2.0 * m).value(), 20.0);
        assert_eq!((m / 4.0).value(), 2.5);
        assert_eq!((100.0 / m).value(), 10.0);
        assert_eq!((-m).value(), -10.0);
        assert_eq!((m * 2.0).unit(), UnitForce::PoundForce);
        assert!(!(100.0 / m).valid());
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Comparison
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn equality_across_units() {
        let g = ValidatedMeasurement::new(1000.0, true, UnitMass::Grams);
        let kg = ValidatedMeasurement::new(1.0, true, UnitMass::Kilograms);
        assert_eq!(g, kg);
        assert_ne!(g, kg.with_valid(false));
    }

    #[test]
    fn equality_across_families_is_false() {
        let n = newtons(1.0);
        let steps = ValidatedMeasurement::new(1.0, true, UnitCount::Steps);
        assert!(n != steps);
    }

    #[test]
    fn less_than() {
        let g = ValidatedMeasurement::new(999.0, true, UnitMass::Grams);
        let kg = ValidatedMeasurement::new(1.0, false, UnitMass::Kilograms);
        assert!(g.less_than(&kg));
        assert!(g.try_less_than(&kg).unwrap());
        assert!(!kg.less_than(&g));
    }

    #[test]
    fn less_than_without_common_base_fails() {
        let bpm = ValidatedMeasurement::new(60.0, true, UnitCadence::BeatsPerMinute);
        let rpm = ValidatedMeasurement::new(90.0, true, UnitCadence::RevolutionsPerMinute);
        assert!(bpm.try_less_than(&bpm.with_valid(false)).is_ok());
        let err = bpm.try_less_than(&rpm).unwrap_err();
        assert!(matches!(err, UnitsError::IncompatibleUnits { operation: "compare", .. }));

        let n = newtons(1.0);
        assert!(n.try_less_than(&bpm).is_err());
    }

    #[test]
    fn display() {
        let m = ValidatedMeasurement::new(5.5, true, UnitForce::Newton);
        assert_eq!(m.to_string(), "5.5 N");
        assert_eq!(format!("{:#}", m), "5.5 N valid: true");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Properties
    // ─────────────────────────────────────────────────────────────────────────────

    fn any_force() -> impl Strategy<Value = UnitForce> {
        prop::sample::select(UnitForce::units().to_vec())
    }

    proptest! {
        #[test]
        fn prop_same_unit_add_is_plain_sum(
            unit in any_force(),
            a in -1e6..1e6f64,
            b in -1e6..1e6f64,
            valid in any::<bool>(),
        ) {
            let sum = ValidatedMeasurement::new(a, valid, unit)
                + ValidatedMeasurement::new(b, valid, unit);
            prop_assert_eq!(sum.value(), a + b);
            prop_assert_eq!(sum.unit(), unit);
            prop_assert_eq!(sum.valid(), valid);
        }

        #[test]
        fn prop_mixed_unit_add_is_base_sum(
            lhs in any_force(),
            rhs in any_force(),
            a in -1e6..1e6f64,
            b in -1e6..1e6f64,
        ) {
            prop_assume!(lhs != rhs);
            let sum = ValidatedMeasurement::new(a, true, lhs)
                + ValidatedMeasurement::new(b, true, rhs);
            let expected = lhs.to_base(a) + rhs.to_base(b);
            prop_assert_eq!(sum.unit(), UnitForce::Newton);
            prop_assert!((sum.value() - expected).abs() <= 1e-9 * expected.abs().max(1.0));
        }

        #[test]
        fn prop_identity_convert_is_exact(unit in any_force(), v in prop::num::f64::NORMAL) {
            let m = ValidatedMeasurement::new(v, true, unit).convert(unit);
            prop_assert_eq!(m.value().to_bits(), v.to_bits());
        }
    }
}
