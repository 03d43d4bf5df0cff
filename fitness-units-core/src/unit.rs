//! Unit and dimension traits.

use crate::converter::{Convertible, LinearConverter};
use crate::error::{UnitsError, UnitsResult};
use core::fmt::Debug;

/// Trait implemented by every **unit family**.
///
/// A family is a closed enum whose variants are the units of that family. Two units are the same
/// unit when their symbols are equal.
///
/// Families that are not [`Dimension`]s (cadence, count, gender, …) keep the default hooks: no
/// converter, no base unit, and a decoder that refuses a converter record.
///
/// Implementations are generated by `#[derive(Unit)]` / `#[derive(Dimension)]` in the catalog
/// modules.
pub trait Unit: Copy + Debug + PartialEq + 'static {
    /// Family name used in error messages (`"force"`, `"cadence"`, …).
    const FAMILY: &'static str;

    /// Printable symbol, e.g. `"N"` or `"BPM"`.
    fn symbol(&self) -> &'static str;

    /// Every unit of the family, in catalog order.
    fn units() -> &'static [Self];

    /// Looks a unit up by its symbol.
    fn from_symbol(symbol: &str) -> Option<Self> {
        Self::units().iter().copied().find(|u| u.symbol() == symbol)
    }

    /// Converter to the family's base unit; `None` for non-dimensional families.
    fn linear_converter(&self) -> Option<LinearConverter> {
        None
    }

    /// The family's base unit; `None` for non-dimensional families.
    fn base_unit() -> Option<Self> {
        None
    }

    /// Rebuilds a unit from its wire parts.
    ///
    /// This is resolved through the type parameter, never by inspecting the payload: a
    /// non-dimensional family rejects a converter record, a dimensional family requires one.
    fn from_parts(symbol: &str, converter: Option<LinearConverter>) -> UnitsResult<Self> {
        if converter.is_some() {
            return Err(UnitsError::UnexpectedConverter {
                family: Self::FAMILY,
                symbol: symbol.to_string(),
            });
        }
        Self::from_symbol(symbol).ok_or_else(|| UnitsError::UnknownSymbol {
            family: Self::FAMILY,
            symbol: symbol.to_string(),
        })
    }

    /// Symbol equality, possibly across families.
    fn same_unit<V: Unit>(&self, other: &V) -> bool {
        self.symbol() == other.symbol()
    }

    /// Whether this family has a base unit and converters.
    fn is_dimension() -> bool {
        Self::base_unit().is_some()
    }
}

/// A unit family whose members convert linearly through one base unit.
pub trait Dimension: Unit + Convertible {
    /// The pivot unit of the family (coefficient 1, constant 0).
    fn base() -> Self;

    /// Converter from this unit to [`Dimension::base`].
    fn converter(&self) -> LinearConverter;

    /// A superseded converter that older payloads still carry for this unit.
    ///
    /// Decoding accepts it in place of [`Dimension::converter`]; encoding always writes the current
    /// one.
    fn legacy_converter(&self) -> Option<LinearConverter> {
        None
    }
}

/// Converts `value` from one unit to another of the same family.
///
/// Converting a unit to itself returns `value` untouched, and converting to the base unit stops
/// after the first step, so neither path picks up rounding from a second conversion.
///
/// ```rust
/// use fitness_units_core::{convert, UnitForce};
///
/// let n = convert(1.0, UnitForce::KilogramForce, UnitForce::Newton);
/// assert_eq!(n, 9.80665);
/// ```
pub fn convert<D: Dimension>(value: f64, from: D, to: D) -> f64 {
    if from.same_unit(&to) {
        return value;
    }

    let base = from.to_base(value);
    if to.same_unit(&D::base()) {
        base
    } else {
        to.from_base(base)
    }
}

/// Decoder hook used by `#[derive(Dimension)]`.
pub(crate) fn dimension_from_parts<D: Dimension>(
    symbol: &str,
    converter: Option<LinearConverter>,
) -> UnitsResult<D> {
    let converter = converter.ok_or_else(|| UnitsError::MissingConverter {
        family: D::FAMILY,
        symbol: symbol.to_string(),
    })?;

    let unit = D::from_symbol(symbol).ok_or_else(|| UnitsError::UnknownSymbol {
        family: D::FAMILY,
        symbol: symbol.to_string(),
    })?;

    let expected = unit.converter();
    if !expected.approx_eq(&converter) {
        match unit.legacy_converter() {
            Some(legacy) if legacy.approx_eq(&converter) => {
                log::debug!("accepted superseded converter for {} unit '{}'", D::FAMILY, symbol);
            }
            _ => {
                return Err(UnitsError::ConverterMismatch {
                    symbol: symbol.to_string(),
                    expected_coefficient: expected.coefficient(),
                    expected_constant: expected.constant(),
                    coefficient: converter.coefficient(),
                    constant: converter.constant(),
                })
            }
        }
    }

    log::debug!("decoded {} unit '{}'", D::FAMILY, symbol);
    Ok(unit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{UnitCadence, UnitConcentrationMass, UnitForce, UnitTemperature};
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn symbol_lookup() {
        assert_eq!(UnitForce::from_symbol("lbf"), Some(UnitForce::PoundForce));
        assert_eq!(UnitForce::from_symbol("lbs"), None);
        assert_eq!(UnitCadence::from_symbol("RPM"), Some(UnitCadence::RevolutionsPerMinute));
    }

    #[test]
    fn dimension_flags() {
        assert!(UnitForce::is_dimension());
        assert!(!UnitCadence::is_dimension());
        assert_eq!(UnitForce::base_unit(), Some(UnitForce::Newton));
        assert_eq!(UnitCadence::base_unit(), None);
        assert!(UnitCadence::BeatsPerMinute.linear_converter().is_none());
    }

    #[test]
    fn convert_pivots_through_base() {
        // 1000 mg/L is 1 g/L (the base), which is 0.001 kg/L
        let g_per_l = convert(
            1000.0,
            UnitConcentrationMass::MilligramsPerLiter,
            UnitConcentrationMass::GramsPerLiter,
        );
        assert_relative_eq!(g_per_l, 1.0, max_relative = 1e-12);

        let kg_per_l = convert(
            1000.0,
            UnitConcentrationMass::MilligramsPerLiter,
            UnitConcentrationMass::KilogramsPerLiter,
        );
        assert_relative_eq!(kg_per_l, 0.001, max_relative = 1e-12);
    }

    #[test]
    fn convert_to_base_skips_second_step() {
        let k = convert(25.0, UnitTemperature::Celsius, UnitTemperature::Kelvin);
        assert_eq!(k, 25.0 + 273.15);
    }

    #[test]
    fn from_parts_for_plain_family() {
        assert_eq!(
            UnitCadence::from_parts("BPM", None).unwrap(),
            UnitCadence::BeatsPerMinute
        );

        let err = UnitCadence::from_parts("BPM", Some(LinearConverter::identity())).unwrap_err();
        assert!(matches!(err, UnitsError::UnexpectedConverter { family: "cadence", .. }));

        let err = UnitCadence::from_parts("bpm", None).unwrap_err();
        assert!(matches!(err, UnitsError::UnknownSymbol { .. }));
    }

    #[test]
    fn from_parts_for_dimension() {
        let kgf = LinearConverter::with_coefficient(9.80665).unwrap();
        assert_eq!(
            UnitForce::from_parts("kgf", Some(kgf)).unwrap(),
            UnitForce::KilogramForce
        );

        let err = UnitForce::from_parts("kgf", None).unwrap_err();
        assert!(matches!(err, UnitsError::MissingConverter { family: "force", .. }));

        let wrong = LinearConverter::with_coefficient(10.0).unwrap();
        let err = UnitForce::from_parts("kgf", Some(wrong)).unwrap_err();
        assert!(matches!(err, UnitsError::ConverterMismatch { .. }));

        let err = UnitForce::from_parts("kp", Some(kgf)).unwrap_err();
        assert!(matches!(err, UnitsError::UnknownSymbol { .. }));
    }

    #[test]
    fn display_is_symbol() {
        assert_eq!(UnitForce::KilogramForce.to_string(), "kgf");
        assert_eq!(UnitCadence::StepsPerMinute.to_string(), "steps/min");
    }

    fn any_force() -> impl Strategy<Value = UnitForce> {
        prop::sample::select(UnitForce::units().to_vec())
    }

    proptest! {
        #[test]
        fn prop_identity_conversion_is_exact(unit in any_force(), v in prop::num::f64::NORMAL) {
            prop_assert_eq!(convert(v, unit, unit).to_bits(), v.to_bits());
        }

        #[test]
        fn prop_round_trip_between_units(a in any_force(), b in any_force(), v in -1e6..1e6f64) {
            let back = convert(convert(v, a, b), b, a);
            prop_assert!((back - v).abs() <= 1e-9 * v.abs().max(1.0));
        }
    }
}
