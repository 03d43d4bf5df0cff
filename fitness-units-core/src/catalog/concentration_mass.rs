//! Mass concentration units.
//!
//! The base unit is [`UnitConcentrationMass::GramsPerLiter`].

use fitness_units_derive::Dimension;

/// Mass per volume (blood glucose, lactate, …).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Dimension)]
#[family(name = "mass concentration", base = GramsPerLiter)]
pub enum UnitConcentrationMass {
    #[unit(symbol = "g/L", coefficient = 1.0)]
    GramsPerLiter,
    #[unit(symbol = "mg/dL", coefficient = 0.01)]
    MilligramsPerDeciliter,
    #[unit(symbol = "g/mL", coefficient = 1000.0)]
    GramsPerMilliliter,
    #[unit(symbol = "kg/mL", coefficient = 1_000_000.0)]
    KilogramsPerMilliliter,
    #[unit(symbol = "mg/L", coefficient = 0.001)]
    MilligramsPerLiter,
    #[unit(symbol = "kg/L", coefficient = 1000.0)]
    KilogramsPerLiter,
}
