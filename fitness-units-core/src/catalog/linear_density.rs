//! Linear density units, based on kilograms per metre.

use fitness_units_derive::Dimension;

/// Mass per length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Dimension)]
#[family(name = "linear density", base = KilogramMeter)]
pub enum UnitLinearDensity {
    #[unit(symbol = "kg/m", coefficient = 1.0)]
    KilogramMeter,
    #[unit(symbol = "lb/ft", coefficient = 1.48816)]
    PoundFoot,
}
