//! Force units, based on the newton.

use fitness_units_derive::Dimension;

/// Force.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Dimension)]
#[family(name = "force", base = Newton)]
pub enum UnitForce {
    #[unit(symbol = "N", coefficient = 1.0)]
    Newton,
    #[unit(symbol = "kgf", coefficient = 9.80665)]
    KilogramForce,
    #[unit(symbol = "lbf", coefficient = 4.44822)]
    PoundForce,
    #[unit(symbol = "dyn", coefficient = 1e-05)]
    Dyne,
}
