//! Magnetic flux density units, based on the tesla.

use fitness_units_derive::Dimension;

/// Magnetic field (magnetometer readings).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Dimension)]
#[family(name = "magnetic field", base = Tesla)]
pub enum UnitMagneticField {
    #[unit(symbol = "T", coefficient = 1.0)]
    Tesla,
    #[unit(symbol = "µT", coefficient = 0.000001)]
    MicroTesla,
    #[unit(symbol = "nT", coefficient = 0.000000001)]
    NanoTesla,
    #[unit(symbol = "G", coefficient = 0.0001)]
    Gauss,
    #[unit(symbol = "mG", coefficient = 0.0000001)]
    MilliGauss,
}
