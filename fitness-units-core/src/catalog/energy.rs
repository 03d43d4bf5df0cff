//! Energy units, based on the joule.

use fitness_units_derive::Dimension;

/// Energy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Dimension)]
#[family(name = "energy", base = Joules)]
pub enum UnitEnergy {
    #[unit(symbol = "J", coefficient = 1.0)]
    Joules,
    #[unit(symbol = "kJ", coefficient = 1000.0)]
    Kilojoules,
    #[unit(symbol = "cal", coefficient = 4.184)]
    Calories,
    /// Dietary calorie.
    #[unit(symbol = "kCal", coefficient = 4184.0)]
    Kilocalories,
    #[unit(symbol = "kWh", coefficient = 3_600_000.0)]
    KilowattHours,
    #[unit(symbol = "MJ", coefficient = 1_000_000.0)]
    Megajoules,
    #[unit(symbol = "Wh", coefficient = 3600.0)]
    WattHours,
    #[unit(symbol = "eV", coefficient = 1.6022e-19)]
    ElectronVolts,
    /// British thermal unit.
    #[unit(symbol = "BTU", coefficient = 1055.06)]
    Btu,
    #[unit(symbol = "thm", coefficient = 1.055e8)]
    Therms,
}
