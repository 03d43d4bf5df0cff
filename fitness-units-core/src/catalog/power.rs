//! Power units, based on the watt.

use fitness_units_derive::Dimension;

/// Power (cycling power meters).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Dimension)]
#[family(name = "power", base = Watts)]
pub enum UnitPower {
    #[unit(symbol = "W", coefficient = 1.0)]
    Watts,
    #[unit(symbol = "kW", coefficient = 1000.0)]
    Kilowatts,
    #[unit(symbol = "mW", coefficient = 0.001)]
    Milliwatts,
    /// Mechanical horsepower.
    #[unit(symbol = "hp", coefficient = 745.7)]
    Horsepower,
}
