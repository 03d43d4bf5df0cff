//! Temperature units, based on the kelvin.
//!
//! Celsius and Fahrenheit are the only catalog entries with a non-zero converter constant.

use fitness_units_derive::Dimension;

/// Thermodynamic temperature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Dimension)]
#[family(name = "temperature", base = Kelvin)]
pub enum UnitTemperature {
    #[unit(symbol = "K", coefficient = 1.0)]
    Kelvin,
    #[unit(symbol = "°C", coefficient = 1.0, constant = 273.15)]
    Celsius,
    #[unit(symbol = "°F", coefficient = 0.55555555555556, constant = 255.37222222222427)]
    Fahrenheit,
}
