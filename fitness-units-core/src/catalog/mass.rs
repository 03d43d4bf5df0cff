//! Mass units, based on the kilogram.

use fitness_units_derive::Dimension;

/// Mass (body weight).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Dimension)]
#[family(name = "mass", base = Kilograms)]
pub enum UnitMass {
    #[unit(symbol = "kg", coefficient = 1.0)]
    Kilograms,
    #[unit(symbol = "g", coefficient = 0.001)]
    Grams,
    #[unit(symbol = "mg", coefficient = 0.000001)]
    Milligrams,
    #[unit(symbol = "lb", coefficient = 0.453592)]
    Pounds,
    #[unit(symbol = "oz", coefficient = 0.0283495)]
    Ounces,
    #[unit(symbol = "st", coefficient = 6.35029)]
    Stones,
}
