//! Length units, based on the metre.

use fitness_units_derive::Dimension;

/// Length (height, distance).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Dimension)]
#[family(name = "length", base = Meters)]
pub enum UnitLength {
    #[unit(symbol = "m", coefficient = 1.0)]
    Meters,
    #[unit(symbol = "km", coefficient = 1000.0)]
    Kilometers,
    #[unit(symbol = "cm", coefficient = 0.01)]
    Centimeters,
    #[unit(symbol = "mm", coefficient = 0.001)]
    Millimeters,
    #[unit(symbol = "in", coefficient = 0.0254)]
    Inches,
    #[unit(symbol = "ft", coefficient = 0.3048)]
    Feet,
    #[unit(symbol = "yd", coefficient = 0.9144)]
    Yards,
    #[unit(symbol = "mi", coefficient = 1609.34)]
    Miles,
}
