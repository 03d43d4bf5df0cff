//! Speed units, based on metres per second.

use fitness_units_derive::Dimension;

/// Speed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Dimension)]
#[family(name = "speed", base = MetersPerSecond)]
pub enum UnitSpeed {
    #[unit(symbol = "m/s", coefficient = 1.0)]
    MetersPerSecond,
    #[unit(symbol = "km/h", coefficient = 0.277778)]
    KilometersPerHour,
    #[unit(symbol = "mph", coefficient = 0.44704)]
    MilesPerHour,
    #[unit(symbol = "kn", coefficient = 0.514444)]
    Knots,
    #[unit(symbol = "m/h", coefficient = 0.0002778)]
    MetersPerHour,
    #[unit(symbol = "m/m", coefficient = 0.01667)]
    MetersPerMinute,
    #[unit(symbol = "km/s", coefficient = 1000.0)]
    KilometersPerSecond,
    #[unit(symbol = "km/m", coefficient = 16.666667)]
    KilometersPerMinute,
    #[unit(symbol = "mpm", coefficient = 26.82)]
    MilesPerMinute,
    #[unit(symbol = "mps", coefficient = 1609.0)]
    MilesPerSecond,
    #[unit(symbol = "c", coefficient = 299_792_454.0)]
    SpeedOfLight,
}
