//! Angular velocity units, based on degrees per second.

use fitness_units_derive::Dimension;

/// Angular velocity (gyroscope readings).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Dimension)]
#[family(name = "angular velocity", base = DegreesPerSecond)]
pub enum UnitAngularVelocity {
    #[unit(symbol = "deg/s", coefficient = 1.0)]
    DegreesPerSecond,
    #[unit(symbol = "rad/s", coefficient = 57.2958)]
    RadiansPerSecond,
}
