//! Torque units, based on the newton metre.

use fitness_units_derive::Dimension;

/// Torque (crank torque on bike power meters).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Dimension)]
#[family(name = "torque", base = NewtonMeter)]
pub enum UnitTorque {
    #[unit(symbol = "N·m", coefficient = 1.0)]
    NewtonMeter,
    #[unit(symbol = "lbf·ft", coefficient = 1.3558)]
    FootPoundForce,
    // payloads written before 9.80665 was corrected carry the reciprocal
    #[unit(symbol = "kgf·m", coefficient = 9.80665, legacy_coefficient = 0.101972)]
    KilogramForceMeter,
}
