//! Angle units.
//!
//! The base unit is [`UnitAngle::Degrees`], matching the usual Foundation table. Besides the common
//! units the family carries the ones found in fitness device protocols (bradians, semicircles, NATO
//! mils).

use fitness_units_derive::Dimension;

/// Plane angle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Dimension)]
#[family(name = "angle", base = Degrees)]
pub enum UnitAngle {
    #[unit(symbol = "°", coefficient = 1.0)]
    Degrees,
    #[unit(symbol = "ʹ", coefficient = 1.0 / 60.0)]
    ArcMinutes,
    #[unit(symbol = "ʺ", coefficient = 1.0 / 3600.0)]
    ArcSeconds,
    #[unit(symbol = "rad", coefficient = 57.2958)]
    Radians,
    #[unit(symbol = "grad", coefficient = 0.9)]
    Gradians,
    #[unit(symbol = "rev", coefficient = 360.0)]
    Revolutions,
    /// Binary degree, 1/256 of a turn.
    #[unit(symbol = "bradian", coefficient = 1.40625)]
    Bradians,
    #[unit(symbol = "mrad", coefficient = 0.057296)]
    Milliradians,
    /// Same size as [`UnitAngle::Revolutions`], different symbol.
    #[unit(symbol = "turn", coefficient = 360.0)]
    Turns,
    #[unit(symbol = "semi circle", coefficient = 1.0 / 0.0055556)]
    Semicircles,
    /// NATO angular mil (6400 per turn).
    #[unit(symbol = "mil", coefficient = 1.0 / 17.778)]
    NatoAngularMils,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{convert, Dimension};
    use approx::assert_relative_eq;

    #[test]
    fn turn_is_a_revolution() {
        assert_eq!(
            convert(1.0, UnitAngle::Turns, UnitAngle::Revolutions),
            1.0
        );
        assert_ne!(UnitAngle::Turns, UnitAngle::Revolutions);
    }

    #[test]
    fn bradians_per_turn() {
        let b = convert(1.0, UnitAngle::Turns, UnitAngle::Bradians);
        assert_relative_eq!(b, 256.0, max_relative = 1e-12);
    }

    #[test]
    fn nato_mils_per_degree() {
        let mils = convert(1.0, UnitAngle::Degrees, UnitAngle::NatoAngularMils);
        assert_relative_eq!(mils, 17.778, max_relative = 1e-12);
        assert_eq!(UnitAngle::base(), UnitAngle::Degrees);
    }
}
