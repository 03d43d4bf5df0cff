//! Unit families without a base unit.
//!
//! These units only label a value. They cannot be converted, and arithmetic between two of them
//! requires equal symbols.

use fitness_units_derive::Unit;

/// Rate of repetitive motion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[family(name = "cadence")]
pub enum UnitCadence {
    #[unit(symbol = "BPM")]
    BeatsPerMinute,
    #[unit(symbol = "RPM")]
    RevolutionsPerMinute,
    #[unit(symbol = "steps/min")]
    StepsPerMinute,
    #[unit(symbol = "strides/min")]
    StridesPerMinute,
    #[unit(symbol = "strokes/min")]
    StrokesPerMinute,
}

/// Discrete event counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[family(name = "count")]
pub enum UnitCount {
    #[unit(symbol = "Counts")]
    Counts,
    #[unit(symbol = "Cycles")]
    Cycles,
    #[unit(symbol = "Dives")]
    Dives,
    #[unit(symbol = "Floors")]
    Floors,
    #[unit(symbol = "Goals")]
    Goals,
    #[unit(symbol = "Jumps")]
    Jumps,
    #[unit(symbol = "Laps")]
    Laps,
    #[unit(symbol = "Lengths")]
    Lengths,
    #[unit(symbol = "Punches")]
    Punches,
    #[unit(symbol = "Steps")]
    Steps,
    #[unit(symbol = "Strides")]
    Strides,
    #[unit(symbol = "Strikes")]
    Strikes,
    #[unit(symbol = "Strokes")]
    Strokes,
}

/// Gender, as used by the energy formulas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[family(name = "gender")]
pub enum UnitGender {
    #[unit(symbol = "Female")]
    Female,
    #[unit(symbol = "Male")]
    Male,
    /// The wire symbol keeps its historical spelling so existing payloads still decode.
    #[unit(symbol = "Unspecificed")]
    Unspecified,
}

/// Oxygen uptake.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[family(name = "oxygen consumption")]
pub enum UnitOxygenConsumption {
    #[unit(symbol = "mL/(kg·min)")]
    MillilitersPerKilogramPerMinute,
    #[unit(symbol = "VO2")]
    Vo2,
}

/// Percentage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[family(name = "percent")]
pub enum UnitPercent {
    #[unit(symbol = "%")]
    Percent,
}
