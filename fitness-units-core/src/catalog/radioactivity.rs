//! Radioactivity units, based on the becquerel.

use fitness_units_derive::Dimension;

/// Radioactive decay rate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Dimension)]
#[family(name = "radioactivity", base = Becquerel)]
pub enum UnitRadioactivity {
    #[unit(symbol = "dpm", coefficient = 0.01667)]
    DisintegrationsPerMinute,
    #[unit(symbol = "Bq", coefficient = 1.0)]
    Becquerel,
    #[unit(symbol = "kBq", coefficient = 1000.0)]
    Kilobecquerel,
    #[unit(symbol = "MBq", coefficient = 1_000_000.0)]
    Megabecquerel,
    #[unit(symbol = "µCi", coefficient = 37000.0)]
    Microcurie,
    #[unit(symbol = "mCi", coefficient = 37_000_000.0)]
    Millicurie,
    #[unit(symbol = "Ci", coefficient = 37_000_000_037.0)]
    Curie,
    #[unit(symbol = "rd", coefficient = 1_000_000.0)]
    Rutherford,
}
