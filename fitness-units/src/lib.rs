//! Validated, unit-tagged fitness measurements.
//!
//! `fitness-units` is the user-facing crate in this workspace. It re-exports the full API from
//! `fitness-units-core` (unit families, [`ValidatedMeasurement`], the validated numeric wrappers
//! and their wire format) and adds:
//!
//! - [`formulas`]: BMI, body surface area, basal metabolic rate, heart rate energy burn and VO2 max
//!   estimates.
//! - [`Color`] and [`MeasurementZone`]: named, colored value ranges such as heart rate zones.
//! - [`StringMeasurement`]: a text value tagged with a unit.
//!
//! # Quick start
//!
//! ```rust
//! use fitness_units::{codec, UnitSpeed, ValidatedMeasurement};
//!
//! let pace = ValidatedMeasurement::new(10.0, true, UnitSpeed::MilesPerHour);
//! let kmh = pace.convert(UnitSpeed::KilometersPerHour);
//! assert!((kmh.value() - 16.0934).abs() < 1e-3);
//!
//! let json = codec::to_json(&pace).unwrap();
//! let back: ValidatedMeasurement<UnitSpeed> = codec::from_json(&json).unwrap();
//! assert_eq!(back, pace);
//! ```
//!
//! Arithmetic across families does not type-check:
//!
//! ```compile_fail
//! use fitness_units::{UnitForce, UnitMass, ValidatedMeasurement};
//!
//! let n = ValidatedMeasurement::new(1.0, true, UnitForce::Newton);
//! let kg = ValidatedMeasurement::new(1.0, true, UnitMass::Kilograms);
//! let _ = n + kg;
//! ```
//!
//! # Feature flags
//!
//! - `formulas` (default): the [`formulas`] module.
//! - `zones` (default): [`Color`] and [`MeasurementZone`].
//!
//! # Errors
//!
//! Everything fallible returns [`UnitsResult`]; see [`UnitsError`] for the variants.

#![forbid(unsafe_code)]

pub use fitness_units_core::*;

#[cfg(feature = "formulas")]
pub mod formulas;

#[cfg(feature = "zones")]
mod color;
#[cfg(feature = "zones")]
mod zone;

mod string_measurement;

#[cfg(feature = "zones")]
pub use color::Color;
#[cfg(feature = "zones")]
pub use zone::MeasurementZone;

pub use string_measurement::StringMeasurement;
