//! Core engine for validated, unit-tagged fitness measurements.
//!
//! `fitness-units-core` provides:
//!
//! - Unit families as closed enums implementing [`Unit`]; families with a base unit also implement
//!   [`Dimension`] and convert through a [`LinearConverter`].
//! - [`ValidatedMeasurement<U>`]: an `f64`, a validity flag and a unit, with unit-aware arithmetic
//!   and comparison.
//! - [`ValidatedBinaryInteger<T>`] and [`ValidatedBinaryFloatingPoint<T>`]: validity-tagged
//!   primitives that keep their width on the wire.
//! - A self-describing serde encoding for all three (see [`codec`]).
//!
//! Most users should depend on `fitness-units` (the facade crate), which adds the domain formulas
//! and zone types.
//!
//! # Quick start
//!
//! ```rust
//! use fitness_units_core::{UnitMass, ValidatedMeasurement};
//!
//! let lb = ValidatedMeasurement::new(150.0, true, UnitMass::Pounds);
//! let kg = lb.convert(UnitMass::Kilograms);
//! assert!((kg.value() - 68.0388).abs() < 1e-9);
//! ```
//!
//! Mixing units of one family lands in the base unit:
//!
//! ```rust
//! use fitness_units_core::{UnitForce, ValidatedMeasurement};
//!
//! let total = ValidatedMeasurement::new(5.0, true, UnitForce::Newton)
//!     + ValidatedMeasurement::new(1.0, true, UnitForce::KilogramForce);
//! assert_eq!(total.unit(), UnitForce::Newton);
//! assert!((total.value() - 14.80665).abs() < 1e-12);
//! ```
//!
//! # Errors
//!
//! Fallible operations return [`UnitsResult`]. Arithmetic on units without a common base unit,
//! malformed payloads and invalid converters all surface as [`UnitsError`] variants; nothing in
//! this crate panics on bad input.
//!
//! # Wire compatibility
//!
//! NaN and infinite values refuse to encode, because JSON has no number for them. A decode error
//! for a field carries the field's dotted path, e.g. `unit.converter.coefficient`. The kgf·m
//! torque unit now carries 9.80665 N·m; payloads written with the old reciprocal (0.101972) still
//! decode, and they re-encode with the current converter.
//!
//! # Logging
//!
//! Decoding and base-unit fallbacks emit `log` records at `debug`/`trace` level. No logger is
//! installed.

#![forbid(unsafe_code)]

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod converter;
mod error;
mod measurement;
mod unit;

pub mod codec;
pub mod numeric;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use converter::{Convertible, LinearConverter};
pub use error::{UnitsError, UnitsResult};
pub use measurement::ValidatedMeasurement;
pub use numeric::{
    BinaryFloatingPoint, BinaryInteger, ValidatedBinaryFloatingPoint, ValidatedBinaryInteger,
};
pub use unit::{convert, Dimension, Unit};

// ─────────────────────────────────────────────────────────────────────────────
// Unit catalog
// ─────────────────────────────────────────────────────────────────────────────

/// Built-in unit families.
///
/// These live in the core crate so the derived trait impls do not run into the orphan rules.
pub mod catalog;

pub use catalog::*;
