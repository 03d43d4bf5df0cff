//! Unit catalog grouped by family.
//!
//! The catalog lives in the core crate so that every family can implement [`Unit`](crate::Unit) and
//! [`Dimension`](crate::Dimension) without running into the orphan rules.
//!
//! ## Dimensional families
//!
//! Each one converts through its base unit (listed in parentheses).
//!
//! - [`UnitAngle`] (°), [`UnitAngularVelocity`] (deg/s)
//! - [`UnitConcentrationMass`] (g/L)
//! - [`UnitEnergy`] (J), [`UnitPower`] (W), [`UnitForce`] (N), [`UnitTorque`] (N·m)
//! - [`UnitLength`] (m), [`UnitMass`] (kg), [`UnitLinearDensity`] (kg/m)
//! - [`UnitMagneticField`] (T), [`UnitRadioactivity`] (Bq)
//! - [`UnitSpeed`] (m/s), [`UnitTemperature`] (K)
//!
//! ## Labels
//!
//! [`UnitCadence`], [`UnitCount`], [`UnitGender`], [`UnitOxygenConsumption`] and [`UnitPercent`]
//! carry a symbol only.

pub mod angle;
pub mod angular_velocity;
pub mod concentration_mass;
pub mod dimensionless;
pub mod energy;
pub mod force;
pub mod length;
pub mod linear_density;
pub mod magnetic_field;
pub mod mass;
pub mod power;
pub mod radioactivity;
pub mod speed;
pub mod temperature;
pub mod torque;

pub use angle::UnitAngle;
pub use angular_velocity::UnitAngularVelocity;
pub use concentration_mass::UnitConcentrationMass;
pub use dimensionless::{UnitCadence, UnitCount, UnitGender, UnitOxygenConsumption, UnitPercent};
pub use energy::UnitEnergy;
pub use force::UnitForce;
pub use length::UnitLength;
pub use linear_density::UnitLinearDensity;
pub use magnetic_field::UnitMagneticField;
pub use mass::UnitMass;
pub use power::UnitPower;
pub use radioactivity::UnitRadioactivity;
pub use speed::UnitSpeed;
pub use temperature::UnitTemperature;
pub use torque::UnitTorque;
