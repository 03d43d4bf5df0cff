//! Body composition and energy formulas.
//!
//! Inputs are converted to the units each formula is defined in (cm, kg, m, km/h) before use, so
//! callers may pass any unit of the right family.

use fitness_units_core::{
    UnitEnergy, UnitGender, UnitLength, UnitMass, UnitOxygenConsumption, UnitSpeed,
    ValidatedMeasurement,
};

fn centimeters(height: ValidatedMeasurement<UnitLength>) -> f64 {
    height.convert(UnitLength::Centimeters).value()
}

fn kilograms(weight: ValidatedMeasurement<UnitMass>) -> f64 {
    weight.convert(UnitMass::Kilograms).value()
}

fn is_female(gender: UnitGender) -> bool {
    if gender == UnitGender::Unspecified {
        log::debug!("gender unspecified, using the male coefficients");
    }
    gender == UnitGender::Female
}

/// Body mass index, kg/m².
///
/// ```rust
/// use fitness_units::{formulas, UnitLength, UnitMass, ValidatedMeasurement};
///
/// let height = ValidatedMeasurement::new(180.0, true, UnitLength::Centimeters);
/// let weight = ValidatedMeasurement::new(81.0, true, UnitMass::Kilograms);
/// assert!((formulas::bmi(height, weight) - 25.0).abs() < 1e-9);
/// ```
pub fn bmi(
    height: ValidatedMeasurement<UnitLength>,
    weight: ValidatedMeasurement<UnitMass>,
) -> f64 {
    let meters = height.convert(UnitLength::Meters).value();
    kilograms(weight) / meters.powi(2)
}

/// Body surface area in m², Mosteller formula.
pub fn bsa_mosteller(
    height: ValidatedMeasurement<UnitLength>,
    weight: ValidatedMeasurement<UnitMass>,
) -> f64 {
    ((centimeters(height) * kilograms(weight)) / 3600.0).sqrt()
}

/// Body surface area in m², Du Bois formula.
pub fn bsa_du_bois(
    height: ValidatedMeasurement<UnitLength>,
    weight: ValidatedMeasurement<UnitMass>,
) -> f64 {
    0.007184 * centimeters(height).powf(0.725) * kilograms(weight).powf(0.425)
}

/// Body surface area in m², Haycock formula.
pub fn bsa_haycock(
    height: ValidatedMeasurement<UnitLength>,
    weight: ValidatedMeasurement<UnitMass>,
) -> f64 {
    0.024265 * centimeters(height).powf(0.3964) * kilograms(weight).powf(0.5378)
}

/// Body surface area in m², Gehan and George formula.
pub fn bsa_gehan_george(
    height: ValidatedMeasurement<UnitLength>,
    weight: ValidatedMeasurement<UnitMass>,
) -> f64 {
    0.0235 * centimeters(height).powf(0.42246) * kilograms(weight).powf(0.51456)
}

/// Basal metabolic rate in kcal/day, Mifflin-St Jeor equation.
pub fn bmr_mifflin(
    height: ValidatedMeasurement<UnitLength>,
    weight: ValidatedMeasurement<UnitMass>,
    gender: UnitGender,
    age_years: i32,
) -> f64 {
    let bmr = 10.0 * kilograms(weight) + 6.25 * centimeters(height) - 5.0 * f64::from(age_years);
    if is_female(gender) {
        bmr - 161.0
    } else {
        bmr + 5.0
    }
}

/// Energy burned per minute from heart rate, in kilocalories.
///
/// The result carries the validity of `weight`.
pub fn energy_burned(
    weight: ValidatedMeasurement<UnitMass>,
    gender: UnitGender,
    heart_rate: u8,
    age_years: i32,
) -> ValidatedMeasurement<UnitEnergy> {
    let kg = kilograms(weight);
    let hr = f64::from(heart_rate);
    let age = f64::from(age_years);

    let kcal = if is_female(gender) {
        (-20.4022 + 0.4472 * hr - 0.1263 * kg + 0.074 * age) / 4.184 / 60.0
    } else {
        (-55.0969 + 0.6309 * hr + 0.1988 * kg + 0.2017 * age) / 4.184 / 60.0
    };

    ValidatedMeasurement::new(kcal, weight.valid(), UnitEnergy::Kilocalories)
}

/// VO2 max estimated from the final speed reached in a multi-stage (beep) fitness test.
pub fn vo2_multi_stage_fitness_test(
    velocity: ValidatedMeasurement<UnitSpeed>,
) -> ValidatedMeasurement<UnitOxygenConsumption> {
    let kmh = velocity.convert(UnitSpeed::KilometersPerHour).value();
    let consumption = (kmh * 6.65 - 35.8) * 0.95 + 0.182;
    ValidatedMeasurement::new(consumption, velocity.valid(), UnitOxygenConsumption::Vo2)
}
