//! Integration tests for the `fitness-units` facade crate.

use fitness_units::*;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use proptest::prelude::*;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::json;

fn round_trip<T: Serialize + DeserializeOwned>(value: &T) -> T {
    codec::from_json(&codec::to_json(value).unwrap()).unwrap()
}

fn round_trip_family<U: Unit>() {
    for unit in U::units() {
        for (value, valid) in [(0.0, true), (-12.5, false), (1.0e6, true)] {
            let m = ValidatedMeasurement::new(value, valid, *unit);
            let json = codec::to_json(&m).unwrap();
            let back: ValidatedMeasurement<U> = codec::from_json(&json).unwrap();
            assert_eq!(back, m, "{} '{}' via {}", U::FAMILY, unit.symbol(), json);
            assert_eq!(back.unit(), *unit);
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Scenarios
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn concentration_pivots_through_grams_per_liter() {
    let m = ValidatedMeasurement::new(1000.0, true, UnitConcentrationMass::MilligramsPerLiter);

    let base = m.to_base_unit();
    assert_eq!(base.unit(), UnitConcentrationMass::GramsPerLiter);
    assert_relative_eq!(base.value(), 1.0, max_relative = 1e-12);

    let kg = m.convert(UnitConcentrationMass::KilogramsPerLiter);
    assert_relative_eq!(kg.value(), 1.0e-3, max_relative = 1e-12);
    assert!(kg.valid());
}

#[test]
fn newton_plus_kilogram_force() {
    let sum = ValidatedMeasurement::new(5.0, true, UnitForce::Newton)
        + ValidatedMeasurement::new(1.0, true, UnitForce::KilogramForce);
    assert_eq!(sum.unit(), UnitForce::Newton);
    assert_abs_diff_eq!(sum.value(), 14.80665, epsilon = 1e-12);
}

#[test]
fn temperature_sum_is_in_kelvin() {
    let sum = ValidatedMeasurement::new(20.0, true, UnitTemperature::Celsius)
        + ValidatedMeasurement::new(68.0, true, UnitTemperature::Fahrenheit);
    assert_eq!(sum.unit(), UnitTemperature::Kelvin);
    assert_abs_diff_eq!(sum.value(), 2.0 * 293.15, epsilon = 1e-9);
}

#[test]
fn label_arithmetic_is_checked() {
    let steps = ValidatedMeasurement::new(100.0, true, UnitCount::Steps);
    let laps = ValidatedMeasurement::new(2.0, true, UnitCount::Laps);
    let err = steps.try_add(laps).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("'Steps'") && msg.contains("'Laps'"), "{}", msg);
    assert!(!err.is_decode_error());
}

#[test]
fn heart_rate_wire_format() {
    let hr = ValidatedBinaryInteger::new(152u8, true);
    let v = serde_json::to_value(hr).unwrap();
    assert_eq!(v, json!({"value": 152, "valid": true, "unit": {"type": "UInt8"}}));
}

#[test]
fn power_wire_format() {
    let power = ValidatedMeasurement::new(250.0, true, UnitPower::Watts);
    let v = serde_json::to_value(power).unwrap();
    assert_eq!(
        v,
        json!({
            "value": 250.0,
            "valid": true,
            "unit": {"symbol": "W", "converter": {"coefficient": 1.0, "constant": 0.0}}
        })
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Catalog round trips
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn every_dimension_round_trips() {
    round_trip_family::<UnitAngle>();
    round_trip_family::<UnitAngularVelocity>();
    round_trip_family::<UnitConcentrationMass>();
    round_trip_family::<UnitEnergy>();
    round_trip_family::<UnitForce>();
    round_trip_family::<UnitLength>();
    round_trip_family::<UnitLinearDensity>();
    round_trip_family::<UnitMagneticField>();
    round_trip_family::<UnitMass>();
    round_trip_family::<UnitPower>();
    round_trip_family::<UnitRadioactivity>();
    round_trip_family::<UnitSpeed>();
    round_trip_family::<UnitTemperature>();
    round_trip_family::<UnitTorque>();
}

#[test]
fn every_label_round_trips() {
    round_trip_family::<UnitCadence>();
    round_trip_family::<UnitCount>();
    round_trip_family::<UnitGender>();
    round_trip_family::<UnitOxygenConsumption>();
    round_trip_family::<UnitPercent>();
}

#[test]
fn pretty_json_decodes_too() {
    let m = ValidatedMeasurement::new(42.195, true, UnitLength::Kilometers);
    let pretty = codec::to_json_pretty(&m).unwrap();
    assert!(pretty.contains('\n'));
    let back: ValidatedMeasurement<UnitLength> = codec::from_json(&pretty).unwrap();
    assert_eq!(back, m);
}

#[test]
fn decoding_into_the_wrong_family_fails() {
    let json = codec::to_json(&ValidatedMeasurement::new(1.0, true, UnitMass::Kilograms)).unwrap();
    let err = codec::from_json::<ValidatedMeasurement<UnitLength>>(&json).unwrap_err();
    assert!(err.is_decode_error());

    let err = codec::from_json::<ValidatedMeasurement<UnitCadence>>(&json).unwrap_err();
    assert!(err.to_string().contains("does not take a converter"), "{}", err);
}

// ─────────────────────────────────────────────────────────────────────────────
// Numeric wrappers
// ─────────────────────────────────────────────────────────────────────────────

fn round_trip_integer<T: BinaryInteger>(values: &[T]) {
    for &value in values {
        for valid in [true, false] {
            let v = ValidatedBinaryInteger::new(value, valid);
            assert_eq!(round_trip(&v), v);
        }
    }
}

#[test]
fn integers_round_trip_at_their_bounds() {
    round_trip_integer(&[u8::MIN, 7, u8::MAX]);
    round_trip_integer(&[u16::MIN, u16::MAX]);
    round_trip_integer(&[u32::MIN, u32::MAX]);
    round_trip_integer(&[u64::MIN, u64::MAX]);
    round_trip_integer(&[usize::MIN, 42]);
    round_trip_integer(&[i8::MIN, -1, i8::MAX]);
    round_trip_integer(&[i16::MIN, i16::MAX]);
    round_trip_integer(&[i32::MIN, i32::MAX]);
    round_trip_integer(&[i64::MIN, i64::MAX]);
    round_trip_integer(&[isize::MIN, -42]);
}

#[test]
fn narrowing_policy() {
    // widening always works
    let json = codec::to_json(&ValidatedBinaryInteger::new(-5i8, true)).unwrap();
    let wide: ValidatedBinaryInteger<i64> = codec::from_json(&json).unwrap();
    assert_eq!(wide.value(), -5);

    // narrowing works only when the value fits
    let small = codec::to_json(&ValidatedBinaryInteger::new(120u32, true)).unwrap();
    let narrow: ValidatedBinaryInteger<i8> = codec::from_json(&small).unwrap();
    assert_eq!(narrow.value(), 120);

    let large = codec::to_json(&ValidatedBinaryInteger::new(70_000u32, true)).unwrap();
    let err = codec::from_json::<ValidatedBinaryInteger<u16>>(&large).unwrap_err();
    assert!(err.to_string().contains("70000 does not fit in UInt16 (tag 'UInt32')"), "{}", err);

    // signedness counts too
    let negative = codec::to_json(&ValidatedBinaryInteger::new(-1i64, false)).unwrap();
    assert!(codec::from_json::<ValidatedBinaryInteger<u64>>(&negative).is_err());
}

#[test]
fn float_policy() {
    let single = codec::to_json(&ValidatedBinaryFloatingPoint::new(3.75f32, true)).unwrap();
    let double: ValidatedBinaryFloatingPoint<f64> = codec::from_json(&single).unwrap();
    assert_eq!(double.value(), 3.75);

    let pi = ValidatedBinaryFloatingPoint::new(std::f64::consts::PI, true);
    let lossy = codec::to_json(&pi).unwrap();
    assert!(codec::from_json::<ValidatedBinaryFloatingPoint<f32>>(&lossy).is_err());

    let integer = codec::to_json(&ValidatedBinaryInteger::new(3u8, true)).unwrap();
    let err = codec::from_json::<ValidatedBinaryFloatingPoint<f64>>(&integer).unwrap_err();
    assert!(err.to_string().contains("unit.type"), "{}", err);
}

// ─────────────────────────────────────────────────────────────────────────────
// Supplementary modules
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "formulas")]
#[test]
fn formulas_through_the_facade() {
    let height = ValidatedMeasurement::new(6.0, true, UnitLength::Feet);
    let weight = ValidatedMeasurement::new(180.0, true, UnitMass::Pounds);
    let bmi = formulas::bmi(height, weight);
    assert_abs_diff_eq!(bmi, 24.41, epsilon = 1e-2);

    let burn = formulas::energy_burned(weight, UnitGender::Female, 140, 35);
    assert_eq!(burn.unit(), UnitEnergy::Kilocalories);
    let joules = burn.convert(UnitEnergy::Joules);
    assert_relative_eq!(joules.value(), burn.value() * 4184.0, max_relative = 1e-12);
}

#[cfg(feature = "zones")]
#[test]
fn zones_through_the_facade() {
    let zones = [
        MeasurementZone::new(0, 119, "Recovery", Color::from_hex("#808080", 1.0).unwrap())
            .unwrap(),
        MeasurementZone::new(120, 139, "Endurance", Color::from_hex("0x0000FF", 1.0).unwrap())
            .unwrap(),
        MeasurementZone::new(140, 255, "Threshold", Color::rgba(255.0, 0.0, 0.0, 0.8)).unwrap(),
    ];
    let hr = ValidatedBinaryInteger::new(131u8, true);
    let zone = zones.iter().find(|z| z.contains(hr.value())).unwrap();
    assert_eq!(zone.name(), "Endurance");

    let v = serde_json::to_value(&zones[2]).unwrap();
    assert_eq!(v["range"], json!({"lowerBounds": 140, "upperBounds": 255}));
    assert_eq!(v["red"], json!(255.0));
    assert!(v.get("hex").is_none());
}

#[test]
fn string_measurements_compare_by_symbol() {
    let a = StringMeasurement::new("Garmin HRM", UnitCount::Counts);
    let json = json!({"value": "Garmin HRM", "unit": {"symbol": "Counts"}});
    let b: StringMeasurement<UnitCount> = serde_json::from_value(json).unwrap();
    assert_eq!(a, b);
}

// ─────────────────────────────────────────────────────────────────────────────
// Properties
// ─────────────────────────────────────────────────────────────────────────────

fn any_length() -> impl Strategy<Value = UnitLength> {
    prop::sample::select(UnitLength::units().to_vec())
}

fn any_count() -> impl Strategy<Value = UnitCount> {
    prop::sample::select(UnitCount::units().to_vec())
}

proptest! {
    #[test]
    fn prop_measurement_round_trip(
        unit in any_length(),
        v in -1e12..1e12f64,
        valid in any::<bool>(),
    ) {
        let m = ValidatedMeasurement::new(v, valid, unit);
        prop_assert_eq!(round_trip(&m), m);
    }

    #[test]
    fn prop_label_round_trip(
        unit in any_count(),
        v in any::<f64>().prop_filter("finite", |v| v.is_finite()),
    ) {
        let m = ValidatedMeasurement::new(v, true, unit);
        prop_assert_eq!(round_trip(&m), m);
    }

    #[test]
    fn prop_integer_round_trip(v in any::<i32>(), valid in any::<bool>()) {
        let w = ValidatedBinaryInteger::new(v, valid);
        prop_assert_eq!(round_trip(&w), w);
    }

    #[test]
    fn prop_u8_payload_decodes_into_wider_types(v in any::<u8>()) {
        let json = codec::to_json(&ValidatedBinaryInteger::new(v, true)).unwrap();
        let back: ValidatedBinaryInteger<u64> = codec::from_json(&json).unwrap();
        prop_assert_eq!(back.value(), u64::from(v));
    }

    #[test]
    fn prop_double_round_trip(v in any::<f64>().prop_filter("finite", |v| v.is_finite())) {
        let w = ValidatedBinaryFloatingPoint::new(v, true);
        prop_assert_eq!(round_trip(&w), w);
    }

    #[test]
    fn prop_single_round_trip(v in any::<f32>().prop_filter("finite", |v| v.is_finite())) {
        let w = ValidatedBinaryFloatingPoint::new(v, false);
        prop_assert_eq!(round_trip(&w), w);
    }
}
