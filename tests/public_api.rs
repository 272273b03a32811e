use agecalc::anthropometry::{BmiCategory, Gender, HeightUnit, WeightUnit};
use agecalc::{
    age_snapshot_json, compute_age_snapshot, compute_anthropometrics, validate_birth_date,
    AgeParts, AnthropometricRequest, BirthDate, InvalidReason, SnapshotProcessor,
};
use chrono::{NaiveDate, NaiveDateTime};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, 0, 0)
        .unwrap()
}

#[test]
fn leap_day_birth_after_non_leap_birthday() {
    let now = at(2023, 3, 1, 10);
    let birth = BirthDate::parse(Some("2000-02-29"), now).unwrap();
    let snapshot = compute_age_snapshot(&birth, now);

    assert_eq!(
        snapshot.age,
        AgeParts {
            years: 23,
            months: 0,
            days: 1,
        }
    );
    assert_eq!(snapshot.zodiac.name, "Pisces");
    assert_eq!(
        snapshot.next_birthday.date,
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    );
    assert_eq!(snapshot.turning_age, 24);
}

#[rstest]
#[case("1893-06-14", Err(InvalidReason::Unrealistic))]
#[case("1895-06-16", Ok(()))]
#[case("2024-06-16", Err(InvalidReason::FutureDate))]
#[case("", Err(InvalidReason::MissingDate))]
fn birth_date_validation(#[case] raw: &str, #[case] expected: Result<(), InvalidReason>) {
    assert_eq!(validate_birth_date(Some(raw), at(2024, 6, 15, 12)), expected);
}

#[test]
fn rejected_birth_date_yields_no_snapshot() {
    let err = age_snapshot_json("2099-01-01", at(2024, 6, 15, 12)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid birth date: Date cannot be in the future."
    );
}

#[test]
fn snapshot_is_bit_identical_for_same_inputs() {
    let now = at(2024, 6, 15, 12);
    let first = age_snapshot_json("1977-11-05", now).unwrap();
    let second = age_snapshot_json("1977-11-05", now).unwrap();
    assert_eq!(first, second);
}

#[test]
fn processor_frames_share_an_instance_id() {
    let processor = SnapshotProcessor::new();
    let now = at(2024, 6, 15, 12);
    let birth = BirthDate::parse(Some("1990-05-20"), now).unwrap();

    let first: serde_json::Value =
        serde_json::from_str(&processor.tick_json(&birth, now).unwrap()).unwrap();
    let second: serde_json::Value = serde_json::from_str(
        &processor
            .tick_json(&birth, now + chrono::Duration::seconds(1))
            .unwrap(),
    )
    .unwrap();

    assert_eq!(
        first["producer"]["instance_id"],
        second["producer"]["instance_id"]
    );
    assert_ne!(
        first["snapshot"]["totals"]["total_seconds"],
        second["snapshot"]["totals"]["total_seconds"]
    );
}

#[test]
fn imperial_height_overweight_scenario() {
    let request = AnthropometricRequest {
        gender: Some(Gender::Male),
        height: Some(5.83),
        height_unit: HeightUnit::Ft,
        weight: Some(80.0),
        weight_unit: WeightUnit::Kg,
        age_years: 0,
    }
    .with_birth_date(
        NaiveDate::from_ymd_opt(1990, 5, 20).unwrap(),
        at(2024, 6, 15, 12),
    );

    let result = compute_anthropometrics(&request).unwrap();
    assert_eq!(result.input.age_years, 34);
    assert!((result.input.height_cm - 177.7).abs() < 0.1);
    assert!((result.bmi - 25.3).abs() < 0.05);
    assert_eq!(result.bmi_category, BmiCategory::Overweight);
}
