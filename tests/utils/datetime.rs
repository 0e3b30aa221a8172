use chrono::NaiveDate;
use gallerist::utils::datetime::*;

#[test]
fn test_format_ymd() {
    let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
    assert_eq!(format_ymd(date), "2025-01-15");
}

#[test]
fn test_to_iso_string_is_midnight_utc() {
    let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
    assert_eq!(to_iso_string(Some(date)), "2025-01-15T00:00:00.000Z");
    assert_eq!(to_iso_string(None), INVALID_DATE);
}

#[test]
fn test_from_iso_string_accepts_both_forms() {
    let expected = NaiveDate::from_ymd_opt(2024, 2, 29);
    assert_eq!(from_iso_string("2024-02-29T00:00:00.000Z"), expected);
    assert_eq!(from_iso_string("2024-02-29"), expected);
    assert_eq!(from_iso_string(""), None);
    assert_eq!(from_iso_string(INVALID_DATE), None);
    assert_eq!(from_iso_string("yesterday"), None);
}

#[test]
fn test_normalize_date_input() {
    assert_eq!(normalize_date_input("2025-03-01"), "2025-03-01T00:00:00.000Z");
    assert_eq!(normalize_date_input("  2025-03-01 "), "2025-03-01T00:00:00.000Z");

    // Blank clears the field so `required` can report it
    assert_eq!(normalize_date_input(""), "");
    assert_eq!(normalize_date_input("   "), "");

    // Partial or impossible dates become the sentinel
    assert_eq!(normalize_date_input("2025-0"), INVALID_DATE);
    assert_eq!(normalize_date_input("2025-02-30"), INVALID_DATE);
}

#[test]
fn test_is_valid_date_value() {
    assert!(is_valid_date_value("2025-03-01T00:00:00.000Z"));
    assert!(!is_valid_date_value(INVALID_DATE));
    assert!(!is_valid_date_value(""));
}

#[test]
fn test_display_date_value() {
    assert_eq!(display_date_value("2025-03-01T00:00:00.000Z"), "2025-03-01");
    // Anything that is not a date is shown as stored
    assert_eq!(display_date_value(INVALID_DATE), INVALID_DATE);
    assert_eq!(display_date_value(""), "");
}

#[test]
fn test_valid_dates_round_trip() {
    let windows = [
        (NaiveDate::from_ymd_opt(0, 1, 1), 70),
        (NaiveDate::from_ymd_opt(1899, 12, 20), 20),
        (NaiveDate::from_ymd_opt(1999, 12, 25), 75),
        (NaiveDate::from_ymd_opt(2023, 12, 1), 120),
        (NaiveDate::from_ymd_opt(2100, 2, 20), 20),
        (NaiveDate::from_ymd_opt(9999, 12, 1), 31),
    ];

    for (start, days) in windows {
        let start = start.unwrap();
        for date in start.iter_days().take(days) {
            let typed = format_ymd(date);
            let stored = normalize_date_input(&typed);
            assert_ne!(stored, INVALID_DATE, "{} should be valid", typed);
            assert_eq!(from_iso_string(&stored), Some(date), "{} -> {}", typed, stored);
            assert_eq!(display_date_value(&stored), typed);
        }
    }
}

#[test]
fn test_years_outside_four_digits_are_invalid() {
    assert_eq!(normalize_date_input("-0001-01-01"), INVALID_DATE);
    assert!(!is_valid_date_value("-0001-01-01"));

    let far = NaiveDate::from_ymd_opt(10000, 3, 1).unwrap();
    assert_eq!(to_iso_string(Some(far)), INVALID_DATE);
    assert_eq!(from_iso_string("+10000-03-01T00:00:00.000Z"), None);
}
