//! Field validation and record editing tests

use chrono::NaiveDate;
use contactbook_diagnostics::BookError;
use contactbook_types::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn record(name: &str) -> Record {
    Record::new(Name::new(name).unwrap())
}

// === Fields ===

#[rstest]
#[case("0501234567", true)]
#[case("050123456", false)]
#[case("05012345678", false)]
#[case("050-123-45", false)]
#[case("abcdefghij", false)]
#[case("", false)]
#[case("０５０１２３４５６７", false)]
fn test_phone_validation(#[case] input: &str, #[case] valid: bool) {
    assert_eq!(Phone::new(input).is_ok(), valid);
}

#[test]
fn test_empty_name_rejected() {
    assert_eq!(Name::new("   "), Err(BookError::EmptyName));
    assert_eq!(Name::new("John").unwrap().as_str(), "John");
}

#[rstest]
#[case("15.03.1990", true)]
#[case("29.02.2000", true)]
#[case("29.02.2001", false)]
#[case("1990-03-15", false)]
#[case("32.01.1990", false)]
#[case("birthday", false)]
fn test_birthday_parsing(#[case] input: &str, #[case] valid: bool) {
    assert_eq!(input.parse::<Birthday>().is_ok(), valid);
}

#[test]
fn test_birthday_display_round_trip() {
    let birthday: Birthday = "05.07.1985".parse().unwrap();
    assert_eq!(birthday.to_string(), "05.07.1985");
    assert_eq!(birthday.date(), NaiveDate::from_ymd_opt(1985, 7, 5).unwrap());
}

#[test]
fn test_leap_day_birthday_in_common_year() {
    let birthday: Birthday = "29.02.2000".parse().unwrap();
    assert_eq!(birthday.in_year(2023), NaiveDate::from_ymd_opt(2023, 2, 28));
    assert_eq!(birthday.in_year(2024), NaiveDate::from_ymd_opt(2024, 2, 29));
}

#[test]
fn test_invalid_phone_rejected_when_deserializing() {
    let json = r#"{"name": "John", "phones": ["12345"], "birthday": null}"#;
    assert!(serde_json::from_str::<Record>(json).is_err());

    let json = r#"{"name": "John", "phones": ["0501234567"], "birthday": "01.01.1990"}"#;
    let record: Record = serde_json::from_str(json).unwrap();
    assert_eq!(record.phones_display(), "0501234567");
}

#[test]
fn test_duplicate_phone_rejected_when_deserializing() {
    let json = r#"{"name": "Ann", "phones": ["0501234567", "0501234567"]}"#;
    let err = serde_json::from_str::<Record>(json).unwrap_err();
    assert!(err.to_string().contains("0501234567"));
}

#[test]
fn test_birthday_from_date() {
    let date = NaiveDate::from_ymd_opt(1990, 3, 15).unwrap();
    let birthday = Birthday::from_date(date);

    assert_eq!(birthday.date(), date);
    assert_eq!(birthday, "15.03.1990".parse::<Birthday>().unwrap());
    assert_eq!(birthday.to_string(), "15.03.1990");
}

// === Record ===

#[test]
fn test_add_phone_rejects_duplicates() {
    let mut john = record("John");
    john.add_phone("0501234567").unwrap();

    assert_eq!(
        john.add_phone("0501234567"),
        Err(BookError::DuplicatePhone("0501234567".to_string()))
    );
    assert_eq!(john.phones.len(), 1);
}

#[test]
fn test_edit_phone_keeps_position() {
    let mut john = record("John");
    john.add_phone("1111111111").unwrap();
    john.add_phone("2222222222").unwrap();
    john.add_phone("3333333333").unwrap();

    john.edit_phone("2222222222", "4444444444").unwrap();

    assert_eq!(john.phones_display(), "1111111111; 4444444444; 3333333333");
}

#[test]
fn test_edit_phone_is_atomic() {
    let mut john = record("John");
    john.add_phone("1111111111").unwrap();
    john.add_phone("2222222222").unwrap();

    assert_eq!(
        john.edit_phone("9999999999", "3333333333"),
        Err(BookError::PhoneNotFound("9999999999".to_string()))
    );
    assert_eq!(
        john.edit_phone("1111111111", "2222222222"),
        Err(BookError::DuplicatePhone("2222222222".to_string()))
    );
    assert_eq!(
        john.edit_phone("1111111111", "short"),
        Err(BookError::InvalidPhone)
    );
    assert_eq!(john.phones_display(), "1111111111; 2222222222");
}

#[test]
fn test_edit_phone_to_itself() {
    let mut john = record("John");
    john.add_phone("1111111111").unwrap();
    assert!(john.edit_phone("1111111111", "1111111111").is_ok());
}

#[test]
fn test_remove_phone() {
    let mut john = record("John");
    john.add_phone("1111111111").unwrap();

    assert_eq!(
        john.remove_phone("2222222222"),
        Err(BookError::PhoneNotFound("2222222222".to_string()))
    );
    john.remove_phone("1111111111").unwrap();
    assert!(john.phones.is_empty());
    assert!(john.find_phone("1111111111").is_none());
}

#[test]
fn test_record_display() {
    let mut john = record("John");
    john.add_phone("1111111111").unwrap();
    john.add_phone("2222222222").unwrap();
    assert_eq!(
        john.to_string(),
        "Contact name: John, phones: 1111111111; 2222222222"
    );

    john.set_birthday("10.10.1990").unwrap();
    assert_eq!(
        john.to_string(),
        "Contact name: John, phones: 1111111111; 2222222222, birthday: 10.10.1990"
    );
}

#[test]
fn test_set_birthday_keeps_previous_on_error() {
    let mut john = record("John");
    john.set_birthday("10.10.1990").unwrap();
    assert_eq!(john.set_birthday("1990/10/10"), Err(BookError::InvalidBirthday));
    assert_eq!(john.birthday.unwrap().to_string(), "10.10.1990");
}
