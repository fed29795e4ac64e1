// Property tests use unwrap for simplicity; panics are the failure signal.

use proptest::prelude::*;
use roster::api::{NewStudent, RosterApi};
use roster::catalog::FileCatalog;
use roster::codec::{decode, encode};
use roster::error::RosterError;
use roster::model::Student;
use roster::store::fs::FileStore;
use roster::store::StudentStore;
use std::fs;
use tempfile::TempDir;

fn student_strategy() -> impl Strategy<Value = Student> {
    (
        "[0-9]{1,8}",
        "[A-Za-z][A-Za-z .'-]{0,20}",
        prop::collection::vec("[A-Za-z][A-Za-z0-9 ]{0,10}", 0..5),
        (1000u32..=9999, 1u32..=12, 0u32..=99),
    )
        .prop_map(|(id, name, courses, (y, m, d))| {
            Student::new(id, name, courses, format!("{:04}-{:02}-{:02}", y, m, d))
        })
}

proptest! {
    /// Property: decode(encode(r)) == r for any storable record.
    #[test]
    fn prop_codec_roundtrip(student in student_strategy()) {
        let line = encode(&student);
        prop_assert_eq!(decode(&line).unwrap(), student);
    }

    /// Property: an encoded record is always exactly one line.
    #[test]
    fn prop_encode_is_single_line(student in student_strategy()) {
        prop_assert!(!encode(&student).contains('\n'));
    }

    /// Property: the date validator agrees with the generator's month range.
    #[test]
    fn prop_generated_dates_are_valid(student in student_strategy()) {
        prop_assert!(roster::validate::is_valid_date(&student.registration_date));
    }
}

fn setup() -> (TempDir, RosterApi<FileStore, FileCatalog>) {
    let dir = TempDir::new().unwrap();
    let courses = dir.path().join("courses.csv");
    fs::write(&courses, "Math\nCS\n").unwrap();
    let api = RosterApi::new(
        FileStore::new(dir.path().join("students.csv")),
        FileCatalog::new(courses),
    );
    (dir, api)
}

#[test]
fn test_add_to_empty_store_scans_back() {
    let (_dir, mut api) = setup();
    api.add_student(NewStudent::new(
        "1",
        "Ann",
        vec!["Math".into(), "CS".into()],
        "2024-01-15",
    ))
    .unwrap();

    assert_eq!(
        api.store().scan_all().unwrap(),
        vec![Student::new(
            "1",
            "Ann",
            vec!["Math".into(), "CS".into()],
            "2024-01-15"
        )]
    );
}

#[test]
fn test_unknown_course_leaves_file_untouched() {
    let (dir, mut api) = setup();
    api.add_student(NewStudent::new("1", "Ann", vec!["Math".into()], "2024-01-15"))
        .unwrap();
    let before = fs::read(dir.path().join("students.csv")).unwrap();

    let err = api
        .add_student(NewStudent::new(
            "2",
            "Bob",
            vec!["Math".into(), "Bio".into()],
            "2024-01-15",
        ))
        .unwrap_err();
    assert!(matches!(err, RosterError::UnknownCourse(_)));
    assert_eq!(fs::read(dir.path().join("students.csv")).unwrap(), before);
}

#[test]
fn test_update_id_preserves_order_on_disk() {
    let (_dir, mut api) = setup();
    for (id, name) in [("1", "Cid"), ("2", "Ann"), ("3", "Bob")] {
        api.add_student(NewStudent::new(id, name, vec!["CS".into()], "2024-03-01"))
            .unwrap();
    }

    api.update_student_id("2", "20").unwrap();

    let ids: Vec<_> = api
        .store()
        .scan_all()
        .unwrap()
        .into_iter()
        .map(|s| s.id)
        .collect();
    assert_eq!(ids, vec!["1", "20", "3"]);
}

#[test]
fn test_update_id_with_delimiter_keeps_store_readable() {
    let (dir, mut api) = setup();
    api.add_student(NewStudent::new("1", "Ann", vec!["Math".into()], "2024-01-15"))
        .unwrap();
    api.add_student(NewStudent::new("2", "Bob", vec!["CS".into()], "2024-01-16"))
        .unwrap();
    let before = fs::read(dir.path().join("students.csv")).unwrap();

    let err = api.update_student_id("1", "9,x").unwrap_err();
    assert!(matches!(err, RosterError::InvalidFormat(_)));
    assert_eq!(fs::read(dir.path().join("students.csv")).unwrap(), before);

    api.delete_student("2").unwrap();
    assert_eq!(api.store().scan_all().unwrap().len(), 1);
}

#[test]
fn test_non_utf8_store_is_not_read_as_empty() {
    let (dir, mut api) = setup();
    let path = dir.path().join("students.csv");
    fs::write(&path, b"1,Jos\xe9,Math,2024-01-15\n".as_slice()).unwrap();

    assert!(matches!(
        api.list_students(),
        Err(RosterError::MalformedRecord { line: 1, .. })
    ));
    let err = api
        .add_student(NewStudent::new("1", "Ann", vec!["Math".into()], "2024-01-15"))
        .unwrap_err();
    assert!(matches!(err, RosterError::MalformedRecord { line: 1, .. }));
    assert_eq!(fs::read(&path).unwrap(), b"1,Jos\xe9,Math,2024-01-15\n");
}
