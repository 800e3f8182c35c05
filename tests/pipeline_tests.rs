use chrono::NaiveDate;
use punchcard::core::{expand, loader, normalizer};
use punchcard::errors::AppError;
use punchcard::models::day_record::DayRecord;
use punchcard::models::event_category::{EventCategory, EventFlags};
use punchcard::models::raw_record::RawRecord;
use std::collections::BTreeSet;
use std::path::Path;

mod common;
use common::{SAMPLE, write_fixture};

const DATE_FORMAT: &str = "%d/%m/%Y";

fn raw(date: &str, clock_in: Option<&str>, clock_out: Option<&str>, notes: Option<&str>) -> RawRecord {
    RawRecord {
        date_text: date.to_string(),
        clock_in_text: clock_in.map(str::to_string),
        clock_out_text: clock_out.map(str::to_string),
        notes_text: notes.map(str::to_string),
    }
}

#[test]
fn canonicalize_defaults_to_standard() {
    assert_eq!(normalizer::canonicalize_notes(None), vec!["Standard"]);
    assert_eq!(normalizer::canonicalize_notes(Some("")), vec!["Standard"]);
    assert_eq!(normalizer::canonicalize_notes(Some("   ")), vec!["Standard"]);
}

#[test]
fn canonicalize_splits_multi_event_notes() {
    let tokens = normalizer::canonicalize_notes(Some("16:00 lecture, Post-Work Commitment"));
    assert_eq!(tokens, vec!["16_00_lecture", "Post_Work_Commitment"]);
}

#[test]
fn canonicalize_is_idempotent_on_rejoined_tokens() {
    let records = vec![raw(
        "03/07/2024",
        None,
        None,
        Some("16:00 lecture, Post-Work Commitment"),
    )];
    let days = normalizer::normalize(&records, DATE_FORMAT).unwrap();
    let rejoined = days[0].notes_canonical();
    assert_eq!(
        normalizer::canonicalize_notes(Some(&rejoined)),
        days[0].event_tokens
    );
}

#[test]
fn office_minutes_pass_through_malformed_ordering() {
    // clock-out before clock-in is not validated, only carried through
    let records = vec![raw("01/07/2024", Some("17:00"), Some("09:00"), None)];
    let days = normalizer::normalize(&records, DATE_FORMAT).unwrap();
    assert_eq!(days[0].office_minutes(), Some(-480));
}

#[test]
fn normalize_assigns_positional_ids() {
    // two identical rows still get distinct ids
    let records = vec![
        raw("01/07/2024", Some("09:00"), Some("17:00"), None),
        raw("01/07/2024", Some("09:00"), Some("17:00"), None),
    ];
    let days = normalizer::normalize(&records, DATE_FORMAT).unwrap();
    assert_eq!(days.len(), 2);
    assert_eq!(days[0].id, 1);
    assert_eq!(days[1].id, 2);
    assert_eq!(
        days[0].date,
        NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()
    );
}

#[test]
fn normalize_accepts_dashed_dates() {
    let records = vec![raw("01-07-2024", None, None, None)];
    let days = normalizer::normalize(&records, DATE_FORMAT).unwrap();
    assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2024, 7, 1).unwrap());
}

#[test]
fn normalize_rejects_invalid_date_with_row_position() {
    let records = vec![
        raw("01/07/2024", None, None, None),
        raw("31-13-2024", None, None, None),
    ];
    let err = normalizer::normalize(&records, DATE_FORMAT).unwrap_err();
    match err {
        AppError::InvalidDate { value, row } => {
            assert_eq!(value, "31-13-2024");
            assert_eq!(row, 2);
        }
        other => panic!("expected InvalidDate, got {:?}", other),
    }
}

#[test]
fn normalize_rejects_invalid_time_with_row_position() {
    let records = vec![raw("01/07/2024", Some("9am"), None, None)];
    let err = normalizer::normalize(&records, DATE_FORMAT).unwrap_err();
    match err {
        AppError::InvalidTime { value, row } => {
            assert_eq!(value, "9am");
            assert_eq!(row, 1);
        }
        other => panic!("expected InvalidTime, got {:?}", other),
    }
}

#[test]
fn normalize_treats_empty_clock_cells_as_absent() {
    let records = vec![raw("04/07/2024", None, None, Some("Annual leave"))];
    let days = normalizer::normalize(&records, DATE_FORMAT).unwrap();
    assert!(days[0].clock_in.is_none());
    assert!(days[0].clock_out.is_none());
    assert_eq!(days[0].event_tokens, vec!["Annual_leave"]);
}

#[test]
fn tidy_preserves_cardinality_and_id_set() {
    let records = vec![
        raw("01/07/2024", Some("08:55"), Some("17:10"), None),
        raw("02/07/2024", Some("09:20"), Some("17:45"), Some("Work from home")),
        raw("03/07/2024", Some("08:40"), Some("18:30"), Some("16:00 lecture, Post-Work Commitment")),
    ];
    let days = normalizer::normalize(&records, DATE_FORMAT).unwrap();
    let tidy = expand::tidy(&days).unwrap();

    assert_eq!(tidy.len(), days.len());
    let day_ids: BTreeSet<u32> = days.iter().map(|d| d.id).collect();
    let tidy_ids: BTreeSet<u32> = tidy.iter().map(|t| t.id).collect();
    assert_eq!(day_ids, tidy_ids);
}

#[test]
fn multi_event_day_sets_both_flags() {
    let records = vec![raw(
        "03/07/2024",
        Some("08:40"),
        Some("18:30"),
        Some("16:00 lecture, Post-Work Commitment"),
    )];
    let days = normalizer::normalize(&records, DATE_FORMAT).unwrap();
    let tidy = expand::tidy(&days).unwrap();

    let rec = &tidy[0];
    assert!(rec.flags.get(EventCategory::Lecture16));
    assert!(rec.flags.get(EventCategory::PostWorkCommitment));
    for cat in EventCategory::ALL {
        if cat != EventCategory::Lecture16 && cat != EventCategory::PostWorkCommitment {
            assert!(!rec.flags.get(cat), "{:?} should be false", cat);
        }
    }
}

#[test]
fn empty_notes_collapse_to_standard_only() {
    let records = vec![raw("01/07/2024", Some("08:55"), Some("17:10"), None)];
    let days = normalizer::normalize(&records, DATE_FORMAT).unwrap();
    assert_eq!(days[0].event_tokens, vec!["Standard"]);

    let tidy = expand::tidy(&days).unwrap();
    assert!(tidy[0].flags.get(EventCategory::Standard));
    for cat in EventCategory::ALL {
        if cat != EventCategory::Standard {
            assert!(!tidy[0].flags.get(cat));
        }
    }
}

#[test]
fn unknown_tokens_set_no_flags() {
    let records = vec![raw("01/07/2024", Some("09:00"), None, Some("Dentist appointment"))];
    let days = normalizer::normalize(&records, DATE_FORMAT).unwrap();
    assert_eq!(days[0].event_tokens, vec!["Dentist_appointment"]);

    // tolerated, not rejected: the day survives with an all-false vector
    let tidy = expand::tidy(&days).unwrap();
    assert_eq!(tidy.len(), 1);
    for cat in EventCategory::ALL {
        assert!(!tidy[0].flags.get(cat));
    }
}

#[test]
fn collapse_rejects_orphan_ids() {
    let days = vec![DayRecord {
        id: 1,
        date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
        clock_in: None,
        clock_out: None,
        event_tokens: vec!["Standard".to_string()],
    }];
    let rows = vec![expand::ExplodedRow {
        id: 99,
        event_token: "Standard".to_string(),
        flags: EventFlags::from_token("Standard"),
    }];

    let err = expand::collapse(&rows, &days).unwrap_err();
    assert!(matches!(err, AppError::Join(99)));
}

#[test]
fn loader_reads_quoted_notes_and_keeps_order() {
    let path = write_fixture("loader_sample", SAMPLE);
    let records = loader::load_records(Path::new(&path)).unwrap();

    assert_eq!(records.len(), 5);
    assert_eq!(records[0].date_text, "01/07/2024");
    assert!(records[0].notes_text.is_none());
    assert_eq!(
        records[2].notes_text.as_deref(),
        Some("16:00 lecture, Post-Work Commitment")
    );
    assert!(records[3].clock_in_text.is_none());
}

#[test]
fn loader_matches_columns_by_name_not_position() {
    let shuffled = "\
Notes,Date,Clock Out Time,Clock In Time
Conference,05/07/2024,16:50,09:05
";
    let path = write_fixture("loader_shuffled", shuffled);
    let records = loader::load_records(Path::new(&path)).unwrap();

    assert_eq!(records[0].date_text, "05/07/2024");
    assert_eq!(records[0].clock_in_text.as_deref(), Some("09:05"));
    assert_eq!(records[0].clock_out_text.as_deref(), Some("16:50"));
    assert_eq!(records[0].notes_text.as_deref(), Some("Conference"));
}

#[test]
fn loader_reports_missing_column() {
    let path = write_fixture("loader_missing_col", "Date,Clock In Time,Clock Out Time\n01/07/2024,09:00,17:00\n");
    let err = loader::load_records(Path::new(&path)).unwrap_err();
    assert!(matches!(err, AppError::MissingColumn(ref c) if c == "Notes"));
}

#[test]
fn loader_reports_missing_file() {
    let err = loader::load_records(Path::new("/nonexistent/timesheet.csv")).unwrap_err();
    assert!(matches!(err, AppError::InputNotFound(_)));
}
