use chrono::NaiveDate;
use worktrack_core::repository::{REQUIREMENTS_KEY, WORK_LOGS_KEY};
use worktrack_core::{
    Cell, DateKey, FileStore, KeyValueStore, Tracker, WorkClassification, WorkLogEntry,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 2, 10).unwrap()
}

fn key(s: &str) -> DateKey {
    s.parse().unwrap()
}

#[test]
fn test_state_survives_restart() {
    let tmp = tempfile::tempdir().unwrap();

    {
        let store = FileStore::new(Some(tmp.path().to_path_buf())).unwrap();
        let mut tracker = Tracker::open(store, today()).unwrap();
        tracker.add_requirement("report").unwrap();
        tracker.add_requirement("standup").unwrap();
        tracker.select_date(key("2024-02-29"));
        tracker.submit_entry("7.5", "Wrote weekly report").unwrap();
    }

    let store = FileStore::new(Some(tmp.path().to_path_buf())).unwrap();
    let tracker = Tracker::open(store, today()).unwrap();
    assert_eq!(tracker.requirements(), ["report", "standup"]);
    assert_eq!(
        tracker.entry(&key("2024-02-29")),
        Some(&WorkLogEntry::new("7.5", "Wrote weekly report"))
    );
    assert_eq!(
        tracker.entry_status(&key("2024-02-29")),
        Some(WorkClassification::MatchesRequirement)
    );
}

#[test]
fn test_stored_json_shape() {
    let tmp = tempfile::tempdir().unwrap();
    let store = FileStore::new(Some(tmp.path().to_path_buf())).unwrap();
    let mut tracker = Tracker::open(store.clone(), today()).unwrap();
    tracker.add_requirement("report").unwrap();
    tracker.log_entry(key("2024-02-05"), "8", "Fixed printer").unwrap();

    let logs: serde_json::Value =
        serde_json::from_str(&store.get(WORK_LOGS_KEY).unwrap().unwrap()).unwrap();
    assert_eq!(
        logs,
        serde_json::json!({ "2024-02-05": { "hours": "8", "extraWork": "Fixed printer" } })
    );

    let reqs: serde_json::Value =
        serde_json::from_str(&store.get(REQUIREMENTS_KEY).unwrap().unwrap()).unwrap();
    assert_eq!(reqs, serde_json::json!(["report"]));

    assert!(tmp.path().join("workLogs.json").is_file());
    assert!(tmp.path().join("requirements.json").is_file());
}

#[test]
fn test_corrupt_files_fall_back_to_empty() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join("workLogs.json"), "{\"2024-02-05\": ").unwrap();
    std::fs::write(tmp.path().join("requirements.json"), "not json").unwrap();

    let store = FileStore::new(Some(tmp.path().to_path_buf())).unwrap();
    let mut tracker = Tracker::open(store, today()).unwrap();
    assert!(tracker.requirements().is_empty());
    assert!(tracker.work_log().is_empty());

    // The next write replaces the corrupt value.
    tracker.add_requirement("report").unwrap();
    let raw = std::fs::read_to_string(tmp.path().join("requirements.json")).unwrap();
    assert_eq!(raw, r#"["report"]"#);
}

#[test]
fn test_february_grid_from_disk() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(
        tmp.path().join("workLogs.json"),
        r#"{"2024-02-01":{"hours":"8","extraWork":"Fixed printer"}}"#,
    )
    .unwrap();

    let store = FileStore::new(Some(tmp.path().to_path_buf())).unwrap();
    let tracker = Tracker::open(store, today()).unwrap();
    let cells = tracker.calendar_days();

    // 2024-02-01 is a Thursday: four blanks, then 29 days.
    assert_eq!(cells.len(), 4 + 29);
    assert!(cells[..4].iter().all(|c| *c == Cell::Blank));
    match &cells[4] {
        Cell::Day(day) => {
            assert_eq!(day.day_number, 1);
            assert!(day.has_entry);
            assert!(day.is_extra);
            assert_eq!(day.hours.as_deref(), Some("8"));
        }
        Cell::Blank => panic!("expected day 1 after the blanks"),
    }
}
