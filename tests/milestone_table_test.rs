use anyhow::Result;
use pregnancy_tracker::core::milestones::{builtin_table, lookup_milestone};
use pregnancy_tracker::{LocalStorage, MilestoneTable, TrackerError};
use std::fs;
use std::thread;
use tempfile::TempDir;

const CUSTOM_TABLE: &str = r#"
[[milestones]]
week = 30
title = "Thirty"
size_comparison = "cabbage"
approximate_weight = "1.3 kg"
approximate_length = "39 cm"
maternal_changes = "Shortness of breath"

[[milestones]]
week = 10
title = "Ten"
size_comparison = "strawberry"
approximate_weight = "4 g"
approximate_length = "3 cm"
key_developments = ["Vital organs formed"]
maternal_changes = "Morning sickness"
health_tips = ["Rest often"]
"#;

#[test]
fn test_load_table_from_toml_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    fs::write(temp_dir.path().join("milestones.toml"), CUSTOM_TABLE)?;
    let storage = LocalStorage::new(temp_dir.path().to_string_lossy().to_string());

    let table = MilestoneTable::load(&storage, "milestones.toml")?;

    assert_eq!(table.len(), 2);
    assert_eq!(table.weeks().collect::<Vec<_>>(), vec![10, 30]);
    assert_eq!(table.lookup(Some(10)).title, "Ten");
    assert_eq!(table.lookup(Some(10)).health_tips, vec!["Rest often"]);
    assert!(table.lookup(Some(30)).key_developments.is_empty());

    // 10 與 30 距離相同，取較早的週
    assert_eq!(table.lookup(Some(20)).week, 10);
    assert_eq!(table.lookup(Some(21)).week, 30);
    assert_eq!(table.lookup(Some(1)).week, 10);
    assert_eq!(table.lookup(Some(42)).week, 30);

    Ok(())
}

#[test]
fn test_missing_table_file_is_storage_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let storage = LocalStorage::new(temp_dir.path().to_string_lossy().to_string());

    let err = MilestoneTable::load(&storage, "nope.toml").unwrap_err();
    assert!(matches!(err, TrackerError::IoError(_)));

    Ok(())
}

#[test]
fn test_invalid_tables_are_rejected() {
    let duplicate = r#"
[[milestones]]
week = 8
title = "A"
size_comparison = "raspberry"
approximate_weight = "1 g"
approximate_length = "1.6 cm"
maternal_changes = "Fatigue"

[[milestones]]
week = 8
title = "B"
size_comparison = "raspberry"
approximate_weight = "1 g"
approximate_length = "1.6 cm"
maternal_changes = "Fatigue"
"#;
    assert!(matches!(
        MilestoneTable::from_toml_str(duplicate),
        Err(TrackerError::MilestoneTableError { .. })
    ));

    assert!(MilestoneTable::from_toml_str("milestones = []").is_err());
    assert!(MilestoneTable::from_toml_str("not toml at all [[").is_err());
}

#[test]
fn test_builtin_lookup_nearest_and_ties() {
    let table = builtin_table();
    let weeks: Vec<u32> = table.weeks().collect();
    assert_eq!(weeks, vec![4, 8, 12, 16, 20, 24, 28, 30, 32, 36, 40]);

    for &week in &weeks {
        assert_eq!(lookup_milestone(Some(week)).week, week);
    }

    assert_eq!(lookup_milestone(Some(1)).week, 4);
    assert_eq!(lookup_milestone(Some(6)).week, 4);
    assert_eq!(lookup_milestone(Some(7)).week, 8);
    assert_eq!(lookup_milestone(Some(29)).week, 28);
    assert_eq!(lookup_milestone(Some(34)).week, 32);
    assert_eq!(lookup_milestone(Some(38)).week, 36);
    assert_eq!(lookup_milestone(Some(41)).week, 40);
    assert_eq!(lookup_milestone(Some(42)).week, 40);
}

#[test]
fn test_lookup_without_week_is_placeholder() {
    let placeholder = lookup_milestone(None);
    assert_eq!(placeholder.week, 0);
    assert!(placeholder.title.contains("due date"));

    assert_eq!(lookup_milestone(Some(0)), placeholder);
    assert_eq!(lookup_milestone(Some(43)), placeholder);
}

#[test]
fn test_shared_table_reads_from_many_threads() {
    let handles: Vec<_> = (1..=42u32)
        .map(|week| thread::spawn(move || lookup_milestone(Some(week)).week))
        .collect();

    for (week, handle) in (1..=42u32).zip(handles) {
        let resolved = handle.join().unwrap();
        assert_eq!(resolved, lookup_milestone(Some(week)).week);
        assert!(resolved.abs_diff(week) <= 4);
    }
}
