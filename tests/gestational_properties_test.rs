use chrono::{Days, NaiveDate};
use pregnancy_tracker::core::calculator::{compute_gestational_state, resolve_effective_lmp};
use pregnancy_tracker::{PregnancyAnchor, Trimester};

fn reference() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

fn lmp_days_ago(days: u64) -> PregnancyAnchor {
    PregnancyAnchor::from_last_menstrual_period(reference() - Days::new(days))
}

#[test]
fn test_no_anchor_is_none() {
    let anchor = PregnancyAnchor::default();
    assert!(anchor.is_empty());

    let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    for offset in (0..3000u64).step_by(37) {
        assert!(compute_gestational_state(&anchor, start + Days::new(offset)).is_none());
    }
}

#[test]
fn test_week_formula_with_clamp() {
    for days in 0..600u64 {
        let state = compute_gestational_state(&lmp_days_ago(days), reference()).unwrap();
        let expected = ((days / 7) + 1).min(42) as u32;

        assert_eq!(state.week, expected, "days = {}", days);
        assert_eq!(state.day_of_week, (days % 7) as u32);
        assert_eq!(state.total_days_pregnant, days as i64);
        assert_eq!(state.weeks_completed, (days / 7) as i64);
    }
}

#[test]
fn test_computation_is_idempotent() {
    let anchor = PregnancyAnchor {
        last_menstrual_period: None,
        due_date: Some(reference() + Days::new(100)),
    };
    let first = compute_gestational_state(&anchor, reference());
    let second = compute_gestational_state(&anchor, reference());
    assert_eq!(first, second);
}

#[test]
fn test_week_is_monotonic_in_reference_date() {
    let anchor = PregnancyAnchor::from_last_menstrual_period(
        NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
    );
    let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();

    let mut previous = 0;
    for offset in 0..400u64 {
        let state = compute_gestational_state(&anchor, start + Days::new(offset)).unwrap();
        assert!(state.week >= previous, "week went backwards at offset {}", offset);
        previous = state.week;
    }
}

#[test]
fn test_trimester_boundaries_both_sides() {
    let week = |w: u64| {
        compute_gestational_state(&lmp_days_ago((w - 1) * 7), reference()).unwrap()
    };

    assert_eq!(week(13).week, 13);
    assert_eq!(week(13).trimester, Trimester::First);
    assert_eq!(week(14).trimester, Trimester::Second);
    assert_eq!(week(26).trimester, Trimester::Second);
    assert_eq!(week(27).trimester, Trimester::Third);

    assert_eq!(week(13).trimester.name(), "First Trimester");
    assert_eq!(week(13).trimester.message(), "Early development stage");
    assert_eq!(week(27).trimester.name(), "Third Trimester");
    assert_eq!(week(27).trimester.message(), "Final stretch - almost there!");
}

#[test]
fn test_progress_percent_bounds() {
    for days in 0..800u64 {
        let state = compute_gestational_state(&lmp_days_ago(days), reference()).unwrap();
        assert!(state.progress_percent >= 0.0);
        assert!(state.progress_percent <= 100.0);
    }
}

#[test]
fn test_twenty_weeks_after_lmp() {
    let state = compute_gestational_state(&lmp_days_ago(140), reference()).unwrap();

    assert_eq!(state.week, 21);
    assert_eq!(state.day_of_week, 0);
    assert_eq!(state.trimester, Trimester::Second);
    assert_eq!(state.trimester.number(), 2);
    assert_eq!(state.trimester.name(), "Second Trimester");
    assert_eq!(state.progress_percent, 52.5);
}

#[test]
fn test_eight_weeks_before_due_date() {
    let due_date = reference() + Days::new(56);
    let anchor = PregnancyAnchor::from_due_date(due_date);

    assert_eq!(
        resolve_effective_lmp(&anchor),
        Some(due_date - Days::new(280))
    );

    let state = compute_gestational_state(&anchor, reference()).unwrap();
    assert_eq!(state.week, 33);
    assert_eq!(state.weeks_completed, 32);
    assert_eq!(state.trimester, Trimester::Third);
    assert_eq!(state.estimated_due_date, due_date);
    assert_eq!(state.days_until_due, 56);
}

#[test]
fn test_future_lmp_is_none() {
    let anchor = PregnancyAnchor::from_last_menstrual_period(reference() + Days::new(10));
    assert!(compute_gestational_state(&anchor, reference()).is_none());
}

#[test]
fn test_far_future_due_date_is_none() {
    let anchor = PregnancyAnchor::from_due_date(reference() + Days::new(281));
    assert!(compute_gestational_state(&anchor, reference()).is_none());

    let anchor = PregnancyAnchor::from_due_date(reference() + Days::new(280));
    assert_eq!(
        compute_gestational_state(&anchor, reference()).unwrap().week,
        1
    );
}

#[test]
fn test_lmp_wins_when_both_dates_disagree() {
    let anchor = PregnancyAnchor {
        last_menstrual_period: Some(reference() - Days::new(70)),
        due_date: Some(reference() + Days::new(10)),
    };
    let state = compute_gestational_state(&anchor, reference()).unwrap();
    assert_eq!(state.week, 11);
    assert_eq!(state.estimated_due_date, reference() + Days::new(210));
}

#[test]
fn test_state_serializes_for_presentation() {
    let state = compute_gestational_state(&lmp_days_ago(140), reference()).unwrap();
    let json = serde_json::to_value(&state).unwrap();

    assert_eq!(json["week"], 21);
    assert_eq!(json["progress_percent"], 52.5);
    assert_eq!(json["trimester"]["number"], 2);
    assert_eq!(json["trimester"]["message"], "Golden trimester - feeling better!");
    assert_eq!(json["estimated_due_date"], "2027-03-05");
}
