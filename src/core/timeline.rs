use crate::core::growth::size_comparison;
use crate::domain::model::{
    GestationalState, JourneyCheckpoint, JourneyStatus, Trimester, WeekScheduleRow,
};
use crate::domain::MAX_DISPLAY_WEEK;
use crate::utils::error::Result;
use chrono::{Days, NaiveDate};
use std::io::Write;

const JOURNEY: &[(u32, &str, &str)] = &[
    (4, "Positive Pregnancy Test", "Confirmed your pregnancy"),
    (8, "First Ultrasound", "Saw your baby for the first time"),
    (12, "End of First Trimester", "Completed the first 12 weeks"),
    (16, "Feeling Baby Move", "First sensations of baby movement"),
    (
        20,
        "Anatomy Scan",
        "Detailed ultrasound to check baby's development",
    ),
    (
        24,
        "Viability Milestone",
        "Baby has a chance of survival if born early",
    ),
    (28, "Third Trimester Begins", "Entered the final trimester"),
    (
        32,
        "Baby Positioning",
        "Baby may settle into head-down position",
    ),
    (36, "Full Term", "Baby is considered full term"),
    (40, "Due Date", "Expected arrival of your baby"),
];

/// 孕程檢查點，依目前週數標示已完成、本週或即將到來
pub fn journey(state: Option<&GestationalState>) -> Vec<JourneyCheckpoint> {
    JOURNEY
        .iter()
        .map(|&(week, title, description)| {
            let status = match state {
                Some(state) if week < state.week => JourneyStatus::Completed,
                Some(state) if week == state.week => JourneyStatus::Current,
                _ => JourneyStatus::Upcoming,
            };
            JourneyCheckpoint {
                week,
                title,
                description,
                status,
            }
        })
        .collect()
}

/// 下一個尚未到達的檢查點
pub fn next_checkpoint(state: &GestationalState) -> Option<JourneyCheckpoint> {
    journey(Some(state))
        .into_iter()
        .find(|checkpoint| checkpoint.status != JourneyStatus::Completed)
}

/// 從末次月經起，第 1 到 42 週每週一列
pub fn week_schedule(lmp: NaiveDate) -> Vec<WeekScheduleRow> {
    (1..=MAX_DISPLAY_WEEK)
        .map_while(|week| {
            let starts_on = lmp.checked_add_days(Days::new(7 * u64::from(week - 1)))?;
            let ends_on = starts_on.checked_add_days(Days::new(6))?;
            Some(WeekScheduleRow {
                week,
                starts_on,
                ends_on,
                trimester: Trimester::from_week(week).number(),
                size_comparison: size_comparison(week).to_string(),
            })
        })
        .collect()
}

pub fn write_schedule_csv<W: Write>(rows: &[WeekScheduleRow], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn schedule_csv(rows: &[WeekScheduleRow]) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    write_schedule_csv(rows, &mut buffer)?;
    Ok(buffer)
}
