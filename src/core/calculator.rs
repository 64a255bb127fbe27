use crate::domain::model::{GestationalState, PregnancyAnchor, Trimester};
use crate::domain::{FULL_TERM_DAYS, FULL_TERM_WEEKS, MAX_DISPLAY_WEEK};
use chrono::{Days, NaiveDate};

/// 取得實際使用的末次月經日期。
///
/// 有末次月經就直接用；否則以預產期往回推 280 天。兩者皆無時回傳 `None`。
pub fn resolve_effective_lmp(anchor: &PregnancyAnchor) -> Option<NaiveDate> {
    match (anchor.last_menstrual_period, anchor.due_date) {
        (Some(lmp), _) => Some(lmp),
        (None, Some(due_date)) => due_date.checked_sub_days(Days::new(FULL_TERM_DAYS)),
        (None, None) => None,
    }
}

/// 計算 `reference_date` 當天的孕期狀態。
///
/// 沒有起算日，或起算日晚於參考日時回傳 `None`；這兩種情況都屬於
/// 「資料未完整」的正常畫面，不是錯誤。週數超過 42 時靜默截斷。
pub fn compute_gestational_state(
    anchor: &PregnancyAnchor,
    reference_date: NaiveDate,
) -> Option<GestationalState> {
    let lmp = resolve_effective_lmp(anchor)?;
    if lmp > reference_date {
        return None;
    }

    let total_days_pregnant = (reference_date - lmp).num_days();
    let weeks_completed = total_days_pregnant / 7;
    let day_of_week = (total_days_pregnant % 7) as u32;
    let week = clamp_display_week(weeks_completed + 1);
    let trimester = Trimester::from_week(week);

    let estimated_due_date = lmp.checked_add_days(Days::new(FULL_TERM_DAYS))?;
    let days_until_due = (estimated_due_date - reference_date).num_days().max(0);

    Some(GestationalState {
        week,
        day_of_week,
        total_days_pregnant,
        weeks_completed,
        progress_percent: progress_percent(week),
        trimester,
        estimated_due_date,
        days_until_due,
    })
}

/// 1-based 週數，上限 42
pub fn clamp_display_week(week: i64) -> u32 {
    u32::try_from(week.max(1)).map_or(MAX_DISPLAY_WEEK, |w| w.min(MAX_DISPLAY_WEEK))
}

/// 以 40 週為分母的進度，介於 0 到 100
pub fn progress_percent(week: u32) -> f64 {
    (f64::from(week) * 100.0 / f64::from(FULL_TERM_WEEKS)).clamp(0.0, 100.0)
}

/// 某一孕期在今天對應的末次月經日期區間（含兩端）。
///
/// 提供給資料層做族群查詢用。第三孕期沒有最早日期：超過 42 週仍顯示為第三孕期。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LmpWindow {
    pub earliest: Option<NaiveDate>,
    pub latest: NaiveDate,
}

impl LmpWindow {
    pub fn contains(&self, lmp: NaiveDate) -> bool {
        lmp <= self.latest && self.earliest.is_none_or(|earliest| lmp >= earliest)
    }
}

pub fn lmp_window_for_trimester(trimester: Trimester, today: NaiveDate) -> Option<LmpWindow> {
    let (first_week, last_week) = trimester.weeks();

    let latest = today.checked_sub_days(Days::new(7 * u64::from(first_week - 1)))?;
    let earliest = match trimester {
        Trimester::Third => None,
        _ => Some(today.checked_sub_days(Days::new(7 * u64::from(last_week) - 1))?),
    };

    Some(LmpWindow { earliest, latest })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_lmp_preferred_over_due_date() {
        let anchor = PregnancyAnchor {
            last_menstrual_period: Some(date(2026, 1, 1)),
            due_date: Some(date(2030, 1, 1)),
        };
        assert_eq!(resolve_effective_lmp(&anchor), Some(date(2026, 1, 1)));
    }

    #[test]
    fn test_due_date_implies_lmp() {
        let anchor = PregnancyAnchor::from_due_date(date(2026, 10, 8));
        assert_eq!(resolve_effective_lmp(&anchor), Some(date(2026, 1, 1)));
    }

    #[test]
    fn test_first_day_is_week_one() {
        let today = date(2026, 10, 16);
        let state =
            compute_gestational_state(&PregnancyAnchor::from_last_menstrual_period(today), today)
                .unwrap();

        assert_eq!(state.week, 1);
        assert_eq!(state.day_of_week, 0);
        assert_eq!(state.total_days_pregnant, 0);
        assert_eq!(state.weeks_completed, 0);
        assert_eq!(state.progress_percent, 2.5);
        assert_eq!(state.days_until_due, 280);
    }

    #[test]
    fn test_week_clamped_at_42() {
        let today = date(2026, 10, 16);
        let lmp = today - Days::new(400);
        let state =
            compute_gestational_state(&PregnancyAnchor::from_last_menstrual_period(lmp), today)
                .unwrap();

        assert_eq!(state.week, 42);
        assert_eq!(state.weeks_completed, 57);
        assert_eq!(state.progress_percent, 100.0);
        assert_eq!(state.trimester, Trimester::Third);
        assert_eq!(state.days_until_due, 0);
    }

    #[test]
    fn test_progress_percent() {
        assert_eq!(progress_percent(1), 2.5);
        assert_eq!(progress_percent(21), 52.5);
        assert_eq!(progress_percent(40), 100.0);
        assert_eq!(progress_percent(42), 100.0);
    }

    #[test]
    fn test_clamp_display_week() {
        assert_eq!(clamp_display_week(1), 1);
        assert_eq!(clamp_display_week(42), 42);
        assert_eq!(clamp_display_week(43), 42);
        assert_eq!(clamp_display_week(i64::MAX), 42);
    }

    #[test]
    fn test_lmp_window_matches_calculator() {
        let today = date(2026, 10, 16);
        for trimester in Trimester::ALL {
            let window = lmp_window_for_trimester(trimester, today).unwrap();
            for offset in 0..400u64 {
                let lmp = today - Days::new(offset);
                let state = compute_gestational_state(
                    &PregnancyAnchor::from_last_menstrual_period(lmp),
                    today,
                )
                .unwrap();
                assert_eq!(
                    window.contains(lmp),
                    state.trimester == trimester,
                    "offset {} trimester {:?}",
                    offset,
                    trimester
                );
            }
        }
    }
}
