use crate::domain::ports::Clock;
use chrono::{FixedOffset, NaiveDate, Utc};

/// 以部署時區計算「今天」
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    offset: FixedOffset,
}

impl SystemClock {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.offset).date_naive()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    today: NaiveDate,
}

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let day = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        assert_eq!(FixedClock::new(day).today(), day);
    }

    #[test]
    fn test_system_clock_follows_offset() {
        let east = SystemClock::new(FixedOffset::east_opt(14 * 3600).unwrap()).today();
        let west = SystemClock::new(FixedOffset::west_opt(12 * 3600).unwrap()).today();
        let gap = (east - west).num_days();
        assert!((0..=2).contains(&gap));
    }
}
