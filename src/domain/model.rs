use chrono::NaiveDate;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// 懷孕起算點：末次月經或預產期，兩者擇一即可
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PregnancyAnchor {
    pub last_menstrual_period: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
}

impl PregnancyAnchor {
    pub fn from_last_menstrual_period(lmp: NaiveDate) -> Self {
        Self {
            last_menstrual_period: Some(lmp),
            due_date: None,
        }
    }

    pub fn from_due_date(due_date: NaiveDate) -> Self {
        Self {
            last_menstrual_period: None,
            due_date: Some(due_date),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.last_menstrual_period.is_none() && self.due_date.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Trimester {
    First,
    Second,
    Third,
}

impl Trimester {
    pub const ALL: [Trimester; 3] = [Trimester::First, Trimester::Second, Trimester::Third];

    pub fn from_week(week: u32) -> Self {
        match week {
            0..=13 => Trimester::First,
            14..=26 => Trimester::Second,
            _ => Trimester::Third,
        }
    }

    pub fn number(self) -> u8 {
        match self {
            Trimester::First => 1,
            Trimester::Second => 2,
            Trimester::Third => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Trimester::First => "First Trimester",
            Trimester::Second => "Second Trimester",
            Trimester::Third => "Third Trimester",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Trimester::First => "Early development stage",
            Trimester::Second => "Golden trimester - feeling better!",
            Trimester::Third => "Final stretch - almost there!",
        }
    }

    /// 此孕期涵蓋的週數（含兩端）
    pub fn weeks(self) -> (u32, u32) {
        match self {
            Trimester::First => (1, 13),
            Trimester::Second => (14, 26),
            Trimester::Third => (27, super::MAX_DISPLAY_WEEK),
        }
    }
}

impl Serialize for Trimester {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Trimester", 3)?;
        state.serialize_field("number", &self.number())?;
        state.serialize_field("name", self.name())?;
        state.serialize_field("message", self.message())?;
        state.end()
    }
}

/// 某個參考日期下的孕期狀態，每次查詢重新計算，不落地保存
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GestationalState {
    pub week: u32,
    pub day_of_week: u32,
    pub total_days_pregnant: i64,
    pub weeks_completed: i64,
    pub progress_percent: f64,
    pub trimester: Trimester,
    pub estimated_due_date: NaiveDate,
    pub days_until_due: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevelopmentalMilestone {
    pub week: u32,
    pub title: String,
    pub size_comparison: String,
    pub approximate_weight: String,
    pub approximate_length: String,
    #[serde(default)]
    pub key_developments: Vec<String>,
    pub maternal_changes: String,
    #[serde(default)]
    pub health_tips: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JourneyStatus {
    Completed,
    Current,
    Upcoming,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JourneyCheckpoint {
    pub week: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub status: JourneyStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekScheduleRow {
    pub week: u32,
    pub starts_on: NaiveDate,
    pub ends_on: NaiveDate,
    pub trimester: u8,
    pub size_comparison: String,
}

/// 成長數據，僅供顯示
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GrowthFigures {
    pub week: u32,
    pub size_comparison: &'static str,
    pub approximate_weight: &'static str,
    pub approximate_length: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Patient,
    Clinician,
    Admin,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Role::Patient => "Patient",
            Role::Clinician => "Healthcare Provider",
            Role::Admin => "Administrator",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
}

impl User {
    pub fn full_name(&self) -> String {
        let full_name = format!("{} {}", self.first_name, self.last_name);
        let trimmed = full_name.trim();
        if trimmed.is_empty() {
            self.username.clone()
        } else {
            trimmed.to_string()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientProfile {
    pub role: Role,
    pub anchor: PregnancyAnchor,
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub phone_number: Option<String>,
}

impl PatientProfile {
    /// 足歲；生日未填或晚於 `today` 時為 `None`
    pub fn age_on(&self, today: NaiveDate) -> Option<u32> {
        self.date_of_birth
            .and_then(|date_of_birth| today.years_since(date_of_birth))
    }
}

/// 使用者與其個人檔案必須一起建立、一起存放
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub user: User,
    pub profile: PatientProfile,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trimester_boundaries() {
        assert_eq!(Trimester::from_week(1), Trimester::First);
        assert_eq!(Trimester::from_week(13), Trimester::First);
        assert_eq!(Trimester::from_week(14), Trimester::Second);
        assert_eq!(Trimester::from_week(26), Trimester::Second);
        assert_eq!(Trimester::from_week(27), Trimester::Third);
        assert_eq!(Trimester::from_week(42), Trimester::Third);
    }

    #[test]
    fn test_trimester_serializes_as_struct() {
        let json = serde_json::to_value(Trimester::Second).unwrap();
        assert_eq!(json["number"], 2);
        assert_eq!(json["name"], "Second Trimester");
        assert_eq!(json["message"], "Golden trimester - feeling better!");
    }

    #[test]
    fn test_full_name_falls_back_to_username() {
        let user = User {
            username: "wanjiku".to_string(),
            email: "wanjiku@example.com".to_string(),
            first_name: String::new(),
            last_name: String::new(),
            is_active: false,
        };
        assert_eq!(user.full_name(), "wanjiku");
    }

    #[test]
    fn test_age_counts_completed_years() {
        let profile = PatientProfile {
            role: Role::Patient,
            anchor: PregnancyAnchor::default(),
            date_of_birth: NaiveDate::from_ymd_opt(1995, 10, 17),
            phone_number: None,
        };

        assert_eq!(profile.age_on(NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()), Some(30));
        assert_eq!(profile.age_on(NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()), Some(31));
        assert_eq!(profile.age_on(NaiveDate::from_ymd_opt(1990, 1, 1).unwrap()), None);

        let unknown = PatientProfile {
            date_of_birth: None,
            ..profile
        };
        assert_eq!(unknown.age_on(NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()), None);
    }
}
