use crate::utils::error::{Result, TrackerError};
use chrono::{Days, FixedOffset, NaiveDate, Offset, Utc};
use regex::Regex;

/// 預產期最多可在今天之後多少天（約 46 週）
pub const MAX_DUE_DATE_LEAD_DAYS: u64 = 320;

/// 使用者最低年齡（以 365 天為一年計）
pub const MIN_AGE_YEARS: u64 = 12;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(TrackerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(TrackerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TrackerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(TrackerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(TrackerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Unsupported value. Valid values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

/// 解析 `YYYY-MM-DD` 格式日期
pub fn parse_date(field_name: &str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|e| {
        TrackerError::InvalidDateError {
            field: field_name.to_string(),
            reason: format!("'{}' is not a YYYY-MM-DD date ({})", value, e),
        }
    })
}

/// 解析 UTC 偏移，例如 `+03:00`、`-0530`、`Z`
pub fn parse_utc_offset(field_name: &str, value: &str) -> Result<FixedOffset> {
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("z") || trimmed.eq_ignore_ascii_case("utc") {
        return Ok(Utc.fix());
    }

    let re = Regex::new(r"^([+-])(\d{2}):?(\d{2})$").map_err(|e| TrackerError::ConfigError {
        message: e.to_string(),
    })?;

    let invalid = |reason: &str| TrackerError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    };

    let caps = re
        .captures(trimmed)
        .ok_or_else(|| invalid("Expected an offset like +03:00"))?;

    let hours: i32 = caps[2].parse().map_err(|_| invalid("Hours are not a number"))?;
    let minutes: i32 = caps[3]
        .parse()
        .map_err(|_| invalid("Minutes are not a number"))?;
    if hours > 14 || minutes > 59 {
        return Err(invalid("Offset must be within ±14:00"));
    }

    let seconds = (hours * 3600 + minutes * 60) * if &caps[1] == "-" { -1 } else { 1 };
    FixedOffset::east_opt(seconds).ok_or_else(|| invalid("Offset out of range"))
}

/// 預產期必須晚於今天，且不超過 320 天
pub fn validate_due_date(due_date: NaiveDate, today: NaiveDate) -> Result<()> {
    if due_date <= today {
        return Err(TrackerError::InvalidDateError {
            field: "due_date".to_string(),
            reason: "Due date must be in the future.".to_string(),
        });
    }

    let latest = today.checked_add_days(Days::new(MAX_DUE_DATE_LEAD_DAYS));
    if latest.is_none_or(|latest| due_date > latest) {
        return Err(TrackerError::InvalidDateError {
            field: "due_date".to_string(),
            reason: "Due date seems too far in the future.".to_string(),
        });
    }

    Ok(())
}

pub fn validate_last_menstrual_period(lmp: NaiveDate, today: NaiveDate) -> Result<()> {
    if lmp > today {
        return Err(TrackerError::InvalidDateError {
            field: "last_menstrual_period".to_string(),
            reason: "Last menstrual period cannot be in the future.".to_string(),
        });
    }
    Ok(())
}

pub fn validate_date_of_birth(date_of_birth: NaiveDate, today: NaiveDate) -> Result<()> {
    if date_of_birth >= today {
        return Err(TrackerError::InvalidDateError {
            field: "date_of_birth".to_string(),
            reason: "Date of birth must be in the past.".to_string(),
        });
    }

    let min_age_date = today.checked_sub_days(Days::new(MIN_AGE_YEARS * 365));
    if min_age_date.is_none_or(|min_age_date| date_of_birth > min_age_date) {
        return Err(TrackerError::InvalidDateError {
            field: "date_of_birth".to_string(),
            reason: format!("User must be at least {} years old.", MIN_AGE_YEARS),
        });
    }

    Ok(())
}

/// 使用者輸入的必填欄位
pub fn validate_required_text(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TrackerError::ValidationError {
            message: format!("{} is required", field_name.replace('_', " ")),
        });
    }
    Ok(())
}

/// 至少 10 個字元，可含開頭的 `+`、空白、`-` 與括號
pub fn validate_phone_number(field_name: &str, phone: &str) -> Result<()> {
    let re = Regex::new(r"^\+?[\d\s\-\(\)]{10,}$").map_err(|e| TrackerError::ConfigError {
        message: e.to_string(),
    })?;

    if !re.is_match(phone) {
        return Err(TrackerError::ValidationError {
            message: format!("{} '{}' is not a valid phone number", field_name, phone),
        });
    }
    Ok(())
}

pub fn validate_email(field_name: &str, email: &str) -> Result<()> {
    let re = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").map_err(|e| TrackerError::ConfigError {
        message: e.to_string(),
    })?;

    if !re.is_match(email.trim()) {
        return Err(TrackerError::ValidationError {
            message: format!("{} '{}' is not a valid e-mail address", field_name, email),
        });
    }
    Ok(())
}
