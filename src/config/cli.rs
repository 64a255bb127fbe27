use crate::config::Settings;
use crate::domain::model::PregnancyAnchor;
use crate::domain::MAX_DISPLAY_WEEK;
use crate::utils::error::Result;
use crate::utils::validation::{parse_date, parse_utc_offset, validate_range};
use chrono::NaiveDate;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "pregnancy-tracker")]
#[command(about = "Show gestational week, trimester and development content for a pregnancy")]
pub struct CliConfig {
    /// Last menstrual period (YYYY-MM-DD)
    #[arg(long)]
    pub lmp: Option<String>,

    /// Estimated due date (YYYY-MM-DD), used when --lmp is not given
    #[arg(long)]
    pub due_date: Option<String>,

    /// Reference date (YYYY-MM-DD); defaults to today in the configured time zone
    #[arg(long)]
    pub as_of: Option<String>,

    /// Only show development content for this week
    #[arg(long)]
    pub week: Option<u32>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format: text or json
    #[arg(long)]
    pub format: Option<String>,

    /// UTC offset used to decide "today", e.g. +03:00
    #[arg(long, allow_hyphen_values = true)]
    pub utc_offset: Option<String>,

    /// TOML file with [[milestones]] entries
    #[arg(long)]
    pub milestones: Option<String>,

    /// Write a week-by-week schedule as CSV
    #[arg(long)]
    pub schedule_csv: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    pub fn anchor(&self) -> Result<PregnancyAnchor> {
        Ok(PregnancyAnchor {
            last_menstrual_period: self
                .lmp
                .as_deref()
                .map(|value| parse_date("last_menstrual_period", value))
                .transpose()?,
            due_date: self
                .due_date
                .as_deref()
                .map(|value| parse_date("due_date", value))
                .transpose()?,
        })
    }

    pub fn reference_date(&self) -> Result<Option<NaiveDate>> {
        self.as_of
            .as_deref()
            .map(|value| parse_date("as_of", value))
            .transpose()
    }

    pub fn requested_week(&self) -> Result<Option<u32>> {
        if let Some(week) = self.week {
            validate_range("week", week, 1, MAX_DISPLAY_WEEK)?;
        }
        Ok(self.week)
    }

    /// 命令列參數優先於設定檔
    pub fn apply_to(&self, settings: &mut Settings) -> Result<()> {
        if let Some(offset) = &self.utc_offset {
            settings.utc_offset = parse_utc_offset("utc_offset", offset)?;
        }
        if let Some(path) = &self.milestones {
            settings.milestones_file = Some(path.clone());
        }
        if let Some(format) = &self.format {
            settings.output_format = format.clone();
        }
        if let Some(path) = &self.schedule_csv {
            settings.schedule_csv = Some(path.clone());
        }
        if self.log_json {
            settings.json_logging = true;
        }
        Ok(())
    }
}
